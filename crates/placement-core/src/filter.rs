//! Job listing filter.
//!
//! A job matches when the degree filter accepts its level and, for a
//! non-empty search, the search text occurs case-insensitively in its title,
//! company, or location. Input order is preserved.

use crate::entities::Job;
use crate::enums::DegreeFilter;

/// Return the jobs matching `search` and `degree`, in input order.
#[must_use]
pub fn filter_jobs<'a>(jobs: &'a [Job], search: &str, degree: DegreeFilter) -> Vec<&'a Job> {
    let needle = search.to_lowercase();
    jobs.iter()
        .filter(|job| matches_with_needle(job, &needle, degree))
        .collect()
}

/// Check a single job against the filter predicate.
#[must_use]
pub fn matches(job: &Job, search: &str, degree: DegreeFilter) -> bool {
    matches_with_needle(job, &search.to_lowercase(), degree)
}

fn matches_with_needle(job: &Job, needle: &str, degree: DegreeFilter) -> bool {
    if !degree.accepts(job.degree_level) {
        return false;
    }
    needle.is_empty()
        || [&job.title, &job.company, &job.location]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
}
