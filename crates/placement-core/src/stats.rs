//! Dashboard statistics.
//!
//! Derived from already-fetched records; no I/O here.

use std::collections::HashSet;

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::entities::{Company, Job};
use crate::enums::DegreeLevel;

/// Jobs posted within this many days count as recent.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Job counts per degree level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DegreeBreakdown {
    pub diploma: usize,
    pub bachelor: usize,
    pub master: usize,
}

impl DegreeBreakdown {
    fn record(&mut self, level: DegreeLevel) {
        match level {
            DegreeLevel::Diploma => self.diploma += 1,
            DegreeLevel::Bachelor => self.bachelor += 1,
            DegreeLevel::Master => self.master += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub total: usize,
    /// Jobs created in the last [`RECENT_WINDOW_DAYS`] days.
    pub recent: usize,
    /// Distinct hiring company names across all postings.
    pub companies: usize,
    pub degree_breakdown: DegreeBreakdown,
}

impl JobStats {
    /// Tally the given jobs relative to `today`, dating each by `posted_date`.
    #[must_use]
    pub fn from_jobs(jobs: &[Job], today: NaiveDate) -> Self {
        Self::tally(jobs.iter().map(|job| (job, job.posted_date)), today)
    }

    /// Tally jobs paired with the day each one counts from for recency.
    ///
    /// The store pairs rows with their `created_at` day.
    #[must_use]
    pub fn tally<'a>(
        jobs: impl IntoIterator<Item = (&'a Job, NaiveDate)>,
        today: NaiveDate,
    ) -> Self {
        let cutoff = today - TimeDelta::days(RECENT_WINDOW_DAYS);
        let mut stats = Self::default();
        let mut companies = HashSet::new();
        for (job, dated) in jobs {
            stats.total += 1;
            if dated >= cutoff {
                stats.recent += 1;
            }
            companies.insert(job.company.as_str());
            stats.degree_breakdown.record(job.degree_level);
        }
        stats.companies = companies.len();
        stats
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStats {
    pub total_companies: usize,
    pub total_placements: u64,
    pub active_partners: usize,
}

impl CompanyStats {
    #[must_use]
    pub fn from_companies(companies: &[Company]) -> Self {
        Self {
            total_companies: companies.len(),
            total_placements: companies
                .iter()
                .map(|company| u64::from(company.placement_count))
                .sum(),
            active_partners: companies.iter().filter(|company| company.is_partner).count(),
        }
    }
}
