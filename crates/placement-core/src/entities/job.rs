use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DegreeLevel;

/// Placeholder application URL meaning "apply through the company page".
pub const NO_DIRECT_LINK: &str = "#apply";

/// A published job posting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub degree_level: DegreeLevel,
    pub requirements: Vec<String>,
    pub description: String,
    pub salary_range: String,
    pub posted_date: NaiveDate,
    pub application_url: String,
}

impl Job {
    /// The external application link, if the posting has a real one.
    ///
    /// Empty URLs and the `#apply` placeholder both mean there is no direct link.
    #[must_use]
    pub fn application_link(&self) -> Option<&str> {
        let url = self.application_url.trim();
        if url.is_empty() || url == NO_DIRECT_LINK {
            None
        } else {
            Some(url)
        }
    }
}

/// Fields supplied by the caller when creating a job.
///
/// `id` and `posted_date` are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub degree_level: DegreeLevel,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub description: String,
    pub salary_range: String,
    #[serde(default)]
    pub application_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_with_url(url: &str) -> Job {
        Job {
            id: "1".into(),
            title: "Backend Engineer".into(),
            company: "Acme".into(),
            location: "Pune".into(),
            degree_level: DegreeLevel::Bachelor,
            requirements: vec![],
            description: String::new(),
            salary_range: String::new(),
            posted_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            application_url: url.into(),
        }
    }

    #[test]
    fn application_link_ignores_placeholders() {
        assert_eq!(job_with_url("").application_link(), None);
        assert_eq!(job_with_url("#apply").application_link(), None);
        assert_eq!(job_with_url("  ").application_link(), None);
        assert_eq!(
            job_with_url("https://acme.example/careers").application_link(),
            Some("https://acme.example/careers")
        );
    }

    #[test]
    fn job_serializes_camel_case() {
        let value = serde_json::to_value(job_with_url("#apply")).unwrap();
        assert_eq!(value["degreeLevel"], "Bachelor");
        assert_eq!(value["salaryRange"], "");
        assert_eq!(value["postedDate"], "2025-01-15");
        assert!(value.get("degree_level").is_none());
    }
}
