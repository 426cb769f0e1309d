//! Job update builder.

use placement_core::enums::DegreeLevel;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct JobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_level: Option<DegreeLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,
}

impl JobUpdate {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub struct JobUpdateBuilder(JobUpdate);

impl JobUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(JobUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.0.company = Some(company.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    #[must_use]
    pub const fn degree_level(mut self, degree_level: DegreeLevel) -> Self {
        self.0.degree_level = Some(degree_level);
        self
    }

    #[must_use]
    pub fn requirements(mut self, requirements: Vec<String>) -> Self {
        self.0.requirements = Some(requirements);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn salary_range(mut self, salary_range: impl Into<String>) -> Self {
        self.0.salary_range = Some(salary_range.into());
        self
    }

    #[must_use]
    pub fn application_url(mut self, application_url: impl Into<String>) -> Self {
        self.0.application_url = Some(application_url.into());
        self
    }

    #[must_use]
    pub fn build(self) -> JobUpdate {
        self.0
    }
}

impl Default for JobUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn only_set_fields_are_serialized() {
        let update = JobUpdateBuilder::new()
            .title("Senior QA")
            .degree_level(DegreeLevel::Master)
            .build();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"title": "Senior QA", "degree_level": "Master"})
        );
    }

    #[test]
    fn empty_string_is_still_sent() {
        let update = JobUpdateBuilder::new().salary_range("").build();
        assert!(!update.is_empty());
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"salary_range": ""})
        );
    }

    #[test]
    fn default_is_empty() {
        assert!(JobUpdateBuilder::new().build().is_empty());
    }
}
