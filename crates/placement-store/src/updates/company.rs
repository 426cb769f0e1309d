//! Company update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_count: Option<u32>,
    /// `Some(None)` clears the website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_partner: Option<bool>,
}

impl CompanyUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub struct CompanyUpdateBuilder(CompanyUpdate);

impl CompanyUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CompanyUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn logo(mut self, logo: impl Into<String>) -> Self {
        self.0.logo = Some(logo.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn industry(mut self, industry: impl Into<String>) -> Self {
        self.0.industry = Some(industry.into());
        self
    }

    #[must_use]
    pub fn employees(mut self, employees: impl Into<String>) -> Self {
        self.0.employees = Some(employees.into());
        self
    }

    #[must_use]
    pub const fn placement_count(mut self, placement_count: u32) -> Self {
        self.0.placement_count = Some(placement_count);
        self
    }

    #[must_use]
    pub fn website_url(mut self, website_url: Option<String>) -> Self {
        self.0.website_url = Some(website_url);
        self
    }

    #[must_use]
    pub const fn is_partner(mut self, is_partner: bool) -> Self {
        self.0.is_partner = Some(is_partner);
        self
    }

    #[must_use]
    pub fn build(self) -> CompanyUpdate {
        self.0
    }
}

impl Default for CompanyUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
