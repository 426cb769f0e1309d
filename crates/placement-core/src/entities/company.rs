use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A hiring company listed on the site.
///
/// Partner companies are the ones actively referred for placements.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub industry: String,
    /// Free-text headcount band, e.g. `"1000-5000"`.
    pub employees: String,
    pub placement_count: u32,
    pub website_url: Option<String>,
    pub is_partner: bool,
}

const fn default_partner() -> bool {
    true
}

/// Fields supplied by the caller when creating a company.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: String,
    pub logo: String,
    pub description: String,
    pub industry: String,
    pub employees: String,
    #[serde(default)]
    pub placement_count: u32,
    #[serde(default)]
    pub website_url: Option<String>,
    /// New companies are listed as partners unless stated otherwise.
    #[serde(default = "default_partner")]
    pub is_partner: bool,
}
