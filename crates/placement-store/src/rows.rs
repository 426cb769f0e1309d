//! Storage-cased row shapes and their translation to domain records.
//!
//! Row structs mirror the backend tables column for column (snake_case).
//! Domain structs in `placement-core` serialize camelCase, so every read goes
//! row -> domain here and every write goes domain -> insert payload here.

use placement_core::entities::{
    Company, Job, NewCompany, NewJob, NewTestimonial, Testimonial,
};
use placement_core::enums::{AdminRole, DegreeLevel};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::helpers::parse_date;

// ---------------------------------------------------------------------------
// jobs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct JobRow {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub degree_level: DegreeLevel,
    #[serde(default)]
    pub requirements: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub application_url: Option<String>,
    pub posted_date: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TryFrom<JobRow> for Job {
    type Error = StoreError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(Self {
            posted_date: parse_date(&row.posted_date)?,
            id: row.id,
            title: row.title,
            company: row.company,
            location: row.location,
            degree_level: row.degree_level,
            requirements: row.requirements.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            salary_range: row.salary_range.unwrap_or_default(),
            application_url: row.application_url.unwrap_or_default(),
        })
    }
}

/// Insert payload for `jobs`. `id`, `posted_date` and timestamps are left to the backend.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobInsert<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub degree_level: DegreeLevel,
    pub requirements: &'a [String],
    pub description: &'a str,
    pub salary_range: &'a str,
    pub application_url: &'a str,
}

impl<'a> From<&'a NewJob> for JobInsert<'a> {
    fn from(job: &'a NewJob) -> Self {
        Self {
            title: &job.title,
            company: &job.company,
            location: &job.location,
            degree_level: job.degree_level,
            requirements: &job.requirements,
            description: &job.description,
            salary_range: &job.salary_range,
            application_url: &job.application_url,
        }
    }
}

// ---------------------------------------------------------------------------
// companies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub employees: Option<String>,
    #[serde(default)]
    pub placement_count: Option<u32>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub is_partner: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            logo: row.logo.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            industry: row.industry.unwrap_or_default(),
            employees: row.employees.unwrap_or_default(),
            placement_count: row.placement_count.unwrap_or_default(),
            website_url: row.website_url.filter(|url| !url.is_empty()),
            is_partner: row.is_partner.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompanyInsert<'a> {
    pub name: &'a str,
    pub logo: &'a str,
    pub description: &'a str,
    pub industry: &'a str,
    pub employees: &'a str,
    pub placement_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<&'a str>,
    pub is_partner: bool,
}

impl<'a> From<&'a NewCompany> for CompanyInsert<'a> {
    fn from(company: &'a NewCompany) -> Self {
        Self {
            name: &company.name,
            logo: &company.logo,
            description: &company.description,
            industry: &company.industry,
            employees: &company.employees,
            placement_count: company.placement_count,
            website_url: company.website_url.as_deref(),
            is_partner: company.is_partner,
        }
    }
}

// ---------------------------------------------------------------------------
// testimonials
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<TestimonialRow> for Testimonial {
    fn from(row: TestimonialRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            role: row.role.unwrap_or_default(),
            company: row.company.unwrap_or_default(),
            message: row.message.unwrap_or_default(),
            image: row.image.unwrap_or_default(),
            is_featured: row.is_featured.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TestimonialInsert<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub company: &'a str,
    pub message: &'a str,
    pub image: &'a str,
    pub is_featured: bool,
}

impl<'a> From<&'a NewTestimonial> for TestimonialInsert<'a> {
    fn from(testimonial: &'a NewTestimonial) -> Self {
        Self {
            name: &testimonial.name,
            role: &testimonial.role,
            company: &testimonial.company,
            message: &testimonial.message,
            image: &testimonial.image,
            is_featured: testimonial.is_featured,
        }
    }
}

// ---------------------------------------------------------------------------
// admin_users
// ---------------------------------------------------------------------------

/// Row of the `admin_users` table.
///
/// Part of the hosted schema but not read by the login path, which relies on
/// the backend's own session identity.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUserRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: AdminRole,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
