//! Per-table repositories.
//!
//! Each module adds methods to `RecordStore` via `impl RecordStore` blocks.

pub mod companies;
pub mod jobs;
pub mod testimonials;

#[cfg(test)]
pub(crate) mod fixtures {
    use placement_core::entities::{NewCompany, NewJob, NewTestimonial};
    use placement_core::enums::DegreeLevel;

    use crate::memory::MemoryBackend;
    use crate::service::RecordStore;

    pub fn store() -> RecordStore<MemoryBackend> {
        RecordStore::new(MemoryBackend::new())
    }

    pub fn new_job(title: &str, company: &str, degree_level: DegreeLevel) -> NewJob {
        NewJob {
            title: title.into(),
            company: company.into(),
            location: "Pune".into(),
            degree_level,
            requirements: vec!["Communication".into()],
            description: "Entry level role".into(),
            salary_range: "3-5 LPA".into(),
            application_url: String::new(),
        }
    }

    pub fn new_company(name: &str, placement_count: u32, is_partner: bool) -> NewCompany {
        NewCompany {
            name: name.into(),
            logo: format!("https://cdn.example/{name}.png"),
            description: "IT services".into(),
            industry: "IT".into(),
            employees: "1000-5000".into(),
            placement_count,
            website_url: None,
            is_partner,
        }
    }

    pub fn new_testimonial(name: &str, is_featured: bool) -> NewTestimonial {
        NewTestimonial {
            name: name.into(),
            role: "Software Engineer".into(),
            company: "Infosys".into(),
            message: "The training got me placed.".into(),
            image: String::new(),
            is_featured,
        }
    }
}
