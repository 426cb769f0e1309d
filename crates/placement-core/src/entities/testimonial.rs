use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A placed student's testimonial.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub message: String,
    pub image: String,
    pub is_featured: bool,
}

const fn default_featured() -> bool {
    true
}

/// Fields supplied by the caller when creating a testimonial.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub message: String,
    pub image: String,
    #[serde(default = "default_featured")]
    pub is_featured: bool,
}
