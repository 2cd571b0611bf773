use serde::{Deserialize, Serialize};

pub use vitrine::search::VariantHit;

/// Variant detail response from API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: f64,
    pub description: Option<String>,
}
