use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::MAX_HITS;

/// One row of a variant search response.
///
/// The endpoint returns bare JSON tuples, `[id, name, image_url, price]`,
/// rather than objects. `RawHit` mirrors that wire shape; `VariantHit` is
/// the named form the rest of the crate works with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHit")]
pub struct VariantHit {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: f64,
}

#[derive(Deserialize)]
struct RawHit(String, String, String, f64);

impl From<RawHit> for VariantHit {
    fn from(raw: RawHit) -> Self {
        let RawHit(id, name, image_url, price) = raw;
        Self {
            id,
            name,
            image_url,
            price,
        }
    }
}

/// A search response body that does not match the expected
/// list-of-tuples shape.
#[derive(Debug, Error)]
#[error("malformed search response: {0}")]
pub struct MalformedResponse(#[from] serde_json::Error);

/// Decode a search response body, keeping at most [`MAX_HITS`] entries
/// in server order.
///
/// The whole body is validated before any hit is handed out, so a
/// malformed row can never surface mid-render.
pub fn parse_hits(body: &str) -> Result<Vec<VariantHit>, MalformedResponse> {
    let mut hits: Vec<VariantHit> = serde_json::from_str(body)?;
    hits.truncate(MAX_HITS);
    Ok(hits)
}

/// Render a price the way the storefront displays it: thousands grouped
/// with dots, VND suffix. Prices are whole dong; fractions are rounded.
pub fn format_price(price: f64) -> String {
    let whole = price.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }
    format!("{grouped} VND")
}
