//! Product variant search core.
//!
//! Everything the frontend needs to talk to the variant search endpoint
//! without touching the browser: keyword normalization, URL construction,
//! the wire format of the response, and the hit cap. Kept free of wasm
//! dependencies so it builds and tests on the host.

mod hit;
#[cfg(test)]
mod hit_test;
mod keyword;
#[cfg(test)]
mod keyword_test;
#[cfg(test)]
mod mod_test;

pub use hit::{MalformedResponse, VariantHit, format_price, parse_hits};
pub use keyword::Keyword;

/// Maximum number of hits any caller ever sees, regardless of how many
/// the endpoint returns.
pub const MAX_HITS: usize = 5;

/// Path of the variant search endpoint, relative to the API base.
pub const SEARCH_PATH: &str = "/user/api/variants/search";

/// Build the full search URL for `keyword` against `base`.
pub fn search_url(base: &str, keyword: &Keyword) -> String {
    format!(
        "{}{}?keyword={}",
        base.trim_end_matches('/'),
        SEARCH_PATH,
        keyword.encoded()
    )
}
