use std::fmt;

/// A search keyword with surrounding whitespace removed.
///
/// Blank input is not a keyword: [`Keyword::parse`] returns `None` for
/// empty or whitespace-only strings, and callers use that to clear their
/// results without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    /// Parse raw input into a keyword, trimming surrounding whitespace.
    /// Interior whitespace is preserved.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form, safe to splice into a query string.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
