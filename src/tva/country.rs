use serde::{Deserialize, Serialize};

/// Countries a TVA number can be derived for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Country {
    /// France (`FR`).
    #[serde(rename = "FR")]
    France,
}

impl Country {
    /// Match a country code or name, ignoring ASCII case. Accepts "FR" and
    /// "FRANCE"; surrounding whitespace is not stripped.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("FR") || value.eq_ignore_ascii_case("FRANCE") {
            Some(Self::France)
        } else {
            None
        }
    }

    /// ISO 3166-1 alpha-2 prefix used in the TVA number.
    pub fn code(self) -> &'static str {
        match self {
            Self::France => "FR",
        }
    }
}
