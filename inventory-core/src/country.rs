use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Denmark,
    Finland,
    Iceland,
    Norway,
    Sweden,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::Denmark,
        Country::Finland,
        Country::Iceland,
        Country::Norway,
        Country::Sweden,
    ];

    /// Lowercase key used by inventory rows and regional tables.
    pub fn key(self) -> &'static str {
        match self {
            Country::Denmark => "denmark",
            Country::Finland => "finland",
            Country::Iceland => "iceland",
            Country::Norway => "norway",
            Country::Sweden => "sweden",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Country::Denmark => "Denmark",
            Country::Finland => "Finland",
            Country::Iceland => "Iceland",
            Country::Norway => "Norway",
            Country::Sweden => "Sweden",
        }
    }

    /// ISO 3166 alpha-2 code.
    pub fn code(self) -> &'static str {
        match self {
            Country::Denmark => "DK",
            Country::Finland => "FI",
            Country::Iceland => "IS",
            Country::Norway => "NO",
            Country::Sweden => "SE",
        }
    }

    pub fn capital(self) -> &'static str {
        match self {
            Country::Denmark => "Copenhagen",
            Country::Finland => "Helsinki",
            Country::Iceland => "Reykjavik",
            Country::Norway => "Oslo",
            Country::Sweden => "Stockholm",
        }
    }

    pub fn from_code_or_name(value: &str) -> Option<Country> {
        let value = value.trim();
        Country::ALL.into_iter().find(|c| {
            c.code().eq_ignore_ascii_case(value) || c.key().eq_ignore_ascii_case(value)
        })
    }
}

/// Normalises a country code or name into the lowercase lookup key.
///
/// Known two-letter codes map to the full name; anything else passes
/// through lowercased, so an unknown country simply finds no data.
pub fn resolve(code_or_name: &str) -> String {
    match Country::from_code_or_name(code_or_name) {
        Some(country) => country.key().to_string(),
        None => code_or_name.trim().to_lowercase(),
    }
}
