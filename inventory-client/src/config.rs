use crate::candidates::{CandidateChain, LOCAL_URL, PRODUCTION_URL};
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Answer every operation from the in-memory store.
    pub mock: bool,
    /// Base addresses in priority order.
    pub candidates: Vec<String>,
    /// When false only the first candidate is tried.
    pub retry_local: bool,
    pub session_path: PathBuf,
    /// Identity-provider ID token forwarded as the bearer credential.
    pub id_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mock: true,
            candidates: vec![PRODUCTION_URL.to_string(), LOCAL_URL.to_string()],
            retry_local: true,
            session_path: PathBuf::from("inventory-session.json"),
            id_token: None,
        }
    }
}

impl ClientConfig {
    /// Reads `INVENTORY_MOCK`, `INVENTORY_BACKEND_URLS` (comma separated),
    /// `INVENTORY_RETRY_LOCAL`, `INVENTORY_SESSION` and `INVENTORY_ID_TOKEN`,
    /// falling back to defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(flag) = lookup("INVENTORY_MOCK").as_deref().and_then(parse_bool) {
            config.mock = flag;
        }
        if let Some(urls) = lookup("INVENTORY_BACKEND_URLS") {
            let urls: Vec<String> = urls
                .split(',')
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(ToString::to_string)
                .collect();
            if !urls.is_empty() {
                config.candidates = urls;
            }
        }
        if let Some(flag) = lookup("INVENTORY_RETRY_LOCAL").as_deref().and_then(parse_bool) {
            config.retry_local = flag;
        }
        if let Some(path) = lookup("INVENTORY_SESSION") {
            config.session_path = PathBuf::from(path);
        }
        config.id_token = lookup("INVENTORY_ID_TOKEN");

        config
    }

    pub fn chain(&self) -> CandidateChain {
        if self.retry_local {
            CandidateChain::new(self.candidates.iter().cloned())
        } else {
            CandidateChain::new(self.candidates.iter().take(1).cloned())
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
