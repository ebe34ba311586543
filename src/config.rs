use serde::Deserialize;
use std::collections::BTreeMap;

/// OAuth settings for one external provider (bank or accounting service).
/// `build_authorization_url` rejects empty required fields at call time, so
/// a partially filled table parses but fails loudly when used.
#[derive(Debug, Deserialize, Clone)]
pub struct OAuthConfig {
    #[serde(default)]
    pub authorization_endpoint: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub redirect_uri: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_challenge_method")]
    pub code_challenge_method: String,
    /// Generate a state value independent from the PKCE verifier instead of
    /// reusing the verifier as state.
    #[serde(default)]
    pub separate_state: bool,
}

fn default_challenge_method() -> String { "S256".into() }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Providers keyed by name, e.g. `[providers.ponto]`.
    #[serde(default)]
    pub providers: BTreeMap<String, OAuthConfig>,
}

impl Config {
    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&s)?;
        Ok(cfg)
    }

    pub fn provider(&self, name: &str) -> Option<&OAuthConfig> {
        self.providers.get(name)
    }
}
