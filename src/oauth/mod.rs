pub mod authorize;
pub mod pkce;

use crate::random::RandomError;

/// Any failure while preparing an authorization redirect. Callers show a
/// generic "failed to start bank connection" message and inspect the source
/// for diagnostics; nothing here is retried locally.
#[derive(Debug, thiserror::Error)]
pub enum OAuthSetupError {
    #[error("missing required oauth setting: {0}")]
    MissingConfig(&'static str),
    #[error("invalid authorization endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("secure random draw failed: {0}")]
    Random(#[from] RandomError),
}
