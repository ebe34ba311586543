use tracing::debug;
use url::Url;

use crate::config::OAuthConfig;
use crate::oauth::{pkce, OAuthSetupError};

/// Everything the caller needs to start an authorization flow: the redirect
/// URL plus the values it must persist (short-lived session or similar) to
/// validate the callback and complete the token exchange.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub url: String,
    pub code_verifier: String,
    pub state: String,
}

fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str, OAuthSetupError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OAuthSetupError::MissingConfig(name));
    }
    Ok(trimmed)
}

/// Build the provider authorization URL for an S256 PKCE flow.
///
/// Historically the verifier doubled as the `state` parameter. That conflates
/// a CSRF token with the proof-of-possession secret, so `separate_state`
/// opts into an independently generated state value; the default keeps the
/// original URL shape for providers configured against it.
pub fn build_authorization_url(
    cfg: &OAuthConfig,
) -> Result<AuthorizationRequest, OAuthSetupError> {
    let endpoint = require(&cfg.authorization_endpoint, "authorization_endpoint")?;
    let client_id = require(&cfg.client_id, "client_id")?;
    let redirect_uri = require(&cfg.redirect_uri, "redirect_uri")?;
    let scope = require(&cfg.scope, "scope")?;
    let method = require(&cfg.code_challenge_method, "code_challenge_method")?;

    let verifier = pkce::generate_code_verifier()?;
    let challenge = pkce::code_challenge_s256(&verifier);
    let state = if cfg.separate_state {
        pkce::generate_code_verifier()?
    } else {
        verifier.clone()
    };

    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("redirect_uri", redirect_uri)
        .append_pair("response_type", "code")
        .append_pair("scope", scope)
        .append_pair("state", &state)
        .append_pair("code_challenge", &challenge)
        .append_pair("code_challenge_method", method);

    debug!(endpoint = %endpoint, "assembled authorization url");

    Ok(AuthorizationRequest {
        url: url.to_string(),
        code_verifier: verifier,
        state,
    })
}
