//! SAML router configuration.

use axum::{routing::get, Router};

use super::sso::sso_redirect;
use super::state::{ProfileProvider, SamlState};

/// Creates the SAML protocol router.
///
/// Every path answers `GET` with the SSO redirect handler; other methods get
/// `405 Method Not Allowed`.
///
/// ```rust,ignore
/// let app = saml_router().with_state(SamlState::new(provider));
/// ```
pub fn saml_router<P: ProfileProvider>() -> Router<SamlState<P>> {
    Router::new()
        .route("/", get(sso_redirect::<P>))
        .route("/{*path}", get(sso_redirect::<P>))
}
