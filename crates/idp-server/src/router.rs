//! Router configuration.
//!
//! Every GET path is the SSO endpoint; there is nothing else to serve.

use axum::Router;
use tower_http::trace::TraceLayer;

use idp_protocol_saml::endpoints::{saml_router, ProfileProvider};

use crate::state::AppState;

/// Creates the main application router.
pub fn create_router<P: ProfileProvider>(state: AppState<P>) -> Router {
    let saml = saml_router().with_state(state.saml_state());

    Router::new().merge(saml).layer(TraceLayer::new_for_http())
}
