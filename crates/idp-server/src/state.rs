//! Application state management.
//!
//! This module defines the shared state that is passed to all request handlers.

use std::sync::Arc;

use idp_protocol_saml::endpoints::{ProfileProvider, SamlState};

use crate::providers::StaticProfileProvider;

/// Application state shared across all request handlers.
pub struct AppState<P = StaticProfileProvider>
where
    P: ProfileProvider,
{
    /// Source of the asserted identity.
    pub profiles: Arc<P>,
}

impl<P: ProfileProvider> AppState<P> {
    /// Creates a new application state.
    pub fn new(profiles: Arc<P>) -> Self {
        Self { profiles }
    }

    /// Gets the SAML state for the protocol endpoints.
    pub fn saml_state(&self) -> SamlState<P> {
        SamlState::new(Arc::clone(&self.profiles))
    }
}

impl<P: ProfileProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            profiles: Arc::clone(&self.profiles),
        }
    }
}
