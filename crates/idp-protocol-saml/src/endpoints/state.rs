//! SAML endpoint state management.

use std::sync::Arc;

use crate::types::{AuthnRequest, Profile};

/// SAML endpoint state.
///
/// Contains the services needed by SAML endpoints.
pub struct SamlState<P>
where
    P: ProfileProvider,
{
    /// Provider of the identity to assert.
    pub profile_provider: Arc<P>,
}

impl<P: ProfileProvider> SamlState<P> {
    /// Creates a new SAML state.
    pub fn new(profile_provider: Arc<P>) -> Self {
        Self { profile_provider }
    }
}

impl<P: ProfileProvider> Clone for SamlState<P> {
    fn clone(&self) -> Self {
        Self {
            profile_provider: Arc::clone(&self.profile_provider),
        }
    }
}

/// Supplies the authenticated identity for an inbound request.
///
/// This is the seam where real authentication plugs in; the pipeline only
/// needs a [`Profile`] back.
#[async_trait::async_trait]
pub trait ProfileProvider: Send + Sync + 'static {
    /// Returns the profile to assert in the response to `request`.
    async fn profile_for(&self, request: &AuthnRequest) -> Result<Profile, ProfileError>;
}

/// Error type for profile provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// No identity is available for this request.
    #[error("no authenticated subject: {0}")]
    NotAuthenticated(String),
}
