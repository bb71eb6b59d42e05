//! Profile provider implementations for the server.

use async_trait::async_trait;
use idp_protocol_saml::endpoints::{ProfileError, ProfileProvider};
use idp_protocol_saml::{AuthnRequest, Profile};

/// Asserts the same profile for every request.
///
/// There is no login step: whoever reaches the SSO endpoint is this user.
#[derive(Debug, Clone)]
pub struct StaticProfileProvider {
    profile: Profile,
}

impl StaticProfileProvider {
    /// Creates a provider that always returns `profile`.
    #[must_use]
    pub const fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Returns the asserted profile.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl Default for StaticProfileProvider {
    fn default() -> Self {
        Self::new(Profile {
            id: "U001".to_string(),
            email: "user1@example.com".to_string(),
            username: "user1".to_string(),
            first_name: "User".to_string(),
            last_name: "One".to_string(),
            nick_name: String::new(),
            locale: "en".to_string(),
        })
    }
}

#[async_trait]
impl ProfileProvider for StaticProfileProvider {
    async fn profile_for(&self, request: &AuthnRequest) -> Result<Profile, ProfileError> {
        tracing::debug!(request_id = %request.id, subject = %self.profile.id, "asserting static profile");
        Ok(self.profile.clone())
    }
}
