//! SAML endpoint handlers.
//!
//! This module provides the Axum HTTP handler for the SSO endpoint, which
//! receives HTTP-Redirect `AuthnRequest`s on any path.
//!
//! # Example
//!
//! ```rust,ignore
//! use idp_protocol_saml::endpoints::{saml_router, SamlState};
//!
//! let app = saml_router().with_state(SamlState::new(profile_provider));
//! ```

mod router;
mod sso;
mod state;

pub use router::*;
pub use sso::*;
pub use state::*;
