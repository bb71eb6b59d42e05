//! SAML bindings implementation.
//!
//! This module implements the SAML 2.0 bindings used by the SSO leg:
//!
//! - **HTTP-Redirect Binding** - inbound `AuthnRequest`, deflated and base64-encoded in the URL
//! - **HTTP-POST Binding** - outbound `Response`, base64-encoded in an auto-submitting form
//!
//! # Usage
//!
//! ```rust,ignore
//! use idp_protocol_saml::bindings::{HttpPostBinding, HttpRedirectBinding};
//!
//! let xml = HttpRedirectBinding::decode_request(Some(saml_request))?;
//! let html = HttpPostBinding::render_form(&encoded_response, acs_url)?;
//! ```

mod encoding;
mod post;
mod redirect;

pub use encoding::*;
pub use post::*;
pub use redirect::*;

/// SAML message type for binding operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamlMessageType {
    /// AuthnRequest message.
    Request,
    /// Response message.
    Response,
}

impl SamlMessageType {
    /// Returns the form parameter name for this message type.
    #[must_use]
    pub const fn form_param(&self) -> &'static str {
        match self {
            Self::Request => "SAMLRequest",
            Self::Response => "SAMLResponse",
        }
    }
}
