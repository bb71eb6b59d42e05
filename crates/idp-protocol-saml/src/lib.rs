//! SAML 2.0 identity provider leg of the Web Browser SSO profile.
//!
//! This crate receives an `AuthnRequest` over the HTTP-Redirect binding and
//! answers with a `Response` over the HTTP-POST binding:
//!
//! - **Encoding** - base64 and raw DEFLATE primitives
//! - **AuthnRequest parsing** - ID, ACS URL, issue instant and issuer
//! - **Response generation** - a templated, unsigned `samlp:Response`
//! - **POST form rendering** - the auto-submitting HTML form
//!
//! Responses carry an empty `Signature` placeholder; nothing in this crate
//! signs or verifies XML.
//!
//! # Architecture
//!
//! - [`types`] - Core SAML types and data structures
//! - [`bindings`] - POST and Redirect binding implementations
//! - [`endpoints`] - Axum HTTP handler and the profile provider seam
//! - [`error`] - Error types for SAML operations
//!
//! # Example
//!
//! ```rust,ignore
//! use idp_protocol_saml::endpoints::{saml_router, SamlState};
//!
//! let app = saml_router().with_state(SamlState::new(profile_provider));
//! ```
//!
//! # SAML Specifications
//!
//! - [SAML 2.0 Core](https://docs.oasis-open.org/security/saml/v2.0/saml-core-2.0-os.pdf)
//! - [SAML 2.0 Bindings](https://docs.oasis-open.org/security/saml/v2.0/saml-bindings-2.0-os.pdf)
//! - [SAML 2.0 Profiles](https://docs.oasis-open.org/security/saml/v2.0/saml-profiles-2.0-os.pdf)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bindings;
pub mod endpoints;
pub mod error;
pub mod types;

pub use error::{PipelineStage, SamlError, SamlResult};
pub use types::*;
