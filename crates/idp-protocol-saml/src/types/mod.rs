//! SAML 2.0 types and data structures.
//!
//! This module contains the request, profile and response types that flow
//! through the SSO pipeline.

mod authn_request;
mod constants;
mod profile;
mod response;

pub use authn_request::*;
pub use constants::*;
pub use profile::*;
pub use response::*;
