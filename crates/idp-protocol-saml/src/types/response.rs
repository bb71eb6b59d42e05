//! SAML Response generation.
//!
//! Responses are rendered from a fixed-shape template. The `Signature`
//! element is an empty placeholder: nothing here signs or canonicalizes.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::bindings::encode_base64;
use crate::error::SamlResult;

use super::{
    Profile, AC_PASSWORD, ATTRNAME_FORMAT_BASIC, CM_BEARER, NAMEID_FORMAT_ENTITY,
    NAMEID_FORMAT_UNSPECIFIED, SAMLP_NS, SAML_DATETIME_FORMAT, SAML_NS, STATUS_SUCCESS,
    XMLDSIG_NS, XSI_NS, XS_NS,
};

/// Rendering context for one `samlp:Response`.
#[derive(Template)]
#[template(path = "saml_response.xml")]
struct ResponseTemplate<'a> {
    assertion_id: &'a str,
    destination: &'a str,
    issue_instant: String,
    profile: &'a Profile,
    samlp_ns: &'static str,
    saml_ns: &'static str,
    xs_ns: &'static str,
    xsi_ns: &'static str,
    xmldsig_ns: &'static str,
    status_success: &'static str,
    nameid_format_entity: &'static str,
    nameid_format_unspecified: &'static str,
    cm_bearer: &'static str,
    ac_password: &'static str,
    attrname_format_basic: &'static str,
}

/// Builder for the `samlp:Response` document sent back to the ACS URL.
///
/// The inbound request ID is reused as both the response and the assertion
/// `ID`; no `InResponseTo` is emitted.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    assertion_id: String,
    destination: String,
    issue_instant: DateTime<Utc>,
}

impl ResponseBuilder {
    /// Creates a builder addressed to `destination`, issued now.
    #[must_use]
    pub fn new(request_id: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            assertion_id: request_id.into(),
            destination: destination.into(),
            issue_instant: Utc::now(),
        }
    }

    /// Overrides the issue instant.
    #[must_use]
    pub fn issue_instant(mut self, instant: DateTime<Utc>) -> Self {
        self.issue_instant = instant;
        self
    }

    /// Renders the response XML for `profile`.
    pub fn build_xml(&self, profile: &Profile) -> SamlResult<String> {
        let template = ResponseTemplate {
            assertion_id: &self.assertion_id,
            destination: &self.destination,
            issue_instant: self.issue_instant.format(SAML_DATETIME_FORMAT).to_string(),
            profile,
            samlp_ns: SAMLP_NS,
            saml_ns: SAML_NS,
            xs_ns: XS_NS,
            xsi_ns: XSI_NS,
            xmldsig_ns: XMLDSIG_NS,
            status_success: STATUS_SUCCESS,
            nameid_format_entity: NAMEID_FORMAT_ENTITY,
            nameid_format_unspecified: NAMEID_FORMAT_UNSPECIFIED,
            cm_bearer: CM_BEARER,
            ac_password: AC_PASSWORD,
            attrname_format_basic: ATTRNAME_FORMAT_BASIC,
        };

        Ok(template.render()?)
    }

    /// Renders the response XML and base64-encodes its UTF-8 bytes.
    pub fn build_encoded(&self, profile: &Profile) -> SamlResult<String> {
        self.build_xml(profile).map(encode_base64)
    }
}
