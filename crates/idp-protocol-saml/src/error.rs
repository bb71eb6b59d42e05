//! SAML error types.
//!
//! Every failure in the SSO pipeline maps to exactly one [`PipelineStage`],
//! which is what gets logged when a request is dropped.

use std::fmt;

use thiserror::Error;

/// Result type for SAML operations.
pub type SamlResult<T> = Result<T, SamlError>;

/// Stage of the SSO pipeline an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    /// Extracting and base64-decoding the `SAMLRequest` parameter.
    Decode,
    /// Inflating the raw DEFLATE payload.
    Decompress,
    /// Parsing the `AuthnRequest` XML.
    Parse,
    /// Looking up the profile to assert.
    Profile,
    /// Executing the response or form template.
    Render,
}

impl PipelineStage {
    /// Returns the stable name used in log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Decompress => "decompress",
            Self::Parse => "parse",
            Self::Profile => "profile",
            Self::Render => "render",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SAML protocol errors.
#[derive(Debug, Error)]
pub enum SamlError {
    /// A required query or form parameter is absent.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(String),

    /// Deflate decompression error.
    #[error("deflate error: {0}")]
    Deflate(String),

    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// The document root is not the expected element.
    #[error("unexpected element: expected {expected}, got {actual}")]
    UnexpectedElement {
        /// The expected element, namespace-qualified.
        expected: &'static str,
        /// The element actually found.
        actual: String,
    },

    /// Missing required element or attribute.
    #[error("missing required element: {0}")]
    MissingElement(&'static str),

    /// `IssueInstant` is not an xs:dateTime.
    #[error("invalid IssueInstant {value:?}: {reason}")]
    InvalidIssueInstant {
        /// The raw attribute value.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The profile provider could not supply an identity.
    #[error("profile lookup failed: {0}")]
    Profile(String),

    /// Template execution failed.
    #[error("render error: {0}")]
    Render(String),
}

impl SamlError {
    /// Returns the pipeline stage this error belongs to.
    #[must_use]
    pub const fn stage(&self) -> PipelineStage {
        match self {
            Self::MissingParameter(_) | Self::Base64Decode(_) => PipelineStage::Decode,
            Self::Deflate(_) => PipelineStage::Decompress,
            Self::XmlParse(_)
            | Self::UnexpectedElement { .. }
            | Self::MissingElement(_)
            | Self::InvalidIssueInstant { .. } => PipelineStage::Parse,
            Self::Profile(_) => PipelineStage::Profile,
            Self::Render(_) => PipelineStage::Render,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self.stage() {
            PipelineStage::Decode | PipelineStage::Decompress | PipelineStage::Parse => 400,
            PipelineStage::Profile | PipelineStage::Render => 500,
        }
    }
}

impl From<quick_xml::Error> for SamlError {
    fn from(err: quick_xml::Error) -> Self {
        Self::XmlParse(err.to_string())
    }
}

impl From<base64::DecodeError> for SamlError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64Decode(err.to_string())
    }
}

impl From<askama::Error> for SamlError {
    fn from(err: askama::Error) -> Self {
        Self::Render(err.to_string())
    }
}
