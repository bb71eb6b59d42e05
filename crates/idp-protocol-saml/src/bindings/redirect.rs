//! HTTP-Redirect Binding implementation.
//!
//! Implements the SAML 2.0 HTTP-Redirect binding for receiving SAML messages
//! via URL query parameters with DEFLATE compression.

use crate::error::{SamlError, SamlResult};

use super::encoding::{decode_base64, deflate, encode_base64, inflate};
use super::SamlMessageType;

/// HTTP-Redirect binding encoder/decoder.
pub struct HttpRedirectBinding;

impl HttpRedirectBinding {
    /// Decodes the `SAMLRequest` query parameter into the inflated XML bytes.
    ///
    /// The value is expected to be already URL-decoded by the web framework.
    pub fn decode_request(saml_request: Option<&str>) -> SamlResult<Vec<u8>> {
        let encoded = saml_request
            .ok_or(SamlError::MissingParameter(SamlMessageType::Request.form_param()))?;

        let compressed = decode_base64(encoded)?;

        inflate(&compressed)
    }

    /// Encodes a SAML request for HTTP-Redirect binding.
    ///
    /// Returns `destination` with the deflated, base64 and URL-encoded message
    /// appended as the `SAMLRequest` query parameter.
    pub fn encode_request(xml: &str, destination: &str) -> SamlResult<String> {
        let compressed = deflate(xml.as_bytes())?;
        let encoded = encode_base64(&compressed);

        let separator = if destination.contains('?') { '&' } else { '?' };

        Ok(format!(
            "{}{}{}={}",
            destination,
            separator,
            SamlMessageType::Request.form_param(),
            urlencoding::encode(&encoded)
        ))
    }
}
