//! HTTP-POST Binding implementation.
//!
//! Implements the SAML 2.0 HTTP-POST binding for sending SAML messages
//! via an auto-submitting HTML form.

use askama::Template;

use crate::error::{SamlError, SamlResult};

use super::encoding::decode_base64;
use super::SamlMessageType;

/// Self-submitting form carrying a `SAMLResponse` to the ACS URL.
#[derive(Template)]
#[template(path = "saml_post_form.html")]
struct PostFormTemplate<'a> {
    action: &'a str,
    param: &'static str,
    saml_response: &'a str,
}

/// HTTP-POST binding encoder/decoder.
pub struct HttpPostBinding;

impl HttpPostBinding {
    /// Renders the HTML form that POSTs `encoded_response` to `destination`.
    ///
    /// `encoded_response` must already be base64. Both values are attribute
    /// escaped, `destination` comes straight from the untrusted request.
    pub fn render_form(encoded_response: &str, destination: &str) -> SamlResult<String> {
        let template = PostFormTemplate {
            action: destination,
            param: SamlMessageType::Response.form_param(),
            saml_response: encoded_response,
        };

        Ok(template.render()?)
    }

    /// Decodes a `SAMLResponse` form value back into XML text.
    pub fn decode_response(encoded: &str) -> SamlResult<String> {
        let decoded = decode_base64(encoded)?;

        String::from_utf8(decoded)
            .map_err(|e| SamlError::XmlParse(format!("invalid UTF-8 in message: {e}")))
    }
}
