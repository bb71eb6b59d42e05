//! Single Sign-On endpoint.
//!
//! Handles SAML AuthnRequest messages and answers with a POST-binding form.
//! The pipeline is linear: decode, parse, look up the profile, build the
//! response, render the form. Any failure ends the request.

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::bindings::{HttpPostBinding, HttpRedirectBinding, SamlMessageType};
use crate::error::SamlError;
use crate::types::{AuthnRequest, ResponseBuilder};

use super::state::{ProfileProvider, SamlState};

/// Query parameters for SSO redirect binding.
///
/// `RelayState`, `SigAlg` and `Signature` are not consumed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SsoRedirectParams {
    /// The SAML request (deflated, base64, URL-decoded).
    pub saml_request: Option<String>,
}

impl SsoRedirectParams {
    /// Reads the first `SAMLRequest` value from a raw query string.
    ///
    /// Repeated keys and unrelated parameters are ignored, so no query shape
    /// is rejected before the pipeline runs.
    #[must_use]
    pub fn from_query(query: Option<&str>) -> Self {
        let name = SamlMessageType::Request.form_param();
        let saml_request = query.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        });

        Self { saml_request }
    }
}

/// GET handler for SSO endpoint (HTTP-Redirect binding).
pub async fn sso_redirect<P: ProfileProvider>(
    State(state): State<SamlState<P>>,
    RawQuery(query): RawQuery,
) -> Response {
    let params = SsoRedirectParams::from_query(query.as_deref());

    match process_sso_redirect(&state, params.saml_request.as_deref()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!(stage = %e.stage(), error = %e, "SAML SSO request failed");
            error_response(&e)
        }
    }
}

/// Runs the SSO pipeline for one `SAMLRequest` value and returns the form HTML.
pub async fn process_sso_redirect<P: ProfileProvider>(
    state: &SamlState<P>,
    saml_request: Option<&str>,
) -> Result<String, SamlError> {
    let xml = HttpRedirectBinding::decode_request(saml_request)?;

    let request = AuthnRequest::from_xml(&xml)?;

    tracing::info!(
        request_id = %request.id,
        acs_url = %request.assertion_consumer_service_url,
        issuer = request.issuer.as_deref().unwrap_or("-"),
        "SAML auth requested"
    );

    let profile = state
        .profile_provider
        .profile_for(&request)
        .await
        .map_err(|e| SamlError::Profile(e.to_string()))?;

    let encoded = ResponseBuilder::new(&request.id, &request.assertion_consumer_service_url)
        .build_encoded(&profile)?;

    tracing::debug!(
        request_id = %request.id,
        encoded_len = encoded.len(),
        "SAML response built"
    );

    HttpPostBinding::render_form(&encoded, &request.assertion_consumer_service_url)
}

/// Maps a pipeline error to a bare status: no details reach the caller.
fn error_response(err: &SamlError) -> Response {
    StatusCode::from_u16(err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        .into_response()
}
