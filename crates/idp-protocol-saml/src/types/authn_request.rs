//! SAML AuthnRequest types.
//!
//! Authentication request message sent by a service provider to an identity provider.

use chrono::{DateTime, Utc};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;
use serde::{Deserialize, Serialize};

use crate::error::{SamlError, SamlResult};

use super::{SAMLP_NS, SAML_NS};

/// SAML Authentication Request.
///
/// Only the fields needed to address a response are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthnRequest {
    /// Unique identifier for this request.
    pub id: String,

    /// The URL where the response should be POSTed.
    pub assertion_consumer_service_url: String,

    /// Timestamp when this request was issued.
    pub issue_instant: DateTime<Utc>,

    /// The entity ID of the service provider issuing the request.
    ///
    /// Not consulted when building the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl AuthnRequest {
    /// Parses an inflated `AuthnRequest` document.
    ///
    /// The root must be `AuthnRequest`; when its prefix is declared it must
    /// resolve to the SAML protocol namespace. Undeclared prefixes are
    /// tolerated since some SPs omit the `xmlns` declarations.
    pub fn from_xml(xml: &[u8]) -> SamlResult<Self> {
        let xml = std::str::from_utf8(xml)
            .map_err(|e| SamlError::XmlParse(format!("invalid UTF-8 in request: {e}")))?;

        let mut reader = NsReader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut fields = RequestFields::default();
        let mut depth = 0usize;

        loop {
            let (namespace, event) = reader.read_resolved_event()?;
            match event {
                Event::Start(e) => {
                    fields.open(&namespace, &e, depth, false)?;
                    depth += 1;
                }
                Event::Empty(e) => {
                    fields.open(&namespace, &e, depth, true)?;
                }
                Event::Text(text) if fields.in_issuer => {
                    let text = text
                        .unescape()
                        .map_err(|e| SamlError::XmlParse(e.to_string()))?;
                    fields.issuer.get_or_insert_with(String::new).push_str(&text);
                }
                Event::CData(data) if fields.in_issuer => {
                    let text = String::from_utf8_lossy(&data);
                    fields.issuer.get_or_insert_with(String::new).push_str(&text);
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    if depth == 1 {
                        fields.in_issuer = false;
                    }
                    if depth == 0 {
                        break;
                    }
                }
                Event::Eof => {
                    if !fields.root_seen {
                        return Err(SamlError::XmlParse("document has no root element".to_string()));
                    }
                    if depth > 0 {
                        return Err(SamlError::XmlParse("unexpected end of document".to_string()));
                    }
                    break;
                }
                _ => {}
            }
        }

        fields.finish()
    }
}

#[derive(Default)]
struct RequestFields {
    root_seen: bool,
    in_issuer: bool,
    id: Option<String>,
    acs_url: Option<String>,
    issue_instant: Option<String>,
    issuer: Option<String>,
}

impl RequestFields {
    fn open(
        &mut self,
        namespace: &ResolveResult<'_>,
        element: &BytesStart<'_>,
        depth: usize,
        empty: bool,
    ) -> SamlResult<()> {
        let local_name = element.local_name();

        if !self.root_seen {
            if local_name.as_ref() != b"AuthnRequest" || !in_namespace(namespace, SAMLP_NS) {
                return Err(SamlError::UnexpectedElement {
                    expected: "samlp:AuthnRequest",
                    actual: String::from_utf8_lossy(element.name().as_ref()).into_owned(),
                });
            }
            self.root_seen = true;
            return self.read_root_attributes(element);
        }

        if depth == 1
            && local_name.as_ref() == b"Issuer"
            && in_namespace(namespace, SAML_NS)
            && self.issuer.is_none()
        {
            self.issuer = Some(String::new());
            self.in_issuer = !empty;
        }

        Ok(())
    }

    fn read_root_attributes(&mut self, element: &BytesStart<'_>) -> SamlResult<()> {
        for attr in element.attributes() {
            let attr = attr.map_err(|e| SamlError::XmlParse(e.to_string()))?;
            match attr.key.as_ref() {
                b"ID" => self.id = Some(attribute_value(&attr)?),
                b"AssertionConsumerServiceURL" => self.acs_url = Some(attribute_value(&attr)?),
                b"IssueInstant" => self.issue_instant = Some(attribute_value(&attr)?),
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(self) -> SamlResult<AuthnRequest> {
        let id = non_empty(self.id).ok_or(SamlError::MissingElement("AuthnRequest/@ID"))?;

        let assertion_consumer_service_url = non_empty(self.acs_url)
            .ok_or(SamlError::MissingElement("AuthnRequest/@AssertionConsumerServiceURL"))?;

        let raw_instant = self
            .issue_instant
            .ok_or(SamlError::MissingElement("AuthnRequest/@IssueInstant"))?;
        let issue_instant = DateTime::parse_from_rfc3339(raw_instant.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| SamlError::InvalidIssueInstant {
                value: raw_instant.clone(),
                reason: e.to_string(),
            })?;

        Ok(AuthnRequest {
            id,
            assertion_consumer_service_url,
            issue_instant,
            issuer: self.issuer.map(|s| s.trim().to_string()),
        })
    }
}

fn attribute_value(attr: &Attribute<'_>) -> SamlResult<String> {
    attr.unescape_value()
        .map(|v| v.into_owned())
        .map_err(|e| SamlError::XmlParse(e.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Unbound and undeclared prefixes are accepted; a declared prefix must match.
fn in_namespace(resolved: &ResolveResult<'_>, expected: &str) -> bool {
    match resolved {
        ResolveResult::Bound(Namespace(ns)) => *ns == expected.as_bytes(),
        ResolveResult::Unbound | ResolveResult::Unknown(_) => true,
    }
}
