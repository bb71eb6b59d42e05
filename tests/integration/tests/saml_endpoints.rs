//! SAML SSO endpoint integration tests.

use crate::common::{authn_request_xml, form_action, form_field, redirect_url, TestEnv};
use idp_protocol_saml::bindings::HttpPostBinding;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Collects the `Name` and text value of every `saml:Attribute`.
fn attributes(xml: &str) -> Vec<(String, String)> {
    let mut reader = Reader::from_str(xml);
    let mut out = Vec::new();
    let mut in_value = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.local_name().as_ref() == b"Attribute" => {
                let name = e.try_get_attribute("Name").unwrap().unwrap();
                out.push((name.unescape_value().unwrap().into_owned(), String::new()));
            }
            Event::Start(e) if e.local_name().as_ref() == b"AttributeValue" => in_value = true,
            Event::Text(t) if in_value => {
                out.last_mut().unwrap().1.push_str(&t.unescape().unwrap());
            }
            Event::End(_) => in_value = false,
            Event::Eof => break,
            _ => {}
        }
    }

    out
}

/// A valid request yields an auto-submitting form back to the ACS URL.
#[tokio::test]
async fn test_sso_redirect_returns_post_form() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let xml = authn_request_xml("req-1", "https://sp.example/acs");
    let url = redirect_url(&env.url("/"), &xml)?;
    let response = env.client.get(&url).send().await?;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "Expected HTML content type, got {}",
        content_type
    );

    let html = response.text().await?;
    assert!(html.contains(r#"action="https://sp.example/acs""#));
    assert!(html.contains(r#"method="post""#));
    assert!(html.contains(".submit()"));
    assert_eq!(form_field(&html, "RelayState").as_deref(), Some(""));

    let encoded = form_field(&html, "SAMLResponse").expect("form carries SAMLResponse");
    let response_xml = HttpPostBinding::decode_response(&encoded)?;

    assert!(response_xml.contains(r#"ID="req-1""#));
    assert!(response_xml.contains(r#"Destination="https://sp.example/acs""#));
    assert!(response_xml.contains(">U001</saml:NameID>"));
    assert!(response_xml.contains("urn:oasis:names:tc:SAML:2.0:status:Success"));

    assert_eq!(
        attributes(&response_xml),
        vec![
            ("Email".to_string(), "user1@example.com".to_string()),
            ("Username".to_string(), "user1".to_string()),
            ("FirstName".to_string(), "User".to_string()),
            ("LastName".to_string(), "One".to_string()),
            ("NickName".to_string(), String::new()),
            ("Locale".to_string(), "en".to_string()),
        ]
    );

    Ok(())
}

/// The path is irrelevant: every GET is the SSO endpoint.
#[tokio::test]
async fn test_sso_any_path() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let xml = authn_request_xml("_abc123", "https://sp.example/saml/acs?tenant=a&amp;x=1");
    for path in ["/sso", "/realms/test/protocol/saml", "/a/b/c?foo=bar"] {
        let url = redirect_url(&env.url(path), &xml)?;
        let response = env.client.get(&url).send().await?;
        assert_eq!(response.status().as_u16(), 200, "path {path}");

        let html = response.text().await?;
        let action = form_action(&html).expect("form action");
        let action = url::Url::parse(&action)?;
        assert_eq!(action.path(), "/saml/acs");
        assert_eq!(action.query(), Some("tenant=a&x=1"));
    }

    Ok(())
}

/// A missing `SAMLRequest` is rejected with an empty body.
#[tokio::test]
async fn test_sso_missing_request() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let response = env.client.get(env.url("/")).send().await?;

    assert_eq!(response.status().as_u16(), 400);
    assert!(response.text().await?.is_empty());

    Ok(())
}

/// Each failing pipeline stage is a client error with no body.
#[tokio::test]
async fn test_sso_malformed_requests() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let not_base64 = env.url("/?SAMLRequest=%25%25%25");
    // "hello" in base64 is not a DEFLATE stream
    let not_deflate = env.url("/?SAMLRequest=aGVsbG8%3D");
    let not_authn = redirect_url(&env.url("/"), "<samlp:LogoutRequest ID=\"x\"/>")?;
    let no_acs = redirect_url(
        &env.url("/"),
        r#"<samlp:AuthnRequest ID="x" IssueInstant="2024-01-01T00:00:00Z"/>"#,
    )?;

    for url in [not_base64, not_deflate, not_authn, no_acs] {
        let response = env.client.get(&url).send().await?;
        assert_eq!(response.status().as_u16(), 400, "url {url}");
        assert!(response.text().await?.is_empty());
    }

    Ok(())
}

/// Non-GET methods are not routed.
#[tokio::test]
async fn test_sso_post_not_allowed() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let response = env.client.post(env.url("/")).send().await?;
    assert_eq!(response.status().as_u16(), 405);

    Ok(())
}
