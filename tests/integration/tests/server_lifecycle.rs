//! Server startup and shutdown tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::common::{authn_request_xml, TestEnv};
use idp_protocol_saml::bindings::HttpRedirectBinding;
use idp_server::{Server, ServerConfig};

/// The in-process router and the live server agree.
#[tokio::test]
async fn test_router_without_socket() -> anyhow::Result<()> {
    let server = Server::new(ServerConfig::for_testing());

    let xml = authn_request_xml("req-1", "https://sp.example/acs");
    let uri = HttpRedirectBinding::encode_request(&xml, "/")?;
    let response = server
        .test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Binding port 0 reports the real port, and shutdown completes cleanly.
#[tokio::test]
async fn test_graceful_shutdown() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let port = port_of(&env.base_url);
    assert_ne!(port, 0);

    env.shutdown().await?;

    Ok(())
}

fn port_of(base_url: &str) -> u16 {
    url::Url::parse(base_url)
        .ok()
        .and_then(|u| u.port())
        .unwrap_or(0)
}

/// The query value is percent-decoded once before base64 decoding.
#[tokio::test]
async fn test_query_value_is_url_decoded() -> anyhow::Result<()> {
    let env = TestEnv::new().await?;

    let xml = authn_request_xml("req-2", "https://sp.example/acs");
    let encoded = idp_protocol_saml::bindings::encode_base64(
        idp_protocol_saml::bindings::deflate(xml.as_bytes())?,
    );
    let url = format!("{}?SAMLRequest={}", env.url("/"), urlencoding::encode(&encoded));

    let response = env.client.get(&url).send().await?;
    assert_eq!(response.status().as_u16(), 200);

    Ok(())
}
