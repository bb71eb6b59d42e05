//! Common test utilities and fixtures.

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::oneshot;

use idp_protocol_saml::bindings::HttpRedirectBinding;
use idp_server::{Server, ServerConfig};

/// Test environment running a real server on an ephemeral port.
pub struct TestEnv {
    /// Base URL of the running server.
    pub base_url: String,
    /// HTTP client for testing.
    pub client: Client,
    /// Server shutdown signal.
    shutdown_tx: Option<oneshot::Sender<()>>,
    server: Option<tokio::task::JoinHandle<anyhow::Result<()>>>,
}

impl TestEnv {
    /// Starts a server bound to `127.0.0.1:0`.
    pub async fn new() -> anyhow::Result<Self> {
        // Initialize tracing for tests
        let _ = tracing_subscriber::fmt()
            .with_env_filter("idp_server=debug,idp_protocol_saml=debug")
            .with_test_writer()
            .try_init();

        let bound = Server::new(ServerConfig::for_testing()).bind().await?;
        let addr: SocketAddr = bound.local_addr()?;
        let base_url = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(bound.serve(async move {
            let _ = shutdown_rx.await;
        }));

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url,
            client,
            shutdown_tx: Some(shutdown_tx),
            server: Some(server),
        })
    }

    /// Builds a URL under the server for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Signals shutdown and waits for the server task to finish.
    pub async fn shutdown(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        match self.server.take() {
            Some(handle) => handle.await?,
            None => Ok(()),
        }
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Renders a minimal `AuthnRequest` document.
///
/// `acs_url` is inserted verbatim, so it must already be XML-escaped.
pub fn authn_request_xml(id: &str, acs_url: &str) -> String {
    format!(
        r#"<samlp:AuthnRequest xmlns:samlp="urn:oasis:names:tc:SAML:2.0:protocol" xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion" ID="{id}" Version="2.0" IssueInstant="2024-01-01T00:00:00Z" AssertionConsumerServiceURL="{acs_url}"><saml:Issuer>https://sp.example/metadata</saml:Issuer></samlp:AuthnRequest>"#
    )
}

/// Builds the redirect URL an SP would send the browser to.
pub fn redirect_url(base: &str, xml: &str) -> anyhow::Result<String> {
    Ok(HttpRedirectBinding::encode_request(xml, base)?)
}

/// Returns the `value` of the named hidden input in a POST-binding form.
///
/// Values are HTML-escaped in the form; this undoes the entities askama emits.
pub fn form_field(html: &str, name: &str) -> Option<String> {
    let marker = format!(r#"name="{name}" value=""#);
    let start = html.find(&marker)? + marker.len();
    let end = start + html[start..].find('"')?;
    Some(unescape_html(&html[start..end]))
}

/// Returns the form `action` attribute.
pub fn form_action(html: &str) -> Option<String> {
    let marker = r#"action=""#;
    let start = html.find(marker)? + marker.len();
    let end = start + html[start..].find('"')?;
    Some(unescape_html(&html[start..end]))
}

fn unescape_html(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

