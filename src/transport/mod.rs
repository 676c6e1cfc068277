//! Transport seam: the real blocking HTTP transport and the canned fixture
//! used for deterministic tests.

use crate::auth::BasicCredentials;
use crate::errors::GitHubResult;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::HeaderMap;
use reqwest::Method;
use secrecy::ExposeSecret;
use url::Url;

/// A fully prepared outgoing request.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: Method,
    /// Composed URL, including any query string and host override.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Serialized body, if any.
    pub body: Option<String>,
    /// Basic-auth credentials applied at send time.
    pub basic_auth: Option<BasicCredentials>,
    /// Outbound proxy URL, if configured.
    pub proxy: Option<String>,
}

/// A received response: status code, case-insensitive headers, raw body.
#[derive(Debug, Clone)]
pub struct WireResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

impl WireResponse {
    /// Creates a response from its parts.
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Response status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Raw body content.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// One `send` per invocation; blocking. Implemented by the real HTTP
/// transport and by test doubles.
pub trait Transport {
    /// Performs the call and returns the wire response. Transport-level
    /// failures (DNS, TCP, TLS) propagate unclassified.
    fn send(&self, request: PreparedRequest) -> GitHubResult<WireResponse>;
}

/// The production transport, backed by a blocking reqwest client.
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    /// Creates the transport with a pooled client.
    pub fn new() -> GitHubResult<Self> {
        Ok(Self {
            client: HttpClient::builder().build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: PreparedRequest) -> GitHubResult<WireResponse> {
        // A proxied call gets a one-off client; the pooled client carries no
        // proxy so configuration changes between calls take effect.
        let client = match &request.proxy {
            Some(proxy) => HttpClient::builder()
                .proxy(reqwest::Proxy::all(proxy)?)
                .build()?,
            None => self.client.clone(),
        };

        let mut builder = client
            .request(request.method, request.url)
            .headers(request.headers);

        if let Some(creds) = &request.basic_auth {
            builder = builder.basic_auth(&creds.login, Some(creds.password.expose_secret()));
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.text()?;

        Ok(WireResponse::new(status, headers, body))
    }
}

/// A canned response substituted for exactly one live call.
///
/// Armed via [`Client::set_fixture`](crate::client::Client::set_fixture) and
/// consumed by the next request; status defaults to 200.
#[derive(Debug, Clone)]
pub struct Fixture {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        }
    }
}

impl Fixture {
    /// Creates a 200 fixture with no headers and an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status code.
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the body verbatim.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Serializes a value as the JSON body and tags the content type.
    pub fn json_body<T: serde::Serialize>(self, value: &T) -> GitHubResult<Self> {
        let body = serde_json::to_string(value)?;
        Ok(self
            .header("Content-Type", "application/json")
            .body(body))
    }

    /// Produces the wire response this fixture stands in for. No socket I/O,
    /// no serialization round-trip.
    pub fn into_response(self) -> WireResponse {
        WireResponse::new(self.status, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_defaults_to_ok() {
        let response = Fixture::new().into_response();
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "");
    }

    #[test]
    fn fixture_carries_parts_verbatim() {
        let response = Fixture::new()
            .status(422)
            .header("Content-Type", "application/json")
            .body(r#"{"message":"Validation Failed"}"#)
            .into_response();

        assert_eq!(response.status(), 422);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.body(), r#"{"message":"Validation Failed"}"#);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = WireResponse::new(
            200,
            vec![("X-RateLimit-Limit".to_string(), "5000".to_string())],
            "",
        );
        assert_eq!(response.header("x-ratelimit-limit"), Some("5000"));
        assert_eq!(response.header("X-RATELIMIT-LIMIT"), Some("5000"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn json_body_sets_content_type() {
        let fixture = Fixture::new()
            .json_body(&serde_json::json!({"a": 1}))
            .unwrap();
        let response = fixture.into_response();
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.body(), r#"{"a":1}"#);
    }
}
