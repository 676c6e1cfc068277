//! The request executor: one synchronous pipeline per call.
//!
//! Every endpoint method routes through [`Request::send`]: resolve the
//! token and base URL, build the connection skeleton, attach headers,
//! serialize the remaining options, execute the transport (real or armed
//! fixture), and classify the response status into a typed error.

use crate::client::Client;
use crate::connection;
use crate::errors::{GitHubResult, HttpError};
use crate::options::RequestOptions;
use crate::transport::{PreparedRequest, WireResponse};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::Value;
use url::Url;

/// Default versioned media type for the Accept header.
pub const DEFAULT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// The request executor for one client.
///
/// A lightweight facade over the client's configuration, transport and
/// fixture slot; obtained via [`Client::request`].
#[derive(Clone, Copy)]
pub struct Request<'a> {
    client: &'a Client,
}

impl<'a> Request<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// GET a path and decode the response body.
    pub fn get(&self, path: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.verb(Method::GET, path, options)
    }

    /// POST to a path and decode the response body.
    pub fn post(&self, path: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.verb(Method::POST, path, options)
    }

    /// PUT to a path and decode the response body.
    pub fn put(&self, path: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.verb(Method::PUT, path, options)
    }

    /// PATCH a path and decode the response body.
    pub fn patch(&self, path: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.verb(Method::PATCH, path, options)
    }

    /// DELETE a path and decode the response body.
    pub fn delete(&self, path: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.verb(Method::DELETE, path, options)
    }

    /// Runs the pipeline and reports success as a boolean.
    ///
    /// Returns true iff the status is 204. A classified 404 downgrades to
    /// `Ok(false)` — the dominant use is relationship-existence checks
    /// ("is user following user") where not-found means no. Every other
    /// classified error propagates.
    pub fn boolean_from_response(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        match self.send(method, path, options) {
            Ok(response) => Ok(response.status() == 204),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn verb(&self, method: Method, path: &str, options: RequestOptions) -> GitHubResult<Value> {
        let raw = matches!(options.get("raw"), Some(Value::Bool(true)));
        let response = self.send(method, path, options)?;

        if raw {
            Ok(Value::String(response.body().to_string()))
        } else {
            parse_response(&response)
        }
    }

    /// Runs the full pipeline and returns the raw wire response.
    ///
    /// Used directly by callers that need response headers, e.g. rate-limit
    /// reads.
    pub fn send(
        &self,
        method: Method,
        path: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<WireResponse> {
        let config = self.client.configuration_snapshot();

        // Leading slash in the path breaks non-standard deployments.
        let path = path.trim_start_matches('/');

        let token = options
            .remove_string("access_token")
            .or_else(|| options.remove_string("oauth_token"))
            .or_else(|| {
                config
                    .oauth_token
                    .as_ref()
                    .map(|t| t.expose_secret().clone())
                    .filter(|t| !t.is_empty())
            });

        let endpoint = options
            .remove_string("endpoint")
            .unwrap_or_else(|| config.api_endpoint.clone());

        let plan = connection::build(&config, options)?;
        let mut headers = plan.headers;
        let mut options = plan.options;

        let accept = options
            .remove_string("accept")
            .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string());
        headers.insert(ACCEPT, header_value(&accept)?);

        // A resolved token takes the OAuth path; the basic-auth listener
        // would overwrite the Authorization header at send time.
        let listener = match token {
            Some(token) => {
                headers.insert(AUTHORIZATION, header_value(&format!("token {}", token))?);
                None
            }
            None => plan.listener,
        };

        options.remove_bool("authenticate", true);
        options.remove_bool("force_urlencoded", false);
        options.remove_bool("raw", false);
        let proxy = options.remove_string("proxy");

        let mut url = join_endpoint(&endpoint, path)?;

        let body = if method == Method::GET {
            if !options.is_empty() {
                url.set_query(Some(&options.to_query_string()?));
            }
            None
        } else if !options.is_empty() {
            Some(options.to_json_body()?)
        } else {
            None
        };

        if let Some(host) = config.request_host.as_deref().filter(|h| !h.is_empty()) {
            url.set_host(Some(host))?;
        }

        tracing::debug!(method = %method, url = %url, "sending request");

        let prepared = PreparedRequest {
            method: method.clone(),
            url: url.clone(),
            headers,
            body,
            basic_auth: listener,
            proxy,
        };

        let response = match self.client.take_fixture() {
            Some(fixture) => fixture.into_response(),
            None => self.client.transport().send(prepared)?,
        };

        if let Some(error) =
            HttpError::classify(method.as_str(), url.as_str(), response.status(), response.body())
        {
            tracing::warn!(status = response.status(), "request failed: {}", error);
            return Err(error.into());
        }

        Ok(response)
    }
}

/// Decodes a response body.
///
/// JSON when the content type says so, or, as a fallback for responses
/// with no or ambiguous content type, when the body opens an object.
/// Anything else comes back as the raw string. A successful response with
/// a malformed JSON-looking body is not an error: decoding degrades to the
/// raw string.
pub fn parse_response(response: &WireResponse) -> GitHubResult<Value> {
    let body = response.body();

    let is_json = response
        .header("Content-Type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false)
        || body.starts_with('{');

    if is_json {
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        match serde_json::from_str(body) {
            Ok(value) => Ok(value),
            Err(_) => Ok(Value::String(body.to_string())),
        }
    } else {
        Ok(Value::String(body.to_string()))
    }
}

fn join_endpoint(endpoint: &str, path: &str) -> GitHubResult<Url> {
    // A base without a trailing slash would drop its last path segment on
    // join.
    if endpoint.ends_with('/') {
        Ok(Url::parse(endpoint)?.join(path)?)
    } else {
        Ok(Url::parse(&format!("{}/", endpoint))?.join(path)?)
    }
}

fn header_value(value: &str) -> GitHubResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| crate::errors::GitHubError::Configuration(format!("invalid header value: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_strips_nothing_but_handles_missing_slash() {
        let url = join_endpoint("https://api.github.com/", "user/emails").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/user/emails");

        let url = join_endpoint("http://foo.dev", "meta").unwrap();
        assert_eq!(url.as_str(), "http://foo.dev/meta");

        let url = join_endpoint("https://ghe.example.com/api/v3", "repos/o/r").unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/repos/o/r");
    }

    #[test]
    fn parse_json_by_content_type() {
        let response = WireResponse::new(
            200,
            vec![("Content-Type".to_string(), "application/json; charset=utf-8".to_string())],
            r#"["a@b.com"]"#,
        );
        let value = parse_response(&response).unwrap();
        assert_eq!(value, serde_json::json!(["a@b.com"]));
    }

    #[test]
    fn parse_json_by_sniffing() {
        let response = WireResponse::new(200, Vec::new(), r#"{"a":1}"#);
        let value = parse_response(&response).unwrap();
        assert_eq!(value["a"], 1);
    }

    #[test]
    fn parse_plain_text_passes_through() {
        let response = WireResponse::new(200, Vec::new(), "plain text");
        let value = parse_response(&response).unwrap();
        assert_eq!(value, Value::String("plain text".to_string()));
    }

    #[test]
    fn parse_malformed_sniffed_body_degrades_to_string() {
        let response = WireResponse::new(200, Vec::new(), "{not json");
        let value = parse_response(&response).unwrap();
        assert_eq!(value, Value::String("{not json".to_string()));
    }

    #[test]
    fn parse_empty_json_body_is_null() {
        let response = WireResponse::new(
            204,
            vec![("Content-Type".to_string(), "application/json".to_string())],
            "",
        );
        assert_eq!(parse_response(&response).unwrap(), Value::Null);
    }
}
