//! Error types for the GitHub client.

use std::fmt;
use thiserror::Error;

/// Result type alias for GitHub operations.
pub type GitHubResult<T> = Result<T, GitHubError>;

/// HTTP failure kinds, one per classified status code.
///
/// Statuses outside this set (including 2xx/3xx and oddities like 418) are
/// treated as success by the request pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    /// 400 Bad Request.
    BadRequest,
    /// 401 Unauthorized.
    Unauthorized,
    /// 403 Forbidden.
    Forbidden,
    /// 404 Not Found.
    NotFound,
    /// 406 Not Acceptable.
    NotAcceptable,
    /// 422 Unprocessable Entity.
    UnprocessableEntity,
    /// 451 Unavailable For Legal Reasons.
    UnavailableForLegalReasons,
    /// 500 Internal Server Error.
    InternalServerError,
    /// 501 Not Implemented.
    NotImplemented,
    /// 502 Bad Gateway.
    BadGateway,
    /// 503 Service Unavailable.
    ServiceUnavailable,
}

impl HttpErrorKind {
    /// Maps a status code to its error kind, if the status is classified.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(Self::BadRequest),
            401 => Some(Self::Unauthorized),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            406 => Some(Self::NotAcceptable),
            422 => Some(Self::UnprocessableEntity),
            451 => Some(Self::UnavailableForLegalReasons),
            500 => Some(Self::InternalServerError),
            501 => Some(Self::NotImplemented),
            502 => Some(Self::BadGateway),
            503 => Some(Self::ServiceUnavailable),
            _ => None,
        }
    }

    /// The status code this kind corresponds to.
    pub fn status(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::NotAcceptable => 406,
            Self::UnprocessableEntity => 422,
            Self::UnavailableForLegalReasons => 451,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
            Self::BadGateway => 502,
            Self::ServiceUnavailable => 503,
        }
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad_request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::NotAcceptable => write!(f, "not_acceptable"),
            Self::UnprocessableEntity => write!(f, "unprocessable_entity"),
            Self::UnavailableForLegalReasons => write!(f, "unavailable_for_legal_reasons"),
            Self::InternalServerError => write!(f, "internal_server_error"),
            Self::NotImplemented => write!(f, "not_implemented"),
            Self::BadGateway => write!(f, "bad_gateway"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
        }
    }
}

/// A classified HTTP failure.
///
/// Carries the triggering request's method and URL, the response status, and
/// a message derived from the response body.
#[derive(Debug, Clone)]
pub struct HttpError {
    kind: HttpErrorKind,
    method: String,
    url: String,
    status: u16,
    message: String,
}

impl HttpError {
    /// Classifies a response, returning `None` for unclassified statuses.
    pub fn classify(method: &str, url: &str, status: u16, body: &str) -> Option<Self> {
        let kind = HttpErrorKind::from_status(status)?;
        let method = method.to_uppercase();
        let message = Self::build_message(&method, url, status, body);

        Some(Self {
            kind,
            method,
            url: url.to_string(),
            status,
            message,
        })
    }

    /// Gets the error kind.
    pub fn kind(&self) -> HttpErrorKind {
        self.kind
    }

    /// Gets the HTTP method of the failed request.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Gets the URL of the failed request.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Gets the response status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Gets the derived message.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn build_message(method: &str, url: &str, status: u16, body: &str) -> String {
        let mut message = format!("{} {}: {}", method, url, status);

        if let Some(suffix) = Self::body_suffix(body) {
            message.push_str(": ");
            message.push_str(&suffix);
        }

        message
    }

    /// Pulls a human-readable detail out of a GitHub error body.
    ///
    /// Checks `error`, then `message`, then the messages of an `errors`
    /// array, matching the shapes the API actually returns.
    fn body_suffix(body: &str) -> Option<String> {
        if body.is_empty() {
            return None;
        }

        let decoded: serde_json::Value = serde_json::from_str(body).ok()?;

        if let Some(error) = decoded.get("error").and_then(|v| v.as_str()) {
            return Some(error.to_string());
        }

        if let Some(message) = decoded.get("message").and_then(|v| v.as_str()) {
            return Some(message.to_string());
        }

        let errors = decoded.get("errors")?.as_array()?;
        let messages: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(|m| m.as_str()))
            .collect();

        if messages.is_empty() {
            None
        } else {
            Some(messages.join(", "))
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for HttpError {}

/// Error type for all GitHub client operations.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// A classified HTTP failure (400, 401, 403, 404, 406, 422, 451, 500,
    /// 501, 502 or 503).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure (DNS, TCP, TLS, timeout). Not classified by
    /// this layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL composition failure.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// Response body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GitHubError {
    /// Returns the classified HTTP error kind, if any.
    pub fn http_kind(&self) -> Option<HttpErrorKind> {
        match self {
            Self::Http(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Returns true for a classified 404.
    pub fn is_not_found(&self) -> bool {
        self.http_kind() == Some(HttpErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(400, HttpErrorKind::BadRequest)]
    #[test_case(401, HttpErrorKind::Unauthorized)]
    #[test_case(403, HttpErrorKind::Forbidden)]
    #[test_case(404, HttpErrorKind::NotFound)]
    #[test_case(406, HttpErrorKind::NotAcceptable)]
    #[test_case(422, HttpErrorKind::UnprocessableEntity)]
    #[test_case(451, HttpErrorKind::UnavailableForLegalReasons)]
    #[test_case(500, HttpErrorKind::InternalServerError)]
    #[test_case(501, HttpErrorKind::NotImplemented)]
    #[test_case(502, HttpErrorKind::BadGateway)]
    #[test_case(503, HttpErrorKind::ServiceUnavailable)]
    fn classified_statuses(status: u16, kind: HttpErrorKind) {
        assert_eq!(HttpErrorKind::from_status(status), Some(kind));
        assert_eq!(kind.status(), status);
    }

    #[test_case(200)]
    #[test_case(201)]
    #[test_case(204)]
    #[test_case(304)]
    #[test_case(418)]
    fn unclassified_statuses(status: u16) {
        assert_eq!(HttpErrorKind::from_status(status), None);
        assert!(HttpError::classify("GET", "https://api.github.com/meta", status, "").is_none());
    }

    #[test]
    fn message_without_body() {
        let error = HttpError::classify("get", "https://api.github.com/user", 401, "").unwrap();
        assert_eq!(error.message(), "GET https://api.github.com/user: 401");
    }

    #[test]
    fn message_from_error_field() {
        let error = HttpError::classify(
            "GET",
            "https://api.github.com/user",
            400,
            r#"{"error":"problems parsing JSON"}"#,
        )
        .unwrap();
        assert_eq!(
            error.message(),
            "GET https://api.github.com/user: 400: problems parsing JSON"
        );
    }

    #[test]
    fn message_from_message_field() {
        let error = HttpError::classify(
            "GET",
            "https://api.github.com/user",
            401,
            r#"{"message":"Bad credentials"}"#,
        )
        .unwrap();
        assert_eq!(
            error.message(),
            "GET https://api.github.com/user: 401: Bad credentials"
        );
    }

    #[test]
    fn message_from_errors_array() {
        let body = r#"{"errors":[{"message":"name is too short"},{"message":"color is invalid"}]}"#;
        let error =
            HttpError::classify("POST", "https://api.github.com/repos/o/r/labels", 422, body)
                .unwrap();
        assert_eq!(
            error.message(),
            "POST https://api.github.com/repos/o/r/labels: 422: name is too short, color is invalid"
        );
    }

    #[test]
    fn error_field_wins_over_message_field() {
        let body = r#"{"error":"top","message":"lower"}"#;
        let error = HttpError::classify("GET", "https://api.github.com/x", 403, body).unwrap();
        assert_eq!(error.message(), "GET https://api.github.com/x: 403: top");
    }

    #[test]
    fn non_json_body_yields_bare_message() {
        let error =
            HttpError::classify("GET", "https://api.github.com/x", 502, "Bad Gateway").unwrap();
        assert_eq!(error.message(), "GET https://api.github.com/x: 502");
    }
}
