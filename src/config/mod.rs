//! Configuration for the GitHub client.

use secrecy::SecretString;

/// Default GitHub API base URL.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.github.com/";

/// Default GitHub web URL.
pub const DEFAULT_WEB_ENDPOINT: &str = "https://github.com/";

/// Default GitHub status API URL.
pub const DEFAULT_STATUS_API_ENDPOINT: &str = "https://status.github.com/api/";

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "github-rest/0.1.0";

/// Default REST API version.
pub const DEFAULT_API_VERSION: u32 = 3;

/// Per-client mutable settings.
///
/// Owned by one [`Client`](crate::client::Client) instance and never shared
/// across clients. The field set is fixed; bulk updates go through
/// [`ConfigurationUpdate`], so an unknown key is a compile-time error rather
/// than a silently stored stray property.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// API base URL.
    pub api_endpoint: String,
    /// Web frontend URL.
    pub web_endpoint: String,
    /// Status API URL.
    pub status_api_endpoint: String,
    /// Basic-auth login.
    pub login: Option<String>,
    /// Basic-auth password.
    pub password: Option<SecretString>,
    /// OAuth token.
    pub oauth_token: Option<SecretString>,
    /// OAuth application client id (unauthenticated rate-limit bumps).
    pub client_id: Option<String>,
    /// OAuth application client secret (unauthenticated rate-limit bumps).
    pub client_secret: Option<SecretString>,
    /// Outbound proxy URL.
    pub proxy: Option<String>,
    /// Host override for enterprise deployments whose path structure matches
    /// github.com but whose DNS name differs.
    pub request_host: Option<String>,
    /// User-Agent header value.
    pub user_agent: String,
    /// REST API version.
    pub api_version: u32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            web_endpoint: DEFAULT_WEB_ENDPOINT.to_string(),
            status_api_endpoint: DEFAULT_STATUS_API_ENDPOINT.to_string(),
            login: None,
            password: None,
            oauth_token: None,
            client_id: None,
            client_secret: None,
            proxy: None,
            request_host: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_version: DEFAULT_API_VERSION,
        }
    }
}

impl Configuration {
    /// Creates a configuration with documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every field to its documented default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Merges a patch over the current state. Fields absent from the patch
    /// keep their current value.
    pub fn apply(&mut self, update: ConfigurationUpdate) {
        if let Some(v) = update.api_endpoint {
            self.api_endpoint = v;
        }
        if let Some(v) = update.web_endpoint {
            self.web_endpoint = v;
        }
        if let Some(v) = update.status_api_endpoint {
            self.status_api_endpoint = v;
        }
        if let Some(v) = update.login {
            self.login = Some(v);
        }
        if let Some(v) = update.password {
            self.password = Some(SecretString::new(v));
        }
        if let Some(v) = update.oauth_token {
            self.oauth_token = Some(SecretString::new(v));
        }
        if let Some(v) = update.client_id {
            self.client_id = Some(v);
        }
        if let Some(v) = update.client_secret {
            self.client_secret = Some(SecretString::new(v));
        }
        if let Some(v) = update.proxy {
            self.proxy = Some(v);
        }
        if let Some(v) = update.request_host {
            self.request_host = Some(v);
        }
        if let Some(v) = update.user_agent {
            self.user_agent = v;
        }
        if let Some(v) = update.api_version {
            self.api_version = v;
        }
    }
}

/// A bulk configuration patch.
///
/// ```rust
/// use github_rest::config::ConfigurationUpdate;
///
/// let update = ConfigurationUpdate::new()
///     .login("octocat")
///     .password("secret");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigurationUpdate {
    api_endpoint: Option<String>,
    web_endpoint: Option<String>,
    status_api_endpoint: Option<String>,
    login: Option<String>,
    password: Option<String>,
    oauth_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    proxy: Option<String>,
    request_host: Option<String>,
    user_agent: Option<String>,
    api_version: Option<u32>,
}

impl ConfigurationUpdate {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    pub fn api_endpoint(mut self, value: impl Into<String>) -> Self {
        self.api_endpoint = Some(value.into());
        self
    }

    /// Sets the web frontend URL.
    pub fn web_endpoint(mut self, value: impl Into<String>) -> Self {
        self.web_endpoint = Some(value.into());
        self
    }

    /// Sets the status API URL.
    pub fn status_api_endpoint(mut self, value: impl Into<String>) -> Self {
        self.status_api_endpoint = Some(value.into());
        self
    }

    /// Sets the basic-auth login.
    pub fn login(mut self, value: impl Into<String>) -> Self {
        self.login = Some(value.into());
        self
    }

    /// Sets the basic-auth password.
    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.password = Some(value.into());
        self
    }

    /// Sets the OAuth token.
    pub fn oauth_token(mut self, value: impl Into<String>) -> Self {
        self.oauth_token = Some(value.into());
        self
    }

    /// Sets the OAuth application client id.
    pub fn client_id(mut self, value: impl Into<String>) -> Self {
        self.client_id = Some(value.into());
        self
    }

    /// Sets the OAuth application client secret.
    pub fn client_secret(mut self, value: impl Into<String>) -> Self {
        self.client_secret = Some(value.into());
        self
    }

    /// Sets the outbound proxy URL.
    pub fn proxy(mut self, value: impl Into<String>) -> Self {
        self.proxy = Some(value.into());
        self
    }

    /// Sets the request host override.
    pub fn request_host(mut self, value: impl Into<String>) -> Self {
        self.request_host = Some(value.into());
        self
    }

    /// Sets the User-Agent header value.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.user_agent = Some(value.into());
        self
    }

    /// Sets the REST API version.
    pub fn api_version(mut self, value: u32) -> Self {
        self.api_version = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn default_values() {
        let config = Configuration::new();
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.web_endpoint, DEFAULT_WEB_ENDPOINT);
        assert_eq!(config.status_api_endpoint, DEFAULT_STATUS_API_ENDPOINT);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert!(config.login.is_none());
        assert!(config.password.is_none());
        assert!(config.oauth_token.is_none());
        assert!(config.client_id.is_none());
        assert!(config.client_secret.is_none());
        assert!(config.proxy.is_none());
        assert!(config.request_host.is_none());
    }

    #[test]
    fn apply_merges_over_current_state() {
        let mut config = Configuration::new();
        config.apply(ConfigurationUpdate::new().login("octocat").password("pw"));
        config.apply(ConfigurationUpdate::new().user_agent("My mashup"));

        // Untouched fields survive later patches.
        assert_eq!(config.login.as_deref(), Some("octocat"));
        assert_eq!(config.password.as_ref().unwrap().expose_secret(), "pw");
        assert_eq!(config.user_agent, "My mashup");
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut config = Configuration::new();
        config.apply(
            ConfigurationUpdate::new()
                .login("octocat")
                .oauth_token("t0k3n")
                .api_endpoint("http://foo.dev"),
        );

        config.reset();
        let first = config.clone();
        config.reset();

        assert!(config.login.is_none());
        assert!(config.oauth_token.is_none());
        assert_eq!(config.api_endpoint, first.api_endpoint);
        assert_eq!(config.user_agent, first.user_agent);
        assert_eq!(config.api_version, first.api_version);
    }

    #[test]
    fn request_host_settable() {
        let mut config = Configuration::new();
        config.apply(ConfigurationUpdate::new().request_host("github.company.com"));
        assert_eq!(config.request_host.as_deref(), Some("github.company.com"));
    }
}
