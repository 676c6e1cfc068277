//! Authentication state derived from the live configuration.
//!
//! Nothing here is cached: every predicate reads the configuration as it is
//! at call time, so updates (including a full reset) between calls are
//! observed.

use crate::config::Configuration;
use secrecy::{ExposeSecret, SecretString};

/// Basic-auth credential pair attached to a request at send time.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    /// Login name.
    pub login: String,
    /// Password.
    pub password: SecretString,
}

/// Returns the basic-auth pair iff both login and password are non-empty.
pub fn basic_credentials(config: &Configuration) -> Option<BasicCredentials> {
    let login = config.login.as_deref().filter(|l| !l.is_empty())?;
    let password = config
        .password
        .as_ref()
        .filter(|p| !p.expose_secret().is_empty())?;

    Some(BasicCredentials {
        login: login.to_string(),
        password: password.clone(),
    })
}

/// True iff basic credentials are configured.
pub fn authenticated(config: &Configuration) -> bool {
    basic_credentials(config).is_some()
}

/// True iff an OAuth token is configured.
pub fn oauthed(config: &Configuration) -> bool {
    config
        .oauth_token
        .as_ref()
        .map(|t| !t.expose_secret().is_empty())
        .unwrap_or(false)
}

/// True iff a client id/secret pair is configured for unauthenticated
/// rate-limit bumps.
pub fn unauthed_rate_limited(config: &Configuration) -> bool {
    let has_id = config
        .client_id
        .as_deref()
        .map(|id| !id.is_empty())
        .unwrap_or(false);
    let has_secret = config
        .client_secret
        .as_ref()
        .map(|s| !s.expose_secret().is_empty())
        .unwrap_or(false);

    has_id && has_secret
}

/// The client id/secret pair as request options.
pub fn unauthed_rate_limit_params(config: &Configuration) -> Vec<(String, String)> {
    let mut params = Vec::new();

    if let Some(id) = config.client_id.as_deref() {
        params.push(("client_id".to_string(), id.to_string()));
    }
    if let Some(secret) = config.client_secret.as_ref() {
        params.push(("client_secret".to_string(), secret.expose_secret().clone()));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigurationUpdate;

    fn config_with(update: ConfigurationUpdate) -> Configuration {
        let mut config = Configuration::new();
        config.apply(update);
        config
    }

    #[test]
    fn anonymous_by_default() {
        let config = Configuration::new();
        assert!(!authenticated(&config));
        assert!(!oauthed(&config));
        assert!(!unauthed_rate_limited(&config));
        assert!(basic_credentials(&config).is_none());
    }

    #[test]
    fn basic_requires_both_fields() {
        let config = config_with(ConfigurationUpdate::new().login("octocat"));
        assert!(!authenticated(&config));

        let config = config_with(ConfigurationUpdate::new().login("octocat").password("pw"));
        let creds = basic_credentials(&config).unwrap();
        assert_eq!(creds.login, "octocat");
        assert!(authenticated(&config));
    }

    #[test]
    fn empty_strings_do_not_authenticate() {
        let config = config_with(ConfigurationUpdate::new().login("octocat").password(""));
        assert!(!authenticated(&config));

        let config = config_with(ConfigurationUpdate::new().oauth_token(""));
        assert!(!oauthed(&config));
    }

    #[test]
    fn oauth_and_rate_limit_pairs() {
        let config = config_with(ConfigurationUpdate::new().oauth_token("t0k3n"));
        assert!(oauthed(&config));

        let config = config_with(ConfigurationUpdate::new().client_id("id"));
        assert!(!unauthed_rate_limited(&config));

        let config = config_with(
            ConfigurationUpdate::new()
                .client_id("id")
                .client_secret("secret"),
        );
        assert!(unauthed_rate_limited(&config));
        let params = unauthed_rate_limit_params(&config);
        assert_eq!(params[0], ("client_id".to_string(), "id".to_string()));
        assert_eq!(params[1], ("client_secret".to_string(), "secret".to_string()));
    }

    #[test]
    fn observes_reset() {
        let mut config = config_with(ConfigurationUpdate::new().oauth_token("t0k3n"));
        assert!(oauthed(&config));

        config.reset();
        assert!(!oauthed(&config));
    }
}
