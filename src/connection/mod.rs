//! Builds the request skeleton for one outgoing call: header set, auth
//! listener, and the merged option map. No network I/O happens here.

use crate::auth::{self, BasicCredentials};
use crate::config::Configuration;
use crate::errors::{GitHubError, GitHubResult};
use crate::options::RequestOptions;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};

/// The prepared skeleton for one call.
#[derive(Debug)]
pub struct ConnectionPlan {
    /// Content-Type and User-Agent headers.
    pub headers: HeaderMap,
    /// Basic-auth credentials, when the call should authenticate and the
    /// configuration carries a login/password pair.
    pub listener: Option<BasicCredentials>,
    /// The merged options: defaults and injected values layered under the
    /// caller's, so caller values win on conflict.
    pub options: RequestOptions,
}

/// Merges per-call options with defaults and configuration-derived values.
pub fn build(config: &Configuration, mut options: RequestOptions) -> GitHubResult<ConnectionPlan> {
    options.insert_if_absent("authenticate", true);
    options.insert_if_absent("force_urlencoded", false);
    options.insert_if_absent("raw", false);

    if let Some(proxy) = config.proxy.as_deref() {
        options.insert_if_absent("proxy", proxy);
    }

    // Anonymous calls with a registered application get the rate-limit bump
    // pair; GitHub accepts these as query params or body fields.
    if !auth::oauthed(config) && !auth::authenticated(config) && auth::unauthed_rate_limited(config)
    {
        for (key, value) in auth::unauthed_rate_limit_params(config) {
            options.insert_if_absent(key, value);
        }
    }

    let authenticate = options
        .get("authenticate")
        .and_then(|v| v.as_bool())
        .unwrap_or(true);

    let listener = if authenticate {
        auth::basic_credentials(config)
    } else {
        None
    };

    let force_urlencoded = options
        .get("force_urlencoded")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    let mut headers = HeaderMap::new();

    let content_type = if force_urlencoded {
        "application/x-www-form-urlencoded"
    } else {
        "application/json"
    };
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));

    let user_agent = HeaderValue::from_str(&config.user_agent)
        .map_err(|e| GitHubError::Configuration(format!("invalid user agent: {}", e)))?;
    headers.insert(USER_AGENT, user_agent);

    Ok(ConnectionPlan {
        headers,
        listener,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigurationUpdate;
    use serde_json::Value;

    fn config_with(update: ConfigurationUpdate) -> Configuration {
        let mut config = Configuration::new();
        config.apply(update);
        config
    }

    #[test]
    fn defaults_layered_under_caller_values() {
        let config = Configuration::new();
        let plan = build(&config, RequestOptions::new().set("authenticate", false)).unwrap();

        assert_eq!(plan.options.get("authenticate"), Some(&Value::from(false)));
        assert_eq!(plan.options.get("force_urlencoded"), Some(&Value::from(false)));
        assert_eq!(plan.options.get("raw"), Some(&Value::from(false)));
    }

    #[test]
    fn proxy_injected_but_caller_wins() {
        let config = config_with(ConfigurationUpdate::new().proxy("http://proxy:3128"));

        let plan = build(&config, RequestOptions::new()).unwrap();
        assert_eq!(
            plan.options.get("proxy"),
            Some(&Value::from("http://proxy:3128"))
        );

        let plan = build(&config, RequestOptions::new().set("proxy", "http://other:80")).unwrap();
        assert_eq!(plan.options.get("proxy"), Some(&Value::from("http://other:80")));
    }

    #[test]
    fn rate_limit_params_only_when_anonymous() {
        let anonymous = config_with(
            ConfigurationUpdate::new()
                .client_id("id")
                .client_secret("secret"),
        );
        let plan = build(&anonymous, RequestOptions::new()).unwrap();
        assert_eq!(plan.options.get("client_id"), Some(&Value::from("id")));
        assert_eq!(plan.options.get("client_secret"), Some(&Value::from("secret")));

        let oauthed = config_with(
            ConfigurationUpdate::new()
                .client_id("id")
                .client_secret("secret")
                .oauth_token("t0k3n"),
        );
        let plan = build(&oauthed, RequestOptions::new()).unwrap();
        assert!(plan.options.get("client_id").is_none());
    }

    #[test]
    fn listener_requires_authenticate_and_credentials() {
        let config = config_with(ConfigurationUpdate::new().login("x").password("y"));

        let plan = build(&config, RequestOptions::new()).unwrap();
        assert_eq!(plan.listener.as_ref().unwrap().login, "x");

        let plan = build(&config, RequestOptions::new().set("authenticate", false)).unwrap();
        assert!(plan.listener.is_none());

        let plan = build(&Configuration::new(), RequestOptions::new()).unwrap();
        assert!(plan.listener.is_none());
    }

    #[test]
    fn content_type_honors_force_urlencoded() {
        let config = Configuration::new();

        let plan = build(&config, RequestOptions::new()).unwrap();
        assert_eq!(plan.headers[CONTENT_TYPE], "application/json");

        let plan = build(&config, RequestOptions::new().set("force_urlencoded", true)).unwrap();
        assert_eq!(plan.headers[CONTENT_TYPE], "application/x-www-form-urlencoded");
    }

    #[test]
    fn user_agent_from_configuration() {
        let config = config_with(ConfigurationUpdate::new().user_agent("My mashup"));
        let plan = build(&config, RequestOptions::new()).unwrap();
        assert_eq!(plan.headers[USER_AGENT], "My mashup");
    }
}
