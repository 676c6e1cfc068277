//! User endpoints.

use crate::client::Client;
use crate::config::ConfigurationUpdate;
use crate::errors::{GitHubResult, HttpErrorKind};
use crate::options::RequestOptions;
use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::Value;

/// User endpoints.
pub struct Users<'a> {
    client: &'a Client,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all GitHub users, in the order they signed up.
    ///
    /// <https://developer.github.com/v3/users/#get-all-users>
    pub fn all(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("users", options)
    }

    /// Gets a single user, or the authenticated user when `username` is
    /// `None`.
    ///
    /// <https://developer.github.com/v3/users/#get-a-single-user>
    pub fn get(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        match username {
            Some(user) => self
                .client
                .request()
                .get(&format!("users/{}", user), options),
            None => self.client.request().get("user", options),
        }
    }

    /// Exchanges an OAuth web-flow code for an access token. The call goes
    /// to the web endpoint, not the API endpoint, and asks for a JSON
    /// response. The application id and secret fall back to the configured
    /// `client_id` and `client_secret` when not given.
    ///
    /// <https://developer.github.com/v3/oauth/#web-application-flow>
    pub fn access_token(
        &self,
        code: &str,
        app_id: Option<&str>,
        app_secret: Option<&str>,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        let config = self.client.configuration_snapshot();

        let app_id = app_id
            .map(str::to_string)
            .or(config.client_id)
            .unwrap_or_default();
        let app_secret = app_secret
            .map(str::to_string)
            .or_else(|| config.client_secret.map(|s| s.expose_secret().clone()))
            .unwrap_or_default();

        options.insert_if_absent("endpoint", config.web_endpoint);
        options.insert_if_absent("accept", "application/json");
        options.insert_if_absent("code", code);
        options.insert_if_absent("client_id", app_id);
        options.insert_if_absent("client_secret", app_secret);

        self.client.request().post("login/oauth/access_token", options)
    }

    /// Validates a set of credentials by applying them over a reset
    /// configuration and fetching the authenticated user. An unauthorized
    /// response means invalid credentials; other failures propagate.
    pub fn validate_credentials(&self, update: ConfigurationUpdate) -> GitHubResult<bool> {
        self.client.reset_configuration();
        self.client.configure(update);

        match self.get(None, RequestOptions::new()) {
            Ok(Value::Null) => Ok(false),
            Ok(_) => Ok(true),
            Err(e) if e.http_kind() == Some(HttpErrorKind::Unauthorized) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Updates the authenticated user.
    ///
    /// <https://developer.github.com/v3/users/#update-the-authenticated-user>
    pub fn update(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().patch("user", options)
    }

    /// Lists followers of a user, or of the configured login.
    ///
    /// <https://developer.github.com/v3/users/followers/#list-followers-of-a-user>
    pub fn followers(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        let user = self.resolve_login(username);
        self.client
            .request()
            .get(&format!("users/{}/followers", user), options)
    }

    /// Lists users a user is following, or the configured login's.
    ///
    /// <https://developer.github.com/v3/users/followers/#list-users-followed-by-another-user>
    pub fn following(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        let user = self.resolve_login(username);
        self.client
            .request()
            .get(&format!("users/{}/following", user), options)
    }

    /// Checks if the authenticated user follows a user.
    ///
    /// <https://developer.github.com/v3/users/followers/#check-if-you-are-following-a-user>
    pub fn follows(&self, target: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("user/following/{}", target),
            options,
        )
    }

    /// Follows a user. Requires an authenticated client.
    ///
    /// <https://developer.github.com/v3/users/followers/#follow-a-user>
    pub fn follow(&self, username: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::PUT,
            &format!("user/following/{}", username),
            options,
        )
    }

    /// Unfollows a user. Requires an authenticated client.
    ///
    /// <https://developer.github.com/v3/users/followers/#unfollow-a-user>
    pub fn unfollow(&self, username: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("user/following/{}", username),
            options,
        )
    }

    /// Lists repositories starred by a user, or by the configured login.
    ///
    /// <https://developer.github.com/v3/activity/starring/#list-repositories-being-starred>
    pub fn starred(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        let user = self.resolve_login(username);
        self.client
            .request()
            .get(&format!("users/{}/starred", user), options)
    }

    /// Checks if the authenticated user has starred a repository.
    ///
    /// <https://developer.github.com/v3/activity/starring/#check-if-you-are-starring-a-repository>
    pub fn stars(&self, owner: &str, repo: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("user/starred/{}/{}", owner, repo),
            options,
        )
    }

    /// Lists repositories watched by a user, or by the configured login.
    ///
    /// <https://developer.github.com/v3/activity/watching/#list-repositories-being-watched>
    pub fn watched(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        let user = self.resolve_login(username);
        self.client
            .request()
            .get(&format!("users/{}/watched", user), options)
    }

    /// Lists repositories a user subscribes to, or the configured login's.
    ///
    /// <https://developer.github.com/v3/activity/watching/#list-repositories-being-watched>
    pub fn subscriptions(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        let user = self.resolve_login(username);
        self.client
            .request()
            .get(&format!("users/{}/subscriptions", user), options)
    }

    /// Gets a single public key of the authenticated user.
    ///
    /// <https://developer.github.com/v3/users/keys/#get-a-single-public-key>
    pub fn key(&self, key_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("user/keys/{}", key_id), options)
    }

    /// Lists the authenticated user's public keys.
    ///
    /// <https://developer.github.com/v3/users/keys/#list-your-public-keys>
    pub fn keys(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("user/keys", options)
    }

    /// Lists a user's public keys.
    ///
    /// <https://developer.github.com/v3/users/keys/#list-public-keys-for-a-user>
    pub fn user_keys(&self, username: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("users/{}/keys", username), options)
    }

    /// Adds a public key to the authenticated user.
    ///
    /// <https://developer.github.com/v3/users/keys/#create-a-public-key>
    pub fn add_key(&self, title: &str, key: &str, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert_if_absent("title", title);
        options.insert_if_absent("key", key);
        self.client.request().post("user/keys", options)
    }

    /// Updates a public key of the authenticated user.
    ///
    /// <https://developer.github.com/v3/users/keys/#update-a-public-key>
    pub fn update_key(&self, key_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .patch(&format!("user/keys/{}", key_id), options)
    }

    /// Removes a public key from the authenticated user.
    ///
    /// <https://developer.github.com/v3/users/keys/#delete-a-public-key>
    pub fn remove_key(&self, key_id: u64, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("user/keys/{}", key_id),
            options,
        )
    }

    /// Lists the authenticated user's email addresses.
    ///
    /// <https://developer.github.com/v3/users/emails/#list-email-addresses-for-a-user>
    pub fn emails(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("user/emails", options)
    }

    /// Adds an email address to the authenticated user.
    ///
    /// <https://developer.github.com/v3/users/emails/#add-email-addresses>
    pub fn add_email(&self, email: &str, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert_if_absent("email", email);
        self.client.request().post("user/emails", options)
    }

    /// Removes an email address from the authenticated user.
    ///
    /// <https://developer.github.com/v3/users/emails/#delete-email-addresses>
    pub fn remove_email(&self, email: &str, mut options: RequestOptions) -> GitHubResult<bool> {
        options.insert_if_absent("email", email);
        self.client
            .request()
            .boolean_from_response(Method::DELETE, "user/emails", options)
    }

    fn resolve_login(&self, username: Option<&str>) -> String {
        match username {
            Some(user) => user.to_string(),
            None => self
                .client
                .configuration_snapshot()
                .login
                .unwrap_or_default(),
        }
    }
}
