//! OAuth authorization endpoints.
//!
//! Token management for the authenticated user; the API only serves these
//! over Basic authentication.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// OAuth authorization endpoints.
pub struct Authorizations<'a> {
    client: &'a Client,
}

impl<'a> Authorizations<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the authenticated user's authorizations.
    ///
    /// <https://developer.github.com/v3/oauth/#list-your-authorizations>
    pub fn list(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("authorizations", options)
    }

    /// Gets a single authorization.
    ///
    /// <https://developer.github.com/v3/oauth/#get-a-single-authorization>
    pub fn get(&self, id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("authorizations/{}", id), options)
    }

    /// Creates an authorization. Scopes default to none.
    ///
    /// <https://developer.github.com/v3/oauth/#create-a-new-authorization>
    pub fn create(&self, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert_if_absent("scopes", "");
        self.client.request().post("authorizations", options)
    }

    /// Updates an authorization.
    ///
    /// <https://developer.github.com/v3/oauth/#update-an-existing-authorization>
    pub fn update(&self, id: u64, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert_if_absent("scopes", "");
        self.client
            .request()
            .patch(&format!("authorizations/{}", id), options)
    }

    /// Deletes an authorization.
    ///
    /// <https://developer.github.com/v3/oauth/#delete-an-authorization>
    pub fn delete(&self, id: u64, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("authorizations/{}", id),
            options,
        )
    }

    /// Builds the web-flow URL to send a user to for authorizing an
    /// application. No request is made. The client id defaults to the
    /// configured one, the base to the configured web endpoint.
    ///
    /// <https://developer.github.com/v3/oauth/#web-application-flow>
    pub fn authorize_url(&self, mut options: RequestOptions) -> GitHubResult<String> {
        let config = self.client.configuration_snapshot();

        if let Some(client_id) = config.client_id.as_deref() {
            options.insert_if_absent("client_id", client_id);
        }

        let endpoint = options
            .remove_string("endpoint")
            .unwrap_or(config.web_endpoint);

        Ok(format!(
            "{}login/oauth/authorize?{}",
            endpoint,
            options.to_query_string()?
        ))
    }
}
