//! Site-level endpoints: emojis, gitignore templates, octocat, rate limit.

use crate::client::Client;
use crate::errors::{GitHubError, GitHubResult};
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Site-level endpoints.
pub struct Meta<'a> {
    client: &'a Client,
}

impl<'a> Meta<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all emojis used on GitHub.
    ///
    /// <https://developer.github.com/v3/emojis/#emojis>
    pub fn emojis(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("emojis", options)
    }

    /// Lists available gitignore templates.
    ///
    /// <https://developer.github.com/v3/gitignore/#listing-available-templates>
    pub fn gitignore_templates(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("gitignore/templates", options)
    }

    /// Gets a single gitignore template.
    ///
    /// <https://developer.github.com/v3/gitignore/#get-a-single-template>
    pub fn gitignore_template(&self, name: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("gitignore/templates/{}", name), options)
    }

    /// Returns an ASCII Octocat speaking GitHub wisdom, or the given text.
    /// The response is plain text, so it comes back as a string value.
    pub fn octocat(&self, text: Option<&str>, mut options: RequestOptions) -> GitHubResult<Value> {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            options.insert("s", text);
        }
        self.client.request().get("octocat", options)
    }

    /// Gets the hourly request quota from the `X-RateLimit-Limit` header.
    ///
    /// <https://developer.github.com/v3/#rate-limiting>
    pub fn rate_limit(&self, options: RequestOptions) -> GitHubResult<u64> {
        self.rate_limit_header("X-RateLimit-Limit", options)
    }

    /// Gets the remaining request quota from the `X-RateLimit-Remaining`
    /// header.
    ///
    /// <https://developer.github.com/v3/#rate-limiting>
    pub fn rate_limit_remaining(&self, options: RequestOptions) -> GitHubResult<u64> {
        self.rate_limit_header("X-RateLimit-Remaining", options)
    }

    fn rate_limit_header(&self, name: &str, options: RequestOptions) -> GitHubResult<u64> {
        let response = self.client.request().send(Method::GET, "rate_limit", options)?;

        response
            .header(name)
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| {
                GitHubError::Configuration(format!("missing or malformed {} header", name))
            })
    }
}
