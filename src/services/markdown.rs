//! Markdown rendering endpoint.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use serde_json::Value;

/// Markdown rendering endpoint.
pub struct Markdown<'a> {
    client: &'a Client,
}

impl<'a> Markdown<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Renders a Markdown document to HTML. The response is raw HTML, so it
    /// comes back as a string value.
    ///
    /// <https://developer.github.com/v3/markdown/>
    pub fn render(&self, text: &str, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert("text", text);
        options.insert_if_absent("accept", "application/vnd.github.raw");
        self.client.request().post("markdown", options)
    }
}
