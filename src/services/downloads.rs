//! Download endpoints.
//!
//! The downloads API was retired by GitHub in December 2012; these remain
//! for repositories that still carry legacy download resources.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Download endpoints.
pub struct Downloads<'a> {
    client: &'a Client,
}

impl<'a> Downloads<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists available downloads for a repository.
    ///
    /// <https://developer.github.com/v3/repos/downloads/#list-downloads-for-a-repository>
    pub fn list(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/downloads", repo), options)
    }

    /// Gets a single download.
    ///
    /// <https://developer.github.com/v3/repos/downloads/#get-a-single-download>
    pub fn get(&self, repo: &str, id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/downloads/{}", repo, id), options)
    }

    /// Deletes a download.
    ///
    /// <https://developer.github.com/v3/repos/downloads/#delete-a-single-download>
    pub fn delete(&self, repo: &str, id: u64, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/downloads/{}", repo, id),
            options,
        )
    }
}
