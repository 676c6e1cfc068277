//! Git reference endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Git reference endpoints.
pub struct Refs<'a> {
    client: &'a Client,
}

impl<'a> Refs<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists references for a repository, optionally filtered to a
    /// namespace such as `tags` or `heads`.
    ///
    /// <https://developer.github.com/v3/git/refs/#get-all-references>
    pub fn list(&self, repo: &str, namespace: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/git/refs/{}", repo, namespace), options)
    }

    /// Gets a single reference, e.g. `heads/master`.
    ///
    /// <https://developer.github.com/v3/git/refs/#get-a-reference>
    pub fn get(&self, repo: &str, reference: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/git/refs/{}", repo, reference), options)
    }

    /// Creates a reference. The `refs/` prefix is added to the name.
    ///
    /// <https://developer.github.com/v3/git/refs/#create-a-reference>
    pub fn create(
        &self,
        repo: &str,
        reference: &str,
        sha: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("ref", format!("refs/{}", reference));
        options.insert_if_absent("sha", sha);
        self.client
            .request()
            .post(&format!("repos/{}/git/refs", repo), options)
    }

    /// Updates a reference to point at a new SHA. `force` allows a
    /// non-fast-forward update.
    ///
    /// <https://developer.github.com/v3/git/refs/#update-a-reference>
    pub fn update(
        &self,
        repo: &str,
        reference: &str,
        sha: &str,
        force: bool,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("sha", sha);
        options.insert_if_absent("force", force);
        self.client
            .request()
            .patch(&format!("repos/{}/git/refs/{}", repo, reference), options)
    }

    /// Deletes a reference.
    ///
    /// <https://developer.github.com/v3/git/refs/#delete-a-reference>
    pub fn delete(&self, repo: &str, reference: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/git/refs/{}", repo, reference),
            options,
        )
    }
}
