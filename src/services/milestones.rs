//! Milestone endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Milestone endpoints.
pub struct Milestones<'a> {
    client: &'a Client,
}

impl<'a> Milestones<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists milestones for a repository.
    ///
    /// <https://developer.github.com/v3/issues/milestones/#list-milestones-for-a-repository>
    pub fn list(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/milestones", repo), options)
    }

    /// Gets a single milestone.
    ///
    /// <https://developer.github.com/v3/issues/milestones/#get-a-single-milestone>
    pub fn get(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/milestones/{}", repo, number), options)
    }

    /// Creates a milestone.
    ///
    /// <https://developer.github.com/v3/issues/milestones/#create-a-milestone>
    pub fn create(&self, repo: &str, title: &str, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert_if_absent("title", title);
        self.client
            .request()
            .post(&format!("repos/{}/milestones", repo), options)
    }

    /// Updates a milestone.
    ///
    /// <https://developer.github.com/v3/issues/milestones/#update-a-milestone>
    pub fn update(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .patch(&format!("repos/{}/milestones/{}", repo, number), options)
    }

    /// Deletes a milestone.
    ///
    /// <https://developer.github.com/v3/issues/milestones/#delete-a-milestone>
    pub fn delete(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/milestones/{}", repo, number),
            options,
        )
    }
}
