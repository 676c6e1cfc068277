//! Label endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Label endpoints.
pub struct Labels<'a> {
    client: &'a Client,
}

impl<'a> Labels<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists all labels for a repository.
    ///
    /// <https://developer.github.com/v3/issues/labels/#list-all-labels-for-this-repository>
    pub fn list(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/labels", repo), options)
    }

    /// Gets a single label. Label names may contain spaces and punctuation,
    /// so the name is form-encoded into the path.
    ///
    /// <https://developer.github.com/v3/issues/labels/#get-a-single-label>
    pub fn get(&self, repo: &str, name: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/labels/{}", repo, encode(name)), options)
    }

    /// Creates a label. `color` is a hex color without the leading `#`.
    ///
    /// <https://developer.github.com/v3/issues/labels/#create-a-label>
    pub fn add(
        &self,
        repo: &str,
        name: &str,
        color: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("name", name);
        options.insert_if_absent("color", color);
        self.client
            .request()
            .post(&format!("repos/{}/labels", repo), options)
    }

    /// Updates a label.
    ///
    /// <https://developer.github.com/v3/issues/labels/#update-a-label>
    pub fn update(&self, repo: &str, name: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .patch(&format!("repos/{}/labels/{}", repo, encode(name)), options)
    }

    /// Deletes a label from a repository, removing it from every issue.
    ///
    /// <https://developer.github.com/v3/issues/labels/#delete-a-label>
    pub fn delete(&self, repo: &str, name: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/labels/{}", repo, encode(name)),
            options,
        )
    }

    /// Removes a label from an issue. Returns the labels still on the issue.
    ///
    /// <https://developer.github.com/v3/issues/labels/#remove-a-label-from-an-issue>
    pub fn remove_from_issue(
        &self,
        repo: &str,
        number: u64,
        name: &str,
        options: RequestOptions,
    ) -> GitHubResult<Value> {
        self.client.request().delete(
            &format!("repos/{}/issues/{}/labels/{}", repo, number, encode(name)),
            options,
        )
    }

    /// Removes all labels from an issue.
    ///
    /// <https://developer.github.com/v3/issues/labels/#remove-all-labels-from-an-issue>
    pub fn remove_all_from_issue(
        &self,
        repo: &str,
        number: u64,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/issues/{}/labels", repo, number),
            options,
        )
    }

    /// Lists labels on an issue.
    ///
    /// <https://developer.github.com/v3/issues/labels/#list-labels-on-an-issue>
    pub fn for_issue(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/issues/{}/labels", repo, number), options)
    }

    /// Adds labels to an issue. Returns the labels now on the issue.
    ///
    /// <https://developer.github.com/v3/issues/labels/#add-labels-to-an-issue>
    pub fn add_to_issue(
        &self,
        repo: &str,
        number: u64,
        labels: &[&str],
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("labels", serde_json::json!(labels));
        self.client
            .request()
            .post(&format!("repos/{}/issues/{}/labels", repo, number), options)
    }

    /// Replaces all labels on an issue.
    ///
    /// <https://developer.github.com/v3/issues/labels/#replace-all-labels-for-an-issue>
    pub fn replace_all_for_issue(
        &self,
        repo: &str,
        number: u64,
        labels: &[&str],
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("labels", serde_json::json!(labels));
        self.client
            .request()
            .put(&format!("repos/{}/issues/{}/labels", repo, number), options)
    }

    /// Lists labels for every issue in a milestone.
    ///
    /// <https://developer.github.com/v3/issues/labels/#get-labels-for-every-issue-in-a-milestone>
    pub fn for_milestone(
        &self,
        repo: &str,
        number: u64,
        options: RequestOptions,
    ) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/milestones/{}/labels", repo, number), options)
    }
}

fn encode(name: &str) -> String {
    url::form_urlencoded::byte_serialize(name.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_handles_spaces_and_symbols() {
        assert_eq!(encode("bug"), "bug");
        assert_eq!(encode("help wanted"), "help+wanted");
        assert_eq!(encode("sev/1"), "sev%2F1");
    }
}
