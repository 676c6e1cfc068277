//! Pull request endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Pull request endpoints.
pub struct PullRequests<'a> {
    client: &'a Client,
}

impl<'a> PullRequests<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists pull requests for a repository.
    ///
    /// <https://developer.github.com/v3/pulls/#list-pull-requests>
    pub fn list(&self, repo: &str, state: &str, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert_if_absent("state", state);
        self.client
            .request()
            .get(&format!("repos/{}/pulls", repo), options)
    }

    /// Gets a single pull request.
    ///
    /// <https://developer.github.com/v3/pulls/#get-a-single-pull-request>
    pub fn get(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/pulls/{}", repo, number), options)
    }

    /// Creates a pull request.
    ///
    /// <https://developer.github.com/v3/pulls/#create-a-pull-request>
    pub fn create(
        &self,
        repo: &str,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("base", base);
        options.insert_if_absent("head", head);
        options.insert_if_absent("title", title);
        options.insert_if_absent("body", body);
        self.client
            .request()
            .post(&format!("repos/{}/pulls", repo), options)
    }

    /// Creates a pull request from an existing issue.
    ///
    /// <https://developer.github.com/v3/pulls/#alternative-input>
    pub fn create_for_issue(
        &self,
        repo: &str,
        base: &str,
        head: &str,
        issue: u64,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("base", base);
        options.insert_if_absent("head", head);
        options.insert_if_absent("issue", issue);
        self.client
            .request()
            .post(&format!("repos/{}/pulls", repo), options)
    }

    /// Updates a pull request.
    ///
    /// <https://developer.github.com/v3/pulls/#update-a-pull-request>
    pub fn update(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .patch(&format!("repos/{}/pulls/{}", repo, number), options)
    }

    /// Lists commits on a pull request.
    ///
    /// <https://developer.github.com/v3/pulls/#list-commits-on-a-pull-request>
    pub fn commits(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/pulls/{}/commits", repo, number), options)
    }

    /// Lists review comments for a repository.
    ///
    /// <https://developer.github.com/v3/pulls/comments/#list-comments-in-a-repository>
    pub fn repo_comments(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/pulls/comments", repo), options)
    }

    /// Lists comments on a pull request.
    ///
    /// <https://developer.github.com/v3/pulls/#list-comments-on-a-pull-request>
    pub fn comments(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/pulls/{}/comments", repo, number), options)
    }

    /// Gets a single review comment.
    ///
    /// <https://developer.github.com/v3/pulls/comments/#get-a-single-comment>
    pub fn comment(&self, repo: &str, comment_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/pulls/comments/{}", repo, comment_id), options)
    }

    /// Creates a review comment on a pull request.
    ///
    /// <https://developer.github.com/v3/pulls/comments/#create-a-comment>
    #[allow(clippy::too_many_arguments)]
    pub fn create_comment(
        &self,
        repo: &str,
        number: u64,
        body: &str,
        commit_id: &str,
        path: &str,
        position: u64,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("body", body);
        options.insert_if_absent("commit_id", commit_id);
        options.insert_if_absent("path", path);
        options.insert_if_absent("position", position);
        self.client
            .request()
            .post(&format!("repos/{}/pulls/{}/comments", repo, number), options)
    }

    /// Creates a reply to a review comment.
    ///
    /// <https://developer.github.com/v3/pulls/comments/#create-a-comment>
    pub fn create_comment_reply(
        &self,
        repo: &str,
        number: u64,
        body: &str,
        comment_id: u64,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("body", body);
        options.insert_if_absent("in_reply_to", comment_id);
        self.client
            .request()
            .post(&format!("repos/{}/pulls/{}/comments", repo, number), options)
    }

    /// Updates a review comment.
    ///
    /// <https://developer.github.com/v3/pulls/comments/#edit-a-comment>
    pub fn update_comment(
        &self,
        repo: &str,
        comment_id: u64,
        body: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("body", body);
        self.client
            .request()
            .patch(&format!("repos/{}/pulls/comments/{}", repo, comment_id), options)
    }

    /// Deletes a review comment.
    ///
    /// <https://developer.github.com/v3/pulls/comments/#delete-a-comment>
    pub fn delete_comment(
        &self,
        repo: &str,
        comment_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/pulls/comments/{}", repo, comment_id),
            options,
        )
    }

    /// Lists files on a pull request.
    ///
    /// <https://developer.github.com/v3/pulls/#list-files-on-a-pull-request>
    pub fn files(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/pulls/{}/files", repo, number), options)
    }

    /// Merges a pull request.
    ///
    /// <https://developer.github.com/v3/pulls/#merge-a-pull-request-merge-buttontrade>
    pub fn merge(
        &self,
        repo: &str,
        number: u64,
        commit_message: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("commit_message", commit_message);
        self.client
            .request()
            .put(&format!("repos/{}/pulls/{}/merge", repo, number), options)
    }

    /// Checks whether a pull request has been merged.
    ///
    /// <https://developer.github.com/v3/pulls/#get-if-a-pull-request-has-been-merged>
    pub fn is_merged(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("repos/{}/pulls/{}/merge", repo, number),
            options,
        )
    }
}
