//! Issue endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use serde_json::Value;

/// Issue endpoints.
pub struct Issues<'a> {
    client: &'a Client,
}

impl<'a> Issues<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists issues for a repository, or for the authenticated user across
    /// visible repositories when `repo` is `None`.
    ///
    /// <https://developer.github.com/v3/issues/#list-issues>
    pub fn list(&self, repo: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        match repo {
            Some(repo) => self
                .client
                .request()
                .get(&format!("repos/{}/issues", repo), options),
            None => self.client.request().get("issues", options),
        }
    }

    /// Lists issues across the authenticated user's owned and member
    /// repositories.
    ///
    /// <https://developer.github.com/v3/issues/#list-issues>
    pub fn user_issues(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("user/issues", options)
    }

    /// Lists issues for an organization the authenticated user belongs to.
    ///
    /// <https://developer.github.com/v3/issues/#list-issues>
    pub fn org_issues(&self, org: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("orgs/{}/issues", org), options)
    }

    /// Gets a single issue.
    ///
    /// <https://developer.github.com/v3/issues/#get-a-single-issue>
    pub fn get(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/issues/{}", repo, number), options)
    }

    /// Creates an issue.
    ///
    /// <https://developer.github.com/v3/issues/#create-an-issue>
    pub fn create(
        &self,
        repo: &str,
        title: &str,
        body: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("title", title);
        options.insert_if_absent("body", body);
        self.client
            .request()
            .post(&format!("repos/{}/issues", repo), options)
    }

    /// Updates an issue.
    ///
    /// <https://developer.github.com/v3/issues/#edit-an-issue>
    pub fn update(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .patch(&format!("repos/{}/issues/{}", repo, number), options)
    }

    /// Closes an issue.
    ///
    /// <https://developer.github.com/v3/issues/#edit-an-issue>
    pub fn close(&self, repo: &str, number: u64, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert("state", "closed");
        self.update(repo, number, options)
    }

    /// Reopens a closed issue.
    ///
    /// <https://developer.github.com/v3/issues/#edit-an-issue>
    pub fn reopen(&self, repo: &str, number: u64, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert("state", "open");
        self.update(repo, number, options)
    }

    /// Lists issue comments for a repository.
    ///
    /// <https://developer.github.com/v3/issues/comments/#list-comments-in-a-repository>
    pub fn repo_comments(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/issues/comments", repo), options)
    }

    /// Lists comments on an issue.
    ///
    /// <https://developer.github.com/v3/issues/comments/#list-comments-on-an-issue>
    pub fn comments(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/issues/{}/comments", repo, number), options)
    }

    /// Gets a single issue comment.
    ///
    /// <https://developer.github.com/v3/issues/comments/#get-a-single-comment>
    pub fn comment(&self, repo: &str, comment_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/issues/comments/{}", repo, comment_id), options)
    }

    /// Adds a comment to an issue.
    ///
    /// <https://developer.github.com/v3/issues/comments/#create-a-comment>
    pub fn add_comment(
        &self,
        repo: &str,
        number: u64,
        comment: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("body", comment);
        self.client
            .request()
            .post(&format!("repos/{}/issues/{}/comments", repo, number), options)
    }

    /// Updates an issue comment.
    ///
    /// <https://developer.github.com/v3/issues/comments/#edit-a-comment>
    pub fn update_comment(
        &self,
        repo: &str,
        comment_id: u64,
        comment: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("body", comment);
        self.client
            .request()
            .patch(&format!("repos/{}/issues/comments/{}", repo, comment_id), options)
    }

    /// Deletes an issue comment.
    ///
    /// <https://developer.github.com/v3/issues/comments/#delete-a-comment>
    pub fn delete_comment(
        &self,
        repo: &str,
        comment_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            reqwest::Method::DELETE,
            &format!("repos/{}/issues/comments/{}", repo, comment_id),
            options,
        )
    }

    /// Lists events for an issue.
    ///
    /// <https://developer.github.com/v3/issues/events/#list-events-for-an-issue>
    pub fn events(&self, repo: &str, number: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/issues/{}/events", repo, number), options)
    }

    /// Gets a single issue event.
    ///
    /// <https://developer.github.com/v3/issues/events/#get-a-single-event>
    pub fn event(&self, repo: &str, event_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/issues/events/{}", repo, event_id), options)
    }
}
