//! Commit and commit comment endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Commit and commit comment endpoints.
pub struct Commits<'a> {
    client: &'a Client,
}

impl<'a> Commits<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists commits on a repository, starting from a SHA or branch.
    ///
    /// <https://developer.github.com/v3/repos/commits/#list-commits-on-a-repository>
    pub fn list(
        &self,
        repo: &str,
        sha_or_branch: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("sha", sha_or_branch);
        options.insert_if_absent("per_page", 25);
        self.client
            .request()
            .get(&format!("repos/{}/commits", repo), options)
    }

    /// Gets a single commit.
    ///
    /// <https://developer.github.com/v3/repos/commits/#get-a-single-commit>
    pub fn get(&self, repo: &str, sha: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/commits/{}", repo, sha), options)
    }

    /// Creates a commit object. `parents` is empty for a root commit.
    ///
    /// <https://developer.github.com/v3/git/commits/#create-a-commit>
    pub fn create(
        &self,
        repo: &str,
        message: &str,
        tree: &str,
        parents: &[&str],
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("message", message);
        options.insert_if_absent("tree", tree);
        if !parents.is_empty() {
            options.insert_if_absent("parents", serde_json::json!(parents));
        }
        self.client
            .request()
            .post(&format!("repos/{}/git/commits", repo), options)
    }

    /// Lists commit comments for a repository.
    ///
    /// <https://developer.github.com/v3/repos/comments/#list-commit-comments-for-a-repository>
    pub fn repo_comments(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/comments", repo), options)
    }

    /// Lists comments for a single commit.
    ///
    /// <https://developer.github.com/v3/repos/comments/#list-comments-for-a-single-commit>
    pub fn comments(&self, repo: &str, sha: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/commits/{}/comments", repo, sha), options)
    }

    /// Gets a single commit comment.
    ///
    /// <https://developer.github.com/v3/repos/comments/#get-a-single-commit-comment>
    pub fn comment(&self, repo: &str, comment_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/comments/{}", repo, comment_id), options)
    }

    /// Creates a commit comment. `path`, `line`, and `position` pin the
    /// comment to a location in the diff when given.
    ///
    /// <https://developer.github.com/v3/repos/comments/#create-a-commit-comment>
    #[allow(clippy::too_many_arguments)]
    pub fn create_comment(
        &self,
        repo: &str,
        sha: &str,
        body: &str,
        path: Option<&str>,
        line: Option<u64>,
        position: Option<u64>,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("body", body);
        options.insert_if_absent("commit_id", sha);
        if let Some(path) = path {
            options.insert_if_absent("path", path);
        }
        if let Some(line) = line {
            options.insert_if_absent("line", line);
        }
        if let Some(position) = position {
            options.insert_if_absent("position", position);
        }
        self.client
            .request()
            .post(&format!("repos/{}/commits/{}/comments", repo, sha), options)
    }

    /// Updates a commit comment.
    ///
    /// <https://developer.github.com/v3/repos/comments/#update-a-commit-comment>
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
            .patch(&format!("repos/{}/comments/{}", repo, comment_id), options)
    }

    /// Deletes a commit comment.
    ///
    /// <https://developer.github.com/v3/repos/comments/#delete-a-commit-comment>
    pub fn delete_comment(
        &self,
        repo: &str,
        comment_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/comments/{}", repo, comment_id),
            options,
        )
    }

    /// Compares two commits.
    ///
    /// <https://developer.github.com/v3/repos/commits/#compare-two-commits>
    pub fn compare(
        &self,
        repo: &str,
        start: &str,
        end: &str,
        options: RequestOptions,
    ) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/compare/{}...{}", repo, start, end), options)
    }

    /// Merges a branch or SHA into a base branch.
    ///
    /// <https://developer.github.com/v3/repos/merging/#perform-a-merge>
    pub fn merge(
        &self,
        repo: &str,
        base: &str,
        head: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("base", base);
        options.insert_if_absent("head", head);
        self.client
            .request()
            .post(&format!("repos/{}/merges", repo), options)
    }
}
