//! Gist endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Gist endpoints.
pub struct Gists<'a> {
    client: &'a Client,
}

impl<'a> Gists<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists gists for a user, or the authenticated user's gists.
    ///
    /// <https://developer.github.com/v3/gists/#list-gists>
    pub fn list(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        match username {
            Some(user) => self
                .client
                .request()
                .get(&format!("users/{}/gists", user), options),
            None => self.client.request().get("gists", options),
        }
    }

    /// Lists all public gists.
    ///
    /// <https://developer.github.com/v3/gists/#list-gists>
    pub fn public_gists(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("gists/public", options)
    }

    /// Lists the authenticated user's starred gists.
    ///
    /// <https://developer.github.com/v3/gists/#list-gists>
    pub fn starred_gists(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("gists/starred", options)
    }

    /// Gets a single gist.
    ///
    /// <https://developer.github.com/v3/gists/#get-a-single-gist>
    pub fn get(&self, gist: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get(&format!("gists/{}", gist), options)
    }

    /// Creates a gist.
    ///
    /// <https://developer.github.com/v3/gists/#create-a-gist>
    pub fn create(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().post("gists", options)
    }

    /// Edits a gist.
    ///
    /// <https://developer.github.com/v3/gists/#edit-a-gist>
    pub fn edit(&self, gist: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().patch(&format!("gists/{}", gist), options)
    }

    /// Deletes a gist.
    ///
    /// <https://developer.github.com/v3/gists/#delete-a-gist>
    pub fn delete(&self, gist: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::DELETE, &format!("gists/{}", gist), options)
    }

    /// Stars a gist.
    ///
    /// <https://developer.github.com/v3/gists/#star-a-gist>
    pub fn star(&self, gist: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::PUT, &format!("gists/{}/star", gist), options)
    }

    /// Unstars a gist.
    ///
    /// <https://developer.github.com/v3/gists/#unstar-a-gist>
    pub fn unstar(&self, gist: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::DELETE, &format!("gists/{}/star", gist), options)
    }

    /// Checks if a gist is starred.
    ///
    /// <https://developer.github.com/v3/gists/#check-if-a-gist-is-starred>
    pub fn is_starred(&self, gist: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::GET, &format!("gists/{}/star", gist), options)
    }

    /// Forks a gist.
    ///
    /// <https://developer.github.com/v3/gists/#fork-a-gist>
    pub fn fork(&self, gist: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .post(&format!("gists/{}/forks", gist), options)
    }

    /// Lists comments on a gist.
    ///
    /// <https://developer.github.com/v3/gists/comments/#list-comments-on-a-gist>
    pub fn comments(&self, gist: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("gists/{}/comments", gist), options)
    }

    /// Gets a single gist comment.
    ///
    /// <https://developer.github.com/v3/gists/comments/#get-a-single-comment>
    pub fn comment(&self, gist: &str, comment_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("gists/{}/comments/{}", gist, comment_id), options)
    }

    /// Creates a gist comment. Requires an authenticated client.
    ///
    /// <https://developer.github.com/v3/gists/comments/#create-a-comment>
    pub fn create_comment(
        &self,
        gist: &str,
        comment: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("body", comment);
        self.client
            .request()
            .post(&format!("gists/{}/comments", gist), options)
    }

    /// Updates a gist comment. Requires an authenticated client.
    ///
    /// <https://developer.github.com/v3/gists/comments/#edit-a-comment>
    pub fn update_comment(
        &self,
        gist: &str,
        comment_id: u64,
        comment: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("body", comment);
        self.client
            .request()
            .patch(&format!("gists/{}/comments/{}", gist, comment_id), options)
    }

    /// Deletes a gist comment. Requires an authenticated client.
    ///
    /// <https://developer.github.com/v3/gists/comments/#delete-a-comment>
    pub fn delete_comment(
        &self,
        gist: &str,
        comment_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("gists/{}/comments/{}", gist, comment_id),
            options,
        )
    }
}
