//! Repository content endpoints.

use crate::client::Client;
use crate::errors::{GitHubError, GitHubResult};
use crate::options::RequestOptions;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Method;
use serde_json::Value;

/// Repository content endpoints.
pub struct Contents<'a> {
    client: &'a Client,
}

impl<'a> Contents<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets the default README for a repository.
    ///
    /// <https://developer.github.com/v3/repos/contents/#get-the-readme>
    pub fn readme(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/readme", repo), options)
    }

    /// Gets the contents of a file, or the listing of a folder.
    ///
    /// <https://developer.github.com/v3/repos/contents/#get-contents>
    pub fn get(&self, repo: &str, path: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/contents/{}", repo, path), options)
    }

    /// Creates a file. The content is base64-encoded on the way out, as the
    /// API requires.
    ///
    /// <https://developer.github.com/v3/repos/contents/#create-a-file>
    pub fn create(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        content: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        if content.is_empty() {
            return Err(GitHubError::Configuration("content required".to_string()));
        }

        options.insert("content", STANDARD.encode(content));
        options.insert("message", message);
        self.client
            .request()
            .put(&format!("repos/{}/contents/{}", repo, path), options)
    }

    /// Updates a file. `sha` is the blob SHA of the content being replaced.
    ///
    /// <https://developer.github.com/v3/repos/contents/#update-a-file>
    pub fn update(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        sha: &str,
        content: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("sha", sha);
        self.create(repo, path, message, content, options)
    }

    /// Deletes a file.
    ///
    /// <https://developer.github.com/v3/repos/contents/#delete-a-file>
    pub fn delete(
        &self,
        repo: &str,
        path: &str,
        message: &str,
        sha: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert("message", message);
        options.insert("sha", sha);
        self.client
            .request()
            .delete(&format!("repos/{}/contents/{}", repo, path), options)
    }

    /// Gets the download URL for a tarball or zipball archive of a ref.
    /// The format comes from the `format` option and defaults to `tarball`.
    ///
    /// <https://developer.github.com/v3/repos/contents/#get-archive-link>
    pub fn archive_link(
        &self,
        repo: &str,
        reference: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<String> {
        let format = options
            .remove_string("format")
            .unwrap_or_else(|| "tarball".to_string());

        let response = self.client.request().send(
            Method::HEAD,
            &format!("repos/{}/{}/{}", repo, format, reference),
            options,
        )?;

        response
            .header("Location")
            .map(str::to_string)
            .ok_or_else(|| GitHubError::Configuration("missing Location header".to_string()))
    }
}
