//! Git object endpoints: trees, blobs and tag objects.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use serde_json::Value;

/// Git object endpoints.
pub struct Objects<'a> {
    client: &'a Client,
}

impl<'a> Objects<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a tree with its root-level objects.
    ///
    /// <https://developer.github.com/v3/git/trees/#get-a-tree>
    pub fn tree(&self, repo: &str, tree_sha: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/git/trees/{}", repo, tree_sha), options)
    }

    /// Creates a tree from a list of tree entries.
    ///
    /// <https://developer.github.com/v3/git/trees/#create-a-tree>
    pub fn create_tree(
        &self,
        repo: &str,
        tree: Value,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("tree", tree);
        self.client
            .request()
            .post(&format!("repos/{}/git/trees", repo), options)
    }

    /// Gets a blob with its content and encoding.
    ///
    /// <https://developer.github.com/v3/git/blobs/#get-a-blob>
    pub fn blob(&self, repo: &str, blob_sha: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/git/blobs/{}", repo, blob_sha), options)
    }

    /// Creates a blob. `encoding` is `utf-8` or `base64`.
    ///
    /// <https://developer.github.com/v3/git/blobs/#create-a-blob>
    pub fn create_blob(
        &self,
        repo: &str,
        content: &str,
        encoding: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("content", content);
        options.insert_if_absent("encoding", encoding);
        self.client
            .request()
            .post(&format!("repos/{}/git/blobs", repo), options)
    }

    /// Gets a tag object.
    ///
    /// <https://developer.github.com/v3/git/tags/#get-a-tag>
    pub fn tag(&self, repo: &str, tag_sha: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/git/tags/{}", repo, tag_sha), options)
    }

    /// Creates an annotated tag object. `object_type` names what is being
    /// tagged: a `commit`, `tree` or `blob`. Requires an authenticated
    /// client.
    ///
    /// <https://developer.github.com/v3/git/tags/#create-a-tag-object>
    #[allow(clippy::too_many_arguments)]
    pub fn create_tag(
        &self,
        repo: &str,
        tag: &str,
        message: &str,
        object_sha: &str,
        object_type: &str,
        tagger_name: &str,
        tagger_email: &str,
        tagger_date: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("tag", tag);
        options.insert_if_absent("message", message);
        options.insert_if_absent("object", object_sha);
        options.insert_if_absent("type", object_type);
        options.insert_if_absent(
            "tagger",
            serde_json::json!({
                "name": tagger_name,
                "email": tagger_email,
                "date": tagger_date,
            }),
        );
        self.client
            .request()
            .post(&format!("repos/{}/git/tags", repo), options)
    }
}
