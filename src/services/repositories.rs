//! Repository endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Repository endpoints.
pub struct Repositories<'a> {
    client: &'a Client,
}

impl<'a> Repositories<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets a single repository.
    ///
    /// <https://developer.github.com/v3/repos/#get>
    pub fn get(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get(&format!("repos/{}", repo), options)
    }

    /// Edits a repository.
    ///
    /// <https://developer.github.com/v3/repos/#edit>
    pub fn edit(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().patch(&format!("repos/{}", repo), options)
    }

    /// Lists repositories for a user, or the authenticated user's
    /// repositories.
    ///
    /// <https://developer.github.com/v3/repos/#list-your-repositories>
    pub fn list(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        match username {
            Some(user) => self
                .client
                .request()
                .get(&format!("users/{}/repos", user), options),
            None => self.client.request().get("user/repos", options),
        }
    }

    /// Lists all public repositories.
    ///
    /// <https://developer.github.com/v3/repos/#list-all-public-repositories>
    pub fn all(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("repositories", options)
    }

    /// Creates a repository for the authenticated user, or under an
    /// organization when the `organization` option is set.
    ///
    /// <https://developer.github.com/v3/repos/#create>
    pub fn create(&self, name: &str, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert_if_absent("name", name);

        match options.remove_string("organization") {
            Some(org) => self
                .client
                .request()
                .post(&format!("orgs/{}/repos", org), options),
            None => self.client.request().post("user/repos", options),
        }
    }

    /// Deletes a repository.
    ///
    /// <https://developer.github.com/v3/repos/#delete-a-repository>
    pub fn delete(&self, repo: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::DELETE, &format!("repos/{}", repo), options)
    }

    /// Forks a repository.
    ///
    /// <https://developer.github.com/v3/repos/forks/#create-a-fork>
    pub fn fork(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .post(&format!("repos/{}/forks", repo), options)
    }

    /// Stars a repository.
    ///
    /// <https://developer.github.com/v3/activity/starring/#star-a-repository>
    pub fn star(&self, repo: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::PUT, &format!("user/starred/{}", repo), options)
    }

    /// Unstars a repository.
    ///
    /// <https://developer.github.com/v3/activity/starring/#unstar-a-repository>
    pub fn unstar(&self, repo: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::DELETE, &format!("user/starred/{}", repo), options)
    }

    /// Watches a repository.
    ///
    /// <https://developer.github.com/v3/activity/watching/#watch-a-repository-legacy>
    pub fn watch(&self, repo: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::PUT, &format!("user/watched/{}", repo), options)
    }

    /// Unwatches a repository.
    ///
    /// <https://developer.github.com/v3/activity/watching/#stop-watching-a-repository-legacy>
    pub fn unwatch(&self, repo: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client
            .request()
            .boolean_from_response(Method::DELETE, &format!("user/watched/{}", repo), options)
    }

    /// Lists collaborators.
    ///
    /// <https://developer.github.com/v3/repos/collaborators/#list>
    pub fn collaborators(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/collaborators", repo), options)
    }

    /// Adds a collaborator.
    ///
    /// <https://developer.github.com/v3/repos/collaborators/#add-collaborator>
    pub fn add_collaborator(
        &self,
        repo: &str,
        collaborator: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::PUT,
            &format!("repos/{}/collaborators/{}", repo, collaborator),
            options,
        )
    }

    /// Removes a collaborator.
    ///
    /// <https://developer.github.com/v3/repos/collaborators/#remove-collaborator>
    pub fn remove_collaborator(
        &self,
        repo: &str,
        collaborator: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/collaborators/{}", repo, collaborator),
            options,
        )
    }

    /// Checks if a user is a collaborator.
    ///
    /// <https://developer.github.com/v3/repos/collaborators/#get>
    pub fn is_collaborator(
        &self,
        repo: &str,
        collaborator: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("repos/{}/collaborators/{}", repo, collaborator),
            options,
        )
    }

    /// Lists deploy keys.
    ///
    /// <https://developer.github.com/v3/repos/keys/#list>
    pub fn deploy_keys(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/keys", repo), options)
    }

    /// Adds a deploy key.
    ///
    /// <https://developer.github.com/v3/repos/keys/#create>
    pub fn add_deploy_key(
        &self,
        repo: &str,
        title: &str,
        key: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<Value> {
        options.insert_if_absent("title", title);
        options.insert_if_absent("key", key);
        self.client
            .request()
            .post(&format!("repos/{}/keys", repo), options)
    }

    /// Removes a deploy key.
    ///
    /// <https://developer.github.com/v3/repos/keys/#delete>
    pub fn remove_deploy_key(
        &self,
        repo: &str,
        key_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/keys/{}", repo, key_id),
            options,
        )
    }

    /// Lists branches.
    ///
    /// <https://developer.github.com/v3/repos/#list-branches>
    pub fn branches(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/branches", repo), options)
    }

    /// Gets a single branch.
    ///
    /// <https://developer.github.com/v3/repos/#get-branch>
    pub fn branch(&self, repo: &str, branch: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/branches/{}", repo, branch), options)
    }

    /// Lists tags.
    ///
    /// <https://developer.github.com/v3/repos/#list-tags>
    pub fn tags(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/tags", repo), options)
    }

    /// Lists languages with byte counts.
    ///
    /// <https://developer.github.com/v3/repos/#list-languages>
    pub fn languages(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/languages", repo), options)
    }

    /// Lists contributors.
    ///
    /// <https://developer.github.com/v3/repos/#list-contributors>
    pub fn contributors(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/contributors", repo), options)
    }

    /// Lists available assignees.
    ///
    /// <https://developer.github.com/v3/issues/assignees/#list-assignees>
    pub fn assignees(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/assignees", repo), options)
    }

    /// Checks whether a user may be assigned issues in a repository.
    ///
    /// <https://developer.github.com/v3/issues/assignees/#check-assignee>
    pub fn check_assignee(
        &self,
        repo: &str,
        assignee: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("repos/{}/assignees/{}", repo, assignee),
            options,
        )
    }

    /// Lists watchers of a repository.
    ///
    /// <https://developer.github.com/v3/activity/watching/#list-watchers>
    pub fn subscribers(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/subscribers", repo), options)
    }

    /// Gets the authenticated user's subscription to a repository.
    ///
    /// <https://developer.github.com/v3/activity/watching/#get-a-repository-subscription>
    pub fn subscription(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/subscription", repo), options)
    }

    /// Sets the authenticated user's subscription to a repository.
    ///
    /// <https://developer.github.com/v3/activity/watching/#set-a-repository-subscription>
    pub fn update_subscription(&self, repo: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .put(&format!("repos/{}/subscription", repo), options)
    }

    /// Deletes the authenticated user's subscription to a repository.
    ///
    /// <https://developer.github.com/v3/activity/watching/#delete-a-repository-subscription>
    pub fn delete_subscription(&self, repo: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("repos/{}/subscription", repo),
            options,
        )
    }
}
