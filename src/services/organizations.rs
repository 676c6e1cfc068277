//! Organization and team endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Organization and team endpoints.
pub struct Organizations<'a> {
    client: &'a Client,
}

impl<'a> Organizations<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Gets an organization.
    ///
    /// <https://developer.github.com/v3/orgs/#get-an-organization>
    pub fn get(&self, org: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get(&format!("orgs/{}", org), options)
    }

    /// Updates an organization. The attributes travel nested under an
    /// `organization` key.
    ///
    /// <https://developer.github.com/v3/orgs/#edit-an-organization>
    pub fn update(&self, org: &str, values: Value, mut options: RequestOptions) -> GitHubResult<Value> {
        options.insert("organization", values);
        self.client
            .request()
            .patch(&format!("orgs/{}", org), options)
    }

    /// Lists organizations for a user, or the authenticated user's
    /// organizations. Unauthenticated calls only see public memberships.
    ///
    /// <https://developer.github.com/v3/orgs/#list-user-organizations>
    pub fn list(&self, username: Option<&str>, options: RequestOptions) -> GitHubResult<Value> {
        match username {
            Some(user) => self
                .client
                .request()
                .get(&format!("users/{}/orgs", user), options),
            None => self.client.request().get("user/orgs", options),
        }
    }

    /// Lists an organization's repositories.
    ///
    /// <https://developer.github.com/v3/repos/#list-organization-repositories>
    pub fn repositories(&self, org: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("orgs/{}/repos", org), options)
    }

    /// Lists organization members. Only public members are visible without
    /// authentication.
    ///
    /// <https://developer.github.com/v3/orgs/members/#list-members>
    pub fn members(&self, org: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("orgs/{}/members", org), options)
    }

    /// Checks if a user is a member of an organization.
    ///
    /// <https://developer.github.com/v3/orgs/members/#check-membership>
    pub fn is_member(&self, org: &str, user: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("orgs/{}/members/{}", org, user),
            options,
        )
    }

    /// Checks if a user is a public member of an organization.
    ///
    /// <https://developer.github.com/v3/orgs/members/#check-public-membership>
    pub fn is_public_member(
        &self,
        org: &str,
        user: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("orgs/{}/public_members/{}", org, user),
            options,
        )
    }

    /// Removes a member from an organization.
    ///
    /// <https://developer.github.com/v3/orgs/members/#remove-a-member>
    pub fn remove_member(&self, org: &str, user: &str, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("orgs/{}/members/{}", org, user),
            options,
        )
    }

    /// Publicizes a user's membership in an organization.
    ///
    /// <https://developer.github.com/v3/orgs/members/#publicize-a-users-membership>
    pub fn publicize_membership(
        &self,
        org: &str,
        user: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::PUT,
            &format!("orgs/{}/public_members/{}", org, user),
            options,
        )
    }

    /// Conceals a user's membership in an organization.
    ///
    /// <https://developer.github.com/v3/orgs/members/#conceal-a-users-membership>
    pub fn unpublicize_membership(
        &self,
        org: &str,
        user: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("orgs/{}/public_members/{}", org, user),
            options,
        )
    }

    /// Lists an organization's teams.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#list-teams>
    pub fn teams(&self, org: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("orgs/{}/teams", org), options)
    }

    /// Creates a team.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#create-team>
    pub fn create_team(&self, org: &str, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .post(&format!("orgs/{}/teams", org), options)
    }

    /// Gets a team.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#get-team>
    pub fn team(&self, team_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("teams/{}", team_id), options)
    }

    /// Updates a team.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#edit-team>
    pub fn update_team(&self, team_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .patch(&format!("teams/{}", team_id), options)
    }

    /// Deletes a team.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#delete-team>
    pub fn delete_team(&self, team_id: u64, options: RequestOptions) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("teams/{}", team_id),
            options,
        )
    }

    /// Lists a team's members.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#list-team-members>
    pub fn team_members(&self, team_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("teams/{}/members", team_id), options)
    }

    /// Adds a team member.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#add-team-member>
    pub fn add_team_member(
        &self,
        team_id: u64,
        user: &str,
        mut options: RequestOptions,
    ) -> GitHubResult<bool> {
        options.insert_if_absent("name", user);
        self.client.request().boolean_from_response(
            Method::PUT,
            &format!("teams/{}/members/{}", team_id, user),
            options,
        )
    }

    /// Removes a team member.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#remove-team-member>
    pub fn remove_team_member(
        &self,
        team_id: u64,
        user: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("teams/{}/members/{}", team_id, user),
            options,
        )
    }

    /// Checks if a user is a member of a team.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#get-team-member>
    pub fn is_team_member(
        &self,
        team_id: u64,
        user: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("teams/{}/members/{}", team_id, user),
            options,
        )
    }

    /// Lists a team's repositories.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#list-team-repos>
    pub fn team_repositories(&self, team_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("teams/{}/repos", team_id), options)
    }

    /// Checks if a repository is managed by a team.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#get-team-repo>
    pub fn is_team_repository(
        &self,
        team_id: u64,
        repo: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::GET,
            &format!("teams/{}/repos/{}", team_id, repo),
            options,
        )
    }

    /// Adds a repository to a team.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#add-team-repo>
    pub fn add_team_repository(
        &self,
        team_id: u64,
        repo: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::PUT,
            &format!("teams/{}/repos/{}", team_id, repo),
            options,
        )
    }

    /// Removes a repository from a team. The repository is not deleted, only
    /// unlinked from the team.
    ///
    /// <https://developer.github.com/v3/orgs/teams/#remove-team-repo>
    pub fn remove_team_repository(
        &self,
        team_id: u64,
        repo: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("teams/{}/repos/{}", team_id, repo),
            options,
        )
    }
}
