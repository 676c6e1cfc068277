//! Notification endpoints.

use crate::client::Client;
use crate::errors::GitHubResult;
use crate::options::RequestOptions;
use reqwest::Method;
use serde_json::Value;

/// Notification endpoints.
pub struct Notifications<'a> {
    client: &'a Client,
}

impl<'a> Notifications<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the authenticated user's notifications.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#list-your-notifications>
    pub fn list(&self, options: RequestOptions) -> GitHubResult<Value> {
        self.client.request().get("notifications", options)
    }

    /// Lists the authenticated user's notifications in a repository.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#list-your-notifications-in-a-repository>
    pub fn repository_notifications(
        &self,
        repo: &str,
        options: RequestOptions,
    ) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("repos/{}/notifications", repo), options)
    }

    /// Marks all notifications as read. True on the API's 205 confirmation.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#mark-as-read>
    pub fn mark_as_read(&self, options: RequestOptions) -> GitHubResult<bool> {
        self.reset_content(Method::PUT, "notifications", options)
    }

    /// Marks all notifications in a repository as read.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#mark-notifications-as-read-in-a-repository>
    pub fn mark_repository_as_read(
        &self,
        repo: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.reset_content(Method::PUT, &format!("repos/{}/notifications", repo), options)
    }

    /// Gets a single notification thread.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#view-a-single-thread>
    pub fn thread(&self, thread_id: u64, options: RequestOptions) -> GitHubResult<Value> {
        self.client
            .request()
            .get(&format!("notifications/threads/{}", thread_id), options)
    }

    /// Marks a thread as read.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#mark-a-thread-as-read>
    pub fn mark_thread_as_read(
        &self,
        thread_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.reset_content(
            Method::PATCH,
            &format!("notifications/threads/{}", thread_id),
            options,
        )
    }

    /// Gets the authenticated user's subscription to a thread.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#get-a-thread-subscription>
    pub fn thread_subscription(
        &self,
        thread_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<Value> {
        self.client.request().get(
            &format!("notifications/threads/{}/subscription", thread_id),
            options,
        )
    }

    /// Subscribes to or ignores a thread.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#set-a-thread-subscription>
    pub fn update_thread_subscription(
        &self,
        thread_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<Value> {
        self.client.request().put(
            &format!("notifications/threads/{}/subscription", thread_id),
            options,
        )
    }

    /// Deletes the authenticated user's subscription to a thread.
    ///
    /// <https://developer.github.com/v3/activity/notifications/#delete-a-thread-subscription>
    pub fn delete_thread_subscription(
        &self,
        thread_id: u64,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        self.client.request().boolean_from_response(
            Method::DELETE,
            &format!("notifications/threads/{}", thread_id),
            options,
        )
    }

    // Mark-as-read endpoints confirm with 205 Reset Content; a classified
    // failure reads as "not marked" rather than an error.
    fn reset_content(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> GitHubResult<bool> {
        match self.client.request().send(method, path, options) {
            Ok(response) => Ok(response.status() == 205),
            Err(e) if e.http_kind().is_some() => Ok(false),
            Err(e) => Err(e),
        }
    }
}
