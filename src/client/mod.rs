//! GitHub API client.

use crate::config::{Configuration, ConfigurationUpdate};
use crate::errors::GitHubResult;
use crate::request::Request;
use crate::services::*;
use crate::transport::{Fixture, HttpTransport, Transport};
use std::cell::{Ref, RefCell};

/// GitHub REST API v3 client.
///
/// Owns the mutable [`Configuration`], the transport, and the single-shot
/// fixture slot. Endpoint services borrow the client and route every call
/// through [`Request`].
///
/// Not thread-safe: configuration and the fixture slot are interior-mutable
/// state, so use one client per logical session or thread.
pub struct Client {
    config: RefCell<Configuration>,
    transport: Box<dyn Transport>,
    fixture: RefCell<Option<Fixture>>,
}

impl Client {
    /// Creates a client with default configuration and the real HTTP
    /// transport.
    pub fn new() -> GitHubResult<Self> {
        Ok(Self {
            config: RefCell::new(Configuration::new()),
            transport: Box::new(HttpTransport::new()?),
            fixture: RefCell::new(None),
        })
    }

    /// Creates a client and applies an initial configuration patch.
    pub fn with_config(update: ConfigurationUpdate) -> GitHubResult<Self> {
        let client = Self::new()?;
        client.configure(update);
        Ok(client)
    }

    /// Creates a client with an injected transport. Test seam.
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            config: RefCell::new(Configuration::new()),
            transport,
            fixture: RefCell::new(None),
        }
    }

    /// Reads the current configuration.
    pub fn configuration(&self) -> Ref<'_, Configuration> {
        self.config.borrow()
    }

    /// Merges a configuration patch over the current state.
    pub fn configure(&self, update: ConfigurationUpdate) {
        self.config.borrow_mut().apply(update);
    }

    /// Restores the configuration to its documented defaults.
    pub fn reset_configuration(&self) {
        self.config.borrow_mut().reset();
    }

    pub(crate) fn configuration_snapshot(&self) -> Configuration {
        self.config.borrow().clone()
    }

    /// Arms a fixture for the next call. Single use: the next request
    /// returns it verbatim instead of touching the network, then the slot
    /// clears.
    pub fn set_fixture(&self, fixture: Fixture) {
        *self.fixture.borrow_mut() = Some(fixture);
    }

    pub(crate) fn take_fixture(&self) -> Option<Fixture> {
        self.fixture.borrow_mut().take()
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Gets the request executor.
    pub fn request(&self) -> Request<'_> {
        Request::new(self)
    }

    // Endpoint services

    /// Gist endpoints.
    pub fn gists(&self) -> Gists<'_> {
        Gists::new(self)
    }

    /// Issue endpoints.
    pub fn issues(&self) -> Issues<'_> {
        Issues::new(self)
    }

    /// Pull request endpoints.
    pub fn pull_requests(&self) -> PullRequests<'_> {
        PullRequests::new(self)
    }

    /// Repository endpoints.
    pub fn repositories(&self) -> Repositories<'_> {
        Repositories::new(self)
    }

    /// Organization and team endpoints.
    pub fn organizations(&self) -> Organizations<'_> {
        Organizations::new(self)
    }

    /// User endpoints.
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Commit endpoints.
    pub fn commits(&self) -> Commits<'_> {
        Commits::new(self)
    }

    /// Label endpoints.
    pub fn labels(&self) -> Labels<'_> {
        Labels::new(self)
    }

    /// Milestone endpoints.
    pub fn milestones(&self) -> Milestones<'_> {
        Milestones::new(self)
    }

    /// Git reference endpoints.
    pub fn refs(&self) -> Refs<'_> {
        Refs::new(self)
    }

    /// Repository content endpoints.
    pub fn contents(&self) -> Contents<'_> {
        Contents::new(self)
    }

    /// Notification endpoints.
    pub fn notifications(&self) -> Notifications<'_> {
        Notifications::new(self)
    }

    /// Git object endpoints: trees, blobs, tag objects.
    pub fn objects(&self) -> Objects<'_> {
        Objects::new(self)
    }

    /// OAuth authorization endpoints.
    pub fn authorizations(&self) -> Authorizations<'_> {
        Authorizations::new(self)
    }

    /// Legacy download endpoints.
    pub fn downloads(&self) -> Downloads<'_> {
        Downloads::new(self)
    }

    /// Markdown rendering endpoint.
    pub fn markdown(&self) -> Markdown<'_> {
        Markdown::new(self)
    }

    /// Meta endpoints: emojis, gitignore templates, octocat, rate limit.
    pub fn meta(&self) -> Meta<'_> {
        Meta::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_API_ENDPOINT;

    #[test]
    fn configure_and_reset() {
        let client = Client::new().unwrap();
        client.configure(ConfigurationUpdate::new().api_endpoint("http://foo.dev"));
        assert_eq!(client.configuration().api_endpoint, "http://foo.dev");

        client.reset_configuration();
        assert_eq!(client.configuration().api_endpoint, DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn fixture_slot_is_single_use() {
        let client = Client::new().unwrap();
        client.set_fixture(Fixture::new().status(204));

        assert!(client.take_fixture().is_some());
        assert!(client.take_fixture().is_none());
    }
}
