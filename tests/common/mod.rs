//! Shared test doubles: a transport that records every prepared request and
//! replays queued responses.

#![allow(dead_code)]

use github_rest::{Client, GitHubResult, PreparedRequest, Transport, WireResponse};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Captured traffic and the response queue, shared with the client's
/// transport.
#[derive(Default)]
pub struct Recorder {
    requests: RefCell<Vec<PreparedRequest>>,
    responses: RefCell<VecDeque<WireResponse>>,
}

impl Recorder {
    /// Queues a response for a future call. When the queue is empty, calls
    /// get a 200 with an empty JSON object.
    pub fn queue(&self, response: WireResponse) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Number of requests that reached the transport.
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// The most recent request. Panics when nothing was sent.
    pub fn last_request(&self) -> PreparedRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

struct RecordingTransport {
    recorder: Rc<Recorder>,
}

impl Transport for RecordingTransport {
    fn send(&self, request: PreparedRequest) -> GitHubResult<WireResponse> {
        self.recorder.requests.borrow_mut().push(request);

        Ok(self
            .recorder
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| {
                WireResponse::new(
                    200,
                    vec![("Content-Type".to_string(), "application/json".to_string())],
                    "{}",
                )
            }))
    }
}

/// A client wired to a recording transport, plus the recorder to inspect.
pub fn recording_client() -> (Client, Rc<Recorder>) {
    let recorder = Rc::new(Recorder::default());
    let client = Client::with_transport(Box::new(RecordingTransport {
        recorder: Rc::clone(&recorder),
    }));
    (client, recorder)
}

/// A canned JSON response.
pub fn json_response(status: u16, body: &str) -> WireResponse {
    WireResponse::new(
        status,
        vec![("Content-Type".to_string(), "application/json".to_string())],
        body,
    )
}
