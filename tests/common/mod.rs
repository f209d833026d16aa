//! Shared test doubles for the integration tests: a canned JSON fetcher and a
//! reply sink that records what would have been posted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use token_scout::ports::chat::{MessageRef, Reply, ReplyError, ReplySink};
use token_scout::ports::http::{FetchError, JsonFetcher};

/// Canned answer for a URL
#[derive(Debug, Clone)]
pub enum CannedResponse {
    Json(Value),
    Status(u16),
    Timeout,
}

/// JSON fetcher that answers by URL fragment and records every call
#[derive(Debug, Default, Clone)]
pub struct StaticFetcher {
    routes: Arc<Mutex<Vec<(String, CannedResponse)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: answer any URL containing `fragment`. First match wins.
    pub fn with_route(self, fragment: &str, response: CannedResponse) -> Self {
        self.routes.lock().unwrap().push((fragment.to_string(), response));
        self
    }

    /// Builder method: answer any URL containing `fragment` with `body`
    pub fn with_json(self, fragment: &str, body: Value) -> Self {
        self.with_route(fragment, CannedResponse::Json(body))
    }

    /// Get all requested URLs, in order
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requested URLs containing `fragment`
    pub fn count_calls(&self, fragment: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| u.contains(fragment)).count()
    }
}

#[async_trait]
impl JsonFetcher for StaticFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        let response = self
            .routes
            .lock()
            .unwrap()
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, response)| response.clone());

        match response {
            Some(CannedResponse::Json(body)) => Ok(body),
            Some(CannedResponse::Status(status)) => Err(FetchError::Status {
                status,
                url: url.to_string(),
            }),
            Some(CannedResponse::Timeout) => Err(FetchError::Timeout(url.to_string())),
            None => Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            }),
        }
    }
}

/// Something the sink was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Sent(MessageRef, Reply),
    Edited(MessageRef, Reply),
}

/// Reply sink that records what would have been posted
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
    next_id: Arc<AtomicU64>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded events
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Final content of every message: edits folded into the message they replaced
    pub fn final_replies(&self) -> Vec<Reply> {
        let mut messages: Vec<(MessageRef, Reply)> = Vec::new();
        for event in self.events() {
            match event {
                SinkEvent::Sent(at, reply) => messages.push((at, reply)),
                SinkEvent::Edited(at, reply) => {
                    if let Some(slot) = messages.iter_mut().find(|(m, _)| *m == at) {
                        slot.1 = reply;
                    }
                }
            }
        }
        messages.into_iter().map(|(_, reply)| reply).collect()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send(&self, reply: Reply) -> Result<MessageRef, ReplyError> {
        let at = MessageRef {
            channel_id: 1,
            message_id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        };
        self.events.lock().unwrap().push(SinkEvent::Sent(at, reply));
        Ok(at)
    }

    async fn edit(&self, target: &MessageRef, reply: Reply) -> Result<(), ReplyError> {
        self.events.lock().unwrap().push(SinkEvent::Edited(*target, reply));
        Ok(())
    }
}
