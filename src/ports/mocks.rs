//! Test doubles for the ports, shared by the unit tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::chat::{MessageRef, Reply, ReplyError, ReplySink};
use super::http::{FetchError, JsonFetcher};

/// Canned answer for a URL
#[derive(Debug, Clone)]
pub enum CannedResponse {
    Json(Value),
    Status(u16),
    Timeout,
    /// Answer only after the given delay
    Delayed(Duration, Value),
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
            Some(CannedResponse::Delayed(delay, body)) => {
                tokio::time::sleep(delay).await;
                Ok(body)
            }
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
    fail_sends: bool,
    fail_edits: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: every `send` fails
    pub fn with_failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    /// Builder method: every `edit` fails
    pub fn with_failing_edits(mut self) -> Self {
        self.fail_edits = true;
        self
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
        if self.fail_sends {
            return Err(ReplyError::Platform("send disabled".into()));
        }
        let at = MessageRef {
            channel_id: 1,
            message_id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
        };
        self.events.lock().unwrap().push(SinkEvent::Sent(at, reply));
        Ok(at)
    }

    async fn edit(&self, target: &MessageRef, reply: Reply) -> Result<(), ReplyError> {
        if self.fail_edits {
            return Err(ReplyError::NotFound(target.message_id));
        }
        self.events.lock().unwrap().push(SinkEvent::Edited(*target, reply));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_fetcher_routes() {
        let fetcher = StaticFetcher::new()
            .with_json("/tokens/", json!({"pairs": []}))
            .with_route("/price", CannedResponse::Status(500));

        assert_eq!(fetcher.get_json("https://x/tokens/abc").await.unwrap(), json!({"pairs": []}));
        assert!(matches!(
            fetcher.get_json("https://x/price?ids=abc").await,
            Err(FetchError::Status { status: 500, .. })
        ));
        assert!(matches!(
            fetcher.get_json("https://x/other").await,
            Err(FetchError::Status { status: 404, .. })
        ));
        assert_eq!(fetcher.get_calls().len(), 3);
        assert_eq!(fetcher.count_calls("/tokens/"), 1);
    }

    #[tokio::test]
    async fn test_recording_sink() {
        let sink = RecordingSink::new();
        let first = sink.send(Reply::Text("loading".into())).await.unwrap();
        sink.send(Reply::Text("other".into())).await.unwrap();
        sink.edit(&first, Reply::Text("done".into())).await.unwrap();

        assert_eq!(sink.events().len(), 3);
        assert_eq!(
            sink.final_replies(),
            vec![Reply::Text("done".into()), Reply::Text("other".into())]
        );
    }

    #[tokio::test]
    async fn test_recording_sink_failures() {
        let sink = RecordingSink::new().with_failing_edits();
        let at = sink.send(Reply::Text("x".into())).await.unwrap();
        assert!(sink.edit(&at, Reply::Text("y".into())).await.is_err());

        let sink = RecordingSink::new().with_failing_sends();
        assert!(sink.send(Reply::Text("x".into())).await.is_err());
        assert!(sink.events().is_empty());
    }
}
