//! Scripted transport for exercising the controller without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use crate::app::{Result, TaproomError};
use crate::domain::ItemId;
use crate::fetcher::Fetcher;

/// JSON body for a page of `count` items with ids starting at `first_id`.
pub fn page_body(first_id: ItemId, count: usize) -> Vec<u8> {
    let items: Vec<_> = (0..count as ItemId)
        .map(|offset| {
            let id = first_id + offset;
            let ibu = if id % 2 == 0 { json!(40) } else { json!(null) };
            json!({
                "id": id,
                "name": format!("Beer {}", id),
                "tagline": format!("Tagline {}", id),
                "image_url": format!("https://images.example.com/{}.png", id),
                "abv": 4.5,
                "ibu": ibu,
                "description": "Test beer",
            })
        })
        .collect();
    serde_json::to_vec(&items).unwrap()
}

/// Replays queued responses in order and records every requested URL.
///
/// With a gate installed, each fetch waits for one `Notify` permit before
/// answering.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<Vec<u8>>>>,
    calls: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn respond(self, body: Vec<u8>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body));
        self
    }

    pub fn respond_page(self, first_id: ItemId, count: usize) -> Self {
        self.respond(page_body(first_id, count))
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TaproomError::Transport(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TaproomError::Transport("no scripted response".into())))
    }
}
