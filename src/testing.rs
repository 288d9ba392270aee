//! Test doubles for the view-logic ports.

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::transport::{FetchOutcome, Transport};

/// A request as it reached the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub endpoint: String,
    pub body: Option<Value>,
}

/// Transport that replays queued outcomes in order and records every call.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: RefCell<VecDeque<FetchOutcome>>,
    requests: RefCell<Vec<RecordedRequest>>,
    /// Runs once while the first request is in flight.
    in_flight: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: impl IntoIterator<Item = FetchOutcome>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into_iter().collect()),
            requests: RefCell::default(),
            in_flight: RefCell::default(),
        }
    }

    /// Runs `hook` between sending the first request and settling it.
    pub fn while_in_flight(self, hook: impl FnOnce() + 'static) -> Self {
        *self.in_flight.borrow_mut() = Some(Box::new(hook));
        self
    }

    pub fn replying(body: Value) -> Self {
        Self::new([FetchOutcome::Ok(body)])
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn next(&self) -> FetchOutcome {
        let hook = self.in_flight.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| FetchOutcome::TransportError("no scripted response".to_string()))
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post_json(&self, endpoint: &str, body: &Value) -> FetchOutcome {
        self.requests.borrow_mut().push(RecordedRequest {
            method: "POST",
            endpoint: endpoint.to_string(),
            body: Some(body.clone()),
        });
        self.next()
    }

    async fn get_json(&self, endpoint: &str) -> FetchOutcome {
        self.requests.borrow_mut().push(RecordedRequest {
            method: "GET",
            endpoint: endpoint.to_string(),
            body: None,
        });
        self.next()
    }
}
