//! Shared fixtures for the client integration tests.
//!
//! `TestTransport` replays scripted responses in order and records every
//! request so tests can assert on paths, headers and bodies.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use ocean::{
    AppState, ClientConfig, Controller, Gateway, HttpRequest, HttpResponse, LocalStore,
    MemorySessionStorage, Method, StateStore, Transport,
};
use serde_json::{json, Value};

pub const API_BASE: &str = "http://test.local/api";

enum Scripted {
    Ready(Result<HttpResponse, String>),
    Gated(oneshot::Receiver<HttpResponse>),
}

#[derive(Clone, Default)]
pub struct TestTransport {
    script: Rc<RefCell<VecDeque<Scripted>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl TestTransport {
    pub fn push(&self, response: HttpResponse) {
        self.script
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(response)));
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(json_response(status, body));
    }

    pub fn push_network_error(&self, message: &str) {
        self.script
            .borrow_mut()
            .push_back(Scripted::Ready(Err(message.to_string())));
    }

    /// The next request waits until the returned sender fires.
    pub fn push_gated(&self) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// `(method, path)` of every request, with the API base stripped
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|r| {
                (
                    r.method,
                    r.url.strip_prefix(API_BASE).unwrap_or(&r.url).to_string(),
                )
            })
            .collect()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.requests
            .borrow()
            .last()
            .and_then(|r| r.body.as_deref())
            .map(|b| serde_json::from_str(b).expect("request body is JSON"))
    }

    pub fn unused_responses(&self) -> usize {
        self.script.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for TestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Gated(rx)) => rx.await.map_err(|_| "gate dropped".to_string()),
            None => Err("no scripted response".to_string()),
        }
    }
}

pub fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        content_type: Some("application/json".to_string()),
        body: body.to_string().into_bytes(),
    }
}

pub fn binary_response(content_type: &str, bytes: &[u8]) -> HttpResponse {
    HttpResponse {
        status: 200,
        content_type: Some(content_type.to_string()),
        body: bytes.to_vec(),
    }
}

pub fn section_json(title: &str, content: &str, generated: bool) -> Value {
    json!({
        "title": title,
        "content": content,
        "generated": generated,
        "feedback": null,
        "comments": []
    })
}

pub fn project_json(id: &str, topic: &str, doc_type: &str, sections: Vec<Value>) -> Value {
    json!({
        "_id": id,
        "user_id": "u1",
        "topic": topic,
        "type": doc_type,
        "sections": sections,
        "created_at": "Tue, 14 Jan 2025 10:30:00 GMT",
        "last_modified": "Tue, 14 Jan 2025 10:30:00 GMT"
    })
}

pub type TestController = Controller<TestTransport, LocalStore, MemorySessionStorage>;

pub struct Harness {
    pub controller: TestController,
    pub transport: TestTransport,
    pub store: LocalStore,
    pub storage: MemorySessionStorage,
}

impl Harness {
    pub fn state(&self) -> AppState {
        self.store.snapshot()
    }
}

pub fn harness_with_storage(storage: MemorySessionStorage) -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("ocean=debug")
        .try_init();

    let transport = TestTransport::default();
    let store = LocalStore::default();
    let config = ClientConfig::new(API_BASE).expect("valid test base");
    let controller = Controller::new(
        Gateway::new(transport.clone(), config),
        store.clone(),
        storage.clone(),
    );
    Harness {
        controller,
        transport,
        store,
        storage,
    }
}

pub fn anonymous() -> Harness {
    harness_with_storage(MemorySessionStorage::default())
}

/// Restored session "t1" with an empty project list already loaded.
pub async fn signed_in() -> Harness {
    let h = harness_with_storage(MemorySessionStorage::with_session("t1", "a@b.com"));
    h.transport.push_json(200, json!([]));
    h.controller.start().await;
    h
}

/// Signed in with one project open in the editor.
pub async fn with_open_project(sections: Vec<Value>) -> Harness {
    let h = harness_with_storage(MemorySessionStorage::with_session("t1", "a@b.com"));
    h.transport.push_json(
        200,
        json!([project_json("p1", "EV market", "pptx", sections)]),
    );
    h.controller.start().await;
    h.controller.open_project("p1");
    h
}
