use std::sync::Arc;

use athletis_planning::{
    create_router,
    reservations::StatusPolicy,
    state::AppState,
    store::{KeyValueStore, MemoryStore},
};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    /// App over a store that already holds the given raw documents.
    pub fn with_documents(docs: &[(&str, &str)]) -> Self {
        let store = MemoryStore::new();
        for (key, text) in docs {
            store.set(key, text).unwrap();
        }
        Self::with_store(store)
    }

    fn with_store(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let state = AppState::new(store.clone(), StatusPolicy::AlwaysConfirmed);
        Self {
            router: create_router(state),
            store,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let res = self.request("GET", uri, None).await;
        let status = res.status();
        (status, parse_body(res).await)
    }

    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        let res = self.request(method, uri, Some(body)).await;
        let status = res.status();
        (status, parse_body(res).await)
    }

    /// Raw document currently stored under `key`.
    pub fn stored(&self, key: &str) -> Option<Value> {
        self.store
            .get(key)
            .unwrap()
            .map(|text| serde_json::from_str(&text).unwrap())
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}
