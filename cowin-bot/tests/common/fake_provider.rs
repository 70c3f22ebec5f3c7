//! Canned [`cowin_client::DataProvider`] that records every endpoint it is asked for.

use async_trait::async_trait;
use cowin_client::{DataProvider, Endpoint, ProviderError};
use serde_json::{json, Value};
use std::sync::Mutex;

pub struct FakeProvider {
    response: Result<Value, u16>,
    pub requests: Mutex<Vec<Endpoint>>,
}

#[allow(dead_code)]
impl FakeProvider {
    pub fn returning(body: Value) -> Self {
        Self {
            response: Ok(body),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every fetch fails with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            response: Err(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Endpoint> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataProvider for FakeProvider {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, ProviderError> {
        self.requests.lock().unwrap().push(endpoint.clone());
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(ProviderError::Status {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

/// `{"sessions": [...]}` with `n` sessions named `Center 0`, `Center 1`, ...
#[allow(dead_code)]
pub fn sessions(n: usize) -> Value {
    let items: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "center_id": 1000 + i,
                "name": format!("Center {}", i),
                "vaccine": "COVISHIELD",
                "slots": ["09:00AM-11:00AM", "11:00AM-01:00PM"],
                "min_age_limit": 18,
                "available_capacity": i
            })
        })
        .collect();
    json!({ "sessions": items })
}
