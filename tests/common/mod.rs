#![allow(dead_code, clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;

use oxi_mambu::{
    APIResult, MambuApiError, RequestContext, RequestExecutor, ServiceExecutor, UrlHelper,
};

pub const DOMAIN: &str = "demo.mambu.com";

/// A mock executor that records every request it receives and answers with
/// queued responses, in order. An empty queue answers `""`.
#[derive(Debug, Default)]
pub struct MockExecutor {
    pub requests: Mutex<Vec<RequestContext>>,
    responses: Mutex<VecDeque<APIResult<String>>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response body.
    pub fn respond(self, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.to_string()));
        self
    }

    /// Queues a failed exchange.
    pub fn fail(self, error: MambuApiError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<RequestContext> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request sent, panicking if there were zero or several.
    pub fn single_request(&self) -> RequestContext {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

impl RequestExecutor for MockExecutor {
    fn execute(&self, request: &RequestContext) -> APIResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

/// A service executor for [`DOMAIN`] backed by `mock`.
pub fn executor(mock: &MockExecutor) -> ServiceExecutor<&MockExecutor> {
    let _ = env_logger::builder().is_test(true).try_init();
    ServiceExecutor::with_executor(UrlHelper::new(DOMAIN), mock)
}

pub fn api_url(path: &str) -> String {
    format!("https://{DOMAIN}/api/{path}")
}
