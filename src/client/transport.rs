//! Blocking HTTP transport backed by [`ureq`].

use ureq::{http::Response, Agent, Body};

use super::{build_request, Credentials, MambuConfig, RequestContext, RequestExecutor};
use crate::{error::MambuApiError, APIResult};

/// [`RequestExecutor`] that performs the exchange with a [`ureq::Agent`].
///
/// Status codes are not treated as transport errors by the agent; the
/// executor classifies them itself so the error body can be inspected.
#[derive(Debug, Clone)]
pub struct UreqExecutor {
    agent: Agent,
    credentials: Credentials,
}

impl UreqExecutor {
    #[must_use]
    pub fn new(config: &MambuConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(config.timeout)
            // Non-2xx responses are classified below, with their bodies.
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self::with_agent(agent, config.credentials.clone())
    }

    /// Uses an agent configured by the caller. The agent must be built with
    /// `http_status_as_error(false)` for server error payloads to be read.
    #[must_use]
    pub fn with_agent(agent: Agent, credentials: Credentials) -> Self {
        Self { agent, credentials }
    }
}

impl RequestExecutor for UreqExecutor {
    fn execute(&self, request: &RequestContext) -> APIResult<String> {
        let builder = build_request(request, &self.credentials);

        let result = match &request.body {
            Some(body) => self.agent.run(builder.body(body.as_bytes().to_vec())?),
            None => self.agent.run(builder.body(())?),
        };

        let response = result.map_err(|e| {
            log::error!("No response for {} {}: {e}", request.method, request.url);
            MambuApiError::from(e)
        })?;

        read_response(response)
    }
}

fn read_response(mut response: Response<Body>) -> APIResult<String> {
    let status = response.status();
    let body = response.body_mut().read_to_string()?;

    if status.is_success() {
        return Ok(body);
    }

    log::error!("Request failed with status {status}: {body}");
    Err(MambuApiError::from_status(status.as_u16(), body))
}
