//! Transport boundary of the engine.
//!
//! [`RequestExecutor`] is the seam between request composition and the
//! network: the engine hands it a fully resolved [`RequestContext`] and gets
//! the raw response text back. [`UreqExecutor`] is the production
//! implementation.
use crate::APIResult;
use ureq::http::request::Builder;

mod context;
mod transport;
mod url_helper;

pub use context::{Credentials, MambuConfig};
pub use transport::UreqExecutor;
pub use url_helper::UrlHelper;
pub(crate) use url_helper::is_dot_segment;

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether params travel in the request body for form content.
    #[must_use]
    pub const fn sends_body(self) -> bool {
        matches!(self, Method::Post | Method::Patch)
    }
}

impl From<Method> for ureq::http::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => ureq::http::Method::GET,
            Method::Post => ureq::http::Method::POST,
            Method::Patch => ureq::http::Method::PATCH,
            Method::Delete => ureq::http::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding of request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Form-encoded pairs, in the query string or the body.
    WwwForm,
    /// A serialized JSON document in the body.
    Json,
}

impl ContentType {
    #[must_use]
    pub const fn header_value(self) -> &'static str {
        match self {
            ContentType::WwwForm => "application/x-www-form-urlencoded; charset=UTF-8",
            ContentType::Json => "application/json; charset=UTF-8",
        }
    }
}

/// A resolved request, built fresh for every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub url: String,
    pub method: Method,
    pub content_type: ContentType,
    pub body: Option<String>,
}

/// Performs one request/response exchange.
///
/// Implementations return the response body for 2xx statuses (possibly
/// empty) and a [`crate::MambuApiError`] for connectivity failures and
/// non-2xx statuses.
pub trait RequestExecutor: Send + Sync {
    fn execute(&self, request: &RequestContext) -> APIResult<String>;
}

impl<T: RequestExecutor + ?Sized> RequestExecutor for &T {
    fn execute(&self, request: &RequestContext) -> APIResult<String> {
        (**self).execute(request)
    }
}

pub(crate) fn set_headers(
    content_type: ContentType,
    credentials: &Credentials,
    request: Builder,
) -> Builder {
    let (name, value) = credentials.header();
    request
        .header(name, value)
        .header("Content-Type", content_type.header_value())
        .header("Accept", "application/json")
        .header(
            "User-Agent",
            concat!("oxi-mambu/", env!("CARGO_PKG_VERSION")),
        )
}

pub(crate) fn build_request(request: &RequestContext, credentials: &Credentials) -> Builder {
    let builder = ureq::http::Request::builder()
        .method(ureq::http::Method::from(request.method))
        .uri(request.url.as_str());

    log::debug!(
        "Built Request with params: {}-{}-{}",
        request.method,
        request.url,
        if request.body.is_some() {
            "With Body"
        } else {
            "No Body"
        },
    );

    set_headers(request.content_type, credentials, builder)
}
