//! A Rust client for the Mambu banking REST API.
//!
//! Operations are declared as const [`ApiDefinition`]s and run by a
//! [`ServiceExecutor`], which builds the URL and body, sends the request
//! through a [`RequestExecutor`] and parses the response into the declared
//! [`ApiOutput`] shape. Resource services such as
//! [`services::OrganizationService`] are thin wrappers around that engine.
//!
//! ```no_run
//! use oxi_mambu::{MambuConfig, ServiceExecutor};
//!
//! let config = MambuConfig::from_env()?;
//! let executor = ServiceExecutor::new(config);
//! let branches = executor.organization().get_branches(Some("0"), Some("30"))?;
//! println!("{} branches", branches.len());
//! # Ok::<(), oxi_mambu::MambuApiError>(())
//! ```
#![warn(clippy::pedantic)]

pub mod api_data;
pub mod client;
pub mod error;
pub mod functions;
pub mod json;
pub mod models;
pub mod params;
pub mod services;

pub use client::{
    ContentType, Credentials, MambuConfig, Method, RequestContext, RequestExecutor, UreqExecutor,
    UrlHelper,
};
pub use error::{MambuApiError, MambuErrorKind};
pub use functions::{ApiDefinition, ApiOutput, ApiReturnFormat, ApiType, ServiceExecutor};
pub use params::ParamsMap;

pub type APIResult<T> = Result<T, MambuApiError>;
