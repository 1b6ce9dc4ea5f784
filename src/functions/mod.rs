//! The dispatch engine.
//!
//! A [`ServiceExecutor`] turns an [`ApiDefinition`] plus call arguments into a
//! [`RequestContext`], hands it to its [`RequestExecutor`] and parses the
//! response text into the shape the definition declares.
use serde::{de::DeserializeOwned, de::IgnoredAny, Serialize};

use crate::{
    api_data::{FULL_DETAILS, JSON_OBJECT},
    client::{
        ContentType, MambuConfig, RequestContext, RequestExecutor, UreqExecutor, UrlHelper,
    },
    json::to_json_string,
    params::ParamsMap,
    services::{LinesOfCreditService, OrganizationService},
    APIResult, MambuApiError,
};

pub mod definition;
pub mod output;

pub use definition::{ApiDefinition, ApiReturnFormat, ApiType};
pub use output::ApiOutput;

/// Runs [`ApiDefinition`]s against one tenant.
///
/// Holds no per-call state: every call builds its own URL, params and body,
/// so one executor can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ServiceExecutor<E = UreqExecutor> {
    url_helper: UrlHelper,
    executor: E,
}

impl ServiceExecutor<UreqExecutor> {
    /// Creates an executor that talks to the configured tenant over HTTPS.
    #[must_use]
    pub fn new(config: MambuConfig) -> Self {
        let executor = UreqExecutor::new(&config);
        Self::with_executor(UrlHelper::new(config.domain), executor)
    }
}

impl<E: RequestExecutor> ServiceExecutor<E> {
    pub fn with_executor(url_helper: UrlHelper, executor: E) -> Self {
        Self {
            url_helper,
            executor,
        }
    }

    #[must_use]
    pub fn url_helper(&self) -> &UrlHelper {
        &self.url_helper
    }

    #[must_use]
    pub fn request_executor(&self) -> &E {
        &self.executor
    }

    #[must_use]
    pub fn organization(&self) -> OrganizationService<'_, E> {
        OrganizationService::new(self)
    }

    #[must_use]
    pub fn lines_of_credit(&self) -> LinesOfCreditService<'_, E> {
        LinesOfCreditService::new(self)
    }

    /// Runs a form/query operation.
    ///
    /// `id` is appended as a path segment. For JSON definitions the params may
    /// carry a serialized document under [`JSON_OBJECT`]; pagination is moved
    /// into the URL for JSON POSTs.
    ///
    /// # Errors
    ///
    /// Missing inputs fail before any network activity. Transport, HTTP and
    /// parsing failures are returned as they occur.
    pub fn execute<T: DeserializeOwned>(
        &self,
        definition: &ApiDefinition,
        id: Option<&str>,
        params: Option<ParamsMap>,
    ) -> APIResult<ApiOutput<T>> {
        self.dispatch(definition, id, None, params)
    }

    /// Runs an operation on a child resource addressed by `owned_id`, e.g.
    /// `DELETE /linesofcredit/{id}/loans/{owned_id}`.
    pub fn execute_with_owned_id<T: DeserializeOwned>(
        &self,
        definition: &ApiDefinition,
        id: &str,
        owned_id: &str,
        params: Option<ParamsMap>,
    ) -> APIResult<ApiOutput<T>> {
        self.dispatch(definition, Some(id), Some(owned_id), params)
    }

    /// Serializes `body` as the JSON request document and runs the operation.
    pub fn execute_json<T, B>(
        &self,
        definition: &ApiDefinition,
        body: Option<&B>,
        id: Option<&str>,
    ) -> APIResult<ApiOutput<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute_json_with_params(definition, body, id, None)
    }

    /// Like [`ServiceExecutor::execute_json`], with extra params such as
    /// `offset`/`limit` for paginated searches.
    pub fn execute_json_with_params<T, B>(
        &self,
        definition: &ApiDefinition,
        body: Option<&B>,
        id: Option<&str>,
        params: Option<ParamsMap>,
    ) -> APIResult<ApiOutput<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let Some(body) = body else {
            return Err(MambuApiError::missing_input(format!(
                "JSON document for {}",
                definition.response_entity_name()
            )));
        };
        let definition = definition.with_content_type(ContentType::Json);
        let json = to_json_string(body, definition.json_date_format())?;

        let mut params = params.unwrap_or_default();
        params.add_param(JSON_OBJECT, json);
        self.dispatch(&definition, id, None, Some(params))
    }

    /// Runs an operation whose success is the whole answer.
    pub fn execute_boolean(
        &self,
        definition: &ApiDefinition,
        id: Option<&str>,
        owned_id: Option<&str>,
    ) -> APIResult<bool> {
        self.dispatch::<IgnoredAny>(definition, id, owned_id, None)?
            .into_bool()
    }

    /// Runs an operation and returns the raw response text.
    pub fn execute_string(
        &self,
        definition: &ApiDefinition,
        id: Option<&str>,
        params: Option<ParamsMap>,
    ) -> APIResult<String> {
        self.dispatch::<IgnoredAny>(definition, id, None, params)?
            .into_string()
    }

    fn dispatch<T: DeserializeOwned>(
        &self,
        definition: &ApiDefinition,
        id: Option<&str>,
        owned_id: Option<&str>,
        params: Option<ParamsMap>,
    ) -> APIResult<ApiOutput<T>> {
        let request = self.build_request(definition, id, owned_id, params)?;
        let body = self.executor.execute(&request)?;

        log::debug!(
            "{} {} returned {} bytes, parsing as {} of {}",
            request.method,
            request.url,
            body.len(),
            definition.return_format().as_str(),
            definition.response_entity_name()
        );
        ApiOutput::parse(definition.return_format(), body)
    }

    /// Resolves URL, method, content type and body without sending anything.
    ///
    /// # Errors
    ///
    /// Fails on missing ids, a missing JSON document for a JSON POST/PATCH,
    /// or a domain that cannot form a URL.
    pub fn build_request(
        &self,
        definition: &ApiDefinition,
        id: Option<&str>,
        owned_id: Option<&str>,
        mut params: Option<ParamsMap>,
    ) -> APIResult<RequestContext> {
        let path = definition.url_path(id, owned_id)?;
        if definition.full_details() {
            params
                .get_or_insert_with(ParamsMap::new)
                .add_param(FULL_DETAILS, "true");
        }

        let method = definition.method();
        let content_type = definition.content_type();
        let url = self.url_helper.create_url(&path)?;

        let (url, body) = match content_type {
            ContentType::WwwForm if method.sends_body() => {
                let body = params.as_ref().map(ParamsMap::to_url_string).unwrap_or_default();
                (url, Some(body))
            }
            ContentType::WwwForm => (url_with_params(&url, params.as_ref()), None),
            ContentType::Json => {
                let url =
                    UrlHelper::add_json_pagination_params(&url, method, content_type, params.as_mut());
                let mut params = params.unwrap_or_default();
                let document = params.remove(JSON_OBJECT);

                if method.sends_body() {
                    let Some(document) = document else {
                        return Err(MambuApiError::missing_input(format!(
                            "JSON document for {}",
                            definition.response_entity_name()
                        )));
                    };
                    if !params.is_empty() {
                        log::warn!(
                            "Dropping params not sent with a JSON {method} to {path}: {:?}",
                            params.iter().map(|(k, _)| k).collect::<Vec<_>>()
                        );
                    }
                    (url, Some(document))
                } else {
                    if document.is_some() {
                        log::warn!("Dropping JSON document on {method} to {path}");
                    }
                    (url_with_params(&url, Some(&params)), None)
                }
            }
        };

        Ok(RequestContext {
            url,
            method,
            content_type,
            body,
        })
    }
}

fn url_with_params(url: &str, params: Option<&ParamsMap>) -> String {
    UrlHelper::create_url_with_params(url, params.filter(|p| p.iter().any(|(_, v)| v.is_some())))
}
