//! Endpoint URL composition.

use ::url::Url;
use urlencoding::encode;

use super::{ContentType, Method};
use crate::{
    api_data::{LIMIT, OFFSET},
    error::MambuErrorKind,
    params::ParamsMap,
    APIResult, MambuApiError,
};

const WEB_PROTOCOL: &str = "https";
const API_ENDPOINT: &str = "/api/";
const DELIMITER: char = '?';

/// Builds `https://{domain}/api/{path}` URLs for one tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlHelper {
    domain: String,
}

impl UrlHelper {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Composes the endpoint URL for `details`. Each `/`-separated segment
    /// is percent-encoded, `%` included, so ids reach the server verbatim.
    ///
    /// # Errors
    ///
    /// Fails with a URL construction error when the domain cannot form a
    /// valid authority, and with an invalid-input error when `details` has a
    /// `.` or `..` segment. Both failures are logged.
    pub fn create_url(&self, details: &str) -> APIResult<String> {
        if details.split('/').any(is_dot_segment) {
            log::error!("Refusing URL path with dot segments: {details}");
            return Err(MambuApiError::invalid_input(format!(
                "dot segment in URL path {details:?}"
            )));
        }

        let base = format!("{WEB_PROTOCOL}://{}", self.domain);
        match Url::parse(&base) {
            Ok(mut url)
                if url.host_str().is_some()
                    && url.path() == "/"
                    && url.query().is_none()
                    && url.fragment().is_none() =>
            {
                url.set_path(&format!("{API_ENDPOINT}{}", encode_path(details)));
                Ok(url.into())
            }
            Ok(_) => Err(self.construction_error(details, ::url::ParseError::InvalidDomainCharacter)),
            Err(e) => Err(self.construction_error(details, e)),
        }
    }

    fn construction_error(&self, details: &str, source: ::url::ParseError) -> MambuApiError {
        log::error!(
            "Failed to create URI for Domain Name={} with url details={details}: {source}",
            self.domain
        );
        MambuErrorKind::UrlConstruction {
            domain: self.domain.clone(),
            path: details.to_string(),
            source,
        }
        .into()
    }

    /// Appends `?` and the encoded params when `params` is present.
    #[must_use]
    pub fn create_url_with_params(url: &str, params: Option<&ParamsMap>) -> String {
        match params {
            Some(params) => format!("{url}{DELIMITER}{}", params.to_url_string()),
            None => url.to_string(),
        }
    }

    /// Moves `offset` and `limit` into the query string of a JSON POST.
    ///
    /// JSON-bodied POST endpoints take a filter document in the body but still
    /// read pagination from the URL. For any other method or content type the
    /// URL and params are returned untouched. When pagination is moved, both
    /// keys are removed from `params` so they never reach the body.
    pub fn add_json_pagination_params(
        url: &str,
        method: Method,
        content_type: ContentType,
        params: Option<&mut ParamsMap>,
    ) -> String {
        let Some(params) = params else {
            return url.to_string();
        };
        if method != Method::Post || content_type != ContentType::Json {
            return url.to_string();
        }
        if params.get(OFFSET).is_none() && params.get(LIMIT).is_none() {
            return url.to_string();
        }

        let mut pagination = ParamsMap::new();
        pagination.put(OFFSET, params.remove(OFFSET));
        pagination.put(LIMIT, params.remove(LIMIT));

        Self::create_url_with_params(url, Some(&pagination))
    }
}

fn encode_path(details: &str) -> String {
    details.split('/').map(encode).collect::<Vec<_>>().join("/")
}

/// Segments that URL normalization resolves against their parent.
pub(crate) fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
