//! Declarative descriptions of API operations.

use crate::{
    client::{is_dot_segment, ContentType, Method},
    models::MambuEntity,
    APIResult, MambuApiError,
};

/// Intent of an operation. Each kind fixes the default method, content type,
/// response shape and URL layout of the definitions built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiType {
    /// `GET /{entity}/{id}`
    GetEntity,
    /// `GET /{entity}/{id}?fullDetails=true`
    GetEntityDetails,
    /// `GET /{entity}`, paginated with `offset`/`limit`
    GetList,
    /// `GET /{entity}/{id}/{owned}`
    GetOwnedEntities,
    /// `POST /{entity}` with a JSON document
    CreateJsonEntity,
    /// `POST /{entity}/{id}/{owned}[/{ownedId}]`
    PostOwnedEntity,
    /// `PATCH /{entity}/{id}` with a JSON document
    PatchEntity,
    /// `DELETE /{entity}/{id}`
    DeleteEntity,
    /// `DELETE /{entity}/{id}/{owned}/{ownedId}`
    DeleteOwnedEntity,
}

impl ApiType {
    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            ApiType::GetEntity
            | ApiType::GetEntityDetails
            | ApiType::GetList
            | ApiType::GetOwnedEntities => Method::Get,
            ApiType::CreateJsonEntity | ApiType::PostOwnedEntity => Method::Post,
            ApiType::PatchEntity => Method::Patch,
            ApiType::DeleteEntity | ApiType::DeleteOwnedEntity => Method::Delete,
        }
    }

    #[must_use]
    pub const fn content_type(self) -> ContentType {
        match self {
            ApiType::CreateJsonEntity | ApiType::PostOwnedEntity | ApiType::PatchEntity => {
                ContentType::Json
            }
            _ => ContentType::WwwForm,
        }
    }

    #[must_use]
    pub const fn return_format(self) -> ApiReturnFormat {
        match self {
            ApiType::GetEntity
            | ApiType::GetEntityDetails
            | ApiType::CreateJsonEntity
            | ApiType::PostOwnedEntity => ApiReturnFormat::Object,
            ApiType::GetList | ApiType::GetOwnedEntities => ApiReturnFormat::Collection,
            ApiType::PatchEntity | ApiType::DeleteEntity | ApiType::DeleteOwnedEntity => {
                ApiReturnFormat::Boolean
            }
        }
    }

    /// Whether the entity id is a mandatory path segment.
    #[must_use]
    pub const fn requires_id(self) -> bool {
        !matches!(self, ApiType::GetList | ApiType::CreateJsonEntity)
    }

    #[must_use]
    pub const fn requires_owned_id(self) -> bool {
        matches!(self, ApiType::DeleteOwnedEntity)
    }

    #[must_use]
    pub const fn full_details(self) -> bool {
        matches!(self, ApiType::GetEntityDetails)
    }

    /// Whether the owned entity's resource name is part of the path.
    #[must_use]
    pub const fn uses_owned_path(self) -> bool {
        matches!(
            self,
            ApiType::GetOwnedEntities | ApiType::PostOwnedEntity | ApiType::DeleteOwnedEntity
        )
    }
}

/// Shape of a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiReturnFormat {
    /// A single JSON object.
    Object,
    /// A JSON array; an empty body is an empty collection.
    Collection,
    /// The raw body, left for the caller to parse.
    ResponseString,
    /// Success of an otherwise bodyless exchange.
    Boolean,
}

impl ApiReturnFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ApiReturnFormat::Object => "OBJECT",
            ApiReturnFormat::Collection => "COLLECTION",
            ApiReturnFormat::ResponseString => "RESPONSE_STRING",
            ApiReturnFormat::Boolean => "BOOLEAN",
        }
    }
}

/// Immutable descriptor of one API operation.
///
/// Definitions are `Copy` and can be built in `const` context, so services
/// declare them once as constants. Call-site variations (content type, JSON
/// date format, response shape) produce a new value through the `with_*`
/// methods instead of mutating a shared one.
///
/// ```
/// use oxi_mambu::{
///     functions::definition::{ApiDefinition, ApiType},
///     models::{IndexRate, IndexRateSource},
/// };
///
/// const POST_INDEX_RATE: ApiDefinition =
///     ApiDefinition::for_owned::<IndexRateSource, IndexRate>(ApiType::PostOwnedEntity)
///         .with_json_date_format("%Y-%m-%d");
///
/// assert_eq!(
///     POST_INDEX_RATE.url_path(Some("8a19c"), None).unwrap(),
///     "indexratesources/8a19c/indexrates"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiDefinition {
    api_type: Option<ApiType>,
    method: Method,
    content_type: ContentType,
    return_format: ApiReturnFormat,
    entity_name: &'static str,
    entity_path: Option<&'static str>,
    owned_entity_name: Option<&'static str>,
    owned_entity_path: Option<&'static str>,
    url_path: Option<&'static str>,
    json_date_format: Option<&'static str>,
}

impl ApiDefinition {
    /// Operation on entity `E`, path derived from its resource name.
    #[must_use]
    pub const fn new<E: MambuEntity>(api_type: ApiType) -> Self {
        Self {
            api_type: Some(api_type),
            method: api_type.method(),
            content_type: api_type.content_type(),
            return_format: api_type.return_format(),
            entity_name: E::NAME,
            entity_path: Some(E::RESOURCE),
            owned_entity_name: None,
            owned_entity_path: None,
            url_path: None,
            json_date_format: None,
        }
    }

    /// Operation on entity `O` nested under entity `E`, e.g. an index rate
    /// posted under its rate source.
    #[must_use]
    pub const fn for_owned<E: MambuEntity, O: MambuEntity>(api_type: ApiType) -> Self {
        let base = Self::new::<E>(api_type);
        Self {
            owned_entity_name: Some(O::NAME),
            owned_entity_path: Some(O::RESOURCE),
            ..base
        }
    }

    /// Operation on an explicit path with no entity naming convention, such as
    /// the settings endpoints.
    #[must_use]
    pub const fn from_path(
        url_path: &'static str,
        content_type: ContentType,
        method: Method,
        return_format: ApiReturnFormat,
    ) -> Self {
        Self {
            api_type: None,
            method,
            content_type,
            return_format,
            entity_name: url_path,
            entity_path: None,
            owned_entity_name: None,
            owned_entity_path: None,
            url_path: Some(url_path),
            json_date_format: None,
        }
    }

    #[must_use]
    pub const fn with_content_type(self, content_type: ContentType) -> Self {
        Self {
            content_type,
            ..self
        }
    }

    #[must_use]
    pub const fn with_json_date_format(self, format: &'static str) -> Self {
        Self {
            json_date_format: Some(format),
            ..self
        }
    }

    #[must_use]
    pub const fn with_return_format(self, return_format: ApiReturnFormat) -> Self {
        Self {
            return_format,
            ..self
        }
    }

    #[must_use]
    pub const fn api_type(&self) -> Option<ApiType> {
        self.api_type
    }

    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    #[must_use]
    pub const fn return_format(&self) -> ApiReturnFormat {
        self.return_format
    }

    #[must_use]
    pub const fn json_date_format(&self) -> Option<&'static str> {
        self.json_date_format
    }

    /// Name of the type a successful response describes: the owned entity
    /// for nested operations, the entity otherwise.
    #[must_use]
    pub const fn response_entity_name(&self) -> &'static str {
        match (self.uses_owned_path(), self.owned_entity_name) {
            (true, Some(owned)) => owned,
            _ => self.entity_name,
        }
    }

    #[must_use]
    pub const fn full_details(&self) -> bool {
        match self.api_type {
            Some(api_type) => api_type.full_details(),
            None => false,
        }
    }

    const fn uses_owned_path(&self) -> bool {
        match self.api_type {
            Some(api_type) => api_type.uses_owned_path(),
            None => false,
        }
    }

    /// Relative path of the operation for the given ids.
    ///
    /// # Errors
    ///
    /// Fails with a missing-input error when the operation kind needs an id
    /// that was not supplied, and with an invalid-input error for ids such
    /// as `..` that would address a different resource.
    pub fn url_path(&self, id: Option<&str>, owned_id: Option<&str>) -> APIResult<String> {
        let id = id.filter(|id| !id.trim().is_empty());
        let owned_id = owned_id.filter(|id| !id.trim().is_empty());
        for id in id.into_iter().chain(owned_id) {
            if id.split('/').any(is_dot_segment) {
                return Err(MambuApiError::invalid_input(format!(
                    "{id:?} is not a valid ID for {}",
                    self.response_entity_name()
                )));
            }
        }

        if let Some(api_type) = self.api_type {
            if api_type.requires_id() && id.is_none() {
                return Err(MambuApiError::missing_input(format!(
                    "{} ID for {api_type:?}",
                    self.entity_name
                )));
            }
            if api_type.requires_owned_id() && owned_id.is_none() {
                return Err(MambuApiError::missing_input(format!(
                    "{} ID for {api_type:?}",
                    self.response_entity_name()
                )));
            }
        }

        let mut path = match (self.url_path, self.entity_path) {
            (Some(path), _) | (None, Some(path)) => path.to_string(),
            (None, None) => String::new(),
        };
        if let Some(id) = id {
            path.push('/');
            path.push_str(id);
        }
        if let (true, Some(owned)) = (self.uses_owned_path(), self.owned_entity_path) {
            path.push('/');
            path.push_str(owned);
            if let Some(owned_id) = owned_id {
                path.push('/');
                path.push_str(owned_id);
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Branch, IndexRate, IndexRateSource, LineOfCredit, LoanAccount};

    #[test]
    fn entity_paths_follow_resource_names() {
        let get = ApiDefinition::new::<Branch>(ApiType::GetEntity);
        assert_eq!(get.url_path(Some("B1"), None).unwrap(), "branches/B1");
        assert_eq!(get.method(), Method::Get);
        assert_eq!(get.return_format(), ApiReturnFormat::Object);
        assert!(!get.full_details());

        let list = ApiDefinition::new::<Branch>(ApiType::GetList);
        assert_eq!(list.url_path(None, None).unwrap(), "branches");
        assert_eq!(list.return_format(), ApiReturnFormat::Collection);

        let details = ApiDefinition::new::<Branch>(ApiType::GetEntityDetails);
        assert!(details.full_details());
    }

    #[test]
    fn owned_paths_nest_under_the_parent() {
        let post = ApiDefinition::for_owned::<IndexRateSource, IndexRate>(ApiType::PostOwnedEntity);
        assert_eq!(post.url_path(Some("src"), None).unwrap(), "indexratesources/src/indexrates");
        assert_eq!(post.content_type(), ContentType::Json);
        assert_eq!(post.response_entity_name(), "IndexRate");

        let delete =
            ApiDefinition::for_owned::<LineOfCredit, LoanAccount>(ApiType::DeleteOwnedEntity);
        assert_eq!(
            delete.url_path(Some("LOC1"), Some("L9")).unwrap(),
            "linesofcredit/LOC1/loans/L9"
        );
        assert_eq!(delete.return_format(), ApiReturnFormat::Boolean);
        assert!(delete.url_path(Some("LOC1"), None).is_err());
    }

    #[test]
    fn owned_type_is_ignored_for_plain_kinds() {
        let get = ApiDefinition::for_owned::<LineOfCredit, LoanAccount>(ApiType::GetEntity);
        assert_eq!(get.url_path(Some("LOC1"), None).unwrap(), "linesofcredit/LOC1");
        assert_eq!(get.response_entity_name(), "LineOfCredit");
    }

    #[test]
    fn missing_id_is_rejected() {
        let get = ApiDefinition::new::<Branch>(ApiType::GetEntity);
        for id in [None, Some(""), Some("  ")] {
            let err = get.url_path(id, None).unwrap_err();
            assert_eq!(err.code(), crate::error::LOCAL_ERROR_CODE);
        }
    }

    #[test]
    fn dot_segment_ids_are_rejected() {
        let get = ApiDefinition::new::<Branch>(ApiType::GetEntity);
        for id in ["..", ".", "../settings/general", "B1/.."] {
            let err = get.url_path(Some(id), None).unwrap_err();
            assert!(
                matches!(err.kind(), crate::MambuErrorKind::InvalidInput(_)),
                "{id}: {err}"
            );
        }

        let delete =
            ApiDefinition::for_owned::<LineOfCredit, LoanAccount>(ApiType::DeleteOwnedEntity);
        assert!(delete.url_path(Some("LOC1"), Some("..")).is_err());
        assert_eq!(
            get.url_path(Some("v1..2"), None).unwrap(),
            "branches/v1..2"
        );
    }

    #[test]
    fn explicit_paths_take_an_optional_id() {
        let def = ApiDefinition::from_path(
            "settings/general",
            ContentType::WwwForm,
            Method::Get,
            ApiReturnFormat::Object,
        );
        assert_eq!(def.url_path(None, None).unwrap(), "settings/general");
        assert_eq!(def.url_path(Some("x"), None).unwrap(), "settings/general/x");
        assert!(def.api_type().is_none());
    }

    #[test]
    fn overrides_produce_new_definitions() {
        const BASE: ApiDefinition = ApiDefinition::new::<Branch>(ApiType::GetList);
        const AS_TEXT: ApiDefinition = BASE
            .with_return_format(ApiReturnFormat::ResponseString)
            .with_content_type(ContentType::Json)
            .with_json_date_format("%Y-%m-%d");

        assert_eq!(BASE.return_format(), ApiReturnFormat::Collection);
        assert_eq!(BASE.content_type(), ContentType::WwwForm);
        assert!(BASE.json_date_format().is_none());

        assert_eq!(AS_TEXT.return_format(), ApiReturnFormat::ResponseString);
        assert_eq!(AS_TEXT.content_type(), ContentType::Json);
        assert_eq!(AS_TEXT.json_date_format(), Some("%Y-%m-%d"));
    }
}
