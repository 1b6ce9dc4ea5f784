//! Organization-wide resources and settings.

use super::page;
use crate::{
    api_data::{
        BRANCH_ID, CUSTOM_FIELD_SETS_TYPE, LIMIT, OFFSET, SETTINGS_BRANDING_ICON,
        SETTINGS_BRANDING_LOGO, SETTINGS_GENERAL, SETTINGS_ID_DOCUMENT_TEMPLATES,
        SETTINGS_LABELS, SETTINGS_ORGANIZATION, YYYY_MM_DD_FORMAT,
    },
    client::{ContentType, Method, RequestExecutor},
    error::LOCAL_ERROR_CODE,
    functions::{ApiDefinition, ApiReturnFormat, ApiType, ServiceExecutor},
    json::from_json_str,
    models::{
        Branch, Centre, Currency, CustomField, CustomFieldSet, CustomFieldType, GeneralSettings,
        IdentificationDocumentTemplate, IndexRate, IndexRateSource, ObjectLabel,
        OrganizationDetails, TransactionChannel,
    },
    params::ParamsMap,
    APIResult, MambuApiError,
};

/// Message of the error returned by [`OrganizationService::get_currency`]
/// when the organization has no currency.
pub const BASE_CURRENCY_MUST_BE_DEFINED: &str = "Base Currency must be defined";

const GET_BRANCH_DETAILS: ApiDefinition = ApiDefinition::new::<Branch>(ApiType::GetEntityDetails);
const GET_BRANCHES: ApiDefinition = ApiDefinition::new::<Branch>(ApiType::GetList);
const GET_CENTRE_DETAILS: ApiDefinition = ApiDefinition::new::<Centre>(ApiType::GetEntityDetails);
const GET_CENTRES: ApiDefinition = ApiDefinition::new::<Centre>(ApiType::GetList);
const GET_CUSTOM_FIELD: ApiDefinition = ApiDefinition::new::<CustomField>(ApiType::GetEntity);
const GET_CUSTOM_FIELD_SETS: ApiDefinition = ApiDefinition::new::<CustomFieldSet>(ApiType::GetList);
const GET_CURRENCIES: ApiDefinition = ApiDefinition::new::<Currency>(ApiType::GetList);
const GET_TRANSACTION_CHANNELS: ApiDefinition =
    ApiDefinition::new::<TransactionChannel>(ApiType::GetList);
const POST_INDEX_INTEREST_RATE: ApiDefinition =
    ApiDefinition::for_owned::<IndexRateSource, IndexRate>(ApiType::PostOwnedEntity)
        .with_content_type(ContentType::Json)
        .with_json_date_format(YYYY_MM_DD_FORMAT);

const GET_ID_DOCUMENT_TEMPLATES: ApiDefinition = settings(
    SETTINGS_ID_DOCUMENT_TEMPLATES,
    ApiReturnFormat::Collection,
);
const GET_ORGANIZATION: ApiDefinition =
    settings(SETTINGS_ORGANIZATION, ApiReturnFormat::ResponseString);
const GET_GENERAL_SETTINGS: ApiDefinition = settings(SETTINGS_GENERAL, ApiReturnFormat::Object);
const GET_OBJECT_LABELS: ApiDefinition = settings(SETTINGS_LABELS, ApiReturnFormat::Collection);
const GET_BRANDING_LOGO: ApiDefinition =
    settings(SETTINGS_BRANDING_LOGO, ApiReturnFormat::ResponseString);
const GET_BRANDING_ICON: ApiDefinition =
    settings(SETTINGS_BRANDING_ICON, ApiReturnFormat::ResponseString);

const fn settings(path: &'static str, return_format: ApiReturnFormat) -> ApiDefinition {
    ApiDefinition::from_path(path, ContentType::WwwForm, Method::Get, return_format)
}

/// Branches, centres, currencies, custom fields and organization settings.
#[derive(Debug, Clone, Copy)]
pub struct OrganizationService<'a, E> {
    executor: &'a ServiceExecutor<E>,
}

impl<'a, E: RequestExecutor> OrganizationService<'a, E> {
    #[must_use]
    pub fn new(executor: &'a ServiceExecutor<E>) -> Self {
        Self { executor }
    }

    /// Returns the organization's base currency, the first entry of
    /// `GET /api/currencies`.
    ///
    /// # Errors
    ///
    /// Fails with code `-1` and [`BASE_CURRENCY_MUST_BE_DEFINED`] when the
    /// organization has no currency.
    pub fn get_currency(&self) -> APIResult<Currency> {
        let currencies: Vec<Currency> = self
            .executor
            .execute(&GET_CURRENCIES, None, None)?
            .into_collection()?;

        let Some(currency) = currencies.into_iter().next() else {
            log::error!("Organization has no currencies defined");
            return Err(MambuApiError::new(LOCAL_ERROR_CODE, BASE_CURRENCY_MUST_BE_DEFINED));
        };
        log::info!(
            "Retrieved base currency {}",
            currency.code.as_deref().unwrap_or("<none>")
        );
        Ok(currency)
    }

    /// Lists branches. The server defaults to `offset=0` and `limit=50`.
    pub fn get_branches(&self, offset: Option<&str>, limit: Option<&str>) -> APIResult<Vec<Branch>> {
        let branches: Vec<Branch> = self
            .executor
            .execute(&GET_BRANCHES, None, Some(page(offset, limit)))?
            .into_collection()?;
        log::info!("Retrieved {} branches", branches.len());
        Ok(branches)
    }

    /// Returns a branch with full details.
    pub fn get_branch(&self, branch_id: &str) -> APIResult<Branch> {
        self.executor
            .execute(&GET_BRANCH_DETAILS, Some(branch_id), None)?
            .into_object()
    }

    /// Returns a centre with full details.
    pub fn get_centre(&self, centre_id: &str) -> APIResult<Centre> {
        self.executor
            .execute(&GET_CENTRE_DETAILS, Some(centre_id), None)?
            .into_object()
    }

    /// Lists centres, restricted to one branch when `branch_id` is given.
    pub fn get_centres(
        &self,
        branch_id: Option<&str>,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> APIResult<Vec<Centre>> {
        let mut params = ParamsMap::new();
        params.put(BRANCH_ID, branch_id);
        params.put(OFFSET, offset);
        params.put(LIMIT, limit);

        let centres: Vec<Centre> = self
            .executor
            .execute(&GET_CENTRES, None, Some(params))?
            .into_collection()?;
        log::info!("Retrieved {} centres", centres.len());
        Ok(centres)
    }

    pub fn get_custom_field(&self, field_id: &str) -> APIResult<CustomField> {
        self.executor
            .execute(&GET_CUSTOM_FIELD, Some(field_id), None)?
            .into_object()
    }

    /// Lists custom field sets of one type, or of every type when `None`.
    pub fn get_custom_field_sets(
        &self,
        field_type: Option<CustomFieldType>,
    ) -> APIResult<Vec<CustomFieldSet>> {
        let params = field_type.map(|t| {
            let mut params = ParamsMap::new();
            params.add_param(CUSTOM_FIELD_SETS_TYPE, t.as_str());
            params
        });
        self.executor
            .execute(&GET_CUSTOM_FIELD_SETS, None, params)?
            .into_collection()
    }

    pub fn get_transaction_channels(&self) -> APIResult<Vec<TransactionChannel>> {
        self.executor
            .execute(&GET_TRANSACTION_CHANNELS, None, None)?
            .into_collection()
    }

    /// Posts a new rate under the index rate source `source_key`. Dates are
    /// sent as `yyyy-MM-dd`.
    ///
    /// # Errors
    ///
    /// Fails before any request when `index_rate` is `None` or `source_key`
    /// is blank.
    pub fn post_index_interest_rate(
        &self,
        source_key: &str,
        index_rate: Option<&IndexRate>,
    ) -> APIResult<IndexRate> {
        let rate: IndexRate = self
            .executor
            .execute_json(&POST_INDEX_INTEREST_RATE, index_rate, Some(source_key))?
            .into_object()?;
        log::info!("Posted index rate to source {source_key}");
        Ok(rate)
    }

    /// Lists identification document templates. Not paginated.
    pub fn get_identification_document_templates(
        &self,
    ) -> APIResult<Vec<IdentificationDocumentTemplate>> {
        self.executor
            .execute(&GET_ID_DOCUMENT_TEMPLATES, None, None)?
            .into_collection()
    }

    /// Returns organization details and address, parsed once from
    /// `GET /api/settings/organization`.
    pub fn get_organization(&self) -> APIResult<OrganizationDetails> {
        let raw = self.executor.execute_string(&GET_ORGANIZATION, None, None)?;
        let organization: OrganizationDetails = from_json_str(&raw)?;
        log::info!(
            "Retrieved organization {}",
            organization.name.as_deref().unwrap_or("<unnamed>")
        );
        Ok(organization)
    }

    pub fn get_general_settings(&self) -> APIResult<GeneralSettings> {
        self.executor
            .execute(&GET_GENERAL_SETTINGS, None, None)?
            .into_object()
    }

    /// Lists object labels for every supported language.
    pub fn get_object_labels(&self) -> APIResult<Vec<ObjectLabel>> {
        self.executor
            .execute(&GET_OBJECT_LABELS, None, None)?
            .into_collection()
    }

    /// Returns the logo as a data URI, e.g. `data:image/PNG;base64,iVBO...`.
    pub fn get_branding_logo(&self) -> APIResult<String> {
        self.executor.execute_string(&GET_BRANDING_LOGO, None, None)
    }

    /// Returns the icon as a data URI.
    pub fn get_branding_icon(&self) -> APIResult<String> {
        self.executor.execute_string(&GET_BRANDING_ICON, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_paths() {
        assert_eq!(
            GET_ID_DOCUMENT_TEMPLATES.url_path(None, None).unwrap(),
            "settings/iddocumenttemplates"
        );
        assert_eq!(
            GET_ORGANIZATION.url_path(None, None).unwrap(),
            "settings/organization"
        );
        assert_eq!(
            GET_BRANDING_LOGO.url_path(None, None).unwrap(),
            "settings/branding/logo"
        );
        assert_eq!(GET_ORGANIZATION.return_format(), ApiReturnFormat::ResponseString);
    }

    #[test]
    fn index_rate_definition_posts_json_dates() {
        assert_eq!(POST_INDEX_INTEREST_RATE.method(), Method::Post);
        assert_eq!(POST_INDEX_INTEREST_RATE.content_type(), ContentType::Json);
        assert_eq!(
            POST_INDEX_INTEREST_RATE.json_date_format(),
            Some(YYYY_MM_DD_FORMAT)
        );
    }
}
