use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::json::lenient_datetime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branch {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    pub notes: Option<String>,
    #[serde(with = "lenient_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(with = "lenient_datetime")]
    pub last_modified_date: Option<DateTime<Utc>>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Centre {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub state: Option<String>,
    pub assigned_branch_key: Option<String>,
    pub meeting_day: Option<String>,
    pub notes: Option<String>,
    #[serde(with = "lenient_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Currency {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub digits_after_decimal: Option<u8>,
    pub currency_symbol_position: Option<String>,
    pub is_base_currency: Option<bool>,
}

/// Entity type a custom field set applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomFieldType {
    ClientInfo,
    GroupInfo,
    LoanAccountInfo,
    SavingsAccountInfo,
    BranchInfo,
    CentreInfo,
    UserInfo,
    TransactionChannelInfo,
    LineOfCreditInfo,
}

impl CustomFieldType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CustomFieldType::ClientInfo => "CLIENT_INFO",
            CustomFieldType::GroupInfo => "GROUP_INFO",
            CustomFieldType::LoanAccountInfo => "LOAN_ACCOUNT_INFO",
            CustomFieldType::SavingsAccountInfo => "SAVINGS_ACCOUNT_INFO",
            CustomFieldType::BranchInfo => "BRANCH_INFO",
            CustomFieldType::CentreInfo => "CENTRE_INFO",
            CustomFieldType::UserInfo => "USER_INFO",
            CustomFieldType::TransactionChannelInfo => "TRANSACTION_CHANNEL_INFO",
            CustomFieldType::LineOfCreditInfo => "LINE_OF_CREDIT_INFO",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<CustomFieldType>,
    pub data_type: Option<String>,
    pub description: Option<String>,
    pub is_default: Option<bool>,
    pub is_required: Option<bool>,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFieldSet {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub notes: Option<String>,
    #[serde(rename = "type")]
    pub set_type: Option<CustomFieldType>,
    pub usage: Option<String>,
    pub custom_fields: Vec<CustomField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionChannel {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub is_default: Option<bool>,
    pub activated: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexRateSource {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    pub notes: Option<String>,
}

/// An interest rate value valid from `start_date`, posted under an
/// [`IndexRateSource`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexRate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_source_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(
        with = "lenient_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentificationDocumentTemplate {
    pub encoded_key: Option<String>,
    pub document_type: Option<String>,
    pub issuing_authority: Option<String>,
    pub document_id_template: Option<String>,
    pub mandatory_for_clients: Option<bool>,
    pub allow_attachments: Option<bool>,
}

/// Organization settings together with the organization's address.
///
/// `GET /api/settings/organization` returns the organization fields and a
/// nested `address` object in one flat document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationDetails {
    pub encoded_key: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "timeZoneID")]
    pub time_zone_id: Option<String>,
    pub phone_no: Option<String>,
    pub email_address: Option<String>,
    pub currency: Option<String>,
    #[serde(with = "lenient_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(with = "lenient_datetime")]
    pub last_modified_date: Option<DateTime<Utc>>,
    pub address: Option<Address>,
}

/// General organization settings. Fields without a dedicated member are kept
/// in `other`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSettings {
    pub decimal_seperator: Option<String>,
    pub client_id_format: Option<String>,
    pub group_id_format: Option<String>,
    pub line_of_credit_id_format: Option<String>,
    pub duplicate_client_fields_check: Option<bool>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectLabel {
    pub encoded_key: Option<String>,
    pub language: Option<String>,
    #[serde(rename = "type")]
    pub label_type: Option<String>,
    pub singular_value: Option<String>,
    pub plural_value: Option<String>,
    pub has_custom_value: Option<bool>,
}

impl_mambu_entity! {
    Branch => "branches";
    Centre => "centres";
    Currency => "currencies";
    CustomField => "customfields";
    CustomFieldSet => "customfieldsets";
    TransactionChannel => "transactionchannels";
    IndexRateSource => "indexratesources";
    IndexRate => "indexrates";
}
