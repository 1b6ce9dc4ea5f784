//! Parameter names and fixed resource paths shared by the engine and services.

pub const OFFSET: &str = "offset";
pub const LIMIT: &str = "limit";
pub const FULL_DETAILS: &str = "fullDetails";
pub const BRANCH_ID: &str = "branchId";
pub const CUSTOM_FIELD_SETS_TYPE: &str = "customFieldType";

/// Params key under which a serialized JSON document travels until dispatch.
pub const JSON_OBJECT: &str = "JSON";

pub const SETTINGS_ORGANIZATION: &str = "settings/organization";
pub const SETTINGS_GENERAL: &str = "settings/general";
pub const SETTINGS_LABELS: &str = "settings/labels";
pub const SETTINGS_ID_DOCUMENT_TEMPLATES: &str = "settings/iddocumenttemplates";
pub const SETTINGS_BRANDING_LOGO: &str = "settings/branding/logo";
pub const SETTINGS_BRANDING_ICON: &str = "settings/branding/icon";

/// `yyyy-MM-dd`, expected by index rate and other date-only JSON endpoints.
pub const YYYY_MM_DD_FORMAT: &str = "%Y-%m-%d";
/// `yyyy-MM-dd'T'HH:mm:ssZ`, the default timestamp layout of the API.
pub const YYYY_MM_DD_T_HH_MM_SS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";
