use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::json::lenient_datetime;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub state: Option<String>,
    pub assigned_branch_key: Option<String>,
    #[serde(with = "lenient_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub group_name: Option<String>,
    pub assigned_branch_key: Option<String>,
    #[serde(with = "lenient_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl_mambu_entity! {
    Client => "clients";
    Group => "groups";
}
