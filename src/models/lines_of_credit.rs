use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::json::lenient_datetime;

/// A credit arrangement owned by a client or a group, under which loan and
/// savings accounts can be grouped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineOfCredit {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub amount: Option<f64>,
    pub state: Option<String>,
    pub notes: Option<String>,
    pub client_key: Option<String>,
    pub group_key: Option<String>,
    #[serde(with = "lenient_datetime")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(with = "lenient_datetime")]
    pub expire_date: Option<DateTime<Utc>>,
    #[serde(with = "lenient_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
}

impl LineOfCredit {
    /// Encoded key of the owning client, or of the owning group.
    #[must_use]
    pub fn account_holder_key(&self) -> Option<&str> {
        self.client_key.as_deref().or(self.group_key.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoanAccount {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub loan_name: Option<String>,
    pub loan_amount: Option<f64>,
    pub account_holder_key: Option<String>,
    pub account_holder_type: Option<String>,
    pub account_state: Option<String>,
    pub line_of_credit_key: Option<String>,
    #[serde(with = "lenient_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsAccount {
    pub encoded_key: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub balance: Option<f64>,
    pub account_holder_key: Option<String>,
    pub account_holder_type: Option<String>,
    pub account_state: Option<String>,
    pub line_of_credit_key: Option<String>,
    #[serde(with = "lenient_datetime")]
    pub creation_date: Option<DateTime<Utc>>,
}

/// Accounts grouped under one line of credit, as returned by
/// `GET /api/linesofcredit/{id}/accounts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountsFromLineOfCredit {
    pub loan_accounts: Vec<LoanAccount>,
    pub savings_accounts: Vec<SavingsAccount>,
}

impl_mambu_entity! {
    LineOfCredit => "linesofcredit";
    LoanAccount => "loans";
    SavingsAccount => "savings";
    AccountsFromLineOfCredit => "accounts";
}
