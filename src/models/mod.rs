//! Plain data holders for API resources.
//!
//! Every field is optional: the API omits whatever is unset, and the same
//! type is used for requests and responses.

/// A resource type with a conventional collection name in the API path.
pub trait MambuEntity {
    /// Type name used in logs and errors.
    const NAME: &'static str;
    /// Path segment of the resource collection, e.g. `branches`.
    const RESOURCE: &'static str;
}

macro_rules! impl_mambu_entity {
    ($($entity:ident => $resource:literal;)+) => {
        $(
            impl $crate::models::MambuEntity for $entity {
                const NAME: &'static str = stringify!($entity);
                const RESOURCE: &'static str = $resource;
            }
        )+
    };
}

mod clients;
mod lines_of_credit;
mod organization;

pub use clients::{Client, Group};
pub use lines_of_credit::{AccountsFromLineOfCredit, LineOfCredit, LoanAccount, SavingsAccount};
pub use organization::{
    Address, Branch, Centre, Currency, CustomField, CustomFieldSet, CustomFieldType,
    GeneralSettings, IdentificationDocumentTemplate, IndexRate, IndexRateSource, ObjectLabel,
    OrganizationDetails, TransactionChannel,
};
