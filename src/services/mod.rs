//! Resource services. Each declares its operations as constant
//! [`ApiDefinition`](crate::ApiDefinition)s and runs them through a borrowed
//! [`ServiceExecutor`](crate::ServiceExecutor).

mod lines_of_credit;
mod organization;

pub use lines_of_credit::LinesOfCreditService;
pub use organization::{OrganizationService, BASE_CURRENCY_MUST_BE_DEFINED};

use crate::{
    api_data::{LIMIT, OFFSET},
    params::ParamsMap,
};

/// `offset`/`limit` params; unset values are left to the server defaults.
fn page(offset: Option<&str>, limit: Option<&str>) -> ParamsMap {
    let mut params = ParamsMap::new();
    params.put(OFFSET, offset);
    params.put(LIMIT, limit);
    params
}
