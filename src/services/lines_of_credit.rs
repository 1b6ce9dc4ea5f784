//! Lines of credit and the accounts grouped under them.

use super::page;
use crate::{
    client::{ContentType, RequestExecutor},
    functions::{ApiDefinition, ApiReturnFormat, ApiType, ServiceExecutor},
    models::{
        AccountsFromLineOfCredit, Client, Group, LineOfCredit, LoanAccount, SavingsAccount,
    },
    APIResult,
};

const GET_LINES_OF_CREDIT: ApiDefinition = ApiDefinition::new::<LineOfCredit>(ApiType::GetList);
const GET_LINE_OF_CREDIT: ApiDefinition = ApiDefinition::new::<LineOfCredit>(ApiType::GetEntity);
const GET_CLIENT_LINES_OF_CREDIT: ApiDefinition =
    ApiDefinition::for_owned::<Client, LineOfCredit>(ApiType::GetOwnedEntities);
const GET_GROUP_LINES_OF_CREDIT: ApiDefinition =
    ApiDefinition::for_owned::<Group, LineOfCredit>(ApiType::GetOwnedEntities);
// One object holding both account lists, not a collection.
const GET_ACCOUNTS_FOR_LINE_OF_CREDIT: ApiDefinition =
    ApiDefinition::for_owned::<LineOfCredit, AccountsFromLineOfCredit>(ApiType::GetOwnedEntities)
        .with_return_format(ApiReturnFormat::Object);

const ADD_LOAN_ACCOUNT: ApiDefinition =
    ApiDefinition::for_owned::<LineOfCredit, LoanAccount>(ApiType::PostOwnedEntity)
        .with_content_type(ContentType::WwwForm);
const DELETE_LOAN_ACCOUNT: ApiDefinition =
    ApiDefinition::for_owned::<LineOfCredit, LoanAccount>(ApiType::DeleteOwnedEntity);
const ADD_SAVINGS_ACCOUNT: ApiDefinition =
    ApiDefinition::for_owned::<LineOfCredit, SavingsAccount>(ApiType::PostOwnedEntity)
        .with_content_type(ContentType::WwwForm);
const DELETE_SAVINGS_ACCOUNT: ApiDefinition =
    ApiDefinition::for_owned::<LineOfCredit, SavingsAccount>(ApiType::DeleteOwnedEntity);

#[derive(Debug, Clone, Copy)]
pub struct LinesOfCreditService<'a, E> {
    executor: &'a ServiceExecutor<E>,
}

impl<'a, E: RequestExecutor> LinesOfCreditService<'a, E> {
    #[must_use]
    pub fn new(executor: &'a ServiceExecutor<E>) -> Self {
        Self { executor }
    }

    /// Lists every line of credit in the organization.
    pub fn get_all_lines_of_credit(
        &self,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> APIResult<Vec<LineOfCredit>> {
        let lines: Vec<LineOfCredit> = self
            .executor
            .execute(&GET_LINES_OF_CREDIT, None, Some(page(offset, limit)))?
            .into_collection()?;
        log::info!("Retrieved {} lines of credit", lines.len());
        Ok(lines)
    }

    pub fn get_line_of_credit(&self, line_of_credit_id: &str) -> APIResult<LineOfCredit> {
        self.executor
            .execute(&GET_LINE_OF_CREDIT, Some(line_of_credit_id), None)?
            .into_object()
    }

    /// Lists the lines of credit owned by a client.
    pub fn get_client_lines_of_credit(
        &self,
        client_id: &str,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> APIResult<Vec<LineOfCredit>> {
        self.executor
            .execute(
                &GET_CLIENT_LINES_OF_CREDIT,
                Some(client_id),
                Some(page(offset, limit)),
            )?
            .into_collection()
    }

    /// Lists the lines of credit owned by a group.
    pub fn get_group_lines_of_credit(
        &self,
        group_id: &str,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> APIResult<Vec<LineOfCredit>> {
        self.executor
            .execute(
                &GET_GROUP_LINES_OF_CREDIT,
                Some(group_id),
                Some(page(offset, limit)),
            )?
            .into_collection()
    }

    /// Returns the loan and savings accounts grouped under a line of credit.
    pub fn get_accounts_for_line_of_credit(
        &self,
        line_of_credit_id: &str,
    ) -> APIResult<AccountsFromLineOfCredit> {
        self.executor
            .execute(&GET_ACCOUNTS_FOR_LINE_OF_CREDIT, Some(line_of_credit_id), None)?
            .into_object()
    }

    /// Moves an existing loan account under a line of credit.
    pub fn add_loan_account(
        &self,
        line_of_credit_id: &str,
        loan_account_id: &str,
    ) -> APIResult<LoanAccount> {
        let loan: LoanAccount = self
            .executor
            .execute_with_owned_id(&ADD_LOAN_ACCOUNT, line_of_credit_id, loan_account_id, None)?
            .into_object()?;
        log::info!("Added loan {loan_account_id} to line of credit {line_of_credit_id}");
        Ok(loan)
    }

    /// Removes a loan account from a line of credit.
    pub fn delete_loan_account(
        &self,
        line_of_credit_id: &str,
        loan_account_id: &str,
    ) -> APIResult<bool> {
        let deleted = self.executor.execute_boolean(
            &DELETE_LOAN_ACCOUNT,
            Some(line_of_credit_id),
            Some(loan_account_id),
        )?;
        log::info!("Removed loan {loan_account_id} from line of credit {line_of_credit_id}");
        Ok(deleted)
    }

    /// Moves an existing savings account under a line of credit.
    pub fn add_savings_account(
        &self,
        line_of_credit_id: &str,
        savings_account_id: &str,
    ) -> APIResult<SavingsAccount> {
        let account: SavingsAccount = self
            .executor
            .execute_with_owned_id(
                &ADD_SAVINGS_ACCOUNT,
                line_of_credit_id,
                savings_account_id,
                None,
            )?
            .into_object()?;
        log::info!("Added savings {savings_account_id} to line of credit {line_of_credit_id}");
        Ok(account)
    }

    pub fn delete_savings_account(
        &self,
        line_of_credit_id: &str,
        savings_account_id: &str,
    ) -> APIResult<bool> {
        let deleted = self.executor.execute_boolean(
            &DELETE_SAVINGS_ACCOUNT,
            Some(line_of_credit_id),
            Some(savings_account_id),
        )?;
        log::info!(
            "Removed savings {savings_account_id} from line of credit {line_of_credit_id}"
        );
        Ok(deleted)
    }
}
