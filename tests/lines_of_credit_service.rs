#![allow(clippy::unwrap_used)]

mod common;

use common::{api_url, executor, MockExecutor};
use oxi_mambu::{ContentType, MambuErrorKind, Method};

#[test]
fn all_lines_of_credit_are_paginated() {
    let mock = MockExecutor::new().respond(r#"[{"id":"LOC1","amount":5000,"clientKey":"c1"}]"#);

    let lines = executor(&mock)
        .lines_of_credit()
        .get_all_lines_of_credit(Some("0"), Some("5"))
        .unwrap();

    assert_eq!(lines[0].amount, Some(5000.0));
    assert_eq!(lines[0].account_holder_key(), Some("c1"));
    assert_eq!(
        mock.single_request().url,
        format!("{}?offset=0&limit=5", api_url("linesofcredit"))
    );
}

#[test]
fn single_line_of_credit() {
    let mock = MockExecutor::new().respond(r#"{"id":"LOC1","groupKey":"g1"}"#);

    let line = executor(&mock)
        .lines_of_credit()
        .get_line_of_credit("LOC1")
        .unwrap();

    assert_eq!(line.account_holder_key(), Some("g1"));
    assert_eq!(mock.single_request().url, api_url("linesofcredit/LOC1"));
}

#[test]
fn owner_lines_of_credit_nest_under_the_owner() {
    let mock = MockExecutor::new().respond("[]").respond("");
    let executor = executor(&mock);

    let client_lines = executor
        .lines_of_credit()
        .get_client_lines_of_credit("C1", Some("0"), Some("10"))
        .unwrap();
    let group_lines = executor
        .lines_of_credit()
        .get_group_lines_of_credit("G1", None, None)
        .unwrap();

    assert!(client_lines.is_empty());
    assert!(group_lines.is_empty());
    let urls: Vec<_> = mock.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        [
            format!("{}?offset=0&limit=10", api_url("clients/C1/linesofcredit")),
            api_url("groups/G1/linesofcredit"),
        ]
    );
}

#[test]
fn accounts_for_line_of_credit_is_one_object() {
    let mock = MockExecutor::new().respond(
        r#"{"loanAccounts":[{"id":"L1"},{"id":"L2"}],"savingsAccounts":[{"id":"S1","balance":12.5}]}"#,
    );

    let accounts = executor(&mock)
        .lines_of_credit()
        .get_accounts_for_line_of_credit("LOC1")
        .unwrap();

    assert_eq!(accounts.loan_accounts.len(), 2);
    assert_eq!(accounts.savings_accounts[0].balance, Some(12.5));
    assert_eq!(mock.single_request().url, api_url("linesofcredit/LOC1/accounts"));
}

#[test]
fn loan_accounts_are_added_and_removed() {
    let mock = MockExecutor::new()
        .respond(r#"{"id":"L1","lineOfCreditKey":"loc-key"}"#)
        .respond("");
    let executor = executor(&mock);
    let service = executor.lines_of_credit();

    let added = service.add_loan_account("LOC1", "L1").unwrap();
    assert_eq!(added.line_of_credit_key.as_deref(), Some("loc-key"));
    assert!(service.delete_loan_account("LOC1", "L1").unwrap());

    let requests = mock.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].content_type, ContentType::WwwForm);
    assert_eq!(requests[0].url, api_url("linesofcredit/LOC1/loans/L1"));
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, api_url("linesofcredit/LOC1/loans/L1"));
    assert_eq!(requests[1].body, None);
}

#[test]
fn savings_accounts_are_added_and_removed() {
    let mock = MockExecutor::new().respond(r#"{"id":"S1"}"#).respond("");
    let executor = executor(&mock);
    let service = executor.lines_of_credit();

    assert_eq!(
        service.add_savings_account("LOC1", "S1").unwrap().id.as_deref(),
        Some("S1")
    );
    assert!(service.delete_savings_account("LOC1", "S1").unwrap());

    let urls: Vec<_> = mock.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        [
            api_url("linesofcredit/LOC1/savings/S1"),
            api_url("linesofcredit/LOC1/savings/S1"),
        ]
    );
}

#[test]
fn removing_an_account_needs_its_id() {
    let mock = MockExecutor::new();
    let err = executor(&mock)
        .lines_of_credit()
        .delete_loan_account("LOC1", "")
        .unwrap_err();

    assert!(matches!(err.kind(), MambuErrorKind::MissingInput(_)));
    assert!(mock.requests().is_empty());
}
