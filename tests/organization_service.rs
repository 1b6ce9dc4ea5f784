#![allow(clippy::unwrap_used)]

mod common;

use chrono::{TimeZone, Utc};
use common::{api_url, executor, MockExecutor};
use oxi_mambu::{
    models::{CustomFieldType, IndexRate},
    services::BASE_CURRENCY_MUST_BE_DEFINED,
    ContentType, MambuErrorKind, Method,
};
use serde_json::{json, Value};

#[test]
fn currency_is_the_first_entry() {
    let mock = MockExecutor::new()
        .respond(r#"[{"code":"EUR","name":"Euro","isBaseCurrency":true},{"code":"USD"}]"#);

    let currency = executor(&mock).organization().get_currency().unwrap();
    assert_eq!(currency.code.as_deref(), Some("EUR"));
    assert_eq!(currency.is_base_currency, Some(true));
    assert_eq!(mock.single_request().url, api_url("currencies"));
}

#[test]
fn empty_currency_list_is_an_error() {
    for body in ["[]", ""] {
        let mock = MockExecutor::new().respond(body);
        let err = executor(&mock).organization().get_currency().unwrap_err();
        assert_eq!(err.code(), -1);
        assert_eq!(err.message(), BASE_CURRENCY_MUST_BE_DEFINED);
    }
}

#[test]
fn branches_are_paginated_in_the_query() {
    let mock = MockExecutor::new().respond(r#"[{"id":"B1"},{"id":"B2"}]"#);

    let branches = executor(&mock)
        .organization()
        .get_branches(Some("0"), Some("30"))
        .unwrap();

    assert_eq!(branches.len(), 2);
    let request = mock.single_request();
    assert_eq!(request.method, Method::Get);
    assert!(request.url.contains("offset=0&limit=30"), "{}", request.url);
}

#[test]
fn branches_without_pagination_use_server_defaults() {
    let mock = MockExecutor::new().respond("[]");
    executor(&mock).organization().get_branches(None, None).unwrap();
    assert_eq!(mock.single_request().url, api_url("branches"));
}

#[test]
fn centres_filter_by_branch() {
    let mock = MockExecutor::new().respond("[]").respond("[]");
    let executor = executor(&mock);

    executor
        .organization()
        .get_centres(Some("B1"), None, Some("5"))
        .unwrap();
    executor.organization().get_centres(None, None, None).unwrap();

    let urls: Vec<_> = mock.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        [
            format!("{}?branchId=B1&limit=5", api_url("centres")),
            api_url("centres"),
        ]
    );
}

#[test]
fn custom_field_sets_by_type() {
    let mock = MockExecutor::new()
        .respond(r#"[{"id":"set1","type":"CLIENT_INFO","customFields":[{"id":"f1"}]}]"#);

    let sets = executor(&mock)
        .organization()
        .get_custom_field_sets(Some(CustomFieldType::ClientInfo))
        .unwrap();

    assert_eq!(sets[0].set_type, Some(CustomFieldType::ClientInfo));
    assert_eq!(sets[0].custom_fields.len(), 1);
    assert_eq!(
        mock.single_request().url,
        format!("{}?customFieldType=CLIENT_INFO", api_url("customfieldsets"))
    );
}

#[test]
fn index_rate_is_posted_with_date_only_format() {
    let mock = MockExecutor::new()
        .respond(r#"{"encodedKey":"rate1","rate":4.5,"startDate":"2024-03-01T00:00:00+0000"}"#);
    let rate = IndexRate {
        rate: Some(4.5),
        start_date: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        notes: Some("Q1".into()),
        ..Default::default()
    };

    let posted = executor(&mock)
        .organization()
        .post_index_interest_rate("src1", Some(&rate))
        .unwrap();

    assert_eq!(posted.encoded_key.as_deref(), Some("rate1"));
    assert_eq!(posted.start_date, rate.start_date);

    let request = mock.single_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.content_type, ContentType::Json);
    assert_eq!(request.url, api_url("indexratesources/src1/indexrates"));
    let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({"rate": 4.5, "startDate": "2024-03-01", "notes": "Q1"})
    );
}

#[test]
fn index_rate_is_required() {
    let mock = MockExecutor::new();
    let err = executor(&mock)
        .organization()
        .post_index_interest_rate("src1", None)
        .unwrap_err();

    assert!(matches!(err.kind(), MambuErrorKind::MissingInput(_)));
    assert!(mock.requests().is_empty());
}

#[test]
fn organization_and_address_come_from_one_document() {
    let mock = MockExecutor::new().respond(
        r#"{"name":"Org name","timeZoneID":"PST","currency":"EUR",
            "address":{"line1":"1st Rd.","city":"City"}}"#,
    );

    let organization = executor(&mock).organization().get_organization().unwrap();
    assert_eq!(organization.name.as_deref(), Some("Org name"));
    assert_eq!(organization.time_zone_id.as_deref(), Some("PST"));
    let address = organization.address.unwrap();
    assert_eq!(address.line1.as_deref(), Some("1st Rd."));
    assert_eq!(address.city.as_deref(), Some("City"));
    assert_eq!(mock.single_request().url, api_url("settings/organization"));
}

#[test]
fn general_settings_keep_unknown_fields() {
    let mock = MockExecutor::new()
        .respond(r#"{"decimalSeperator":"COMMA","dateFormats":{"SHORT_DATE_FORMAT":"dd-MM-yyyy"}}"#);

    let settings = executor(&mock).organization().get_general_settings().unwrap();
    assert_eq!(settings.decimal_seperator.as_deref(), Some("COMMA"));
    assert!(settings.other.contains_key("dateFormats"));
}

#[test]
fn settings_collections() {
    let mock = MockExecutor::new()
        .respond(r#"[{"documentType":"Passport","mandatoryForClients":true}]"#)
        .respond(r#"[{"language":"ENGLISH","type":"CLIENT","singularValue":"Client"}]"#);
    let executor = executor(&mock);

    let templates = executor
        .organization()
        .get_identification_document_templates()
        .unwrap();
    let labels = executor.organization().get_object_labels().unwrap();

    assert_eq!(templates[0].document_type.as_deref(), Some("Passport"));
    assert_eq!(labels[0].singular_value.as_deref(), Some("Client"));

    let urls: Vec<_> = mock.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        [api_url("settings/iddocumenttemplates"), api_url("settings/labels")]
    );
}

#[test]
fn branding_images_are_raw_text() {
    let logo = "data:image/PNG;base64,iVBORw0KGgo=";
    let mock = MockExecutor::new().respond(logo).respond("data:image/PNG;base64,AAAA");
    let executor = executor(&mock);

    assert_eq!(executor.organization().get_branding_logo().unwrap(), logo);
    assert_eq!(
        executor.organization().get_branding_icon().unwrap(),
        "data:image/PNG;base64,AAAA"
    );
    assert_eq!(mock.requests()[1].url, api_url("settings/branding/icon"));
}
