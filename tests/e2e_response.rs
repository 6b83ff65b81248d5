//! Response decoding and paging, driven the way a transport would drive
//! them: raw status, content type and body in, models or errors out.

use std::collections::HashMap;

use graph_models::models::odataerrors::ODataError;
use graph_models::models::{Subscription, SubscriptionCollectionResponse};
use graph_models::prelude::*;
use graph_models::response::{decode_collection_response, decode_response};
use graph_models::serialization::registry::default_parse_node_registry;
use graph_models::{ApiError, Error, ErrorMappings, PageIterator, RawResponse, Result};
use pretty_assertions::assert_eq;
use serde_json::json;

fn decode(response: RawResponse<'_>, mappings: &ErrorMappings) -> Result<Option<Box<dyn Parsable>>> {
    decode_response(
        &response,
        SubscriptionCollectionResponse::create_from_discriminator_value,
        mappings,
        default_parse_node_registry(),
    )
}

fn expect_api_error(result: Result<Option<Box<dyn Parsable>>>) -> ApiError {
    match result {
        Err(Error::Api(err)) => err,
        other => panic!("expected an API error, got {other:?}"),
    }
}

// ============================================================================
// 1. Success paths
// ============================================================================

#[test]
fn test_page_decodes() {
    let body = json!({"@odata.count": 1, "value": [{"id": "s1", "resource": "me/events"}]}).to_string();
    let model = decode(RawResponse::json(200, body.as_bytes()), &ErrorMappings::odata())
        .unwrap()
        .unwrap();
    let page = downcast::<SubscriptionCollectionResponse>(model).unwrap();
    assert_eq!(page.odata_count(), Some(1));
    assert_eq!(page.value().unwrap()[0].resource(), Some("me/events"));
}

#[test]
fn test_vendor_content_type_is_json() {
    let response = RawResponse {
        status_code: 200,
        content_type: Some("application/vnd.api+json"),
        body: br#"{"value":[]}"#,
    };
    assert!(decode(response, &ErrorMappings::odata()).unwrap().is_some());
}

#[test]
fn test_unsupported_content_type() {
    let response = RawResponse { status_code: 200, content_type: Some("text/plain"), body: b"ok" };
    assert!(matches!(
        decode(response, &ErrorMappings::odata()),
        Err(Error::UnsupportedContentType(_))
    ));
}

#[test]
fn test_top_level_array() {
    let models = decode_collection_response(
        &RawResponse::json(200, br#"[{"id":"a"},{"id":"b"}]"#),
        Subscription::create_from_discriminator_value,
        &ErrorMappings::odata(),
        default_parse_node_registry(),
    )
    .unwrap()
    .unwrap();
    let ids: Vec<_> = models
        .iter()
        .filter_map(|m| downcast_ref::<Subscription>(&**m))
        .filter_map(|s| s.id())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

// ============================================================================
// 2. Error paths
// ============================================================================

#[test]
fn test_odata_error_surfaces_message_and_model() {
    let body = json!({
        "error": {
            "code": "ExtensionError",
            "message": "Operation: Create; Exception: [Status Code: BadRequest]",
            "innerError": {"request-id": "9c0d", "date": "2024-02-02T10:00:00"}
        }
    })
    .to_string();
    let err = expect_api_error(decode(RawResponse::json(400, body.as_bytes()), &ErrorMappings::odata()));

    assert_eq!(err.status_code, 400);
    assert_eq!(err.to_string(), "Operation: Create; Exception: [Status Code: BadRequest]");
    let odata = err.error_as::<ODataError>().unwrap();
    let inner = odata.error().and_then(|main| main.inner_error()).unwrap();
    assert_eq!(inner.request_id(), Some("9c0d"));
}

#[test]
fn test_error_without_message_uses_default() {
    let err = expect_api_error(decode(RawResponse::json(500, b"{}"), &ErrorMappings::odata()));
    assert_eq!(err.message, "error status code received from the API");
    assert!(err.error_as::<ODataError>().is_some());
}

#[test]
fn test_exact_code_beats_class() {
    let mappings = ErrorMappings::odata().with("404", Entity::create_from_discriminator_value);
    let err = expect_api_error(decode(RawResponse::json(404, br#"{"id":"missing"}"#), &mappings));
    assert!(err.error_as::<ODataError>().is_none());
    assert_eq!(err.error_as::<Entity>().and_then(|e| e.id()), Some("missing"));
}

#[test]
fn test_catch_all_pattern() {
    let mappings = ErrorMappings::new().with("xxx", ODataError::create_from_discriminator_value);
    let body = br#"{"error":{"message":"throttled"}}"#;
    let err = expect_api_error(decode(RawResponse::json(429, body), &mappings));
    assert_eq!(err.message, "throttled");
}

#[test]
fn test_unmapped_and_bodiless_errors() {
    let unmapped = expect_api_error(decode(RawResponse::json(401, b"{}"), &ErrorMappings::new()));
    assert_eq!(
        unmapped.message,
        "The server returned an unexpected status code and no error factory is registered for this code: 401"
    );

    let bodiless = expect_api_error(decode(RawResponse::json(502, b""), &ErrorMappings::odata()));
    assert_eq!(
        bodiless.message,
        "The server returned an unexpected status code with no response body: 502"
    );
    assert!(bodiless.error.is_none());
}

#[test]
fn test_malformed_error_body() {
    let result = decode(RawResponse::json(400, b"{not json"), &ErrorMappings::odata());
    assert!(matches!(result, Err(Error::Json(_))));
}

// ============================================================================
// 3. Paging
// ============================================================================

fn pages() -> HashMap<&'static str, String> {
    HashMap::from([
        (
            "https://graph.microsoft.com/v1.0/subscriptions?$skiptoken=2",
            json!({
                "value": [{"id": "s3"}],
                "@odata.nextLink": "https://graph.microsoft.com/v1.0/subscriptions?$skiptoken=3"
            })
            .to_string(),
        ),
        (
            "https://graph.microsoft.com/v1.0/subscriptions?$skiptoken=3",
            json!({"value": [{"id": "s4"}, {"id": "s5"}]}).to_string(),
        ),
    ])
}

#[test]
fn test_page_iterator_walks_all_pages() {
    let first = json!({
        "@odata.count": 5,
        "value": [{"id": "s1"}, {"id": "s2"}],
        "@odata.nextLink": "https://graph.microsoft.com/v1.0/subscriptions?$skiptoken=2"
    })
    .to_string();
    let page = decode(RawResponse::json(200, first.as_bytes()), &ErrorMappings::odata())
        .unwrap()
        .unwrap();

    let remote = pages();
    let mut iter = PageIterator::new(
        page,
        SubscriptionCollectionResponse::create_from_discriminator_value,
        |link: &str| {
            remote
                .get(link)
                .map(|body| body.clone().into_bytes())
                .ok_or_else(|| Error::from(ApiError::new(404, link)))
        },
    );
    assert_eq!(iter.odata_count(), Some(5));

    let mut ids = Vec::new();
    iter.iterate(|item| {
        if let Some(sub) = downcast_ref::<Subscription>(&*item) {
            ids.extend(sub.id().map(str::to_owned));
        }
        true
    })
    .unwrap();

    assert_eq!(ids, vec!["s1", "s2", "s3", "s4", "s5"]);
    assert_eq!(iter.pages_fetched(), 2);
    assert_eq!(iter.next_link(), None);
}

#[test]
fn test_page_iterator_reports_fetch_failure() {
    let first = json!({
        "value": [{"id": "s1"}],
        "@odata.nextLink": "https://graph.microsoft.com/v1.0/subscriptions?$skiptoken=gone"
    })
    .to_string();
    let page = json_page(&first);
    let mut iter = PageIterator::new(
        page,
        SubscriptionCollectionResponse::create_from_discriminator_value,
        |link: &str| Err(ApiError::new(410, link).into()),
    );
    let items: Vec<Result<Box<dyn Parsable>>> = iter.by_ref().collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(matches!(&items[1], Err(Error::Api(err)) if err.status_code == 410));
}

fn json_page(body: &str) -> Box<dyn Parsable> {
    graph_models::serialization::json::parse(
        body.as_bytes(),
        SubscriptionCollectionResponse::create_from_discriminator_value,
    )
    .unwrap()
}
