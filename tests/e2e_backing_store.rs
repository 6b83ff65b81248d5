//! Change tracking seen from the model API: dirty flags, change callbacks
//! and changed-only (PATCH) output.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use graph_models::models::{EmailAddress, MessageRulePredicates, Recipient, Subscription};
use graph_models::prelude::*;
use graph_models::serialization::json::{self, JsonSerializationWriter};
use graph_models::{SerializationOptions, StoreKey};
use pretty_assertions::assert_eq;
use serde_json::json;

fn parsed_subscription() -> Subscription {
    let body = json!({
        "id": "sub-1",
        "resource": "me/mailFolders('Inbox')/messages",
        "changeType": "created,updated",
        "notificationUrl": "https://example.com/hook",
        "expirationDateTime": "2030-01-01T00:00:00Z",
        "latestSupportedTlsVersion": "v1_2"
    });
    json::parse_as(body.to_string().as_bytes(), Subscription::create_from_discriminator_value).unwrap()
}

fn changed_only(model: &dyn Parsable) -> serde_json::Value {
    let mut writer = JsonSerializationWriter::new().changed_only(true);
    model.serialize(&mut writer).unwrap();
    writer.into_json()
}

// ============================================================================
// 1. Dirty flags
// ============================================================================

#[test]
fn test_new_model_edits_are_dirty() {
    let mut sub = Subscription::new();
    sub.set_resource(Some("me/events".into()));
    let key = StoreKey::new("resource").unwrap();
    assert!(sub.backing_store().is_changed(&key));
    assert!(sub.backing_store().is_dirty());
}

#[test]
fn test_parsed_model_is_clean() {
    let sub = parsed_subscription();
    assert!(!sub.backing_store().is_dirty());
    assert_eq!(sub.resource(), Some("me/mailFolders('Inbox')/messages"));
}

#[test]
fn test_edit_after_parse_dirties_only_that_field() {
    let mut sub = parsed_subscription();
    sub.set_notification_url(Some("https://example.com/other".into()));

    let store = sub.backing_store();
    assert!(store.is_changed(&StoreKey::new("notificationUrl").unwrap()));
    assert!(!store.is_changed(&StoreKey::new("resource").unwrap()));
    assert!(!store.is_changed(&StoreKey::new("id").unwrap()));
}

#[test]
fn test_writing_equal_value_stays_clean() {
    let mut sub = parsed_subscription();
    sub.set_change_type(Some("created,updated".into()));
    assert!(!sub.backing_store().is_dirty());
}

#[test]
fn test_initialization_completed_resets_flags() {
    let mut sub = Subscription::new();
    sub.set_resource(Some("me/events".into()));
    sub.backing_store_mut().set_initialization_completed(true);
    assert!(!sub.backing_store().is_dirty());
}

// ============================================================================
// 2. Changed-only output
// ============================================================================

#[test]
fn test_patch_body_contains_only_edits() {
    let mut sub = parsed_subscription();
    sub.set_expiration_date_time(Some(
        chrono::DateTime::parse_from_rfc3339("2030-03-01T00:00:00Z").unwrap(),
    ));
    sub.set_notification_url(None);

    assert_eq!(
        changed_only(&sub),
        json!({"expirationDateTime": "2030-03-01T00:00:00Z", "notificationUrl": null})
    );
}

#[test]
fn test_full_output_ignores_dirty_flags() {
    let sub = parsed_subscription();
    let full = json::to_json_value(&sub).unwrap();
    assert_eq!(full["id"], json!("sub-1"));
    assert_eq!(full["latestSupportedTlsVersion"], json!("v1_2"));
    assert_eq!(changed_only(&sub), json!({}));
}

#[test]
fn test_options_drive_changed_only() {
    let mut sub = parsed_subscription();
    sub.set_client_state(Some("secret".into()));
    let options = SerializationOptions { changed_only: true, ..Default::default() };
    let bytes = json::to_vec_with(&sub, &options).unwrap();
    let written: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(written, json!({"clientState": "secret"}));
}

#[test]
fn test_nested_edit_is_written_through_parent() {
    let body = json!({
        "emailAddress": {"address": "old@contoso.com", "name": "Old"}
    });
    let mut recipient: Recipient =
        json::parse_as(body.to_string().as_bytes(), Recipient::create_from_discriminator_value).unwrap();
    assert!(!recipient.backing_store().is_dirty());

    recipient
        .email_address_mut()
        .unwrap()
        .set_address(Some("new@contoso.com".into()));

    assert!(recipient.backing_store().is_dirty());
    assert_eq!(
        changed_only(&recipient),
        json!({"emailAddress": {"address": "new@contoso.com"}})
    );
}

#[test]
fn test_replacing_nested_model_writes_it_in_full() {
    let body = json!({
        "emailAddress": {"address": "old@contoso.com", "name": "Old"}
    });
    let mut recipient: Recipient =
        json::parse_as(body.to_string().as_bytes(), Recipient::create_from_discriminator_value).unwrap();
    let replacement: EmailAddress = json::parse_as(
        br#"{"address":"new@contoso.com","name":"New"}"#,
        EmailAddress::create_from_discriminator_value,
    )
    .unwrap();
    assert!(!replacement.backing_store().is_dirty());

    recipient.set_email_address(Some(replacement));
    assert_eq!(
        changed_only(&recipient),
        json!({"emailAddress": {"address": "new@contoso.com", "name": "New"}})
    );
}

#[test]
fn test_nested_collection_edit_writes_whole_collection() {
    let body = json!({
        "fromAddresses": [
            {"emailAddress": {"address": "a@contoso.com"}},
            {"emailAddress": {"address": "b@contoso.com"}}
        ],
        "isAutomaticReply": false
    });
    let mut predicates: MessageRulePredicates = json::parse_as(
        body.to_string().as_bytes(),
        MessageRulePredicates::create_from_discriminator_value,
    )
    .unwrap();
    assert!(!predicates.backing_store().is_dirty());

    let key = StoreKey::new("fromAddresses").unwrap();
    match predicates.backing_store_mut().get_mut(&key) {
        Some(Value::Collection(items)) => match &mut items[1] {
            Value::Object(obj) => obj
                .downcast_mut::<Recipient>()
                .unwrap()
                .email_address_mut()
                .unwrap()
                .set_address(Some("c@contoso.com".into())),
            other => panic!("expected a recipient, got {other:?}"),
        },
        other => panic!("expected a collection, got {other:?}"),
    }

    assert!(predicates.backing_store().is_changed(&key));
    assert_eq!(
        changed_only(&predicates),
        json!({"fromAddresses": [
            {"emailAddress": {"address": "a@contoso.com"}},
            {"emailAddress": {"address": "c@contoso.com"}}
        ]})
    );
}

// ============================================================================
// 3. Change callbacks
// ============================================================================

#[test]
fn test_subscribe_and_unsubscribe() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut sub = Subscription::new();

    let counter = Arc::clone(&calls);
    let id = sub.backing_store_mut().subscribe(Box::new(move |key, _previous, _current| {
        assert_eq!(key.as_str(), "resource");
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    sub.set_resource(Some("me/events".into()));
    sub.set_resource(Some("me/events".into()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    sub.backing_store_mut().unsubscribe(&id).unwrap();
    sub.set_resource(Some("me/messages".into()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert!(sub.backing_store_mut().unsubscribe(&id).is_err());
}

#[test]
fn test_callback_sees_previous_value() {
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let mut sub = parsed_subscription();

    let log = Arc::clone(&seen);
    sub.backing_store_mut()
        .subscribe_with_id("audit", Box::new(move |key, previous, current| {
            log.lock().push((
                key.as_str().to_owned(),
                previous.and_then(Value::as_str).map(str::to_owned),
                current.as_str().map(str::to_owned),
            ));
        }))
        .unwrap();

    sub.set_resource(Some("me/events".into()));
    assert_eq!(
        *seen.lock(),
        vec![(
            "resource".to_owned(),
            Some("me/mailFolders('Inbox')/messages".to_owned()),
            Some("me/events".to_owned()),
        )]
    );
}

#[test]
fn test_clone_drops_subscribers() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut sub = Subscription::new();
    let counter = Arc::clone(&calls);
    sub.backing_store_mut().subscribe(Box::new(move |_, _, _| {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let mut copy = sub.clone();
    copy.set_resource(Some("me/events".into()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(sub.resource(), None);
}

#[test]
fn test_blank_subscription_id_rejected() {
    let mut sub = Subscription::new();
    let result = sub.backing_store_mut().subscribe_with_id("  ", Box::new(|_, _, _| {}));
    assert!(result.is_err());
}
