//! `messageRulePredicates`: conditions and exceptions of an inbox rule.

use crate::model::{PropertyMap, Value};
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, GraphEnum, ModelSchema, Parsable, ParseNode,
    PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{Importance, MessageActionFlag, Recipient, Sensitivity, SizeRange};

const BODY_CONTAINS: StoreKey = StoreKey::from_static("bodyContains");
const BODY_OR_SUBJECT_CONTAINS: StoreKey = StoreKey::from_static("bodyOrSubjectContains");
const CATEGORIES: StoreKey = StoreKey::from_static("categories");
const FROM_ADDRESSES: StoreKey = StoreKey::from_static("fromAddresses");
const HAS_ATTACHMENTS: StoreKey = StoreKey::from_static("hasAttachments");
const HEADER_CONTAINS: StoreKey = StoreKey::from_static("headerContains");
const IMPORTANCE: StoreKey = StoreKey::from_static("importance");
const IS_APPROVAL_REQUEST: StoreKey = StoreKey::from_static("isApprovalRequest");
const IS_AUTOMATIC_FORWARD: StoreKey = StoreKey::from_static("isAutomaticForward");
const IS_AUTOMATIC_REPLY: StoreKey = StoreKey::from_static("isAutomaticReply");
const IS_ENCRYPTED: StoreKey = StoreKey::from_static("isEncrypted");
const IS_MEETING_REQUEST: StoreKey = StoreKey::from_static("isMeetingRequest");
const IS_MEETING_RESPONSE: StoreKey = StoreKey::from_static("isMeetingResponse");
const IS_NON_DELIVERY_REPORT: StoreKey = StoreKey::from_static("isNonDeliveryReport");
const IS_PERMISSION_CONTROLLED: StoreKey = StoreKey::from_static("isPermissionControlled");
const IS_READ_RECEIPT: StoreKey = StoreKey::from_static("isReadReceipt");
const IS_SIGNED: StoreKey = StoreKey::from_static("isSigned");
const IS_VOICEMAIL: StoreKey = StoreKey::from_static("isVoicemail");
const MESSAGE_ACTION_FLAG: StoreKey = StoreKey::from_static("messageActionFlag");
const NOT_SENT_TO_ME: StoreKey = StoreKey::from_static("notSentToMe");
const ODATA_TYPE: StoreKey = StoreKey::from_static("odataType");
const RECIPIENT_CONTAINS: StoreKey = StoreKey::from_static("recipientContains");
const SENDER_CONTAINS: StoreKey = StoreKey::from_static("senderContains");
const SENSITIVITY: StoreKey = StoreKey::from_static("sensitivity");
const SENT_CC_ME: StoreKey = StoreKey::from_static("sentCcMe");
const SENT_ONLY_TO_ME: StoreKey = StoreKey::from_static("sentOnlyToMe");
const SENT_TO_ADDRESSES: StoreKey = StoreKey::from_static("sentToAddresses");
const SENT_TO_ME: StoreKey = StoreKey::from_static("sentToMe");
const SENT_TO_OR_CC_ME: StoreKey = StoreKey::from_static("sentToOrCcMe");
const SUBJECT_CONTAINS: StoreKey = StoreKey::from_static("subjectContains");
const WITHIN_SIZE_RANGE: StoreKey = StoreKey::from_static("withinSizeRange");

const BOOL: FieldKind = FieldKind::Primitive(PrimitiveKind::Bool);
const STRINGS: FieldKind = FieldKind::PrimitiveCollection(PrimitiveKind::String);
const RECIPIENTS: FieldKind = FieldKind::ObjectCollection(Recipient::create_from_discriminator_value);

pub static MESSAGE_RULE_PREDICATES_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.messageRulePredicates",
    parent: None,
    fields: &[
        Field::new("bodyContains", BODY_CONTAINS, STRINGS),
        Field::new("bodyOrSubjectContains", BODY_OR_SUBJECT_CONTAINS, STRINGS),
        Field::new("categories", CATEGORIES, STRINGS),
        Field::new("fromAddresses", FROM_ADDRESSES, RECIPIENTS),
        Field::new("hasAttachments", HAS_ATTACHMENTS, BOOL),
        Field::new("headerContains", HEADER_CONTAINS, STRINGS),
        Field::new("importance", IMPORTANCE, FieldKind::Enum(Importance::INFO)),
        Field::new("isApprovalRequest", IS_APPROVAL_REQUEST, BOOL),
        Field::new("isAutomaticForward", IS_AUTOMATIC_FORWARD, BOOL),
        Field::new("isAutomaticReply", IS_AUTOMATIC_REPLY, BOOL),
        Field::new("isEncrypted", IS_ENCRYPTED, BOOL),
        Field::new("isMeetingRequest", IS_MEETING_REQUEST, BOOL),
        Field::new("isMeetingResponse", IS_MEETING_RESPONSE, BOOL),
        Field::new("isNonDeliveryReport", IS_NON_DELIVERY_REPORT, BOOL),
        Field::new("isPermissionControlled", IS_PERMISSION_CONTROLLED, BOOL),
        Field::new("isReadReceipt", IS_READ_RECEIPT, BOOL),
        Field::new("isSigned", IS_SIGNED, BOOL),
        Field::new("isVoicemail", IS_VOICEMAIL, BOOL),
        Field::new("messageActionFlag", MESSAGE_ACTION_FLAG, FieldKind::Enum(MessageActionFlag::INFO)),
        Field::new("notSentToMe", NOT_SENT_TO_ME, BOOL),
        Field::new("@odata.type", ODATA_TYPE, FieldKind::Primitive(PrimitiveKind::String)),
        Field::new("recipientContains", RECIPIENT_CONTAINS, STRINGS),
        Field::new("senderContains", SENDER_CONTAINS, STRINGS),
        Field::new("sensitivity", SENSITIVITY, FieldKind::Enum(Sensitivity::INFO)),
        Field::new("sentCcMe", SENT_CC_ME, BOOL),
        Field::new("sentOnlyToMe", SENT_ONLY_TO_ME, BOOL),
        Field::new("sentToAddresses", SENT_TO_ADDRESSES, RECIPIENTS),
        Field::new("sentToMe", SENT_TO_ME, BOOL),
        Field::new("sentToOrCcMe", SENT_TO_OR_CC_ME, BOOL),
        Field::new("subjectContains", SUBJECT_CONTAINS, STRINGS),
        Field::new("withinSizeRange", WITHIN_SIZE_RANGE, FieldKind::Object(SizeRange::create_from_discriminator_value)),
    ],
};

#[derive(Debug, Clone)]
pub struct MessageRulePredicates {
    store: Box<dyn BackingStore>,
}

graph_model!(MessageRulePredicates, MESSAGE_RULE_PREDICATES_SCHEMA);

macro_rules! predicate_accessors {
    (bool: $($get:ident, $set:ident => $key:ident;)+) => {
        $(
            pub fn $get(&self) -> Option<bool> {
                self.store.get_value(&$key)
            }

            pub fn $set(&mut self, value: Option<bool>) {
                self.store.set($key, value.into());
            }
        )+
    };
    (strings: $($get:ident, $set:ident => $key:ident;)+) => {
        $(
            pub fn $get(&self) -> Option<Vec<String>> {
                self.store.get_collection(&$key)
            }

            pub fn $set(&mut self, value: Option<Vec<String>>) {
                self.store.set($key, value.into());
            }
        )+
    };
}

impl MessageRulePredicates {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Box::new(Self::new()))
    }

    predicate_accessors! { strings:
        body_contains, set_body_contains => BODY_CONTAINS;
        body_or_subject_contains, set_body_or_subject_contains => BODY_OR_SUBJECT_CONTAINS;
        categories, set_categories => CATEGORIES;
        header_contains, set_header_contains => HEADER_CONTAINS;
        recipient_contains, set_recipient_contains => RECIPIENT_CONTAINS;
        sender_contains, set_sender_contains => SENDER_CONTAINS;
        subject_contains, set_subject_contains => SUBJECT_CONTAINS;
    }

    predicate_accessors! { bool:
        has_attachments, set_has_attachments => HAS_ATTACHMENTS;
        is_approval_request, set_is_approval_request => IS_APPROVAL_REQUEST;
        is_automatic_forward, set_is_automatic_forward => IS_AUTOMATIC_FORWARD;
        is_automatic_reply, set_is_automatic_reply => IS_AUTOMATIC_REPLY;
        is_encrypted, set_is_encrypted => IS_ENCRYPTED;
        is_meeting_request, set_is_meeting_request => IS_MEETING_REQUEST;
        is_meeting_response, set_is_meeting_response => IS_MEETING_RESPONSE;
        is_non_delivery_report, set_is_non_delivery_report => IS_NON_DELIVERY_REPORT;
        is_permission_controlled, set_is_permission_controlled => IS_PERMISSION_CONTROLLED;
        is_read_receipt, set_is_read_receipt => IS_READ_RECEIPT;
        is_signed, set_is_signed => IS_SIGNED;
        is_voicemail, set_is_voicemail => IS_VOICEMAIL;
        not_sent_to_me, set_not_sent_to_me => NOT_SENT_TO_ME;
        sent_cc_me, set_sent_cc_me => SENT_CC_ME;
        sent_only_to_me, set_sent_only_to_me => SENT_ONLY_TO_ME;
        sent_to_me, set_sent_to_me => SENT_TO_ME;
        sent_to_or_cc_me, set_sent_to_or_cc_me => SENT_TO_OR_CC_ME;
    }

    /// Senders the rule applies to.
    pub fn from_addresses(&self) -> Option<Vec<&Recipient>> {
        self.store.get_objects(&FROM_ADDRESSES)
    }

    pub fn set_from_addresses(&mut self, value: Option<Vec<Recipient>>) {
        self.store.set(FROM_ADDRESSES, value.map_or(Value::Null, Value::objects));
    }

    pub fn importance(&self) -> Option<Importance> {
        self.store.get_enum(&IMPORTANCE)
    }

    pub fn set_importance(&mut self, value: Option<Importance>) {
        self.store.set(IMPORTANCE, value.into());
    }

    pub fn message_action_flag(&self) -> Option<MessageActionFlag> {
        self.store.get_enum(&MESSAGE_ACTION_FLAG)
    }

    pub fn set_message_action_flag(&mut self, value: Option<MessageActionFlag>) {
        self.store.set(MESSAGE_ACTION_FLAG, value.into());
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.store.get_str(&ODATA_TYPE)
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.store.set(ODATA_TYPE, value.into());
    }

    pub fn sensitivity(&self) -> Option<Sensitivity> {
        self.store.get_enum(&SENSITIVITY)
    }

    pub fn set_sensitivity(&mut self, value: Option<Sensitivity>) {
        self.store.set(SENSITIVITY, value.into());
    }

    pub fn sent_to_addresses(&self) -> Option<Vec<&Recipient>> {
        self.store.get_objects(&SENT_TO_ADDRESSES)
    }

    pub fn set_sent_to_addresses(&mut self, value: Option<Vec<Recipient>>) {
        self.store.set(SENT_TO_ADDRESSES, value.map_or(Value::Null, Value::objects));
    }

    /// Size bounds, in kilobytes, a message must fall within.
    pub fn within_size_range(&self) -> Option<&SizeRange> {
        self.store.get_object(&WITHIN_SIZE_RANGE)
    }

    pub fn set_within_size_range(&mut self, value: Option<SizeRange>) {
        self.store.set(WITHIN_SIZE_RANGE, value.map_or(Value::Null, Value::object));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmailAddress;
    use crate::serialization::json;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_mixed_predicates() {
        let body = json!({
            "subjectContains": ["invoice", "receipt"],
            "fromAddresses": [
                {"emailAddress": {"address": "billing@contoso.com"}},
                null,
                {"emailAddress": {"address": "ar@contoso.com"}}
            ],
            "importance": "high",
            "sensitivity": "confidential",
            "withinSizeRange": {"minimumSize": 10, "maximumSize": 500},
            "isEncrypted": true,
        });
        let predicates: MessageRulePredicates = json::parse_as(
            body.to_string().as_bytes(),
            MessageRulePredicates::create_from_discriminator_value,
        )
        .unwrap();

        assert_eq!(
            predicates.subject_contains(),
            Some(vec!["invoice".to_owned(), "receipt".to_owned()])
        );
        let senders: Vec<_> = predicates
            .from_addresses()
            .unwrap()
            .into_iter()
            .filter_map(|r| r.email_address().and_then(EmailAddress::address))
            .collect();
        assert_eq!(senders, vec!["billing@contoso.com", "ar@contoso.com"]);
        assert_eq!(predicates.importance(), Some(Importance::High));
        assert_eq!(predicates.sensitivity(), Some(Sensitivity::Confidential));
        assert_eq!(predicates.within_size_range().and_then(SizeRange::maximum_size), Some(500));
        assert_eq!(predicates.is_encrypted(), Some(true));
        assert_eq!(predicates.is_signed(), None);
    }

    #[test]
    fn test_write_nested_collections() {
        let mut email = EmailAddress::new();
        email.set_address(Some("boss@contoso.com".into()));
        let mut recipient = Recipient::new();
        recipient.set_email_address(Some(email));

        let mut range = SizeRange::new();
        range.set_minimum_size(Some(1));

        let mut predicates = MessageRulePredicates::new();
        predicates.set_sent_to_addresses(Some(vec![recipient]));
        predicates.set_within_size_range(Some(range));
        predicates.set_message_action_flag(Some(MessageActionFlag::FollowUp));

        assert_eq!(
            json::to_json_value(&predicates).unwrap(),
            json!({
                "messageActionFlag": "followUp",
                "sentToAddresses": [{"emailAddress": {"address": "boss@contoso.com"}}],
                "withinSizeRange": {"minimumSize": 1},
            })
        );
    }
}
