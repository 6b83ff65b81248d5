//! `bookingService`: a service offered by a Bookings business.

use chrono::{DateTime, FixedOffset};

use crate::model::{IsoDuration, PropertyMap};
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, GraphEnum, ModelSchema, Parsable, ParseNode,
    PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{BookingPriceType, ENTITY_SCHEMA, EntityModel};

const ADDITIONAL_INFORMATION: StoreKey = StoreKey::from_static("additionalInformation");
const CREATED_DATE_TIME: StoreKey = StoreKey::from_static("createdDateTime");
const DEFAULT_DURATION: StoreKey = StoreKey::from_static("defaultDuration");
const DEFAULT_PRICE: StoreKey = StoreKey::from_static("defaultPrice");
const DEFAULT_PRICE_TYPE: StoreKey = StoreKey::from_static("defaultPriceType");
const DESCRIPTION: StoreKey = StoreKey::from_static("description");
const DISPLAY_NAME: StoreKey = StoreKey::from_static("displayName");
const IS_LOCATION_ONLINE: StoreKey = StoreKey::from_static("isLocationOnline");
const LANGUAGE_TAG: StoreKey = StoreKey::from_static("languageTag");
const LAST_UPDATED_DATE_TIME: StoreKey = StoreKey::from_static("lastUpdatedDateTime");
const MAXIMUM_ATTENDEES_COUNT: StoreKey = StoreKey::from_static("maximumAttendeesCount");
const NOTES: StoreKey = StoreKey::from_static("notes");
const POST_BUFFER: StoreKey = StoreKey::from_static("postBuffer");
const PRE_BUFFER: StoreKey = StoreKey::from_static("preBuffer");
const SMS_NOTIFICATIONS_ENABLED: StoreKey = StoreKey::from_static("smsNotificationsEnabled");
const STAFF_MEMBER_IDS: StoreKey = StoreKey::from_static("staffMemberIds");
const WEB_URL: StoreKey = StoreKey::from_static("webUrl");

const STRING: FieldKind = FieldKind::Primitive(PrimitiveKind::String);
const DATE_TIME: FieldKind = FieldKind::Primitive(PrimitiveKind::DateTime);
const DURATION: FieldKind = FieldKind::Primitive(PrimitiveKind::Duration);
const BOOL: FieldKind = FieldKind::Primitive(PrimitiveKind::Bool);

pub static BOOKING_SERVICE_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.bookingService",
    parent: Some(&ENTITY_SCHEMA),
    fields: &[
        Field::new("additionalInformation", ADDITIONAL_INFORMATION, STRING),
        Field::new("createdDateTime", CREATED_DATE_TIME, DATE_TIME),
        Field::new("defaultDuration", DEFAULT_DURATION, DURATION),
        Field::new("defaultPrice", DEFAULT_PRICE, FieldKind::Primitive(PrimitiveKind::Float64)),
        Field::new("defaultPriceType", DEFAULT_PRICE_TYPE, FieldKind::Enum(BookingPriceType::INFO)),
        Field::new("description", DESCRIPTION, STRING),
        Field::new("displayName", DISPLAY_NAME, STRING),
        Field::new("isLocationOnline", IS_LOCATION_ONLINE, BOOL),
        Field::new("languageTag", LANGUAGE_TAG, STRING),
        Field::new("lastUpdatedDateTime", LAST_UPDATED_DATE_TIME, DATE_TIME),
        Field::new("maximumAttendeesCount", MAXIMUM_ATTENDEES_COUNT, FieldKind::Primitive(PrimitiveKind::Int32)),
        Field::new("notes", NOTES, STRING),
        Field::new("postBuffer", POST_BUFFER, DURATION),
        Field::new("preBuffer", PRE_BUFFER, DURATION),
        Field::new("smsNotificationsEnabled", SMS_NOTIFICATIONS_ENABLED, BOOL),
        Field::new("staffMemberIds", STAFF_MEMBER_IDS, FieldKind::PrimitiveCollection(PrimitiveKind::String)),
        Field::new("webUrl", WEB_URL, STRING),
    ],
};

/// Represents a particular service offered by a booking business.
#[derive(Debug, Clone)]
pub struct BookingService {
    store: Box<dyn BackingStore>,
}

graph_model!(BookingService, BOOKING_SERVICE_SCHEMA);

impl EntityModel for BookingService {}

impl BookingService {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model
    }

    pub fn boxed() -> Box<dyn Parsable> {
        Box::new(Self::new())
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Self::boxed())
    }

    pub fn additional_information(&self) -> Option<&str> {
        self.store.get_str(&ADDITIONAL_INFORMATION)
    }

    pub fn set_additional_information(&mut self, value: Option<String>) {
        self.store.set(ADDITIONAL_INFORMATION, value.into());
    }

    pub fn created_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.store.get_value(&CREATED_DATE_TIME)
    }

    pub fn set_created_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.store.set(CREATED_DATE_TIME, value.into());
    }

    /// Default length of the service.
    pub fn default_duration(&self) -> Option<IsoDuration> {
        self.store.get_value(&DEFAULT_DURATION)
    }

    pub fn set_default_duration(&mut self, value: Option<IsoDuration>) {
        self.store.set(DEFAULT_DURATION, value.into());
    }

    pub fn default_price(&self) -> Option<f64> {
        self.store.get_value(&DEFAULT_PRICE)
    }

    pub fn set_default_price(&mut self, value: Option<f64>) {
        self.store.set(DEFAULT_PRICE, value.into());
    }

    pub fn default_price_type(&self) -> Option<BookingPriceType> {
        self.store.get_enum(&DEFAULT_PRICE_TYPE)
    }

    pub fn set_default_price_type(&mut self, value: Option<BookingPriceType>) {
        self.store.set(DEFAULT_PRICE_TYPE, value.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.store.get_str(&DESCRIPTION)
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.store.set(DESCRIPTION, value.into());
    }

    pub fn display_name(&self) -> Option<&str> {
        self.store.get_str(&DISPLAY_NAME)
    }

    pub fn set_display_name(&mut self, value: Option<String>) {
        self.store.set(DISPLAY_NAME, value.into());
    }

    pub fn is_location_online(&self) -> Option<bool> {
        self.store.get_value(&IS_LOCATION_ONLINE)
    }

    pub fn set_is_location_online(&mut self, value: Option<bool>) {
        self.store.set(IS_LOCATION_ONLINE, value.into());
    }

    pub fn language_tag(&self) -> Option<&str> {
        self.store.get_str(&LANGUAGE_TAG)
    }

    pub fn set_language_tag(&mut self, value: Option<String>) {
        self.store.set(LANGUAGE_TAG, value.into());
    }

    pub fn last_updated_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.store.get_value(&LAST_UPDATED_DATE_TIME)
    }

    pub fn set_last_updated_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.store.set(LAST_UPDATED_DATE_TIME, value.into());
    }

    pub fn maximum_attendees_count(&self) -> Option<i32> {
        self.store.get_value(&MAXIMUM_ATTENDEES_COUNT)
    }

    pub fn set_maximum_attendees_count(&mut self, value: Option<i32>) {
        self.store.set(MAXIMUM_ATTENDEES_COUNT, value.into());
    }

    pub fn notes(&self) -> Option<&str> {
        self.store.get_str(&NOTES)
    }

    pub fn set_notes(&mut self, value: Option<String>) {
        self.store.set(NOTES, value.into());
    }

    /// Time to buffer after an appointment ends.
    pub fn post_buffer(&self) -> Option<IsoDuration> {
        self.store.get_value(&POST_BUFFER)
    }

    pub fn set_post_buffer(&mut self, value: Option<IsoDuration>) {
        self.store.set(POST_BUFFER, value.into());
    }

    /// Time to buffer before an appointment starts.
    pub fn pre_buffer(&self) -> Option<IsoDuration> {
        self.store.get_value(&PRE_BUFFER)
    }

    pub fn set_pre_buffer(&mut self, value: Option<IsoDuration>) {
        self.store.set(PRE_BUFFER, value.into());
    }

    pub fn sms_notifications_enabled(&self) -> Option<bool> {
        self.store.get_value(&SMS_NOTIFICATIONS_ENABLED)
    }

    pub fn set_sms_notifications_enabled(&mut self, value: Option<bool>) {
        self.store.set(SMS_NOTIFICATIONS_ENABLED, value.into());
    }

    /// Staff members who provide this service.
    pub fn staff_member_ids(&self) -> Option<Vec<String>> {
        self.store.get_collection(&STAFF_MEMBER_IDS)
    }

    pub fn set_staff_member_ids(&mut self, value: Option<Vec<String>>) {
        self.store.set(STAFF_MEMBER_IDS, value.into());
    }

    pub fn web_url(&self) -> Option<&str> {
        self.store.get_str(&WEB_URL)
    }

    pub fn set_web_url(&mut self, value: Option<String>) {
        self.store.set(WEB_URL, value.into());
    }
}
