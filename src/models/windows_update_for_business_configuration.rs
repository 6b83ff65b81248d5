//! `windowsUpdateForBusinessConfiguration`: Windows Update for Business
//! ring settings.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, GraphEnum, ModelSchema, Parsable, ParseNode,
    PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{
    AutomaticUpdateMode, DEVICE_CONFIGURATION_SCHEMA, DeviceConfigurationModel, EntityModel,
    WindowsUpdateForBusinessUpdateWeeks,
};

const ALLOW_WINDOWS11_UPGRADE: StoreKey = StoreKey::from_static("allowWindows11Upgrade");
const AUTOMATIC_UPDATE_MODE: StoreKey = StoreKey::from_static("automaticUpdateMode");
const DEADLINE_FOR_FEATURE_UPDATES_IN_DAYS: StoreKey = StoreKey::from_static("deadlineForFeatureUpdatesInDays");
const DEADLINE_FOR_QUALITY_UPDATES_IN_DAYS: StoreKey = StoreKey::from_static("deadlineForQualityUpdatesInDays");
const DRIVERS_EXCLUDED: StoreKey = StoreKey::from_static("driversExcluded");
const FEATURE_UPDATES_DEFERRAL_PERIOD_IN_DAYS: StoreKey = StoreKey::from_static("featureUpdatesDeferralPeriodInDays");
const FEATURE_UPDATES_PAUSED: StoreKey = StoreKey::from_static("featureUpdatesPaused");
const FEATURE_UPDATES_PAUSE_EXPIRY_DATE_TIME: StoreKey = StoreKey::from_static("featureUpdatesPauseExpiryDateTime");
const FEATURE_UPDATES_PAUSE_START_DATE: StoreKey = StoreKey::from_static("featureUpdatesPauseStartDate");
const QUALITY_UPDATES_PAUSED: StoreKey = StoreKey::from_static("qualityUpdatesPaused");
const QUALITY_UPDATES_PAUSE_START_DATE: StoreKey = StoreKey::from_static("qualityUpdatesPauseStartDate");
const UPDATE_WEEKS: StoreKey = StoreKey::from_static("updateWeeks");

const BOOL: FieldKind = FieldKind::Primitive(PrimitiveKind::Bool);
const INT32: FieldKind = FieldKind::Primitive(PrimitiveKind::Int32);
const DATE: FieldKind = FieldKind::Primitive(PrimitiveKind::Date);

pub static WINDOWS_UPDATE_FOR_BUSINESS_CONFIGURATION_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.windowsUpdateForBusinessConfiguration",
    parent: Some(&DEVICE_CONFIGURATION_SCHEMA),
    fields: &[
        Field::new("allowWindows11Upgrade", ALLOW_WINDOWS11_UPGRADE, BOOL),
        Field::new("automaticUpdateMode", AUTOMATIC_UPDATE_MODE, FieldKind::Enum(AutomaticUpdateMode::INFO)),
        Field::new("deadlineForFeatureUpdatesInDays", DEADLINE_FOR_FEATURE_UPDATES_IN_DAYS, INT32),
        Field::new("deadlineForQualityUpdatesInDays", DEADLINE_FOR_QUALITY_UPDATES_IN_DAYS, INT32),
        Field::new("driversExcluded", DRIVERS_EXCLUDED, BOOL),
        Field::new("featureUpdatesDeferralPeriodInDays", FEATURE_UPDATES_DEFERRAL_PERIOD_IN_DAYS, INT32),
        Field::new("featureUpdatesPaused", FEATURE_UPDATES_PAUSED, BOOL),
        Field::new("featureUpdatesPauseExpiryDateTime", FEATURE_UPDATES_PAUSE_EXPIRY_DATE_TIME, FieldKind::Primitive(PrimitiveKind::DateTime)),
        Field::new("featureUpdatesPauseStartDate", FEATURE_UPDATES_PAUSE_START_DATE, DATE),
        Field::new("qualityUpdatesPaused", QUALITY_UPDATES_PAUSED, BOOL),
        Field::new("qualityUpdatesPauseStartDate", QUALITY_UPDATES_PAUSE_START_DATE, DATE),
        Field::new("updateWeeks", UPDATE_WEEKS, FieldKind::Enum(WindowsUpdateForBusinessUpdateWeeks::INFO)),
    ],
};

/// Windows Update for Business configuration.
#[derive(Debug, Clone)]
pub struct WindowsUpdateForBusinessConfiguration {
    store: Box<dyn BackingStore>,
}

graph_model!(WindowsUpdateForBusinessConfiguration, WINDOWS_UPDATE_FOR_BUSINESS_CONFIGURATION_SCHEMA);

impl EntityModel for WindowsUpdateForBusinessConfiguration {}
impl DeviceConfigurationModel for WindowsUpdateForBusinessConfiguration {}

impl WindowsUpdateForBusinessConfiguration {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model.set_odata_type(Some("#microsoft.graph.windowsUpdateForBusinessConfiguration".into()));
        model
    }

    pub fn boxed() -> Box<dyn Parsable> {
        Box::new(Self::new())
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Self::boxed())
    }

    pub fn allow_windows11_upgrade(&self) -> Option<bool> {
        self.store.get_value(&ALLOW_WINDOWS11_UPGRADE)
    }

    pub fn set_allow_windows11_upgrade(&mut self, value: Option<bool>) {
        self.store.set(ALLOW_WINDOWS11_UPGRADE, value.into());
    }

    pub fn automatic_update_mode(&self) -> Option<AutomaticUpdateMode> {
        self.store.get_enum(&AUTOMATIC_UPDATE_MODE)
    }

    pub fn set_automatic_update_mode(&mut self, value: Option<AutomaticUpdateMode>) {
        self.store.set(AUTOMATIC_UPDATE_MODE, value.into());
    }

    /// Days before feature updates are installed automatically. 0 to 30.
    pub fn deadline_for_feature_updates_in_days(&self) -> Option<i32> {
        self.store.get_value(&DEADLINE_FOR_FEATURE_UPDATES_IN_DAYS)
    }

    pub fn set_deadline_for_feature_updates_in_days(&mut self, value: Option<i32>) {
        self.store.set(DEADLINE_FOR_FEATURE_UPDATES_IN_DAYS, value.into());
    }

    pub fn deadline_for_quality_updates_in_days(&self) -> Option<i32> {
        self.store.get_value(&DEADLINE_FOR_QUALITY_UPDATES_IN_DAYS)
    }

    pub fn set_deadline_for_quality_updates_in_days(&mut self, value: Option<i32>) {
        self.store.set(DEADLINE_FOR_QUALITY_UPDATES_IN_DAYS, value.into());
    }

    pub fn drivers_excluded(&self) -> Option<bool> {
        self.store.get_value(&DRIVERS_EXCLUDED)
    }

    pub fn set_drivers_excluded(&mut self, value: Option<bool>) {
        self.store.set(DRIVERS_EXCLUDED, value.into());
    }

    pub fn feature_updates_deferral_period_in_days(&self) -> Option<i32> {
        self.store.get_value(&FEATURE_UPDATES_DEFERRAL_PERIOD_IN_DAYS)
    }

    pub fn set_feature_updates_deferral_period_in_days(&mut self, value: Option<i32>) {
        self.store.set(FEATURE_UPDATES_DEFERRAL_PERIOD_IN_DAYS, value.into());
    }

    pub fn feature_updates_paused(&self) -> Option<bool> {
        self.store.get_value(&FEATURE_UPDATES_PAUSED)
    }

    pub fn set_feature_updates_paused(&mut self, value: Option<bool>) {
        self.store.set(FEATURE_UPDATES_PAUSED, value.into());
    }

    /// When the feature update pause expires. Read-only.
    pub fn feature_updates_pause_expiry_date_time(&self) -> Option<DateTime<FixedOffset>> {
        self.store.get_value(&FEATURE_UPDATES_PAUSE_EXPIRY_DATE_TIME)
    }

    pub fn set_feature_updates_pause_expiry_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.store.set(FEATURE_UPDATES_PAUSE_EXPIRY_DATE_TIME, value.into());
    }

    pub fn feature_updates_pause_start_date(&self) -> Option<NaiveDate> {
        self.store.get_value(&FEATURE_UPDATES_PAUSE_START_DATE)
    }

    pub fn set_feature_updates_pause_start_date(&mut self, value: Option<NaiveDate>) {
        self.store.set(FEATURE_UPDATES_PAUSE_START_DATE, value.into());
    }

    pub fn quality_updates_paused(&self) -> Option<bool> {
        self.store.get_value(&QUALITY_UPDATES_PAUSED)
    }

    pub fn set_quality_updates_paused(&mut self, value: Option<bool>) {
        self.store.set(QUALITY_UPDATES_PAUSED, value.into());
    }

    pub fn quality_updates_pause_start_date(&self) -> Option<NaiveDate> {
        self.store.get_value(&QUALITY_UPDATES_PAUSE_START_DATE)
    }

    pub fn set_quality_updates_pause_start_date(&mut self, value: Option<NaiveDate>) {
        self.store.set(QUALITY_UPDATES_PAUSE_START_DATE, value.into());
    }

    /// Weeks of the month updates may install in.
    pub fn update_weeks(&self) -> Option<WindowsUpdateForBusinessUpdateWeeks> {
        self.store.get_enum(&UPDATE_WEEKS)
    }

    pub fn set_update_weeks(&mut self, value: Option<WindowsUpdateForBusinessUpdateWeeks>) {
        self.store.set(UPDATE_WEEKS, value.into());
    }
}
