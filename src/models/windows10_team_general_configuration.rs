use chrono::NaiveTime;

use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, ModelSchema, Parsable, ParseNode, PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{DEVICE_CONFIGURATION_SCHEMA, DeviceConfigurationModel, EntityModel};

const AZURE_OPERATIONAL_INSIGHTS_BLOCK_TELEMETRY: StoreKey = StoreKey::from_static("azureOperationalInsightsBlockTelemetry");
const AZURE_OPERATIONAL_INSIGHTS_WORKSPACE_ID: StoreKey = StoreKey::from_static("azureOperationalInsightsWorkspaceId");
const CONNECT_APP_BLOCK_AUTO_LAUNCH: StoreKey = StoreKey::from_static("connectAppBlockAutoLaunch");
const MAINTENANCE_WINDOW_BLOCKED: StoreKey = StoreKey::from_static("maintenanceWindowBlocked");
const MAINTENANCE_WINDOW_DURATION_IN_HOURS: StoreKey = StoreKey::from_static("maintenanceWindowDurationInHours");
const MAINTENANCE_WINDOW_START_TIME: StoreKey = StoreKey::from_static("maintenanceWindowStartTime");
const MIRACAST_BLOCKED: StoreKey = StoreKey::from_static("miracastBlocked");
const SETTINGS_BLOCK_MY_MEETINGS_AND_FILES: StoreKey = StoreKey::from_static("settingsBlockMyMeetingsAndFiles");
const WELCOME_SCREEN_BACKGROUND_IMAGE_URL: StoreKey = StoreKey::from_static("welcomeScreenBackgroundImageUrl");

const BOOL: FieldKind = FieldKind::Primitive(PrimitiveKind::Bool);
const STRING: FieldKind = FieldKind::Primitive(PrimitiveKind::String);

pub static WINDOWS10_TEAM_GENERAL_CONFIGURATION_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.windows10TeamGeneralConfiguration",
    parent: Some(&DEVICE_CONFIGURATION_SCHEMA),
    fields: &[
        Field::new("azureOperationalInsightsBlockTelemetry", AZURE_OPERATIONAL_INSIGHTS_BLOCK_TELEMETRY, BOOL),
        Field::new("azureOperationalInsightsWorkspaceId", AZURE_OPERATIONAL_INSIGHTS_WORKSPACE_ID, STRING),
        Field::new("connectAppBlockAutoLaunch", CONNECT_APP_BLOCK_AUTO_LAUNCH, BOOL),
        Field::new("maintenanceWindowBlocked", MAINTENANCE_WINDOW_BLOCKED, BOOL),
        Field::new("maintenanceWindowDurationInHours", MAINTENANCE_WINDOW_DURATION_IN_HOURS, FieldKind::Primitive(PrimitiveKind::Int32)),
        Field::new("maintenanceWindowStartTime", MAINTENANCE_WINDOW_START_TIME, FieldKind::Primitive(PrimitiveKind::Time)),
        Field::new("miracastBlocked", MIRACAST_BLOCKED, BOOL),
        Field::new("settingsBlockMyMeetingsAndFiles", SETTINGS_BLOCK_MY_MEETINGS_AND_FILES, BOOL),
        Field::new("welcomeScreenBackgroundImageUrl", WELCOME_SCREEN_BACKGROUND_IMAGE_URL, STRING),
    ],
};

/// General settings for Surface Hub (Windows 10 Team) devices.
#[derive(Debug, Clone)]
pub struct Windows10TeamGeneralConfiguration {
    store: Box<dyn BackingStore>,
}

graph_model!(Windows10TeamGeneralConfiguration, WINDOWS10_TEAM_GENERAL_CONFIGURATION_SCHEMA);

impl EntityModel for Windows10TeamGeneralConfiguration {}
impl DeviceConfigurationModel for Windows10TeamGeneralConfiguration {}

impl Windows10TeamGeneralConfiguration {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model.set_odata_type(Some("#microsoft.graph.windows10TeamGeneralConfiguration".into()));
        model
    }

    pub fn boxed() -> Box<dyn Parsable> {
        Box::new(Self::new())
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Self::boxed())
    }

    pub fn azure_operational_insights_block_telemetry(&self) -> Option<bool> {
        self.store.get_value(&AZURE_OPERATIONAL_INSIGHTS_BLOCK_TELEMETRY)
    }

    pub fn set_azure_operational_insights_block_telemetry(&mut self, value: Option<bool>) {
        self.store.set(AZURE_OPERATIONAL_INSIGHTS_BLOCK_TELEMETRY, value.into());
    }

    pub fn azure_operational_insights_workspace_id(&self) -> Option<&str> {
        self.store.get_str(&AZURE_OPERATIONAL_INSIGHTS_WORKSPACE_ID)
    }

    pub fn set_azure_operational_insights_workspace_id(&mut self, value: Option<String>) {
        self.store.set(AZURE_OPERATIONAL_INSIGHTS_WORKSPACE_ID, value.into());
    }

    pub fn connect_app_block_auto_launch(&self) -> Option<bool> {
        self.store.get_value(&CONNECT_APP_BLOCK_AUTO_LAUNCH)
    }

    pub fn set_connect_app_block_auto_launch(&mut self, value: Option<bool>) {
        self.store.set(CONNECT_APP_BLOCK_AUTO_LAUNCH, value.into());
    }

    pub fn maintenance_window_blocked(&self) -> Option<bool> {
        self.store.get_value(&MAINTENANCE_WINDOW_BLOCKED)
    }

    pub fn set_maintenance_window_blocked(&mut self, value: Option<bool>) {
        self.store.set(MAINTENANCE_WINDOW_BLOCKED, value.into());
    }

    /// Valid values 0 to 5.
    pub fn maintenance_window_duration_in_hours(&self) -> Option<i32> {
        self.store.get_value(&MAINTENANCE_WINDOW_DURATION_IN_HOURS)
    }

    pub fn set_maintenance_window_duration_in_hours(&mut self, value: Option<i32>) {
        self.store.set(MAINTENANCE_WINDOW_DURATION_IN_HOURS, value.into());
    }

    pub fn maintenance_window_start_time(&self) -> Option<NaiveTime> {
        self.store.get_value(&MAINTENANCE_WINDOW_START_TIME)
    }

    pub fn set_maintenance_window_start_time(&mut self, value: Option<NaiveTime>) {
        self.store.set(MAINTENANCE_WINDOW_START_TIME, value.into());
    }

    pub fn miracast_blocked(&self) -> Option<bool> {
        self.store.get_value(&MIRACAST_BLOCKED)
    }

    pub fn set_miracast_blocked(&mut self, value: Option<bool>) {
        self.store.set(MIRACAST_BLOCKED, value.into());
    }

    pub fn settings_block_my_meetings_and_files(&self) -> Option<bool> {
        self.store.get_value(&SETTINGS_BLOCK_MY_MEETINGS_AND_FILES)
    }

    pub fn set_settings_block_my_meetings_and_files(&mut self, value: Option<bool>) {
        self.store.set(SETTINGS_BLOCK_MY_MEETINGS_AND_FILES, value.into());
    }

    /// Must be a https URL to a 1920x1080 PNG.
    pub fn welcome_screen_background_image_url(&self) -> Option<&str> {
        self.store.get_str(&WELCOME_SCREEN_BACKGROUND_IMAGE_URL)
    }

    pub fn set_welcome_screen_background_image_url(&mut self, value: Option<String>) {
        self.store.set(WELCOME_SCREEN_BACKGROUND_IMAGE_URL, value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_time_of_day_without_seconds() {
        let body = br#"{"maintenanceWindowStartTime":"22:30","maintenanceWindowDurationInHours":4}"#;
        let config: Windows10TeamGeneralConfiguration =
            json::parse_as(body, Windows10TeamGeneralConfiguration::create_from_discriminator_value).unwrap();
        assert_eq!(config.maintenance_window_start_time(), NaiveTime::from_hms_opt(22, 30, 0));
        assert_eq!(config.maintenance_window_duration_in_hours(), Some(4));
    }

    #[test]
    fn test_time_written_with_seconds() {
        let mut config = Windows10TeamGeneralConfiguration::new();
        config.set_maintenance_window_start_time(NaiveTime::from_hms_opt(6, 0, 0));
        let out = json::to_json_value(&config).unwrap();
        assert_eq!(out["maintenanceWindowStartTime"], serde_json::json!("06:00:00"));
    }
}
