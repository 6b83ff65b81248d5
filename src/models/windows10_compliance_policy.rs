//! `windows10CompliancePolicy`: compliance settings for Windows 10 devices.

use crate::model::PropertyMap;
use crate::serialization::{
    AdditionalDataHolder, Field, FieldKind, GraphEnum, ModelSchema, Parsable, ParseNode,
    PrimitiveKind,
};
use crate::store::{BackingStore, StoreKey, new_backing_store};
use crate::Result;
use super::{
    DEVICE_COMPLIANCE_POLICY_SCHEMA, DeviceCompliancePolicyModel, EntityModel,
    RequiredPasswordType,
};

const BIT_LOCKER_ENABLED: StoreKey = StoreKey::from_static("bitLockerEnabled");
const CODE_INTEGRITY_ENABLED: StoreKey = StoreKey::from_static("codeIntegrityEnabled");
const EARLY_LAUNCH_ANTI_MALWARE_DRIVER_ENABLED: StoreKey = StoreKey::from_static("earlyLaunchAntiMalwareDriverEnabled");
const MOBILE_OS_MAXIMUM_VERSION: StoreKey = StoreKey::from_static("mobileOsMaximumVersion");
const MOBILE_OS_MINIMUM_VERSION: StoreKey = StoreKey::from_static("mobileOsMinimumVersion");
const OS_MAXIMUM_VERSION: StoreKey = StoreKey::from_static("osMaximumVersion");
const OS_MINIMUM_VERSION: StoreKey = StoreKey::from_static("osMinimumVersion");
const PASSWORD_BLOCK_SIMPLE: StoreKey = StoreKey::from_static("passwordBlockSimple");
const PASSWORD_EXPIRATION_DAYS: StoreKey = StoreKey::from_static("passwordExpirationDays");
const PASSWORD_MINIMUM_CHARACTER_SET_COUNT: StoreKey = StoreKey::from_static("passwordMinimumCharacterSetCount");
const PASSWORD_MINIMUM_LENGTH: StoreKey = StoreKey::from_static("passwordMinimumLength");
const PASSWORD_MINUTES_OF_INACTIVITY_BEFORE_LOCK: StoreKey = StoreKey::from_static("passwordMinutesOfInactivityBeforeLock");
const PASSWORD_PREVIOUS_PASSWORD_BLOCK_COUNT: StoreKey = StoreKey::from_static("passwordPreviousPasswordBlockCount");
const PASSWORD_REQUIRED: StoreKey = StoreKey::from_static("passwordRequired");
const PASSWORD_REQUIRED_TO_UNLOCK_FROM_IDLE: StoreKey = StoreKey::from_static("passwordRequiredToUnlockFromIdle");
const PASSWORD_REQUIRED_TYPE: StoreKey = StoreKey::from_static("passwordRequiredType");
const REQUIRE_HEALTHY_DEVICE_REPORT: StoreKey = StoreKey::from_static("requireHealthyDeviceReport");
const SECURE_BOOT_ENABLED: StoreKey = StoreKey::from_static("secureBootEnabled");
const STORAGE_REQUIRE_ENCRYPTION: StoreKey = StoreKey::from_static("storageRequireEncryption");

const BOOL: FieldKind = FieldKind::Primitive(PrimitiveKind::Bool);
const INT32: FieldKind = FieldKind::Primitive(PrimitiveKind::Int32);
const STRING: FieldKind = FieldKind::Primitive(PrimitiveKind::String);

pub static WINDOWS10_COMPLIANCE_POLICY_SCHEMA: ModelSchema = ModelSchema {
    type_name: "#microsoft.graph.windows10CompliancePolicy",
    parent: Some(&DEVICE_COMPLIANCE_POLICY_SCHEMA),
    fields: &[
        Field::new("bitLockerEnabled", BIT_LOCKER_ENABLED, BOOL),
        Field::new("codeIntegrityEnabled", CODE_INTEGRITY_ENABLED, BOOL),
        Field::new("earlyLaunchAntiMalwareDriverEnabled", EARLY_LAUNCH_ANTI_MALWARE_DRIVER_ENABLED, BOOL),
        Field::new("mobileOsMaximumVersion", MOBILE_OS_MAXIMUM_VERSION, STRING),
        Field::new("mobileOsMinimumVersion", MOBILE_OS_MINIMUM_VERSION, STRING),
        Field::new("osMaximumVersion", OS_MAXIMUM_VERSION, STRING),
        Field::new("osMinimumVersion", OS_MINIMUM_VERSION, STRING),
        Field::new("passwordBlockSimple", PASSWORD_BLOCK_SIMPLE, BOOL),
        Field::new("passwordExpirationDays", PASSWORD_EXPIRATION_DAYS, INT32),
        Field::new("passwordMinimumCharacterSetCount", PASSWORD_MINIMUM_CHARACTER_SET_COUNT, INT32),
        Field::new("passwordMinimumLength", PASSWORD_MINIMUM_LENGTH, INT32),
        Field::new("passwordMinutesOfInactivityBeforeLock", PASSWORD_MINUTES_OF_INACTIVITY_BEFORE_LOCK, INT32),
        Field::new("passwordPreviousPasswordBlockCount", PASSWORD_PREVIOUS_PASSWORD_BLOCK_COUNT, INT32),
        Field::new("passwordRequired", PASSWORD_REQUIRED, BOOL),
        Field::new("passwordRequiredToUnlockFromIdle", PASSWORD_REQUIRED_TO_UNLOCK_FROM_IDLE, BOOL),
        Field::new("passwordRequiredType", PASSWORD_REQUIRED_TYPE, FieldKind::Enum(RequiredPasswordType::INFO)),
        Field::new("requireHealthyDeviceReport", REQUIRE_HEALTHY_DEVICE_REPORT, BOOL),
        Field::new("secureBootEnabled", SECURE_BOOT_ENABLED, BOOL),
        Field::new("storageRequireEncryption", STORAGE_REQUIRE_ENCRYPTION, BOOL),
    ],
};

/// This class contains compliance settings for Windows 10.
#[derive(Debug, Clone)]
pub struct Windows10CompliancePolicy {
    store: Box<dyn BackingStore>,
}

graph_model!(Windows10CompliancePolicy, WINDOWS10_COMPLIANCE_POLICY_SCHEMA);

impl EntityModel for Windows10CompliancePolicy {}
impl DeviceCompliancePolicyModel for Windows10CompliancePolicy {}

impl Windows10CompliancePolicy {
    pub fn new() -> Self {
        let mut model = Self { store: new_backing_store() };
        model.set_additional_data(PropertyMap::new());
        model.set_odata_type(Some("#microsoft.graph.windows10CompliancePolicy".into()));
        model
    }

    pub fn boxed() -> Box<dyn Parsable> {
        Box::new(Self::new())
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Box<dyn Parsable>> {
        Ok(Self::boxed())
    }

    /// Require devices to be reported healthy by Windows Device Health Attestation - bit locker is enabled.
    pub fn bit_locker_enabled(&self) -> Option<bool> {
        self.store.get_value(&BIT_LOCKER_ENABLED)
    }

    pub fn set_bit_locker_enabled(&mut self, value: Option<bool>) {
        self.store.set(BIT_LOCKER_ENABLED, value.into());
    }

    pub fn code_integrity_enabled(&self) -> Option<bool> {
        self.store.get_value(&CODE_INTEGRITY_ENABLED)
    }

    pub fn set_code_integrity_enabled(&mut self, value: Option<bool>) {
        self.store.set(CODE_INTEGRITY_ENABLED, value.into());
    }

    pub fn early_launch_anti_malware_driver_enabled(&self) -> Option<bool> {
        self.store.get_value(&EARLY_LAUNCH_ANTI_MALWARE_DRIVER_ENABLED)
    }

    pub fn set_early_launch_anti_malware_driver_enabled(&mut self, value: Option<bool>) {
        self.store.set(EARLY_LAUNCH_ANTI_MALWARE_DRIVER_ENABLED, value.into());
    }

    pub fn mobile_os_maximum_version(&self) -> Option<&str> {
        self.store.get_str(&MOBILE_OS_MAXIMUM_VERSION)
    }

    pub fn set_mobile_os_maximum_version(&mut self, value: Option<String>) {
        self.store.set(MOBILE_OS_MAXIMUM_VERSION, value.into());
    }

    pub fn mobile_os_minimum_version(&self) -> Option<&str> {
        self.store.get_str(&MOBILE_OS_MINIMUM_VERSION)
    }

    pub fn set_mobile_os_minimum_version(&mut self, value: Option<String>) {
        self.store.set(MOBILE_OS_MINIMUM_VERSION, value.into());
    }

    /// Maximum Windows 10 version.
    pub fn os_maximum_version(&self) -> Option<&str> {
        self.store.get_str(&OS_MAXIMUM_VERSION)
    }

    pub fn set_os_maximum_version(&mut self, value: Option<String>) {
        self.store.set(OS_MAXIMUM_VERSION, value.into());
    }

    /// Minimum Windows 10 version.
    pub fn os_minimum_version(&self) -> Option<&str> {
        self.store.get_str(&OS_MINIMUM_VERSION)
    }

    pub fn set_os_minimum_version(&mut self, value: Option<String>) {
        self.store.set(OS_MINIMUM_VERSION, value.into());
    }

    pub fn password_block_simple(&self) -> Option<bool> {
        self.store.get_value(&PASSWORD_BLOCK_SIMPLE)
    }

    pub fn set_password_block_simple(&mut self, value: Option<bool>) {
        self.store.set(PASSWORD_BLOCK_SIMPLE, value.into());
    }

    /// Valid values 1 to 730.
    pub fn password_expiration_days(&self) -> Option<i32> {
        self.store.get_value(&PASSWORD_EXPIRATION_DAYS)
    }

    pub fn set_password_expiration_days(&mut self, value: Option<i32>) {
        self.store.set(PASSWORD_EXPIRATION_DAYS, value.into());
    }

    pub fn password_minimum_character_set_count(&self) -> Option<i32> {
        self.store.get_value(&PASSWORD_MINIMUM_CHARACTER_SET_COUNT)
    }

    pub fn set_password_minimum_character_set_count(&mut self, value: Option<i32>) {
        self.store.set(PASSWORD_MINIMUM_CHARACTER_SET_COUNT, value.into());
    }

    pub fn password_minimum_length(&self) -> Option<i32> {
        self.store.get_value(&PASSWORD_MINIMUM_LENGTH)
    }

    pub fn set_password_minimum_length(&mut self, value: Option<i32>) {
        self.store.set(PASSWORD_MINIMUM_LENGTH, value.into());
    }

    pub fn password_minutes_of_inactivity_before_lock(&self) -> Option<i32> {
        self.store.get_value(&PASSWORD_MINUTES_OF_INACTIVITY_BEFORE_LOCK)
    }

    pub fn set_password_minutes_of_inactivity_before_lock(&mut self, value: Option<i32>) {
        self.store.set(PASSWORD_MINUTES_OF_INACTIVITY_BEFORE_LOCK, value.into());
    }

    /// Valid values 0 to 24.
    pub fn password_previous_password_block_count(&self) -> Option<i32> {
        self.store.get_value(&PASSWORD_PREVIOUS_PASSWORD_BLOCK_COUNT)
    }

    pub fn set_password_previous_password_block_count(&mut self, value: Option<i32>) {
        self.store.set(PASSWORD_PREVIOUS_PASSWORD_BLOCK_COUNT, value.into());
    }

    pub fn password_required(&self) -> Option<bool> {
        self.store.get_value(&PASSWORD_REQUIRED)
    }

    pub fn set_password_required(&mut self, value: Option<bool>) {
        self.store.set(PASSWORD_REQUIRED, value.into());
    }

    pub fn password_required_to_unlock_from_idle(&self) -> Option<bool> {
        self.store.get_value(&PASSWORD_REQUIRED_TO_UNLOCK_FROM_IDLE)
    }

    pub fn set_password_required_to_unlock_from_idle(&mut self, value: Option<bool>) {
        self.store.set(PASSWORD_REQUIRED_TO_UNLOCK_FROM_IDLE, value.into());
    }

    pub fn password_required_type(&self) -> Option<RequiredPasswordType> {
        self.store.get_enum(&PASSWORD_REQUIRED_TYPE)
    }

    pub fn set_password_required_type(&mut self, value: Option<RequiredPasswordType>) {
        self.store.set(PASSWORD_REQUIRED_TYPE, value.into());
    }

    pub fn require_healthy_device_report(&self) -> Option<bool> {
        self.store.get_value(&REQUIRE_HEALTHY_DEVICE_REPORT)
    }

    pub fn set_require_healthy_device_report(&mut self, value: Option<bool>) {
        self.store.set(REQUIRE_HEALTHY_DEVICE_REPORT, value.into());
    }

    pub fn secure_boot_enabled(&self) -> Option<bool> {
        self.store.get_value(&SECURE_BOOT_ENABLED)
    }

    pub fn set_secure_boot_enabled(&mut self, value: Option<bool>) {
        self.store.set(SECURE_BOOT_ENABLED, value.into());
    }

    /// Require encryption on windows devices.
    pub fn storage_require_encryption(&self) -> Option<bool> {
        self.store.get_value(&STORAGE_REQUIRE_ENCRYPTION)
    }

    pub fn set_storage_require_encryption(&mut self, value: Option<bool>) {
        self.store.set(STORAGE_REQUIRE_ENCRYPTION, value.into());
    }
}
