//! Enumerations referenced by the model set.

use std::borrow::Cow;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::model::Value;
use crate::serialization::enums::graph_enum;
use crate::serialization::{EnumInfo, GraphEnum};
use crate::{Error, Result};

graph_enum! {
    /// Password complexity required on a device.
    pub enum RequiredPasswordType = "requiredPasswordType" {
        DeviceDefault => "deviceDefault",
        Alphanumeric => "alphanumeric",
        Numeric => "numeric",
    }
}

graph_enum! {
    pub enum StateManagementSetting = "stateManagementSetting" {
        NotConfigured => "notConfigured",
        Blocked => "blocked",
        Allowed => "allowed",
    }
}

graph_enum! {
    pub enum Importance = "importance" {
        Low => "low",
        Normal => "normal",
        High => "high",
    }
}

graph_enum! {
    pub enum Sensitivity = "sensitivity" {
        Normal => "normal",
        Personal => "personal",
        Private => "private",
        Confidential => "confidential",
    }
}

graph_enum! {
    pub enum MessageActionFlag = "messageActionFlag" {
        Any => "any",
        Call => "call",
        DoNotForward => "doNotForward",
        FollowUp => "followUp",
        Fyi => "fyi",
        Forward => "forward",
        NoResponseNecessary => "noResponseNecessary",
        Read => "read",
        Reply => "reply",
        ReplyToAll => "replyToAll",
        Review => "review",
    }
}

graph_enum! {
    /// How Windows Update installs and restarts.
    pub enum AutomaticUpdateMode = "automaticUpdateMode" {
        UserDefined => "userDefined",
        NotifyDownload => "notifyDownload",
        AutoInstallAtMaintenanceTime => "autoInstallAtMaintenanceTime",
        AutoInstallAndRebootAtMaintenanceTime => "autoInstallAndRebootAtMaintenanceTime",
        AutoInstallAndRebootAtScheduledTime => "autoInstallAndRebootAtScheduledTime",
        AutoInstallAndRebootWithoutEndUserControl => "autoInstallAndRebootWithoutEndUserControl",
        WindowsDefault => "windowsDefault",
    }
}

graph_enum! {
    pub enum BookingPriceType = "bookingPriceType" {
        Undefined => "undefined",
        FixedPrice => "fixedPrice",
        StartingAt => "startingAt",
        Hourly => "hourly",
        Free => "free",
        PriceVaries => "priceVaries",
        CallUs => "callUs",
        NotSet => "notSet",
        UnknownFutureValue => "unknownFutureValue",
    }
}

// ============================================================================
// Flags
// ============================================================================

/// Weeks of the month an update may install in. A flag enum: any
/// combination is valid and travels as a comma-separated list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowsUpdateForBusinessUpdateWeeks(u8);

const UPDATE_WEEK_SYMBOLS: &[&str] = &[
    "userDefined",
    "firstWeek",
    "secondWeek",
    "thirdWeek",
    "fourthWeek",
    "everyWeek",
    "unknownFutureValue",
];

impl WindowsUpdateForBusinessUpdateWeeks {
    pub const USER_DEFINED: Self = Self(1 << 0);
    pub const FIRST_WEEK: Self = Self(1 << 1);
    pub const SECOND_WEEK: Self = Self(1 << 2);
    pub const THIRD_WEEK: Self = Self(1 << 3);
    pub const FOURTH_WEEK: Self = Self(1 << 4);
    pub const EVERY_WEEK: Self = Self(1 << 5);
    pub const UNKNOWN_FUTURE_VALUE: Self = Self(1 << 6);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Set symbols in declaration order.
    pub fn symbols(&self) -> Vec<&'static str> {
        UPDATE_WEEK_SYMBOLS
            .iter()
            .enumerate()
            .filter(|(bit, _)| self.0 & (1 << bit) != 0)
            .map(|(_, symbol)| *symbol)
            .collect()
    }
}

impl GraphEnum for WindowsUpdateForBusinessUpdateWeeks {
    const INFO: &'static EnumInfo = &EnumInfo {
        name: "windowsUpdateForBusinessUpdateWeeks",
        symbols: UPDATE_WEEK_SYMBOLS,
        flags: true,
    };

    fn parse(value: &str) -> Result<Self> {
        let mut weeks = Self::empty();
        for symbol in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let bit = UPDATE_WEEK_SYMBOLS
                .iter()
                .position(|known| *known == symbol)
                .ok_or_else(|| Error::InvalidEnumValue {
                    enum_name: Self::INFO.name,
                    value: symbol.to_owned(),
                })?;
            weeks.0 |= 1 << bit;
        }
        if weeks.is_empty() {
            return Err(Error::InvalidEnumValue { enum_name: Self::INFO.name, value: value.to_owned() });
        }
        Ok(weeks)
    }

    fn to_wire(&self) -> Cow<'static, str> {
        Cow::Owned(self.symbols().join(","))
    }
}

impl BitOr for WindowsUpdateForBusinessUpdateWeeks {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for WindowsUpdateForBusinessUpdateWeeks {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for WindowsUpdateForBusinessUpdateWeeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<WindowsUpdateForBusinessUpdateWeeks> for Value {
    fn from(v: WindowsUpdateForBusinessUpdateWeeks) -> Self {
        Value::Enum(v.to_wire().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_parse_and_format() {
        let weeks = WindowsUpdateForBusinessUpdateWeeks::parse("thirdWeek,firstWeek").unwrap();
        assert!(weeks.contains(WindowsUpdateForBusinessUpdateWeeks::FIRST_WEEK));
        assert!(weeks.contains(WindowsUpdateForBusinessUpdateWeeks::THIRD_WEEK));
        assert!(!weeks.contains(WindowsUpdateForBusinessUpdateWeeks::SECOND_WEEK));
        assert_eq!(weeks.to_string(), "firstWeek,thirdWeek");
    }

    #[test]
    fn test_flags_combine() {
        let mut weeks = WindowsUpdateForBusinessUpdateWeeks::FIRST_WEEK
            | WindowsUpdateForBusinessUpdateWeeks::SECOND_WEEK;
        weeks |= WindowsUpdateForBusinessUpdateWeeks::EVERY_WEEK;
        assert_eq!(Value::from(weeks), Value::Enum("firstWeek,secondWeek,everyWeek".into()));
    }

    #[test]
    fn test_flags_reject_unknown() {
        assert!(WindowsUpdateForBusinessUpdateWeeks::parse("firstWeek,lastWeek").is_err());
        assert!(WindowsUpdateForBusinessUpdateWeeks::parse(" , ").is_err());
    }

    #[test]
    fn test_plain_enum_value_conversion() {
        assert_eq!(Value::from(RequiredPasswordType::Numeric), Value::Enum("numeric".into()));
        assert_eq!(MessageActionFlag::parse("replyToAll").unwrap(), MessageActionFlag::ReplyToAll);
        assert_eq!(BookingPriceType::ALL.len(), 9);
    }
}
