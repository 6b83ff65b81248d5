//! Enum symbol tables and the `graph_enum!` generator.

use std::borrow::Cow;

use crate::{Error, Result};

/// Symbol table for one enum type.
#[derive(Debug)]
pub struct EnumInfo {
    pub name: &'static str,
    pub symbols: &'static [&'static str],
    /// Flag enums carry comma-separated symbol lists.
    pub flags: bool,
}

impl EnumInfo {
    /// Check a wire value and return it in canonical form.
    pub fn validate(&self, raw: &str) -> Result<String> {
        if !self.flags {
            self.check(raw)?;
            return Ok(raw.to_owned());
        }
        let symbols: Vec<&str> = raw.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
        if symbols.is_empty() {
            return Err(self.unknown(raw));
        }
        for symbol in &symbols {
            self.check(symbol)?;
        }
        Ok(symbols.join(","))
    }

    fn check(&self, symbol: &str) -> Result<()> {
        if self.symbols.contains(&symbol) {
            Ok(())
        } else {
            Err(self.unknown(symbol))
        }
    }

    fn unknown(&self, value: &str) -> Error {
        Error::InvalidEnumValue { enum_name: self.name, value: value.to_owned() }
    }
}

/// A generated enum: parses from and formats to its wire symbols.
pub trait GraphEnum: Sized + Copy + 'static {
    const INFO: &'static EnumInfo;

    fn parse(value: &str) -> Result<Self>;

    fn to_wire(&self) -> Cow<'static, str>;
}

/// Declare a plain (non-flag) enum with its wire symbols.
macro_rules! graph_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $wire:literal {
            $( $variant:ident => $symbol:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl $crate::serialization::GraphEnum for $name {
            const INFO: &'static $crate::serialization::EnumInfo = &$crate::serialization::EnumInfo {
                name: $wire,
                symbols: &[$($symbol),+],
                flags: false,
            };

            fn parse(value: &str) -> $crate::Result<Self> {
                match value {
                    $($symbol => Ok($name::$variant),)+
                    _ => Err($crate::Error::InvalidEnumValue {
                        enum_name: $wire,
                        value: value.to_owned(),
                    }),
                }
            }

            fn to_wire(&self) -> std::borrow::Cow<'static, str> {
                std::borrow::Cow::Borrowed(self.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                <$name as $crate::serialization::GraphEnum>::parse(s)
            }
        }

        impl From<$name> for $crate::Value {
            fn from(v: $name) -> Self {
                $crate::Value::Enum(v.as_str().to_owned())
            }
        }
    };
}

pub(crate) use graph_enum;
