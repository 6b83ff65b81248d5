//! # Property Values
//!
//! The value types a backing store holds. These cross every boundary:
//! store ↔ parse node ↔ serialization writer ↔ model accessors.
//!
//! Design rule: no wire-format knowledge beyond the canonical text forms of
//! the temporal and binary kinds. This module is pure data.

pub mod value;
pub mod property_map;
pub mod duration;
pub mod wire;

pub use value::{FromValue, ObjectValue, Value};
pub use property_map::PropertyMap;
pub use duration::IsoDuration;
