//! Dynamic server settings: the row shape served by `/api/settings`,
//! its enum codes and client-side value validation.

pub mod apply_mode;
pub mod dto;
pub mod validation;
pub mod value_type;

pub use apply_mode::ConfigApplyMode;
pub use dto::DynamicSetting;
pub use validation::{validate_value, ValueValidationError, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use value_type::ConfigValueType;
