use serde::{Deserialize, Serialize};

/// Declared type of a dynamic setting value.
///
/// Travels as the integer code of the server-side enum. Codes this client
/// does not know are kept in `Unrecognized` so they survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ConfigValueType {
    String,
    Int,
    Uint,
    Bool,
    Unrecognized(i32),
}

impl ConfigValueType {
    /// Wire code of the value type
    pub fn code(&self) -> i32 {
        match self {
            ConfigValueType::String => 1,
            ConfigValueType::Int => 2,
            ConfigValueType::Uint => 3,
            ConfigValueType::Bool => 4,
            ConfigValueType::Unrecognized(code) => *code,
        }
    }

    /// Short label for table cells and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            ConfigValueType::String => "string",
            ConfigValueType::Int => "int",
            ConfigValueType::Uint => "uint",
            ConfigValueType::Bool => "bool",
            ConfigValueType::Unrecognized(_) => "unknown",
        }
    }
}

impl From<i32> for ConfigValueType {
    fn from(code: i32) -> Self {
        match code {
            1 => ConfigValueType::String,
            2 => ConfigValueType::Int,
            3 => ConfigValueType::Uint,
            4 => ConfigValueType::Bool,
            other => ConfigValueType::Unrecognized(other),
        }
    }
}

impl From<ConfigValueType> for i32 {
    fn from(value_type: ConfigValueType) -> Self {
        value_type.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_variants() {
        assert_eq!(ConfigValueType::from(1), ConfigValueType::String);
        assert_eq!(ConfigValueType::from(2), ConfigValueType::Int);
        assert_eq!(ConfigValueType::from(3), ConfigValueType::Uint);
        assert_eq!(ConfigValueType::from(4), ConfigValueType::Bool);
    }

    #[test]
    fn unknown_codes_are_preserved() {
        let zero = ConfigValueType::from(0);
        assert_eq!(zero, ConfigValueType::Unrecognized(0));
        assert_eq!(zero.display_name(), "unknown");
        assert_eq!(i32::from(ConfigValueType::from(17)), 17);
    }

    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&ConfigValueType::Uint).unwrap();
        assert_eq!(json, "3");
        let parsed: ConfigValueType = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, ConfigValueType::Bool);
    }
}
