use serde::{Deserialize, Serialize};

use super::apply_mode::ConfigApplyMode;
use super::validation::{validate_value, ValueValidationError};
use super::value_type::ConfigValueType;

const NOT_AVAILABLE: &str = "N/A";

/// One row of `GET /api/settings`; also the body of `POST /api/settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicSetting {
    pub id: i64,
    pub config_name: String,
    pub config_value: Option<String>,
    pub config_default_value: Option<String>,
    pub config_description: Option<String>,
    pub config_value_type: ConfigValueType,
    #[serde(default)]
    pub config_apply_mode: Option<ConfigApplyMode>,
    /// Columns this client does not model; echoed back unchanged on update.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DynamicSetting {
    pub fn apply_mode(&self) -> ConfigApplyMode {
        ConfigApplyMode::from_optional(self.config_apply_mode)
    }

    /// Copy of the row with `config_value` replaced.
    pub fn with_value(&self, value: Option<String>) -> DynamicSetting {
        DynamicSetting {
            config_value: value,
            ..self.clone()
        }
    }

    pub fn validate_candidate(&self, candidate: Option<&str>) -> Result<(), ValueValidationError> {
        validate_value(self.config_value_type, candidate)
    }

    pub fn display_value(&self) -> String {
        or_not_available(self.config_value.as_deref())
    }

    pub fn display_default_value(&self) -> String {
        or_not_available(self.config_default_value.as_deref())
    }

    pub fn display_description(&self) -> String {
        or_not_available(self.config_description.as_deref())
    }
}

// Empty strings are shown as "N/A" as well.
fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> serde_json::Value {
        json!({
            "id": 7,
            "config_name": "PEERDB_MAX_BATCH",
            "config_value": "10",
            "config_default_value": "1000",
            "config_description": "rows per batch",
            "config_value_type": 3,
            "config_apply_mode": 2,
            "target_for_setting": 1
        })
    }

    #[test]
    fn deserializes_backend_row() {
        let setting: DynamicSetting = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(setting.id, 7);
        assert_eq!(setting.config_value_type, ConfigValueType::Uint);
        assert_eq!(setting.apply_mode(), ConfigApplyMode::AfterResume);
        assert_eq!(setting.extra.get("target_for_setting"), Some(&json!(1)));
    }

    #[test]
    fn update_body_echoes_row_with_new_value() {
        let setting: DynamicSetting = serde_json::from_value(sample_json()).unwrap();
        let body = serde_json::to_value(setting.with_value(Some("25".to_string()))).unwrap();

        let mut expected = sample_json();
        expected["config_value"] = json!("25");
        assert_eq!(body, expected);
    }

    #[test]
    fn nullable_columns_may_be_null_or_missing() {
        let setting: DynamicSetting = serde_json::from_value(json!({
            "id": 1,
            "config_name": "x",
            "config_value": null,
            "config_value_type": 1
        }))
        .unwrap();
        assert_eq!(setting.config_value, None);
        assert_eq!(setting.config_apply_mode, None);
        assert_eq!(setting.apply_mode(), ConfigApplyMode::Unrecognized(0));
        assert_eq!(setting.display_value(), "N/A");
        assert_eq!(setting.display_default_value(), "N/A");
        assert_eq!(setting.display_description(), "N/A");
    }

    #[test]
    fn empty_value_is_displayed_as_not_available() {
        let setting: DynamicSetting = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(setting.display_value(), "10");
        assert_eq!(setting.with_value(Some(String::new())).display_value(), "N/A");
    }

    #[test]
    fn candidate_is_checked_against_declared_type() {
        let setting: DynamicSetting = serde_json::from_value(sample_json()).unwrap();
        assert!(setting.validate_candidate(Some("11")).is_ok());
        assert_eq!(
            setting.validate_candidate(Some("-1")),
            Err(ValueValidationError::InvalidUnsignedInteger)
        );
    }
}
