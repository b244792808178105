use contracts::system::settings::DynamicSetting;
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::api_url;

const SETTINGS_PATH: &str = "/api/settings";

#[derive(Debug, Error)]
pub enum SettingsApiError {
    #[error("failed to send request: {0}")]
    Request(#[source] gloo_net::Error),
    #[error("failed to serialize request: {0}")]
    Encode(#[source] gloo_net::Error),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Fetch the full settings collection
pub async fn fetch_settings() -> Result<Vec<DynamicSetting>, SettingsApiError> {
    let response = Request::get(&api_url(SETTINGS_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(SettingsApiError::Request)?;

    if !response.ok() {
        return Err(SettingsApiError::Status(response.status()));
    }

    let body = response.text().await.map_err(SettingsApiError::Request)?;
    serde_json::from_str(&body).map_err(SettingsApiError::Decode)
}

/// Persist one setting. The whole row is sent with the new value in place.
///
/// Returns the row as acknowledged by the server: the response body when it
/// decodes as the same setting, otherwise the submitted row.
pub async fn update_setting(setting: &DynamicSetting) -> Result<DynamicSetting, SettingsApiError> {
    let response = Request::post(&api_url(SETTINGS_PATH))
        .header("Accept", "application/json")
        .json(setting)
        .map_err(SettingsApiError::Encode)?
        .send()
        .await
        .map_err(SettingsApiError::Request)?;

    if !response.ok() {
        return Err(SettingsApiError::Status(response.status()));
    }

    // The body is only advisory; an unreadable one still means success.
    let body = response.text().await.unwrap_or_default();
    Ok(acknowledged_setting(setting, &body))
}

fn acknowledged_setting(submitted: &DynamicSetting, body: &str) -> DynamicSetting {
    serde_json::from_str::<DynamicSetting>(body)
        .ok()
        .filter(|ack| ack.id == submitted.id)
        .unwrap_or_else(|| submitted.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::settings::ConfigValueType;

    fn submitted() -> DynamicSetting {
        DynamicSetting {
            id: 3,
            config_name: "PEERDB_QUEUE_SIZE".into(),
            config_value: Some("64".into()),
            config_default_value: Some("32".into()),
            config_description: None,
            config_value_type: ConfigValueType::Uint,
            config_apply_mode: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_server_row_wins_when_present() {
        let body = r#"{"id":3,"config_name":"PEERDB_QUEUE_SIZE","config_value":"128","config_value_type":3}"#;
        let ack = acknowledged_setting(&submitted(), body);
        assert_eq!(ack.config_value.as_deref(), Some("128"));
    }

    #[test]
    fn test_submitted_row_used_for_empty_or_foreign_body() {
        assert_eq!(acknowledged_setting(&submitted(), ""), submitted());
        assert_eq!(acknowledged_setting(&submitted(), r#"{"ok":true}"#), submitted());
        let other = r#"{"id":4,"config_name":"other","config_value":"1","config_value_type":1}"#;
        assert_eq!(acknowledged_setting(&submitted(), other), submitted());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SettingsApiError::Status(503).to_string(),
            "server responded with HTTP 503"
        );
    }
}
