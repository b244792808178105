use serde::{Deserialize, Serialize};

/// When a changed setting takes effect on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ConfigApplyMode {
    Immediate,
    AfterResume,
    Restart,
    NewMirror,
    Unrecognized(i32),
}

impl ConfigApplyMode {
    /// Apply mode for a nullable wire value; a missing mode counts as code `0`.
    pub fn from_optional(mode: Option<ConfigApplyMode>) -> Self {
        mode.unwrap_or(ConfigApplyMode::Unrecognized(0))
    }

    pub fn code(&self) -> i32 {
        match self {
            ConfigApplyMode::Immediate => 1,
            ConfigApplyMode::AfterResume => 2,
            ConfigApplyMode::Restart => 3,
            ConfigApplyMode::NewMirror => 4,
            ConfigApplyMode::Unrecognized(code) => *code,
        }
    }

    /// Tooltip shown next to the apply-mode icon
    pub fn tooltip(&self) -> &'static str {
        match self {
            ConfigApplyMode::Immediate => "Changes to this configuration will apply immediately",
            ConfigApplyMode::AfterResume => {
                "Changes to this configuration will apply after resume"
            }
            ConfigApplyMode::Restart => {
                "Changes to this configuration will apply after server restart."
            }
            ConfigApplyMode::NewMirror => {
                "Changes to this configuration will apply only to new mirrors"
            }
            ConfigApplyMode::Unrecognized(_) => "Unknown apply mode",
        }
    }

    /// Name of the icon glyph, as understood by the frontend icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            ConfigApplyMode::Immediate => "bolt",
            ConfigApplyMode::AfterResume => "cached",
            ConfigApplyMode::Restart => "restart",
            ConfigApplyMode::NewMirror => "new-window",
            ConfigApplyMode::Unrecognized(_) => "help",
        }
    }
}

impl From<i32> for ConfigApplyMode {
    fn from(code: i32) -> Self {
        match code {
            1 => ConfigApplyMode::Immediate,
            2 => ConfigApplyMode::AfterResume,
            3 => ConfigApplyMode::Restart,
            4 => ConfigApplyMode::NewMirror,
            other => ConfigApplyMode::Unrecognized(other),
        }
    }
}

impl From<ConfigApplyMode> for i32 {
    fn from(mode: ConfigApplyMode) -> Self {
        mode.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_modes_have_their_own_icon_and_text() {
        let cases = [
            (1, "bolt", "apply immediately"),
            (2, "cached", "after resume"),
            (3, "restart", "after server restart."),
            (4, "new-window", "only to new mirrors"),
        ];
        for (code, icon, text) in cases {
            let mode = ConfigApplyMode::from(code);
            assert_eq!(mode.icon_name(), icon);
            assert!(mode.tooltip().ends_with(text), "code {code}: {}", mode.tooltip());
            assert_eq!(mode.code(), code);
        }
    }

    #[test]
    fn absent_or_unknown_mode_is_annotated_as_unknown() {
        let absent = ConfigApplyMode::from_optional(None);
        assert_eq!(absent, ConfigApplyMode::Unrecognized(0));
        assert_eq!(absent.icon_name(), "help");
        assert_eq!(absent.tooltip(), "Unknown apply mode");

        let odd = ConfigApplyMode::from(42);
        assert_eq!(odd.icon_name(), "help");
        assert_eq!(i32::from(odd), 42);
    }
}
