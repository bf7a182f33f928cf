use arcade_engine::Validate;
use arcade_engine::games::connect_four::Player;
use arcade_engine::games::minesweeper::MinesweeperSettings;
use serde::{Deserialize, Serialize};

const PREFERENCES_FILE_NAME: &str = "arcade_preferences.yaml";
pub const MAX_AI_DELAY_MS: u64 = 5000;

pub fn default_preferences_path() -> String {
    match std::env::current_exe() {
        Ok(exe_path) => match exe_path.parent() {
            Some(dir) => dir.join(PREFERENCES_FILE_NAME).to_string_lossy().into_owned(),
            None => PREFERENCES_FILE_NAME.to_string(),
        },
        Err(_) => PREFERENCES_FILE_NAME.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectFourPreferences {
    pub human: Player,
    pub ai_delay_ms: u64,
}

impl Default for ConnectFourPreferences {
    fn default() -> Self {
        Self {
            human: Player::Red,
            ai_delay_ms: 400,
        }
    }
}

impl Validate for ConnectFourPreferences {
    fn validate(&self) -> Result<(), String> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(format!("AI delay must be at most {} ms", MAX_AI_DELAY_MS));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub connect_four: ConnectFourPreferences,
    pub minesweeper: MinesweeperSettings,
}

impl Validate for Preferences {
    fn validate(&self) -> Result<(), String> {
        self.connect_four.validate()?;
        self.minesweeper.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_are_valid() {
        let preferences = Preferences::default();

        assert!(preferences.validate().is_ok());
        assert_eq!(preferences.connect_four.human, Player::Red);
        assert_eq!(preferences.minesweeper, MinesweeperSettings::default());
    }

    #[test]
    fn test_invalid_minesweeper_settings_fail_validation() {
        let preferences = Preferences {
            minesweeper: MinesweeperSettings::new(4, 4, 16),
            ..Preferences::default()
        };

        assert!(preferences.validate().is_err());
    }

    #[test]
    fn test_ai_delay_limit() {
        let preferences = ConnectFourPreferences {
            ai_delay_ms: MAX_AI_DELAY_MS + 1,
            ..ConnectFourPreferences::default()
        };

        assert!(preferences.validate().is_err());
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        assert!(default_preferences_path().ends_with(PREFERENCES_FILE_NAME));
    }
}
