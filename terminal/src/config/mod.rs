mod preferences;
mod preferences_store;

pub use preferences::{ConnectFourPreferences, Preferences, default_preferences_path};
pub use preferences_store::PreferencesStore;
