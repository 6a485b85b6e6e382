mod question;
mod region;
mod region_state;
mod settings;
mod store;

pub use question::QuestionRecord;
pub use region::{ModelError, RegionName};
pub use region_state::RegionState;
pub use settings::{
    DEFAULT_MAP_NAME, DEFAULT_TRANSITION_DELAY, MAX_TRANSITION_DELAY, MapTheme, QuizSettings,
    QuizSettingsDraft, SettingsError,
};
pub use store::QuestionStore;
