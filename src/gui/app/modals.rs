use crate::gui::{
    error_modal::ErrorModal,
    settings_modal::SettingsModal,
};

pub struct Modals {
    pub settings: SettingsModal,
    pub error: ErrorModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { settings: SettingsModal::new(), error: ErrorModal::new() }
    }
}
