// SPDX-License-Identifier: MPL-2.0
//! Theme selection and persistence round-trip.
//!
//! The dashboard follows the system theme until the user picks a side;
//! the picked mode is stored in the preferences file and re-applied at
//! startup. Toggling always lands on an explicit Light/Dark choice, never
//! back on System, so the user's intent survives a system switch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The mode the theme toggle lands on: the opposite of whatever is
    /// currently in effect.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// The Iced theme to render with.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Toast message confirming a toggle to this mode.
    #[must_use]
    pub fn activation_message(self) -> &'static str {
        if self.is_dark() {
            "Tema escuro ativado"
        } else {
            "Tema claro ativado"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_report_their_side() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the actual system theme; just verify it
        // does not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn toggling_flips_between_explicit_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        // From System the toggle must land on an explicit mode.
        assert_ne!(ThemeMode::System.toggled(), ThemeMode::System);
    }

    #[test]
    fn activation_messages_name_the_mode() {
        assert_eq!(ThemeMode::Dark.activation_message(), "Tema escuro ativado");
        assert_eq!(ThemeMode::Light.activation_message(), "Tema claro ativado");
    }

    #[test]
    fn serializes_to_lowercase_for_the_settings_file() {
        let mode = ThemeMode::Dark;
        let toml = toml::to_string(&SerdeWrapper { theme: mode }).expect("serializes");
        assert!(toml.contains("theme = \"dark\""));
    }

    #[derive(Serialize)]
    struct SerdeWrapper {
        theme: ThemeMode,
    }
}
