use std::fmt::{ Display, Formatter };
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

use crate::error::ThemeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode; toggling twice is a no-op.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidMode(other.to_string())),
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme value shared through context from the root component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn root_class(&self) -> &'static str {
        if self.is_dark() { "dark" } else { "" }
    }
}
