//! The closed set of TV actions and their argument templates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ports::CoreError;

/// Lowest HDMI input the external tool accepts.
pub const HDMI_PORT_MIN: u8 = 1;
/// Highest HDMI input the external tool accepts.
pub const HDMI_PORT_MAX: u8 = 5;

/// Two-state feature that can also be flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Switch {
    On,
    Off,
    Toggle,
}

impl Switch {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Toggle => "toggle",
        }
    }
}

/// Relative step for volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Backlight adjustment, relative or absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrightnessStep {
    Up,
    Down,
    Min,
    Max,
}

impl BrightnessStep {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// An HDMI input number known to be within the tool's accepted range.
///
/// The only way to obtain one is through [`HdmiPort::new`], so an
/// out-of-range port can never reach a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub struct HdmiPort(u8);

impl HdmiPort {
    /// Validate a port number.
    ///
    /// Accepts any integer so callers can pass raw user input; anything
    /// outside `HDMI_PORT_MIN..=HDMI_PORT_MAX` is a validation error.
    pub fn new(port: i64) -> Result<Self, CoreError> {
        u8::try_from(port)
            .ok()
            .filter(|p| (HDMI_PORT_MIN..=HDMI_PORT_MAX).contains(p))
            .map(Self)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "HDMI port must be between {HDMI_PORT_MIN} and {HDMI_PORT_MAX}, got {port}"
                ))
            })
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<HdmiPort> for u8 {
    fn from(port: HdmiPort) -> Self {
        port.0
    }
}

impl TryFrom<i64> for HdmiPort {
    type Error = CoreError;

    fn try_from(port: i64) -> Result<Self, Self::Error> {
        Self::new(port)
    }
}

impl fmt::Display for HdmiPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input source selection.
///
/// Only HDMI is wired up today; other source kinds get their own variant with
/// their own verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "port", rename_all = "lowercase")]
pub enum InputSelection {
    Hdmi(HdmiPort),
}

/// Every operation the service can ask the television to perform.
///
/// Each variant expands to exactly one fixed argument template via
/// [`TvAction::args`]. This is deliberately not a generic command channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum TvAction {
    Power(Switch),
    DisplayToggle,
    Picture(Switch),
    Volume(Direction),
    MuteToggle,
    Brightness(BrightnessStep),
    Input(InputSelection),
    Status,
}

impl TvAction {
    /// Arguments passed to the external tool after the device selector.
    pub fn args(&self) -> Vec<String> {
        match *self {
            Self::Power(switch) => vec!["power".into(), switch.as_str().into()],
            Self::DisplayToggle => vec!["display".into(), "toggle".into()],
            Self::Picture(switch) => vec!["picture".into(), switch.as_str().into()],
            Self::Volume(direction) => vec!["volume".into(), direction.as_str().into()],
            Self::MuteToggle => vec!["mute".into(), "toggle".into()],
            Self::Brightness(step) => vec!["brightness".into(), step.as_str().into()],
            Self::Input(InputSelection::Hdmi(port)) => {
                vec!["input-hdmi".into(), port.to_string()]
            }
            Self::Status => vec!["status".into()],
        }
    }
}

impl fmt::Display for TvAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}
