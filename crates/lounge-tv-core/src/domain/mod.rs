//! Domain types for driving the television.
//!
//! These are pure data types: nothing here spawns processes or knows about
//! HTTP. The mapping from an action to the external tool's arguments lives on
//! the types themselves so every adapter produces identical invocations.

mod action;
mod config;
mod invocation;

pub use action::{
    BrightnessStep, Direction, HDMI_PORT_MAX, HDMI_PORT_MIN, HdmiPort, InputSelection, Switch,
    TvAction,
};
pub use config::{DEFAULT_COMMAND, DEFAULT_SERIAL_DEVICE, TvConfig};
pub use invocation::{DEVICE_FLAG, Invocation};
