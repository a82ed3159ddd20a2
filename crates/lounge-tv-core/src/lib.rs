#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    BrightnessStep, DEFAULT_COMMAND, DEFAULT_SERIAL_DEVICE, Direction, HDMI_PORT_MAX,
    HDMI_PORT_MIN, HdmiPort, InputSelection,
    Invocation, Switch, TvAction, TvConfig,
};
pub use ports::{CommandRunner, CoreError, RunnerError};
pub use services::LoungeTv;

