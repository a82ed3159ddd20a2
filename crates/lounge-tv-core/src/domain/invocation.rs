//! A single, fully resolved call of the external tool.

use std::fmt;
use std::path::{Path, PathBuf};

use super::{TvAction, TvConfig};

/// Flag the external tool uses to select its serial device.
pub const DEVICE_FLAG: &str = "--dev";

/// Program plus argument list for one run of the external tool.
///
/// Built fresh for every request and dropped once the process has exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
}

impl Invocation {
    /// Expand `action` against `config`: `<command> --dev <device> <action args...>`.
    pub fn for_action(config: &TvConfig, action: TvAction) -> Self {
        let mut args = vec![DEVICE_FLAG.to_string(), config.serial_device.clone()];
        args.extend(action.args());
        Self {
            program: config.command.clone(),
            args,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Every argument after the program, device selector included.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
