//! Configuration checks run before a config is saved or used

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Reject settings that would only fail later, mid-run
pub fn validate(config: &Config) -> Result<()> {
    glob::Pattern::new(&config.build_reports.to_target)?;

    if config.debugger.server_port_number > i32::from(u16::MAX) {
        return Err(Error::ConfigError(format!(
            "debugger.server_port_number {} is above {}",
            config.debugger.server_port_number,
            u16::MAX
        )));
    }

    Ok(())
}
