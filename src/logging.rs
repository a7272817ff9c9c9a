//! Logging initialization for binaries embedding the controller.
//!
//! Library code logs through the `log` facade unconditionally; enabling the
//! `logging` feature wires those records to stderr via `flexi_logger`, with
//! the level taken from `RUST_LOG` when set.

use anyhow::Result;

#[cfg(feature = "logging")]
pub fn initialize() -> Result<()> {
    use flexi_logger::Logger;

    let handle = Logger::try_with_env_or_str("info")?
        .log_to_stderr()
        .start()?;
    // The handle must outlive the process for records to keep flowing.
    std::mem::forget(handle);
    Ok(())
}

#[cfg(not(feature = "logging"))]
pub fn initialize() -> Result<()> {
    Ok(())
}
