//! The deprecated `dream` command.
//!
//! `dream` defines no flags of its own. On every run it prints a deprecation
//! warning to stderr and then runs the configured entry point (`invokeai` by
//! default) with the same arguments, environment and standard streams. On
//! Unix the entry point replaces the `dream` process; elsewhere it runs as a
//! child and `dream` exits with its exit code.
//!
//! # Module Organization
//!
//! - `config` - Environment-based configuration
//! - `logging` - `tracing` setup for the forwarder's own diagnostics
//! - `styled_output` - Warning and error lines on stderr

#[cfg(not(unix))]
use std::sync::atomic::{AtomicBool, Ordering};

use dream_forwarder::{ExternalCommand, Launch, forward};

pub mod config;
pub mod logging;
pub mod styled_output;

use config::ForwarderConfig;
use styled_output::{print_error, print_warning};

#[cfg(not(unix))]
static INTERRUPT_HANDLER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Keep this process alive on Ctrl+C while a spawned entry point runs.
///
/// The entry point shares our console and receives the interrupt itself;
/// we report whatever exit status it ends with. On Unix the entry point
/// replaces this process, so there is nothing to install.
#[cfg(not(unix))]
pub fn install_interrupt_passthrough() {
    // Only install once
    if INTERRUPT_HANDLER_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = ctrlc::set_handler(|| {
        tracing::debug!("Interrupt received, waiting for entry point to exit");
    }) {
        tracing::warn!("Could not install interrupt handler: {}", e);
    }
}

/// Run the forwarder and return the process exit code.
pub fn run() -> i32 {
    let config = ForwarderConfig::from_env();

    if let Err(e) = logging::init_logging(config.log_level) {
        print_warning(&e.to_string());
    }

    #[cfg(not(unix))]
    install_interrupt_passthrough();

    let mut entry = ExternalCommand::new(&config.entry_point)
        .args(std::env::args_os().skip(1))
        .launch(Launch::Exec);

    match forward(&mut entry, print_warning) {
        Ok(code) => code,
        Err(err) => {
            print_error(&err.to_string());
            err.exit_code()
        }
    }
}
