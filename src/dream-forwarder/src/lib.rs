//! Deprecation forwarding for the legacy `dream` command.
//!
//! `dream` has been retired in favor of newer entry points. This crate
//! provides the pieces needed to keep it working for existing users:
//! - A static deprecation notice naming the replacements
//! - The [`EntryPoint`] capability the forwarder delegates to, and
//!   [`FnEntryPoint`] for closures
//! - [`ExternalCommand`], an entry point backed by another executable
//! - [`forward`], which warns once and hands control to the entry point
//!
//! # Example
//!
//! ```rust,no_run
//! use dream_forwarder::{ExternalCommand, forward};
//!
//! let mut entry = ExternalCommand::new("invokeai").args(std::env::args_os().skip(1));
//! let code = match forward(&mut entry, |notice| eprintln!("{notice}")) {
//!     Ok(code) => code,
//!     Err(err) => {
//!         eprintln!("{err}");
//!         err.exit_code()
//!     }
//! };
//! std::process::exit(code);
//! ```

mod entry_point;
mod error;
mod external;
mod forward;
mod notice;

pub use entry_point::{EntryPoint, FnEntryPoint};
pub use error::{Result, StartupError};
pub use external::{ExternalCommand, Launch, exit_code_of};
pub use forward::forward;
pub use notice::{DEPRECATION_NOTICE, REPLACEMENT_ENTRY_POINTS, deprecation_notice};
