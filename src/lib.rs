//! Follow Cygwin symlinks on behalf of a Windows file manager.

pub mod action;
pub mod app;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fs;
pub mod host;
pub mod invocation;
pub mod link;
pub mod logging;
pub mod path;
pub mod resolve;
pub mod trigger;
pub mod usage;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use resolve::{ResolvedTarget, Resolver};
pub use trigger::Trigger;
