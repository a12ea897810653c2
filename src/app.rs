//! One complete invocation: arguments in, host calls out.

use anyhow::Result;

use crate::dispatch::{dispatch, Outcome};
use crate::fs::FileSystem;
use crate::host::Host;
use crate::invocation::Invocation;
use crate::path::PathConverter;
use crate::resolve::Resolver;
use crate::usage;

/// Handle `args` (trigger words followed by the subject path).
///
/// No arguments prints the usage text. A dangling symlink prints
/// `"<path>": No such file or directory` and emits nothing.
///
/// # Errors
///
/// Path converter failures and host delivery failures propagate.
pub fn run<S: AsRef<str>>(
    args: &[S],
    fs: &dyn FileSystem,
    converter: &dyn PathConverter,
    host: &dyn Host,
) -> Result<()> {
    let Some(invocation) = Invocation::from_args(args) else {
        usage::print(host);
        return Ok(());
    };
    log::debug!("trigger {:?} on {}", invocation.trigger, invocation.path);

    let resolver = Resolver::new(fs, converter);
    match dispatch(&invocation.trigger, &invocation.path, &resolver)? {
        Outcome::Emit(action) => {
            let line = action.compose();
            log::info!("{} -> {line}", invocation.trigger);
            host.execute(&line)?;
        }
        Outcome::Missing(path) => {
            host.print(&format!("\"{path}\": No such file or directory"));
        }
        Outcome::Nothing => {
            log::info!("{} on a linked folder: nothing to do", invocation.trigger);
        }
    }
    Ok(())
}
