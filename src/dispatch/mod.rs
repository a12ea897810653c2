//! Decide which host action a trigger produces for a path.


use std::path::Path;

use crate::action::{Action, Command, Directive};
use crate::error::ConvertError;
use crate::fs::FileSystem;
use crate::path::{NativePath, SEPARATOR};
use crate::resolve::{ResolvedTarget, Resolver};
use crate::trigger::Trigger;

/// What the invocation should end with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Hand this action to the host.
    Emit(Action),
    /// The symlink is dangling; report it and do nothing else.
    Missing(NativePath),
    /// Stop quietly.
    Nothing,
}

/// How a named trigger behaves on each kind of target.
struct Route {
    /// `None` means a linked folder is ignored.
    folder: Option<Directive>,
    file: Directive,
    /// Key replayed when the path is not a link.
    key: u16,
}

const fn route(trigger: &Trigger) -> Option<Route> {
    use Directive::{Cd, Edit, Exec, View};

    let route = match trigger {
        Trigger::Enter => Route { folder: Some(Cd), file: View, key: 913 },
        Trigger::EnterCd => Route { folder: Some(Cd), file: Cd, key: 913 },
        Trigger::ShiftEnter => Route { folder: Some(Cd), file: Edit, key: 1913 },
        Trigger::CtrlEnter => Route { folder: Some(Exec), file: Exec, key: 2913 },
        Trigger::Edit => Route { folder: None, file: Edit, key: 969 },
        Trigger::View => Route { folder: None, file: View, key: 986 },
        Trigger::Other(_) => return None,
    };
    Some(route)
}

/// Resolve `path` and pick the action for `trigger`.
///
/// # Errors
///
/// Fails only when the external path converter fails.
pub fn dispatch(trigger: &Trigger, path: &str, resolver: &Resolver<'_>) -> Result<Outcome, ConvertError> {
    let target = resolver.resolve(path)?;

    let outcome = match (route(trigger), target) {
        (Some(route), ResolvedTarget::NotALink) => {
            Outcome::Emit(Action::new(Directive::SendKey(route.key), path))
        }
        (Some(_), ResolvedTarget::Missing(native)) => Outcome::Missing(native),
        (Some(route), ResolvedTarget::Folder(native)) => route
            .folder
            .map_or(Outcome::Nothing, |directive| {
                Outcome::Emit(Action::new(directive, native.into_string()))
            }),
        (Some(route), ResolvedTarget::File(native)) => {
            Outcome::Emit(Action::new(route.file, native.into_string()))
        }
        // Free-form commands take whatever path resolution produced, dangling or not.
        (None, target) => {
            let path = target
                .into_native_path()
                .map_or_else(|| path.to_string(), NativePath::into_string);
            Outcome::Emit(Action::new(Command::parse(trigger.as_str()), path))
        }
    };

    Ok(terminate_folders(outcome, resolver.fs()))
}

/// `&CD` on an existing folder always gets exactly one trailing separator.
fn terminate_folders(outcome: Outcome, fs: &dyn FileSystem) -> Outcome {
    match outcome {
        Outcome::Emit(mut action)
            if action.is(Directive::Cd)
                && !action.path.ends_with(SEPARATOR)
                && fs.is_dir(Path::new(&action.path)) =>
        {
            action.path.push(SEPARATOR);
            Outcome::Emit(action)
        }
        other => other,
    }
}
