//! Launching a leaf action with the selection as its arguments.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use scm_model::Selection;
use tracing::info;

use crate::error::DispatchError;

/// Everything needed to start one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: PathBuf,
    pub selection: Selection,
    /// Folder the menu was opened in, not the folder of `program`.
    pub working_directory: PathBuf,
}

impl LaunchRequest {
    pub fn new(
        program: impl Into<PathBuf>,
        selection: Selection,
        working_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            selection,
            working_directory: working_directory.into(),
        }
    }

    /// The selection as a single command-line string.
    pub fn arguments(&self) -> String {
        argument_string(&self.selection)
    }
}

/// Quotes every selected path and joins them with spaces.
///
/// Each token is followed by one space, including the last:
/// `"C:\f1.txt" "C:\f 2.txt" `.
pub fn argument_string(selection: &Selection) -> String {
    selection
        .iter()
        .map(|path| format!("\"{}\" ", path.display()))
        .collect()
}

/// Starts processes for launch requests.
pub trait ProcessSpawner {
    /// Starts the process without waiting for it.
    fn spawn(&self, request: &LaunchRequest) -> io::Result<()>;
}

/// Spawner backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn spawn(&self, request: &LaunchRequest) -> io::Result<()> {
        let mut command = system_command(request);
        command.current_dir(&request.working_directory);
        // The child is detached; dropping the handle does not stop it.
        command.spawn().map(drop)
    }
}

/// Starts `leaf_path` for `selection` with `working_directory` as its cwd.
///
/// # Errors
///
/// Returns the OS failure when the process cannot be started. Failures are
/// not retried.
pub fn launch(
    leaf_path: &Path,
    selection: &Selection,
    working_directory: &Path,
) -> Result<(), DispatchError> {
    launch_with(
        &SystemSpawner,
        &LaunchRequest::new(leaf_path, selection.clone(), working_directory),
    )
}

/// Starts `request` through `spawner`.
///
/// # Errors
///
/// Returns [`DispatchError::Spawn`] when the spawner fails.
pub fn launch_with(
    spawner: &dyn ProcessSpawner,
    request: &LaunchRequest,
) -> Result<(), DispatchError> {
    info!(
        program = %request.program.display(),
        cwd = %request.working_directory.display(),
        arguments = request.selection.len(),
        "launching action"
    );
    spawner.spawn(request).map_err(|source| DispatchError::Spawn {
        program: request.program.clone(),
        source,
    })
}

#[cfg(windows)]
fn system_command(request: &LaunchRequest) -> Command {
    use std::os::windows::process::CommandExt;

    let arguments = request.arguments();
    if is_executable(&request.program) {
        let mut command = Command::new(&request.program);
        command.raw_arg(arguments);
        command
    } else {
        // Scripts go through the shell so their file association picks the
        // interpreter (`.py` vs `.pyw`).
        let mut command = Command::new("cmd");
        command.raw_arg(format!(
            "/C start \"\" \"{}\" {arguments}",
            request.program.display()
        ));
        command
    }
}

#[cfg(windows)]
fn is_executable(program: &Path) -> bool {
    program
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ["exe", "com", "bat", "cmd"]
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

#[cfg(not(windows))]
fn system_command(request: &LaunchRequest) -> Command {
    let mut command = Command::new(&request.program);
    command.args(request.selection.iter());
    command
}
