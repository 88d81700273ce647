//! External process launching
//!
//! Menu actions resolve to detached process spawns or system-handler opens.
//! Launches are fire-and-forget: the child is never awaited or monitored,
//! and a missing executable or path is logged and otherwise ignored. The
//! `Launcher` trait exists so tests can record launches instead of spawning.

use crate::core::menu::MenuAction;
use anyhow::{Context, Result};
use std::process::Command;

/// Capability to start external programs and open URLs/paths.
pub trait Launcher {
    /// Spawn a detached process.
    fn spawn(&self, program: &str, args: &[String]) -> Result<()>;

    /// Open a URL or filesystem path with the system handler.
    fn open(&self, target: &str) -> Result<()>;
}

/// Launcher backed by real processes.
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn spawn(&self, program: &str, args: &[String]) -> Result<()> {
        Command::new(program)
            .args(args)
            .spawn()
            .map(drop)
            .context(format!("Failed to start '{program}'"))
    }

    fn open(&self, target: &str) -> Result<()> {
        open::that_detached(target).context(format!("Failed to open '{target}'"))
    }
}

/// What the caller should do after an action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Quit,
}

/// Run a menu action through the launcher. Launch failures are best-effort:
/// they are logged and never propagated to the caller.
pub fn dispatch(action: &MenuAction, launcher: &dyn Launcher) -> Dispatch {
    match action {
        MenuAction::Command { program, args } => {
            tracing::info!("Launching command: {} {:?}", program, args);
            log_failure(launcher.spawn(program, args));
        }
        MenuAction::EditProject { editor, path, url } => {
            tracing::info!("Opening project {} in {}", path, editor);
            log_failure(launcher.spawn(editor, std::slice::from_ref(path)));
            if !url.is_empty() {
                log_failure(launcher.open(url));
            }
        }
        MenuAction::OpenUrl { url } => {
            tracing::info!("Opening URL: {}", url);
            log_failure(launcher.open(url));
        }
        MenuAction::OpenPlace { path } => {
            tracing::info!("Opening location: {}", path);
            log_failure(launcher.open(path));
        }
        MenuAction::Quit => return Dispatch::Quit,
    }
    Dispatch::Continue
}

fn log_failure(result: Result<()>) {
    if let Err(e) = result {
        tracing::warn!("{:#}", e);
    }
}
