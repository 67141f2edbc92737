//! Platform-specific handoff to the system URL opener.
//!
//! Encodes which program opens a URL on each OS as named constants.
//!
//! Structure:
//! - Constants: opener programs (documented invariants)
//! - Types: platform and launch error (sum types)
//! - Pure functions: command construction
//! - Effect functions: spawning the opener

use std::io;
use std::process::{Command, Stdio};
use std::thread;

// ============================================================================
// CONSTANTS (Documented Invariants)
// ============================================================================

/// macOS Launch Services front end. Routes `mailto:` to the default mail app.
pub const MACOS_OPENER: &str = "open";

/// freedesktop.org opener, present on any desktop Linux/BSD.
pub const XDG_OPENER: &str = "xdg-open";

/// Windows protocol handler. Avoids `cmd /C start`, which would split the
/// URL on `&`.
pub const WINDOWS_OPENER: &str = "rundll32";

/// Entry point passed to [`WINDOWS_OPENER`].
pub const WINDOWS_OPENER_ENTRY: &str = "url.dll,FileProtocolHandler";

// ============================================================================
// TYPES (State Representation)
// ============================================================================

/// Which opener convention applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    /// Everything else: assume an XDG desktop.
    Xdg,
}

/// A fully resolved opener invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

/// Error while handing a URL to the system.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The opener program could not be started.
    #[error("could not start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },
}

// ============================================================================
// PURE FUNCTIONS (Command Construction)
// ============================================================================

/// Platform this binary was compiled for.
pub fn current_platform() -> Platform {
    if cfg!(target_os = "macos") {
        Platform::MacOs
    } else if cfg!(target_os = "windows") {
        Platform::Windows
    } else {
        Platform::Xdg
    }
}

/// Build the opener invocation for `url` on `platform`.
///
/// Pure function, no I/O.
pub fn opener_command(platform: Platform, url: &str) -> OpenerCommand {
    match platform {
        Platform::MacOs => OpenerCommand {
            program: MACOS_OPENER,
            args: vec![url.to_string()],
        },
        Platform::Windows => OpenerCommand {
            program: WINDOWS_OPENER,
            args: vec![WINDOWS_OPENER_ENTRY.to_string(), url.to_string()],
        },
        Platform::Xdg => OpenerCommand {
            program: XDG_OPENER,
            args: vec![url.to_string()],
        },
    }
}

// ============================================================================
// EFFECT FUNCTIONS (Launch)
// ============================================================================

/// Hand `url` to the system opener for the current platform.
///
/// Returns once the opener is spawned; does not wait for it.
pub fn open_url(url: &str) -> Result<(), LaunchError> {
    let cmd = opener_command(current_platform(), url);
    tracing::debug!(program = cmd.program, "launching system opener");
    launch(&cmd)
}

/// Spawn `cmd` detached from the terminal.
///
/// stdio is nulled so the opener cannot draw over the page. A background
/// thread reaps the child.
fn launch(cmd: &OpenerCommand) -> Result<(), LaunchError> {
    let mut child = Command::new(cmd.program)
        .args(&cmd.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: cmd.program,
            source,
        })?;

    let program = cmd.program;
    thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => tracing::warn!(program, %status, "opener exited with failure"),
        Ok(_) => {}
        Err(e) => tracing::warn!(program, error = %e, "could not wait for opener"),
    });
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
