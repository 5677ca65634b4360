//! # Emitter
//!
//! Writes the compose document to disk and reports what was written.
//!
//! The file is opened in truncate mode, so repeated runs converge on the same contents
//! and nothing from a previous file survives. The handle lives only inside [`emit`] and is
//! closed on every return path.

use crate::config::OutputConfig;
use crate::error::{EmitError, Result};
use crate::generator;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Headline printed once the file is on disk
pub const SUCCESS_MESSAGE: &str =
    "Production-ready docker-compose.yml file has been created successfully!";

/// Lines printed after a successful write, in order. Empty entries are blank lines.
pub const CHECKLIST: &[&str] = &[
    SUCCESS_MESSAGE,
    "",
    "File structure includes:",
    "✓ All 5 required services (Express App, MongoDB, Mongo Express, Redis, Redis UI)",
    "✓ Network segmentation (frontend, backend, admin)",
    "✓ Docker secrets for credential management",
    "✓ Named volumes for data persistence",
    "✓ Comprehensive health checks",
    "✓ Resource limits and constraints",
    "✓ Security-focused configurations",
    "✓ Production-ready best practices",
    "",
    "The file is ready for immediate deployment!",
];

/// Write `payload` to `path`, replacing anything already there.
///
/// A single attempt; any I/O failure comes back as [`EmitError::Write`].
pub fn emit(path: &Path, payload: &str) -> Result<()> {
    log::info!("Writing compose document to {}", path.display());

    let mut file = File::create(path).map_err(|e| {
        log::debug!("Cannot open {} for writing: {}", path.display(), e);
        EmitError::write(path, e)
    })?;

    file.write_all(payload.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            log::debug!("Write to {} failed: {}", path.display(), e);
            EmitError::write(path, e)
        })?;

    log::debug!("Wrote {} bytes to {}", payload.len(), path.display());
    Ok(())
}

/// Print the generation checklist to `out`
pub fn report<W: Write>(out: &mut W) -> std::io::Result<()> {
    for line in CHECKLIST {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Emit the compose document to the configured path, then report to `out`.
///
/// Nothing reaches `out` unless the write succeeded.
pub fn run<W: Write>(config: &OutputConfig, out: &mut W) -> Result<()> {
    emit(&config.path, generator::generate_compose())?;
    report(out).map_err(EmitError::Report)
}
