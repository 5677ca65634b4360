//! # Compose Emit
//!
//! A small command-line tool that writes a production-ready Docker Compose stack for a
//! Node.js application to `docker-compose.yml` and prints a checklist of what the file
//! contains.
//!
//! ## Features
//!
//! - **Fixed Stack**: Express app, MongoDB, Mongo Express, Redis and RedisInsight
//! - **Network Segmentation**: separate frontend, backend and admin networks
//! - **Secrets**: credentials referenced through Docker secrets, never inlined
//! - **Overwrite Semantics**: the target file is truncated and rewritten on every run
//!
//! ## Example
//!
//! ```rust,no_run
//! use compose_emit::{config, emitter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = config::load_config();
//! emitter::run(&config, &mut std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;

// Re-export commonly used types and functions
pub use emitter::{emit, report, run};
pub use error::{EmitError, Result};
pub use generator::{generate_compose, COMPOSE_DOCUMENT};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
