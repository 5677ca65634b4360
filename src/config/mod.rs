pub mod types;

pub use types::OutputConfig;

/// Load the output configuration.
///
/// Every value is compiled in; nothing is read from files or the environment.
pub fn load_config() -> OutputConfig {
    let config = OutputConfig::default();
    log::debug!("Using output path {}", config.path.display());
    config
}
