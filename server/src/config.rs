use leptos::config::LeptosOptions;
use leptos_config::get_configuration;

use crate::error::ServerError;

/// Manifest holding the `[[workspace.metadata.leptos]]` block.
pub const MANIFEST: &str = "Cargo.toml";

/// Loads `.env` (if any) and then the Leptos options; `LEPTOS_*` variables
/// override the manifest.
pub fn load() -> Result<LeptosOptions, ServerError> {
    if dotenvy::dotenv().is_err() {
        tracing::warn!("There is no corresponding .env file");
    }
    get_configuration(Some(MANIFEST))
        .map(|conf| conf.leptos_options)
        .map_err(|err| ServerError::Config(err.to_string()))
}

/// DEBUG in debug builds, INFO in release.
pub const fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_matches_build() {
        if cfg!(debug_assertions) {
            assert_eq!(tracing_level(), tracing::Level::DEBUG);
        } else {
            assert_eq!(tracing_level(), tracing::Level::INFO);
        }
    }

    #[test]
    fn test_configuration_loading() {
        // Tests run from the crate directory where the manifest has no leptos
        // block; either outcome must come back as a value, not a panic.
        match load() {
            Ok(options) => assert!(!options.output_name.is_empty()),
            Err(ServerError::Config(msg)) => assert!(!msg.is_empty()),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
