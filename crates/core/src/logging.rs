//! Initialisation du logging pour les outils biotools

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise le système de logging.
///
/// `RUST_LOG` est prioritaire; à défaut, `default_level` s'applique.
pub fn init_logging(default_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    // try_init: un subscriber peut déjà être installé (tests, binaire hôte)
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Niveau correspondant au nombre de `-v` passés en ligne de commande
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Macro pour le logging des opérations de haut niveau
#[macro_export]
macro_rules! log_operation {
    ($name:expr, $block:block) => {{
        let span = tracing::span!(tracing::Level::INFO, "operation", op = $name);
        let _enter = span.enter();
        tracing::info!("Début de l'opération: {}", $name);
        let result = $block;
        tracing::info!("Fin de l'opération: {}", $name);
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_from_verbosity(0), Level::WARN);
        assert_eq!(level_from_verbosity(2), Level::DEBUG);
        assert_eq!(level_from_verbosity(9), Level::TRACE);
    }

    #[test]
    fn test_log_operation_returns_block_value() {
        init_logging(Level::INFO);
        let value = crate::log_operation!("addition", { 2 + 2 });
        assert_eq!(value, 4);
    }
}
