//! Gestion des erreurs pour les clients HTTP

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Erreur HTTP {status}: {url}")]
    Http { status: u16, url: String },

    #[error("Délai dépassé après {seconds}s: {url}")]
    Timeout { seconds: u64, url: String },

    #[error("Erreur réseau: {0}")]
    Network(String),

    #[error("Réponse JSON invalide pour {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Erreur de configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Code HTTP si l'erreur provient d'une réponse non-2xx
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Config(err.to_string())
    }
}
