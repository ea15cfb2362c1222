//! Transport HTTP bloquant partagé par les clients de services
//!
//! Une requête GET par appel, aucune relance, aucun cache: toute réponse
//! non-2xx devient [`ClientError::Http`].

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Client HTTP bloquant; le clonage partage le pool de connexions
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Construit le client à partir de la configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let mut builder = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.clone());
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Envoie un GET et décode le corps JSON
    pub fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Réponse HTTP en échec");
            return Err(ClientError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| self.transport_error(&url, e))?;

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn transport_error(&self, url: &Url, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                seconds: self.timeout.as_secs(),
                url: url.to_string(),
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}
