//! Client AlphaFold DB: prédictions de structure par accession UniProt

use crate::config::{endpoint, parse_base, ClientConfig};
use crate::error::Result;
use crate::http::HttpClient;
use reqwest::Url;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct AlphaFoldClient {
    http: HttpClient,
    base: Url,
}

impl AlphaFoldClient {
    pub fn new(http: HttpClient, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http,
            base: parse_base("AlphaFold", &config.alphafold_url)?,
        })
    }

    pub fn prediction_url(&self, accession: &str) -> Url {
        endpoint(&self.base, &[accession])
    }

    /// Liste des modèles prédits (tableau JSON de l'API)
    pub fn query(&self, accession: &str) -> Result<Value> {
        self.http.get_json(self.prediction_url(accession))
    }
}
