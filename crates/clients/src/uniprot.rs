//! Client UniProtKB: fiche protéine par accession

use crate::config::{endpoint, parse_base, ClientConfig};
use crate::error::Result;
use crate::http::HttpClient;
use reqwest::Url;
use serde_json::Value;

/// Accès aux fiches UniProtKB
#[derive(Debug, Clone)]
pub struct UniProtClient {
    http: HttpClient,
    base: Url,
}

impl UniProtClient {
    pub fn new(http: HttpClient, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http,
            base: parse_base("UniProt", &config.uniprot_url)?,
        })
    }

    /// `{base}/{accession}`
    pub fn entry_url(&self, accession: &str) -> Url {
        endpoint(&self.base, &[accession])
    }

    /// Récupère la fiche complète, relayée telle quelle
    pub fn query(&self, accession: &str) -> Result<Value> {
        self.http.get_json(self.entry_url(accession))
    }
}
