//! Client InterPro: domaines et familles d'une protéine UniProt

use crate::config::{endpoint, parse_base, ClientConfig};
use crate::error::Result;
use crate::http::HttpClient;
use reqwest::Url;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct InterProClient {
    http: HttpClient,
    base: Url,
}

impl InterProClient {
    pub fn new(http: HttpClient, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http,
            base: parse_base("InterPro", &config.interpro_url)?,
        })
    }

    /// L'API InterPro attend une barre oblique finale
    pub fn protein_url(&self, accession: &str) -> Url {
        endpoint(&self.base, &[accession, ""])
    }

    pub fn query(&self, accession: &str) -> Result<Value> {
        self.http.get_json(self.protein_url(accession))
    }
}
