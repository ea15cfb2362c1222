//! Clients HTTP pour les bases de données bioinformatiques publiques
//!
//! UniProtKB, AlphaFold DB, InterPro et QuickGO. Chaque accès est un GET
//! unique dont la réponse JSON est relayée; seule l'étape
//! d'enrichissement GO modifie les données (ajout de `goName`).

pub mod alphafold;
pub mod config;
pub mod enrich;
pub mod error;
pub mod http;
pub mod interpro;
pub mod quickgo;
pub mod uniprot;

pub use alphafold::AlphaFoldClient;
pub use config::ClientConfig;
pub use enrich::{enrich_annotations, enrich_go_annotations, GoTermLookup};
pub use error::{ClientError, Result};
pub use http::HttpClient;
pub use interpro::InterProClient;
pub use quickgo::{GoAnnotation, GoAnnotationPage, QuickGoClient};
pub use uniprot::UniProtClient;

use serde_json::Value;

/// Ensemble des clients, partageant un même transport HTTP
#[derive(Debug, Clone)]
pub struct BioClients {
    pub uniprot: UniProtClient,
    pub alphafold: AlphaFoldClient,
    pub interpro: InterProClient,
    pub quickgo: QuickGoClient,
}

impl BioClients {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            uniprot: UniProtClient::new(http.clone(), config)?,
            alphafold: AlphaFoldClient::new(http.clone(), config)?,
            interpro: InterProClient::new(http.clone(), config)?,
            quickgo: QuickGoClient::new(http, config)?,
        })
    }

    /// Fiche UniProtKB
    pub fn query_uniprot(&self, accession: &str) -> Result<Value> {
        self.uniprot.query(accession)
    }

    /// Modèles AlphaFold
    pub fn query_alphafold(&self, accession: &str) -> Result<Value> {
        self.alphafold.query(accession)
    }

    /// Entrées InterPro
    pub fn query_interpro(&self, accession: &str) -> Result<Value> {
        self.interpro.query(accession)
    }

    /// Annotations GO
    pub fn query_go_annotations(&self, accession: &str) -> Result<GoAnnotationPage> {
        self.quickgo.query_annotations(accession)
    }

    /// Nom d'un terme GO
    pub fn go_term_name(&self, go_id: &str) -> Result<Option<String>> {
        self.quickgo.term_name(go_id)
    }

    /// Annotations GO enrichies du nom de chaque terme
    pub fn query_enriched_go_annotations(&self, accession: &str) -> Result<GoAnnotationPage> {
        let mut page = self.query_go_annotations(accession)?;
        enrich_go_annotations(&mut page, &self.quickgo)?;
        Ok(page)
    }
}
