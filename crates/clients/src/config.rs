//! Configuration des clients

use crate::error::{ClientError, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Configuration des accès aux services distants.
///
/// Les valeurs par défaut pointent vers les services publics; un fichier
/// n'est lu que si l'appelant le demande explicitement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// UniProtKB REST
    pub uniprot_url: String,
    /// Prédictions de structure AlphaFold
    pub alphafold_url: String,
    /// InterPro, entrées par protéine UniProt
    pub interpro_url: String,
    /// Racine des services QuickGO
    pub quickgo_url: String,
    /// Délai maximal par requête, en secondes
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Nombre maximal d'annotations GO par recherche
    pub go_annotation_limit: u32,
    /// Respecter HTTP_PROXY / HTTPS_PROXY
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            uniprot_url: "https://rest.uniprot.org/uniprotkb".to_string(),
            alphafold_url: "https://alphafold.ebi.ac.uk/api/prediction".to_string(),
            interpro_url: "https://www.ebi.ac.uk/interpro/api/protein/uniprot".to_string(),
            quickgo_url: "https://www.ebi.ac.uk/QuickGO/services".to_string(),
            timeout_secs: 60,
            user_agent: format!("biotools/{}", env!("CARGO_PKG_VERSION")),
            go_annotation_limit: 50,
            use_system_proxy: true,
        }
    }
}

impl ClientConfig {
    /// Charge la configuration depuis un fichier (TOML, JSON ou YAML).
    ///
    /// Les clés absentes gardent leur valeur par défaut.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize::<ClientConfig>()?)
    }

    /// Même configuration, tous les services derrière une seule racine
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            uniprot_url: format!("{}/uniprotkb", base),
            alphafold_url: format!("{}/alphafold/prediction", base),
            interpro_url: format!("{}/interpro/protein/uniprot", base),
            quickgo_url: format!("{}/QuickGO/services", base),
            ..Self::default()
        }
    }
}

/// Parse une URL de base de service
pub(crate) fn parse_base(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| ClientError::Config(format!("URL {} invalide ({}): {}", name, value, e)))?;

    if url.cannot_be_a_base() {
        return Err(ClientError::Config(format!(
            "URL {} non hiérarchique: {}",
            name, value
        )));
    }

    Ok(url)
}

/// Ajoute des segments de chemin à une URL de base
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // parse_base garantit une URL hiérarchique
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
