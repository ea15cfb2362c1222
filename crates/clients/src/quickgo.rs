//! Client QuickGO: annotations Gene Ontology et noms de termes

use crate::config::{endpoint, parse_base, ClientConfig};
use crate::enrich::GoTermLookup;
use crate::error::Result;
use crate::http::HttpClient;
use reqwest::Url;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Champs demandés à la recherche d'annotations
const ANNOTATION_FIELDS: &str = "goId,evidenceCode,geneProductId";

/// Une annotation GO.
///
/// Seuls `goId` et `goName` sont typés; les autres champs du service
/// sont conservés tels quels dans `extra`. Un `goId` ou `goName` qui n'est
/// pas une chaîne reste aussi dans `extra`, sans faire échouer la page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoAnnotation {
    #[serde(rename = "goId", default, skip_serializing_if = "Option::is_none")]
    pub go_id: Option<String>,

    #[serde(rename = "goName", default, skip_serializing_if = "Option::is_none")]
    pub go_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<'de> Deserialize<'de> for GoAnnotation {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let extra = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_fields(extra))
    }
}

impl GoAnnotation {
    /// Sépare `goId` et `goName` des autres champs, s'ils sont des chaînes
    pub fn from_fields(mut extra: Map<String, Value>) -> Self {
        let go_id = take_string(&mut extra, "goId");
        let go_name = take_string(&mut extra, "goName");
        Self {
            go_id,
            go_name,
            extra,
        }
    }

    pub fn new(go_id: impl Into<String>) -> Self {
        Self {
            go_id: Some(go_id.into()),
            ..Self::default()
        }
    }

    /// Valeur textuelle d'un champ non typé (evidenceCode, geneProductId...)
    pub fn field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(_)) => match fields.remove(key) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        },
        _ => None,
    }
}

/// `results: null` est traité comme une page vide
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<GoAnnotation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<GoAnnotation>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Réponse de `annotation/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoAnnotationPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<GoAnnotation>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct GoTermResponse {
    #[serde(default)]
    results: Vec<GoTerm>,
}

#[derive(Debug, Deserialize)]
struct GoTerm {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct QuickGoClient {
    http: HttpClient,
    base: Url,
    limit: u32,
}

impl QuickGoClient {
    pub fn new(http: HttpClient, config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http,
            base: parse_base("QuickGO", &config.quickgo_url)?,
            limit: config.go_annotation_limit,
        })
    }

    pub fn annotation_search_url(&self, accession: &str) -> Url {
        let mut url = endpoint(&self.base, &["annotation", "search"]);
        url.query_pairs_mut()
            .append_pair("geneProductId", &format!("UniProtKB:{}", accession))
            .append_pair("fields", ANNOTATION_FIELDS)
            .append_pair("limit", &self.limit.to_string());
        url
    }

    pub fn term_url(&self, go_id: &str) -> Url {
        endpoint(&self.base, &["ontology", "go", "terms", go_id])
    }

    /// Annotations GO d'une protéine UniProt.
    ///
    /// Une accession inconnue donne en général une page vide, pas une erreur.
    pub fn query_annotations(&self, accession: &str) -> Result<GoAnnotationPage> {
        self.http.get_json(self.annotation_search_url(accession))
    }

    /// Nom du terme (`results[0].name`), `None` si le service n'en renvoie pas
    pub fn term_name(&self, go_id: &str) -> Result<Option<String>> {
        let response: GoTermResponse = self.http.get_json(self.term_url(go_id))?;
        Ok(response.results.into_iter().next().and_then(|term| term.name))
    }
}

impl GoTermLookup for QuickGoClient {
    fn term_name(&self, go_id: &str) -> Result<Option<String>> {
        QuickGoClient::term_name(self, go_id)
    }
}
