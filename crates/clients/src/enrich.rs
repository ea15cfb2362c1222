//! Enrichissement des annotations GO avec le nom des termes

use crate::error::Result;
use crate::quickgo::{GoAnnotation, GoAnnotationPage};
use std::collections::HashMap;
use tracing::{debug, info};

/// Résolution d'un identifiant GO vers son nom lisible
pub trait GoTermLookup {
    /// `Ok(None)` si le terme n'a pas de nom connu
    fn term_name(&self, go_id: &str) -> Result<Option<String>>;
}

/// Table en mémoire (identifiant → nom)
impl GoTermLookup for HashMap<String, String> {
    fn term_name(&self, go_id: &str) -> Result<Option<String>> {
        Ok(self.get(go_id).cloned())
    }
}

impl<L: GoTermLookup + ?Sized> GoTermLookup for &L {
    fn term_name(&self, go_id: &str) -> Result<Option<String>> {
        (**self).term_name(go_id)
    }
}

/// Ajoute `goName` à chaque annotation dont le terme est résolu.
///
/// Un appel par annotation portant un `goId` non vide, dans l'ordre, sans
/// déduplication. Un terme sans nom laisse `goName` vide; une erreur de
/// transport interrompt l'enrichissement. Retourne le nombre
/// d'annotations nommées.
pub fn enrich_annotations<L>(annotations: &mut [GoAnnotation], lookup: &L) -> Result<usize>
where
    L: GoTermLookup + ?Sized,
{
    let mut named = 0;

    for annotation in annotations.iter_mut() {
        let Some(go_id) = annotation.go_id.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };

        let name = lookup.term_name(go_id)?;
        debug!(go_id, name = name.as_deref().unwrap_or("-"), "Terme GO résolu");

        if name.is_some() {
            named += 1;
        }
        annotation.go_name = name;
    }

    info!("{} annotation(s) GO nommée(s) sur {}", named, annotations.len());
    Ok(named)
}

/// Enrichit toutes les annotations d'une page de résultats
pub fn enrich_go_annotations<L>(page: &mut GoAnnotationPage, lookup: &L) -> Result<usize>
where
    L: GoTermLookup + ?Sized,
{
    enrich_annotations(&mut page.results, lookup)
}
