//! Démonstration: opérations de séquence puis interrogation des quatre services

use crate::create_spinner;
use crate::display::annotations::print_annotation_table;
use anyhow::Result;
use biotools_clients::{BioClients, ClientConfig};
use biotools_core::log_operation;
use console::style;
use serde_json::Value;

pub fn run(config: &ClientConfig, sequence: &str, accession: &str) -> Result<()> {
    println!("🧬 Séquence: {}", sequence);

    // Les erreurs de séquence n'empêchent pas la partie réseau
    let sequence_result = log_operation!("séquence", {
        biotools_core::reverse_complement(sequence).and_then(|rc| {
            let protein = biotools_core::translate(sequence)?;
            Ok((rc, protein))
        })
    });
    match sequence_result {
        Ok((rc, protein)) => {
            println!("   Complément inverse: {}", rc);
            println!("   Traduction:         {}", protein);
        }
        Err(e) => println!("   {} {}", style("Erreur:").red(), e),
    }

    let clients = BioClients::new(config)?;

    println!("\n{}", style(format!("Interrogation de UniProt ({})...", accession)).bold());
    let uniprot = fetch("UniProt", || clients.query_uniprot(accession))?;
    println!("   {}", summarize(&uniprot));

    println!("\n{}", style("Interrogation de AlphaFold...").bold());
    let alphafold = fetch("AlphaFold", || clients.query_alphafold(accession))?;
    println!("   {}", summarize(&alphafold));

    println!("\n{}", style("Interrogation de InterPro...").bold());
    let interpro = fetch("InterPro", || clients.query_interpro(accession))?;
    println!("   {}", summarize(&interpro));

    println!("\n{}", style("Annotations GO enrichies...").bold());
    let page = fetch("QuickGO", || clients.query_enriched_go_annotations(accession))?;
    print_annotation_table(&page.results);

    println!("\n✅ Démonstration terminée!");
    Ok(())
}

fn fetch<T>(service: &str, call: impl FnOnce() -> biotools_clients::Result<T>) -> Result<T> {
    let spinner = create_spinner(&format!("{}...", service));
    let result = log_operation!(service, { call() });
    spinner.finish_and_clear();
    Ok(result?)
}

/// Résumé d'une réponse JSON: nombre d'éléments ou clés de premier niveau
fn summarize(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("{} élément(s)", items.len()),
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).take(6).collect();
            format!("{} champ(s): {}", map.len(), keys.join(", "))
        }
        other => other.to_string(),
    }
}
