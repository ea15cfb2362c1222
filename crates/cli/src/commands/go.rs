//! Commande d'annotations Gene Ontology

use crate::display::annotations::print_annotation_table;
use crate::{create_spinner, OutputFormat};
use anyhow::Result;
use biotools_clients::{enrich_go_annotations, BioClients, ClientConfig};

pub fn run(config: &ClientConfig, accession: &str, enrich: bool, format: OutputFormat) -> Result<()> {
    let clients = BioClients::new(config)?;

    let spinner = create_spinner(&format!("Annotations GO pour {}...", accession));
    let page = clients.query_go_annotations(accession);
    spinner.finish_and_clear();
    let mut page = page?;

    if enrich {
        let spinner = create_spinner(&format!("Résolution de {} terme(s) GO...", page.results.len()));
        let named = enrich_go_annotations(&mut page, &clients.quickgo);
        spinner.finish_and_clear();
        tracing::info!("{} terme(s) nommé(s)", named?);
    }

    match format {
        OutputFormat::Table => print_annotation_table(&page.results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
    }

    Ok(())
}
