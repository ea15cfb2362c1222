//! Commandes UniProt, AlphaFold et InterPro: JSON relayé tel quel

use crate::create_spinner;
use biotools_clients::{BioClients, ClientConfig};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy)]
pub enum Service {
    UniProt,
    AlphaFold,
    InterPro,
}

impl Service {
    fn name(self) -> &'static str {
        match self {
            Service::UniProt => "UniProt",
            Service::AlphaFold => "AlphaFold",
            Service::InterPro => "InterPro",
        }
    }
}

pub fn run(config: &ClientConfig, service: Service, accession: &str, output: Option<PathBuf>) -> Result<()> {
    let clients = BioClients::new(config)?;

    let spinner = create_spinner(&format!("Requête {} pour {}...", service.name(), accession));
    let result = match service {
        Service::UniProt => clients.query_uniprot(accession),
        Service::AlphaFold => clients.query_alphafold(accession),
        Service::InterPro => clients.query_interpro(accession),
    };
    spinner.finish_and_clear();

    let json = serde_json::to_string_pretty(&result?)?;

    if let Some(output) = output {
        std::fs::write(&output, json)?;
        println!("JSON écrit dans: {}", output.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}
