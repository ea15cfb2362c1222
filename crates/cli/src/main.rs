//! CLI biotools: séquences ADN et bases de données protéiques

use anyhow::Context;
use biotools_clients::ClientConfig;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod display;

use commands::{demo, go, query, sequence};

/// Séquence de démonstration (ATG ... TAG)
const DEMO_SEQUENCE: &str = "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";
/// Hémoglobine humaine, sous-unité alpha
const DEMO_ACCESSION: &str = "P69905";

#[derive(Parser)]
#[command(name = "biotools")]
#[command(about = "Outils de séquences ADN et requêtes UniProt / AlphaFold / InterPro / QuickGO", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fichier de configuration des clients (TOML, JSON ou YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Complément inverse d'une séquence ADN
    Revcomp {
        /// Séquence (A, T, C, G en majuscules)
        sequence: String,
    },

    /// Traduction d'une séquence ADN en protéine
    Translate {
        /// Séquence dont la longueur est un multiple de 3
        sequence: String,
    },

    /// Fiche protéine UniProtKB
    Uniprot {
        accession: String,

        /// Écrire le JSON dans un fichier
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Prédictions de structure AlphaFold
    Alphafold {
        accession: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Domaines et familles InterPro
    Interpro {
        accession: String,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Annotations Gene Ontology (QuickGO)
    Go {
        accession: String,

        /// Ajouter le nom de chaque terme GO
        #[arg(short, long)]
        enrich: bool,

        /// Format de sortie
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Démonstration complète: séquence puis les quatre services
    Demo {
        #[arg(short, long, default_value = DEMO_SEQUENCE)]
        sequence: String,

        #[arg(short, long, default_value = DEMO_ACCESSION)]
        accession: String,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    biotools_core::init_logging(biotools_core::level_from_verbosity(cli.verbose));

    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Revcomp { sequence: dna } => sequence::reverse_complement(&dna)?,
        Commands::Translate { sequence: dna } => sequence::translate(&dna)?,
        Commands::Uniprot { accession, output } => {
            query::run(&config, query::Service::UniProt, &accession, output)?
        }
        Commands::Alphafold { accession, output } => {
            query::run(&config, query::Service::AlphaFold, &accession, output)?
        }
        Commands::Interpro { accession, output } => {
            query::run(&config, query::Service::InterPro, &accession, output)?
        }
        Commands::Go {
            accession,
            enrich,
            format,
        } => go::run(&config, &accession, enrich, format)?,
        Commands::Demo {
            sequence: dna,
            accession,
        } => demo::run(&config, &dna, &accession)?,
    }

    Ok(())
}

/// Configuration par défaut, ou lue depuis `--config`
fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ClientConfig> {
    match path {
        None => Ok(ClientConfig::default()),
        Some(path) => {
            let path = path.to_string_lossy();
            ClientConfig::load_from_file(&path)
                .with_context(|| format!("Lecture de la configuration {}", path))
        }
    }
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
