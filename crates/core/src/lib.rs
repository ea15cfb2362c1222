//! biotools core
//!
//! Fonctions pures sur les séquences ADN: complément inverse et traduction
//! selon le code génétique standard.

pub mod codon;
pub mod error;
pub mod logging;
pub mod sequence;

// Réexportations principales
pub use codon::{codon_to_amino_acid, is_stop_codon, translate, STOP_SENTINEL};
pub use error::{Result, SequenceError};
pub use logging::{init_logging, level_from_verbosity};
pub use sequence::{reverse_complement, validate, Base, DnaSequence};
// La macro log_operation est exportée à la racine du crate
