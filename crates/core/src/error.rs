//! Types d'erreurs pour les opérations sur les séquences

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Caractère hors de l'alphabet {A, T, C, G}
    #[error("Séquence ADN invalide: caractère {found:?} en position {position} (autorisés: A, T, C, G)")]
    InvalidSequence { found: char, position: usize },

    /// Caractère isolé qui n'est pas une base, hors de toute séquence
    #[error("Base invalide: {0:?} (autorisées: A, T, C, G)")]
    InvalidBase(char),

    /// Longueur non multiple de trois (traduction uniquement)
    #[error("Longueur de séquence {len} non multiple de trois, requis pour la traduction")]
    InvalidLength { len: usize },
}

pub type Result<T> = std::result::Result<T, SequenceError>;
