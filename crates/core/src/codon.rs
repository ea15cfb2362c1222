//! Traduction ADN → protéine selon le code génétique standard

use crate::error::{Result, SequenceError};
use crate::sequence::{validate, Base};

/// Caractère émis pour les codons stop (TAA, TAG, TGA) et les codons inconnus
pub const STOP_SENTINEL: char = '_';

// Ordre des codons: AAA, AAC, AAG, AAT, ACA, ..., TTG, TTT
// (A=0, C=1, G=2, T=3, index = 16*b1 + 4*b2 + b3)

/// Code génétique standard (NCBI table 1)
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'_', b'Y', b'_', b'Y', b'S', b'S', b'S', b'S', b'_', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        [b1, b2, b3] => {
            let b1 = Base::from_byte(*b1)?.index();
            let b2 = Base::from_byte(*b2)?.index();
            let b3 = Base::from_byte(*b3)?.index();
            Some(b1 * 16 + b2 * 4 + b3)
        }
        _ => None,
    }
}

/// Acide aminé (code à une lettre) d'un codon.
///
/// Tout triplet hors table, y compris une longueur différente de 3 ou des
/// minuscules, donne [`STOP_SENTINEL`].
pub fn codon_to_amino_acid(codon: &[u8]) -> char {
    codon_index(codon)
        .map(|idx| STANDARD_CODE[idx] as char)
        .unwrap_or(STOP_SENTINEL)
}

/// Vrai pour TAA, TAG et TGA
pub fn is_stop_codon(codon: &[u8]) -> bool {
    matches!(codon, b"TAA" | b"TAG" | b"TGA")
}

/// Traduit une séquence ADN en protéine.
///
/// L'alphabet est vérifié avant la longueur. La traduction continue
/// au-delà des codons stop, qui sont rendus par [`STOP_SENTINEL`].
///
/// ```
/// use biotools_core::translate;
///
/// assert_eq!(translate("ATGGCC").unwrap(), "MA");
/// assert_eq!(translate("TAATAGTGA").unwrap(), "___");
/// ```
pub fn translate(sequence: &str) -> Result<String> {
    validate(sequence)?;
    check_length(sequence.len())?;

    Ok(sequence
        .as_bytes()
        .chunks_exact(3)
        .map(codon_to_amino_acid)
        .collect())
}

/// Traduit des bases déjà validées
pub(crate) fn translate_bases(bases: &[Base]) -> Result<String> {
    check_length(bases.len())?;

    Ok(bases
        .chunks_exact(3)
        .map(|c| STANDARD_CODE[c[0].index() * 16 + c[1].index() * 4 + c[2].index()] as char)
        .collect())
}

fn check_length(len: usize) -> Result<()> {
    if len % 3 != 0 {
        return Err(SequenceError::InvalidLength { len });
    }
    Ok(())
}
