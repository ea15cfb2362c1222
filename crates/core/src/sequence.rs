//! Bases, validation de l'alphabet et complément inverse

use crate::error::{Result, SequenceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Table d'appartenance à l'alphabet {A, C, G, T}, indexée par octet.
///
/// Seules les majuscules sont acceptées: aucune normalisation n'est faite.
const ALPHABET: [bool; 256] = {
    let mut table = [false; 256];
    table[b'A' as usize] = true;
    table[b'C' as usize] = true;
    table[b'G' as usize] = true;
    table[b'T' as usize] = true;
    table
};

/// Complément Watson-Crick, indexé par octet (0 pour les octets hors alphabet)
const COMPLEMENT: [u8; 256] = {
    let mut table = [0u8; 256];
    table[b'A' as usize] = b'T';
    table[b'T' as usize] = b'A';
    table[b'C' as usize] = b'G';
    table[b'G' as usize] = b'C';
    table
};

/// Nucléotide standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Convertit un octet en base (majuscules uniquement)
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            _ => None,
        }
    }

    /// Convertit une base en caractère
    pub fn as_char(self) -> char {
        self.as_byte() as char
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
        }
    }

    /// Partenaire Watson-Crick (A↔T, C↔G)
    pub fn complement(self) -> Self {
        match self {
            Base::A => Base::T,
            Base::T => Base::A,
            Base::C => Base::G,
            Base::G => Base::C,
        }
    }

    /// Encodage sur 2 bits: A=0, C=1, G=2, T=3
    pub fn index(self) -> usize {
        match self {
            Base::A => 0,
            Base::C => 1,
            Base::G => 2,
            Base::T => 3,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Base {
    type Error = SequenceError;

    fn try_from(c: char) -> Result<Self> {
        u8::try_from(c)
            .ok()
            .and_then(Base::from_byte)
            .ok_or(SequenceError::InvalidBase(c))
    }
}

/// Vérifie que chaque caractère appartient à {A, T, C, G}.
///
/// L'erreur pointe le premier caractère fautif. Les positions sont des
/// index d'octets; tout ce qui précède est ASCII, donc elles tombent
/// toujours sur une frontière de caractère.
pub fn validate(sequence: &str) -> Result<()> {
    match sequence.bytes().position(|b| !ALPHABET[b as usize]) {
        None => Ok(()),
        Some(position) => {
            let found = sequence[position..].chars().next().unwrap_or('\u{FFFD}');
            Err(SequenceError::InvalidSequence { found, position })
        }
    }
}

/// Calcule le complément inverse d'une séquence ADN.
///
/// La séquence est lue de la fin vers le début et chaque base est
/// remplacée par son complément. Une séquence vide donne une séquence vide.
///
/// ```
/// use biotools_core::reverse_complement;
///
/// assert_eq!(reverse_complement("ATGC").unwrap(), "GCAT");
/// assert!(reverse_complement("ATGN").is_err());
/// ```
pub fn reverse_complement(sequence: &str) -> Result<String> {
    validate(sequence)?;

    let complemented: Vec<u8> = sequence
        .bytes()
        .rev()
        .map(|b| COMPLEMENT[b as usize])
        .collect();

    // Uniquement des octets ASCII après validation
    Ok(complemented.into_iter().map(char::from).collect())
}

/// Séquence ADN validée
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DnaSequence {
    bases: Vec<Base>,
}

impl DnaSequence {
    /// Crée une séquence à partir de bases déjà typées
    pub fn new(bases: Vec<Base>) -> Self {
        Self { bases }
    }

    /// Valide et convertit une chaîne
    pub fn parse(sequence: &str) -> Result<Self> {
        validate(sequence)?;
        let bases = sequence.bytes().filter_map(Base::from_byte).collect();
        Ok(Self { bases })
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Complément inverse; toujours valide sur une séquence déjà typée
    pub fn reverse_complement(&self) -> Self {
        Self {
            bases: self.bases.iter().rev().map(|b| b.complement()).collect(),
        }
    }

    /// Traduit la séquence en protéine
    pub fn translate(&self) -> Result<String> {
        crate::codon::translate_bases(&self.bases)
    }
}

impl FromStr for DnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}
