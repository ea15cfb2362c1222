//! Commandes de séquence: complément inverse et traduction

use anyhow::Result;
use console::style;

pub fn reverse_complement(sequence: &str) -> Result<()> {
    let result = biotools_core::reverse_complement(sequence)?;
    println!("{}", result);
    Ok(())
}

pub fn translate(sequence: &str) -> Result<()> {
    let protein = biotools_core::translate(sequence)?;
    println!("{}", protein);

    let stops = count_stop_codons(sequence);
    if stops > 0 {
        eprintln!(
            "{} {} codon(s) stop, notés '{}'",
            style("ℹ").cyan(),
            stops,
            biotools_core::STOP_SENTINEL
        );
    }

    Ok(())
}

/// Nombre de codons stop (TAA, TAG, TGA) dans le cadre de lecture 0
fn count_stop_codons(sequence: &str) -> usize {
    sequence
        .as_bytes()
        .chunks_exact(3)
        .filter(|codon| biotools_core::is_stop_codon(codon))
        .count()
}
