//! Propriétés des fonctions de séquence

use biotools_core::{reverse_complement, translate, DnaSequence, SequenceError};
use proptest::prelude::*;

fn dna(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], 0..max_len)
        .prop_map(|bases| bases.into_iter().collect())
}

proptest! {
    #[test]
    fn test_reverse_complement_is_involution(seq in dna(300)) {
        let once = reverse_complement(&seq).unwrap();
        prop_assert_eq!(once.len(), seq.len());
        prop_assert_eq!(reverse_complement(&once).unwrap(), seq);
    }

    #[test]
    fn test_translation_length(seq in dna(300)) {
        match translate(&seq) {
            Ok(protein) => {
                prop_assert_eq!(seq.len() % 3, 0);
                prop_assert_eq!(protein.len(), seq.len() / 3);
            }
            Err(err) => {
                prop_assert_eq!(err, SequenceError::InvalidLength { len: seq.len() });
            }
        }
    }

    #[test]
    fn test_foreign_character_always_rejected(seq in dna(60), pos in 0usize..60, c in "[^ACGT]") {
        let pos = pos.min(seq.len());
        let mut corrupted = seq.clone();
        corrupted.insert_str(pos, &c);
        let rc_rejected = matches!(
            reverse_complement(&corrupted),
            Err(SequenceError::InvalidSequence { .. })
        );
        let tr_rejected = matches!(
            translate(&corrupted),
            Err(SequenceError::InvalidSequence { .. })
        );
        prop_assert!(rc_rejected);
        prop_assert!(tr_rejected);
    }

    #[test]
    fn test_typed_and_string_apis_agree(seq in dna(120)) {
        let typed = DnaSequence::parse(&seq).unwrap();
        prop_assert_eq!(typed.reverse_complement().to_string(), reverse_complement(&seq).unwrap());
        prop_assert_eq!(typed.translate(), translate(&seq));
    }
}

#[test]
fn test_demo_sequence() {
    // Séquence de démonstration de la commande `biotools demo`
    let dna = "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";
    assert_eq!(
        reverse_complement(dna).unwrap(),
        "CTATCGGGCACCCTTTCAGCGGCCCATTACAATGGCCAT"
    );
    assert_eq!(translate(dna).unwrap(), "MAIVMGR_KGAR_");
}

#[test]
fn test_errors_serialize_to_readable_messages() {
    let err = translate("AT").unwrap_err();
    assert!(err.to_string().contains("multiple de trois"));

    let err = reverse_complement("AXG").unwrap_err();
    assert!(err.to_string().contains("'X'"));
}

#[test]
fn test_typed_sequence_json() {
    let seq = DnaSequence::parse("ACGT").unwrap();
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, r#"{"bases":["A","C","G","T"]}"#);
}
