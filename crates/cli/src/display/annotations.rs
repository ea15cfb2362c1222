//! Tableau des annotations GO

use biotools_clients::GoAnnotation;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct AnnotationRow {
    #[tabled(rename = "GO ID")]
    go_id: String,
    #[tabled(rename = "Name")]
    go_name: String,
    #[tabled(rename = "Evidence")]
    evidence: String,
    #[tabled(rename = "Gene Product")]
    gene_product: String,
}

impl From<&GoAnnotation> for AnnotationRow {
    fn from(annotation: &GoAnnotation) -> Self {
        Self {
            go_id: annotation.go_id.clone().unwrap_or_else(|| "-".to_string()),
            go_name: annotation.go_name.clone().unwrap_or_else(|| "-".to_string()),
            evidence: annotation.field("evidenceCode").unwrap_or("-").to_string(),
            gene_product: annotation.field("geneProductId").unwrap_or("-").to_string(),
        }
    }
}

/// Affiche les annotations
pub fn print_annotation_table(annotations: &[GoAnnotation]) {
    if annotations.is_empty() {
        println!("Aucune annotation GO");
        return;
    }

    let rows: Vec<AnnotationRow> = annotations.iter().map(AnnotationRow::from).collect();
    println!("{}", Table::new(rows));
    println!("{} annotation(s)", annotations.len());
}
