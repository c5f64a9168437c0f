/// Authorship, dates and literature/taxon references of the finished model.
/// None of it comes from the tables.
use crate::NetworkModel::annotations::Qualifier;
use crate::NetworkModel::model::{History, Model};
use crate::converter_config::ProvenanceConfig;
use chrono::{DateTime, Utc};
use std::path::Path;

/// Sets the history (creators, creation date, `modified`) and the model-level
/// `is described by` / `has taxon` cross-references.
pub fn stamp_provenance(model: &mut Model, provenance: &ProvenanceConfig, modified: &str) {
    model.history = Some(History {
        creators: provenance.creators.clone(),
        created: Some(provenance.created.clone()),
        modified: Some(modified.to_string()),
    });
    for uri in &provenance.described_by {
        model.annotation.add_resource(Qualifier::IsDescribedBy, uri);
    }
    for uri in &provenance.taxa {
        model.annotation.add_resource(Qualifier::HasTaxon, uri);
    }
}

/// Model id is the file stem of the output path, the meta id `meta_<id>`.
/// Returns the id, or None if the path has no usable stem.
pub fn set_model_id_from_path(model: &mut Model, output: &Path) -> Option<String> {
    let stem = output.file_stem()?.to_str()?;
    if stem.is_empty() {
        return None;
    }
    model.id = Some(stem.to_string());
    model.meta_id = Some(format!("meta_{}", stem));
    Some(stem.to_string())
}

/// `YYYY-MM-DDTHH:MM:SSZ`
pub fn format_utc(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn now_utc() -> String {
    format_utc(Utc::now())
}
