//! # Converter Configuration
//!
//! ## Purpose
//! Holds everything about a conversion run that is not read from the two
//! tables: the column separator, the id of the placeholder compartment that
//! metabolites live in until an equation places them, the KEGG organism code
//! used for gene cross-references, and the authorship/provenance stamped on
//! the finished model.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "separator": ";",
//!   "placeholder_compartment": "d",
//!   "kegg_organism": "cgb",
//!   "provenance": {
//!     "creators": [
//!       { "given_name": "Yu", "family_name": "Zhang", "organisation": "..." }
//!     ],
//!     "created": "2017-06-30T12:00:00",
//!     "described_by": ["https://identifiers.org/pubmed/28680478"],
//!     "taxa": ["https://identifiers.org/taxonomy/196627"]
//!   }
//! }
//! ```
//! Every field is optional; missing fields take the defaults below.
//!
//! ## Usage
//! ```rust
//! use table2model::converter_config::ConverterConfig;
//!
//! let config = ConverterConfig::load(None).unwrap();
//! assert_eq!(config.separator, ';');
//! ```

use crate::NetworkModel::model::Creator;
use crate::errors::ConversionError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CAS_IMCAS: &str = "CAS Key Laboratory of Pathogenic Microbiology and Immunology, Institute of Microbiology, Chinese Academy of Sciences, Beijing 100101";
const BUCT: &str = "Beijing University of Chemical Technology, Beijing, 100029 China";

/// Authorship and literature/taxon references of the generated model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvenanceConfig {
    pub creators: Vec<Creator>,
    /// creation date written into the model history
    pub created: String,
    /// `is described by` resources
    pub described_by: Vec<String>,
    /// `has taxon` resources
    pub taxa: Vec<String>,
}

fn creator(given_name: &str, family_name: &str, organisation: &str) -> Creator {
    Creator {
        given_name: given_name.to_string(),
        family_name: family_name.to_string(),
        organisation: organisation.to_string(),
    }
}

impl Default for ProvenanceConfig {
    /// The published Corynebacterium glutamicum reconstruction these tables
    /// were first written for.
    fn default() -> Self {
        Self {
            creators: vec![
                creator("Yu", "Zhang", CAS_IMCAS),
                creator("Jingyi", "Cai", BUCT),
                creator("Xiuling", "Shang", CAS_IMCAS),
                creator("Bo", "Wang", CAS_IMCAS),
                creator("Shuwen", "Liu", CAS_IMCAS),
                creator("Xin", "Chai", CAS_IMCAS),
                creator("Tianwei", "Tan", BUCT),
                creator(
                    "Yun",
                    "Zhang",
                    "CAS Key Laboratory of Pathogenic Microbiology and Immunology, Institute of Microbiology, Chinese Academy of Sciences, Beijing, 100101 China",
                ),
                creator("Tingyi", "Wen", CAS_IMCAS),
            ],
            created: "2017-06-30T12:00:00".to_string(),
            described_by: vec!["https://identifiers.org/pubmed/28680478".to_string()],
            taxa: vec!["https://identifiers.org/taxonomy/196627".to_string()],
        }
    }
}

/// Settings of one conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub separator: char,
    pub placeholder_compartment: String,
    pub kegg_organism: String,
    pub provenance: ProvenanceConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            separator: ';',
            placeholder_compartment: "d".to_string(),
            kegg_organism: "cgb".to_string(),
            provenance: ProvenanceConfig::default(),
        }
    }
}

impl ConverterConfig {
    /// Loads the configuration from a JSON file. Without a path, or if the
    /// file doesn't exist, the defaults are used.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConversionError> {
        match config_file {
            Some(path) if path.exists() => {
                let content =
                    fs::read_to_string(path).map_err(|e| ConversionError::io(path, e))?;
                let config: ConverterConfig = serde_json::from_str(&content).map_err(|e| {
                    ConversionError::Config(format!("'{}': {}", path.display(), e))
                })?;
                config.validate()?;
                Ok(config)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConversionError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConversionError::io(path, e))
    }

    /// the table reader splits on a single byte
    pub fn separator_byte(&self) -> Result<u8, ConversionError> {
        u8::try_from(self.separator)
            .ok()
            .filter(|b| b.is_ascii())
            .ok_or_else(|| {
                ConversionError::Config(format!(
                    "separator '{}' is not an ASCII character",
                    self.separator
                ))
            })
    }

    fn validate(&self) -> Result<(), ConversionError> {
        self.separator_byte()?;
        if self.placeholder_compartment.trim().is_empty() {
            return Err(ConversionError::Config(
                "placeholder compartment id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
