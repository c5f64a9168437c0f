use super::model_builder::ModelBuilder;
use super::provenance::{now_utc, stamp_provenance};
use crate::NetworkModel::model::Model;
use crate::NetworkModel::units::install_cbm_units;
use crate::TableParsers::reaction_row_reader::ReactionRowReader;
use crate::TableParsers::row_reader::{RowReader, RowWarning, TableRowReader};
use crate::TableParsers::species_row_reader::SpeciesRowReader;
use crate::Utils::load_from_file::read_table;
use crate::converter_config::ConverterConfig;
use crate::errors::ConversionError;
use log::info;
use std::path::Path;

/// What happened during one build besides the model itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub metabolite_rows: usize,
    pub reaction_rows: usize,
    /// metabolites declared in the table but never used in any equation
    pub removed_species: Vec<String>,
    pub warnings: Vec<RowWarning>,
}

/// Builds a network model from a metabolite table and a reaction table.
#[derive(Debug, Clone)]
pub struct Table2Model {
    pub config: ConverterConfig,
    pub builder: ModelBuilder,
    pub species_reader: TableRowReader,
    pub reaction_reader: TableRowReader,
    pub report: BuildReport,
}

impl Table2Model {
    pub fn new(config: ConverterConfig) -> Self {
        let builder = ModelBuilder::new(&config);
        Self {
            config,
            builder,
            species_reader: SpeciesRowReader::new().into(),
            reaction_reader: ReactionRowReader::new().into(),
            report: BuildReport::default(),
        }
    }

    /// placeholder compartment, strict mode, units
    pub fn prepare(&mut self) {
        self.builder.build_placeholder_compartment();
        self.builder.model_mut().strict = true;
        install_cbm_units(self.builder.model_mut());
    }

    pub fn read_metabolites(&mut self, path: &Path) -> Result<(), ConversionError> {
        let separator = self.config.separator_byte()?;
        self.report.metabolite_rows +=
            read_table(path, separator, &mut self.species_reader, &mut self.builder)?;
        Ok(())
    }

    pub fn read_reactions(&mut self, path: &Path) -> Result<(), ConversionError> {
        let separator = self.config.separator_byte()?;
        self.report.reaction_rows +=
            read_table(path, separator, &mut self.reaction_reader, &mut self.builder)?;
        Ok(())
    }

    /// Removes every species still in the placeholder compartment, walking
    /// from the last species to the first, and then the compartment itself.
    pub fn cleanup(&mut self) {
        let placeholder = self.builder.placeholder_compartment.clone();
        let model = self.builder.model_mut();
        let mut removed = Vec::new();
        for index in (0..model.species_count()).rev() {
            let in_placeholder = model
                .get_species_at(index)
                .is_some_and(|s| s.compartment == placeholder);
            if in_placeholder {
                if let Some(species) = model.remove_species_at(index) {
                    info!(
                        "Removing species '{}' that is not used in any reaction",
                        species.id
                    );
                    removed.push(species.id);
                }
            }
        }
        model.remove_compartment(&placeholder);
        removed.reverse();
        self.report.removed_species = removed;
    }

    pub fn stamp(&mut self, modified: &str) {
        stamp_provenance(self.builder.model_mut(), &self.config.provenance, modified);
    }

    /// The whole sequence: prepare, metabolites, reactions, cleanup, provenance.
    pub fn build(
        mut self,
        metabolites: &Path,
        reactions: &Path,
    ) -> Result<(Model, BuildReport), ConversionError> {
        self.prepare();
        self.read_metabolites(metabolites)?;
        self.read_reactions(reactions)?;
        self.cleanup();
        self.stamp(&now_utc());
        self.report.warnings = self
            .species_reader
            .warnings()
            .iter()
            .chain(self.reaction_reader.warnings())
            .cloned()
            .collect();
        info!(
            "Model built: {} species, {} reactions, {} warnings",
            self.builder.model().species_count(),
            self.builder.model().reactions.len(),
            self.report.warnings.len()
        );
        Ok((self.builder.into_model(), self.report))
    }
}

/// Reads both tables with `config` and returns the finished model.
pub fn build_model(
    metabolites: &Path,
    reactions: &Path,
    config: &ConverterConfig,
) -> Result<(Model, BuildReport), ConversionError> {
    Table2Model::new(config.clone()).build(metabolites, reactions)
}
