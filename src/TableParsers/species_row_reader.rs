/// Metabolite table rows: `id; name; formula; (unused); charge`.
/// Metabolites are declared in the placeholder compartment; equations later
/// copy them into the compartments they are actually used in.
use super::chemical_formula::validate_formula;
use super::identifiers::to_id;
use super::row_reader::{ParsedEntity, RowReader, RowWarning, column, require_columns};
use super::sbml_values::parse_sbml_int;
use crate::Table2Model::model_builder::ModelBuilder;
use crate::errors::ConversionError;
use log::{info, warn};

pub const FORMULA_COLUMN: usize = 2;
pub const CHARGE_COLUMN: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct SpeciesRowReader {
    warnings: Vec<RowWarning>,
}

impl SpeciesRowReader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RowReader for SpeciesRowReader {
    fn read_row(
        &mut self,
        columns: &[&str],
        builder: &mut ModelBuilder,
    ) -> Result<ParsedEntity, ConversionError> {
        require_columns(columns, 2)?;
        let id = to_id(columns[0], 'M');
        let name = columns[1].trim();
        let placeholder = builder.placeholder_compartment.clone();
        let name = if name.is_empty() { None } else { Some(name) };
        if !builder.build_species(&id, name, &placeholder) {
            warn!("Metabolite '{}' is declared more than once; keeping the first row", id);
            self.warnings.push(RowWarning::DuplicateId { id: id.clone() });
            return Ok(ParsedEntity::Species(id));
        }

        let formula = column(columns, FORMULA_COLUMN).trim();
        let charge = column(columns, CHARGE_COLUMN).trim();
        // formula and charge are only taken together
        if !(formula.is_empty() || charge.is_empty()) {
            let formula = match validate_formula(formula) {
                Ok(formula) => Some(formula.to_string()),
                Err(e) => {
                    warn!("{} of species '{}'", e, id);
                    self.warnings.push(RowWarning::InvalidFormula {
                        species: id.clone(),
                        formula: formula.to_string(),
                    });
                    None
                }
            };
            let charge = parse_sbml_int(charge, "charge")?;
            if let Some(species) = builder.model_mut().get_species_mut(&id) {
                species.chemical_formula = formula;
                species.charge = Some(charge);
            }
        }
        info!("Parsed species '{}'", id);
        Ok(ParsedEntity::Species(id))
    }

    fn warnings(&self) -> &[RowWarning] {
        &self.warnings
    }

    fn table_name(&self) -> &'static str {
        "metabolites"
    }
}
