use super::equation_parser::EquationWarning;
use super::reaction_row_reader::ReactionRowReader;
use super::species_row_reader::SpeciesRowReader;
use crate::Table2Model::model_builder::ModelBuilder;
use crate::errors::ConversionError;
use enum_dispatch::enum_dispatch;

/// Entity a row was turned into, by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEntity {
    Species(String),
    Reaction(String),
}

/// Recoverable problems found while reading rows. Each one is logged as a
/// warning when it happens and kept so that callers can report on them.
#[derive(Debug, Clone, PartialEq)]
pub enum RowWarning {
    Equation(EquationWarning),
    /// the gene list names a gene without a gene product
    UnknownGene { reaction: String, gene: String },
    MalformedNotes { reaction: String, reason: String },
    InvalidFormula { species: String, formula: String },
    /// a second row with an id that is already taken; the row is skipped
    DuplicateId { id: String },
}

/// One row of a table plus the model under construction in, one entity out.
#[enum_dispatch]
pub trait RowReader {
    fn read_row(
        &mut self,
        columns: &[&str],
        builder: &mut ModelBuilder,
    ) -> Result<ParsedEntity, ConversionError>;
    /// warnings collected over all rows read so far
    fn warnings(&self) -> &[RowWarning];
    fn table_name(&self) -> &'static str;
}

#[derive(Debug, Clone)]
#[enum_dispatch(RowReader)]
pub enum TableRowReader {
    Species(SpeciesRowReader),
    Reaction(ReactionRowReader),
}

/// cell `index`, or "" if the row is shorter
pub fn column<'a>(columns: &[&'a str], index: usize) -> &'a str {
    columns.get(index).copied().unwrap_or("")
}

pub fn require_columns(columns: &[&str], expected: usize) -> Result<(), ConversionError> {
    if columns.len() < expected {
        return Err(ConversionError::MissingColumns {
            expected,
            found: columns.len(),
        });
    }
    Ok(())
}
