/// Reaction equations of the reaction table, e.g.
/// `glc-D[e] + pep[c] -> g6p[c] + pyr[c]` or `2 h[c] + nadh[c] <=> nad[c] + h2[c]`.
///
/// Tokens are separated by whitespace and read left to right:
/// - `->` (irreversible) or `<=>` (reversible) switches from reactants to products;
/// - `id[compartment]` is a participant;
/// - `+` separates participants;
/// - anything else is the stoichiometric coefficient of the next participant (default 1).
///
/// Every participant is a compartment-scoped species `M_<id>_<compartment>`.
/// Compartments are created on first sight; scoped species are copied from the
/// metabolite declared in the placeholder compartment, or created from scratch
/// (with a warning) if the metabolite table never declared them.
use crate::NetworkModel::model::{Species, SpeciesReference};
use crate::Table2Model::model_builder::ModelBuilder;
use crate::TableParsers::identifiers::to_id;
use crate::TableParsers::sbml_values::parse_sbml_double;
use crate::errors::ConversionError;
use indexmap::IndexSet;
use log::{info, warn};

pub const REVERSIBLE_ARROW: &str = "<=>";
pub const IRREVERSIBLE_ARROW: &str = "->";

/// Non-fatal findings of the equation parser. Each is also logged.
#[derive(Debug, Clone, PartialEq)]
pub enum EquationWarning {
    /// the declared reversibility flag contradicts the arrow of the equation
    ReversibilityConflict {
        reaction: String,
        declared_reversible: bool,
        arrow: String,
    },
    /// a species used in the equation was never declared as a metabolite
    UndeclaredSpecies { species: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedEquation {
    pub reactants: Vec<SpeciesReference>,
    pub products: Vec<SpeciesReference>,
    /// the single compartment all participants share, if there is one
    pub compartment: Option<String>,
    pub warnings: Vec<EquationWarning>,
}

impl ParsedEquation {
    pub fn reversibility_conflicts(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, EquationWarning::ReversibilityConflict { .. }))
            .count()
    }
}

/// Outcome of resolving a (metabolite, compartment) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// the scoped species already existed
    Existing,
    /// copied from the metabolite declared in the placeholder compartment
    Specialized,
    /// the metabolite table declared the scoped id itself; that species is
    /// moved out of the placeholder compartment
    Adopted,
    /// created from nothing: the metabolite table does not know it
    Implicit,
}

/// id of the species `base_id` (already normalized) in compartment `compartment_id`
pub fn scoped_species_id(base_id: &str, compartment_id: &str) -> String {
    format!("{}_{}", base_id, compartment_id)
}

/// Resolves `base_id` in `compartment_id` to the compartment-scoped species,
/// creating it if necessary. The same pair always yields the same species.
/// The declared metabolite is copied, never moved: it stays in the
/// placeholder compartment until the assembler's cleanup removes it.
/// A species still sitting in the placeholder is never taken as scoped.
/// `compartment_id` must not be the placeholder itself.
pub fn resolve_scoped(
    builder: &mut ModelBuilder,
    base_id: &str,
    compartment_id: &str,
) -> (String, Resolution) {
    let scoped_id = scoped_species_id(base_id, compartment_id);
    let placeholder = builder.placeholder_compartment.clone();
    if let Some(existing) = builder.model_mut().get_species_mut(&scoped_id) {
        if existing.compartment != placeholder {
            return (scoped_id, Resolution::Existing);
        }
        existing.compartment = compartment_id.to_string();
        info!(
            "Metabolite '{}' is declared under its scoped id; placing it in compartment '{}'",
            scoped_id, compartment_id
        );
        return (scoped_id, Resolution::Adopted);
    }
    match builder.model().get_species(base_id) {
        Some(declared) => {
            let specialized = Species {
                id: scoped_id.clone(),
                compartment: compartment_id.to_string(),
                ..declared.clone()
            };
            builder.model_mut().add_species(specialized);
            (scoped_id, Resolution::Specialized)
        }
        None => {
            builder.build_species(&scoped_id, None, compartment_id);
            warn!(
                "Created species used in reaction but not declared as metabolite: {}",
                scoped_id
            );
            (scoped_id, Resolution::Implicit)
        }
    }
}

/// splits `glc-D[e]` into (`glc-D`, `e`)
fn split_species_token(token: &str) -> Result<(&str, &str), ConversionError> {
    let open = token
        .find('[')
        .ok_or_else(|| ConversionError::MalformedSpeciesToken(token.to_string()))?;
    let base = &token[..open];
    let compartment = &token[open + 1..token.len() - 1];
    if base.is_empty() || compartment.is_empty() {
        return Err(ConversionError::MalformedSpeciesToken(token.to_string()));
    }
    Ok((base, compartment))
}

/// Parses the equation of reaction `reaction_id`, creating the compartments and
/// scoped species it references. `reversible` is the declared flag of the
/// reaction: it always wins over the arrow, a mismatch is only a warning.
/// A participant tagged with the placeholder compartment is fatal, since that
/// compartment is removed once all reactions are read.
pub fn parse_equation(
    equation: &str,
    reaction_id: &str,
    reversible: bool,
    builder: &mut ModelBuilder,
) -> Result<ParsedEquation, ConversionError> {
    let mut parsed = ParsedEquation::default();
    let mut on_product_side = false;
    let mut touched_compartments: IndexSet<String> = IndexSet::new();
    let mut coeff = 1.0;

    for token in equation.split_whitespace() {
        if token == REVERSIBLE_ARROW || token == IRREVERSIBLE_ARROW {
            on_product_side = true;
            let arrow_reversible = token == REVERSIBLE_ARROW;
            if arrow_reversible != reversible {
                warn!(
                    "Reversibility flag '{}' of reaction with id '{}' conflicting with reaction equation '{}'.",
                    reversible, reaction_id, equation
                );
                parsed.warnings.push(EquationWarning::ReversibilityConflict {
                    reaction: reaction_id.to_string(),
                    declared_reversible: reversible,
                    arrow: token.to_string(),
                });
            }
            coeff = 1.0;
        } else if token.ends_with(']') {
            let (base, compartment_id) = split_species_token(token)?;
            if compartment_id == builder.placeholder_compartment {
                return Err(ConversionError::PlaceholderCompartment {
                    reaction: reaction_id.to_string(),
                    compartment: compartment_id.to_string(),
                });
            }
            let base_id = to_id(base, 'M');
            builder.build_compartment(compartment_id, true, None);
            touched_compartments.insert(compartment_id.to_string());

            let (species_id, resolution) = resolve_scoped(builder, &base_id, compartment_id);
            if resolution == Resolution::Implicit {
                parsed.warnings.push(EquationWarning::UndeclaredSpecies {
                    species: species_id.clone(),
                });
            }
            let participant = SpeciesReference::new(&species_id, coeff);
            if on_product_side {
                parsed.products.push(participant);
            } else {
                parsed.reactants.push(participant);
            }
            coeff = 1.0;
        } else if token == "+" {
            continue;
        } else {
            coeff = parse_sbml_double(
                token,
                &format!("stoichiometry of reaction '{}'", reaction_id),
            )?;
        }
    }

    if touched_compartments.len() == 1 {
        let compartment = touched_compartments.swap_remove_index(0);
        info!(
            "Reaction with id '{}' is located in the compartment with id '{}'.",
            reaction_id,
            compartment.as_deref().unwrap_or_default()
        );
        parsed.compartment = compartment;
    }
    Ok(parsed)
}
