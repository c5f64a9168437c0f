/// Reaction table rows.
/// Columns 0..=9 are mandatory: id, name, equation, gene association, genes,
/// proteins, subsystem, reversible, lower bound, upper bound.
/// Columns 10..=14 are optional: objective coefficient, confidence score (0-4),
/// EC number and two free-text notes.
use super::equation_parser::parse_equation;
use super::flux_bounds::{BoundSide, resolve_bound};
use super::gpr_parser::parse_gpr;
use super::identifiers::to_id;
use super::notes::check_notes;
use super::row_reader::{ParsedEntity, RowReader, RowWarning, column, require_columns};
use super::sbml_values::{parse_sbml_boolean, parse_sbml_double, parse_sbml_int};
use crate::NetworkModel::annotations::{CvTerm, Qualifier};
use crate::NetworkModel::model::{FluxObjective, Objective, ObjectiveType, Reaction};
use crate::Table2Model::model_builder::ModelBuilder;
use crate::errors::ConversionError;
use log::{info, warn};

pub const ID: usize = 0;
pub const NAME: usize = 1;
pub const EQUATION: usize = 2;
pub const GENE_ASSOCIATION: usize = 3;
pub const GENES: usize = 4;
pub const PROTEINS: usize = 5;
pub const SUBSYSTEM: usize = 6;
pub const REVERSIBLE: usize = 7;
pub const LOWER_BOUND: usize = 8;
pub const UPPER_BOUND: usize = 9;
pub const OBJECTIVE: usize = 10;
pub const CONFIDENCE: usize = 11;
pub const EC_NUMBER: usize = 12;
pub const NOTES: [usize; 2] = [13, 14];
pub const MANDATORY_COLUMNS: usize = 10;

pub const OBJECTIVE_ID: &str = "obj";

/// Evidence Ontology terms for confidence scores 0..=4
pub const CONFIDENCE_ECO_TERMS: [u32; 5] = [1, 5551, 44, 73, 2];

pub fn eco_term(confidence: i32) -> Option<u32> {
    usize::try_from(confidence)
        .ok()
        .and_then(|i| CONFIDENCE_ECO_TERMS.get(i).copied())
}

pub fn eco_uri(term: u32) -> String {
    format!("https://identifiers.org/eco/ECO:{:07}", term)
}

pub fn ec_code_uri(ec_number: &str) -> String {
    format!("https://identifiers.org/ec-code/{}", ec_number)
}

pub fn kegg_gene_uri(organism: &str, gene: &str) -> String {
    format!("https://identifiers.org/kegg.genes/{}:{}", organism, gene)
}

#[derive(Debug, Clone, Default)]
pub struct ReactionRowReader {
    warnings: Vec<RowWarning>,
}

impl ReactionRowReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs gene i with protein i. Extra genes get no protein name and extra
    /// proteins are ignored. Lists of different length usually mean a
    /// misaligned row, but they are accepted as they are.
    fn annotate_gene_products(
        &mut self,
        reaction_id: &str,
        genes: &str,
        proteins: &str,
        builder: &mut ModelBuilder,
    ) {
        let proteins: Vec<&str> = proteins.split(' ').collect();
        let organism = builder.kegg_organism.clone();
        for (i, gene) in genes.split(' ').enumerate() {
            if gene.is_empty() {
                continue;
            }
            let id = to_id(gene, 'G');
            let Some(gene_product) = builder.model_mut().get_gene_product_mut(&id) else {
                warn!("Gene '{}' of reaction '{}' is not included in the model", gene, reaction_id);
                self.warnings.push(RowWarning::UnknownGene {
                    reaction: reaction_id.to_string(),
                    gene: gene.to_string(),
                });
                continue;
            };
            if gene_product.meta_id.is_none() {
                gene_product.meta_id = Some(format!("meta_{}", gene));
            }
            gene_product
                .annotation
                .add_resource(Qualifier::IsEncodedBy, &kegg_gene_uri(&organism, gene));
            gene_product.label = gene.to_string();
            if let Some(protein) = proteins.get(i).filter(|p| !p.is_empty()) {
                gene_product.name = Some(protein.to_string());
            }
        }
    }

    fn add_objective_term(reaction_id: &str, coefficient: f64, builder: &mut ModelBuilder) {
        let model = builder.model_mut();
        let objective = model
            .objectives
            .entry(OBJECTIVE_ID.to_string())
            .or_insert_with(|| Objective {
                id: OBJECTIVE_ID.to_string(),
                objective_type: ObjectiveType::Maximize,
                flux_objectives: Vec::new(),
            });
        objective.flux_objectives.push(FluxObjective {
            reaction: reaction_id.to_string(),
            coefficient,
        });
        model.active_objective = Some(OBJECTIVE_ID.to_string());
    }
}

impl RowReader for ReactionRowReader {
    fn read_row(
        &mut self,
        columns: &[&str],
        builder: &mut ModelBuilder,
    ) -> Result<ParsedEntity, ConversionError> {
        require_columns(columns, MANDATORY_COLUMNS)?;
        let id = to_id(columns[ID], 'R');
        if builder.model().get_reaction(&id).is_some() {
            warn!("Reaction '{}' is declared more than once; keeping the first row", id);
            self.warnings.push(RowWarning::DuplicateId { id: id.clone() });
            return Ok(ParsedEntity::Reaction(id));
        }
        let name = columns[NAME].trim();
        let reversible = parse_sbml_boolean(columns[REVERSIBLE]);
        let mut reaction = Reaction::new(&id, (!name.is_empty()).then_some(name), reversible);

        let equation = parse_equation(columns[EQUATION], &id, reversible, builder)?;
        self.warnings
            .extend(equation.warnings.into_iter().map(RowWarning::Equation));
        reaction.reactants = equation.reactants;
        reaction.products = equation.products;
        reaction.compartment = equation.compartment;

        let gpr = columns[GENE_ASSOCIATION].trim();
        if !gpr.is_empty() {
            reaction.gene_association = Some(parse_gpr(gpr, builder.model_mut())?);
        }

        let genes = columns[GENES].trim();
        if !genes.is_empty() {
            self.annotate_gene_products(&id, genes, columns[PROTEINS].trim(), builder);
        }

        let subsystem = columns[SUBSYSTEM].trim();
        builder
            .subsystems
            .attach_subsystem(&mut builder.model, &id, subsystem);

        for (index, side) in [(LOWER_BOUND, BoundSide::Lower), (UPPER_BOUND, BoundSide::Upper)] {
            let text = columns[index].trim();
            if text.is_empty() {
                continue;
            }
            let value = parse_sbml_double(text, &format!("flux bound of reaction '{}'", id))?;
            let parameter = resolve_bound(builder, value, side, &id);
            match side {
                BoundSide::Lower => reaction.lower_flux_bound = Some(parameter),
                BoundSide::Upper => reaction.upper_flux_bound = Some(parameter),
            }
        }

        let objective = column(columns, OBJECTIVE).trim();
        if !objective.is_empty() {
            let coefficient =
                parse_sbml_double(objective, &format!("objective coefficient of reaction '{}'", id))?;
            if coefficient != 0.0 {
                Self::add_objective_term(&id, coefficient, builder);
            }
        }

        let confidence = column(columns, CONFIDENCE).trim();
        if !confidence.is_empty() {
            let score = parse_sbml_int(confidence, "confidence score")?;
            match eco_term(score) {
                Some(term) => reaction
                    .annotation
                    .add_resource(Qualifier::Is, &eco_uri(term)),
                None => info!("Confidence score {} of reaction '{}' has no evidence code", score, id),
            }
        }

        let ec_number = column(columns, EC_NUMBER).trim();
        if !ec_number.is_empty() {
            reaction.meta_id = Some(format!("meta_{}", id));
            reaction
                .annotation
                .add_cv_term(CvTerm::new(Qualifier::Is, &ec_code_uri(ec_number)));
        }

        for index in NOTES {
            let note = column(columns, index).trim();
            if note.is_empty() {
                continue;
            }
            match check_notes(note) {
                Ok(()) => reaction.notes.push(note.to_string()),
                Err(e) => {
                    warn!("Skipping notes of reaction '{}': {}", id, e);
                    self.warnings.push(RowWarning::MalformedNotes {
                        reaction: id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        builder.model_mut().add_reaction(reaction);
        info!("Parsed reaction '{}'", id);
        Ok(ParsedEntity::Reaction(id))
    }

    fn warnings(&self) -> &[RowWarning] {
        &self.warnings
    }

    fn table_name(&self) -> &'static str {
        "reactions"
    }
}
