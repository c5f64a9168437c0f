/// Identifier normalization: free-text abbreviations to prefixed symbolic ids
/// (`M_` metabolites, `R_` reactions, `G_` gene products)
pub mod identifiers;
/// numbers and booleans as they are written in the tables
pub mod sbml_values;
/// Shared contract of the two row readers and the enum dispatching over them.
/// A row reader takes one split table row and the model under construction
/// and adds one entity to it.
pub mod row_reader;
/// metabolite table rows
pub mod species_row_reader;
/// reaction table rows
pub mod reaction_row_reader;
mod reaction_row_reader_tests;
/// eng
/// Parses reaction equations like `A[c] + 2 B[c] -> C[e]` into reactants and
/// products with stoichiometric coefficients.
/// Species tokens are `base[compartment]`; the compartment is created on first
/// use and the metabolite is specialized into a compartment-scoped species
/// `M_base_compartment`, cloned from the declaration in the metabolite table.
/// If all participants live in one compartment the reaction is placed there.
pub mod equation_parser;
/// canonical flux bound parameters shared between reactions
pub mod flux_bounds;
/// subsystem label -> group cache
pub mod subsystems;
pub mod gpr_parser;
pub mod chemical_formula;
pub mod notes;
