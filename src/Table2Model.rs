/// eng
/// Assembles the model: creates the placeholder compartment, switches the model
/// to strict flux-balance semantics, installs the units, reads the metabolite
/// table and then the reaction table, removes metabolites that no equation
/// placed in a real compartment together with the placeholder compartment,
/// and stamps authorship and provenance.
/// Example
/// ```rust, ignore
/// use table2model::Table2Model::assembler::build_model;
/// use table2model::converter_config::ConverterConfig;
/// let (model, report) = build_model(
///     Path::new("metabolites.csv"),
///     Path::new("reactions.csv"),
///     &ConverterConfig::default(),
/// )?;
/// model.pretty_print_summary();
/// ```
pub mod assembler;
/// the model under construction and its per-build state
pub mod model_builder;
pub mod provenance;
