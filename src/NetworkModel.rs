/// Entities of a constraint-based metabolic network model: compartments,
/// compartment-scoped species, reactions with stoichiometry, flux bound
/// parameters, gene products, subsystem groups and objectives.
/// All collections are keyed by id and keep insertion order.
pub mod model;
/// identifiers.org cross-references (controlled vocabulary terms)
pub mod annotations;
/// Standard units of constraint-based models (hour, fL, mmol/gDW, mmol/gDW/h)
///
///  # Examples
/// ```
/// use table2model::NetworkModel::model::Model;
/// use table2model::NetworkModel::units::{install_cbm_units, HOUR};
/// let mut model = Model::new();
/// install_cbm_units(&mut model);
/// assert_eq!(model.time_units.as_deref(), Some(HOUR));
/// ```
pub mod units;
/// JSON export and console summary of a model
pub mod model_output;
