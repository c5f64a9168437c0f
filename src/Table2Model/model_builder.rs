use crate::NetworkModel::model::{Compartment, Model, Parameter, Species};
use crate::TableParsers::subsystems::SubsystemCache;
use crate::converter_config::ConverterConfig;

/// The model under construction plus the state that lives exactly as long as
/// one build: the subsystem cache and the settings row readers need.
/// Row readers receive it by mutable reference; there is no global state.
#[derive(Debug, Clone)]
pub struct ModelBuilder {
    pub model: Model,
    pub subsystems: SubsystemCache,
    /// compartment holding metabolites until an equation places them
    pub placeholder_compartment: String,
    /// KEGG organism code for gene cross-references
    pub kegg_organism: String,
}

impl ModelBuilder {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            model: Model::new(),
            subsystems: SubsystemCache::new(),
            placeholder_compartment: config.placeholder_compartment.clone(),
            kegg_organism: config.kegg_organism.clone(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }

    /// Lookup-or-create: an existing compartment with this id is returned untouched.
    pub fn build_compartment(&mut self, id: &str, constant: bool, name: Option<&str>) -> &Compartment {
        if self.model.get_compartment(id).is_none() {
            self.model
                .add_compartment(Compartment::new(id, constant, name));
        }
        &self.model.compartments[id]
    }

    /// Creates the placeholder compartment metabolites are declared in.
    pub fn build_placeholder_compartment(&mut self) {
        let id = self.placeholder_compartment.clone();
        self.build_compartment(&id, false, Some("default"));
    }

    /// Adds a species; returns false if the id is already taken (the existing one is kept)
    pub fn build_species(&mut self, id: &str, name: Option<&str>, compartment: &str) -> bool {
        self.model.add_species(Species::new(id, name, compartment))
    }

    /// Adds a constant parameter unless the id is taken; returns the stored parameter
    pub fn build_parameter(
        &mut self,
        id: &str,
        value: f64,
        units: &str,
        sbo_term: Option<u32>,
    ) -> &Parameter {
        if self.model.get_parameter(id).is_none() {
            self.model.add_parameter(Parameter {
                id: id.to_string(),
                value,
                constant: true,
                units: Some(units.to_string()),
                sbo_term,
            });
        }
        &self.model.parameters[id]
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new(&ConverterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_compartment_lookup_or_create() {
        let mut builder = ModelBuilder::default();
        builder.build_compartment("c", true, Some("cytosol"));
        let again = builder.build_compartment("c", false, None);
        assert!(again.constant);
        assert_eq!(again.name.as_deref(), Some("cytosol"));
        assert_eq!(builder.model().compartments.len(), 1);
    }

    #[test]
    fn test_build_parameter_first_writer_wins() {
        let mut builder = ModelBuilder::default();
        builder.build_parameter("cobra_0_bound", 0.0, "mmol_per_gDW_per_hr", Some(626));
        let p = builder.build_parameter("cobra_0_bound", 5.0, "mmol_per_gDW_per_hr", None);
        assert_eq!(p.value, 0.0);
        assert_eq!(p.sbo_term, Some(626));
    }

    #[test]
    fn test_placeholder_compartment() {
        let mut builder = ModelBuilder::default();
        builder.build_placeholder_compartment();
        let d = builder.model().get_compartment("d").unwrap();
        assert!(!d.constant);
        assert_eq!(d.name.as_deref(), Some("default"));
    }
}
