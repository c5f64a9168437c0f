use super::annotations::Annotation;
use super::units::UnitDefinition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named spatial partition of the model (cytosol, extracellular space...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compartment {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub constant: bool,
    pub spatial_dimensions: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Compartment {
    pub fn new(id: &str, constant: bool, name: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.map(|n| n.to_string()),
            constant,
            spatial_dimensions: 3.0,
            size: None,
        }
    }
}

/// Chemical entity living in exactly one compartment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub compartment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge: Option<i32>,
    pub has_only_substance_units: bool,
    pub boundary_condition: bool,
    pub constant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_id: Option<String>,
    #[serde(skip_serializing_if = "Annotation::is_empty", default)]
    pub annotation: Annotation,
}

impl Species {
    pub fn new(id: &str, name: Option<&str>, compartment: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.map(|n| n.to_string()),
            compartment: compartment.to_string(),
            chemical_formula: None,
            charge: None,
            has_only_substance_units: false,
            boundary_condition: false,
            constant: false,
            meta_id: None,
            annotation: Annotation::new(),
        }
    }
}

/// participant of a reaction: species id and its stoichiometric coefficient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesReference {
    pub species: String,
    pub stoichiometry: f64,
    pub constant: bool,
}

impl SpeciesReference {
    pub fn new(species: &str, stoichiometry: f64) -> Self {
        Self {
            species: species.to_string(),
            stoichiometry,
            constant: true,
        }
    }
}

/// Boolean gene-protein-reaction rule. Leaves reference gene products by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Association {
    GeneProductRef(String),
    And(Vec<Association>),
    Or(Vec<Association>),
}

impl Association {
    /// ids of all referenced gene products, left to right
    pub fn gene_products(&self) -> Vec<&str> {
        match self {
            Association::GeneProductRef(id) => vec![id.as_str()],
            Association::And(children) | Association::Or(children) => {
                children.iter().flat_map(|c| c.gene_products()).collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub reversible: bool,
    pub fast: bool,
    pub reactants: Vec<SpeciesReference>,
    pub products: Vec<SpeciesReference>,
    /// set only when every participant lives in the same compartment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compartment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gene_association: Option<Association>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_flux_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_flux_bound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_id: Option<String>,
    #[serde(skip_serializing_if = "Annotation::is_empty", default)]
    pub annotation: Annotation,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

impl Reaction {
    pub fn new(id: &str, name: Option<&str>, reversible: bool) -> Self {
        Self {
            id: id.to_string(),
            name: name.map(|n| n.to_string()),
            reversible,
            fast: false,
            reactants: Vec::new(),
            products: Vec::new(),
            compartment: None,
            gene_association: None,
            lower_flux_bound: None,
            upper_flux_bound: None,
            meta_id: None,
            annotation: Annotation::new(),
            notes: Vec::new(),
        }
    }
}

mod sbml_double {
    use crate::TableParsers::sbml_values::parse_sbml_double;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if *value > 0.0 {
            serializer.serialize_str("INF")
        } else {
            serializer.serialize_str("-INF")
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Literal {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Literal::deserialize(deserializer)? {
            Literal::Number(value) => Ok(value),
            Literal::Text(text) => {
                parse_sbml_double(&text, "parameter value").map_err(serde::de::Error::custom)
            }
        }
    }
}

/// Global constant, used here for flux bounds shared between reactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    /// infinite values are written as "INF" / "-INF", JSON has no literal for them
    #[serde(with = "sbml_double")]
    pub value: f64,
    pub constant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbo_term: Option<u32>,
}

/// subsystems are the only groups built, and they are part-of groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Partonomy,
}

/// Named grouping of reactions, e.g. a subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: GroupKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbo_term: Option<u32>,
    /// ids of member reactions in the order they were attached
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneProduct {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_id: Option<String>,
    #[serde(skip_serializing_if = "Annotation::is_empty", default)]
    pub annotation: Annotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    Maximize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluxObjective {
    pub reaction: String,
    pub coefficient: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    pub objective_type: ObjectiveType,
    pub flux_objectives: Vec<FluxObjective>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub given_name: String,
    pub family_name: String,
    pub organisation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub creators: Vec<Creator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

/// The constraint-based network model under construction and, once the
/// assembler is done, the finished model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_id: Option<String>,
    /// strict flux-balance semantics: bounds are mandatory constants, stoichiometry is fixed
    pub strict: bool,
    pub unit_definitions: IndexMap<String, UnitDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substance_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent_units: Option<String>,
    pub compartments: IndexMap<String, Compartment>,
    pub species: IndexMap<String, Species>,
    pub parameters: IndexMap<String, Parameter>,
    pub reactions: IndexMap<String, Reaction>,
    pub gene_products: IndexMap<String, GeneProduct>,
    pub groups: IndexMap<String, Group>,
    pub objectives: IndexMap<String, Objective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
    #[serde(skip_serializing_if = "Annotation::is_empty", default)]
    pub annotation: Annotation,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    ///////////////////////////COMPARTMENTS////////////////////////////////
    pub fn get_compartment(&self, id: &str) -> Option<&Compartment> {
        self.compartments.get(id)
    }
    /// returns false (and keeps the existing entry) if the id is taken
    pub fn add_compartment(&mut self, compartment: Compartment) -> bool {
        if self.compartments.contains_key(&compartment.id) {
            return false;
        }
        self.compartments
            .insert(compartment.id.clone(), compartment);
        true
    }
    pub fn remove_compartment(&mut self, id: &str) -> Option<Compartment> {
        self.compartments.shift_remove(id)
    }

    ///////////////////////////SPECIES/////////////////////////////////////
    pub fn get_species(&self, id: &str) -> Option<&Species> {
        self.species.get(id)
    }
    pub fn get_species_mut(&mut self, id: &str) -> Option<&mut Species> {
        self.species.get_mut(id)
    }
    pub fn get_species_at(&self, index: usize) -> Option<&Species> {
        self.species.get_index(index).map(|(_, s)| s)
    }
    pub fn species_count(&self) -> usize {
        self.species.len()
    }
    /// returns false (and keeps the existing entry) if the id is taken
    pub fn add_species(&mut self, species: Species) -> bool {
        if self.species.contains_key(&species.id) {
            return false;
        }
        self.species.insert(species.id.clone(), species);
        true
    }
    /// removes the species at `index`, shifting later species down by one
    pub fn remove_species_at(&mut self, index: usize) -> Option<Species> {
        self.species.shift_remove_index(index).map(|(_, s)| s)
    }

    ///////////////////////////REACTIONS///////////////////////////////////
    pub fn get_reaction(&self, id: &str) -> Option<&Reaction> {
        self.reactions.get(id)
    }
    /// a reaction with an already used id replaces the old one
    pub fn add_reaction(&mut self, reaction: Reaction) -> Option<Reaction> {
        self.reactions.insert(reaction.id.clone(), reaction)
    }

    ///////////////////////////PARAMETERS//////////////////////////////////
    pub fn get_parameter(&self, id: &str) -> Option<&Parameter> {
        self.parameters.get(id)
    }
    pub fn add_parameter(&mut self, parameter: Parameter) -> bool {
        if self.parameters.contains_key(&parameter.id) {
            return false;
        }
        self.parameters.insert(parameter.id.clone(), parameter);
        true
    }

    ///////////////////////////GENE PRODUCTS///////////////////////////////
    pub fn get_gene_product(&self, id: &str) -> Option<&GeneProduct> {
        self.gene_products.get(id)
    }
    pub fn get_gene_product_mut(&mut self, id: &str) -> Option<&mut GeneProduct> {
        self.gene_products.get_mut(id)
    }

    ///////////////////////////GROUPS//////////////////////////////////////
    pub fn get_group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }
    pub fn get_group_mut(&mut self, id: &str) -> Option<&mut Group> {
        self.groups.get_mut(id)
    }

    /// true if any entity of any category already uses the id
    pub fn contains_id(&self, id: &str) -> bool {
        self.compartments.contains_key(id)
            || self.species.contains_key(id)
            || self.reactions.contains_key(id)
            || self.parameters.contains_key(id)
            || self.gene_products.contains_key(id)
            || self.groups.contains_key(id)
            || self.objectives.contains_key(id)
            || self.unit_definitions.contains_key(id)
    }

    /// first free id of the form `{prefix}_{n}`, n counting from the number of groups
    pub fn next_id(&self, prefix: &str) -> String {
        let mut n = self.groups.len() + 1;
        loop {
            let candidate = format!("{}_{}", prefix, n);
            if !self.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_species_at_keeps_order() {
        let mut model = Model::new();
        for id in ["M_a", "M_b", "M_c"] {
            assert!(model.add_species(Species::new(id, None, "d")));
        }
        let removed = model.remove_species_at(1).unwrap();
        assert_eq!(removed.id, "M_b");
        let ids: Vec<&str> = model.species.keys().map(|k| k.as_str()).collect();
        assert_eq!(ids, vec!["M_a", "M_c"]);
    }

    #[test]
    fn test_add_species_refuses_duplicate() {
        let mut model = Model::new();
        assert!(model.add_species(Species::new("M_a", Some("first"), "d")));
        assert!(!model.add_species(Species::new("M_a", Some("second"), "d")));
        assert_eq!(
            model.get_species("M_a").unwrap().name.as_deref(),
            Some("first")
        );
    }

    #[test]
    fn test_next_id_skips_taken_ids() {
        let mut model = Model::new();
        model.add_compartment(Compartment::new("group_1", true, None));
        assert_eq!(model.next_id("group"), "group_2");
    }

    #[test]
    fn test_association_gene_products() {
        let gpr = Association::Or(vec![
            Association::GeneProductRef("G_a".to_string()),
            Association::And(vec![
                Association::GeneProductRef("G_b".to_string()),
                Association::GeneProductRef("G_c".to_string()),
            ]),
        ]);
        assert_eq!(gpr.gene_products(), vec!["G_a", "G_b", "G_c"]);
    }
}
