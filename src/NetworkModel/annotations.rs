/// Controlled-vocabulary cross-references attached to model entities
/// (identifiers.org URIs grouped by a biological or model qualifier).
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    /// bqbiol:is
    Is,
    /// bqbiol:isDescribedBy
    IsDescribedBy,
    /// bqbiol:hasTaxon
    HasTaxon,
    /// bqbiol:isEncodedBy
    IsEncodedBy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvTerm {
    pub qualifier: Qualifier,
    pub resources: Vec<String>,
}

impl CvTerm {
    pub fn new(qualifier: Qualifier, resource: &str) -> Self {
        Self {
            qualifier,
            resources: vec![resource.to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub cv_terms: Vec<CvTerm>,
}

impl Annotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cv_terms.is_empty()
    }

    /// appends a separate term, even if one with the same qualifier exists
    pub fn add_cv_term(&mut self, term: CvTerm) {
        self.cv_terms.push(term);
    }

    /// adds the resource to the first term with this qualifier, creating the term if needed.
    /// A resource already present under that term is not repeated.
    pub fn add_resource(&mut self, qualifier: Qualifier, resource: &str) {
        match self.cv_terms.iter_mut().find(|t| t.qualifier == qualifier) {
            Some(term) => {
                if !term.resources.iter().any(|r| r == resource) {
                    term.resources.push(resource.to_string());
                }
            }
            None => self.cv_terms.push(CvTerm::new(qualifier, resource)),
        }
    }

    /// all resources filed under the qualifier, in insertion order
    pub fn resources(&self, qualifier: Qualifier) -> Vec<&str> {
        self.cv_terms
            .iter()
            .filter(|t| t.qualifier == qualifier)
            .flat_map(|t| t.resources.iter().map(|r| r.as_str()))
            .collect()
    }
}
