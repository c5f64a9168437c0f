/// Unit definitions used by constraint-based models: hours, femtolitres and
/// millimoles per gram dry weight (per hour for fluxes).
use super::annotations::{Annotation, CvTerm, Qualifier};
use super::model::Model;
use serde::{Deserialize, Serialize};

pub const HOUR: &str = "hour";
pub const F_L: &str = "fL";
pub const MMOL_PER_G_DW: &str = "mmol_per_gDW";
pub const MMOL_PER_G_DW_PER_HR: &str = "mmol_per_gDW_per_hr";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Second,
    Litre,
    Mole,
    Gram,
}

/// multiplier * (10^scale * kind)^exponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub exponent: f64,
    pub scale: i32,
    pub multiplier: f64,
}

impl Unit {
    pub fn new(multiplier: f64, scale: i32, kind: UnitKind, exponent: f64) -> Self {
        Self {
            kind,
            exponent,
            scale,
            multiplier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub id: String,
    pub name: String,
    pub units: Vec<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_id: Option<String>,
    #[serde(skip_serializing_if = "Annotation::is_empty", default)]
    pub annotation: Annotation,
}

impl UnitDefinition {
    pub fn new(id: &str, name: &str, units: Vec<Unit>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            units,
            meta_id: None,
            annotation: Annotation::new(),
        }
    }
    /// sets meta id `meta_<id>` and an `is` link to the Units Ontology
    fn with_uo_term(mut self, uo: &str) -> Self {
        self.meta_id = Some(format!("meta_{}", self.id));
        self.annotation.add_cv_term(CvTerm::new(
            Qualifier::Is,
            &format!("https://identifiers.org/{}", uo),
        ));
        self
    }
}

/// Installs the standard constraint-based modelling units and makes them the
/// model defaults for time, volume, substance and extent.
pub fn install_cbm_units(model: &mut Model) {
    let h = Unit::new(3600.0, 0, UnitKind::Second, 1.0);
    let f_l = Unit::new(1.0, -15, UnitKind::Litre, 1.0);
    let mmol = Unit::new(1.0, -3, UnitKind::Mole, 1.0);
    let per_g_dw = Unit::new(1.0, 0, UnitKind::Gram, -1.0);
    let per_h = Unit {
        exponent: -1.0,
        ..h.clone()
    };

    let definitions = vec![
        UnitDefinition::new(HOUR, HOUR, vec![h]).with_uo_term("UO:0000032"),
        UnitDefinition::new(F_L, "femto litres", vec![f_l]).with_uo_term("UO:0000104"),
        UnitDefinition::new(
            MMOL_PER_G_DW,
            "millimoles per gram dry weight",
            vec![mmol.clone(), per_g_dw.clone()],
        ),
        UnitDefinition::new(
            MMOL_PER_G_DW_PER_HR,
            "millimoles per gram dry weight per hour",
            vec![mmol, per_g_dw, per_h],
        ),
    ];
    for definition in definitions {
        model
            .unit_definitions
            .insert(definition.id.clone(), definition);
    }
    model.time_units = Some(HOUR.to_string());
    model.volume_units = Some(F_L.to_string());
    model.extent_units = Some(MMOL_PER_G_DW.to_string());
    model.substance_units = Some(MMOL_PER_G_DW.to_string());
}
