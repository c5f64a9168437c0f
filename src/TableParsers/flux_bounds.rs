/// Flux bounds are parameters shared between reactions. Infinite, zero and
/// the conventional ±1000 defaults map to one model-wide parameter each;
/// any other value gets a parameter of its own named after the reaction.
use crate::NetworkModel::units::MMOL_PER_G_DW_PER_HR;
use crate::Table2Model::model_builder::ModelBuilder;
use log::debug;

pub const MINUS_INF: &str = "minus_inf";
pub const PLUS_INF: &str = "plus_inf";
pub const COBRA_0_BOUND: &str = "cobra_0_bound";
pub const COBRA_DEFAULT_LB: &str = "cobra_default_lb";
pub const COBRA_DEFAULT_UB: &str = "cobra_default_ub";

pub const DEFAULT_LOWER_BOUND: f64 = -1000.0;
pub const DEFAULT_UPPER_BOUND: f64 = 1000.0;

/// SBO:0000626 default flux bound
pub const SBO_DEFAULT_FLUX_BOUND: u32 = 626;
/// SBO:0000625 flux bound
pub const SBO_FLUX_BOUND: u32 = 625;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Lower,
    Upper,
}

/// Parameter id and SBO term a bound value resolves to; first match wins:
/// infinite, zero, the side's default, otherwise reaction specific.
pub fn classify_bound(value: f64, side: BoundSide, reaction_id: &str) -> (String, u32) {
    let shared = if value.is_infinite() {
        Some(match side {
            BoundSide::Lower => MINUS_INF,
            BoundSide::Upper => PLUS_INF,
        })
    } else if value == 0.0 {
        Some(COBRA_0_BOUND)
    } else {
        match side {
            BoundSide::Lower if value == DEFAULT_LOWER_BOUND => Some(COBRA_DEFAULT_LB),
            BoundSide::Upper if value == DEFAULT_UPPER_BOUND => Some(COBRA_DEFAULT_UB),
            _ => None,
        }
    };
    match shared {
        Some(id) => (id.to_string(), SBO_DEFAULT_FLUX_BOUND),
        None => {
            let suffix = match side {
                BoundSide::Lower => "lower_bound",
                BoundSide::Upper => "upper_bound",
            };
            (format!("{}_{}", reaction_id, suffix), SBO_FLUX_BOUND)
        }
    }
}

/// Returns the id of the parameter for this bound, creating it when missing.
/// An existing parameter is reused as it is: its value is never overwritten.
pub fn resolve_bound(
    builder: &mut ModelBuilder,
    value: f64,
    side: BoundSide,
    reaction_id: &str,
) -> String {
    let (id, sbo) = classify_bound(value, side, reaction_id);
    if builder.model().get_parameter(&id).is_none() {
        debug!("new flux bound parameter '{}' = {}", id, value);
    }
    builder.build_parameter(&id, value, MMOL_PER_G_DW_PER_HR, Some(sbo));
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bound() {
        let lower = |v| classify_bound(v, BoundSide::Lower, "R_X").0;
        let upper = |v| classify_bound(v, BoundSide::Upper, "R_X").0;
        assert_eq!(lower(f64::NEG_INFINITY), MINUS_INF);
        assert_eq!(upper(f64::INFINITY), PLUS_INF);
        assert_eq!(lower(0.0), COBRA_0_BOUND);
        assert_eq!(upper(-0.0), COBRA_0_BOUND);
        assert_eq!(lower(-1000.0), COBRA_DEFAULT_LB);
        assert_eq!(upper(1000.0), COBRA_DEFAULT_UB);
        // the defaults only count on their own side
        assert_eq!(lower(1000.0), "R_X_lower_bound");
        assert_eq!(upper(-1000.0), "R_X_upper_bound");
        assert_eq!(lower(-10.0), "R_X_lower_bound");
        assert_eq!(classify_bound(-10.0, BoundSide::Lower, "R_X").1, SBO_FLUX_BOUND);
        assert_eq!(classify_bound(0.0, BoundSide::Lower, "R_X").1, SBO_DEFAULT_FLUX_BOUND);
    }

    #[test]
    fn test_shared_bounds_across_reactions() {
        let mut builder = ModelBuilder::default();
        let mut ids = Vec::new();
        for r in ["R_1", "R_2", "R_3"] {
            ids.push(resolve_bound(&mut builder, -1000.0, BoundSide::Lower, r));
            ids.push(resolve_bound(&mut builder, 1000.0, BoundSide::Upper, r));
            resolve_bound(&mut builder, 0.0, BoundSide::Lower, r);
            resolve_bound(&mut builder, f64::NEG_INFINITY, BoundSide::Lower, r);
            resolve_bound(&mut builder, f64::INFINITY, BoundSide::Upper, r);
        }
        assert!(ids.iter().step_by(2).all(|id| id == COBRA_DEFAULT_LB));
        assert!(ids.iter().skip(1).step_by(2).all(|id| id == COBRA_DEFAULT_UB));
        assert_eq!(builder.model().parameters.len(), 5);
    }

    #[test]
    fn test_first_writer_wins() {
        let mut builder = ModelBuilder::default();
        let id = resolve_bound(&mut builder, f64::INFINITY, BoundSide::Upper, "R_1");
        // a later -inf upper bound still lands on plus_inf and must not overwrite it
        let again = resolve_bound(&mut builder, f64::NEG_INFINITY, BoundSide::Upper, "R_2");
        assert_eq!(id, again);
        assert_eq!(builder.model().get_parameter(PLUS_INF).unwrap().value, f64::INFINITY);
    }

    #[test]
    fn test_specific_bound_per_reaction() {
        let mut builder = ModelBuilder::default();
        let a = resolve_bound(&mut builder, 12.5, BoundSide::Upper, "R_A");
        let b = resolve_bound(&mut builder, 12.5, BoundSide::Upper, "R_B");
        assert_ne!(a, b);
        let p = builder.model().get_parameter(&a).unwrap();
        assert_eq!(p.value, 12.5);
        assert!(p.constant);
        assert_eq!(p.units.as_deref(), Some(MMOL_PER_G_DW_PER_HR));
        assert_eq!(p.sbo_term, Some(SBO_FLUX_BOUND));
    }
}
