/// Validation of chemical formulae from the metabolite table.
/// Accepted are element symbols (capital letter, optional lowercase letters)
/// each followed by an optional count, e.g. `C6H12O6`, `CoA`, `C21H26N7O17P3`.
/// Brackets, charges and phase marks are rejected.
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static FORMULA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Z][a-z]*[0-9]*)*$").unwrap());

#[derive(Debug, Error, PartialEq)]
#[error("invalid chemical formula '{0}'")]
pub struct InvalidFormula(pub String);

pub fn validate_formula(formula: &str) -> Result<&str, InvalidFormula> {
    let formula = formula.trim();
    if FORMULA.is_match(formula) {
        Ok(formula)
    } else {
        Err(InvalidFormula(formula.to_string()))
    }
}
