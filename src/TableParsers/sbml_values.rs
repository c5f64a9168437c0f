/// Literal parsing for table cells: numbers may be written as `INF`, `-INF`,
/// `Infinity` or `NaN` the way SBML tools print them; booleans are `true`/`1`.
use crate::errors::ConversionError;

pub fn parse_sbml_double(value: &str, context: &str) -> Result<f64, ConversionError> {
    let trimmed = value.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "inf" | "+inf" | "infinity" | "+infinity" => return Ok(f64::INFINITY),
        "-inf" | "-infinity" => return Ok(f64::NEG_INFINITY),
        "nan" => return Ok(f64::NAN),
        _ => {}
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidNumber {
            context: context.to_string(),
            value: value.to_string(),
        })
}

pub fn parse_sbml_int(value: &str, column: &'static str) -> Result<i32, ConversionError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ConversionError::InvalidInteger {
            column,
            value: value.to_string(),
        })
}

/// anything other than `true` or `1` is false
pub fn parse_sbml_boolean(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}
