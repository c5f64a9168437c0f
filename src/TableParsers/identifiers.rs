/// Turns free-text abbreviations from the tables into symbolic identifiers:
/// only ASCII letters, digits and '_' survive, every other character becomes '_',
/// and the result carries a one-letter category prefix ('M' metabolites,
/// 'R' reactions, 'G' genes).
use regex::Regex;
use std::sync::LazyLock;

static INVALID_SID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());

/// replaces everything that cannot appear in an identifier by '_'
pub fn to_sid(abbreviation: &str) -> String {
    INVALID_SID_CHARS
        .replace_all(abbreviation.trim(), "_")
        .into_owned()
}

/// `glc-D` with prefix 'M' gives `M_glc_D`, `_13dpg` gives `M_13dpg`.
/// Ids that already start with `{prefix}_` are returned as they are, so
/// normalizing twice changes nothing. The price is that a raw abbreviation
/// spelled with the prefix collides with the bare one: `M_x` and `x` both
/// give `M_x`, and the row read second is reported as a duplicate id.
pub fn to_id(abbreviation: &str, prefix: char) -> String {
    let id = to_sid(abbreviation);
    let mut prefixed = String::with_capacity(id.len() + 2);
    prefixed.push(prefix);
    prefixed.push('_');
    if id.starts_with(&prefixed) {
        id
    } else if id.starts_with('_') {
        prefixed.pop();
        prefixed + &id
    } else {
        prefixed + &id
    }
}
