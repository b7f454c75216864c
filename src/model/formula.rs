//! Chemical formula parsing.
//!
//! Accepts strings matching `^(?:[A-Z][a-z]?[0-9]*(?:\.[0-9]*)?)+$`, e.g.
//! `SiC`, `CO2`, `AuFe1.5`, `Al10.0Fe90.0` or `Fe0.1Al.9`. A missing count
//! means 1.0. Counts are not normalized here.

use super::element::Element;
use super::error::Error;

/// Parses `formula` into `(element, count)` pairs in order of appearance.
///
/// # Errors
///
/// * [`Error::Validation`] if the string does not match the grammar
/// * [`Error::UnknownElement`] for a well-formed but unknown symbol
/// * [`Error::DuplicateElement`] if a symbol appears twice
pub fn parse(formula: &str) -> Result<Vec<(Element, f64)>, Error> {
    let bytes = formula.as_bytes();
    if bytes.is_empty() {
        return Err(mismatch(formula));
    }

    let mut tokens: Vec<(&str, &str)> = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !bytes[pos].is_ascii_uppercase() {
            return Err(mismatch(formula));
        }
        let symbol_start = pos;
        pos += 1;
        if pos < bytes.len() && bytes[pos].is_ascii_lowercase() {
            pos += 1;
        }
        let symbol = &formula[symbol_start..pos];

        let count_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
        tokens.push((symbol, &formula[count_start..pos]));
    }

    let mut parsed: Vec<(Element, f64)> = Vec::with_capacity(tokens.len());
    for (symbol, count) in tokens {
        let element: Element = symbol.parse()?;
        if parsed.iter().any(|(seen, _)| *seen == element) {
            return Err(Error::DuplicateElement(element));
        }
        parsed.push((element, parse_count(formula, count)?));
    }

    Ok(parsed)
}

fn parse_count(formula: &str, text: &str) -> Result<f64, Error> {
    match text {
        "" => Ok(1.0),
        "." => Err(Error::validation(
            "chemical formula",
            format!("'{formula}' has a count with no digits"),
        )),
        _ => text.parse::<f64>().map_err(|_| mismatch(formula)),
    }
}

fn mismatch(formula: &str) -> Error {
    Error::validation(
        "chemical formula",
        format!("'{formula}' does not match the expected pattern"),
    )
}
