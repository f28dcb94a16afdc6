//! Rendering of command results as text or JSON

use crate::config::OutputFormat;
use dimcalc_dimensions::{BaseDimension, DimensionVector, Evaluation};
use serde_json::{json, Map, Value};

pub fn evaluation(eval: &Evaluation, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(eval)?),
        OutputFormat::Text => {
            let mut out = if eval.formula.is_empty() {
                "dimensionless".to_string()
            } else {
                eval.formula.clone()
            };
            if !eval.matches.is_empty() {
                out.push_str(&format!(" ({})", eval.matches.join(", ")));
            }
            Ok(out)
        }
    }
}

pub fn dimensions(dims: DimensionVector, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut exponents = Map::new();
            for dim in BaseDimension::ALL {
                exponents.insert(dim.name().to_string(), Value::from(dims.get(dim)));
            }
            let doc = json!({
                "formula": dims.format(),
                "exponents": exponents,
            });
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Text => {
            let lines: Vec<String> = BaseDimension::ALL
                .iter()
                .map(|dim| format!("{}  {:<20} {:>3}", dim.symbol(), dim.name(), dims.get(*dim)))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

pub fn quantity(name: &str, formula: &str, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "name": name,
            "formula": formula,
        }))?),
        OutputFormat::Text => Ok(format!("{name}: {formula}")),
    }
}

pub fn quantities(
    entries: &[(&'static str, &'static str)],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let items: Vec<Value> = entries
                .iter()
                .map(|(name, formula)| json!({ "name": name, "formula": formula }))
                .collect();
            Ok(serde_json::to_string_pretty(&items)?)
        }
        OutputFormat::Text => {
            let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            let lines: Vec<String> = entries
                .iter()
                .map(|(name, formula)| format!("{name:<width$}  {formula}"))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimcalc_dimensions::{Evaluator, QuantityTable};

    fn eval(input: &str) -> Evaluation {
        let table = QuantityTable::builtin();
        Evaluator::new(&table).evaluate(input).unwrap()
    }

    #[test]
    fn test_text_evaluation_with_matches() {
        let out = evaluation(&eval("FORCE/AREA"), OutputFormat::Text).unwrap();
        assert_eq!(out, "M¹L⁻¹T⁻² (PRESSURE)");
    }

    #[test]
    fn test_text_evaluation_dimensionless() {
        let out = evaluation(&eval("TIME/TIME"), OutputFormat::Text).unwrap();
        assert_eq!(out, "dimensionless");
    }

    #[test]
    fn test_text_evaluation_without_matches() {
        let out = evaluation(&eval("FORCE*FORCE"), OutputFormat::Text).unwrap();
        assert_eq!(out, "M²L²T⁻⁴");
    }

    #[test]
    fn test_json_evaluation() {
        let out = evaluation(&eval("ENERGY/TIME"), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["formula"], "M¹L²T⁻³");
        assert_eq!(value["matches"], json!(["POWER"]));
    }

    #[test]
    fn test_dimensions_json() {
        let dims = DimensionVector::parse("M¹L⁻¹T⁻²");
        let out = dimensions(dims, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["exponents"]["mass"], 1);
        assert_eq!(value["exponents"]["length"], -1);
        assert_eq!(value["exponents"]["luminous intensity"], 0);
    }

    #[test]
    fn test_dimensions_text_lists_every_basis() {
        let out = dimensions(DimensionVector::ZERO, OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), 7);
        assert!(out.starts_with("M  mass"));
    }

    #[test]
    fn test_quantities_text_aligned() {
        let entries = [("AREA", "M⁰L²T⁰"), ("VELOCITY", "M⁰L¹T⁻¹")];
        let out = quantities(&entries, OutputFormat::Text).unwrap();
        assert_eq!(out, "AREA      M⁰L²T⁰\nVELOCITY  M⁰L¹T⁻¹");
    }
}
