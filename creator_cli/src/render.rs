//! Plain-text rendering of calculator descriptions, results and errors.

use creator_core::calculations::CalculatorKind;
use creator_core::validation::{FieldKind, FieldSpec, ValidationReport};
use serde_json::Value;

const RULE: &str = "═══════════════════════════════════════";

pub fn header(title: &str) {
    println!("{}", RULE);
    println!("  {}", title.to_uppercase());
    println!("{}", RULE);
    println!();
}

/// Accepted values for a field, e.g. `number 0 - 100`
pub fn describe_kind(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Number { min, max } => format!("number {} - {}", number(*min), number(*max)),
        FieldKind::Integer { min, max } => format!("whole number {} - {}", min, max),
        FieldKind::Choice { options } => format!("one of: {}", options.join(", ")),
        FieldKind::Flag => "true / false".to_string(),
    }
}

pub fn list(kinds: &[CalculatorKind]) {
    let width = kinds.iter().map(|k| k.id().len()).max().unwrap_or(0);
    for kind in kinds {
        println!("  {:<width$}  {}", kind.id(), kind.title(), width = width);
    }
}

pub fn describe(kind: CalculatorKind, defaults: &Value) {
    header(kind.title());
    println!("Id: {}", kind.id());
    println!();
    println!("Fields:");
    for spec in kind.fields() {
        print_field(spec, defaults.get(spec.name));
    }
}

fn print_field(spec: &FieldSpec, default: Option<&Value>) {
    let default = default.map(value).unwrap_or_else(|| "-".to_string());
    let optional = if spec.required { "" } else { " (optional)" };
    println!("  {}{}", spec.name, optional);
    println!("      {}; {}; default {}", spec.label, describe_kind(&spec.kind), default);
}

pub fn result(kind: CalculatorKind, input: &Value, output: &Value) {
    header(kind.title());

    println!("Inputs:");
    for spec in kind.fields() {
        if let Some(v) = input.get(spec.name) {
            println!("  {:<28} {}", spec.label, value(v));
        }
    }
    println!();

    println!("Results:");
    match output.as_object() {
        Some(object) => {
            for (key, v) in object {
                match v {
                    Value::Array(items) => {
                        println!("  {}:", key);
                        for item in items {
                            println!("    {}", value(item));
                        }
                    }
                    _ => println!("  {:<28} {}", key, value(v)),
                }
            }
        }
        None => println!("  {}", value(output)),
    }
    println!();
    println!("{}", RULE);
}

pub fn errors(report: &ValidationReport) {
    eprintln!("Input rejected:");
    for (field, message) in &report.errors {
        eprintln!("  {}: {}", field, message);
    }
}

fn number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Compact single-line form of a JSON value
pub fn value(v: &Value) -> String {
    match v {
        Value::Null => "-".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map(number).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Object(object) => match (object.get("min"), object.get("max")) {
            (Some(min), Some(max)) if object.len() == 2 => format!("{} - {}", value(min), value(max)),
            _ => object
                .iter()
                .map(|(k, v)| format!("{}={}", k, value(v)))
                .collect::<Vec<_>>()
                .join(", "),
        },
        Value::Array(items) => items.iter().map(value).collect::<Vec<_>>().join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_formats() {
        assert_eq!(value(&json!(5.0)), "5");
        assert_eq!(value(&json!(83.33)), "83.33");
        assert_eq!(value(&json!(null)), "-");
        assert_eq!(value(&json!({"min": 1200.0, "max": 12000.0})), "1200 - 12000");
        assert_eq!(value(&json!({"month": 1, "followers": 11000.0})), "followers=11000, month=1");
    }

    #[test]
    fn test_describe_kind() {
        assert_eq!(describe_kind(&FieldKind::Number { min: 0.0, max: 100.0 }), "number 0 - 100");
        assert_eq!(
            describe_kind(&FieldKind::Choice { options: &["a", "b"] }),
            "one of: a, b"
        );
    }
}
