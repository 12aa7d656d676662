//! Pure predicate evaluators. Each takes already-loaded evidence and yields
//! outcomes; none of them touch the file system.

use super::RecordSample;
use crate::report::CheckOutcome;
use serde_json::Value;

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Element count of an array, or key count of an object.
pub fn collection_size(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

/// Fields of `record` that are absent or falsy, in `fields` order.
pub fn missing_fields<'a>(record: &Value, fields: &[&'a str]) -> Vec<&'a str> {
    fields
        .iter()
        .copied()
        .filter(|field| !record.get(field).is_some_and(is_truthy))
        .collect()
}

/// Tokens that do not occur in `text`, in `tokens` order.
pub fn missing_tokens<'a>(text: &str, tokens: &[&'a str]) -> Vec<&'a str> {
    tokens
        .iter()
        .copied()
        .filter(|token| !text.contains(token))
        .collect()
}

pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn existence(path: &str, exists: bool) -> CheckOutcome {
    let name = base_name(path);
    if exists {
        CheckOutcome::pass(format!("{name} exists"))
    } else {
        CheckOutcome::fail(format!("{name} is missing"))
    }
}

pub fn field_completeness(record: &Value, sample: &RecordSample) -> CheckOutcome {
    let missing = missing_fields(record, sample.fields);
    if missing.is_empty() {
        CheckOutcome::pass(sample.complete_label)
    } else {
        CheckOutcome::fail(sample.missing_label).with_detail(missing.join(", "))
    }
}

pub fn substring_difference(
    text: &str,
    tokens: &[&str],
    complete_label: &str,
    missing_label: &str,
) -> CheckOutcome {
    let missing = missing_tokens(text, tokens);
    if missing.is_empty() {
        CheckOutcome::pass(complete_label)
    } else {
        CheckOutcome::fail(missing_label).with_detail(missing.join(", "))
    }
}

/// A page passes only when every identifier is present. Which one is absent
/// is not reported.
pub fn all_of(page: &str, text: &str, identifiers: &[&str]) -> CheckOutcome {
    if identifiers.iter().all(|id| text.contains(id)) {
        CheckOutcome::pass(format!("{page} handler logic complete"))
    } else {
        CheckOutcome::fail(format!("{page} handler logic may be incomplete"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FIELDS: &[&str] = &["id", "name", "category", "family", "image"];

    #[test]
    fn truthiness_follows_javascript() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(7)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn complete_record_has_no_missing_fields() {
        let record = json!({
            "id": 1, "name": "Monstera", "category": "foliage",
            "family": "Araceae", "image": "/monstera.jpg", "extra": true
        });
        assert!(missing_fields(&record, FIELDS).is_empty());
    }

    #[test]
    fn missing_fields_keep_declared_order() {
        let record = json!({ "image": "", "name": "Fern", "id": 0, "category": "ferns" });
        assert_eq!(missing_fields(&record, FIELDS), vec!["id", "family", "image"]);
    }

    #[test]
    fn non_object_record_misses_everything() {
        assert_eq!(missing_fields(&json!("plant"), FIELDS), FIELDS.to_vec());
    }

    #[test]
    fn collection_size_counts_arrays_and_keys() {
        assert_eq!(collection_size(&json!([1, 2, 3])), Some(3));
        assert_eq!(collection_size(&json!({ "a": 1, "b": 2 })), Some(2));
        assert_eq!(collection_size(&json!("nope")), None);
    }

    #[test]
    fn substring_difference_is_ordered_set_difference() {
        let tokens = ["/home", "/search", "/recognition", "/reminder", "/plant"];
        let text = r#"<Route path="/plant/:id" /><Route path="/home" />"#;

        assert_eq!(
            missing_tokens(text, &tokens),
            vec!["/search", "/recognition", "/reminder"]
        );

        let outcome = substring_difference(text, &tokens, "All routes", "Missing routes");
        assert!(!outcome.passed);
        assert_eq!(outcome.detail.as_deref(), Some("/search, /recognition, /reminder"));

        let all = tokens.join("\n");
        let outcome = substring_difference(&all, &tokens, "All routes", "Missing routes");
        assert_eq!(outcome, CheckOutcome::pass("All routes"));
    }

    #[test]
    fn all_of_fails_on_partial_match_without_itemizing() {
        let ids = ["navigate", "onClick"];
        assert!(all_of("HomePage", "navigate('/x'); onClick={go}", &ids).passed);

        let partial = all_of("HomePage", "navigate('/x')", &ids);
        assert!(!partial.passed);
        assert_eq!(partial.detail, None);
        assert_eq!(partial.label, "HomePage handler logic may be incomplete");
    }

    #[test]
    fn existence_reports_base_name() {
        assert_eq!(
            existence("src/components/PlantCard.jsx", true).to_string(),
            "✅ PlantCard.jsx exists"
        );
        assert_eq!(
            existence("src/pages/HomePage.jsx", false).to_string(),
            "❌ HomePage.jsx is missing"
        );
    }
}
