//! Expense records and the JSON layout they are mirrored to.
//!
//! The stored document is a JSON array of `{ id, descricao, valor, categoria }`
//! objects. English field names are accepted on read so hand-edited or
//! exported data loads as well.

use rand::RngExt;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ValidationError;

/// One logged expense. Records are never edited in place; they are created by
/// [`ExpenseStore::add`](super::ExpenseStore::add) and dropped by `remove`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    #[serde(rename = "descricao", alias = "description")]
    pub description: String,
    #[serde(rename = "valor", alias = "amount", deserialize_with = "amount_or_zero")]
    pub amount: f64,
    #[serde(rename = "categoria", alias = "category")]
    pub category: String,
}

// Older data may carry `null` where an unparsable amount used to be saved.
fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Random opaque id, 16 hex digits.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let n: u64 = rng.random();
    format!("{:016x}", n)
}

/// Parse the amount field. The whole trimmed text must be a finite number;
/// a lone `,` is read as the decimal separator (`"4,50"` is 4.5).
pub fn parse_amount(text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    let normalized = if trimmed.matches(',').count() == 1 && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidAmount(text.to_string())),
    }
}

/// Two-decimal rendering used for both row amounts and the total.
/// Exact halves round away from zero (`0.125` is `"0.13"`).
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

pub fn encode_list(records: &[ExpenseRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// Decode a stored document. Blank input is treated as an empty list.
pub fn decode_list(raw: &str) -> serde_json::Result<Vec<ExpenseRecord>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, description: &str, amount: f64, category: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: id.into(),
            description: description.into(),
            amount,
            category: category.into(),
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("4.5"), Ok(4.5));
        assert_eq!(parse_amount(" 2 "), Ok(2.0));
        assert_eq!(parse_amount("4,50"), Ok(4.5));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
        assert!(matches!(
            parse_amount("abc"),
            Err(ValidationError::InvalidAmount(t)) if t == "abc"
        ));
        assert!(parse_amount("4.5abc").is_err());
        assert!(parse_amount("1,000.50").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(6.5), "6.50");
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(0.0), "0.00");
    }

    #[test]
    fn test_format_amount_rounds_halves_up() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(0.375), "0.38");
        assert_eq!(format_amount(1.625), "1.63");
        // 2.675 is stored just below the half, so it rounds down
        assert_eq!(format_amount(2.675), "2.67");
    }

    #[test]
    fn test_encode_uses_stored_field_names() {
        let json = encode_list(&[record("1", "X", 10.0, "Y")]).unwrap();
        assert_eq!(json, r#"[{"id":"1","descricao":"X","valor":10.0,"categoria":"Y"}]"#);
    }

    #[test]
    fn test_decode_legacy_and_aliases() {
        let stored = r#"[
            {"id":"1","descricao":"X","valor":10,"categoria":"Y"},
            {"id":"2","description":"Bus","amount":2.5,"category":"Transport"},
            {"id":"3","descricao":"Broken","valor":null,"categoria":"Z"}
        ]"#;
        let list = decode_list(stored).unwrap();
        assert_eq!(
            list,
            vec![
                record("1", "X", 10.0, "Y"),
                record("2", "Bus", 2.5, "Transport"),
                record("3", "Broken", 0.0, "Z"),
            ]
        );
    }

    #[test]
    fn test_decode_blank_and_malformed() {
        assert!(decode_list("").unwrap().is_empty());
        assert!(decode_list("[]").unwrap().is_empty());
        assert!(decode_list("{not json").is_err());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let list = vec![
            record("b", "Coffee", 4.5, "Food"),
            record("a", "Bus", 2.0, "Transport"),
            record("c", "Rent", 1200.75, "Home"),
        ];
        let decoded = decode_list(&encode_list(&list).unwrap()).unwrap();
        assert_eq!(decoded, list);
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(generate_id(), generate_id());
    }
}
