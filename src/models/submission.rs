use serde_json::Value;
use std::num::IntErrorKind;

/// How the submission refers to the cocktail being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CocktailRef {
    Missing,
    Invalid,
    /// A well-formed integer too large for any catalog id.
    OutOfRange,
    Id(i64),
}

/// One submitted ingredient line, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmittedIngredient {
    pub id: Option<String>,
    pub amount: Option<String>,
}

/// A user's attempt at a cocktail, decoded from a loosely-typed payload.
///
/// Decoding never fails: malformed fields degrade to absent values and are
/// reported by the grader instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub cocktail: CocktailRef,
    pub method: Option<String>,
    pub glassware: Option<String>,
    pub ingredients: Vec<SubmittedIngredient>,
}

impl Submission {
    /// Decode `{cocktailId, method, glassware, ingredients: [{id, amount}]}`.
    pub fn from_payload(payload: &Value) -> Self {
        let ingredients = match payload.get("ingredients") {
            Some(Value::Array(items)) => items.iter().map(SubmittedIngredient::from_value).collect(),
            _ => Vec::new(),
        };

        Self {
            cocktail: cocktail_ref(payload.get("cocktailId")),
            method: string_field(payload.get("method")),
            glassware: string_field(payload.get("glassware")),
            ingredients,
        }
    }
}

impl SubmittedIngredient {
    pub fn new(id: &str, amount: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            amount: Some(amount.to_string()),
        }
    }

    fn from_value(item: &Value) -> Self {
        // Non-object lines still count toward the submitted total
        let Value::Object(fields) = item else {
            return Self::default();
        };
        Self {
            id: scalar_text(fields.get("id")).filter(|id| !id.is_empty()),
            amount: scalar_text(fields.get("amount")),
        }
    }
}

fn cocktail_ref(value: Option<&Value>) -> CocktailRef {
    match value {
        None | Some(Value::Null) => CocktailRef::Missing,
        Some(Value::Number(n)) => {
            if let Some(id) = n.as_i64() {
                return CocktailRef::Id(id);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() => {
                    let whole = f.trunc();
                    if whole >= i64::MIN as f64 && whole < i64::MAX as f64 {
                        CocktailRef::Id(whole as i64)
                    } else {
                        CocktailRef::OutOfRange
                    }
                }
                _ => CocktailRef::Invalid,
            }
        }
        Some(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(id) => CocktailRef::Id(id),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                CocktailRef::OutOfRange
            }
            Err(_) => CocktailRef::Invalid,
        },
        Some(_) => CocktailRef::Invalid,
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Strings pass through, numbers are rendered as text, everything else is absent.
fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
