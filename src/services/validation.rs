use serde_json::Value;
use tracing::debug;

use crate::models::alcohol::Alcohol;
use crate::models::cocktail::{Cocktail, RequiredIngredient};
use crate::models::submission::{CocktailRef, Submission};
use crate::models::verdict::Verdict;
use crate::services::amount::parse_amount;
use crate::services::catalog::AlcoholIndex;
use crate::services::glassware;

const MISSING_COCKTAIL_ID: &str = "Brak cocktailId.";
const INVALID_COCKTAIL_ID: &str = "Nieprawidłowy cocktailId.";
const COCKTAIL_NOT_FOUND: &str = "Nie znaleziono koktajlu.";
const UNKNOWN_INGREDIENT_LABEL: &str = "Nieznany składnik";

/// A catalog category that may stand in for a recipe category.
///
/// The catalog side is broader than the recipe side, so the relation is
/// one-directional: `catalog` satisfies `required`, not the other way round.
struct TypeRelaxation {
    required: &'static str,
    catalog: &'static str,
}

const TYPE_RELAXATIONS: &[TypeRelaxation] = &[
    TypeRelaxation { required: "Other", catalog: "Inne" },
    TypeRelaxation { required: "Soft", catalog: "Inne" },
    TypeRelaxation { required: "Likier", catalog: "Likier" },
];

/// Whether a catalog ingredient of type `actual` may fill a slot of type `required`.
pub fn types_compatible(required: Option<&str>, actual: Option<&str>) -> bool {
    if required == actual {
        return true;
    }
    match (required, actual) {
        (Some(required), Some(actual)) => TYPE_RELAXATIONS
            .iter()
            .any(|r| r.required == required && r.catalog == actual),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrandCheck {
    /// The recipe line names no brand.
    Unconstrained,
    Matched,
    /// A different brand than the one the recipe names.
    Substituted,
}

fn check_brand(required: Option<&str>, alcohol: &Alcohol) -> BrandCheck {
    let Some(required) = required else {
        return BrandCheck::Unconstrained;
    };
    let actual = alcohol.brand.as_deref().unwrap_or_default().to_lowercase();
    if actual.contains(&required.to_lowercase()) {
        BrandCheck::Matched
    } else {
        BrandCheck::Substituted
    }
}

/// Submitted line after dropping empty ids and parsing the amount.
#[derive(Debug, Clone, PartialEq)]
struct NormalizedIngredient<'s> {
    id: &'s str,
    amount: Option<f64>,
}

fn normalize(submission: &Submission) -> Vec<NormalizedIngredient<'_>> {
    submission
        .ingredients
        .iter()
        .filter_map(|item| {
            let id = item.id.as_deref().filter(|id| !id.is_empty())?;
            Some(NormalizedIngredient {
                id,
                amount: parse_amount(item.amount.as_deref()),
            })
        })
        .collect()
}

/// Grade a raw JSON payload. Malformed payloads yield a failing verdict, never an error.
pub fn evaluate_payload(payload: &Value, cocktails: &[Cocktail], alcohols: &[Alcohol]) -> Verdict {
    evaluate(&Submission::from_payload(payload), cocktails, alcohols)
}

/// Grade a submission against the reference cocktail it names.
///
/// Checks, in order:
/// - Cocktail resolution (terminal: a single error and nothing else)
/// - Preparation method (exact, case-sensitive)
/// - Glassware, when the recipe sets one
/// - Ingredient count
/// - Each required ingredient: type, brand, amount
///
/// All checks after resolution accumulate; nothing short-circuits.
pub fn evaluate(submission: &Submission, cocktails: &[Cocktail], alcohols: &[Alcohol]) -> Verdict {
    // ── Cocktail Resolution ──────────────────────────────────────────
    let cocktail_id = match submission.cocktail {
        CocktailRef::Id(id) => Some(id),
        // Well-formed but beyond any stored id
        CocktailRef::OutOfRange => None,
        CocktailRef::Missing => {
            debug!("Submission without cocktailId");
            return Verdict::rejected(MISSING_COCKTAIL_ID);
        }
        CocktailRef::Invalid => {
            debug!("Submission with unparseable cocktailId");
            return Verdict::rejected(INVALID_COCKTAIL_ID);
        }
    };

    let Some(cocktail) = cocktail_id.and_then(|id| cocktails.iter().find(|c| c.id == id)) else {
        debug!(?cocktail_id, "Submission for unknown cocktail");
        return Verdict::rejected(COCKTAIL_NOT_FOUND);
    };

    let index = AlcoholIndex::new(alcohols);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // ── Method ───────────────────────────────────────────────────────
    if let Some(method) = cocktail.method.as_deref() {
        if submission.method.as_deref() != Some(method) {
            errors.push(format!("Błędna metoda przyrządzania. Powinno być: {}", method));
        }
    }

    // ── Glassware ────────────────────────────────────────────────────
    if let Some(glass) = cocktail.required_glassware() {
        if submission.glassware.as_deref() != Some(glass) {
            errors.push(format!("Błędne szkło. Powinno być: {}", glassware::label_for(glass)));
        }
    }

    // ── Ingredient Count ─────────────────────────────────────────────
    let expected = cocktail.ingredients.len();
    let actual = submission.ingredients.len();
    if expected != actual {
        errors.push(format!(
            "Nieprawidłowa liczba składników. Powinno być {}, jest {}.",
            expected, actual
        ));
    }

    // ── Per-Ingredient Matching ──────────────────────────────────────
    let submitted = normalize(submission);
    for required in &cocktail.ingredients {
        match find_match(required, cocktail.brand_required, &submitted, &index) {
            Some((alcohol, BrandCheck::Substituted)) => {
                warnings.push(format!(
                    "Użyto {} zamiast sugerowanego {}.",
                    alcohol.brand.as_deref().unwrap_or_default(),
                    required.brand_constraint().unwrap_or_default()
                ));
            }
            Some(_) => {}
            None => errors.push(missing_ingredient_message(required)),
        }
    }

    Verdict::new(errors, warnings)
}

/// First submitted line, in submission order, that satisfies `required`.
///
/// Lines are not consumed: the same line may satisfy several requirements.
fn find_match<'a>(
    required: &RequiredIngredient,
    brand_required: bool,
    submitted: &[NormalizedIngredient<'_>],
    index: &AlcoholIndex<'a>,
) -> Option<(&'a Alcohol, BrandCheck)> {
    let required_brand = required.brand_constraint();

    submitted.iter().find_map(|line| {
        let alcohol = index.get(line.id)?;

        if !types_compatible(required.kind.as_deref(), alcohol.kind.as_deref()) {
            return None;
        }

        let brand = check_brand(required_brand, alcohol);
        if brand_required && brand == BrandCheck::Substituted {
            return None;
        }

        if let Some(amount) = required.amount {
            if line.amount != Some(amount) {
                return None;
            }
        }

        Some((alcohol, brand))
    })
}

fn missing_ingredient_message(required: &RequiredIngredient) -> String {
    let label = required.label.as_deref().unwrap_or(UNKNOWN_INGREDIENT_LABEL);
    match (required.amount, required.unit_label()) {
        (Some(amount), Some(unit)) => {
            format!("Brakuje lub błędny składnik: {} ({} {})", label, amount, unit)
        }
        _ => format!("Brakuje lub błędny składnik: {}", label),
    }
}
