use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Preparation methods offered to the user, in display order.
pub const PREPARATION_METHODS: &[&str] = &[
    "Budowanie",
    "Wstrząsanie",
    "Mieszanie",
    "Muddlowanie",
    "Throwing/Rolowanie",
];

/// Reference recipe a submission is graded against (`cocktails.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Required preparation method; `None` means any method is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Required glassware identifier; `None` or empty means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glassware: Option<String>,

    /// When set, a `specificBrand` on an ingredient is a hard requirement
    /// instead of a suggestion.
    #[serde(default, deserialize_with = "null_as_false")]
    pub brand_required: bool,

    #[serde(default)]
    pub ingredients: Vec<RequiredIngredient>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl Cocktail {
    /// Glassware constraint, if the recipe actually sets one.
    pub fn required_glassware(&self) -> Option<&str> {
        self.glassware.as_deref().filter(|g| !g.is_empty())
    }
}

/// One line item of a recipe's ingredient list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredIngredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequiredIngredient {
    /// Brand constraint, ignoring empty strings.
    pub fn brand_constraint(&self) -> Option<&str> {
        self.specific_brand.as_deref().filter(|b| !b.is_empty())
    }

    /// Unit label, ignoring empty strings.
    pub fn unit_label(&self) -> Option<&str> {
        self.unit.as_deref().filter(|u| !u.is_empty())
    }
}
