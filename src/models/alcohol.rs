use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ingredient record from the catalog (`alcohols.json`).
///
/// Despite the name, the catalog also carries soft drinks, syrups and juices
/// under the `Inne` type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alcohol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    // Display fields (image, volume, abv...) passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Alcohol {
    pub fn new(id: &str, kind: &str, brand: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            kind: Some(kind.to_string()),
            brand: Some(brand.to_string()),
            extra: Map::new(),
        }
    }
}
