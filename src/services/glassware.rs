//! Closed registry of glassware the practice UI offers.

use serde::Serialize;
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Glassware {
    Highball,
    Rocks,
    Cocktail,
    Wine,
    Shot,
    Margarita,
}

impl Glassware {
    pub fn id(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Glassware::Highball => "Highball",
            Glassware::Rocks => "Rocks / Old Fashioned",
            Glassware::Cocktail => "Kieliszek koktajlowy",
            Glassware::Wine => "Kieliszek do wina",
            Glassware::Shot => "Kieliszek (Shot)",
            Glassware::Margarita => "Kieliszek do margarity",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GlasswareEntry {
    pub id: String,
    pub label: String,
}

/// Every known glass, in display order.
pub fn all() -> Vec<GlasswareEntry> {
    Glassware::iter()
        .map(|g| GlasswareEntry {
            id: g.id().to_string(),
            label: g.label().to_string(),
        })
        .collect()
}

/// Human-readable name for a glassware id; unknown ids are echoed back.
pub fn label_for(id: &str) -> &str {
    match id.parse::<Glassware>() {
        Ok(glass) => glass.label(),
        Err(_) => id,
    }
}
