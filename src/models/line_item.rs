use serde::{Deserialize, Serialize};

/// How a material is counted on site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    /// Cut to length (conduit, tubing, pipe, wire): fractional quantities allowed.
    Measured,
    /// Counted pieces: integer quantities only.
    Discrete,
}

impl MaterialCategory {
    pub fn allows_fraction(&self) -> bool {
        matches!(self, MaterialCategory::Measured)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialCategory::Measured => "measured",
            MaterialCategory::Discrete => "discrete",
        }
    }
}

/// One material entry waiting in the draft.
///
/// Built only through [`crate::core::draft::Draft::add_material`], which
/// checks name, unit and quantity against the catalog. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl LineItem {
    pub(crate) fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}
