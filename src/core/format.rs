use crate::models::line_item::LineItem;
use crate::models::technician::TechnicianRef;
use crate::utils::formatting::format_quantity;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NONE_LABEL: &str = "None Used";

/// How a material line is written into the `Materials` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStyle {
    /// `PVC Pipe (2.5 Meters)`
    #[default]
    Detailed,
    /// `Sealant x2`
    Count,
}

pub fn format_line_item(item: &LineItem, style: MaterialStyle) -> String {
    let qty = format_quantity(item.quantity);
    match style {
        MaterialStyle::Detailed => format!("{} ({} {})", item.name, qty, item.unit),
        MaterialStyle::Count => format!("{} x{}", item.name, qty),
    }
}

/// `", "`-joined material lines, or `none_label` for an empty list.
pub fn materials_summary(items: &[LineItem], style: MaterialStyle, none_label: &str) -> String {
    if items.is_empty() {
        return none_label.to_string();
    }

    items
        .iter()
        .map(|i| format_line_item(i, style))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn technicians_summary(techs: &[TechnicianRef]) -> String {
    techs
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
