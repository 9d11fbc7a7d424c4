//! In-progress job card: the materials and technicians collected before a
//! submission. Lives for one editing session and is never persisted.

use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::models::line_item::LineItem;
use crate::models::technician::TechnicianRef;
use crate::utils::formatting::format_quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    /// Both lists empty (initial, and after a reset).
    Empty,
    /// At least one list holds an entry.
    Building,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    materials: Vec<LineItem>,
    technicians: Vec<TechnicianRef>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn materials(&self) -> &[LineItem] {
        &self.materials
    }

    pub fn technicians(&self) -> &[TechnicianRef] {
        &self.technicians
    }

    pub fn state(&self) -> DraftState {
        if self.materials.is_empty() && self.technicians.is_empty() {
            DraftState::Empty
        } else {
            DraftState::Building
        }
    }

    /// Append a material line.
    ///
    /// The same material may appear several times. `unit = None` picks the
    /// catalog default for the material's category. Fractional quantities are
    /// only accepted for measured materials.
    pub fn add_material(
        &mut self,
        catalog: &Catalog,
        name: &str,
        quantity: f64,
        unit: Option<&str>,
    ) -> AppResult<&LineItem> {
        let entry = catalog
            .material(name)
            .ok_or_else(|| AppError::UnknownMaterial(name.trim().to_string()))?;

        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::InvalidQuantity(format!(
                "{} for '{}': quantity must be a positive number",
                format_quantity(quantity),
                entry.name
            )));
        }

        if !entry.category.allows_fraction() && quantity.fract() != 0.0 {
            return Err(AppError::InvalidQuantity(format!(
                "{} for '{}': {} materials take whole quantities",
                format_quantity(quantity),
                entry.name,
                entry.category.as_str()
            )));
        }

        let unit = match unit {
            Some(u) => catalog
                .unit(u)
                .ok_or_else(|| AppError::UnknownUnit(u.trim().to_string()))?,
            None => catalog.default_unit(entry.category),
        };

        self.materials
            .push(LineItem::new(entry.name.clone(), quantity, unit));

        Ok(&self.materials[self.materials.len() - 1])
    }

    /// Remove the material at `index`; out of range is a no-op.
    pub fn remove_material(&mut self, index: usize) -> Option<LineItem> {
        if index < self.materials.len() {
            Some(self.materials.remove(index))
        } else {
            None
        }
    }

    /// Add a technician from the roster.
    ///
    /// Returns `Ok(false)` when the technician is already on the card.
    pub fn add_technician(&mut self, catalog: &Catalog, name: &str) -> AppResult<bool> {
        let canonical = catalog
            .technician(name)
            .ok_or_else(|| AppError::UnknownTechnician(name.trim().to_string()))?;

        if self.has_technician(canonical) {
            return Ok(false);
        }

        self.technicians.push(TechnicianRef::new(canonical));
        Ok(true)
    }

    /// Remove the technician at `index`; out of range is a no-op.
    pub fn remove_technician(&mut self, index: usize) -> Option<TechnicianRef> {
        if index < self.technicians.len() {
            Some(self.technicians.remove(index))
        } else {
            None
        }
    }

    pub fn has_technician(&self, name: &str) -> bool {
        self.technicians
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Roster entries still offered to the user (not yet on the card).
    pub fn available_technicians<'a>(&self, catalog: &'a Catalog) -> Vec<&'a str> {
        catalog
            .technicians
            .iter()
            .map(String::as_str)
            .filter(|name| !self.has_technician(name))
            .collect()
    }

    pub fn reset(&mut self) {
        self.materials.clear();
        self.technicians.clear();
    }
}

/// Parse a `NAME=QTY` or `NAME=QTY:UNIT` material argument.
pub fn parse_material_spec(spec: &str) -> AppResult<(String, f64, Option<String>)> {
    let invalid = || AppError::InvalidMaterialSpec(format!("'{spec}' (expected NAME=QTY[:UNIT])"));

    let (name, rest) = spec.rsplit_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    let (qty, unit) = match rest.split_once(':') {
        Some((q, u)) if !u.trim().is_empty() => (q, Some(u.trim().to_string())),
        Some(_) => return Err(invalid()),
        None => (rest, None),
    };

    let quantity = qty
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidQuantity(qty.trim().to_string()))?;

    Ok((name.to_string(), quantity, unit))
}
