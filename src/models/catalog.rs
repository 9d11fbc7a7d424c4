//! Static lists the job card is filled from: sites, technician roster,
//! material catalog, units and the material → default unit mapping.

use super::line_item::MaterialCategory;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub name: String,
    pub category: MaterialCategory,
}

impl MaterialEntry {
    fn new(name: &str, category: MaterialCategory) -> Self {
        Self {
            name: name.to_string(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub sites: Vec<String>,
    pub technicians: Vec<String>,
    pub materials: Vec<MaterialEntry>,
    pub units: Vec<String>,
    /// Default unit for `measured` materials.
    pub length_unit: String,
    /// Default unit for `discrete` materials.
    pub count_unit: String,
}

impl Default for Catalog {
    fn default() -> Self {
        use MaterialCategory::{Discrete, Measured};

        Self {
            sites: to_strings(&["Site A", "Site B", "Site C", "Other"]),
            technicians: to_strings(&["John Smith", "Jane Doe", "Alex Rivera", "Denver"]),
            materials: vec![
                MaterialEntry::new("Copper Tubing", Measured),
                MaterialEntry::new("PVC Pipe", Measured),
                MaterialEntry::new("Electrical Wire", Measured),
                MaterialEntry::new("Conduit", Measured),
                MaterialEntry::new("Sealant", Discrete),
                MaterialEntry::new("Screws", Discrete),
                MaterialEntry::new("Brackets", Discrete),
            ],
            units: to_strings(&["Units", "Meters", "Feet", "Boxes", "Rolls"]),
            length_unit: "Meters".to_string(),
            count_unit: "Units".to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Case-insensitive lookup returning the canonical spelling.
fn find<'a>(list: &'a [String], name: &str) -> Option<&'a str> {
    let needle = name.trim();
    list.iter()
        .find(|s| s.eq_ignore_ascii_case(needle))
        .map(String::as_str)
}

fn check_list(label: &str, items: &[&str]) -> AppResult<()> {
    if items.is_empty() {
        return Err(AppError::Config(format!("catalog: '{label}' list is empty")));
    }

    let mut seen = HashSet::new();
    for item in items {
        if item.trim().is_empty() {
            return Err(AppError::Config(format!(
                "catalog: '{label}' contains a blank entry"
            )));
        }
        if !seen.insert(item.to_lowercase()) {
            return Err(AppError::Config(format!(
                "catalog: duplicate entry '{item}' in '{label}'"
            )));
        }
    }
    Ok(())
}

impl Catalog {
    /// Check the catalog once at startup.
    ///
    /// - every list is non-empty, without blanks or duplicates
    /// - `length_unit` and `count_unit` are part of `units`
    pub fn validate(&self) -> AppResult<()> {
        fn as_refs(v: &[String]) -> Vec<&str> {
            v.iter().map(String::as_str).collect()
        }

        check_list("sites", &as_refs(&self.sites))?;
        check_list("technicians", &as_refs(&self.technicians))?;
        check_list("units", &as_refs(&self.units))?;

        let names: Vec<&str> = self.materials.iter().map(|m| m.name.as_str()).collect();
        check_list("materials", &names)?;

        for (label, unit) in [
            ("length_unit", &self.length_unit),
            ("count_unit", &self.count_unit),
        ] {
            if find(&self.units, unit).is_none() {
                return Err(AppError::Config(format!(
                    "catalog: {label} '{unit}' is not in the unit list"
                )));
            }
        }

        Ok(())
    }

    pub fn material(&self, name: &str) -> Option<&MaterialEntry> {
        let needle = name.trim();
        self.materials
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(needle))
    }

    pub fn default_unit(&self, category: MaterialCategory) -> &str {
        match category {
            MaterialCategory::Measured => &self.length_unit,
            MaterialCategory::Discrete => &self.count_unit,
        }
    }

    pub fn unit(&self, name: &str) -> Option<&str> {
        find(&self.units, name)
    }

    pub fn technician(&self, name: &str) -> Option<&str> {
        find(&self.technicians, name)
    }

    pub fn site(&self, name: &str) -> Option<&str> {
        find(&self.sites, name)
    }

    pub fn default_site(&self) -> &str {
        self.sites.first().map(String::as_str).unwrap_or("")
    }
}
