use serde::Serialize;

/// A technician picked from the roster for the current job card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnicianRef {
    pub name: String,
}

impl TechnicianRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
