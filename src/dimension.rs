//! Dimension declarations.
//!
//! A dimension names a column of a path element. Dimensions compare equal by
//! name only; the label and unit are display metadata.

use crate::Error;

/// A named key or value dimension.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Dimension {
    name: String,
    label: Option<String>,
    unit: Option<String>,
}

impl Dimension {
    /// Create a dimension with the given name and no display metadata.
    pub fn new(name: impl Into<String>) -> Self {
        Dimension {
            name: name.into(),
            label: None,
            unit: None,
        }
    }

    /// Attach a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach a unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// The name, which is also the column name in the stored geometries.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display label, falling back to the name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// The unit, if one was given.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// The horizontal key dimension.
    pub fn x() -> Self {
        Dimension::new(X)
    }

    /// The vertical key dimension.
    pub fn y() -> Self {
        Dimension::new(Y)
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Dimension {}

impl std::hash::Hash for Dimension {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} ({unit})", self.label()),
            None => f.write_str(self.label()),
        }
    }
}

impl From<&str> for Dimension {
    fn from(name: &str) -> Self {
        Dimension::new(name)
    }
}

impl From<String> for Dimension {
    fn from(name: String) -> Self {
        Dimension::new(name)
    }
}

/// Column name of the horizontal coordinates.
pub const X: &str = "x";

/// Column name of the vertical coordinates.
pub const Y: &str = "y";

/// The key dimensions shared by every path element. There are always exactly two.
pub fn key_dimensions() -> [Dimension; 2] {
    [Dimension::x(), Dimension::y()]
}

/// Looks up a dimension by name, failing if it isn't declared.
pub fn lookup<'a>(dims: impl IntoIterator<Item = &'a Dimension>, name: &str) -> Result<&'a Dimension, Error> {
    dims.into_iter()
        .find(|d| d.name() == name)
        .ok_or_else(|| Error::DimensionNotFound(name.to_owned()))
}
