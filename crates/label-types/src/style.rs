use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An ordered set of CSS declarations.
///
/// Setting a property that is already present replaces its value in place,
/// so later patches override earlier ones without reordering the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Apply every declaration of `patch` on top of `self`.
    pub fn merge(&mut self, patch: &Style) {
        for (property, value) in &patch.declarations {
            self.set(property.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Render as an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<P: Into<String>, V: Into<String>> FromIterator<(P, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for (property, value) in &self.declarations {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}
