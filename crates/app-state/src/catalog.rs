//! Section catalog
//!
//! The showroom list is driven by an ordered, immutable catalog of sections.
//! Each section has a header and a list of labeled use cases. The catalog is
//! built once at startup and handed to whoever needs it.

use serde::{Deserialize, Serialize};

/// A single showroom section (one demo component)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name, shown as the header
    pub name: String,
    /// Short description rendered under the header
    #[serde(default)]
    pub description: String,
    /// Use case labels in display order
    #[serde(default)]
    pub use_cases: Vec<String>,
}

impl Section {
    /// Create a section without use cases
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            use_cases: Vec::new(),
        }
    }

    /// Append a use case label
    pub fn with_use_case(mut self, label: impl Into<String>) -> Self {
        self.use_cases.push(label.into());
        self
    }

    /// Number of use cases in this section
    pub fn use_case_count(&self) -> usize {
        self.use_cases.len()
    }
}

/// Ordered, immutable collection of sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionCatalog {
    sections: Vec<Section>,
}

impl SectionCatalog {
    /// Build a catalog from sections
    pub fn new(sections: impl IntoIterator<Item = Section>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the catalog has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get a section by index
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// All sections in order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Iterate sections with their indices
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Section)> {
        self.sections.iter().enumerate()
    }

    /// Check that `item_index` addresses the header (0) or an existing use case
    pub fn contains(&self, section_index: usize, item_index: usize) -> bool {
        self.get(section_index)
            .is_some_and(|section| item_index <= section.use_case_count())
    }

    /// Total number of rows when flattened (one header per section plus use cases)
    pub fn flattened_len(&self) -> usize {
        self.sections.iter().map(|s| 1 + s.use_case_count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SectionCatalog {
        SectionCatalog::new([
            Section::new("A", "first").with_use_case("a1").with_use_case("a2"),
            Section::new("B", "second").with_use_case("b1"),
        ])
    }

    #[test]
    fn test_contains_header_and_use_cases() {
        let catalog = catalog();
        assert!(catalog.contains(0, 0));
        assert!(catalog.contains(0, 2));
        assert!(!catalog.contains(0, 3));
        assert!(catalog.contains(1, 1));
        assert!(!catalog.contains(2, 0));
    }

    #[test]
    fn test_flattened_len() {
        assert_eq!(catalog().flattened_len(), 5);
        assert_eq!(SectionCatalog::default().flattened_len(), 0);
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"[{"name":"Toggle","use_cases":["Variants","Statuses"]}]"#;
        let catalog: SectionCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().description, "");
        assert_eq!(catalog.get(0).unwrap().use_case_count(), 2);
    }
}
