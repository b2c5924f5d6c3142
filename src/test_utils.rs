//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::ini::{Document, Entry, Section};

    /// Generate a section name in the engine's `Package.Class` style
    pub fn section_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_]{0,12}(\\.[A-Za-z][A-Za-z0-9_]{0,12})?"
    }

    /// Generate a key name
    pub fn key() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_]{0,15}"
    }

    /// Generate a single-line value (printable ASCII, may contain '=' and ';')
    pub fn value() -> impl Strategy<Value = String> {
        "[ -~]{0,24}"
    }

    /// Generate a package name
    pub fn package_name() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z0-9_]{0,20}"
    }

    /// Generate a section with distinct keys, each holding at least one value
    pub fn section() -> impl Strategy<Value = Section> {
        (
            section_name(),
            prop::collection::btree_set(key(), 0..6),
            prop::collection::vec(prop::collection::vec(value(), 1..5), 6),
        )
            .prop_map(|(name, keys, values)| {
                let mut section = Section::new(name);
                for (key, values) in keys.into_iter().zip(values) {
                    section.push(Entry::new(key, values));
                }
                section
            })
    }

    /// Generate a document of up to five sections
    pub fn document() -> impl Strategy<Value = Document> {
        prop::collection::vec(section(), 0..5).prop_map(|sections| {
            let mut doc = Document::new();
            for section in sections {
                doc.push(section);
            }
            doc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_section_name_generator(name in section_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains(']'));
            prop_assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.'));
        }

        #[test]
        fn test_value_generator_is_single_line(value in value()) {
            prop_assert!(!value.contains('\n'));
            prop_assert!(!value.contains('\r'));
        }

        #[test]
        fn test_section_generator_has_no_empty_entries(section in section()) {
            for entry in section.entries() {
                prop_assert!(!entry.values().is_empty());
                prop_assert!(!entry.key().contains('='));
            }
        }
    }
}
