//! Ordered list of unique option labels
//!
//! Insertion order is angular order on the wheel.

use crate::error::WheelError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    labels: Vec<String>,
}

impl OptionList {
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Add a label (trimmed). Duplicates are an exact, case-sensitive match.
    ///
    /// Returns the index of the new option.
    pub fn add(&mut self, label: &str) -> Result<usize, WheelError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(WheelError::EmptyLabel);
        }
        if self.contains(label) {
            return Err(WheelError::DuplicateOption(label.to_string()));
        }
        self.labels.push(label.to_string());
        Ok(self.labels.len() - 1)
    }

    /// Remove every option. Clearing an empty list is a no-op.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_preserves_order() {
        let mut list = OptionList::new();
        assert_eq!(list.add("Pizza"), Ok(0));
        assert_eq!(list.add("Sushi"), Ok(1));
        assert_eq!(list.add("Tacos"), Ok(2));
        let labels: Vec<&str> = list.iter().collect();
        assert_eq!(labels, vec!["Pizza", "Sushi", "Tacos"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut list = OptionList::new();
        list.add("Pizza").unwrap();
        assert_eq!(
            list.add("Pizza"),
            Err(WheelError::DuplicateOption("Pizza".to_string()))
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicates_are_case_sensitive_after_trim() {
        let mut list = OptionList::new();
        list.add("Pizza").unwrap();
        assert!(list.add("pizza").is_ok());
        assert!(matches!(list.add("  Pizza "), Err(WheelError::DuplicateOption(_))));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_blank_label_rejected() {
        let mut list = OptionList::new();
        assert_eq!(list.add(""), Err(WheelError::EmptyLabel));
        assert_eq!(list.add("   \t"), Err(WheelError::EmptyLabel));
        assert!(list.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut list = OptionList::new();
        list.clear();
        assert!(list.is_empty());
        list.add("A").unwrap();
        list.clear();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }
}
