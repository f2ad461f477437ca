// src/modules/content/application/views/section.rs

use serde::Serialize;

/// A list section of a page. When the list is empty (no data yet, or the
/// fetch fell back) the section carries its designated empty-state message
/// instead of rendering a blank region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl<T> SectionView<T> {
    pub fn new(items: Vec<T>, empty_message: &'static str) -> Self {
        let empty_message = items.is_empty().then_some(empty_message);
        Self {
            items,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_carries_its_message() {
        let section: SectionView<u8> = SectionView::new(vec![], "Nothing here yet.");
        assert!(section.items.is_empty());
        assert_eq!(section.empty_message, Some("Nothing here yet."));
    }

    #[test]
    fn populated_section_has_no_message() {
        let section = SectionView::new(vec![1, 2], "Nothing here yet.");
        assert_eq!(section.items.len(), 2);
        assert_eq!(section.empty_message, None);
    }
}
