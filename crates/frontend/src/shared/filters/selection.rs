use contracts::domain::{CategoryNode, LocationLevel};

/// Selection state of the listings view.
///
/// Location slugs are stored in a table indexed by [`LocationLevel`], and
/// every mutation that touches level *k* clears all deeper levels by
/// walking that table. The cascade invariant (no selected level under an
/// unselected one) therefore holds by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    locations: [Option<String>; 4],
    category_id: Option<i64>,
    subcategory_id: Option<i64>,
    category_slug: Option<String>,
    pub search_text: String,
    pub min_price: String,
    pub max_price: String,
}

impl FilterState {
    pub fn location(&self, level: LocationLevel) -> Option<&str> {
        self.locations[level as usize].as_deref()
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    pub fn subcategory_id(&self) -> Option<i64> {
        self.subcategory_id
    }

    /// Slug of the active category filter: the subcategory's slug when one
    /// is selected, otherwise the top-level category's.
    pub fn category_slug(&self) -> Option<&str> {
        self.category_slug.as_deref()
    }

    fn ancestors_selected(&self, level: LocationLevel) -> bool {
        let mut cursor = level.parent();
        while let Some(l) = cursor {
            if self.locations[l as usize].is_none() {
                return false;
            }
            cursor = l.parent();
        }
        true
    }

    /// Clear `level` and every level deeper than it.
    fn clear_from(&mut self, level: LocationLevel) {
        for l in LocationLevel::ALL {
            if l >= level {
                self.locations[l as usize] = None;
            }
        }
    }

    /// Select (`Some`) or clear (`None`) one location level.
    ///
    /// Returns `false` and leaves the state untouched when a required
    /// ancestor is unselected — a city must never exist without its
    /// district and state. Selecting always clears the deeper levels
    /// first, whether or not a new slug is set.
    pub fn select_location(&mut self, level: LocationLevel, slug: Option<&str>) -> bool {
        if !self.ancestors_selected(level) {
            return false;
        }
        self.clear_from(level);
        match slug {
            Some(s) if !s.is_empty() => {
                self.locations[level as usize] = Some(s.to_string());
            }
            _ => {}
        }
        true
    }

    /// Select a category node. A top-level node becomes the category and
    /// drops any subcategory; a child node selects its parent as the
    /// category and itself as the subcategory. The node's own slug drives
    /// the path and query either way.
    pub fn select_category(&mut self, node: &CategoryNode) {
        match node.parent_id {
            None => {
                self.category_id = Some(node.id);
                self.subcategory_id = None;
            }
            Some(parent) => {
                self.category_id = Some(parent);
                self.subcategory_id = Some(node.id);
            }
        }
        self.category_slug = Some(node.slug.clone());
    }

    pub fn clear_category(&mut self) {
        self.category_id = None;
        self.subcategory_id = None;
        self.category_slug = None;
    }

    /// True when no selected level sits under an unselected one.
    pub fn cascade_invariant_holds(&self) -> bool {
        let mut gap = false;
        for l in LocationLevel::ALL {
            match &self.locations[l as usize] {
                Some(_) if gap => return false,
                Some(_) => {}
                None => gap = true,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: i64, parent_id: Option<i64>, slug: &str) -> CategoryNode {
        CategoryNode {
            id,
            name: slug.to_string(),
            parent_id,
            slug: slug.to_string(),
        }
    }

    fn full_selection() -> FilterState {
        let mut s = FilterState::default();
        assert!(s.select_location(LocationLevel::State, Some("karnataka")));
        assert!(s.select_location(LocationLevel::District, Some("mysore-district")));
        assert!(s.select_location(LocationLevel::City, Some("mysore")));
        assert!(s.select_location(LocationLevel::Locality, Some("vv-mohalla")));
        s
    }

    #[test]
    fn test_child_without_parent_is_rejected() {
        let mut s = FilterState::default();
        assert!(!s.select_location(LocationLevel::City, Some("mysore")));
        assert_eq!(s, FilterState::default());

        assert!(s.select_location(LocationLevel::State, Some("karnataka")));
        assert!(!s.select_location(LocationLevel::City, Some("mysore")));
        assert_eq!(s.location(LocationLevel::City), None);
    }

    #[test]
    fn test_changing_ancestor_cascades() {
        let mut s = full_selection();
        assert!(s.select_location(LocationLevel::District, Some("udupi-district")));
        assert_eq!(s.location(LocationLevel::State), Some("karnataka"));
        assert_eq!(s.location(LocationLevel::District), Some("udupi-district"));
        assert_eq!(s.location(LocationLevel::City), None);
        assert_eq!(s.location(LocationLevel::Locality), None);
    }

    #[test]
    fn test_clearing_state_clears_everything() {
        let mut s = full_selection();
        assert!(s.select_location(LocationLevel::State, None));
        for level in LocationLevel::ALL {
            assert_eq!(s.location(level), None);
        }
    }

    #[test]
    fn test_empty_slug_counts_as_clear() {
        let mut s = full_selection();
        assert!(s.select_location(LocationLevel::District, Some("")));
        assert_eq!(s.location(LocationLevel::District), None);
        assert_eq!(s.location(LocationLevel::City), None);
    }

    #[test]
    fn test_invariant_holds_across_mutation_sequences() {
        let mut s = FilterState::default();
        let steps: [(LocationLevel, Option<&str>); 8] = [
            (LocationLevel::Locality, Some("x")),
            (LocationLevel::State, Some("karnataka")),
            (LocationLevel::District, Some("mysore-district")),
            (LocationLevel::City, Some("mysore")),
            (LocationLevel::Locality, Some("vv-mohalla")),
            (LocationLevel::District, None),
            (LocationLevel::City, Some("mysore")),
            (LocationLevel::State, Some("goa")),
        ];
        for (level, slug) in steps {
            s.select_location(level, slug);
            assert!(s.cascade_invariant_holds(), "violated after {:?}", level);
            if s.location(LocationLevel::Locality).is_some() {
                assert!(s.location(LocationLevel::City).is_some());
                assert!(s.location(LocationLevel::District).is_some());
                assert!(s.location(LocationLevel::State).is_some());
            }
        }
    }

    #[test]
    fn test_select_top_level_category_clears_subcategory() {
        let mut s = FilterState::default();
        s.select_category(&node(11, Some(1), "phones"));
        assert_eq!(s.category_id(), Some(1));
        assert_eq!(s.subcategory_id(), Some(11));
        assert_eq!(s.category_slug(), Some("phones"));

        s.select_category(&node(2, None, "furniture"));
        assert_eq!(s.category_id(), Some(2));
        assert_eq!(s.subcategory_id(), None);
        assert_eq!(s.category_slug(), Some("furniture"));
    }

    #[test]
    fn test_clear_category() {
        let mut s = FilterState::default();
        s.select_category(&node(1, None, "electronics"));
        s.clear_category();
        assert_eq!(s.category_id(), None);
        assert_eq!(s.subcategory_id(), None);
        assert_eq!(s.category_slug(), None);
    }
}
