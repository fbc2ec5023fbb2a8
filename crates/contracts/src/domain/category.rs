use serde::{Deserialize, Serialize};

/// Flat category row as returned by `GET /categories`.
///
/// Two levels only: a top-level category has `parent_id = None`, a
/// subcategory carries the id of its top-level parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub slug: String,
}

impl CategoryNode {
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Top-level category together with its subcategories, grouped from the
/// flat list for the category bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTree {
    pub node: CategoryNode,
    pub subcategories: Vec<CategoryNode>,
}

impl CategoryTree {
    /// Group a flat category list into roots with their children.
    /// Children whose parent id matches no root are dropped.
    pub fn build(flat: &[CategoryNode]) -> Vec<CategoryTree> {
        flat.iter()
            .filter(|c| c.is_top_level())
            .map(|root| CategoryTree {
                node: root.clone(),
                subcategories: flat
                    .iter()
                    .filter(|c| c.parent_id == Some(root.id))
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

/// Look up a category by slug in the flat list.
pub fn find_by_slug<'a>(flat: &'a [CategoryNode], slug: &str) -> Option<&'a CategoryNode> {
    flat.iter().find(|c| c.slug == slug)
}

/// Placeholder categories shown when the listing service is unreachable.
pub fn placeholder_categories() -> Vec<CategoryNode> {
    [
        (1, "Electronics", None, "electronics"),
        (2, "Furniture", None, "furniture"),
        (11, "Phones", Some(1), "phones"),
        (12, "Laptops", Some(1), "laptops"),
        (21, "Chairs", Some(2), "chairs"),
        (22, "Tables", Some(2), "tables"),
    ]
    .into_iter()
    .map(|(id, name, parent_id, slug)| CategoryNode {
        id,
        name: name.to_string(),
        parent_id,
        slug: slug.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_groups_children_under_roots() {
        let flat = placeholder_categories();
        let tree = CategoryTree::build(&flat);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].node.slug, "electronics");
        assert_eq!(tree[0].subcategories.len(), 2);
        assert_eq!(tree[1].subcategories[0].slug, "chairs");
    }

    #[test]
    fn test_orphan_children_are_dropped() {
        let flat = vec![CategoryNode {
            id: 99,
            name: "Orphan".into(),
            parent_id: Some(42),
            slug: "orphan".into(),
        }];
        assert!(CategoryTree::build(&flat).is_empty());
    }

    #[test]
    fn test_find_by_slug() {
        let flat = placeholder_categories();
        assert_eq!(find_by_slug(&flat, "phones").map(|c| c.id), Some(11));
        assert!(find_by_slug(&flat, "boats").is_none());
    }
}
