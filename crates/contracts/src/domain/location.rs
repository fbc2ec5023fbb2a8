use crate::slug::slugify;
use serde::{Deserialize, Serialize};

/// One row of the region service's `{code, name}` payloads.
///
/// The service does not ship slugs, so `slug` is derived from the name on
/// deserialization boundaries via [`LocationNode::from_api`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNode {
    pub code: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

impl LocationNode {
    pub fn new(code: i64, name: &str) -> Self {
        Self {
            code,
            name: name.to_string(),
            slug: slugify(name),
        }
    }

    /// Fill in the derived slug after deserializing an API row.
    pub fn from_api(mut self) -> Self {
        if self.slug.is_empty() {
            self.slug = slugify(&self.name);
        }
        self
    }
}

/// The four geographic levels, ordered from root to leaf.
///
/// The ordering is load-bearing: cascade resets walk this table, so the
/// "clearing level k clears all deeper levels" rule holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LocationLevel {
    State,
    District,
    City,
    Locality,
}

impl LocationLevel {
    pub const ALL: [LocationLevel; 4] = [
        LocationLevel::State,
        LocationLevel::District,
        LocationLevel::City,
        LocationLevel::Locality,
    ];

    /// Query-string key for this level.
    pub fn param(&self) -> &'static str {
        match self {
            LocationLevel::State => "state",
            LocationLevel::District => "district",
            LocationLevel::City => "city",
            LocationLevel::Locality => "locality",
        }
    }

    pub fn parent(&self) -> Option<LocationLevel> {
        match self {
            LocationLevel::State => None,
            LocationLevel::District => Some(LocationLevel::State),
            LocationLevel::City => Some(LocationLevel::District),
            LocationLevel::Locality => Some(LocationLevel::City),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_derives_slug() {
        let n = LocationNode::new(7, "Dakshina Kannada");
        assert_eq!(n.slug, "dakshina-kannada");
    }

    #[test]
    fn test_from_api_keeps_existing_slug() {
        let n = LocationNode {
            code: 1,
            name: "Karnataka".into(),
            slug: "ka".into(),
        };
        assert_eq!(n.from_api().slug, "ka");
    }

    #[test]
    fn test_level_order_matches_hierarchy() {
        assert!(LocationLevel::State < LocationLevel::Locality);
        assert_eq!(LocationLevel::City.parent(), Some(LocationLevel::District));
        assert_eq!(LocationLevel::State.parent(), None);
    }
}
