use serde::{Deserialize, Serialize};

/// Image attached to a listing; `image` is a path relative to the media
/// base URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingImage {
    pub image: String,
}

/// Listing row as returned by `GET /listings-with-images`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub location: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub images: Vec<ListingImage>,
}

fn default_active() -> bool {
    true
}

impl Listing {
    /// Relative path of the first image, if any.
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(|i| i.image.as_str())
    }

    /// Case-insensitive match of the free-text search against title and
    /// description. Empty search matches everything.
    pub fn matches_search(&self, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let s = search.to_lowercase();
        self.title.to_lowercase().contains(&s) || self.description.to_lowercase().contains(&s)
    }
}

/// Payload for `POST /listing/create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title: String,
    pub category: i64,
    pub price: f64,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub is_active: bool,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: 1,
            price: 0.0,
            location: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl ListingDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".into());
        }
        if self.location.trim().is_empty() {
            return Err("Location cannot be empty".into());
        }
        if self.price <= 0.0 {
            return Err("Price must be greater than zero".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, desc: &str) -> Listing {
        Listing {
            id: 1,
            title: title.into(),
            description: desc.into(),
            price: 10.0,
            location: "Mysore".into(),
            is_active: true,
            created_at: None,
            images: vec![],
        }
    }

    #[test]
    fn test_matches_search() {
        let l = listing("Office Chair", "ergonomic, barely used");
        assert!(l.matches_search(""));
        assert!(l.matches_search("chair"));
        assert!(l.matches_search("ERGONOMIC"));
        assert!(!l.matches_search("table"));
    }

    #[test]
    fn test_first_image() {
        let mut l = listing("Phone", "");
        assert_eq!(l.first_image(), None);
        l.images.push(ListingImage {
            image: "/media/1.jpg".into(),
        });
        assert_eq!(l.first_image(), Some("/media/1.jpg"));
    }

    #[test]
    fn test_draft_validation() {
        let mut d = ListingDraft::default();
        assert!(d.validate().is_err());
        d.title = "Sofa".into();
        d.location = "Udupi".into();
        assert!(d.validate().is_err()); // price still zero
        d.price = 450.0;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_listing_deserializes_with_defaults() {
        let json = r#"{"id": 3, "title": "Bike", "price": 120.5, "location": "Hubli"}"#;
        let l: Listing = serde_json::from_str(json).unwrap();
        assert!(l.is_active);
        assert!(l.images.is_empty());
        assert_eq!(l.description, "");
    }
}
