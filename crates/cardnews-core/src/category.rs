//! Page categories and their element collections.

use crate::element::Element;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three page types the editor composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Cover,
    News,
    Summary,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Cover, Category::News, Category::Summary];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cover => "cover",
            Category::News => "news",
            Category::Summary => "summary",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cover" => Ok(Category::Cover),
            "news" => Ok(Category::News),
            "summary" => Ok(Category::Summary),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Stored element sequences, one slot per category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryElements {
    #[serde(default)]
    pub cover: Vec<Element>,
    #[serde(default)]
    pub news: Vec<Element>,
    #[serde(default)]
    pub summary: Vec<Element>,
}

impl CategoryElements {
    pub fn get(&self, category: Category) -> &[Element] {
        match category {
            Category::Cover => &self.cover,
            Category::News => &self.news,
            Category::Summary => &self.summary,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<Element> {
        match category {
            Category::Cover => &mut self.cover,
            Category::News => &mut self.news,
            Category::Summary => &mut self.summary,
        }
    }

    /// Replace a slot, returning its previous contents.
    pub fn set(&mut self, category: Category, elements: Vec<Element>) -> Vec<Element> {
        std::mem::replace(self.get_mut(category), elements)
    }

    /// Iterate slots in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Element])> {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ContainerProps, ElementPayload};
    use kurbo::{Point, Size};

    #[test]
    fn test_category_parse_and_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "end".parse::<Category>(),
            Err(UnknownCategory("end".to_string()))
        );
    }

    #[test]
    fn test_slots_are_isolated() {
        let mut slots = CategoryElements::default();
        let el = Element::new(
            "a",
            Point::ZERO,
            Size::new(10.0, 10.0),
            ElementPayload::Container(ContainerProps::default()),
        );
        let previous = slots.set(Category::News, vec![el]);
        assert!(previous.is_empty());
        assert_eq!(slots.get(Category::News).len(), 1);
        assert!(slots.get(Category::Cover).is_empty());
        assert!(slots.get(Category::Summary).is_empty());
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_value(CategoryElements::default()).unwrap();
        assert!(json.get("cover").is_some());
        assert!(json.get("news").is_some());
        assert!(json.get("summary").is_some());
        assert_eq!(serde_json::to_string(&Category::Summary).unwrap(), "\"summary\"");
    }
}
