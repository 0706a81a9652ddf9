//! Category types for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;
use crate::icon::Icon;

/// Slug of the wildcard tab.
const ALL_SLUG: &str = "all";

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Vegetables,
    Fruits,
    Dairy,
    Bakery,
    Meat,
    Seafood,
}

impl CategoryId {
    /// Every category in tab order.
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Vegetables,
        CategoryId::Fruits,
        CategoryId::Dairy,
        CategoryId::Bakery,
        CategoryId::Meat,
        CategoryId::Seafood,
    ];

    /// URL-friendly slug.
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryId::Vegetables => "vegetables",
            CategoryId::Fruits => "fruits",
            CategoryId::Dairy => "dairy",
            CategoryId::Bakery => "bakery",
            CategoryId::Meat => "meat",
            CategoryId::Seafood => "seafood",
        }
    }

    /// Parse a slug. Only the exact lowercase slug matches.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Tab label.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::Vegetables => "Овощи",
            CategoryId::Fruits => "Фрукты",
            CategoryId::Dairy => "Молочное",
            CategoryId::Bakery => "Выпечка",
            CategoryId::Meat => "Мясо",
            CategoryId::Seafood => "Рыба",
        }
    }

    /// Tab icon.
    pub fn icon(&self) -> Icon {
        match self {
            CategoryId::Vegetables => Icon::Carrot,
            CategoryId::Fruits => Icon::Apple,
            CategoryId::Dairy => Icon::Milk,
            CategoryId::Bakery => Icon::Croissant,
            CategoryId::Meat => Icon::Beef,
            CategoryId::Seafood => Icon::Fish,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The category selection driving the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// The "all" wildcard.
    #[default]
    All,
    /// A single category.
    Only(CategoryId),
}

impl CategoryFilter {
    /// Parse a tab slug. `"all"` is the wildcard; unknown slugs yield `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        if slug == ALL_SLUG {
            return Some(CategoryFilter::All);
        }
        CategoryId::from_slug(slug).map(CategoryFilter::Only)
    }

    /// Parse a tab slug, reporting unknown slugs as an error.
    pub fn parse(slug: &str) -> Result<Self, CommerceError> {
        Self::from_slug(slug).ok_or_else(|| CommerceError::UnknownCategory(slug.to_string()))
    }

    /// Tab slug.
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_SLUG,
            CategoryFilter::Only(id) => id.slug(),
        }
    }

    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: CategoryId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => *id == category,
        }
    }
}

impl From<CategoryId> for CategoryFilter {
    fn from(id: CategoryId) -> Self {
        CategoryFilter::Only(id)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A category tab as shown in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Selection the tab activates.
    pub filter: CategoryFilter,
    /// Display name.
    pub name: &'static str,
    /// Tab icon.
    pub icon: Icon,
}

impl Category {
    /// The wildcard tab.
    pub const fn all() -> Self {
        Self {
            filter: CategoryFilter::All,
            name: "Все товары",
            icon: Icon::Grid,
        }
    }

    /// Tab for a single category.
    pub fn of(id: CategoryId) -> Self {
        Self {
            filter: CategoryFilter::Only(id),
            name: id.display_name(),
            icon: id.icon(),
        }
    }

    /// All tabs: the wildcard first, then every category.
    pub fn tabs() -> Vec<Category> {
        std::iter::once(Category::all())
            .chain(CategoryId::ALL.into_iter().map(Category::of))
            .collect()
    }

    /// Tab slug.
    pub fn slug(&self) -> &'static str {
        self.filter.slug()
    }
}
