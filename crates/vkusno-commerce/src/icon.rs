//! Icons rendered by the storefront shell.

use serde::{Deserialize, Serialize};

/// Every icon the storefront draws.
///
/// The shell maps each variant to artwork; keeping the set closed means a
/// missing mapping is a compile error instead of a blank square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Grid,
    Carrot,
    Apple,
    Milk,
    Croissant,
    Beef,
    Fish,
    ShoppingCart,
    Plus,
    Minus,
    Calendar,
    Clock,
    Shield,
    Truck,
    Phone,
    Mail,
    MapPin,
}

impl Icon {
    /// Name of the icon in the icon set (Lucide naming).
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Grid => "Grid3X3",
            Icon::Carrot => "Carrot",
            Icon::Apple => "Apple",
            Icon::Milk => "Milk",
            Icon::Croissant => "Croissant",
            Icon::Beef => "Beef",
            Icon::Fish => "Fish",
            Icon::ShoppingCart => "ShoppingCart",
            Icon::Plus => "Plus",
            Icon::Minus => "Minus",
            Icon::Calendar => "Calendar",
            Icon::Clock => "Clock",
            Icon::Shield => "Shield",
            Icon::Truck => "Truck",
            Icon::Phone => "Phone",
            Icon::Mail => "Mail",
            Icon::MapPin => "MapPin",
        }
    }

    /// Emoji stand-in for text renderers such as the CLI.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Grid => "\u{25a6}",
            Icon::Carrot => "\u{1f955}",
            Icon::Apple => "\u{1f34e}",
            Icon::Milk => "\u{1f95b}",
            Icon::Croissant => "\u{1f950}",
            Icon::Beef => "\u{1f969}",
            Icon::Fish => "\u{1f41f}",
            Icon::ShoppingCart => "\u{1f6d2}",
            Icon::Plus => "+",
            Icon::Minus => "-",
            Icon::Calendar => "\u{1f4c5}",
            Icon::Clock => "\u{1f552}",
            Icon::Shield => "\u{1f6e1}",
            Icon::Truck => "\u{1f69a}",
            Icon::Phone => "\u{1f4de}",
            Icon::Mail => "\u{2709}",
            Icon::MapPin => "\u{1f4cd}",
        }
    }
}
