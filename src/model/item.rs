use crate::error::Result;

use super::{Color, SizeCategory};

/// A single pair of shoes on display. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    brand: String,
    size: char,
    price: u32,
    color: Color,
}

impl Item {
    /// Build an item. The size code is only checked when the item is
    /// ordered, see [`Item::size_category`].
    pub fn new(brand: impl Into<String>, size: char, price: u32, color: Color) -> Self {
        Self {
            brand: brand.into(),
            size,
            price,
            color,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Raw size code as supplied by the caller.
    pub fn size_code(&self) -> char {
        self.size
    }

    pub fn size_category(&self) -> Result<SizeCategory> {
        SizeCategory::from_code(self.size)
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl From<(&str, SizeCategory, u32, Color)> for Item {
    fn from((brand, size, price, color): (&str, SizeCategory, u32, Color)) -> Self {
        Self::new(brand, size.code(), price, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_fields() {
        let item = Item::new("Nike", 'M', 50, Color::Black);
        assert_eq!(item.brand(), "Nike");
        assert_eq!(item.size_code(), 'M');
        assert_eq!(item.size_category().unwrap(), SizeCategory::Medium);
        assert_eq!(item.price(), 50);
        assert_eq!(item.color(), Color::Black);
    }

    #[test]
    fn bad_size_is_accepted_until_ordered() {
        let item = Item::new("Nike", 'Q', 10, Color::Red);
        assert_eq!(item.size_code(), 'Q');
        assert!(item.size_category().is_err());
    }

    #[test]
    fn typed_tuple_conversion_uses_size_code() {
        let item = Item::from(("Adidas", SizeCategory::Large, 30, Color::Blue));
        assert_eq!(item.size_code(), 'L');
    }
}
