use std::fmt;

use crate::error::{Result, StandError};

/// Size category in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    /// Parse a single-letter size code (`S`, `M` or `L`).
    pub fn from_code(code: char) -> Result<Self> {
        match code {
            'S' => Ok(Self::Small),
            'M' => Ok(Self::Medium),
            'L' => Ok(Self::Large),
            other => Err(StandError::InvalidSize(other)),
        }
    }

    pub fn code(self) -> char {
        match self {
            Self::Small => 'S',
            Self::Medium => 'M',
            Self::Large => 'L',
        }
    }
}

/// Colorway. Ordering follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Black,
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working for table cells.
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_codes_round_trip() {
        for size in [SizeCategory::Small, SizeCategory::Medium, SizeCategory::Large] {
            assert_eq!(SizeCategory::from_code(size.code()).unwrap(), size);
        }
    }

    #[test]
    fn unknown_size_code_fails() {
        assert!(matches!(
            SizeCategory::from_code('X'),
            Err(StandError::InvalidSize('X'))
        ));
        // Codes are case-sensitive.
        assert!(SizeCategory::from_code('m').is_err());
    }

    #[test]
    fn sizes_order_small_to_large() {
        assert!(SizeCategory::Small < SizeCategory::Medium);
        assert!(SizeCategory::Medium < SizeCategory::Large);
    }

    #[test]
    fn colors_order_by_declaration() {
        let mut colors = vec![Color::Yellow, Color::White, Color::Blue, Color::Black];
        colors.sort();
        assert_eq!(
            colors,
            vec![Color::White, Color::Black, Color::Blue, Color::Yellow]
        );
    }

    #[test]
    fn color_display_honours_width() {
        assert_eq!(format!("{:<7}|", Color::Red), "Red    |");
    }
}
