//! Fixed sample stock used by the `shoe-stand` binary.

use crate::model::{Color, Item};

const SAMPLE: &[(&str, char, u32, Color)] = &[
    ("Nike", 'M', 50, Color::Black),
    ("Adidas", 'L', 30, Color::Blue),
    ("Reebok", 'S', 70, Color::Red),
    ("Nike", 'M', 40, Color::Blue),
    ("Adidas", 'L', 60, Color::Red),
    ("New Balance", 'S', 80, Color::White),
    ("Adidas", 'L', 70, Color::Black),
    ("Reebok", 'S', 50, Color::Green),
    ("Nike", 'M', 60, Color::White),
    ("New Balance", 'L', 40, Color::Yellow),
    ("Nike", 'S', 90, Color::Black),
    ("Adidas", 'M', 80, Color::Green),
    ("Reebok", 'L', 20, Color::Red),
    ("New Balance", 'S', 100, Color::White),
    ("Eghvard", 'S', 120, Color::Green),
    ("Eghvard", 'M', 110, Color::Yellow),
    ("Eghvard", 'M', 150, Color::Yellow),
    ("Eghvard", 'L', 180, Color::Yellow),
    ("Eghvard", 'L', 180, Color::Black),
    ("Eghvard", 'L', 180, Color::Green),
    ("Eghvard", 'L', 280, Color::Blue),
];

pub fn sample_items() -> Vec<Item> {
    SAMPLE
        .iter()
        .map(|&(brand, size, price, color)| Item::new(brand, size, price, color))
        .collect()
}
