use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::{Color, Item, SizeCategory};

/// Composite ordering key: size category, then price, then color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub size: SizeCategory,
    pub price: u32,
    pub color: Color,
}

/// Fails with `InvalidSize` when the item carries an unknown size code.
pub fn sort_key(item: &Item) -> Result<SortKey> {
    Ok(SortKey {
        size: item.size_category()?,
        price: item.price(),
        color: item.color(),
    })
}

pub fn compare_items(a: &Item, b: &Item) -> Result<Ordering> {
    Ok(sort_key(a)?.cmp(&sort_key(b)?))
}

/// Items sharing one brand label, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandGroup<'a> {
    pub brand: &'a str,
    pub items: Vec<&'a Item>,
}

impl BrandGroup<'_> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Group items by brand (ascending label order) and sort each group by
/// [`SortKey`].
///
/// Keys are computed for every item before any ordering happens, so one bad
/// size code fails the whole call. The sort is stable: items with equal keys
/// keep their input order.
pub fn group_by_brand<'a, I>(items: I) -> Result<Vec<BrandGroup<'a>>>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut by_brand: BTreeMap<&'a str, Vec<(SortKey, &'a Item)>> = BTreeMap::new();
    for item in items {
        let key = sort_key(item)?;
        by_brand.entry(item.brand()).or_default().push((key, item));
    }

    Ok(by_brand
        .into_iter()
        .map(|(brand, mut keyed)| {
            keyed.sort_by(|a, b| a.0.cmp(&b.0));
            BrandGroup {
                brand,
                items: keyed.into_iter().map(|(_, item)| item).collect(),
            }
        })
        .collect())
}
