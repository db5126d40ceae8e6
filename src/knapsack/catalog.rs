//! Demo item catalogs.
//!
//! Weights are in grams. These are fixtures for the CLI and tests; the
//! engine itself never refers to them.

use super::Item;

/// Default capacity used with the demo catalogs.
pub const DEFAULT_CAPACITY: u64 = 3000;

/// Default fitness target used with the demo catalogs.
pub const DEFAULT_FITNESS_LIMIT: u64 = 1310;

/// Five everyday items.
pub fn things() -> Vec<Item> {
    vec![
        Item::new("Laptop", 500, 2200),
        Item::new("Headphones", 150, 160),
        Item::new("Coffee Mug", 60, 350),
        Item::new("Notepad", 40, 333),
        Item::new("Water Bottle", 30, 192),
    ]
}

/// Six small items followed by [`things`].
pub fn more_things() -> Vec<Item> {
    let mut items = vec![
        Item::new("Apple", 4, 7),
        Item::new("Mints", 5, 25),
        Item::new("Socks", 10, 38),
        Item::new("Tissues", 15, 80),
        Item::new("Phone", 500, 200),
        Item::new("Baseball Cap", 100, 70),
    ];
    items.extend(things());
    items
}
