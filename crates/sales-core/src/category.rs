// File: crates/sales-core/src/category.rs
// Summary: Closed set of product categories and their base daily sales rates.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Books,
}

impl Category {
    /// All categories in generation order.
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Books,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Books => "Books",
        }
    }

    /// Average daily sales before seasonal uplift and noise.
    pub fn base_rate(self) -> f64 {
        match self {
            Category::Electronics => 200.0,
            Category::Clothing => 100.0,
            Category::Home => 150.0,
            Category::Books => 50.0,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
