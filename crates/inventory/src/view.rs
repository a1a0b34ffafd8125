//! Read-only access to products.
//!
//! Everything handed out by the [`Inventory`](crate::Inventory) goes through
//! [`ProductView`]: either a borrowed `&dyn ProductView` or an owned
//! [`ProductSnapshot`] that is fully detached from the aggregate.

use serde::Serialize;

/// Read-only product capability: accessors and presentation, no mutators.
pub trait ProductView {
    fn code(&self) -> &str;

    fn name(&self) -> &str;

    fn description(&self) -> &str;

    fn price(&self) -> f64;

    fn stock(&self) -> u64;

    /// Single-line presentation: code, name, description, price (2 decimals), stock.
    fn render(&self) -> String {
        format!(
            "[{}] {} - {} | Precio: {:.2} | Stock: {}",
            self.code(),
            self.name(),
            self.description(),
            self.price(),
            self.stock()
        )
    }

    /// Price × stock.
    fn inventory_value(&self) -> f64 {
        self.price() * self.stock() as f64
    }

    /// Detach an owned copy of the current values.
    fn to_snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            code: self.code().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            price: self.price(),
            stock: self.stock(),
        }
    }
}

/// Immutable copy of a product taken at query time.
///
/// Later changes to the inventory are not reflected in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSnapshot {
    code: String,
    name: String,
    description: String,
    price: f64,
    stock: u64,
}

impl ProductView for ProductSnapshot {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn stock(&self) -> u64 {
        self.stock
    }

    fn to_snapshot(&self) -> ProductSnapshot {
        self.clone()
    }
}

impl core::fmt::Display for ProductSnapshot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Unmodifiable sequence of snapshots returned by list and search queries.
///
/// Derefs to `[ProductSnapshot]`, so it can be indexed, iterated and measured,
/// but there is no way to push, remove or clear entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductList(Vec<ProductSnapshot>);

impl ProductList {
    pub(crate) fn from_views<'a, V, I>(views: I) -> Self
    where
        V: ProductView + 'a,
        I: IntoIterator<Item = &'a V>,
    {
        Self(views.into_iter().map(ProductView::to_snapshot).collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl core::ops::Deref for ProductList {
    type Target = [ProductSnapshot];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for ProductList {
    type Item = ProductSnapshot;
    type IntoIter = std::vec::IntoIter<ProductSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProductList {
    type Item = &'a ProductSnapshot;
    type IntoIter = core::slice::Iter<'a, ProductSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
