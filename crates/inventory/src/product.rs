use stockroom_core::Entity;

use crate::view::ProductView;

/// Entity: Product.
///
/// The code is fixed at construction. Descriptive fields can be replaced
/// freely; price and stock are never negative. Mutators are crate-private so
/// only the owning [`Inventory`](crate::Inventory) can change a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    code: String,
    name: String,
    description: String,
    price: f64,
    stock: u64,
}

impl Product {
    /// Build a product record.
    ///
    /// Negative or non-finite prices and negative stock are clamped to zero. The
    /// code is kept as given; normalization happens at the aggregate boundary.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            price: clamp_price(price),
            stock: clamp_stock(stock),
        }
    }

    /// Re-key a record before it becomes part of an aggregate.
    pub(crate) fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Applies the new price only if it is finite and non-negative. Returns whether it was applied.
    pub(crate) fn set_price(&mut self, price: f64) -> bool {
        if price.is_finite() && price >= 0.0 {
            self.price = clamp_price(price);
            true
        } else {
            false
        }
    }

    /// Applies the new stock only if it is non-negative. Returns whether it was applied.
    pub(crate) fn set_stock(&mut self, stock: i64) -> bool {
        match u64::try_from(stock) {
            Ok(stock) => {
                self.stock = stock;
                true
            }
            Err(_) => false,
        }
    }
}

// NaN, infinities and -0.0 all land on +0.0.
fn clamp_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 { price } else { 0.0 }
}

fn clamp_stock(stock: i64) -> u64 {
    u64::try_from(stock).unwrap_or(0)
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl ProductView for Product {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pencil() -> Product {
        Product::new("A1", "Lapiz", "HB", 500.0, 10)
    }

    #[test]
    fn new_keeps_fields_as_given() {
        let p = Product::new(" A1 ", "", "  ", 12.5, 3);
        assert_eq!(p.code(), " A1 ");
        assert_eq!(p.name(), "");
        assert_eq!(p.description(), "  ");
        assert_eq!(p.price(), 12.5);
        assert_eq!(p.stock(), 3);
    }

    #[test]
    fn new_clamps_negative_price_and_stock() {
        let p = Product::new("A1", "Lapiz", "HB", -1.0, -5);
        assert_eq!(p.price(), 0.0);
        assert_eq!(p.stock(), 0);
    }

    #[test]
    fn new_clamps_nan_price() {
        let p = Product::new("A1", "Lapiz", "HB", f64::NAN, 1);
        assert_eq!(p.price(), 0.0);
    }

    #[test]
    fn set_price_ignores_negative_values() {
        let mut p = pencil();
        assert!(!p.set_price(-0.01));
        assert_eq!(p.price(), 500.0);

        assert!(p.set_price(0.0));
        assert_eq!(p.price(), 0.0);
    }

    #[test]
    fn new_clamps_infinite_price() {
        assert_eq!(Product::new("A1", "Lapiz", "HB", f64::INFINITY, 0).price(), 0.0);
        assert_eq!(Product::new("A1", "Lapiz", "HB", f64::NEG_INFINITY, 0).price(), 0.0);
    }

    #[test]
    fn set_price_ignores_infinity() {
        let mut p = pencil();
        assert!(!p.set_price(f64::INFINITY));
        assert_eq!(p.price(), 500.0);
        assert_eq!(p.render(), "[A1] Lapiz - HB | Precio: 500.00 | Stock: 10");
    }

    #[test]
    fn set_price_ignores_nan() {
        let mut p = pencil();
        assert!(!p.set_price(f64::NAN));
        assert_eq!(p.price(), 500.0);
    }

    #[test]
    fn set_stock_ignores_negative_values() {
        let mut p = pencil();
        assert!(!p.set_stock(-1));
        assert_eq!(p.stock(), 10);

        assert!(p.set_stock(25));
        assert_eq!(p.stock(), 25);
    }

    #[test]
    fn name_and_description_are_replaced_unconditionally() {
        let mut p = pencil();
        p.set_name("");
        p.set_description("Grafito");
        assert_eq!(p.name(), "");
        assert_eq!(p.description(), "Grafito");
    }

    #[test]
    fn render_uses_fixed_format() {
        let p = Product::new("P-001", "Mouse", "Inalámbrico", 15990.0, 20);
        assert_eq!(
            p.render(),
            "[P-001] Mouse - Inalámbrico | Precio: 15990.00 | Stock: 20"
        );
    }

    #[test]
    fn identity_is_the_code_not_the_state() {
        let mut changed = pencil();
        changed.set_name("Lápiz");
        changed.set_price(1.0);

        assert_eq!(changed.id(), "A1");
        assert!(changed.is_same_entity(&pencil()));
        assert!(!pencil().is_same_entity(&Product::new("B2", "Lapiz", "HB", 500.0, 10)));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: construction never yields a negative price.
            #[test]
            fn constructed_price_is_never_negative(price in any::<f64>(), stock in any::<i64>()) {
                let p = Product::new("X", "n", "d", price, stock);
                prop_assert!(p.price() >= 0.0);
                prop_assert!(p.price().is_finite());
                if stock >= 0 {
                    prop_assert_eq!(p.stock(), stock as u64);
                } else {
                    prop_assert_eq!(p.stock(), 0);
                }
            }

            /// Property: a rejected update never changes the stored value.
            #[test]
            fn rejected_updates_keep_prior_values(
                price in 0.0f64..1.0e9,
                stock in 0i64..1_000_000,
                bad_price in -1.0e9f64..-1.0e-9,
                bad_stock in i64::MIN..0i64,
            ) {
                let mut p = Product::new("X", "n", "d", price, stock);
                prop_assert!(!p.set_price(bad_price));
                prop_assert!(!p.set_stock(bad_stock));
                prop_assert_eq!(p.price(), price);
                prop_assert_eq!(p.stock(), stock as u64);
            }
        }
    }
}
