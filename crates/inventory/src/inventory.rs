use indexmap::IndexMap;
use stockroom_core::{AggregateRoot, DomainError, DomainResult, ProductCode};
use tracing::debug;

use crate::product::Product;
use crate::report::InventoryReport;
use crate::view::{ProductList, ProductSnapshot, ProductView};

/// Partial update of a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }
}

/// Aggregate root: Inventory.
///
/// Owns every [`Product`] keyed by its normalized [`ProductCode`] and is the
/// only place products are created, changed or removed. Queries hand out
/// [`ProductView`]s or detached [`ProductSnapshot`]s, never `&mut Product`.
///
/// Code arguments accept `&str` or `Option<&str>`; a missing code is treated
/// like a blank one. Iteration follows insertion order.
///
/// Every command comes in two flavours: `try_*` reports why it was rejected,
/// the plain form collapses that into a `bool`.
#[derive(Debug, Default)]
pub struct Inventory {
    products: IndexMap<ProductCode, Product>,
    version: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains<'a>(&self, code: impl Into<Option<&'a str>>) -> bool {
        ProductCode::parse_opt(code.into())
            .map(|code| self.products.contains_key(&code))
            .unwrap_or(false)
    }

    // ---- commands ----

    /// Create and add a new product. Negative price/stock are clamped to zero.
    pub fn try_create<'a>(
        &mut self,
        code: impl Into<Option<&'a str>>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> DomainResult<ProductCode> {
        let code = ProductCode::parse_opt(code.into())
            .inspect_err(|err| debug!(%err, "create rejected"))?;
        let product = Product::new(code.as_str(), name, description, price, stock);
        self.admit(code, product)
    }

    pub fn create<'a>(
        &mut self,
        code: impl Into<Option<&'a str>>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        stock: i64,
    ) -> bool {
        self.try_create(code, name, description, price, stock).is_ok()
    }

    /// Add a pre-built record. Its code is normalized before the duplicate check.
    pub fn try_insert(&mut self, product: Product) -> DomainResult<ProductCode> {
        let code = ProductCode::parse(product.code())
            .inspect_err(|err| debug!(%err, "insert rejected"))?;
        let product = product.with_code(code.as_str());
        self.admit(code, product)
    }

    pub fn insert(&mut self, product: Product) -> bool {
        self.try_insert(product).is_ok()
    }

    fn admit(&mut self, code: ProductCode, product: Product) -> DomainResult<ProductCode> {
        if self.products.contains_key(&code) {
            debug!(%code, "duplicate product code rejected");
            return Err(DomainError::conflict(format!("product {code} already exists")));
        }
        self.products.insert(code.clone(), product);
        self.bump();
        debug!(%code, version = self.version, "product added");
        Ok(code)
    }

    /// Remove a product, returning its last state.
    pub fn try_delete<'a>(
        &mut self,
        code: impl Into<Option<&'a str>>,
    ) -> DomainResult<ProductSnapshot> {
        let code = ProductCode::parse_opt(code.into())?;
        // shift_remove keeps the remaining products in insertion order.
        let removed = self
            .products
            .shift_remove(&code)
            .ok_or_else(DomainError::not_found)?;
        self.bump();
        debug!(%code, version = self.version, "product deleted");
        Ok(removed.to_snapshot())
    }

    pub fn delete<'a>(&mut self, code: impl Into<Option<&'a str>>) -> bool {
        self.try_delete(code).is_ok()
    }

    /// Alias of [`Inventory::delete`].
    pub fn remove<'a>(&mut self, code: impl Into<Option<&'a str>>) -> bool {
        self.delete(code)
    }

    /// Apply a partial update.
    ///
    /// Succeeds whenever the product exists; a negative price or stock in the
    /// patch is skipped and the previous value kept.
    pub fn try_update<'a>(
        &mut self,
        code: impl Into<Option<&'a str>>,
        update: ProductUpdate,
    ) -> DomainResult<()> {
        let code = ProductCode::parse_opt(code.into())?;
        let product = self
            .products
            .get_mut(&code)
            .ok_or_else(DomainError::not_found)?;

        let ProductUpdate {
            name,
            description,
            price,
            stock,
        } = update;
        if let Some(name) = name {
            product.set_name(name);
        }
        if let Some(description) = description {
            product.set_description(description);
        }
        if let Some(price) = price {
            if !product.set_price(price) {
                debug!(%code, price, "invalid price ignored");
            }
        }
        if let Some(stock) = stock {
            if !product.set_stock(stock) {
                debug!(%code, stock, "negative stock ignored");
            }
        }

        self.bump();
        debug!(%code, version = self.version, "product updated");
        Ok(())
    }

    pub fn update<'a>(&mut self, code: impl Into<Option<&'a str>>, update: ProductUpdate) -> bool {
        self.try_update(code, update).is_ok()
    }

    /// Set the price of an existing product. Negative or non-finite prices are rejected.
    pub fn try_set_price<'a>(
        &mut self,
        code: impl Into<Option<&'a str>>,
        price: f64,
    ) -> DomainResult<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation("price must be finite and non-negative"));
        }
        let code = ProductCode::parse_opt(code.into())?;
        let product = self
            .products
            .get_mut(&code)
            .ok_or_else(DomainError::not_found)?;
        product.set_price(price);
        self.bump();
        debug!(%code, price, version = self.version, "price set");
        Ok(())
    }

    pub fn set_price<'a>(&mut self, code: impl Into<Option<&'a str>>, price: f64) -> bool {
        self.try_set_price(code, price).is_ok()
    }

    /// Set the stock of an existing product. Negative stock is rejected.
    pub fn try_set_stock<'a>(
        &mut self,
        code: impl Into<Option<&'a str>>,
        stock: i64,
    ) -> DomainResult<()> {
        if stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        let code = ProductCode::parse_opt(code.into())?;
        let product = self
            .products
            .get_mut(&code)
            .ok_or_else(DomainError::not_found)?;
        product.set_stock(stock);
        self.bump();
        debug!(%code, stock, version = self.version, "stock set");
        Ok(())
    }

    pub fn set_stock<'a>(&mut self, code: impl Into<Option<&'a str>>, stock: i64) -> bool {
        self.try_set_stock(code, stock).is_ok()
    }

    fn bump(&mut self) {
        self.version += 1;
    }

    // ---- queries ----

    /// Borrow a read-only view of a product.
    pub fn view<'a>(&self, code: impl Into<Option<&'a str>>) -> Option<&dyn ProductView> {
        let code = ProductCode::parse_opt(code.into()).ok()?;
        self.products
            .get(&code)
            .map(|product| product as &dyn ProductView)
    }

    /// Detached copy of a product, if it exists.
    pub fn find_by_code<'a>(&self, code: impl Into<Option<&'a str>>) -> Option<ProductSnapshot> {
        self.view(code).map(|view| view.to_snapshot())
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// A missing or blank query matches nothing.
    pub fn find_by_text<'a>(&self, query: impl Into<Option<&'a str>>) -> ProductList {
        let Some(query) = query.into().filter(|q| !q.trim().is_empty()) else {
            return ProductList::empty();
        };
        let needle = query.to_lowercase();
        ProductList::from_views(self.products.values().filter(|product| {
            product.name().to_lowercase().contains(needle.as_str())
                || product.description().to_lowercase().contains(needle.as_str())
        }))
    }

    /// Alias of [`Inventory::find_by_text`].
    pub fn search_by_text<'a>(&self, query: impl Into<Option<&'a str>>) -> ProductList {
        self.find_by_text(query)
    }

    pub fn list_all(&self) -> ProductList {
        ProductList::from_views(self.products.values())
    }

    pub fn summary(&self) -> InventoryReport {
        InventoryReport {
            product_count: self.products.len(),
            // Sum for f64 starts from -0.0, which would render as "-0.00".
            total_value: self
                .products
                .values()
                .map(ProductView::inventory_value)
                .fold(0.0, |total, value| total + value),
        }
    }

    /// `Productos: {count} | Valor inventario: {total:.2}`
    pub fn report(&self) -> String {
        self.summary().to_string()
    }
}

impl AggregateRoot for Inventory {
    fn version(&self) -> u64 {
        self.version
    }
}
