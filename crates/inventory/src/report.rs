use serde::Serialize;

/// Summary of the inventory: how many products and what they are worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InventoryReport {
    pub product_count: usize,
    /// Sum of price × stock over all products.
    pub total_value: f64,
}

impl core::fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Productos: {} | Valor inventario: {:.2}",
            self.product_count, self.total_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_value_with_two_decimals() {
        let report = InventoryReport {
            product_count: 2,
            total_value: 350.0,
        };
        assert_eq!(report.to_string(), "Productos: 2 | Valor inventario: 350.00");
    }

    #[test]
    fn display_rounds_fractional_values() {
        let report = InventoryReport {
            product_count: 1,
            total_value: 10.0 / 3.0,
        };
        assert_eq!(report.to_string(), "Productos: 1 | Valor inventario: 3.33");
    }
}
