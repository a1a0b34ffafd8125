//! Black-box walk through the public inventory API.

use stockroom_inventory::{AggregateRoot, Inventory, Product, ProductUpdate, ProductView};

fn peripherals() -> Inventory {
    let mut inv = Inventory::new();
    assert!(inv.create("P-001", "Mouse", "Inalámbrico", 15990.0, 20));
    assert!(inv.create("P-002", "Teclado", "Mecánico", 29990.0, 10));
    inv
}

#[test]
fn full_product_lifecycle() {
    let mut inv = peripherals();

    let mouse = inv.find_by_code("P-001").expect("P-001 should exist");
    assert_eq!(mouse.name(), "Mouse");
    assert_eq!(inv.list_all().len(), 2);

    assert!(inv.set_price("P-002", 27990.0));
    assert_eq!(inv.find_by_code("P-002").unwrap().price(), 27990.0);

    assert!(inv.set_stock("P-001", 25));
    assert_eq!(inv.find_by_code("P-001").unwrap().stock(), 25);

    assert!(!inv.search_by_text("inalámbrico").is_empty());
    assert!(!inv.search_by_text("Mouse").is_empty());

    assert!(inv.remove("P-001"));
    assert!(inv.find_by_code("P-001").is_none());
    assert_eq!(inv.list_all().len(), 1);
}

#[test]
fn unicode_search_is_case_insensitive() {
    let inv = peripherals();
    let hits = inv.find_by_text("MECÁNICO");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].code(), "P-002");
}

#[test]
fn results_follow_insertion_order() {
    let mut inv = Inventory::new();
    for code in ["C", "A", "B"] {
        assert!(inv.insert(Product::new(code, format!("item {code}"), "caja", 1.0, 1)));
    }

    let listed: Vec<String> = inv.list_all().iter().map(|p| p.code().to_string()).collect();
    let found: Vec<String> = inv
        .find_by_text("caja")
        .into_iter()
        .map(|p| p.code().to_string())
        .collect();
    assert_eq!(listed, ["C", "A", "B"]);
    assert_eq!(found, listed);
}

#[test]
fn update_through_patch_and_report() {
    let mut inv = peripherals();
    assert!(inv.update(
        " P-001 ",
        ProductUpdate::new()
            .description("Inalámbrico 2.4GHz")
            .stock(-3)
    ));

    let mouse = inv.find_by_code("P-001").unwrap();
    assert_eq!(mouse.description(), "Inalámbrico 2.4GHz");
    assert_eq!(mouse.stock(), 20);

    // 15990*20 + 29990*10
    assert_eq!(inv.report(), "Productos: 2 | Valor inventario: 619700.00");
    assert_eq!(inv.version(), 3);
}
