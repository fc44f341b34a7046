use crate::model::{Category, Product};

/// The six demo products installed when nothing has been persisted yet.
pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new("p1", "Wireless Mouse", "MSE-001", 24.99, 35, Category::Electronics),
        Product::new("p2", "Office Chair", "CHR-002", 149.5, 8, Category::Furniture),
        Product::new("p3", "Notebook A5", "NTB-003", 3.75, 0, Category::Stationery),
        Product::new("p4", "Cotton T-Shirt", "TSH-004", 12.0, 52, Category::Clothing),
        Product::new("p5", "Leather Wallet", "WLT-005", 39.99, 4, Category::Accessories),
        Product::new("p6", "Desk Lamp", "LMP-007", 29.9, 15, Category::Home),
    ]
}
