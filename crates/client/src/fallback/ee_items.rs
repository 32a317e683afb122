//! Embedded engineer's estimate line items.

use domain::models::ee_item::EeItem;

fn item(item_number: &str, description: &str, unit: &str, quantity: f64, unit_price: f64) -> EeItem {
    EeItem {
        item_number: item_number.to_string(),
        description: description.to_string(),
        unit: unit.to_string(),
        quantity,
        unit_price,
        amount: quantity * unit_price,
    }
}

/// The embedded EE item list.
pub fn dataset() -> Vec<EeItem> {
    vec![
        item("2.01A", "Site mobilization", "LS", 1.0, 85_000.0),
        item("4.07AB", "Concrete sidewalk, 4 inch", "SF", 12_400.0, 14.50),
        item("4.13C", "Granite curb, reset", "LF", 860.0, 52.00),
        item("6.22", "Safety surfacing, poured in place", "SF", 5_200.0, 31.75),
        item("7.04B", "Steel picket fence, 4 foot", "LF", 1_150.0, 96.00),
        item("8.31A", "Shade tree, 3 inch caliper", "EA", 48.0, 675.0),
        item("9.02", "Topsoil and seeding", "SY", 7_800.0, 8.25),
        item("11.15D", "LED pathway luminaire", "EA", 36.0, 2_140.0),
    ]
}
