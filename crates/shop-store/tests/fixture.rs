//! The sample data shipped with the CLI loads and prices as expected.

use shop_commerce::prelude::*;
use shop_store::MemoryStore;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../tools/shop-cli/fixtures/shop-data.json"
);

fn shop() -> Storefront<MemoryStore> {
    Storefront::new(MemoryStore::load(FIXTURE).unwrap(), PricingConfig::default())
}

#[test]
fn test_fixture_cart_totals() {
    let view = shop().cart(&UserId::new("u-alex")).unwrap();

    // Newest line first.
    assert_eq!(view.entries[0].line.id.as_str(), "l-2002");
    assert_eq!(view.summary.item_count, 3);
    // 2 * 180 + 160 at 30% off
    assert_eq!(view.summary.subtotal, Money::from_units(472));
    assert_eq!(view.summary.discount_total, Money::from_units(48));
    assert_eq!(view.summary.grand_total, Money::from_units(487));
}

#[test]
fn test_fixture_listing() {
    let shop = shop();
    let shirts = shop
        .browse(&FilterParams::from_pairs([("category", "t-shirts"), ("sort", "price-asc")]))
        .unwrap();
    let ids: Vec<&str> = shirts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p-1001", "p-1006", "p-1004"]);

    let stats = shop.dashboard().unwrap();
    assert_eq!(stats.total_products, 8);
    assert_eq!(stats.total_revenue, Money::from_units(605));
}
