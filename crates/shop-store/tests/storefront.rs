//! Storefront flows over the in-memory store.

use chrono::{Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use shop_commerce::prelude::*;
use shop_store::{MemoryStore, Snapshot};

fn at(day: i64) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap() + Duration::days(day)
}

fn catalog() -> Vec<Product> {
    vec![
        Product::new("Gradient Graphic T-shirt", "t-shirts", Money::from_units(145))
            .with_id("p-1")
            .with_discount(20)
            .with_sizes(["Small", "Medium", "Large"])
            .with_colors(["White", "Black"])
            .with_rating(4.5, 120)
            .with_created_at(at(1))
            .top_selling(),
        Product::new("Checkered Shirt", "shirts", Money::from_units(180))
            .with_id("p-2")
            .with_description("Soft flannel in a relaxed fit")
            .with_sizes(["Medium", "Large"])
            .with_colors(["Red", "Blue"])
            .with_rating(4.0, 80)
            .with_created_at(at(2))
            .new_arrival()
            .top_selling(),
        Product::new("Sleeve Striped T-shirt", "t-shirts", Money::from_units(130))
            .with_id("p-3")
            .with_discount(30)
            .with_sizes(["Small", "Large"])
            .with_colors(["Orange"])
            .with_rating(3.5, 40)
            .with_created_at(at(3))
            .new_arrival(),
        Product::new("Vertical Striped Shirt", "shirts", Money::from_units(212))
            .with_id("p-4")
            .with_sizes(["Large", "X-Large"])
            .with_colors(["Green"])
            .with_rating(5.0, 15)
            .with_created_at(at(4))
            .new_arrival(),
        Product::new("Faded Skinny Jeans", "jeans", Money::from_units(210))
            .with_id("p-5")
            .with_sizes(["Medium"])
            .with_colors(["Blue"])
            .with_rating(4.5, 200)
            .with_created_at(at(5))
            .top_selling(),
    ]
}

fn order(n: i64, status: OrderStatus, total: Money) -> Order {
    Order {
        id: OrderId::new(format!("o-{}", n)),
        order_number: format!("ORD-{}", 1000 + n),
        user_id: UserId::new("u-9"),
        status,
        total,
        customer_email: Some("buyer@example.com".to_string()),
        created_at: at(n),
        updated_at: at(n),
    }
}

fn shop() -> Storefront<MemoryStore> {
    let store = MemoryStore::from_snapshot(Snapshot {
        products: catalog(),
        orders: vec![
            order(1, OrderStatus::Delivered, Money::from_units(225)),
            order(2, OrderStatus::Pending, Money::new(dec!(99.50))),
        ],
        ..Default::default()
    });
    Storefront::new(store, PricingConfig::default())
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_browse_defaults_to_newest_first() {
    let products = shop().browse(&FilterParams::default()).unwrap();
    assert_eq!(ids(&products), ["p-5", "p-4", "p-3", "p-2", "p-1"]);
}

#[test]
fn test_browse_category_sorted_by_price() {
    let params = FilterParams::from_pairs([("category", "shirts"), ("sort", "price-asc")]);
    let products = shop().browse(&params).unwrap();
    assert_eq!(ids(&products), ["p-2", "p-4"]);
}

#[test]
fn test_browse_combines_flags_and_colors() {
    let params = FilterParams::from_pairs([("new", "true"), ("colors", "orange,green")]);
    let products = shop().browse(&params).unwrap();
    assert_eq!(ids(&products), ["p-4", "p-3"]);

    let params = FilterParams::from_pairs([("on-sale", "true"), ("sort", "rating")]);
    let products = shop().browse(&params).unwrap();
    assert_eq!(ids(&products), ["p-1", "p-3"]);
}

#[test]
fn test_browse_price_range_and_sizes() {
    let params = FilterParams::from_pairs([
        ("minPrice", "140"),
        ("maxPrice", "210"),
        ("sizes", "large"),
        ("sort", "price-desc"),
    ]);
    let products = shop().browse(&params).unwrap();
    assert_eq!(ids(&products), ["p-2", "p-1"]);
}

#[test]
fn test_browse_inverted_range_is_empty() {
    let params = FilterParams::from_pairs([("minPrice", "200"), ("maxPrice", "100")]);
    assert!(shop().browse(&params).unwrap().is_empty());
}

#[test]
fn test_browse_rejects_bad_parameters() {
    let err = shop()
        .browse(&FilterParams::from_pairs([("minPrice", "cheap")]))
        .unwrap_err();
    assert!(err.is_invalid_filter());

    let err = shop()
        .browse(&FilterParams::from_pairs([("sort", "popularity")]))
        .unwrap_err();
    assert!(err.is_invalid_filter());
}

#[test]
fn test_browse_page() {
    let listing = shop()
        .browse_page(&FilterParams::from_pairs([("category", "t-shirts")]), 1, 1)
        .unwrap();
    assert_eq!(listing.title, "T-shirts");
    assert_eq!(ids(&listing.products), ["p-3"]);
    assert_eq!(listing.pagination.total_pages, 2);
}

#[test]
fn test_browse_page_past_the_end_is_empty() {
    let shop = shop();
    let listing = shop
        .browse_page(&FilterParams::default(), usize::MAX / 2, 9)
        .unwrap();
    assert!(listing.is_empty());
    assert_eq!(listing.pagination.total, 5);
}

#[test]
fn test_search() {
    let shop = shop();
    assert_eq!(ids(&shop.search("striped").unwrap()), ["p-4", "p-3"]);
    assert_eq!(ids(&shop.search("FLANNEL").unwrap()), ["p-2"]);
    assert!(shop.search("   ").unwrap().is_empty());
}

#[test]
fn test_home_sections() {
    let home = shop().home().unwrap();
    assert_eq!(ids(&home.new_arrivals), ["p-4", "p-3", "p-2"]);
    assert_eq!(ids(&home.top_selling), ["p-5", "p-1", "p-2"]);
}

#[test]
fn test_product_detail_with_reviews() {
    let shop = shop();
    let user = UserId::new("u-1");
    let product = ProductId::new("p-2");

    for (rating, comment) in [(5, "Love it"), (3, "  Runs small  ")] {
        shop.submit_review(
            &user,
            &product,
            ReviewDraft {
                rating,
                comment: comment.to_string(),
            },
            Some("Sam".to_string()),
        )
        .unwrap();
    }

    let detail = shop.product_detail(&product).unwrap();
    assert_eq!(detail.product.name, "Checkered Shirt");
    assert_eq!(detail.reviews.len(), 2);
    assert_eq!(detail.rating.total, 2);
    assert_eq!(detail.rating.average, 4.0);
    assert_eq!(detail.rating.count(3), 1);
    assert!(detail.reviews.iter().any(|r| r.comment == "Runs small"));
    assert_eq!(ids(&detail.related), ["p-4"]);
}

#[test]
fn test_product_detail_not_found() {
    let err = shop().product_detail(&ProductId::new("p-404")).unwrap_err();
    assert_eq!(err, CommerceError::ProductNotFound("p-404".to_string()));
}

#[test]
fn test_review_validation() {
    let shop = shop();
    let err = shop
        .submit_review(
            &UserId::new("u-1"),
            &ProductId::new("p-1"),
            ReviewDraft {
                rating: 6,
                comment: "Great".to_string(),
            },
            None,
        )
        .unwrap_err();
    assert!(matches!(err, CommerceError::ValidationError(_)));

    let err = shop
        .submit_review(
            &UserId::new("u-1"),
            &ProductId::new("p-404"),
            ReviewDraft {
                rating: 4,
                comment: "Great".to_string(),
            },
            None,
        )
        .unwrap_err();
    assert!(matches!(err, CommerceError::ProductNotFound(_)));
}

#[test]
fn test_cart_pricing() {
    let shop = shop();
    let user = UserId::new("u-1");

    shop.add_to_cart(&user, &ProductId::new("p-1"), 1, "Large", "White")
        .unwrap();
    shop.add_to_cart(&user, &ProductId::new("p-2"), 2, "Medium", "Red")
        .unwrap();

    let view = shop.cart(&user).unwrap();
    assert_eq!(view.entries.len(), 2);
    assert_eq!(view.summary.item_count, 3);
    // 116 + 2 * 180 after the 20% markdown on 145
    assert_eq!(view.summary.subtotal, Money::from_units(476));
    assert_eq!(view.summary.discount_total, Money::from_units(29));
    assert_eq!(view.summary.original_subtotal(), Money::from_units(505));
    assert_eq!(view.summary.delivery_fee, Money::from_units(15));
    assert_eq!(view.summary.grand_total, Money::from_units(491));
}

#[test]
fn test_cart_merges_and_updates() {
    let shop = shop();
    let user = UserId::new("u-1");
    let product = ProductId::new("p-3");

    let first = shop.add_to_cart(&user, &product, 1, "Small", "Orange").unwrap();
    let merged = shop.add_to_cart(&user, &product, 2, "Small", "Orange").unwrap();
    assert_eq!(first.id, merged.id);
    assert_eq!(merged.quantity, 3);

    shop.update_cart_quantity(&user, &merged.id, 5).unwrap();
    let view = shop.cart(&user).unwrap();
    assert_eq!(view.entries[0].line.quantity, 5);

    shop.update_cart_quantity(&user, &merged.id, 0).unwrap();
    let view = shop.cart(&user).unwrap();
    assert!(view.entries.is_empty());
    assert_eq!(view.summary.grand_total, Money::zero());
    assert_eq!(view.summary.delivery_fee, Money::zero());
}

#[test]
fn test_cart_rejects_unavailable_option() {
    let err = shop()
        .add_to_cart(
            &UserId::new("u-1"),
            &ProductId::new("p-5"),
            1,
            "Small",
            "Blue",
        )
        .unwrap_err();
    assert!(matches!(
        err,
        CommerceError::UnavailableOption { option: "size", .. }
    ));
}

#[test]
fn test_cart_is_per_user() {
    let shop = shop();
    let alice = UserId::new("u-1");
    let bob = UserId::new("u-2");

    let line = shop
        .add_to_cart(&alice, &ProductId::new("p-5"), 1, "Medium", "Blue")
        .unwrap();
    assert!(shop.cart(&bob).unwrap().entries.is_empty());

    let err = shop.remove_from_cart(&bob, &line.id).unwrap_err();
    assert!(matches!(err, CommerceError::ItemNotInCart(_)));

    shop.remove_from_cart(&alice, &line.id).unwrap();
    assert!(shop.cart(&alice).unwrap().entries.is_empty());
}

#[test]
fn test_cart_skips_deleted_products() {
    let shop = shop();
    let user = UserId::new("u-1");
    shop.add_to_cart(&user, &ProductId::new("p-5"), 1, "Medium", "Blue")
        .unwrap();
    shop.add_to_cart(&user, &ProductId::new("p-2"), 1, "Large", "Blue")
        .unwrap();

    shop.delete_product(&ProductId::new("p-5")).unwrap();

    let view = shop.cart(&user).unwrap();
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.summary.subtotal, Money::from_units(180));
}

#[test]
fn test_clear_cart() {
    let shop = shop();
    let user = UserId::new("u-1");
    shop.add_to_cart(&user, &ProductId::new("p-5"), 1, "Medium", "Blue")
        .unwrap();
    shop.add_to_cart(&user, &ProductId::new("p-2"), 1, "Large", "Red")
        .unwrap();

    assert_eq!(shop.clear_cart(&user).unwrap(), 2);
    assert!(shop.cart(&user).unwrap().entries.is_empty());
}

#[test]
fn test_admin_product_lifecycle() {
    let shop = shop();
    let product = shop
        .create_product(ProductDraft {
            name: "One Life Graphic T-shirt".to_string(),
            price: "300".to_string(),
            discount: Some("40".to_string()),
            category: "t-shirts".to_string(),
            sizes: "Small, Medium".to_string(),
            colors: "Olive".to_string(),
            is_new_arrival: true,
            ..Default::default()
        })
        .unwrap();

    let params = FilterParams::from_pairs([("colors", "olive")]);
    assert_eq!(ids(&shop.browse(&params).unwrap()), [product.id.as_str()]);
    assert_eq!(shop.dashboard().unwrap().total_products, 6);

    shop.delete_product(&product.id).unwrap();
    let err = shop.delete_product(&product.id).unwrap_err();
    assert!(matches!(err, CommerceError::ProductNotFound(_)));
}

#[test]
fn test_admin_rejects_price_above_ceiling() {
    let shop = shop();
    let err = shop
        .create_product(ProductDraft {
            name: "Gold Thread Jacket".to_string(),
            price: "10000000000000000000000000000".to_string(),
            discount: Some("20".to_string()),
            category: "jackets".to_string(),
            sizes: "Large".to_string(),
            colors: "Gold".to_string(),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, CommerceError::ValidationError(_)));
    assert_eq!(shop.dashboard().unwrap().total_products, 5);
}

#[test]
fn test_cart_with_huge_stored_price_still_prices() {
    let store = MemoryStore::from_snapshot(Snapshot {
        products: vec![
            Product::new("Gold Thread Jacket", "jackets", Money::new(dec!(1000000000000000000000000000)))
                .with_id("p-gold")
                .with_sizes(["Large"])
                .with_colors(["Gold"]),
            Product::new("Gold Thread Scarf", "scarves", Money::new(dec!(10000000000000000000000000000)))
                .with_id("p-scarf")
                .with_discount(20)
                .with_sizes(["One Size"])
                .with_colors(["Gold"]),
        ],
        ..Default::default()
    });
    let shop = Storefront::new(store, PricingConfig::default());
    let user = UserId::new("u-1");

    shop.add_to_cart(&user, &ProductId::new("p-scarf"), 1, "One Size", "Gold")
        .unwrap();
    let view = shop.cart(&user).unwrap();
    assert_eq!(
        view.summary.discount_total.amount(),
        dec!(2000000000000000000000000000)
    );

    shop.add_to_cart(&user, &ProductId::new("p-gold"), MAX_QUANTITY_PER_ITEM, "Large", "Gold")
        .unwrap();
    let view = shop.cart(&user).unwrap();
    assert_eq!(view.entries.len(), 2);
    assert!(view.summary.grand_total.is_positive());
}

#[test]
fn test_dashboard_and_order_status() {
    let shop = shop();
    let stats = shop.dashboard().unwrap();
    assert_eq!(stats.total_products, 5);
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.pending_orders, 1);
    assert_eq!(stats.total_revenue.amount(), dec!(324.50));
    assert_eq!(stats.recent_orders[0].id.as_str(), "o-2");

    shop.set_order_status(&OrderId::new("o-2"), OrderStatus::Shipped)
        .unwrap();
    let stats = shop.dashboard().unwrap();
    assert_eq!(stats.pending_orders, 0);
    assert_eq!(stats.shipped_orders, 1);

    let err = shop
        .set_order_status(&OrderId::new("o-404"), OrderStatus::Shipped)
        .unwrap_err();
    assert!(matches!(err, CommerceError::OrderNotFound(_)));
}

#[test]
fn test_snapshot_round_trip_through_file() {
    let shop = shop();
    shop.add_to_cart(&UserId::new("u-1"), &ProductId::new("p-1"), 2, "Small", "Black")
        .unwrap();

    let path = std::env::temp_dir().join(format!("shop-store-{}.json", std::process::id()));
    shop.store().save(&path).unwrap();

    let reopened = Storefront::new(MemoryStore::load(&path).unwrap(), PricingConfig::default());
    let view = reopened.cart(&UserId::new("u-1")).unwrap();
    assert_eq!(view.summary.item_count, 2);
    std::fs::remove_file(&path).unwrap();
}
