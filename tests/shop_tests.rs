// Integration tests for the shop facade and the seeded data

use storefront::errors::ShopError;
use storefront::inventory::{Catalog, Product};
use storefront::recommend::RecommendationGraph;
use storefront::shop::Shop;
use storefront::timing::{MemorySink, NoopSink};

fn seeded() -> Shop {
    Shop::seeded(Box::new(NoopSink))
}

fn stock_of(shop: &Shop, id: i32) -> Option<u32> {
    shop.catalog().find_by_id(id).map(|p| p.stock)
}

// === SEED DATA ===

#[test]
fn test_seeded_shop_contents() {
    let shop = seeded();
    assert_eq!(shop.catalog().len(), 15);
    assert_eq!(shop.catalog().products()[0].name, "Laptop");
    assert_eq!(shop.catalog().products()[14].name, "Smartphone");
    assert!(shop.catalog().is_sorted_by_id());
    assert_eq!(shop.graph().node_count(), 15);
    assert!(shop.cart().is_empty());
    assert!(shop.orders().is_empty());
}

#[test]
fn test_seeded_recommendations_from_laptop() {
    let shop = seeded();
    let names = shop.recommendations(1).expect("laptop is in the graph");
    assert_eq!(
        names,
        vec!["Laptop", "Mouse", "USB Cable", "Keyboard", "Graphics Card", "Tablet"]
    );
}

#[test]
fn test_recommendations_for_leaf_and_unknown() {
    let shop = seeded();
    assert_eq!(shop.recommendations(14), Ok(vec!["Tablet".to_string()]));
    assert_eq!(
        shop.recommendations(99),
        Err(ShopError::NotInGraph { id: 99 })
    );
}

// === RESERVE ===

#[test]
fn test_reserve_moves_stock_into_cart() {
    let mut shop = seeded();

    let item = shop.reserve(1, 3).expect("enough laptops");
    assert_eq!(item.quantity, 3);
    // The cart line is taken before the decrement
    assert_eq!(item.product.stock, 10);

    assert_eq!(stock_of(&shop, 1), Some(7));
    assert_eq!(shop.cart().len(), 1);
    assert!((shop.cart_summary().total - 3.0 * 999.99).abs() < 1e-6);
}

#[test]
fn test_reserve_insufficient_stock_changes_nothing() {
    let mut shop = seeded();

    let err = shop.reserve(1, 11).expect_err("only 10 laptops");
    assert_eq!(err.product_id(), Some(1));
    assert_eq!(
        err,
        ShopError::InsufficientStock {
            id: 1,
            requested: 11,
            available: 10
        }
    );
    assert_eq!(stock_of(&shop, 1), Some(10));
    assert!(shop.cart().is_empty());
}

#[test]
fn test_reserve_unknown_product_changes_nothing() {
    let mut shop = seeded();
    assert_eq!(
        shop.reserve(77, 1),
        Err(ShopError::ProductNotFound { id: 77 })
    );
    assert!(shop.cart().is_empty());
}

#[test]
fn test_reserve_exact_stock_empties_shelf() {
    let mut shop = seeded();
    shop.reserve(13, 15).expect("all gaming chairs");
    assert_eq!(stock_of(&shop, 13), Some(0));
    assert!(shop.reserve(13, 1).is_err());
}

#[test]
fn test_cart_snapshot_ignores_later_catalog_edits() {
    let mut shop = seeded();
    shop.reserve(2, 1).expect("mouse in stock");
    shop.update_product(2, "Gaming Mouse", 80.0, 5).expect("mouse exists");

    let summary = shop.cart_summary();
    assert_eq!(summary.items[0].product.name, "Mouse");
    assert_eq!(summary.items[0].product.price, 25.50);
}

// === CHECKOUT AND ORDERS ===

#[test]
fn test_checkout_queues_orders_and_clears_cart() {
    let mut shop = seeded();
    shop.reserve(1, 1).expect("laptop");
    shop.reserve(2, 2).expect("mouse");
    shop.reserve(3, 1).expect("keyboard");

    let summary = shop.checkout().expect("cart has items");
    assert_eq!(summary.items.len(), 3);
    assert!((summary.total - (999.99 + 2.0 * 25.50 + 45.75)).abs() < 1e-6);
    assert!(shop.cart().is_empty());
    assert_eq!(shop.orders().len(), 3);

    let processed: Vec<i32> = shop.process_orders().iter().map(|p| p.id).collect();
    assert_eq!(processed, vec![1, 2, 3]);
    assert!(shop.orders().is_empty());
}

#[test]
fn test_checkout_empty_cart() {
    let mut shop = seeded();
    assert_eq!(shop.checkout(), Err(ShopError::CartEmpty));
    assert!(shop.orders().is_empty());
}

#[test]
fn test_remove_from_cart_restores_total() {
    let mut shop = seeded();
    shop.reserve(4, 1).expect("monitor");
    let before = shop.cart_summary().total;

    shop.reserve(5, 4).expect("usb cables");
    shop.remove_from_cart(5).expect("cables in cart");
    assert!((shop.cart_summary().total - before).abs() < 1e-9);

    // Removing from the cart does not return stock
    assert_eq!(stock_of(&shop, 5), Some(196));
}

// === VIEW HISTORY ===

#[test]
fn test_view_product_records_history() {
    let mut shop = seeded();
    shop.view_product(4).expect("monitor");
    shop.view_product(9).expect("microphone");
    assert!(shop.view_product(42).is_err());

    let viewed: Vec<String> = shop
        .recently_viewed()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(viewed, vec!["Microphone", "Monitor"]);
}

// === ADMIN AND SEARCH ===

#[test]
fn test_remove_product_then_search() {
    let mut shop = seeded();
    shop.remove_product(8).expect("webcam exists");
    assert_eq!(shop.remove_product(8), Err(ShopError::ProductNotFound { id: 8 }));

    assert!(shop.search(8).is_err());
    let (index, product) = shop.search(9).expect("microphone");
    assert_eq!(index, 7);
    assert_eq!(product.name, "Microphone");
}

#[test]
fn test_binary_search_after_name_sort_needs_id_sort() {
    let mut shop = seeded();
    shop.sort_by_name();
    assert!(!shop.catalog().is_sorted_by_id());

    // Linear search works regardless of order
    let (_, found) = shop.find(10).expect("graphics card");
    assert_eq!(found.name, "Graphics Card");

    shop.sort_by_id();
    let (index, product) = shop.search(10).expect("graphics card after id sort");
    assert_eq!(index, 9);
    assert_eq!(product.id, 10);
}

#[test]
fn test_sort_by_price_on_seeded_catalog() {
    let mut shop = seeded();
    shop.sort_by_price();
    let products = shop.catalog().products();
    assert_eq!(products.first().map(|p| p.id), Some(5));
    assert_eq!(products.last().map(|p| p.id), Some(1));
    assert!(products.windows(2).all(|w| w[0].price <= w[1].price));
}

#[test]
fn test_seeded_shop_reports_name_sort_timing() {
    let sink = MemorySink::new();
    let mut shop = Shop::seeded(Box::new(sink.clone()));
    shop.sort_by_name();
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn test_custom_shop_from_parts() {
    let mut catalog = Catalog::new();
    catalog.add(Product::new(1, "Laptop", 999.99, 10));
    catalog.add(Product::new(2, "Mouse", 25.50, 100));
    catalog.add(Product::new(3, "Keyboard", 45.75, 75));
    catalog.add(Product::new(5, "USB Cable", 5.99, 200));

    let mut graph = RecommendationGraph::new();
    for product in catalog.products() {
        graph.add_product_name(product.id, product.name.clone());
    }
    graph.add_edge(1, 2);
    graph.add_edge(1, 3);
    graph.add_edge(2, 5);

    let shop = Shop::new(catalog, graph);
    assert_eq!(shop.graph().reachable(1), Some(vec![1, 2, 5, 3]));
}
