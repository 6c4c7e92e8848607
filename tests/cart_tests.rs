// Integration tests for the linked-list cart, view history and order queue

use storefront::errors::ShopError;
use storefront::inventory::{Cart, OrderQueue, Product, ViewHistory};

fn laptop() -> Product {
    Product::new(1, "Laptop", 999.99, 10)
}

fn mouse() -> Product {
    Product::new(2, "Mouse", 25.50, 100)
}

fn keyboard() -> Product {
    Product::new(3, "Keyboard", 45.75, 75)
}

// === CART ===

#[test]
fn test_add_then_remove_restores_total() {
    let mut cart = Cart::new();
    cart.add(&laptop(), 1);
    cart.add(&mouse(), 2);
    let before = cart.total();

    cart.add(&keyboard(), 3);
    assert!((cart.total() - (before + 3.0 * 45.75)).abs() < 1e-9);

    let removed = cart.remove(3).expect("keyboard in cart");
    assert_eq!(removed.quantity, 3);
    assert!((cart.total() - before).abs() < 1e-9);
}

#[test]
fn test_remove_from_empty_cart_reports_not_found() {
    let mut cart = Cart::new();
    assert_eq!(cart.remove(99), Err(ShopError::NotInCart { id: 99 }));
    assert!(cart.is_empty());
}

#[test]
fn test_remove_missing_id_leaves_cart_unchanged() {
    let mut cart = Cart::new();
    cart.add(&laptop(), 1);
    cart.add(&mouse(), 1);

    assert!(cart.remove(7).is_err());
    assert_eq!(cart.len(), 2);
    let ids: Vec<i32> = cart.iter().map(|item| item.product.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_update_quantity_overwrites_in_place() {
    let mut cart = Cart::new();
    cart.add(&mouse(), 1);
    cart.add(&keyboard(), 1);

    cart.update_quantity(3, 4).expect("keyboard in cart");
    let summary = cart.summary();
    assert_eq!(summary.items[1].quantity, 4);
    assert!((summary.total - (25.50 + 4.0 * 45.75)).abs() < 1e-9);

    // No stock bound is applied
    cart.update_quantity(2, 10_000).expect("mouse in cart");
    assert_eq!(cart.iter().next().map(|i| i.quantity), Some(10_000));

    assert_eq!(
        cart.update_quantity(8, 1),
        Err(ShopError::NotInCart { id: 8 })
    );
}

#[test]
fn test_empty_cart_total_is_positive_zero() {
    let cart = Cart::new();
    assert!(!cart.total().is_sign_negative());
    assert_eq!(format!("{:.2}", cart.total()), "0.00");
}

#[test]
fn test_clear_empties_cart() {
    let mut cart = Cart::new();
    cart.add(&laptop(), 2);
    cart.add(&mouse(), 1);

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.len(), 0);
    assert_eq!(cart.total(), 0.0);
    assert!(cart.summary().is_empty());
    assert_eq!(format!("{:.2}", cart.summary().total), "0.00");

    // Still usable after clearing
    cart.add(&keyboard(), 1);
    assert_eq!(cart.len(), 1);
}

#[test]
fn test_cart_holds_snapshots() {
    let mut product = laptop();
    let mut cart = Cart::new();
    cart.add(&product, 1);

    product.price = 1.0;
    product.take_stock(10);

    let item = cart.iter().next().expect("one line");
    assert_eq!(item.product.price, 999.99);
    assert_eq!(item.product.stock, 10);
}

// === VIEW HISTORY ===

#[test]
fn test_history_is_most_recent_first_and_non_destructive() {
    let mut history = ViewHistory::new();
    history.record(&laptop());
    history.record(&mouse());
    history.record(&laptop());

    let first: Vec<i32> = history.iter().map(|p| p.id).collect();
    let second: Vec<i32> = history.iter().map(|p| p.id).collect();
    assert_eq!(first, vec![1, 2, 1]);
    assert_eq!(first, second);
    assert_eq!(history.len(), 3);
    assert_eq!(history.latest().map(|p| p.id), Some(1));
}

// === ORDER QUEUE ===

#[test]
fn test_orders_processed_in_submission_order() {
    let mut orders = OrderQueue::new();
    orders.submit(&laptop());
    orders.submit(&mouse());
    orders.submit(&keyboard());
    assert_eq!(orders.len(), 3);

    let processed: Vec<String> = orders.process_all().into_iter().map(|p| p.name).collect();
    assert_eq!(processed, vec!["Laptop", "Mouse", "Keyboard"]);
    assert!(orders.is_empty());
    assert!(orders.process_all().is_empty());
}

#[test]
fn test_pending_does_not_consume() {
    let mut orders = OrderQueue::new();
    orders.submit(&mouse());
    assert_eq!(orders.pending().count(), 1);
    assert_eq!(orders.len(), 1);
}
