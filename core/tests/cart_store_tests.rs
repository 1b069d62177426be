// tests/cart_store_tests.rs
mod common;
use common::*;

use vitrina::CartStore;

#[test]
fn line_ids_are_monotonic_and_distinct() {
  setup_tracing();
  let store = CartStore::new();
  let product = product("Taza", 9_900, 50);

  let a = store.append(&product, 1);
  let b = store.append(&product, 1);
  let c = store.append(&product, 1);

  assert!(a.id < b.id);
  assert!(b.id < c.id);
}

#[test]
fn insertion_order_is_preserved() {
  setup_tracing();
  let store = CartStore::new();
  let first = product("Primero", 1_000, 5);
  let second = product("Segundo", 2_000, 5);

  store.append(&first, 1);
  store.append(&second, 1);

  let lines = store.lines();
  assert_eq!(lines[0].product.name, "Primero");
  assert_eq!(lines[1].product.name, "Segundo");
}

#[test]
fn lines_snapshot_the_product_at_add_time() {
  setup_tracing();
  let store = CartStore::new();
  let mut product = product("Edición Limitada", 59_900, 3);

  store.append(&product, 1);

  // A later catalog refresh changing the product must not leak into the
  // line that was already added.
  product.name = "Renombrado".to_string();
  product.price_cents = 99_900;
  product.stock = 0;

  let lines = store.lines();
  assert_eq!(lines[0].product.name, "Edición Limitada");
  assert_eq!(lines[0].product.price_cents, 59_900);
  assert_eq!(lines[0].product.stock, 3);
}

#[test]
fn total_sums_line_subtotals() {
  setup_tracing();
  let store = CartStore::new();
  let coffee = product("Café", 25_000, 10);
  let mug = product("Taza", 9_900, 10);

  store.append(&coffee, 2);
  store.append(&mug, 3);

  assert_eq!(store.total_cents(), 2 * 25_000 + 3 * 9_900);
  assert_eq!(store.len(), 2);
  assert!(!store.is_empty());
}
