use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::{enrich_products, Product};
use contracts::domain::a002_product::analytics::category_distribution;
use contracts::domain::a002_product::filter::{ProductFilter, PAGE_SIZE};
use contracts::domain::a004_order::aggregate::Order;
use contracts::domain::a004_order::analytics::total_revenue;
use contracts::shared::delete_guard::{guarded_delete, DeleteOutcome};
use contracts::shared::list_query::ListControls;
use futures::executor::block_on;
use std::cell::Cell;

fn categories() -> Vec<Category> {
    serde_json::from_str(
        r#"[
            {"id": 1, "name": "Electronics"},
            {"id": 2, "name": "Books", "description": "Paper and e-books"},
            {"id": 3, "name": "Toys"},
            {"id": 4, "name": "Garden", "parent": null}
        ]"#,
    )
    .unwrap()
}

fn products() -> Vec<Product> {
    serde_json::from_str(
        r#"{
            "count": 8,
            "next": null,
            "previous": null,
            "results": [
                {"id": 1, "name": "Phone", "price": "699.00", "category": 1},
                {"id": 2, "name": "Tablet", "price": "329.99", "category": 1},
                {"id": 3, "name": "Charger", "price": "19.99", "category": 1},
                {"id": 4, "name": "Novel", "price": "12.50", "category": 2},
                {"id": 5, "name": "Atlas", "price": "45.00", "category": 2},
                {"id": 6, "name": "Cookbook", "price": "30.00", "category": 2},
                {"id": 7, "name": "Puzzle", "price": "15.00", "category": 3},
                {"id": 8, "name": "Drone", "price": "1200.00", "category": 3}
            ]
        }"#,
    )
    .map(|envelope: contracts::domain::common::ListEnvelope<Product>| envelope.into_items())
    .unwrap()
}

fn orders() -> Vec<Order> {
    serde_json::from_str(
        r#"[
            {"id": 1, "time_created": "2024-04-02T09:30:00Z", "status": "completed", "user_name": "ann",
             "items": [{"product": 1, "product_name": "Phone", "quantity": 1, "price": "699.00", "final_price": "650.00"}]},
            {"id": 2, "time_created": "2024-04-03T12:00:00", "status": "pending",
             "items": [{"product": 4, "product_name": "Novel", "quantity": 2, "price": "25.00", "final_price": null},
                       {"product": 7, "product_name": "Puzzle", "quantity": 1, "price": "15.00", "final_price": "15.00"}]}
        ]"#,
    )
    .unwrap()
}

#[test]
fn empty_category_is_left_out_of_distribution() {
    let distribution = category_distribution(&categories(), &products());
    let names: Vec<_> = distribution.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Electronics", "Books", "Toys"]);
    assert_eq!(distribution.iter().map(|c| c.count).sum::<usize>(), 8);
}

#[test]
fn price_filter_keeps_exactly_the_inclusive_range() {
    let rows = enrich_products(&products(), &categories(), &[]);
    let mut controls: ListControls<ProductFilter> = ListControls::new();
    controls.edit_filter(|f| {
        f.price_min = "15".to_string();
        f.price_max = "329.99".to_string();
    });

    let view = controls.view(&rows, PAGE_SIZE);
    let mut names: Vec<_> = view.page.items.iter().map(|r| r.product.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Atlas", "Charger", "Cookbook", "Puzzle", "Tablet"]);
    assert_eq!(view.unfiltered_count, 8);
}

#[test]
fn clearing_filters_restores_collection_and_first_page() {
    let rows = enrich_products(&products(), &categories(), &[]);
    let mut controls: ListControls<ProductFilter> = ListControls::new();
    controls.edit_filter(|f| f.name = "o".to_string());
    controls.go_to(2);
    controls.clear();

    let view = controls.view(&rows, 3);
    assert_eq!(view.page.page, 1);
    assert_eq!(view.page.total_count, 8);
    assert_eq!(view.page.total_pages, 3);
}

#[test]
fn revenue_sums_final_prices_without_touching_orders() {
    let data = orders();
    let snapshot = data.clone();
    assert_eq!(total_revenue(&data), 690.0);
    assert_eq!(total_revenue(&data), total_revenue(&data));
    assert_eq!(data, snapshot);
}

#[test]
fn rejected_delete_keeps_list_and_sends_nothing() {
    let mut list = products();
    let requests = Cell::new(0);
    let outcome = block_on(guarded_delete(&|_: &str| false, "Delete product 'Phone'?", 1, |_| {
        requests.set(requests.get() + 1);
        async { Ok::<(), String>(()) }
    }));

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    outcome.apply_to(&mut list);
    assert_eq!(requests.get(), 0);
    assert_eq!(list.len(), 8);
}

#[test]
fn accepted_delete_removes_exactly_one_item() {
    let mut list = products();
    let deleted = Cell::new(None);
    let outcome = block_on(guarded_delete(&|_: &str| true, "Delete product 'Drone'?", 8, |id| {
        deleted.set(Some(id));
        async { Ok::<(), String>(()) }
    }));

    assert!(outcome.apply_to(&mut list));
    assert_eq!(deleted.get(), Some(8));
    assert_eq!(list.len(), 7);
    assert!(list.iter().all(|p| p.id != 8));
}
