//! Order summary aggregation against a real SQLite database

mod common;

use common::{dec, setup};
use restaurant_core::OrderSummaryService;
use rust_decimal::Decimal;
use shared::models::{OrderLineCreate, OrderSummaryOpen};
use uuid::Uuid;

fn line(name: &str, quantity: i32, unit_price: &str) -> OrderLineCreate {
    OrderLineCreate {
        menu_item_id: Uuid::new_v4(),
        item_name: name.to_string(),
        quantity,
        unit_price: dec(unit_price),
    }
}

fn open_request(lines: Vec<OrderLineCreate>) -> OrderSummaryOpen {
    OrderSummaryOpen {
        table_id: Uuid::new_v4(),
        table_number: 7,
        user_id: Uuid::new_v4(),
        user_full_name: "Ada Lovelace".to_string(),
        lines,
    }
}

#[tokio::test]
async fn open_sums_lines_and_applies_tax() {
    let t = setup().await;
    let service = OrderSummaryService::new(t.db.pool.clone());

    let detail = service
        .open(open_request(vec![
            line("Burger", 2, "9.99"),
            line("Cola", 3, "2.50"),
        ]))
        .await;
    assert!(detail.is_success(), "{}", detail.message());
    let detail = detail.into_data().unwrap();

    // 19.98 + 7.50 = 27.48; 27.48 * 0.0725 = 1.9923 -> 1.99
    assert_eq!(detail.summary.sub_total_amount(), dec("27.48"));
    assert_eq!(detail.summary.tax_amount(), dec("1.99"));
    assert_eq!(detail.summary.total_amount(), dec("29.47"));
    assert_eq!(detail.orders.len(), 2);
    assert!(detail.orders.iter().all(|o| o.summary_id == detail.summary.id));

    let reloaded = service.find(detail.summary.id).await.into_data().unwrap();
    assert_eq!(reloaded.summary, detail.summary);
    let names: Vec<_> = reloaded.orders.iter().map(|o| o.item_name.as_str()).collect();
    assert_eq!(names, ["Burger", "Cola"]);
}

#[tokio::test]
async fn open_without_lines_is_zeroed() {
    let t = setup().await;
    let service = OrderSummaryService::new(t.db.pool.clone());

    let detail = service.open(open_request(vec![])).await.into_data().unwrap();
    assert_eq!(detail.summary.sub_total_amount(), Decimal::ZERO);
    assert_eq!(detail.summary.total_amount(), Decimal::ZERO);
    assert!(detail.orders.is_empty());
}

#[tokio::test]
async fn set_sub_total_recomputes_and_persists() {
    let t = setup().await;
    let service = OrderSummaryService::new(t.db.pool.clone());
    let id = service
        .open(open_request(vec![]))
        .await
        .into_data()
        .unwrap()
        .summary
        .id;

    let updated = service.set_sub_total(id, dec("100.00")).await;
    assert!(updated.is_success(), "{}", updated.message());
    let updated = updated.into_data().unwrap();
    assert_eq!(updated.tax_amount(), dec("7.25"));
    assert_eq!(updated.total_amount(), dec("107.25"));

    let reloaded = service.find(id).await.into_data().unwrap().summary;
    assert_eq!(reloaded.sub_total_amount(), dec("100.00"));
    assert_eq!(reloaded.tax_amount(), dec("7.25"));
    assert_eq!(reloaded.total_amount(), dec("107.25"));

    let (tax, total): (String, String) =
        sqlx::query_as("SELECT tax_amount, total_amount FROM order_summary WHERE id = ?")
            .bind(id.to_string())
            .fetch_one(&t.db.pool)
            .await
            .unwrap();
    assert_eq!(dec(&tax), dec("7.25"));
    assert_eq!(dec(&total), dec("107.25"));
}

#[tokio::test]
async fn set_sub_total_accepts_large_amounts_and_rejects_overflow() {
    let t = setup().await;
    let service = OrderSummaryService::new(t.db.pool.clone());
    let id = service
        .open(open_request(vec![]))
        .await
        .into_data()
        .unwrap()
        .summary
        .id;

    let large = service.set_sub_total(id, dec("5000000.00")).await;
    assert!(large.is_success(), "{}", large.message());
    assert_eq!(large.into_data().unwrap().total_amount(), dec("5362500.00"));

    let overflow = service.set_sub_total(id, Decimal::MAX).await;
    assert!(overflow.is_failure());
    assert!(overflow.message().contains("too large"), "{}", overflow.message());
    let kept = service.find(id).await.into_data().unwrap().summary;
    assert_eq!(kept.sub_total_amount(), dec("5000000.00"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_order_additions_are_all_counted() {
    let t = setup().await;
    let service = OrderSummaryService::new(t.db.pool.clone());
    let id = service
        .open(open_request(vec![]))
        .await
        .into_data()
        .unwrap()
        .summary
        .id;

    let mut handles = Vec::new();
    for n in 0..8 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            if n % 2 == 0 {
                service.add_order(id, line("Cola", 1, "2.00")).await.map(|_| ())
            } else {
                service.set_sub_total(id, dec("1.00")).await.map(|_| ())
            }
        }));
    }
    for handle in handles {
        let result = handle.await.unwrap();
        assert!(result.is_success(), "{}", result.message());
    }

    let detail = service.find(id).await.into_data().unwrap();
    assert_eq!(detail.orders.len(), 4);
}

#[tokio::test]
async fn add_order_recomputes_from_all_lines() {
    let t = setup().await;
    let service = OrderSummaryService::new(t.db.pool.clone());
    let id = service
        .open(open_request(vec![line("Burger", 1, "10.00")]))
        .await
        .into_data()
        .unwrap()
        .summary
        .id;

    let detail = service
        .add_order(id, line("Fries", 2, "45.00"))
        .await
        .into_data()
        .unwrap();
    assert_eq!(detail.orders.len(), 2);
    assert_eq!(detail.summary.sub_total_amount(), dec("100.00"));
    assert_eq!(detail.summary.tax_amount(), dec("7.25"));
    assert_eq!(detail.summary.total_amount(), dec("107.25"));
}

#[tokio::test]
async fn missing_summary_is_reported() {
    let t = setup().await;
    let service = OrderSummaryService::new(t.db.pool.clone());
    let unknown = Uuid::new_v4();

    assert_eq!(service.find(unknown).await.message(), "Order summary not found");
    assert_eq!(
        service.set_sub_total(unknown, dec("1.00")).await.message(),
        "Order summary not found"
    );
    assert_eq!(
        service
            .add_order(unknown, line("Burger", 1, "9.99"))
            .await
            .message(),
        "Order summary not found"
    );

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_line")
        .fetch_one(&t.db.pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn invalid_input_is_rejected_before_writing() {
    let t = setup().await;
    let service = OrderSummaryService::new(t.db.pool.clone());

    let bad_line = service
        .open(open_request(vec![line("Burger", 0, "9.99")]))
        .await;
    assert!(bad_line.is_failure());
    assert!(bad_line.message().starts_with("Quantity must be positive"));

    let summaries: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_summary")
        .fetch_one(&t.db.pool)
        .await
        .unwrap();
    assert_eq!(summaries, 0);

    let id = service
        .open(open_request(vec![]))
        .await
        .into_data()
        .unwrap()
        .summary
        .id;
    let negative = service.set_sub_total(id, dec("-5.00")).await;
    assert!(negative.message().starts_with("Subtotal must be non-negative"));
    let unchanged = service.find(id).await.into_data().unwrap().summary;
    assert_eq!(unchanged.sub_total_amount(), Decimal::ZERO);
}
