#![allow(dead_code)]

use restaurant_core::DbService;
use restaurant_core::db::repository::category;
use rust_decimal::Decimal;
use shared::models::{Category, CategoryCreate, MenuItemCreateUpdate};
use shared::util::now_millis;
use std::str::FromStr;
use tempfile::TempDir;

/// Database in a temp dir; the directory lives as long as this value
pub struct TestDb {
    pub db: DbService,
    _dir: TempDir,
}

pub async fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = DbService::new(path.to_str().unwrap()).await.unwrap();
    TestDb { db, _dir: dir }
}

pub async fn seed_category(db: &DbService, name: &str) -> Category {
    let category = Category::new(
        CategoryCreate {
            name: name.to_string(),
            description: None,
        },
        now_millis(),
    );
    category::insert(&db.pool, &category).await.unwrap();
    category
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn item(name: &str, price: &str, category: &str) -> MenuItemCreateUpdate {
    MenuItemCreateUpdate {
        name: name.to_string(),
        description: None,
        price: dec(price),
        category: category.to_string(),
        is_available: true,
    }
}
