//! Integration tests for the favorites repository against a real database:
//! - Idempotent add and the store-level uniqueness constraint
//! - Remove-then-absent behaviour
//! - Listing with and without a type filter
//! - Cross-table resolution with the all-or-nothing id fallback

use assert_matches::assert_matches;
use sqlx::PgPool;
use mfapi_db::repositories::{AddOutcome, FavoriteRepo, FundRepo, StockRepo};

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_inserts_then_reports_existing(pool: PgPool) {
    let first = FavoriteRepo::add(&pool, "u1", "42", "stock", "Test Stock")
        .await
        .unwrap();
    let favorite = assert_matches!(first, AddOutcome::Created(f) => f);
    assert_eq!(favorite.user_id, "u1");
    assert_eq!(favorite.item_id, "42");
    assert_eq!(favorite.item_type, "stock");
    assert_eq!(favorite.item_name, "Test Stock");
    assert!(favorite.id > 0);

    let second = FavoriteRepo::add(&pool, "u1", "42", "stock", "Test Stock")
        .await
        .unwrap();
    assert_matches!(second, AddOutcome::AlreadyExists);

    // Exactly one row survives the pair of adds.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorites")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_item_different_type_or_user_is_a_new_row(pool: PgPool) {
    FavoriteRepo::add(&pool, "u1", "X", "stock", "").await.unwrap();

    let as_fund = FavoriteRepo::add(&pool, "u1", "X", "fund", "").await.unwrap();
    assert_matches!(as_fund, AddOutcome::Created(_));

    let other_user = FavoriteRepo::add(&pool, "u2", "X", "stock", "").await.unwrap();
    assert_matches!(other_user, AddOutcome::Created(_));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn uniqueness_is_enforced_by_the_store(pool: PgPool) {
    FavoriteRepo::add(&pool, "u1", "42", "stock", "").await.unwrap();

    // A writer that skips the ON CONFLICT clause hits the constraint.
    let err = sqlx::query(
        "INSERT INTO favorites (user_id, item_id, item_type) VALUES ($1, $2, $3)",
    )
    .bind("u1")
    .bind("42")
    .bind("stock")
    .execute(&pool)
    .await
    .unwrap_err();

    let db_err = assert_matches!(err, sqlx::Error::Database(e) => e);
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_favorites_user_item"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn row_written_by_another_writer_resolves_to_already_exists(pool: PgPool) {
    // The row exists but was not created through add(); the triple lookup
    // still reports it as a duplicate.
    sqlx::query("INSERT INTO favorites (user_id, item_id, item_type) VALUES ('u1', '42', 'stock')")
        .execute(&pool)
        .await
        .unwrap();

    let outcome = FavoriteRepo::add(&pool, "u1", "42", "stock", "").await.unwrap();
    assert_matches!(outcome, AddOutcome::AlreadyExists);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_adds_of_the_same_triple_store_one_row(pool: PgPool) {
    // Whichever writer loses the check-then-insert race must come back with
    // AlreadyExists (absorbed by ON CONFLICT), never an error.
    let (a, b) = tokio::join!(
        FavoriteRepo::add(&pool, "u1", "42", "stock", ""),
        FavoriteRepo::add(&pool, "u1", "42", "stock", ""),
    );

    let outcomes = [a.unwrap(), b.unwrap()];
    let created = outcomes
        .iter()
        .filter(|o| matches!(o, AddOutcome::Created(_)))
        .count();
    assert_eq!(created, 1, "exactly one add may insert");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM favorites")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn remove_deletes_exactly_the_triple(pool: PgPool) {
    FavoriteRepo::add(&pool, "u1", "42", "stock", "").await.unwrap();
    FavoriteRepo::add(&pool, "u1", "42", "fund", "").await.unwrap();

    assert!(FavoriteRepo::remove(&pool, "u1", "42", "stock").await.unwrap());

    // The fund favorite with the same item id is untouched.
    let remaining = FavoriteRepo::list_for_user(&pool, "u1", None).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].item_type, "fund");

    // Second removal of the same triple matches nothing.
    assert!(!FavoriteRepo::remove(&pool, "u1", "42", "stock").await.unwrap());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_filters_by_type_and_preserves_insertion_order(pool: PgPool) {
    FavoriteRepo::add(&pool, "u1", "1", "stock", "A").await.unwrap();
    FavoriteRepo::add(&pool, "u1", "F1", "fund", "B").await.unwrap();
    FavoriteRepo::add(&pool, "u1", "2", "stock", "C").await.unwrap();
    FavoriteRepo::add(&pool, "other", "1", "stock", "").await.unwrap();

    let all = FavoriteRepo::list_for_user(&pool, "u1", None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].item_id, "1");
    assert_eq!(all[2].item_id, "2");

    let stocks = FavoriteRepo::list_for_user(&pool, "u1", Some("stock")).await.unwrap();
    assert_eq!(stocks.len(), 2);

    let ids = FavoriteRepo::list_item_ids(&pool, "u1", "fund").await.unwrap();
    assert_eq!(ids, vec!["F1".to_string()]);
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn stock_resolution_by_native_ids_omits_orphans(pool: PgPool) {
    let s1 = StockRepo::create(&pool, "Test Stock", "TEST", None).await.unwrap();
    let s2 = StockRepo::create(&pool, "Other Stock", "OTHR", None).await.unwrap();

    let item_ids = vec![s1.id.to_string(), s2.id.to_string(), "999999".to_string()];
    let resolved = StockRepo::find_by_item_ids(&pool, &item_ids).await.unwrap();

    // The orphan id resolves to nothing; no error.
    assert_eq!(resolved.len(), 2);
    assert!(resolved.iter().any(|s| s.id == s1.id));
    assert!(resolved.iter().any(|s| s.id == s2.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stock_resolution_falls_back_to_text_for_the_whole_set(pool: PgPool) {
    let s1 = StockRepo::create(&pool, "Test Stock", "TEST", None).await.unwrap();

    // One unparsable id sends the entire set down the textual path; the
    // numeric-looking ids still match by their text form.
    let item_ids = vec![s1.id.to_string(), "not-a-db-id".to_string()];
    let resolved = StockRepo::find_by_item_ids(&pool, &item_ids).await.unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, s1.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fund_resolution_uses_business_keys(pool: PgPool) {
    FundRepo::insert_snapshot(&pool, "FUND-1", "Index One", "2025-06-30", 10, 1, 0)
        .await
        .unwrap();
    FundRepo::insert_snapshot(&pool, "FUND-1", "Index One", "2025-07-31", 12, 2, 0)
        .await
        .unwrap();
    FundRepo::insert_snapshot(&pool, "FUND-2", "Index Two", "2025-07-31", 5, 0, 1)
        .await
        .unwrap();

    let keys = vec!["FUND-1".to_string(), "GONE".to_string()];
    let resolved = FundRepo::find_by_unique_ids(&pool, &keys).await.unwrap();

    // Every snapshot of FUND-1; the unknown key is silently dropped.
    assert_eq!(resolved.len(), 2);
    assert!(resolved.iter().all(|f| f.unique_id == "FUND-1"));
}
