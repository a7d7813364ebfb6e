//! Integration tests for the `parking_lot_status` status store.
//!
//! Exercises the repository layer against a real database:
//! - Insert and update through `save`
//! - `updated_at` stamping on every save
//! - Natural-key lookup and the unique constraint
//! - Terminal/type and terminal/type/side filtering

use parking_db::models::parking_lot_status::{LotKey, SaveParkingLotStatus};
use parking_db::repositories::ParkingLotStatusRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_lot(lot_code: &str, terminal: &str, parking_type: &str, area_side: &str) -> SaveParkingLotStatus {
    SaveParkingLotStatus {
        id: None,
        lot_code: lot_code.to_string(),
        lot_name: format!("Lot {lot_code}"),
        terminal: terminal.to_string(),
        parking_type: parking_type.to_string(),
        area_side: area_side.to_string(),
        capacity: 100,
        available: 50,
        status: "OK".to_string(),
        source_ts: None,
    }
}

// ---------------------------------------------------------------------------
// save
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_without_id_inserts_row(pool: PgPool) {
    let saved = ParkingLotStatusRepo::save(&pool, &new_lot("P1", "T1", "long", "east"))
        .await
        .unwrap();

    assert!(saved.id > 0);
    assert_eq!(saved.lot_code, "P1");
    assert_eq!(saved.capacity, 100);
    assert_eq!(saved.available, 50);
    assert!(saved.source_ts.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_assigns_increasing_ids(pool: PgPool) {
    let a = ParkingLotStatusRepo::save(&pool, &new_lot("A", "T1", "long", "east"))
        .await
        .unwrap();
    let b = ParkingLotStatusRepo::save(&pool, &new_lot("B", "T1", "long", "east"))
        .await
        .unwrap();

    assert!(b.id > a.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_with_id_updates_mutable_fields_only(pool: PgPool) {
    let created = ParkingLotStatusRepo::save(&pool, &new_lot("P1", "T1", "long", "east"))
        .await
        .unwrap();

    let mut update = new_lot("IGNORED", "T2", "short", "west");
    update.id = Some(created.id);
    update.lot_name = "Renamed".to_string();
    update.capacity = 200;
    update.available = 10;
    update.status = "BUSY".to_string();

    let updated = ParkingLotStatusRepo::save(&pool, &update).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.lot_name, "Renamed");
    assert_eq!(updated.capacity, 200);
    assert_eq!(updated.available, 10);
    assert_eq!(updated.status, "BUSY");
    // Key columns are never rewritten by an update.
    assert_eq!(updated.lot_code, "P1");
    assert_eq!(updated.terminal, "T1");
    assert_eq!(updated.parking_type, "long");
    assert_eq!(updated.area_side, "east");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_stamps_updated_at_even_without_changes(pool: PgPool) {
    let created = ParkingLotStatusRepo::save(&pool, &new_lot("P1", "T1", "long", "east"))
        .await
        .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let mut same = new_lot("P1", "T1", "long", "east");
    same.id = Some(created.id);
    let resaved = ParkingLotStatusRepo::save(&pool, &same).await.unwrap();

    assert!(resaved.updated_at > created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn save_with_missing_id_is_row_not_found(pool: PgPool) {
    let mut ghost = new_lot("P1", "T1", "long", "east");
    ghost.id = Some(9_999);

    let err = ParkingLotStatusRepo::save(&pool, &ghost).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_natural_key_insert_violates_unique_constraint(pool: PgPool) {
    ParkingLotStatusRepo::save(&pool, &new_lot("P1", "T1", "long", "east"))
        .await
        .unwrap();

    let err = ParkingLotStatusRepo::save(&pool, &new_lot("P1", "T1", "long", "east"))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_parking_lot_status_natural_key"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_lot_code_on_other_side_is_a_distinct_row(pool: PgPool) {
    let east = ParkingLotStatusRepo::save(&pool, &new_lot("P1", "T1", "long", "east"))
        .await
        .unwrap();
    let west = ParkingLotStatusRepo::save(&pool, &new_lot("P1", "T1", "long", "west"))
        .await
        .unwrap();

    assert_ne!(east.id, west.id);
}

// ---------------------------------------------------------------------------
// find_by_key
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_key_matches_all_four_parts(pool: PgPool) {
    let saved = ParkingLotStatusRepo::save(&pool, &new_lot("P1", "T1", "long", "east"))
        .await
        .unwrap();

    let found = ParkingLotStatusRepo::find_by_key(&pool, &saved.key())
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(found.id, saved.id);

    let other_side = LotKey {
        area_side: "west",
        ..saved.key()
    };
    let missing = ParkingLotStatusRepo::find_by_key(&pool, &other_side)
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// find_all_*
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn filtered_reads_isolate_terminal_type_and_side(pool: PgPool) {
    for (code, terminal, parking_type, side) in [
        ("A", "T1", "long", "east"),
        ("B", "T1", "long", "west"),
        ("C", "T1", "short", "east"),
        ("D", "T2", "long", "east"),
        ("E", "T1", "long", "east"),
    ] {
        ParkingLotStatusRepo::save(&pool, &new_lot(code, terminal, parking_type, side))
            .await
            .unwrap();
    }

    let t1_long = ParkingLotStatusRepo::find_all_by_terminal_and_type(&pool, "T1", "long")
        .await
        .unwrap();
    let codes: Vec<_> = t1_long.iter().map(|r| r.lot_code.as_str()).collect();
    assert_eq!(codes, vec!["A", "B", "E"]);

    let t1_long_east =
        ParkingLotStatusRepo::find_all_by_terminal_type_and_side(&pool, "T1", "long", "east")
            .await
            .unwrap();
    let codes: Vec<_> = t1_long_east.iter().map(|r| r.lot_code.as_str()).collect();
    assert_eq!(codes, vec!["A", "E"]);
    assert!(t1_long_east
        .iter()
        .all(|r| r.terminal == "T1" && r.parking_type == "long" && r.area_side == "east"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn filtered_reads_return_empty_when_nothing_matches(pool: PgPool) {
    let rows = ParkingLotStatusRepo::find_all_by_terminal_type_and_side(&pool, "T2", "short", "west")
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn repo_functions_run_inside_a_transaction(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let saved = ParkingLotStatusRepo::save(&mut *tx, &new_lot("P1", "T1", "long", "east"))
        .await
        .unwrap();
    tx.rollback().await.unwrap();

    let found = ParkingLotStatusRepo::find_by_key(&pool, &saved.key())
        .await
        .unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_passes_after_migrations(pool: PgPool) {
    parking_db::health_check(&pool).await.unwrap();
}
