//! Integration tests for the create-tables snippet against the PGAdapter
//! emulator.
//!
//! These need Docker and registry access: `cargo test -- --ignored`.

use pgadapter_samples_emulator::{EmulatorConfig, PgAdapterEmulator, start_pg_adapter};
use pgadapter_samples_snippets::application::create_tables::create_tables;
use sqlx::{Connection, PgConnection};
use uuid::Uuid;

fn fresh_database() -> String {
    format!("test-{}", Uuid::new_v4().simple())
        .chars()
        .take(30)
        .collect()
}

async fn connect(emulator: &PgAdapterEmulator, database: &str) -> PgConnection {
    PgConnection::connect(&emulator.connection_url(database))
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_tables_creates_singers_and_albums() {
    let emulator = start_pg_adapter(&EmulatorConfig::default()).await.unwrap();
    let database = fresh_database();

    let created = create_tables(emulator.host(), emulator.port(), &database)
        .await
        .unwrap();

    assert_eq!(created, vec!["singers", "albums"]);
    let mut conn = connect(&emulator, &database).await;
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(1) FROM information_schema.tables \
         WHERE table_schema='public' AND table_name IN ('singers', 'albums')",
    )
    .fetch_one(&mut conn)
    .await
    .unwrap();
    assert_eq!(count, 2);

    conn.close().await.unwrap();
    emulator.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_deleting_singer_cascades_to_albums() {
    let emulator = start_pg_adapter(&EmulatorConfig::default()).await.unwrap();
    let database = fresh_database();
    create_tables(emulator.host(), emulator.port(), &database)
        .await
        .unwrap();
    let mut conn = connect(&emulator, &database).await;

    sqlx::query("insert into singers (singer_id, first_name, last_name) values (1, 'Alice', 'Trent')")
        .execute(&mut conn)
        .await
        .unwrap();
    sqlx::query("insert into albums (singer_id, album_id, album_title) values (1, 1, 'Go, Go, Go')")
        .execute(&mut conn)
        .await
        .unwrap();
    let full_name: String = sqlx::query_scalar("select full_name from singers where singer_id = 1")
        .fetch_one(&mut conn)
        .await
        .unwrap();
    assert_eq!(full_name, "Alice Trent");

    sqlx::query("delete from singers where singer_id = 1")
        .execute(&mut conn)
        .await
        .unwrap();

    let albums: i64 = sqlx::query_scalar("select count(1) from albums")
        .fetch_one(&mut conn)
        .await
        .unwrap();
    assert_eq!(albums, 0);

    conn.close().await.unwrap();
    emulator.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_tables_twice_fails() {
    let emulator = start_pg_adapter(&EmulatorConfig::default()).await.unwrap();
    let database = fresh_database();
    create_tables(emulator.host(), emulator.port(), &database)
        .await
        .unwrap();

    let result = create_tables(emulator.host(), emulator.port(), &database).await;

    assert!(result.is_err());
    emulator.stop().await.unwrap();
}
