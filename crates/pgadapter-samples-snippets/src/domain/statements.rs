//! Statements sent by the create-tables snippet.

/// Starts a DDL batch on PGAdapter. Statements are buffered until `RUN_BATCH`.
pub const START_BATCH_DDL: &str = "start batch ddl";

/// Sends all buffered DDL statements to Spanner as one batch.
pub const RUN_BATCH: &str = "run batch";

/// Tables created by the snippet, parent first.
pub const SNIPPET_TABLES: [&str; 2] = ["singers", "albums"];

/// SQL to create the `singers` table.
pub const CREATE_SINGERS_TABLE: &str = concat!(
    "create table singers (",
    "  singer_id   bigint primary key not null,",
    "  first_name  character varying(1024),",
    "  last_name   character varying(1024),",
    "  singer_info bytea,",
    "  full_name   character varying(2048) generated ",
    "  always as (first_name || ' ' || last_name) stored",
    ")",
);

/// SQL to create the `albums` table, interleaved in `singers`.
pub const CREATE_ALBUMS_TABLE: &str = concat!(
    "create table albums (",
    "  singer_id     bigint not null,",
    "  album_id      bigint not null,",
    "  album_title   character varying(1024),",
    "  primary key (singer_id, album_id)",
    ") interleave in parent singers on delete cascade",
);

/// Statements of the snippet in the order they are sent.
pub const CREATE_TABLES_BATCH: [&str; 4] = [
    START_BATCH_DDL,
    CREATE_SINGERS_TABLE,
    CREATE_ALBUMS_TABLE,
    RUN_BATCH,
];
