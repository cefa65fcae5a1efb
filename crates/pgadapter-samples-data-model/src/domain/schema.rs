//! Data model schema.
//!
//! The Cloud Spanner `PostgreSQL` dialect does not support all `pg_catalog`
//! tables that migration tools rely on, so the schema is created from a
//! single DDL script instead of migrations.

/// Tables created by `CREATE_DATA_MODEL`, in creation order.
pub const EXPECTED_TABLES: [&str; 6] = [
    "Singers",
    "Albums",
    "Tracks",
    "Venues",
    "Concerts",
    "TicketSales",
];

/// Number of tables the catalog query must find for the schema to count as
/// present.
#[allow(clippy::cast_possible_wrap)]
pub const EXPECTED_TABLE_COUNT: i64 = EXPECTED_TABLES.len() as i64;

/// Sequences created by `CREATE_DATA_MODEL`, in creation order.
pub const SEQUENCES: [&str; 5] = [
    "singers_seq",
    "albums_seq",
    "venues_seq",
    "concerts_seq",
    "ticket_sales_seq",
];

/// SQL counting how many of `EXPECTED_TABLES` exist in the `public` schema.
pub const COUNT_EXISTING_TABLES: &str = r"SELECT COUNT(1) AS c
           FROM information_schema.tables
           WHERE table_schema='public'
             AND table_name IN ('Singers', 'Albums', 'Tracks', 'Venues', 'Concerts', 'TicketSales')";

/// SQL to create the sequences and tables of the data model.
///
/// Parents are created before children: `Albums` references `Singers`,
/// `Tracks` is interleaved in `Albums`, `Concerts` references `Venues` and
/// `Singers`, and `TicketSales` references `Concerts`.
pub const CREATE_DATA_MODEL: &str = r#"
create sequence if not exists singers_seq bit_reversed_positive;
create table "Singers" (
  id          bigint not null primary key default nextval('singers_seq'),
  "firstName" varchar,
  "lastName"  varchar,
  "fullName"  varchar generated always as (
     CASE WHEN "firstName" IS NULL THEN "lastName"
          WHEN "lastName"  IS NULL THEN "firstName"
          ELSE "firstName" || ' ' || "lastName"
     END) stored,
  "active"    boolean,
  "createdAt" timestamptz,
  "updatedAt" timestamptz
);

create sequence if not exists albums_seq bit_reversed_positive;
create table "Albums" (
  id                bigint not null primary key default nextval('albums_seq'),
  title             varchar,
  "marketingBudget" numeric,
  "SingerId"        bigint,
  "createdAt"       timestamptz,
  "updatedAt"       timestamptz,
  constraint fk_albums_singers foreign key ("SingerId") references "Singers" (id)
);

create table if not exists "Tracks" (
  id            bigint not null,
  "trackNumber" bigint not null,
  title         varchar not null,
  "sampleRate"  float8 not null,
  "createdAt"   timestamptz,
  "updatedAt"   timestamptz,
  primary key (id, "trackNumber")
) interleave in parent "Albums" on delete cascade;

create sequence if not exists venues_seq bit_reversed_positive;
create table if not exists "Venues" (
  id          bigint not null primary key default nextval('venues_seq'),
  name        varchar not null,
  description varchar not null,
  "createdAt" timestamptz,
  "updatedAt" timestamptz
);

create sequence if not exists concerts_seq bit_reversed_positive;
create table if not exists "Concerts" (
  id          bigint not null primary key default nextval('concerts_seq'),
  "VenueId"   bigint not null,
  "SingerId"  bigint not null,
  name        varchar not null,
  "startTime" timestamptz not null,
  "endTime"   timestamptz not null,
  "createdAt" timestamptz,
  "updatedAt" timestamptz,
  constraint fk_concerts_venues  foreign key ("VenueId")  references "Venues"  (id),
  constraint fk_concerts_singers foreign key ("SingerId") references "Singers" (id),
  constraint chk_end_time_after_start_time check ("endTime" > "startTime")
);

create sequence if not exists ticket_sales_seq bit_reversed_positive;
create table if not exists "TicketSales" (
  id             bigint not null primary key default nextval('ticket_sales_seq'),
  "ConcertId"    bigint not null,
  "customerName" varchar not null,
  price          decimal not null,
  seats          text[],
  "createdAt"    timestamptz,
  "updatedAt"    timestamptz,
  constraint fk_ticket_sales_concerts foreign key ("ConcertId") references "Concerts" (id)
);
"#;
