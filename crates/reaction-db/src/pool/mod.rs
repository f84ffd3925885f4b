//! Database connection pool management

mod postgres;

pub use postgres::connect;

pub use sqlx::postgres::PgPool;
