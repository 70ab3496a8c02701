use sqlx::{Pool, Sqlite};

#[derive(Clone)]
pub struct DatabaseConnectorSQLite {
    pub pool: Pool<Sqlite>,
}
