use sqlx::{Pool, Postgres};

#[derive(Clone)]
pub struct DatabaseConnectorPgSQL {
    pub pool: Pool<Postgres>,
}
