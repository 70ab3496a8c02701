use sqlx::{MySql, Pool};

#[derive(Clone)]
pub struct DatabaseConnectorMySQL {
    pub pool: Pool<MySql>,
}
