use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use log::{error, info};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Postgres, Row};
use crate::accounts::structs::account::Account;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::helpers::{
    build_count_query, build_delete_account_query, build_delete_query, build_field_index_query,
    build_find_one_query, build_find_query, build_insert_query, build_replace_query,
    build_select_accounts_query, build_upsert_account_query, BindValue,
};
use crate::database::structs::data_filter::DataFilter;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::holder_record::HolderRecord;
use crate::database::structs::sort_spec::SortSpec;

const ENGINE: DatabaseDrivers = DatabaseDrivers::pgsql;
const LOG_PREFIX: &str = "[PgSQL]";

impl DatabaseConnectorPgSQL {
    pub async fn create(dsl: &str) -> Result<Pool<Postgres>, Error> {
        let options = PgConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        PgPoolOptions::new().connect_with(options).await
    }

    pub async fn database_connector(
        config: Arc<Configuration>,
        create_database: bool,
    ) -> DatabaseConnector {
        let pgsql_connect = DatabaseConnectorPgSQL::create(config.database.path.as_str()).await;
        if let Err(pgsql_connect) = pgsql_connect {
            error!("{} Unable to connect to PostgreSQL on DSL {}", LOG_PREFIX, config.database.path);
            error!("{} Message: {:#?}", LOG_PREFIX, pgsql_connect);
            exit(1);
        }
        let structure = DatabaseConnector {
            mysql: None,
            sqlite: None,
            pgsql: Some(DatabaseConnectorPgSQL { pool: pgsql_connect.unwrap() }),
            engine: ENGINE,
            structure: config.database_structure.clone(),
        };
        if create_database {
            let pool = &structure.pgsql.clone().unwrap().pool;
            info!("[BOOT] Database creation triggered for PostgreSQL.");
            let holders = &config.database_structure.holders;
            info!("[BOOT PgSQL] Creating table {}", holders.table_name);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS {} ({} VARCHAR(255) NOT NULL, {} VARCHAR(255) NOT NULL, {} TEXT NOT NULL, PRIMARY KEY({}, {}))",
                holders.table_name, holders.column_scope, holders.column_holder, holders.column_data,
                holders.column_scope, holders.column_holder
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }
            let accounts = &config.database_structure.accounts;
            info!("[BOOT PgSQL] Creating table {}", accounts.table_name);
            let query = format!(
                "CREATE TABLE IF NOT EXISTS {} ({} VARCHAR(255) NOT NULL PRIMARY KEY, {} VARCHAR(255) NOT NULL, {} TEXT NOT NULL, {} BIGINT NOT NULL DEFAULT 0)",
                accounts.table_name, accounts.column_login, accounts.column_password,
                accounts.column_scopes, accounts.column_created
            );
            if let Err(e) = sqlx::query(&query).execute(pool).await {
                panic!("{} Error: {}", LOG_PREFIX, e);
            }
        }
        structure
    }

    pub(crate) async fn find(
        &self,
        structure: &DatabaseStructureConfig,
        scope: &str,
        filters: &[DataFilter],
        sort: Option<&SortSpec>,
        limit: u64,
        skip: u64,
    ) -> Result<Vec<HolderRecord>, Error> {
        let (sql, binds) = build_find_query(ENGINE, structure, scope, filters, sort, limit, skip);
        let mut query = sqlx::query(&sql);
        for bind in &binds {
            query = match bind {
                BindValue::Text(value) => query.bind(value.as_str()),
                BindValue::Float(value) => query.bind(*value),
                BindValue::Int(value) => query.bind(*value),
            };
        }
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.iter().map(|row| HolderRecord {
            holder_id: row.get(0),
            data: row.get(1),
        }).collect())
    }

    pub(crate) async fn find_one(
        &self,
        structure: &DatabaseStructureConfig,
        scope: &str,
        holder_id: &str,
    ) -> Result<Option<HolderRecord>, Error> {
        let sql = build_find_one_query(ENGINE, structure);
        let row = sqlx::query(&sql)
            .bind(scope)
            .bind(holder_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|row| HolderRecord {
            holder_id: row.get(0),
            data: row.get(1),
        }))
    }

    pub(crate) async fn insert_one(
        &self,
        structure: &DatabaseStructureConfig,
        scope: &str,
        holder_id: &str,
        data: &str,
    ) -> Result<(), Error> {
        let sql = build_insert_query(ENGINE, structure);
        sqlx::query(&sql)
            .bind(scope)
            .bind(holder_id)
            .bind(data)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub(crate) async fn replace_one(
        &self,
        structure: &DatabaseStructureConfig,
        scope: &str,
        holder_id: &str,
        data: &str,
    ) -> Result<bool, Error> {
        let sql = build_replace_query(ENGINE, structure);
        let result = sqlx::query(&sql)
            .bind(data)
            .bind(scope)
            .bind(holder_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub(crate) async fn delete_one(
        &self,
        structure: &DatabaseStructureConfig,
        scope: &str,
        holder_id: &str,
    ) -> Result<bool, Error> {
        let sql = build_delete_query(ENGINE, structure);
        let result = sqlx::query(&sql)
            .bind(scope)
            .bind(holder_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub(crate) async fn count(
        &self,
        structure: &DatabaseStructureConfig,
        scope: &str,
        filters: &[DataFilter],
    ) -> Result<u64, Error> {
        let (sql, binds) = build_count_query(ENGINE, structure, scope, filters);
        let mut query = sqlx::query(&sql);
        for bind in &binds {
            query = match bind {
                BindValue::Text(value) => query.bind(value.as_str()),
                BindValue::Float(value) => query.bind(*value),
                BindValue::Int(value) => query.bind(*value),
            };
        }
        let row = query.fetch_one(&self.pool).await?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }

    pub(crate) async fn create_index(
        &self,
        structure: &DatabaseStructureConfig,
        field: &str,
    ) -> Result<(), Error> {
        if let Some(sql) = build_field_index_query(ENGINE, structure, field) {
            sqlx::query(&sql).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub(crate) async fn load_accounts(
        &self,
        structure: &DatabaseStructureConfig,
    ) -> Result<Vec<Account>, Error> {
        let sql = build_select_accounts_query(ENGINE, structure);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(|row| Account::from_columns(
            row.get(0),
            row.get(1),
            row.get(2),
            row.get(3),
        )).collect())
    }

    pub(crate) async fn upsert_account(
        &self,
        structure: &DatabaseStructureConfig,
        account: &Account,
    ) -> Result<(), Error> {
        let sql = build_upsert_account_query(ENGINE, structure);
        sqlx::query(&sql)
            .bind(account.login.as_str())
            .bind(account.password.as_str())
            .bind(account.scopes_column())
            .bind(account.created)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub(crate) async fn delete_account(
        &self,
        structure: &DatabaseStructureConfig,
        login: &str,
    ) -> Result<bool, Error> {
        let sql = build_delete_account_query(ENGINE, structure);
        let result = sqlx::query(&sql)
            .bind(login)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
