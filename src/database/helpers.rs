use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::data_filter::DataFilter;
use crate::database::structs::sort_spec::SortSpec;

/// A value to be bound to a query placeholder, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Text(String),
    Float(f64),
    Int(i64),
}

pub fn engine_name(engine: DatabaseDrivers) -> &'static str {
    match engine {
        DatabaseDrivers::sqlite3 => "SQLite",
        DatabaseDrivers::mysql => "MySQL",
        DatabaseDrivers::pgsql => "PgSQL",
    }
}

pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
        DatabaseDrivers::pgsql => identifier.to_string(),
    }
}

pub fn placeholder(engine: DatabaseDrivers, index: usize) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => "?".to_string(),
        DatabaseDrivers::pgsql => format!("${}", index),
    }
}

pub fn limit_offset(engine: DatabaseDrivers, start: u64, length: u64) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("LIMIT {}, {}", start, length),
        DatabaseDrivers::pgsql => format!("LIMIT {} OFFSET {}", length, start),
    }
}

pub fn upsert_conflict_clause(engine: DatabaseDrivers, conflict_columns: &str, update_columns: &[&str]) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=excluded.{}", quoted, quoted)
                })
                .collect();
            format!(
                "ON CONFLICT ({}) DO UPDATE SET {}",
                conflict_columns,
                updates.join(", ")
            )
        }
        DatabaseDrivers::mysql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=VALUES({})", quoted, quoted)
                })
                .collect();
            format!("ON DUPLICATE KEY UPDATE {}", updates.join(", "))
        }
    }
}

/// Expression extracting a JSON key from the data column as a double.
///
/// The field name must already have passed `validate_field_name`; it is
/// interpolated, not bound.
pub fn json_number_expr(engine: DatabaseDrivers, data_column: &str, field: &str) -> String {
    let quoted = quote_identifier(engine, data_column);
    match engine {
        DatabaseDrivers::sqlite3 => {
            format!("CAST(json_extract({}, '$.{}') AS REAL)", quoted, field)
        }
        DatabaseDrivers::mysql => {
            format!("CAST(JSON_EXTRACT({}, '$.{}') AS DOUBLE)", quoted, field)
        }
        DatabaseDrivers::pgsql => {
            format!("(({}::jsonb) ->> '{}')::double precision", quoted, field)
        }
    }
}

/// Expression testing that a JSON key exists in the data column.
pub fn json_present_expr(engine: DatabaseDrivers, data_column: &str, field: &str) -> String {
    let quoted = quote_identifier(engine, data_column);
    match engine {
        DatabaseDrivers::sqlite3 => {
            format!("json_extract({}, '$.{}') IS NOT NULL", quoted, field)
        }
        DatabaseDrivers::mysql => {
            format!("JSON_EXTRACT({}, '$.{}') IS NOT NULL", quoted, field)
        }
        DatabaseDrivers::pgsql => {
            format!("(({}::jsonb) ->> '{}') IS NOT NULL", quoted, field)
        }
    }
}

fn where_clause(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfig,
    filters: &[DataFilter],
    binds: &mut Vec<BindValue>,
    scope: &str,
) -> String {
    let holders = &structure.holders;
    let mut conditions = vec![format!(
        "{}={}",
        quote_identifier(engine, &holders.column_scope),
        placeholder(engine, binds.len() + 1)
    )];
    binds.push(BindValue::Text(scope.to_string()));
    for filter in filters {
        match filter {
            DataFilter::FieldGreaterThan { field, value } => {
                conditions.push(format!(
                    "{}>{}",
                    json_number_expr(engine, &holders.column_data, field),
                    placeholder(engine, binds.len() + 1)
                ));
                binds.push(BindValue::Float(*value));
            }
            DataFilter::FieldPresent { field } => {
                conditions.push(json_present_expr(engine, &holders.column_data, field));
            }
            DataFilter::HolderNotEqual { holder_id } => {
                conditions.push(format!(
                    "{}!={}",
                    quote_identifier(engine, &holders.column_holder),
                    placeholder(engine, binds.len() + 1)
                ));
                binds.push(BindValue::Text(holder_id.to_string()));
            }
        }
    }
    conditions.join(" AND ")
}

/// `SELECT holder, data FROM holders WHERE ... [ORDER BY ...] LIMIT ...`
pub fn build_find_query(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfig,
    scope: &str,
    filters: &[DataFilter],
    sort: Option<&SortSpec>,
    limit: u64,
    skip: u64,
) -> (String, Vec<BindValue>) {
    let holders = &structure.holders;
    let mut binds = Vec::new();
    let conditions = where_clause(engine, structure, filters, &mut binds, scope);
    let order = match sort {
        Some(sort) => {
            let direction = if sort.descending { "DESC" } else { "ASC" };
            format!(
                " ORDER BY {} {}, {} ASC",
                json_number_expr(engine, &holders.column_data, &sort.field),
                direction,
                quote_identifier(engine, &holders.column_holder)
            )
        }
        None => String::new(),
    };
    let query = format!(
        "SELECT {}, {} FROM {} WHERE {}{} {}",
        quote_identifier(engine, &holders.column_holder),
        quote_identifier(engine, &holders.column_data),
        quote_identifier(engine, &holders.table_name),
        conditions,
        order,
        limit_offset(engine, skip, limit)
    );
    (query, binds)
}

pub fn build_count_query(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfig,
    scope: &str,
    filters: &[DataFilter],
) -> (String, Vec<BindValue>) {
    let mut binds = Vec::new();
    let conditions = where_clause(engine, structure, filters, &mut binds, scope);
    let query = format!(
        "SELECT COUNT(*) FROM {} WHERE {}",
        quote_identifier(engine, &structure.holders.table_name),
        conditions
    );
    (query, binds)
}

pub fn build_find_one_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let holders = &structure.holders;
    format!(
        "SELECT {}, {} FROM {} WHERE {}={} AND {}={}",
        quote_identifier(engine, &holders.column_holder),
        quote_identifier(engine, &holders.column_data),
        quote_identifier(engine, &holders.table_name),
        quote_identifier(engine, &holders.column_scope),
        placeholder(engine, 1),
        quote_identifier(engine, &holders.column_holder),
        placeholder(engine, 2)
    )
}

pub fn build_insert_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let holders = &structure.holders;
    format!(
        "INSERT INTO {} ({}, {}, {}) VALUES ({}, {}, {})",
        quote_identifier(engine, &holders.table_name),
        quote_identifier(engine, &holders.column_scope),
        quote_identifier(engine, &holders.column_holder),
        quote_identifier(engine, &holders.column_data),
        placeholder(engine, 1),
        placeholder(engine, 2),
        placeholder(engine, 3)
    )
}

pub fn build_replace_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let holders = &structure.holders;
    format!(
        "UPDATE {} SET {}={} WHERE {}={} AND {}={}",
        quote_identifier(engine, &holders.table_name),
        quote_identifier(engine, &holders.column_data),
        placeholder(engine, 1),
        quote_identifier(engine, &holders.column_scope),
        placeholder(engine, 2),
        quote_identifier(engine, &holders.column_holder),
        placeholder(engine, 3)
    )
}

pub fn build_delete_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let holders = &structure.holders;
    format!(
        "DELETE FROM {} WHERE {}={} AND {}={}",
        quote_identifier(engine, &holders.table_name),
        quote_identifier(engine, &holders.column_scope),
        placeholder(engine, 1),
        quote_identifier(engine, &holders.column_holder),
        placeholder(engine, 2)
    )
}

pub fn build_select_accounts_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let accounts = &structure.accounts;
    format!(
        "SELECT {}, {}, {}, {} FROM {}",
        quote_identifier(engine, &accounts.column_login),
        quote_identifier(engine, &accounts.column_password),
        quote_identifier(engine, &accounts.column_scopes),
        quote_identifier(engine, &accounts.column_created),
        quote_identifier(engine, &accounts.table_name)
    )
}

pub fn build_upsert_account_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let accounts = &structure.accounts;
    let conflict = upsert_conflict_clause(
        engine,
        &quote_identifier(engine, &accounts.column_login),
        &[&accounts.column_password, &accounts.column_scopes, &accounts.column_created],
    );
    format!(
        "INSERT INTO {} ({}, {}, {}, {}) VALUES ({}, {}, {}, {}) {}",
        quote_identifier(engine, &accounts.table_name),
        quote_identifier(engine, &accounts.column_login),
        quote_identifier(engine, &accounts.column_password),
        quote_identifier(engine, &accounts.column_scopes),
        quote_identifier(engine, &accounts.column_created),
        placeholder(engine, 1),
        placeholder(engine, 2),
        placeholder(engine, 3),
        placeholder(engine, 4),
        conflict
    )
}

pub fn build_delete_account_query(engine: DatabaseDrivers, structure: &DatabaseStructureConfig) -> String {
    let accounts = &structure.accounts;
    format!(
        "DELETE FROM {} WHERE {}={}",
        quote_identifier(engine, &accounts.table_name),
        quote_identifier(engine, &accounts.column_login),
        placeholder(engine, 1)
    )
}

/// Expression index over one leaderboard field where the engine supports it.
/// MySQL has no expression indexes over JSON extracts without generated
/// columns, so it returns None and relies on the scope index.
pub fn build_field_index_query(
    engine: DatabaseDrivers,
    structure: &DatabaseStructureConfig,
    field: &str,
) -> Option<String> {
    let holders = &structure.holders;
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => Some(format!(
            "CREATE INDEX IF NOT EXISTS {} ON {} (({}))",
            format!("idx_{}_{}", holders.table_name, field),
            quote_identifier(engine, &holders.table_name),
            json_number_expr(engine, &holders.column_data, field)
        )),
        DatabaseDrivers::mysql => None,
    }
}
