/// Typed filters applied to holder rows.
///
/// Field filters address a key inside the JSON data column; the holder
/// filter addresses the holder id column itself.
#[derive(Debug, Clone, PartialEq)]
pub enum DataFilter {
    FieldGreaterThan { field: String, value: f64 },
    FieldPresent { field: String },
    HolderNotEqual { holder_id: String },
}
