/// One holder row: the holder id plus its JSON object data as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct HolderRecord {
    pub holder_id: String,
    pub data: String,
}
