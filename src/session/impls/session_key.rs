use crate::session::structs::session_key::SessionKey;

impl SessionKey {
    pub fn new(scope_id: &str, holder_id: &str) -> SessionKey {
        SessionKey {
            scope_id: scope_id.to_string(),
            holder_id: holder_id.to_string(),
        }
    }
}

impl std::fmt::Display for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.scope_id, self.holder_id)
    }
}
