/// The `(scope, holder)` pair a session binds to one owning node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub scope_id: String,
    pub holder_id: String,
}
