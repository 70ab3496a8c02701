use std::sync::Arc;
use crate::node::structs::node::Node;

/// Outcome of an authentication attempt, dispatched exhaustively by the
/// connection actor.
pub enum AuthResult {
    Success(Arc<Node>),
    WrongCredentials,
    InvalidNodeName,
    AlreadyAuthenticated,
    NodeAlreadyExists,
}
