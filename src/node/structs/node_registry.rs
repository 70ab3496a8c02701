use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::node::structs::node::Node;

/// Live nodes keyed by node id. At most one connection per node id and per
/// remote address is admitted.
pub struct NodeRegistry {
    pub(crate) nodes: RwLock<AHashMap<String, Arc<Node>>>,
}
