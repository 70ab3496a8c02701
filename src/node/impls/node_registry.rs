use std::net::SocketAddr;
use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::common::structs::custom_error::CustomError;
use crate::node::structs::node::Node;
use crate::node::structs::node_registry::NodeRegistry;

impl NodeRegistry {
    pub fn new() -> NodeRegistry {
        NodeRegistry { nodes: RwLock::new(AHashMap::new()) }
    }

    /// Admits a node unless its id or remote address is already connected.
    pub fn register(&self, node: Arc<Node>) -> Result<(), CustomError> {
        let mut nodes = self.nodes.write();
        if nodes.contains_key(&node.id) {
            return Err(CustomError::new("node id already connected"));
        }
        if nodes.values().any(|existing| existing.remote_addr.ip() == node.remote_addr.ip()
            && existing.remote_addr.port() == node.remote_addr.port()) {
            return Err(CustomError::new("remote address already connected"));
        }
        nodes.insert(node.id.clone(), node);
        Ok(())
    }

    pub fn unregister(&self, node_id: &str) -> Option<Arc<Node>> {
        self.nodes.write().remove(node_id)
    }

    pub fn get(&self, node_id: &str) -> Option<Arc<Node>> {
        self.nodes.read().get(node_id).cloned()
    }

    pub fn find_by_addr(&self, addr: &SocketAddr) -> Option<Arc<Node>> {
        self.nodes.read().values()
            .find(|node| node.remote_addr == *addr)
            .cloned()
    }

    pub fn list(&self) -> Vec<Arc<Node>> {
        self.nodes.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        NodeRegistry::new()
    }
}
