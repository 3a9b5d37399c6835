//! Shared fixtures for integration tests.

use confview::context::ShowContext;
use confview::store::MemoryStore;
use confview::tree::{ConfigSubtree, Node};
use confview::types::ConfigInstance;
use std::sync::Arc;

pub fn interface(name: &str, mtu: &str) -> Node {
    Node::element("interface")
        .with_child(Node::leaf("name", name))
        .with_child(Node::leaf("mtu", mtu))
}

/// Running holds two interfaces and a hostname; candidate adds a third
/// interface; startup is empty.
pub fn fixture() -> (Arc<MemoryStore>, ShowContext) {
    let running = Node::element("config")
        .with_child(
            Node::element("interfaces")
                .with_child(interface("eth0", "1500"))
                .with_child(interface("eth1", "9000")),
        )
        .with_child(Node::element("system").with_child(Node::leaf("hostname", "r1")));
    let candidate = Node::element("config").with_child(
        Node::element("interfaces")
            .with_child(interface("eth0", "1500"))
            .with_child(interface("eth1", "9000"))
            .with_child(interface("eth2", "1500")),
    );
    let store = Arc::new(
        MemoryStore::new()
            .with_instance(ConfigInstance::Running, ConfigSubtree::new(running))
            .with_instance(ConfigInstance::Candidate, ConfigSubtree::new(candidate)),
    );
    (store.clone(), ShowContext::new(store))
}
