use confview::error::ShowError;
use confview::notify::{Event, NotifyFormat, SubscriptionFn, SubscriptionRegistry};
use confview::tree::Node;
use parking_lot::Mutex;
use std::sync::Arc;

#[test]
fn test_registry_lifecycle() {
    let seen = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = seen.clone();
    let callback: SubscriptionFn =
        Arc::new(move |event: &Event<'_>, arg: &str| -> Result<(), ShowError> {
            if let Event::Xml(node) = event {
                let name = node
                    .find("interface")
                    .and_then(|i| i.find("name"))
                    .and_then(Node::body_text)
                    .unwrap_or_default();
                sink.lock().push(format!("{}:{}", arg, name));
            }
            Ok(())
        });

    let mut registry = SubscriptionRegistry::new();
    registry
        .subscribe("NETCONF", NotifyFormat::Xml, "/interface[name=eth0]", callback.clone(), "eth0")
        .unwrap();
    registry
        .subscribe("NETCONF", NotifyFormat::Xml, "", callback.clone(), "any")
        .unwrap();

    let event = |name: &str| {
        Node::element("notification")
            .with_child(Node::element("interface").with_child(Node::leaf("name", name)))
    };
    assert_eq!(registry.dispatch_xml("NETCONF", &event("eth0")).unwrap(), 2);
    assert_eq!(registry.dispatch_xml("NETCONF", &event("eth1")).unwrap(), 1);
    assert_eq!(*seen.lock(), vec!["eth0:eth0", "any:eth0", "any:eth1"]);

    assert!(registry.unsubscribe("NETCONF", &callback, "any"));
    assert_eq!(registry.dispatch_xml("NETCONF", &event("eth1")).unwrap(), 0);

    registry.clear();
    assert!(registry.iter().next().is_none());
}
