//! Subscription registry: callbacks attached to named event streams.

use crate::error::ShowError;
use crate::notify::filter::GlobFilter;
use crate::tree::{Node, PathEvaluator, TreeEvaluator};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Payload encoding a subscriber expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyFormat {
    Xml,
    Text,
}

/// One event delivered to a subscriber.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Text(&'a str),
    Xml(&'a Node),
}

/// Subscriber callback, invoked with the event and the subscription's argument.
pub type SubscriptionFn = Arc<dyn Fn(&Event<'_>, &str) -> Result<(), ShowError> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

enum Filter {
    Text(GlobFilter),
    Xml(String),
}

/// A registered subscription.
pub struct Subscription {
    id: SubscriptionId,
    stream: String,
    format: NotifyFormat,
    filter: Filter,
    callback: SubscriptionFn,
    arg: String,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }

    pub fn format(&self) -> NotifyFormat {
        self.format
    }

    pub fn filter(&self) -> &str {
        match &self.filter {
            Filter::Text(glob) => glob.pattern(),
            Filter::Xml(path) => path,
        }
    }

    pub fn arg(&self) -> &str {
        &self.arg
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("stream", &self.stream)
            .field("format", &self.format)
            .field("filter", &self.filter())
            .field("arg", &self.arg)
            .finish()
    }
}

/// Ordered collection of subscriptions.
///
/// Text subscriptions filter with a glob pattern, XML subscriptions with a
/// path expression that must select at least one node of the event. An
/// empty filter matches every event on the stream.
pub struct SubscriptionRegistry {
    entries: Vec<Subscription>,
    next_id: u64,
    evaluator: Arc<dyn TreeEvaluator>,
}

impl Default for SubscriptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::with_evaluator(Arc::new(PathEvaluator::new()))
    }

    pub fn with_evaluator(evaluator: Arc<dyn TreeEvaluator>) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            evaluator,
        }
    }

    /// Add a subscription at the end of the registry.
    ///
    /// A text filter must be a valid glob pattern.
    pub fn subscribe(
        &mut self,
        stream: &str,
        format: NotifyFormat,
        filter: &str,
        callback: SubscriptionFn,
        arg: &str,
    ) -> Result<SubscriptionId, ShowError> {
        let filter = match format {
            NotifyFormat::Text => Filter::Text(GlobFilter::new(filter)?),
            NotifyFormat::Xml => Filter::Xml(filter.to_string()),
        };
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push(Subscription {
            id,
            stream: stream.to_string(),
            format,
            filter,
            callback,
            arg: arg.to_string(),
        });
        debug!(id = %id, stream = %stream, "Added subscription");
        Ok(id)
    }

    /// Remove the first subscription on `stream` with the same callback and
    /// an equal argument. Returns whether one was removed.
    pub fn unsubscribe(&mut self, stream: &str, callback: &SubscriptionFn, arg: &str) -> bool {
        let position = self.entries.iter().position(|s| {
            s.stream == stream && Arc::ptr_eq(&s.callback, callback) && s.arg == arg
        });
        match position {
            Some(index) => {
                let removed = self.entries.remove(index);
                debug!(id = %removed.id, stream = %stream, "Removed subscription");
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subscription> {
        self.entries.iter()
    }

    /// Cursor-style iteration: returns the entry at `*cursor` and advances it.
    pub fn each(&self, cursor: &mut usize) -> Option<&Subscription> {
        let entry = self.entries.get(*cursor)?;
        *cursor += 1;
        Some(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "Cleared subscriptions");
        self.entries.clear();
    }

    /// Deliver a text event to the matching text subscribers on `stream`.
    ///
    /// Returns the number of callbacks invoked. The first callback error
    /// stops delivery.
    pub fn dispatch_text(&self, stream: &str, text: &str) -> Result<usize, ShowError> {
        let event = Event::Text(text);
        let mut invoked = 0;
        for sub in self.entries.iter().filter(|s| s.stream == stream) {
            let Filter::Text(glob) = &sub.filter else {
                continue;
            };
            if !glob.matches(text) {
                continue;
            }
            trace!(id = %sub.id, "Delivering text event");
            (sub.callback)(&event, &sub.arg)?;
            invoked += 1;
        }
        Ok(invoked)
    }

    /// Deliver an XML event to the matching XML subscribers on `stream`.
    pub fn dispatch_xml(&self, stream: &str, node: &Node) -> Result<usize, ShowError> {
        let event = Event::Xml(node);
        let mut invoked = 0;
        for sub in self.entries.iter().filter(|s| s.stream == stream) {
            let Filter::Xml(path) = &sub.filter else {
                continue;
            };
            if !path.is_empty() && self.evaluator.select(node, path)?.is_empty() {
                continue;
            }
            trace!(id = %sub.id, "Delivering xml event");
            (sub.callback)(&event, &sub.arg)?;
            invoked += 1;
        }
        Ok(invoked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, SubscriptionFn) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback: SubscriptionFn = Arc::new(move |event: &Event<'_>, arg: &str| -> Result<(), ShowError> {
            let text = match event {
                Event::Text(t) => t.to_string(),
                Event::Xml(n) => n.name().to_string(),
            };
            sink.lock().push(format!("{}:{}", arg, text));
            Ok(())
        });
        (seen, callback)
    }

    #[test]
    fn test_subscribe_and_iterate_in_order() {
        let (_, cb) = recorder();
        let mut registry = SubscriptionRegistry::new();
        let a = registry.subscribe("NETCONF", NotifyFormat::Xml, "", cb.clone(), "a").unwrap();
        let b = registry.subscribe("CLICON", NotifyFormat::Text, "*", cb, "b").unwrap();
        assert_ne!(a, b);

        let streams: Vec<&str> = registry.iter().map(Subscription::stream).collect();
        assert_eq!(streams, vec!["NETCONF", "CLICON"]);

        let mut cursor = 0;
        assert_eq!(registry.each(&mut cursor).unwrap().id(), a);
        assert_eq!(registry.each(&mut cursor).unwrap().id(), b);
        assert!(registry.each(&mut cursor).is_none());
    }

    #[test]
    fn test_unsubscribe_matches_stream_callback_and_arg() {
        let (_, cb) = recorder();
        let (_, other) = recorder();
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe("s", NotifyFormat::Text, "", cb.clone(), "x").unwrap();
        registry.subscribe("s", NotifyFormat::Text, "", cb.clone(), "y").unwrap();

        assert!(!registry.unsubscribe("s", &other, "x"));
        assert!(!registry.unsubscribe("t", &cb, "x"));
        assert!(!registry.unsubscribe("s", &cb, "z"));
        assert!(registry.unsubscribe("s", &cb, "x"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().next().unwrap().arg(), "y");

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_dispatch_text_applies_glob() {
        let (seen, cb) = recorder();
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe("log", NotifyFormat::Text, "link*", cb.clone(), "links").unwrap();
        registry.subscribe("log", NotifyFormat::Text, "", cb.clone(), "all").unwrap();
        registry.subscribe("other", NotifyFormat::Text, "", cb, "other").unwrap();

        assert_eq!(registry.dispatch_text("log", "link down").unwrap(), 2);
        assert_eq!(registry.dispatch_text("log", "commit done").unwrap(), 1);
        assert_eq!(
            *seen.lock(),
            vec!["links:link down", "all:link down", "all:commit done"]
        );
    }

    #[test]
    fn test_dispatch_xml_applies_path_filter() {
        let (seen, cb) = recorder();
        let mut registry = SubscriptionRegistry::new();
        registry
            .subscribe("NETCONF", NotifyFormat::Xml, "/link-down", cb.clone(), "down")
            .unwrap();
        registry.subscribe("NETCONF", NotifyFormat::Text, "", cb, "text").unwrap();

        let up = Node::element("notification").with_child(Node::element("link-up"));
        let down = Node::element("notification").with_child(Node::element("link-down"));
        assert_eq!(registry.dispatch_xml("NETCONF", &up).unwrap(), 0);
        assert_eq!(registry.dispatch_xml("NETCONF", &down).unwrap(), 1);
        assert_eq!(*seen.lock(), vec!["down:notification"]);
    }

    #[test]
    fn test_callback_error_stops_dispatch() {
        let (seen, cb) = recorder();
        let failing: SubscriptionFn = Arc::new(|_: &Event<'_>, _: &str| -> Result<(), ShowError> {
            Err(ShowError::InvalidArguments("refused".into()))
        });
        let mut registry = SubscriptionRegistry::new();
        registry.subscribe("s", NotifyFormat::Text, "", failing, "f").unwrap();
        registry.subscribe("s", NotifyFormat::Text, "", cb, "after").unwrap();

        assert!(registry.dispatch_text("s", "event").is_err());
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let (_, cb) = recorder();
        let mut registry = SubscriptionRegistry::new();
        assert!(registry.subscribe("s", NotifyFormat::Text, "[", cb, "").is_err());
        assert!(registry.is_empty());
    }
}
