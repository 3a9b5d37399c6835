//! Event-stream subscriptions.

mod filter;
mod registry;

pub use filter::{glob_regex, GlobFilter};
pub use registry::{
    Event, NotifyFormat, Subscription, SubscriptionFn, SubscriptionId, SubscriptionRegistry,
};
