//! Integration tests for the confview completion and show layer

mod cli_end_to_end;
mod completion;
mod dedup_properties;
mod show_formats;
mod subscriptions;
mod test_utils;
