//! Completion candidates for interactive commands.

mod candidates;
mod dir;

pub use candidates::{
    candidate_value, complete_argv, dedup_values, expand_candidates, expand_into,
    expand_into_spec, CandidateList, LegacyBuffer,
};
pub use dir::{expand_dir, MAX_DIR_ENTRIES};
