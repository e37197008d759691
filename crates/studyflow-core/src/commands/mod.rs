//! Commands Layer
//!
//! User-triggered mutations. Each handler takes the store and its arguments,
//! mutates in place and reports an [`Outcome`]; persisting is the caller's job.

mod outcome;
mod tracker_cmd;
mod hub_cmd;

pub use outcome::{Notice, NoticeKind, Outcome};
pub use tracker_cmd::*;
pub use hub_cmd::*;
