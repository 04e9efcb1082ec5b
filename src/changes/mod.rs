//! Change-set resolution for incremental dataset checks.
//!
//! Works out which lines of a dataset file need checking for a commit range:
//! - Commit list from `git log --format=%h {from}..{to}` (or the local branch
//!   against its remote tracking branch when no range is given)
//! - Line attribution from `git blame --porcelain`
//! - Lines blamed on a commit in the list are "committed" changes
//! - Lines blamed on the all-zero hash are "uncommitted" changes

mod api;
mod parser;
mod range;
mod resolver;


pub use api::{ChangeSet, ChangeSetResolver, LineScope};
pub use range::CommitRange;
pub use resolver::GitBlameResolver;
