//! Record linkage between college statistics rows and draft history.
//!
//! Names and schools are spelled differently across sources, so both sides
//! are canonicalized with [`normalize`], school names are passed through an
//! [`AliasTable`] of known renames, and candidates are scored with a
//! token-set similarity before the acceptance rules in [`DraftMatcher`]
//! decide the match.

#![deny(unsafe_code)]

pub mod alias;
pub mod matcher;
pub mod normalize;
pub mod score;
pub mod teams;

pub use alias::AliasTable;
pub use matcher::{DraftMatcher, MatchOptions, MatchOutcome, MatchRule};
pub use normalize::{normalize, normalize_str};
pub use score::{ratio, token_set_ratio};
pub use teams::TeamDirectory;
