//! Submodule providing the graph facade: thin,
//! spec-driven aliases over the closure engine, exposed
//! under the names spec.md §4.7 gives them.

pub use crate::closure::{all_pairs_paths, bottleneck_paths, reachability, single_source_paths};
