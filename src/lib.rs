//! Greedy vertex coloring heuristics (Greedy, Welsh-Powell, DSATUR, RLF) over a generic
//! undirected graph, with a caller-supplied ordered palette.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// crate error type
pub mod error;

/// undirected graph
pub mod graph;

/// colorings, solution checker
pub mod color;

/// helper and utility methods for executables
pub mod util;

/// coloring heuristics
pub mod search;

pub use error::{ColorError, Result};
pub use graph::{Graph, Vertex};
pub use color::{Coloring, CheckerResult, checker, nb_colors};
pub use search::{Heuristic, greedy, welsh_powell, dsatur, rlf};
