//! Sccbench decomposes a directed graph into its strongly connected components with three classic
//! algorithms (Tarjan's lowlink algorithm, Gabow's path-based algorithm and the Kosaraju-Sharir
//! two-pass algorithm) and compares their running times on the same graphs.
//!
//! All engines walk the graph with an explicit work stack, so arbitrarily long paths cannot
//! exhaust the native call stack.

// Enable warnings for all clippy lints. This automatically enables new lints shipped with new rust
// versions.
#![warn(
    clippy::correctness,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::cargo,
    clippy::restriction
)]
// Now selectively disable unneeded lints.
#![allow(
    clippy::indexing_slicing,               // Allow `vec[i]` indexing.
    clippy::module_name_repetitions,        // Allow.
    clippy::use_debug,                      // Allow.
    clippy::float_arithmetic,               // Allow.
    clippy::integer_arithmetic,             // Allow.
    clippy::integer_division,               // Allow.
    clippy::implicit_return,                // Allow.
    clippy::use_self,                       // Allow.
    clippy::shadow_same,                    // Allow.
    clippy::too_many_lines,                 // Allow.
    clippy::multiple_crate_versions,        // Disabled.
    clippy::missing_docs_in_private_items,  // Disabled.
    clippy::missing_errors_doc,             // Disabled.
    clippy::missing_inline_in_public_items, // Disabled.
    clippy::unknown_clippy_lints,           // To enable naming new lints added to nightly.
    clippy::result_expect_used,             // Should use `expect` rather than `unwrap`.
    clippy::option_expect_used,             // Should use `expect` rather than `unwrap`.
    clippy::panic,                          // Allow.
    clippy::must_use_candidate,             // Allow.
    clippy::inline_always,                  // Allow.
    clippy::as_conversions                  // Vertex ids are widened to `usize` for indexing.
)]
// Do not allow print statements. Use `log::info!()` or equivalent instead.
#![deny(clippy::print_stdout)]

pub mod benchmark;
pub mod computations;
pub mod error;
pub mod graph;
pub mod util;

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate derive_new;

use crate::benchmark::{execute_request, BenchmarkRequest};
use crate::error::SccError;

/// Executes the benchmark described by `request` and returns a one-line summary.
pub fn run_benchmark(request: &BenchmarkRequest) -> Result<String, SccError> {
    let tables = execute_request(request)?;
    let graph_count: usize = tables.iter().map(|table| table.vertex_counts.len()).sum();
    Ok(format!("{} tables over {} graphs done", tables.len(), graph_count))
}
