// src/reporting/mod.rs
//! Output formatting for graph inspection, paths and components.

pub mod console;
pub mod json;

pub use console::{
    print_adjacency, print_components, print_edges, print_ego, print_matches, print_path,
    print_summary, render_adjacency, render_components, render_edges, render_ego, render_matches,
    render_path, render_summary, truncate,
};
pub use json::{format_components, format_ego, format_path};
