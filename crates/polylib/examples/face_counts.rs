//! Print (V, E, F) and facet orders for named constructors, for quick sanity on counts.
//!
//! Usage:
//!   cargo run -p polylib --example face_counts
//!   cargo run -p polylib --example face_counts -- snub_cube johnson_solid:91
//!
//! Arguments are `function` or `function:arg`; with none, every function is
//! printed with a small default argument.

use polylib::library::{construct, function_names};

fn parse(arg: &str) -> (String, Option<u32>) {
    match arg.split_once(':') {
        Some((name, value)) => (name.to_string(), value.parse().ok()),
        None => (arg.to_string(), None),
    }
}

fn default_arg(name: &str) -> Option<u32> {
    match name {
        "simplex" | "cross_polytope" | "tesler_polytope" => Some(3),
        "regular_prism" | "regular_antiprism" => Some(5),
        "associahedron" | "cyclohedron" | "permutahedron" => Some(4),
        "johnson_solid" => Some(91),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let calls: Vec<(String, Option<u32>)> = if args.is_empty() {
        function_names()
            .map(|n| (n.to_string(), default_arg(n)))
            .collect()
    } else {
        args.iter().map(|a| parse(a)).collect()
    };
    for (name, arg) in calls {
        match construct(&name, arg) {
            Ok(p) => {
                let (lo, hi) = p.edge_length_range();
                println!(
                    "{name:<30} V={:<4} E={:<4} F={:<4} edges=[{lo:.4}, {hi:.4}] orders={:?}",
                    p.n_vertices(),
                    p.n_edges(),
                    p.n_facets(),
                    p.facet_orders()
                );
            }
            Err(e) => eprintln!("{name:<30} error: {e}"),
        }
    }
}
