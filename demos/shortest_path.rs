//! Example: Dijkstra on the six-vertex undirected example graph.
//!
//! Run with:
//! `cargo run --example shortest_path`
//! or, to see spans, `RUST_LOG=trace cargo run --example shortest_path --features tracing`

use classic_algos::{shortest_paths, GraphBuilder};

fn main() -> classic_algos::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let graph = GraphBuilder::new(6)
        .undirected()
        .edges([
            (0, 1, 7),
            (0, 2, 9),
            (0, 5, 14),
            (1, 2, 10),
            (1, 3, 15),
            (2, 3, 11),
            (2, 5, 2),
            (3, 4, 6),
            (4, 5, 9),
        ])
        .build()?;

    let src = 0;
    let sp = shortest_paths(&graph, src)?;

    println!("Shortest distances from vertex {src}:");
    for v in 0..graph.vertex_count() {
        let dist = sp
            .distance_to(v)
            .map_or_else(|| "unreachable".to_string(), |d| d.to_string());
        let path = sp
            .path_to(v)
            .map(|p| p.iter().map(usize::to_string).collect::<Vec<_>>().join(" -> "))
            .unwrap_or_else(|| "no path".to_string());
        println!("  {src} -> {v}: {dist:>11}  via {path}");
    }
    Ok(())
}
