//! Example: greedy vs. exact selection on a small food catalog.
//!
//! Run with:
//! `cargo run --example selection`

use classic_algos::{Catalog, Exact, Greedy, SelectionStrategy};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let catalog: Catalog = [
        ("pizza", 50, 300),
        ("hamburger", 40, 250),
        ("hot-dog", 30, 200),
        ("pepsi", 10, 100),
        ("cola", 15, 220),
        ("potato", 25, 350),
    ]
    .into_iter()
    .collect();
    let budget = 100;

    let strategies: [&dyn SelectionStrategy; 2] = [&Greedy, &Exact];
    for strategy in strategies {
        let sel = strategy.select(&catalog, budget);
        println!("{}:", strategy.name());
        println!("  items: {}", sel.items.join(", "));
        println!("  cost:  {} / {budget}", sel.total_cost);
        println!("  value: {}", sel.total_value);
    }
}
