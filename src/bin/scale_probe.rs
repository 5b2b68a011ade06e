use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use classic_algos::{
    build_from_level_array, greedy_select, level_order, merge_sorted_lists, optimal_select,
    optimal_value, preorder, shortest_paths, Catalog, Graph, LinkedList,
};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("classic-algos scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each component runs at increasing input sizes. Runs up to size {}", options.verify_limit);
    eprintln!("are checked against a naive baseline.");
    eprintln!();
    eprintln!("Metrics:");
    eprintln!("  • wall_s: wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/4] Dijkstra shortest paths (baseline: Bellman-Ford)...");
    measurements.extend(run_dijkstra(&options, &mut sys));
    eprintln!();

    eprintln!("[2/4] Knapsack selection (baseline: rolling-row DP)...");
    measurements.extend(run_knapsack(&options, &mut sys));
    eprintln!();

    eprintln!("[3/4] Binary tree traversals (baseline: array order)...");
    measurements.extend(run_tree(&options, &mut sys));
    eprintln!();

    eprintln!("[4/4] Linked list sort and merge (baseline: slice sort)...");
    measurements.extend(run_list(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest input size checked against a baseline (default: 4096)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --release --bin scale_probe -- --format table --verify-limit 1024
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

type Verdict = (VerificationStatus, Option<String>);

fn verdict(checked: bool, ok: bool, detail: impl FnOnce() -> String) -> Verdict {
    match (checked, ok) {
        (false, _) => (VerificationStatus::NotChecked, None),
        (true, true) => (VerificationStatus::Passed, None),
        (true, false) => (VerificationStatus::Failed, Some(detail())),
    }
}

fn report(m: &Measurement, summary: &str) {
    eprintln!(
        "{} {summary}, time={:.3}s, status={}",
        m.status.icon(),
        m.wall_s,
        m.status.label()
    );
}

fn run_dijkstra(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] vertices={}... ", idx + 1, total, n);
            let mut reachable = 0usize;
            let m = measure("dijkstra", format!("vertices={n},edges={}", n * 4), sys, || {
                let edges = deterministic_edges(n, 4);
                let mut graph = Graph::new(n);
                for &(u, v, w) in &edges {
                    if let Err(err) = graph.add_edge(u, v, w) {
                        return (VerificationStatus::Failed, Some(err.to_string()));
                    }
                }
                let sp = match shortest_paths(&graph, 0) {
                    Ok(sp) => sp,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                reachable = sp.dist.iter().filter(|d| d.is_some()).count();

                let checked = n <= options.verify_limit;
                let baseline = if checked {
                    bellman_ford(n, &edges, 0)
                } else {
                    Vec::new()
                };
                verdict(checked, sp.dist == baseline, || {
                    "distances differ from Bellman-Ford".to_string()
                })
            });
            report(&m, &format!("reachable={reachable}"));
            m
        })
        .collect()
}

fn run_knapsack(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const CONFIGS: &[(usize, u64)] = &[(16, 256), (64, 1024), (256, 4096), (1024, 16384)];
    let total = CONFIGS.len();
    CONFIGS
        .iter()
        .enumerate()
        .map(|(idx, &(items, budget))| {
            eprint!("      [{}/{}] items={}, budget={}... ", idx + 1, total, items, budget);
            let mut values = (0u64, 0u64);
            let m = measure("knapsack", format!("items={items},budget={budget}"), sys, || {
                let catalog = deterministic_catalog(items);
                let greedy = greedy_select(&catalog, budget);
                let exact = optimal_select(&catalog, budget);
                values = (greedy.total_value, exact.total_value);

                if exact.total_cost > budget || greedy.total_cost > budget {
                    return (
                        VerificationStatus::Failed,
                        Some("selection exceeds budget".to_string()),
                    );
                }
                let checked = items <= options.verify_limit;
                let baseline = if checked { optimal_value(&catalog, budget) } else { 0 };
                verdict(
                    checked,
                    exact.total_value == baseline && exact.total_value >= greedy.total_value,
                    || format!("baseline={baseline}, exact={}, greedy={}", exact.total_value, greedy.total_value),
                )
            });
            report(&m, &format!("greedy={}, exact={}", values.0, values.1));
            m
        })
        .collect()
}

fn run_tree(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1 << 10, 1 << 14, 1 << 18, 1 << 20];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] nodes={}... ", idx + 1, total, n);
            let m = measure("binary_tree", format!("nodes={n}"), sys, || {
                let root = build_from_level_array((0..n).map(Some));
                let bfs = level_order(root.as_deref());
                let dfs = preorder(root.as_deref());
                let checked = n <= options.verify_limit;
                let ok = bfs.len() == n
                    && dfs.len() == n
                    && bfs.iter().enumerate().all(|(i, &&v)| i == v);
                verdict(checked, ok, || {
                    format!("visited bfs={}, dfs={} of {n}", bfs.len(), dfs.len())
                })
            });
            report(&m, "traversed");
            m
        })
        .collect()
}

fn run_list(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1 << 10, 1 << 14, 1 << 17, 1 << 20];
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            eprint!("      [{}/{}] len={}... ", idx + 1, total, n);
            let m = measure("linked_list", format!("len={n}"), sys, || {
                let values = deterministic_values(n);
                let (left, right) = values.split_at(n / 2);
                let mut a: LinkedList<u64> = left.iter().copied().collect();
                let mut b: LinkedList<u64> = right.iter().copied().collect();
                a.sort();
                b.reverse();
                b.sort();
                let merged = merge_sorted_lists(a, b);

                let checked = n <= options.verify_limit;
                let ok = if checked {
                    let mut expected = values.clone();
                    expected.sort();
                    merged.to_vec() == expected
                } else {
                    merged.len() == n
                };
                verdict(checked, ok, || "merged list is not the sorted input".to_string())
            });
            report(&m, "sorted and merged");
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }
    let total = measurements.len().max(1) as f64;
    eprintln!("  ✓ Passed: {passed} ({:.1}%)", 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {failed} ({:.1}%)", 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (size > {}): {not_checked} ({:.1}%)",
        options.verify_limit,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(detail) = &m.detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
        eprintln!();
    }

    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let min_time = ms.iter().map(|m| m.wall_s).fold(f64::INFINITY, f64::min);
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {scenario}: runs={}, time min={min_time:.3}s max={max_time:.3}s, max rss delta={max_mem} KiB", ms.len());
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size_desc: String, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> Verdict,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        status,
        detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m.detail.as_ref().map(|s| s.replace('"', "'")).unwrap_or_default();
        println!(
            "{},\"{}\",{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .fold("size".len(), usize::max);

    println!(
        "{:<col1$}  {:<col2$}  {:>10}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status"
    );
    println!("{:-<col1$}  {:-<col2$}  {:-<10}  {:-<14}  {:-<12}  {:-<6}", "", "", "", "", "", "");
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.detail.as_ref().map(|s| s.replace('"', "'")) {
            Some(d) => format!("\"{d}\""),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Linear congruential sequence so every run sees the same inputs.
fn deterministic_values(len: usize) -> Vec<u64> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            state >> 33
        })
        .collect()
}

/// A chain `0 -> 1 -> .. -> n-1` plus `extra_per_vertex` pseudo-random edges
/// per vertex, all with weights in `1..=97`.
fn deterministic_edges(n: usize, extra_per_vertex: usize) -> Vec<(usize, usize, i64)> {
    let noise = deterministic_values(n * extra_per_vertex * 2);
    let mut edges = Vec::with_capacity(n * (extra_per_vertex + 1));
    for u in 0..n.saturating_sub(1) {
        edges.push((u, u + 1, (u % 97 + 1) as i64));
    }
    for pair in noise.chunks_exact(2) {
        let u = (pair[0] as usize) % n;
        let v = (pair[1] as usize) % n;
        edges.push((u, v, ((pair[0] ^ pair[1]) % 97 + 1) as i64));
    }
    edges
}

fn deterministic_catalog(items: usize) -> Catalog {
    deterministic_values(items * 2)
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| (format!("item{i}"), pair[0] % 64 + 1, pair[1] % 500))
        .collect()
}

fn bellman_ford(n: usize, edges: &[(usize, usize, i64)], src: usize) -> Vec<Option<i64>> {
    let mut dist = vec![None; n];
    if n == 0 {
        return dist;
    }
    dist[src] = Some(0);
    for _ in 0..n {
        let mut changed = false;
        for &(u, v, w) in edges {
            if let Some(du) = dist[u] {
                let cand = du + w;
                if dist[v].map_or(true, |dv: i64| cand < dv) {
                    dist[v] = Some(cand);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}
