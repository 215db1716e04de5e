// scripts/benchmark.rs
use sde_paths::math_utils::Timer;
use sde_paths::models::ou_process::OuProcess;
use sde_paths::rng::seed_rng_from_u64;
use sde_paths::simulator::{simulate, simulate_par, solve, Path, SimConfig};
use std::env;
use std::fs::File;
use std::io::Write;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    memory_gb: f64,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        let os = env::consts::OS.to_string();

        let cpu_model = Self::get_cpu_model();
        let cpu_cores = num_cpus::get();
        let memory_gb = Self::get_memory_gb();
        let rust_version = Self::get_rust_version();
        let rustc_flags = env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string());
        let rayon_threads = rayon::current_num_threads();

        Self {
            os,
            cpu_model,
            cpu_cores,
            memory_gb,
            rust_version,
            rustc_flags,
            rayon_threads,
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "windows")]
        {
            Command::new("wmic")
                .args(&["cpu", "get", "name", "/value"])
                .output()
                .map(|output| {
                    String::from_utf8_lossy(&output.stdout)
                        .lines()
                        .find(|line| line.starts_with("Name="))
                        .map(|line| line.trim_start_matches("Name=").trim().to_string())
                        .unwrap_or_else(|| "Unknown CPU".to_string())
                })
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(&["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_memory_gb() -> f64 {
        #[cfg(target_os = "windows")]
        {
            Command::new("wmic")
                .args(&["computersystem", "get", "TotalPhysicalMemory", "/value"])
                .output()
                .ok()
                .and_then(|output| {
                    String::from_utf8_lossy(&output.stdout)
                        .lines()
                        .find(|line| line.starts_with("TotalPhysicalMemory="))
                        .and_then(|line| {
                            line.trim_start_matches("TotalPhysicalMemory=")
                                .trim()
                                .parse::<u64>()
                                .ok()
                        })
                        .map(|bytes| bytes as f64 / (1024.0 * 1024.0 * 1024.0))
                })
                .unwrap_or(0.0)
        }

        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/meminfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("MemTotal:"))
                        .and_then(|line| line.split_whitespace().nth(1))
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(|kb| kb as f64 / (1024.0 * 1024.0))
                })
                .unwrap_or(0.0)
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(&["-n", "hw.memsize"])
                .output()
                .ok()
                .and_then(|output| {
                    String::from_utf8_lossy(&output.stdout)
                        .trim()
                        .parse::<u64>()
                        .ok()
                        .map(|bytes| bytes as f64 / (1024.0 * 1024.0 * 1024.0))
                })
                .unwrap_or(0.0)
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
        {
            0.0
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    paths: usize,
    time_ms: f64,
    throughput_paths_per_sec: f64,
    sample_mean: f64,
    exact_mean: Option<f64>,
    abs_error: Option<f64>,
}

fn terminal_mean(batch: &[Path]) -> f64 {
    let sum: f64 = batch.iter().map(|path| path[path.len() - 1]).sum();
    sum / batch.len() as f64
}

fn run_sequential_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let model = OuProcess::new(1.0, 1.0, 0.5);
    let paths_configs = [10_000, 100_000];

    for &paths in &paths_configs {
        println!("Running sequential benchmarks with {} paths...", paths);

        let cfg = SimConfig {
            x0: 0.0,
            dt: 0.01,
            t: 1.0,
            paths,
            seed: 42,
        };

        let mut timer = Timer::new();
        timer.start();
        let batch = simulate(&model, &cfg).expect("Valid configuration");
        let time_ms = timer.elapsed_ms();

        let mean = terminal_mean(&batch);
        let exact = model.exact_mean(cfg.x0, cfg.t);

        results.push(BenchmarkResult {
            name: format!("OU sequential ({}k paths)", paths / 1000),
            paths,
            time_ms,
            throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
            sample_mean: mean,
            exact_mean: Some(exact),
            abs_error: Some((mean - exact).abs()),
        });
    }

    // Closure-driven front end at the largest sequential size
    let paths = 100_000;
    println!("Running closure benchmarks with {} paths...", paths);

    let mut rng = seed_rng_from_u64(42);
    let mut timer = Timer::new();
    timer.start();
    let batch = solve(
        |x, _t| 1.0 - x,
        |x, _t| 0.5 * x,
        1.0,
        0.01,
        1.0,
        paths,
        &mut rng,
    );
    let time_ms = timer.elapsed_ms();

    // Linear drift, so the mean follows the deterministic ODE: E[X_t] = 1
    let mean = terminal_mean(&batch);
    results.push(BenchmarkResult {
        name: format!("Closure solve ({}k paths)", paths / 1000),
        paths,
        time_ms,
        throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
        sample_mean: mean,
        exact_mean: Some(1.0),
        abs_error: Some((mean - 1.0).abs()),
    });

    results
}

fn run_parallel_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    let model = OuProcess::new(1.0, 1.0, 0.5);
    let paths_configs = [10_000, 100_000, 1_000_000];

    for &paths in &paths_configs {
        println!("Running parallel benchmarks with {} paths...", paths);

        let cfg = SimConfig {
            x0: 0.0,
            dt: 0.01,
            t: 1.0,
            paths,
            seed: 42,
        };

        let mut timer = Timer::new();
        timer.start();
        let batch = simulate_par(&model, &cfg).expect("Valid configuration");
        let time_ms = timer.elapsed_ms();

        let mean = terminal_mean(&batch);
        let exact = model.exact_mean(cfg.x0, cfg.t);

        results.push(BenchmarkResult {
            name: format!("OU parallel ({}k paths)", paths / 1000),
            paths,
            time_ms,
            throughput_paths_per_sec: paths as f64 / (time_ms / 1000.0),
            sample_mean: mean,
            exact_mean: Some(exact),
            abs_error: Some((mean - exact).abs()),
        });
    }

    results
}

fn write_results_to_csv(results: &[BenchmarkResult], system_info: &SystemInfo, filename: &str) {
    let mut file = File::create(filename).expect("Could not create CSV file");

    // Write system information as comments
    writeln!(file, "# System Information").unwrap();
    writeln!(file, "# OS: {}", system_info.os).unwrap();
    writeln!(file, "# CPU: {}", system_info.cpu_model).unwrap();
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores).unwrap();
    writeln!(file, "# Memory: {:.1} GB", system_info.memory_gb).unwrap();
    writeln!(file, "# Rust Version: {}", system_info.rust_version).unwrap();
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags).unwrap();
    writeln!(file, "# Rayon Threads: {}", system_info.rayon_threads).unwrap();
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .unwrap();
    writeln!(file, "#").unwrap();

    // Write CSV header
    writeln!(
        file,
        "Benchmark,Paths,Time_ms,Throughput_paths_per_sec,Sample_Mean,Exact_Mean,Abs_Error"
    )
    .unwrap();

    // Write results
    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6},{},{}",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.sample_mean,
            result
                .exact_mean
                .map(|v| format!("{:.6}", v))
                .unwrap_or_else(|| "N/A".to_string()),
            result
                .abs_error
                .map(|e| format!("{:.6}", e))
                .unwrap_or_else(|| "N/A".to_string())
        )
        .unwrap();
    }

    println!("Results written to {}", filename);
}

fn main() {
    println!("sde-paths Benchmark Suite");
    println!("=========================\n");

    // Gather system information
    println!("Gathering system information...");
    let system_info = SystemInfo::gather();

    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Memory: {:.1} GB", system_info.memory_gb);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!();

    // Run benchmarks
    println!("Running sequential benchmarks...");
    let sequential_results = run_sequential_benchmarks();

    println!("\nRunning parallel benchmarks...");
    let parallel_results = run_parallel_benchmarks();

    // Combine results
    let mut all_results = sequential_results;
    all_results.extend(parallel_results);

    // Display results
    println!("\n{:=<80}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<80}", "");
    println!(
        "{:<30} {:>9} {:>12} {:>15} {:>10} {:>10} {:>10}",
        "Benchmark", "Paths", "Time (ms)", "Throughput", "Mean", "Exact", "Abs Error"
    );
    println!("{:-<80}", "");

    for result in &all_results {
        println!(
            "{:<30} {:>9} {:>12.2} {:>15.0} {:>10.4} {:>10} {:>10}",
            result.name,
            result.paths,
            result.time_ms,
            result.throughput_paths_per_sec,
            result.sample_mean,
            result
                .exact_mean
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "N/A".to_string()),
            result
                .abs_error
                .map(|e| format!("{:.4}", e))
                .unwrap_or_else(|| "N/A".to_string())
        );
    }

    println!("{:=<80}", "");

    // Write to CSV
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    write_results_to_csv(&all_results, &system_info, &filename);

    println!("\nBenchmark complete!");
    println!("Results saved to: {}", filename);
    println!("\nTo reproduce these results:");
    println!("1. Use Rust version: {}", system_info.rust_version);
    println!("2. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("3. Run: cargo run --bin benchmark --release");
    println!(
        "4. Ensure {} CPU threads available",
        system_info.rayon_threads
    );
}
