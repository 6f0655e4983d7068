use std::env;
use std::time::Instant;

use lcs_stepper::linear::hirschberg;
use lcs_stepper::LcsEngine;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Solves one input pair; the flag asks for extra self-checks.
type Solver = fn(&[char], &[char], bool) -> Result<u32, String>;

const SCENARIOS: &[(&str, &[usize], Solver)] = &[
    ("lcs_batch", &[256, 512, 1024, 2048, 4096], solve_batch),
    ("lcs_stepped", &[64, 128, 256, 512, 1024], solve_stepped),
    (
        "lcs_linear_space",
        &[256, 512, 1024, 2048, 4096, 8192, 16384],
        solve_linear,
    ),
];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut rows = Vec::new();

    for (idx, &(scenario, sizes, solver)) in SCENARIOS.iter().enumerate() {
        eprintln!("[{}/{}] {scenario}", idx + 1, SCENARIOS.len());
        for &len in sizes {
            let x = random_dna(&mut rng, len);
            let y = random_dna(&mut rng, len);
            let row = measure(scenario, &x, &y, solver, &options, &mut sys);
            eprintln!(
                "      len={len:<6} lcs={:<6} {:.3}s  {}",
                row.lcs_len,
                row.wall_s,
                row.check.label()
            );
            rows.push(row);
        }
    }

    let failed = rows
        .iter()
        .filter(|r| matches!(r.check, Check::Failed(_)))
        .count();
    eprintln!("{} runs, {failed} failed verification", rows.len());

    options.format.write(&rows);
    if failed > 0 {
        std::process::exit(1);
    }
}

const USAGE: &str = "\
Usage: cargo run --features probe --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>   Output format (default: csv)
  --verify-limit <N>          Largest length checked against the reference DP (default: 512)
  --seed <N>                  Input generator seed (default: 42)";

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    seed: u64,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut options = Options {
            format: OutputFormat::Csv,
            verify_limit: 512,
            seed: 42,
        };

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            if arg == "--help" || arg == "-h" {
                println!("{USAGE}");
                std::process::exit(0);
            }
            let (flag, value) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), value.to_string()),
                None => {
                    let value: String = args
                        .next()
                        .ok_or_else(|| format!("missing value after {arg}"))?
                        .into();
                    (arg, value)
                }
            };
            match flag.as_str() {
                "--format" => options.format = OutputFormat::parse(&value)?,
                "--verify-limit" => {
                    options.verify_limit = value
                        .parse()
                        .map_err(|_| format!("invalid verify limit '{value}'"))?
                }
                "--seed" => {
                    options.seed = value
                        .parse()
                        .map_err(|_| format!("invalid seed '{value}'"))?
                }
                _ => return Err(format!("unrecognized argument '{flag}'")),
            }
        }
        Ok(options)
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, rows: &[Row]) {
        match self {
            OutputFormat::Csv => {
                println!("scenario,len,lcs_len,wall_s,rss_delta_kib,check");
                for r in rows {
                    println!(
                        "{},{},{},{:.3},{},\"{}\"",
                        r.scenario,
                        r.len,
                        r.lcs_len,
                        r.wall_s,
                        r.rss_delta_kib,
                        r.check.label().replace('"', "'")
                    );
                }
            }
            OutputFormat::Table => {
                println!(
                    "{:<18} {:>6} {:>8} {:>10} {:>14}  check",
                    "scenario", "len", "lcs_len", "wall_s", "rss_delta_kib"
                );
                for r in rows {
                    println!(
                        "{:<18} {:>6} {:>8} {:>10.3} {:>14}  {}",
                        r.scenario,
                        r.len,
                        r.lcs_len,
                        r.wall_s,
                        r.rss_delta_kib,
                        r.check.label()
                    );
                }
            }
            OutputFormat::Json => {
                let items: Vec<String> = rows
                    .iter()
                    .map(|r| {
                        format!(
                            "  {{\"scenario\":\"{}\",\"len\":{},\"lcs_len\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"check\":\"{}\"}}",
                            r.scenario,
                            r.len,
                            r.lcs_len,
                            r.wall_s,
                            r.rss_delta_kib,
                            r.check.label().replace('"', "'")
                        )
                    })
                    .collect();
                println!("[\n{}\n]", items.join(",\n"));
            }
        }
    }
}

struct Row {
    scenario: &'static str,
    len: usize,
    lcs_len: u32,
    wall_s: f64,
    rss_delta_kib: u64,
    check: Check,
}

enum Check {
    Skipped,
    Passed,
    Failed(String),
}

impl Check {
    fn label(&self) -> String {
        match self {
            Check::Skipped => "not_checked".to_string(),
            Check::Passed => "passed".to_string(),
            Check::Failed(detail) => format!("failed: {detail}"),
        }
    }
}

fn measure(
    scenario: &'static str,
    x: &str,
    y: &str,
    solver: Solver,
    options: &Options,
    sys: &mut System,
) -> Row {
    let xs: Vec<char> = x.chars().collect();
    let ys: Vec<char> = y.chars().collect();
    let verify = xs.len() <= options.verify_limit;

    let before = rss_kib(sys);
    let start = Instant::now();
    let outcome = solver(&xs, &ys, verify);
    let wall_s = start.elapsed().as_secs_f64();
    let rss_delta_kib = rss_kib(sys).saturating_sub(before);

    let (lcs_len, check) = match outcome {
        Err(detail) => (0, Check::Failed(detail)),
        Ok(got) if !verify => (got, Check::Skipped),
        Ok(got) => match reference_len(&xs, &ys) {
            expected if expected == got => (got, Check::Passed),
            expected => (got, Check::Failed(format!("expected {expected}, got {got}"))),
        },
    };

    Row {
        scenario,
        len: xs.len(),
        lcs_len,
        wall_s,
        rss_delta_kib,
        check,
    }
}

fn solve_batch(x: &[char], y: &[char], _verify: bool) -> Result<u32, String> {
    let mut engine = LcsEngine::new();
    engine.set_sequences(&String::from_iter(x), &String::from_iter(y));
    engine.compute_all();
    engine.lcs_len().ok_or_else(|| "no result after compute_all".to_string())
}

fn solve_stepped(x: &[char], y: &[char], verify: bool) -> Result<u32, String> {
    let (xs, ys) = (String::from_iter(x), String::from_iter(y));
    let mut engine = LcsEngine::new();
    engine.initialize(&xs, &ys);
    while engine.step() {}

    if verify {
        let mut batch = LcsEngine::new();
        batch.set_sequences(&xs, &ys);
        batch.compute_all();
        if batch.table() != engine.table() || batch.result() != engine.result() {
            return Err("stepped table differs from batch table".to_string());
        }
    }
    engine.lcs_len().ok_or_else(|| "no result after stepping".to_string())
}

fn solve_linear(x: &[char], y: &[char], verify: bool) -> Result<u32, String> {
    let pairs = hirschberg(x, y);
    if verify && pairs.iter().any(|&(i, j)| x[i] != y[j]) {
        return Err("linear-space pairs include a mismatch".to_string());
    }
    Ok(pairs.len() as u32)
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(process) => process.memory() / 1024,
        None => 0,
    }
}

fn random_dna(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[char] = &['A', 'C', 'G', 'T'];
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

/// Reference LCS length in two rolling rows.
fn reference_len(s: &[char], t: &[char]) -> u32 {
    let mut prev = vec![0u32; t.len() + 1];
    let mut curr = vec![0u32; t.len() + 1];
    for &a in s {
        for (j, &b) in t.iter().enumerate() {
            curr[j + 1] = if a == b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[t.len()]
}
