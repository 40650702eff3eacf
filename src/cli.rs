//! Command-line surface.
//!
//! `daml-sast scan` drives the whole pipeline: resolve the input DAR,
//! decode and lower, run the rules, apply baseline / severity /
//! suppression filters, and write the report(s).
//!
//! Exit codes: 0 clean or below threshold, 1 findings at or above the
//! `--fail-on` level, 2 usage/config/baseline errors, 3 decode or internal
//! errors.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::baseline::{load_baseline, write_baseline};
use crate::config::{load_config, Config};
use crate::engine::run;
use crate::fs_utils::{build_project, find_newest_dar};
use crate::lf::{load_program, DecodeLimits};
use crate::model::{Finding, Severity};
use crate::report::{emit_json, emit_sarif, SarifContext};
use crate::rules::registry::{filter_rules, registry};
use crate::rules::RuleMeta;
use crate::suppress::{apply_suppressions, load_suppressions};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_ERROR: i32 = 3;

#[derive(Parser)]
#[command(
    name = "daml-sast",
    version,
    about = "Static application security testing for Daml archives"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a DAR or a Daml project
    Scan(ScanArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Path to a .dar file
    #[arg(long)]
    dar: Option<PathBuf>,
    /// Path to a Daml project directory (scans its newest DAR)
    #[arg(long)]
    project: Option<PathBuf>,
    /// Do not run `daml build` before scanning a project
    #[arg(long)]
    no_build: bool,
    /// Write the report to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Report format
    #[arg(long, value_parser = ["json", "sarif", "both"])]
    format: Option<String>,
    /// Comma-separated allowlist of rule ids
    #[arg(long)]
    rules: Option<String>,
    /// Comma-separated denylist of rule ids
    #[arg(long)]
    exclude: Option<String>,
    /// Drop findings below this severity
    #[arg(long)]
    severity: Option<String>,
    /// Exit non-zero if any finding is at or above this severity
    #[arg(long = "fail-on")]
    fail_on: Option<String>,
    /// Suppress findings whose fingerprint appears in this baseline
    #[arg(long)]
    baseline: Option<PathBuf>,
    /// Write all generated fingerprints to this baseline file
    #[arg(long = "write-baseline")]
    write_baseline: Option<PathBuf>,
    /// Line-based suppression file
    #[arg(long)]
    suppressions: Option<PathBuf>,
    /// CI mode: fail-on defaults to MEDIUM, SARIF carries automation details
    #[arg(long)]
    ci: bool,
}

/// Parse `argv` and execute; returns the process exit code.
pub fn main_with_args<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) => {
            // Help/version are not usage errors.
            let _ = e.print();
            return if e.use_stderr() { EXIT_USAGE } else { EXIT_OK };
        }
    };
    match cli.command {
        Command::Scan(args) => scan(&args),
    }
}

fn parse_ids(value: Option<&str>) -> Option<BTreeSet<String>> {
    let csv = value?;
    let ids: BTreeSet<String> = csv
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids)
    }
}

fn parse_severity(value: Option<&str>) -> Result<Option<Severity>, String> {
    match value {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some),
    }
}

fn resolve_dar(args: &ScanArgs) -> Result<PathBuf, String> {
    if let Some(dar) = &args.dar {
        return Ok(dar.clone());
    }
    let Some(project) = &args.project else {
        return Err("--dar or --project is required".to_string());
    };
    if !args.no_build {
        build_project(project).map_err(|e| e.to_string())?;
    }
    find_newest_dar(project).ok_or_else(|| "no .dar found under project path".to_string())
}

fn severity_filter(findings: Vec<Finding>, minimum: Option<Severity>) -> Vec<Finding> {
    match minimum {
        Some(min) => findings
            .into_iter()
            .filter(|f| f.severity.rank() >= min.rank())
            .collect(),
        None => findings,
    }
}

fn exit_code(findings: &[Finding], fail_on: Option<Severity>) -> i32 {
    match fail_on {
        Some(level) if findings.iter().any(|f| f.severity.rank() >= level.rank()) => EXIT_FINDINGS,
        _ => EXIT_OK,
    }
}

fn command_line() -> String {
    std::env::args()
        .map(|arg| {
            if arg.contains(char::is_whitespace) {
                format!("\"{}\"", arg)
            } else {
                arg
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn emit_reports(
    findings: &[Finding],
    format: &str,
    out: Option<&Path>,
    rule_meta: &BTreeMap<String, RuleMeta>,
    context: &SarifContext,
) -> Result<(), String> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
                }
            }
            let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
            match format {
                "json" => emit_json(findings, &mut file).map_err(|e| e.to_string()),
                "sarif" => emit_sarif(findings, rule_meta, Some(context), &mut file)
                    .map_err(|e| e.to_string()),
                _ => Err("--format must be json or sarif when --out is used".to_string()),
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            if matches!(format, "json" | "both") {
                emit_json(findings, &mut handle).map_err(|e| e.to_string())?;
            }
            if matches!(format, "sarif" | "both") {
                emit_sarif(findings, rule_meta, Some(context), &mut handle)
                    .map_err(|e| e.to_string())?;
            }
            Ok(())
        }
    }
}

fn scan(args: &ScanArgs) -> i32 {
    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {}", e);
                return EXIT_USAGE;
            }
        },
        None => Config::default(),
    };

    let dar_path = match resolve_dar(args) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("error: {}", e);
            return EXIT_USAGE;
        }
    };

    // CLI flags win over the config file.
    let allow = parse_ids(args.rules.as_deref()).or(config.rule_allowlist);
    let deny = parse_ids(args.exclude.as_deref()).or(config.rule_denylist);
    let (min_severity, mut fail_on) = match (
        parse_severity(args.severity.as_deref()),
        parse_severity(args.fail_on.as_deref()),
    ) {
        (Ok(min), Ok(fail)) => (min.or(config.min_severity), fail.or(config.fail_on)),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("error: {}", e);
            return EXIT_USAGE;
        }
    };
    let format = args
        .format
        .clone()
        .or(config.format)
        .unwrap_or_else(|| "json".to_string());
    let ci = args.ci || config.ci.unwrap_or(false);
    let baseline_path = args
        .baseline
        .clone()
        .or_else(|| config.baseline.as_ref().map(PathBuf::from));
    let write_baseline_path = args
        .write_baseline
        .clone()
        .or_else(|| config.write_baseline.as_ref().map(PathBuf::from));
    if ci && fail_on.is_none() {
        fail_on = Some(Severity::Medium);
    }

    let limits = DecodeLimits::from_env();
    let start_time = Utc::now();
    let program = match load_program(&dar_path, &limits) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("error: {}", e);
            return EXIT_ERROR;
        }
    };
    debug!(packages = program.packages.len(), dar = %dar_path.display(), "loaded program");

    let rules = filter_rules(registry(), allow.as_ref(), deny.as_ref());
    let rule_meta: BTreeMap<String, RuleMeta> = rules
        .iter()
        .map(|r| (r.meta().id.to_string(), r.meta().clone()))
        .collect();
    let findings = run(&rules, &program);

    // The baseline captures everything generated, before any filter.
    if let Some(path) = &write_baseline_path {
        let fingerprints: Vec<String> = findings
            .iter()
            .filter_map(|f| f.fingerprint.clone())
            .collect();
        if let Err(e) = write_baseline(path, &fingerprints) {
            eprintln!("error: failed to write baseline: {}", e);
            return EXIT_USAGE;
        }
    }

    let mut findings = severity_filter(findings, min_severity);
    if let Some(path) = &baseline_path {
        let suppressed = match load_baseline(path) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("error: {}", e);
                return EXIT_USAGE;
            }
        };
        findings.retain(|f| {
            f.fingerprint
                .as_ref()
                .map_or(true, |fp| !suppressed.contains(fp))
        });
    }
    if let Some(path) = &args.suppressions {
        let suppressions = match load_suppressions(path) {
            Ok(sups) => sups,
            Err(e) => {
                eprintln!("error: failed to read suppressions: {}", e);
                return EXIT_USAGE;
            }
        };
        findings = apply_suppressions(findings, &suppressions);
    }

    let context = SarifContext {
        command_line: command_line(),
        cwd: std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        ci,
        start_time,
        end_time: Utc::now(),
    };
    if let Err(e) = emit_reports(&findings, &format, args.out.as_deref(), &rule_meta, &context) {
        eprintln!("error: {}", e);
        return EXIT_USAGE;
    }

    exit_code(&findings, fail_on)
}
