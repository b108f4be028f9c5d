use clap::Parser;
use rws_check::utils::{logger, validation::Validate};
use rws_check::{
    find_diff_sets, load_icann_domains, load_sets, parse_sets_json, select_primaries,
    validate_document, CliConfig, ErrorLog, PublicSuffixes, ReqwestProbe, RwsChecker, SetsMap,
};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rws-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(true) => {
            println!("success");
            ExitCode::SUCCESS
        }
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // Structural failure: the gate consumes this message as the
            // whole verdict, so it goes to stdout like any other finding.
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Full gate run. `Ok(true)` means the submission was accepted.
async fn run(config: CliConfig) -> anyhow::Result<bool> {
    let raw = fs::read_to_string(&config.input)?;
    let document = parse_sets_json(&raw, config.strict_formatting)?;

    let schema: Value = serde_json::from_str(&fs::read_to_string(&config.schema_file)?)?;
    validate_document(&document, &schema)?;

    let suffixes = PublicSuffixes::from_file(Path::new(&config.psl_file))?;
    let icann_codes = load_icann_domains(Path::new(&config.icann_file))?;
    let probe = ReqwestProbe::new()?;
    let checker = RwsChecker::new(suffixes, icann_codes, probe);

    let mut log = ErrorLog::new();
    let sets = load_sets(&document, &mut log);
    tracing::info!("Loaded {} set(s) from {}", sets.len(), config.input);

    let mut removed = SetsMap::new();
    let mut check_sets = sets.clone();
    if let Some(old_path) = &config.old_input {
        let old_raw = fs::read_to_string(old_path)?;
        let old_document = parse_sets_json(&old_raw, false)?;
        // The accepted list already passed the gate once; its own load
        // diagnostics are not this submission's problem.
        let mut old_log = ErrorLog::new();
        let old_sets = load_sets(&old_document, &mut old_log);
        let (changed, gone) = find_diff_sets(&old_sets, &sets);
        tracing::info!(
            "Diff against {}: {} changed or added, {} removed",
            old_path,
            changed.len(),
            gone.len()
        );
        check_sets = changed;
        removed = gone;
    }
    if !config.primaries.is_empty() {
        check_sets = select_primaries(&check_sets, &config.primaries, &mut log);
    }

    checker.run_checks(&check_sets, &mut log).await;
    if config.old_input.is_some() {
        checker.find_invalid_removal(&removed, &mut log).await;
    }

    if log.is_empty() {
        tracing::info!("Submission accepted");
        return Ok(true);
    }
    tracing::warn!("Submission rejected with {} finding(s)", log.len());
    for diagnostic in log.iter() {
        println!("{diagnostic}");
    }
    Ok(false)
}
