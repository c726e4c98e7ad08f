use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rev_engine::{RemoteHandle, SnapshotRemote};
use rev_model::DefinitionKind;
use rev_runner::{
    default_root, load_models, load_snapshot, logging, write_json, Runner, RunnerConfig,
};
use std::path::PathBuf;

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("TOML configuration file")
}

fn snapshot_arg() -> Arg {
    Arg::new("snapshot")
        .long("snapshot")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON snapshot of the remote object tree")
}

fn root_arg() -> Arg {
    Arg::new("root")
        .long("root")
        .help("Handle of the root entity (defaults to the first snapshot root)")
}

fn cli() -> Command {
    Command::new("rev-runner")
        .version(rev_runner::VERSION)
        .about("Reverse models from a remote object tree and validate them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("reverse")
                .about("Reverse a model tree and print it as JSON")
                .arg(snapshot_arg())
                .arg(root_arg())
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .default_value("site")
                        .value_parser(value_parser!(DefinitionKind))
                        .help("Root kind: site or web"),
                )
                .arg(
                    Arg::new("exclude")
                        .long("exclude")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(DefinitionKind))
                        .help("Skip every node of this kind"),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .value_parser(value_parser!(usize))
                        .help("Emit nodes at this depth as leaves"),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Reverse, validate against original models and report coverage")
                .arg(snapshot_arg())
                .arg(root_arg())
                .arg(
                    Arg::new("model")
                        .long("model")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON file with the original model (or an array of models)"),
                )
                .arg(
                    Arg::new("handlers")
                        .long("handlers")
                        .value_delimiter(',')
                        .value_parser(value_parser!(DefinitionKind))
                        .help("Register only these handlers"),
                )
                .arg(
                    Arg::new("report")
                        .long("report")
                        .value_parser(value_parser!(PathBuf))
                        .help("Write the run report here instead of stdout"),
                )
                .arg(config_arg()),
        )
}

fn load_config(args: &ArgMatches) -> anyhow::Result<RunnerConfig> {
    match args.get_one::<PathBuf>("config") {
        Some(path) => RunnerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(RunnerConfig::new()),
    }
}

fn snapshot_and_root(args: &ArgMatches) -> anyhow::Result<(SnapshotRemote, RemoteHandle)> {
    let path = args
        .get_one::<PathBuf>("snapshot")
        .context("--snapshot is required")?;
    let remote = load_snapshot(path)?;
    let root = match args.get_one::<String>("root") {
        Some(handle) => RemoteHandle::new(handle.as_str()),
        None => default_root(&remote)?,
    };
    Ok((remote, root))
}

fn run_reverse(args: &ArgMatches) -> anyhow::Result<bool> {
    let mut config = load_config(args)?;
    if let Some(kinds) = args.get_many::<DefinitionKind>("exclude") {
        config = kinds.fold(config, |config, kind| config.with_excluded(*kind));
    }
    if let Some(depth) = args.get_one::<usize>("max-depth") {
        config = config.with_max_depth(*depth);
    }
    logging::init(&config.logging)?;

    let kind = args
        .get_one::<DefinitionKind>("kind")
        .copied()
        .unwrap_or(DefinitionKind::Site);
    let (remote, root) = snapshot_and_root(args)?;

    let result = Runner::new(config)?.reverse(&remote, kind, root)?;
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }
    println!("{}", serde_json::to_string_pretty(&result.model)?);
    Ok(true)
}

fn run_validate(args: &ArgMatches) -> anyhow::Result<bool> {
    let mut config = load_config(args)?;
    if let Some(kinds) = args.get_many::<DefinitionKind>("handlers") {
        config = config.with_handlers(kinds.copied().collect());
    }
    logging::init(&config.logging)?;

    let (remote, root) = snapshot_and_root(args)?;
    let model_path = args
        .get_one::<PathBuf>("model")
        .context("--model is required")?;
    let originals = load_models(model_path)?;

    let report = Runner::new(config)?.validate(&remote, &originals, &root)?;

    match args.get_one::<PathBuf>("report") {
        Some(path) => {
            write_json(path, &report)?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    eprintln!("Status: {}", if report.passed { "PASSED" } else { "FAILED" });
    Ok(report.passed)
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let passed = match matches.subcommand() {
        Some(("reverse", args)) => run_reverse(args)?,
        Some(("validate", args)) => run_validate(args)?,
        _ => true,
    };

    std::process::exit(if passed { 0 } else { 1 });
}
