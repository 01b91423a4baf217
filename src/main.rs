use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::io;
use std::process;
use taiscore::api::Session;
use taiscore::catalog::Catalog;
use taiscore::config::SessionInputs;
use taiscore::error::TsResult;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Taiwanese Mahjong tai and payout calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with table defaults (base_score, point_value, repeat_count, hands)
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the hand catalog
    List(cmd::list::ListArgs),
    /// Score one hand from the given inputs
    Score(cmd::score::ScoreArgs),
    /// Interactive scoring session on stdin
    Session(cmd::session::SessionArgs),
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// File defaults first, then whatever the user typed on the command line.
fn resolve_inputs(
    config_path: &Option<String>,
    cli_inputs: &SessionInputs,
    sub_matches: &clap::ArgMatches,
) -> TsResult<SessionInputs> {
    match config_path {
        Some(path) => {
            info!("Loading table defaults from: {}", path);
            let mut inputs = SessionInputs::load_from_file(path)?;
            inputs.merge_from_cli(cli_inputs, sub_matches);
            Ok(inputs)
        }
        None => Ok(cli_inputs.clone()),
    }
}

fn execute(cli: Cli, matches: &clap::ArgMatches) -> TsResult<()> {
    let catalog = Catalog::standard();
    info!("Loaded {} hands", catalog.len());

    match cli.command {
        Commands::List(args) => {
            // No inputs on `list`; the file only marks preselected hands
            let inputs = match &cli.config {
                Some(path) => SessionInputs::load_from_file(path)?,
                None => SessionInputs::default(),
            };
            cmd::list::run(args, &Session::with_state(catalog, inputs.into_state()))
        }
        Commands::Score(args) => {
            let sub_matches = matches.subcommand_matches("score").unwrap_or(matches);
            let inputs = resolve_inputs(&cli.config, &args.inputs, sub_matches)?;
            let session = Session::with_state(catalog, inputs.into_state());
            cmd::score::run(args.format, &session)
        }
        Commands::Session(args) => {
            let sub_matches = matches.subcommand_matches("session").unwrap_or(matches);
            let inputs = resolve_inputs(&cli.config, &args.inputs, sub_matches)?;
            let mut session = Session::with_state(catalog, inputs.into_state());
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            cmd::session::run(&mut session, stdin.lock(), &mut stdout)
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.debug);

    if let Err(e) = execute(cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}
