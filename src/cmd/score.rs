use crate::reports::{self, OutputFormat};
use clap::Args;
use taiscore::api::Session;
use taiscore::config::SessionInputs;
use taiscore::error::TsResult;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub inputs: SessionInputs,

    #[arg(long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(format: OutputFormat, session: &Session) -> TsResult<()> {
    let details = session.details();
    info!(
        "Scoring {} selected hand(s)",
        session.state().selected.len()
    );
    for name in &details.unknown {
        warn!("'{}' is not a known hand and scores nothing", name);
    }

    match format {
        OutputFormat::Table => {
            println!("{}", reports::breakdown_table(&details));
            println!(
                "{}",
                reports::totals_line(details.total_score, details.total_payout)
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
    }
    Ok(())
}
