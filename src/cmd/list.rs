use crate::reports::{self, OutputFormat};
use clap::Args;
use taiscore::api::Session;
use taiscore::error::TsResult;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run(args: ListArgs, session: &Session) -> TsResult<()> {
    let patterns = session.patterns();
    match args.format {
        OutputFormat::Table => println!("{}", reports::pattern_table(&patterns)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&patterns)?),
    }
    Ok(())
}
