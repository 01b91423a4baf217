use crate::reports;
use clap::Args;
use std::io::{BufRead, Write};
use std::str::FromStr;
use taiscore::api::{Action, Session};
use taiscore::config::SessionInputs;
use taiscore::error::TsResult;
use taiscore::state::Field;
use tracing::debug;

const USAGE: &str = "commands: toggle <hand> | set <base_score|point_value|repeat_count> <value> | reset | show | list | quit";

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    #[command(flatten)]
    pub inputs: SessionInputs,
}

enum Command {
    Apply(Action),
    Show,
    List,
    Quit,
    Invalid(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim_start();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    match verb {
        "toggle" | "t" => {
            let name = rest.trim();
            if name.is_empty() {
                Command::Invalid("toggle needs a hand name".to_string())
            } else {
                Command::Apply(Action::Toggle(name.to_string()))
            }
        }
        "set" | "s" => {
            let rest = rest.trim();
            let (field, text) = rest.split_once(' ').unwrap_or((rest, ""));
            match Field::from_str(field) {
                Ok(field) => Command::Apply(Action::Edit(field, text.trim().to_string())),
                Err(_) => Command::Invalid(format!("unknown field '{}'", field)),
            }
        }
        "reset" => Command::Apply(Action::Reset),
        "show" | "" => Command::Show,
        "list" | "ls" => Command::List,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command '{}'", other)),
    }
}

/// Line-oriented session loop. Ends on `quit` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, out: &mut W) -> TsResult<()> {
    writeln!(out, "{}", USAGE)?;
    let view = session.view();
    writeln!(out, "{}", reports::totals_line(view.total_score, view.total_payout))?;

    let mut buf = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            break;
        }
        let line = buf.trim_end_matches(['\r', '\n']);
        debug!("session input: {:?}", line);

        match parse_command(line) {
            Command::Apply(action) => {
                let view = session.apply(action);
                writeln!(out, "{}", reports::inputs_line(&view))?;
                writeln!(out, "{}", reports::totals_line(view.total_score, view.total_payout))?;
            }
            Command::Show => {
                writeln!(out, "{}", reports::breakdown_table(&session.details()))?;
                let view = session.view();
                writeln!(out, "{}", reports::totals_line(view.total_score, view.total_payout))?;
            }
            Command::List => {
                writeln!(out, "{}", reports::pattern_table(&session.patterns()))?;
            }
            Command::Quit => break,
            Command::Invalid(msg) => {
                writeln!(out, "{}", msg)?;
                writeln!(out, "{}", USAGE)?;
            }
        }
    }
    Ok(())
}
