use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mhr_client_core::{
    config::load_settings, CourtOrderDisplay, CourtOrderEditor, CourtOrderField, CourtOrderSummary,
    Store,
};
use mhr_shared::{
    domain::CourtOrderInfo,
    error::ValidationReport,
    protocol::{parse_action_log, parse_court_order},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Headless tools for manufactured home transfer drafts")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch a JSON array of store actions and print the resulting state.
    Replay {
        #[arg(long)]
        actions: PathBuf,
    },
    /// Validate a court order record and print the report.
    Validate {
        #[arg(long)]
        court_order: PathBuf,
        #[arg(long)]
        show_errors: bool,
    },
    /// Print the read-only summary of a court order record.
    Summary {
        #[arg(long)]
        court_order: PathBuf,
    },
}

fn read_court_order(path: &Path) -> Result<CourtOrderInfo> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read court order {}", path.display()))?;
    parse_court_order(&raw).with_context(|| format!("invalid court order {}", path.display()))
}

fn replay(raw: &str) -> Result<Store> {
    let actions = parse_action_log(raw)?;
    let mut store = Store::default();
    for action in actions {
        store.dispatch(action);
    }
    Ok(store)
}

fn validate(info: CourtOrderInfo, show_errors: bool) -> ValidationReport {
    let mut editor = CourtOrderEditor::new(CourtOrderInfo::default());
    editor.set_show_errors(show_errors);
    for field in CourtOrderField::ALL {
        editor.set_value(field, field.read(&info));
    }
    editor.report()
}

fn summary_lines(info: CourtOrderInfo) -> Vec<String> {
    CourtOrderSummary::new(info)
        .render()
        .into_iter()
        .map(|element| format!("{}: {}", element.id, element.text()))
        .collect()
}

fn main() -> Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    match args.command {
        Command::Replay { actions } => {
            let raw = fs::read_to_string(&actions)
                .with_context(|| format!("failed to read actions {}", actions.display()))?;
            let store = replay(&raw)
                .with_context(|| format!("invalid action log {}", actions.display()))?;
            info!("replayed action log {}", actions.display());
            println!("{}", serde_json::to_string_pretty(store.state())?);
        }
        Command::Validate {
            court_order,
            show_errors,
        } => {
            let report = validate(read_court_order(&court_order)?, show_errors);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Summary { court_order } => {
            for line in summary_lines(read_court_order(&court_order)?) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{replay, summary_lines, validate, Args, Command};
    use clap::Parser;
    use mhr_shared::domain::CourtOrderInfo;

    fn sample() -> CourtOrderInfo {
        CourtOrderInfo {
            court_name: "ABC".into(),
            court_registry: "123".into(),
            order_date: "2021-10-07".into(),
            file_number: "DEF".into(),
            effect_of_order: "Good".into(),
        }
    }

    #[test]
    fn parses_validate_subcommand() {
        let args = Args::try_parse_from([
            "mhr_cli",
            "validate",
            "--court-order",
            "order.json",
            "--show-errors",
        ])
        .expect("args");
        match args.command {
            Command::Validate { show_errors, .. } => assert!(show_errors),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn replay_applies_actions_in_order() {
        let store = replay(
            r#"[
                {"type": "set_mhr_transfer_consideration", "payload": "First"},
                {"type": "set_mhr_transfer_consideration", "payload": "Second"}
            ]"#,
        )
        .expect("replay");
        assert_eq!(store.mhr_transfer().consideration, "Second");
    }

    #[test]
    fn validate_reports_blank_required_fields_only_when_asked() {
        let info = CourtOrderInfo {
            court_registry: " ".into(),
            ..sample()
        };
        let quiet = validate(info.clone(), false);
        assert!(!quiet.valid);
        assert!(quiet.errors.is_empty());

        let loud = validate(info, true);
        assert_eq!(loud.errors.len(), 1);
        assert_eq!(loud.errors[0].message, "Enter the court registry");
    }

    #[test]
    fn summary_prints_one_line_per_field() {
        assert_eq!(
            summary_lines(sample()),
            vec![
                "court-name-display: ABC",
                "court-registry-display: 123",
                "file-number-display: DEF",
                "date-display: October 7, 2021",
                "effect-display: Good",
            ]
        );
    }
}
