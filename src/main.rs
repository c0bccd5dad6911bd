mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use app::QuickPlotApp;
use clap::Parser;
use config::Thresholds;
use data::error::LoadError;
use data::loader::load_files;
use data::model::Model;
use eframe::egui;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "quickplot")]
#[command(about = "Plot delimited numeric tables whatever their separator")]
#[command(version)]
struct Args {
    /// Text tables: tab, semicolon, comma or space separated
    files: Vec<PathBuf>,

    /// JSON file overriding the log scale and marker thresholds
    #[arg(long, value_name = "FILE")]
    thresholds: Option<PathBuf>,

    /// Print what would be plotted instead of opening a window
    #[arg(long)]
    no_gui: bool,
}

/// No input files given.
const EXIT_USAGE: u8 = 1;
/// None of the input files could be read.
const EXIT_NOTHING_LOADED: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    if args.files.is_empty() {
        eprintln!("Use quickplot [file_name]...");
        return ExitCode::from(EXIT_USAGE);
    }

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Exit status of a run that got as far as loading files.
fn run(args: Args) -> Result<u8> {
    let thresholds = match &args.thresholds {
        Some(path) => Thresholds::load(path)?,
        None => Thresholds::default(),
    };

    let mut model = Model::new(thresholds);
    for failure in load_files(args.files.as_slice(), &mut model) {
        report(&failure);
    }

    if model.is_empty() {
        return Ok(EXIT_NOTHING_LOADED);
    }

    if args.no_gui {
        print!("{model}");
        return Ok(0);
    }

    show(&model)?;
    Ok(0)
}

fn report(failure: &LoadError) {
    match failure {
        LoadError::Unavailable { path, .. } => {
            eprintln!("Could not open {}", path.display());
        }
        LoadError::Read { path, source } => {
            eprintln!("Could not read {}: {source}", path.display());
        }
    }
}

fn show(model: &Model) -> Result<()> {
    let state = AppState::from_model(model);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QuickPlot",
        options,
        Box::new(move |_cc| Ok(Box::new(QuickPlotApp::new(state)))),
    )
    .map_err(|e| anyhow!("running the plot window: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_files_and_flags() {
        let args = Args::try_parse_from([
            "quickplot",
            "a.csv",
            "b.tsv",
            "--thresholds",
            "t.json",
            "--no-gui",
        ])
        .unwrap();
        assert_eq!(args.files, vec![PathBuf::from("a.csv"), PathBuf::from("b.tsv")]);
        assert_eq!(args.thresholds, Some(PathBuf::from("t.json")));
        assert!(args.no_gui);
    }

    #[test]
    fn files_are_optional_for_the_parser() {
        let args = Args::try_parse_from(["quickplot"]).unwrap();
        assert!(args.files.is_empty());
    }

    #[test]
    fn nothing_loaded_exits_with_two() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            files: vec![dir.path().join("missing.csv")],
            thresholds: None,
            no_gui: true,
        };
        assert_eq!(run(args).unwrap(), EXIT_NOTHING_LOADED);
    }

    #[test]
    fn summary_mode_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "t,v\n0,1\n1,2\n").unwrap();
        let args = Args {
            files: vec![path],
            thresholds: None,
            no_gui: true,
        };
        assert_eq!(run(args).unwrap(), 0);
    }

    #[test]
    fn bad_thresholds_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            files: vec![dir.path().join("data.csv")],
            thresholds: Some(dir.path().join("absent.json")),
            no_gui: true,
        };
        assert!(run(args).is_err());
    }
}
