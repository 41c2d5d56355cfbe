use crate::config::Config;
use clap::Parser;
use eyre::Result;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod analytics;
mod config;
mod display;
mod fixtures;
mod model;
mod queries;

#[derive(Debug, Parser)]
#[command(version, about = "Summarize a student roster and a movie catalog")]
struct Options {
    /// Use FILE instead of the built-in defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("rquery={level}")))
        .init();
    let config = match &options.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };
    let students = fixtures::students();
    let movies = fixtures::movies()?;
    info!(
        students = students.len(),
        movies = movies.len(),
        "datasets loaded"
    );
    display::student_report(&students);
    display::movie_report(&movies, &config.analytics);
    Ok(())
}
