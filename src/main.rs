use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use subnet_calculator::cli::{run, Args};
use subnet_calculator::config::Config;
use subnet_calculator::logging;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    logging::init().ok();
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let args = Args::parse();
    let result = Config::from_env().and_then(|config| run(&args, config));

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
