//! projboard terminal entry point.

mod cli;
mod prompt;

use clap::Parser;
use cli::Cli;
use log::error;
use projboard_core::{App, FormRules, StderrAlerts};
use std::rc::Rc;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = projboard_core::init_logging(&cli.logging_config()) {
        eprintln!("Error: {err}");
        std::process::exit(2);
    }

    let rules = match &cli.rules {
        Some(path) => match FormRules::load(path) {
            Ok(rules) => rules,
            Err(err) => {
                error!("event=rules_load module=cli status=error");
                eprintln!("Error: {err}");
                std::process::exit(2);
            }
        },
        None => FormRules::default(),
    };

    let mut app = App::new(rules, Rc::new(StderrAlerts));
    let stdin = std::io::stdin();
    if let Err(err) = prompt::run(&mut app, stdin.lock(), std::io::stdout()) {
        error!("event=prompt_loop module=cli status=error");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
