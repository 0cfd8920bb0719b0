// Entry point for `setup-pytoolchain`.
// Reads settings from the environment, parses the command line, and hands off
// to either the help text or the bootstrap run. The returned status becomes the
// process exit code.

mod cli;
mod commands;
mod installers;
mod libs;
mod logger;
mod schemas;

use std::env;
use std::process;

use colored::Colorize;

use crate::cli::cmd_enums::{Invocation, parse_invocation};
use crate::commands::{bootstrap, help};
use crate::libs::settings::Settings;

fn main() {
    let settings = Settings::from_env();
    logger::init(settings.debug);

    let code = match parse_invocation(env::args_os()) {
        Ok(Invocation::Help) => {
            help::run();
            0
        }
        Ok(Invocation::Run(mode)) => bootstrap::run(mode, &settings),
        Err(e) => {
            log_error!("{}", e.to_string().red());
            if let Some(hint) = e.hint() {
                log_debug!("Try: {}", hint);
            }
            1
        }
    };

    process::exit(code);
}
