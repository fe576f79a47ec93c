use clap::command;
use log::debug;
use std::process;

use alphacode::cmd::{code, expires, secret, verify, watch, CommandType};
use alphacode::config::Config;
use alphacode::totp::Clock;
use alphacode::writer::{OtpWriter, OutErr};

fn main() {
    env_logger::init();

    let matches = command!()
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands([
            code::subcommand(),
            verify::subcommand(),
            expires::subcommand(),
            watch::subcommand(),
            secret::subcommand(),
        ])
        .get_matches();

    let mut writer = OtpWriter::new();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            process::exit(1);
        }
    };

    let (name, args) = match matches.subcommand() {
        Some(subcommand) => subcommand,
        None => process::exit(2),
    };
    debug!("Running {}", name);

    let clock = Clock::new();
    let result = match CommandType::from_name(name) {
        Some(CommandType::Code) => code::run_code(args, &config, clock, &mut writer).map(|_| true),
        Some(CommandType::Verify) => verify::run_verify(args, &config, clock, &mut writer),
        Some(CommandType::Expires) => {
            expires::run_expires(args, &config, clock, &mut writer).map(|_| true)
        }
        Some(CommandType::Watch) => watch::run_watch(args, &config, clock, &mut writer).map(|_| true),
        Some(CommandType::Secret) => {
            secret::run_secret(&mut writer);
            Ok(true)
        }
        None => {
            writer.write_err(&format!("Unknown command: {}\n", name));
            Ok(false)
        }
    };

    match result {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            process::exit(1);
        }
    }
}
