use clap::{ArgMatches, Command};

use crate::cmd::CommandType;

pub fn get_cmd_args(
    command: CommandType,
    subcommand: Command,
    arg_vec: &[&str],
) -> Result<ArgMatches, clap::Error> {
    let matches = Command::new("alphacode")
        .subcommand(subcommand)
        .try_get_matches_from(arg_vec)?;

    let cmd_args = match matches.subcommand() {
        Some((name, cmd_args)) if name == command.as_str() => cmd_args.clone(),
        _ => panic!("Expected {} subcommand", command.as_str()),
    };
    Ok(cmd_args)
}
