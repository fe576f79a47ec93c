use clap::{command, Command};

use super::CommandType;
use crate::utils::generate_secret;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Secret.as_str()).about("Generate a random base64 secret")
}

pub fn run_secret<W>(writer: &mut W)
where
    W: OutErr,
{
    let new_secret = generate_secret();
    writer.write(&format!("{}\n", new_secret));
}
