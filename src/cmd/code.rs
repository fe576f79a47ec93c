use clap::{arg, command, ArgMatches, Command};
use log::debug;

use super::{build_generator, length, length_arg, period, period_arg, secret_arg, timestamp};
use super::{timestamp_arg, CommandType};
use crate::config::Config;
use crate::error::Result;
use crate::totp::GetTime;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Code.as_str())
        .about("Print the one-time code for the current time step")
        .args(&[
            secret_arg(),
            length_arg(),
            period_arg(),
            timestamp_arg(),
            arg!(--previous "Print the code of the previous time step instead").required(false),
        ])
}

pub fn run_code<W, C>(code_args: &ArgMatches, config: &Config, clock: C, writer: &mut W) -> Result<()>
where
    W: OutErr,
    C: GetTime,
{
    let generator = build_generator(code_args, config, clock)?;
    let length = length(code_args, config);
    let period = period(code_args, config);
    let timestamp = timestamp(code_args);

    let code = if code_args.is_present("previous") {
        debug!("Generating previous step code, length {} period {}", length, period);
        generator.last_generate(length, period, timestamp)?
    } else {
        debug!("Generating code, length {} period {}", length, period);
        generator.generate(length, period, timestamp)?
    };

    writer.write(&format!("{}\n", code));
    Ok(())
}
