use clap::{arg, command, ArgMatches, Command};
use log::{debug, info};

use super::{build_generator, period, period_arg, secret_arg, timestamp, timestamp_arg};
use super::CommandType;
use crate::config::Config;
use crate::error::Result;
use crate::totp::GetTime;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Verify.as_str())
        .about("Verify a one-time code against the current and previous time step")
        .args(&[
            secret_arg(),
            arg!(-c --code <CODE> "One-time code to verify").required(true),
            period_arg(),
            timestamp_arg(),
        ])
}

/// Returns whether the code was accepted.
pub fn run_verify<W, C>(
    verify_args: &ArgMatches,
    config: &Config,
    clock: C,
    writer: &mut W,
) -> Result<bool>
where
    W: OutErr,
    C: GetTime,
{
    let generator = build_generator(verify_args, config, clock)?;
    let code = verify_args.value_of("code").unwrap_or_default();
    let period = period(verify_args, config);

    debug!("Verifying {} character code, period {}", code.len(), period);
    let is_valid = generator.verify(code, period, timestamp(verify_args))?;

    if is_valid {
        writer.write(&format!("{} valid\n", code));
    } else {
        info!("Rejected code");
        writer.write_err("Invalid code\n");
    }
    Ok(is_valid)
}
