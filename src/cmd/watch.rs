use clap::{arg, command, ArgMatches, Command};
use log::info;
use std::ops::ControlFlow;
use std::time::Duration;

use super::{build_generator, length, length_arg, period, period_arg, secret_arg, CommandType};
use crate::config::Config;
use crate::error::Result;
use crate::schedule::Schedule;
use crate::totp::GetTime;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Watch.as_str())
        .about("Keep printing the current code and its time to expiry")
        .args(&[
            secret_arg(),
            length_arg(),
            period_arg(),
            arg!(-r --refresh <MS> "Milliseconds between refreshes")
                .required(false)
                .validator(|value| value.parse::<u64>()),
            arg!(-n --ticks <COUNT> "Stop after this many refreshes")
                .required(false)
                .validator(|value| value.parse::<u64>()),
        ])
}

pub fn run_watch<W, C>(
    watch_args: &ArgMatches,
    config: &Config,
    clock: C,
    writer: &mut W,
) -> Result<()>
where
    W: OutErr,
    C: GetTime,
{
    let generator = build_generator(watch_args, config, clock)?;
    let length = length(watch_args, config);
    let period = period(watch_args, config);
    let refresh_ms = watch_args
        .value_of("refresh")
        .and_then(|value| value.parse().ok())
        .unwrap_or(config.refresh_ms);

    let mut schedule = Schedule::every(Duration::from_millis(refresh_ms));
    if let Some(ticks) = watch_args.value_of("ticks").and_then(|value| value.parse().ok()) {
        schedule = schedule.limit(ticks);
    }

    info!("Refreshing every {}ms", refresh_ms);
    schedule.run(|_| {
        let now = generator.now();
        let code = generator.generate(length, period, Some(now))?;
        let remaining = generator.expires(period, Some(now))?;

        writer.clear_screen();
        writer.write(&format!("{} | expires in {}s\n", code, remaining));
        Ok(ControlFlow::Continue(()))
    })?;

    Ok(())
}
