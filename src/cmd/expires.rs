use clap::{command, ArgMatches, Command};

use super::{period, period_arg, timestamp, timestamp_arg, CommandType};
use crate::config::Config;
use crate::error::Result;
use crate::totp::{seconds_left, unix_seconds, GetTime};
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Expires.as_str())
        .about("Print the seconds left before the current code expires")
        .args(&[period_arg(), timestamp_arg()])
}

pub fn run_expires<W, C>(
    expires_args: &ArgMatches,
    config: &Config,
    clock: C,
    writer: &mut W,
) -> Result<()>
where
    W: OutErr,
    C: GetTime,
{
    let now = timestamp(expires_args).unwrap_or_else(|| unix_seconds(clock.get_now()));
    let remaining = seconds_left(now, period(expires_args, config))?;

    writer.write(&format!("{}\n", remaining));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::CommandType::Expires;
    use crate::error::Error;
    use crate::tests::mocks::*;
    use crate::tests::utils::get_cmd_args;

    fn run(arg_vec: &[&str], clock: MockClock) -> (Result<()>, MockOtpWriter) {
        let mut writer = MockOtpWriter::new();
        let expires_args = get_cmd_args(Expires, subcommand(), arg_vec).unwrap();
        let result = run_expires(&expires_args, &Config::default(), clock, &mut writer);
        (result, writer)
    }

    #[test]
    fn full_period_at_a_step_boundary() {
        let (result, writer) = run(&["alphacode", "expires"], MockClock::new());

        assert!(result.is_ok());
        assert_eq!(writer.out_str(), "30\n");
    }

    #[test]
    fn counts_down_within_a_step() {
        let (result, writer) = run(&["alphacode", "expires"], MockClock::at(119));

        assert!(result.is_ok());
        assert_eq!(writer.out_str(), "1\n");
    }

    #[test]
    fn honours_period_and_timestamp() {
        let arg_vec = ["alphacode", "expires", "-p", "60", "-t", "100"];
        let (result, writer) = run(&arg_vec, MockClock::new());

        assert!(result.is_ok());
        assert_eq!(writer.out_str(), "20\n");
    }

    #[test]
    fn rejects_a_zero_period() {
        let (result, writer) = run(&["alphacode", "expires", "-p", "0"], MockClock::new());

        assert!(matches!(result, Err(Error::InvalidPeriod)));
        assert_eq!(writer.out, Vec::new());
    }
}
