use clap::{arg, Arg, ArgMatches};
use std::fmt::Display;
use std::str::FromStr;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::totp::{CodeGenerator, GetTime};
use crate::utils::is_base64_secret;

pub mod code;
pub mod expires;
pub mod secret;
pub mod verify;
pub mod watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Code,
    Verify,
    Expires,
    Watch,
    Secret,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Code => "code",
            CommandType::Verify => "verify",
            CommandType::Expires => "expires",
            CommandType::Watch => "watch",
            CommandType::Secret => "secret",
        }
    }

    pub fn from_name(name: &str) -> Option<CommandType> {
        [
            CommandType::Code,
            CommandType::Verify,
            CommandType::Expires,
            CommandType::Watch,
            CommandType::Secret,
        ]
        .into_iter()
        .find(|command| command.as_str() == name)
    }
}

fn is_number<T>(value: &str) -> std::result::Result<(), String>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse::<T>().map(|_| ()).map_err(|e| e.to_string())
}

fn parsed<T: FromStr>(args: &ArgMatches, name: &str) -> Option<T> {
    args.value_of(name).and_then(|value| value.parse().ok())
}

pub fn secret_arg() -> Arg<'static> {
    arg!(-s --secret <SECRET> "Base64 encoded shared secret (defaults to the config file)")
        .required(false)
        .validator(is_base64_secret)
}

pub fn length_arg() -> Arg<'static> {
    arg!(-l --length <LENGTH> "Number of characters in the code")
        .required(false)
        .validator(is_number::<usize>)
}

pub fn period_arg() -> Arg<'static> {
    arg!(-p --period <SECONDS> "Length of one time step")
        .required(false)
        .validator(is_number::<u32>)
}

pub fn timestamp_arg() -> Arg<'static> {
    arg!(-t --timestamp <SECONDS> "Unix time to use instead of now")
        .required(false)
        .allow_hyphen_values(true)
        .validator(is_number::<i64>)
}

pub fn length(args: &ArgMatches, config: &Config) -> usize {
    parsed(args, "length").unwrap_or(config.length)
}

pub fn period(args: &ArgMatches, config: &Config) -> u32 {
    parsed(args, "period").unwrap_or(config.period)
}

pub fn timestamp(args: &ArgMatches) -> Option<i64> {
    parsed(args, "timestamp")
}

pub fn build_generator<C: GetTime>(
    args: &ArgMatches,
    config: &Config,
    clock: C,
) -> Result<CodeGenerator<C>> {
    let secret = args
        .value_of("secret")
        .or(config.secret.as_deref())
        .ok_or(Error::MissingSecret)?;

    CodeGenerator::with_clock(secret, clock)
}
