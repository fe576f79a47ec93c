use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;
use std::time::SystemTime;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};
use crate::utils::decode_secret;

// Time-based codes over a 32 character alphabet
//
// step   = floor(T / period)
// digest = HMAC-SHA256(secret, step as 8 byte big-endian)
// groups = digest split into 3 byte big-endian integers (last one is 2 bytes)
// offset = groups[last] mod length
// code   = ALPHABET[groups[(offset + i) mod groups.len()] mod 32] for i in 0..length

type HmacSha256 = Hmac<Sha256>;

pub const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
pub const DEFAULT_LENGTH: usize = 6;
pub const DEFAULT_PERIOD: u32 = 30;

const GROUP_SIZE: usize = 3;

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Whole seconds since the Unix epoch, floored, so instants before the
/// epoch come out negative.
pub fn unix_seconds(now: SystemTime) -> i64 {
    match now.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            let partial = if before.subsec_nanos() > 0 { 1 } else { 0 };
            -secs - partial
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeOptions {
    pub length: usize,
    pub period: u32,
}

impl Default for CodeOptions {
    fn default() -> Self {
        CodeOptions {
            length: DEFAULT_LENGTH,
            period: DEFAULT_PERIOD,
        }
    }
}

/// Derives and checks codes for a single shared secret.
///
/// Every operation is a pure function of its arguments and the secret.
/// Passing `None` as the timestamp reads "now" from the generator's clock.
pub struct CodeGenerator<C = Clock> {
    secret: Vec<u8>,
    clock: C,
}

impl<C> fmt::Debug for CodeGenerator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeGenerator")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl CodeGenerator<Clock> {
    /// Takes the base64 text form of the secret.
    pub fn new(encoded: &str) -> Result<Self> {
        CodeGenerator::with_clock(encoded, Clock::new())
    }

    pub fn from_bytes(secret: Vec<u8>) -> Self {
        CodeGenerator {
            secret,
            clock: Clock::new(),
        }
    }
}

impl<C: GetTime> CodeGenerator<C> {
    pub fn with_clock(encoded: &str, clock: C) -> Result<Self> {
        let secret = decode_secret(encoded)?;
        Ok(CodeGenerator { secret, clock })
    }

    pub fn now(&self) -> i64 {
        unix_seconds(self.clock.get_now())
    }

    fn resolve(&self, timestamp: Option<i64>) -> i64 {
        timestamp.unwrap_or_else(|| self.now())
    }

    pub fn generate(&self, length: usize, period: u32, timestamp: Option<i64>) -> Result<String> {
        if length == 0 {
            return Err(Error::InvalidLength);
        }
        let step = time_step(self.resolve(timestamp), period)?;
        let hmac = make_hmac(&self.secret, step);

        Ok(fold(&hmac, length))
    }

    /// Code for the step before the one containing `timestamp`.
    pub fn last_generate(
        &self,
        length: usize,
        period: u32,
        timestamp: Option<i64>,
    ) -> Result<String> {
        let step = time_step(self.resolve(timestamp), period)?;
        let previous = step
            .checked_sub(1)
            .and_then(|step| step.checked_mul(i64::from(period)))
            .ok_or(Error::TimestampOutOfRange)?;

        self.generate(length, period, Some(previous))
    }

    /// Accepts the code of the current step or of exactly one step back.
    pub fn verify(&self, code: &str, period: u32, timestamp: Option<i64>) -> Result<bool> {
        let timestamp = Some(self.resolve(timestamp));

        let current = self.generate(code.len(), period, timestamp)?;
        if codes_match(&current, code) {
            return Ok(true);
        }

        let last = self.last_generate(code.len(), period, timestamp)?;
        Ok(codes_match(&last, code))
    }

    /// Seconds until the current step ends, always in `1..=period`.
    pub fn expires(&self, period: u32, timestamp: Option<i64>) -> Result<u32> {
        seconds_left(self.resolve(timestamp), period)
    }

    pub fn generate_now(&self, options: CodeOptions) -> Result<String> {
        self.generate(options.length, options.period, None)
    }

    pub fn verify_now(&self, code: &str, options: CodeOptions) -> Result<bool> {
        self.verify(code, options.period, None)
    }
}

pub fn time_step(timestamp: i64, period: u32) -> Result<i64> {
    if period == 0 {
        return Err(Error::InvalidPeriod);
    }
    Ok(timestamp.div_euclid(i64::from(period)))
}

pub fn seconds_left(timestamp: i64, period: u32) -> Result<u32> {
    if period == 0 {
        return Err(Error::InvalidPeriod);
    }
    let period_secs = i64::from(period);
    let remaining = period_secs - timestamp.rem_euclid(period_secs);

    u32::try_from(remaining).map_err(|_| Error::TimestampOutOfRange)
}

// HMAC_SHA-256 -> 32 byte string
fn make_hmac(secret: &[u8], step: i64) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(&step.to_be_bytes());
    let result = mac.finalize();

    result.into_bytes().to_vec()
}

fn fold(digest: &[u8], length: usize) -> String {
    let groups: Vec<u32> = digest
        .chunks(GROUP_SIZE)
        .map(|group| {
            group
                .iter()
                .fold(0u32, |value, byte| (value << 8) | u32::from(*byte))
        })
        .collect();
    if groups.is_empty() {
        return String::new();
    }

    let offset = groups[groups.len() - 1] as usize % length;
    (0..length)
        .map(|i| {
            let value = groups[(offset + i) % groups.len()] as usize % ALPHABET.len();
            ALPHABET[value] as char
        })
        .collect()
}

fn codes_match(expected: &str, given: &str) -> bool {
    expected.as_bytes().ct_eq(given.as_bytes()).into()
}
