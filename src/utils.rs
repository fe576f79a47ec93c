use data_encoding::BASE64;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::Result;

const SECRET_BYTES: usize = 16;

// Generate a 16 byte random base64 secret
pub fn generate_secret() -> String {
    let mut dest = [0u8; SECRET_BYTES];
    OsRng.fill_bytes(&mut dest);
    encode_secret(&dest)
}

pub fn encode_secret(raw: &[u8]) -> String {
    BASE64.encode(raw)
}

pub fn decode_secret(encoded: &str) -> Result<Vec<u8>> {
    Ok(BASE64.decode(encoded.as_bytes())?)
}

// Validate key provided in arguments is a valid base64 encoding
pub fn is_base64_secret(value: &str) -> std::result::Result<(), String> {
    match BASE64.decode(value.as_bytes()) {
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("the secret is not a valid base64 encoding")),
    }
}
