//! Passphrase-keyed envelope: the single seal/open primitive used for
//! both whole-vault and per-record encryption.
//!
//! A sealed envelope is a standard base64 string over:
//!
//! ```text
//! [version: 1][memory_kib: 4 LE][iterations: 4 LE][parallelism: 4 LE][salt: 32][nonce: 12][ciphertext + tag]
//! ```
//!
//! Everything before the nonce is the header.  It is authenticated as
//! associated data, so tampering with the stored KDF parameters or salt
//! fails exactly like a wrong passphrase does.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroizing;

use super::encryption::{decrypt, encrypt};
use super::kdf::{derive_key, generate_salt, Argon2Params, SALT_LEN};
use crate::errors::{Result, VaultError};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

/// version + three u32 params + salt.
const HEADER_LEN: usize = 1 + 3 * 4 + SALT_LEN;

/// Encrypt `plaintext` under a key derived from `passphrase`.
///
/// Every call draws a fresh salt and nonce, so sealing the same input
/// twice never yields the same string.
pub fn seal(plaintext: &[u8], passphrase: &[u8], params: &Argon2Params) -> Result<String> {
    let salt = generate_salt();
    let header = encode_header(params, &salt);

    let key = derive_key(passphrase, &salt, params)?;
    let body = encrypt(&key[..], plaintext, &header)?;

    let mut blob = header;
    blob.extend_from_slice(&body);
    Ok(BASE64.encode(blob))
}

/// Decrypt an envelope produced by `seal`.
///
/// A wrong passphrase and a malformed or corrupted envelope are reported
/// the same way: `VaultError::DecryptionFailed`.
pub fn open(sealed: &str, passphrase: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let blob = BASE64
        .decode(sealed.trim())
        .map_err(|_| VaultError::DecryptionFailed)?;

    if blob.len() < HEADER_LEN {
        return Err(VaultError::DecryptionFailed);
    }
    let (header, body) = blob.split_at(HEADER_LEN);

    let (params, salt) = decode_header(header)?;
    let key = derive_key(passphrase, salt, &params).map_err(|_| VaultError::DecryptionFailed)?;

    decrypt(&key[..], body, header).map(Zeroizing::new)
}

fn encode_header(params: &Argon2Params, salt: &[u8; SALT_LEN]) -> Vec<u8> {
    let mut header = Vec::with_capacity(HEADER_LEN);
    header.push(ENVELOPE_VERSION);
    header.extend_from_slice(&params.memory_kib.to_le_bytes());
    header.extend_from_slice(&params.iterations.to_le_bytes());
    header.extend_from_slice(&params.parallelism.to_le_bytes());
    header.extend_from_slice(salt);
    header
}

fn decode_header(header: &[u8]) -> Result<(Argon2Params, &[u8])> {
    if header.first() != Some(&ENVELOPE_VERSION) {
        return Err(VaultError::DecryptionFailed);
    }

    let params = Argon2Params {
        memory_kib: read_u32(&header[1..5])?,
        iterations: read_u32(&header[5..9])?,
        parallelism: read_u32(&header[9..13])?,
    };
    params
        .validate()
        .map_err(|_| VaultError::DecryptionFailed)?;

    Ok((params, &header[13..HEADER_LEN]))
}

fn read_u32(bytes: &[u8]) -> Result<u32> {
    let arr: [u8; 4] = bytes.try_into().map_err(|_| VaultError::DecryptionFailed)?;
    Ok(u32::from_le_bytes(arr))
}
