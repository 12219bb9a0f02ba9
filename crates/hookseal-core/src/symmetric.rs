// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared-secret HMAC-SHA256 signatures.

use hmac::{Hmac, Mac};
use hookseal_codec::encode_hex;
use sha2::Sha256;

use crate::compare::timing_safe_eq_str;
use crate::error::{Result, SignatureError};
use crate::scheme::{Sign, Verify, VerifyOptions};

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 signature in hex characters.
pub const HMAC_HEX_LEN: usize = 64;

/// Compute the HMAC-SHA256 of `message` keyed by the raw bytes of `secret`.
///
/// The secret is keyed by its UTF-8 encoding. Text messages are expected as
/// UTF-8 bytes too. Non-ASCII secrets therefore do not match signers that
/// narrow each UTF-16 code unit to a single byte.
///
/// Returns 64 lowercase hex characters.
pub fn hmac_sign(message: &[u8], secret: &str) -> Result<String> {
	let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
		.map_err(|e| SignatureError::KeyImport(format!("HMAC key rejected: {e}")))?;
	mac.update(message);
	Ok(encode_hex(mac.finalize().into_bytes()))
}

/// Recompute the signature and compare it to `digest` in constant time.
///
/// Malformed digests (wrong length, non-hex) are simply not equal.
pub fn hmac_verify(message: &[u8], secret: &str, digest: &str) -> Result<bool> {
	hmac_verify_with(message, secret, digest, &VerifyOptions::default())
}

/// [`hmac_verify`] with caller options applied to the presented digest.
pub fn hmac_verify_with(
	message: &[u8],
	secret: &str,
	digest: &str,
	opts: &VerifyOptions,
) -> Result<bool> {
	let expected = hmac_sign(message, secret)?;

	let matched = if opts.accept_uppercase_hex {
		timing_safe_eq_str(&expected, &digest.to_ascii_lowercase())
	} else {
		timing_safe_eq_str(&expected, digest)
	};

	Ok(matched)
}

/// HMAC-SHA256 as a [`Sign`]/[`Verify`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Symmetric;

impl Sign for Symmetric {
	fn sign(&self, message: &[u8], key: &str) -> Result<String> {
		hmac_sign(message, key)
	}
}

impl Verify for Symmetric {
	fn verify(
		&self,
		message: &[u8],
		key: &str,
		signature: &str,
		opts: &VerifyOptions,
	) -> Result<bool> {
		hmac_verify_with(message, key, signature, opts)
	}
}
