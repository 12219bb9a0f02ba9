// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Routes sign and verify calls to the scheme implied by the key.

use tracing::{debug, instrument, warn};

use crate::asymmetric::{rsa_sign, rsa_verify};
use crate::error::Result;
use crate::key::KeyMaterial;
use crate::scheme::{Scheme, Sign, Verify, VerifyOptions};
use crate::symmetric::{hmac_sign, hmac_verify_with};

/// Sign with the scheme `key` implies for signing.
///
/// Text containing `PRIVATE KEY` signs with RSA. Anything else, a public key
/// included, is used as an HMAC secret.
#[instrument(skip_all, fields(kind = key.kind(), scheme = %key.sign_scheme()))]
pub fn sign_with_key(message: &[u8], key: &KeyMaterial) -> Result<String> {
	match key.sign_scheme() {
		Scheme::Rsa => {
			debug!("signing with RSA private key");
			rsa_sign(message, key.expose())
		}
		Scheme::Hmac => {
			debug!("signing with HMAC secret");
			hmac_sign(message, key.expose())
		}
	}
}

/// Verify with the scheme `key` implies for verification.
///
/// Text containing `PUBLIC KEY` verifies with RSA. Anything else, a private
/// key included, is used as an HMAC secret.
#[instrument(skip_all, fields(kind = key.kind(), scheme = %key.verify_scheme()))]
pub fn verify_with_key(
	message: &[u8],
	key: &KeyMaterial,
	signature: &str,
	opts: &VerifyOptions,
) -> Result<bool> {
	let valid = match key.verify_scheme() {
		Scheme::Rsa => rsa_verify(message, key.expose(), signature)?,
		Scheme::Hmac => hmac_verify_with(message, key.expose(), signature, opts)?,
	};

	if valid {
		debug!("webhook signature verified");
	} else {
		warn!("webhook signature verification failed");
	}

	Ok(valid)
}

/// Classify `key` and sign with the implied scheme.
pub fn dispatch_sign(message: &[u8], key: &str) -> Result<String> {
	sign_with_key(message, &KeyMaterial::parse(key))
}

/// Classify `key` and verify with the implied scheme.
pub fn dispatch_verify(
	message: &[u8],
	key: &str,
	signature: &str,
	opts: &VerifyOptions,
) -> Result<bool> {
	verify_with_key(message, &KeyMaterial::parse(key), signature, opts)
}

/// Key-shape dispatch as a [`Sign`]/[`Verify`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Combined;

impl Sign for Combined {
	fn sign(&self, message: &[u8], key: &str) -> Result<String> {
		dispatch_sign(message, key)
	}
}

impl Verify for Combined {
	fn verify(
		&self,
		message: &[u8],
		key: &str,
		signature: &str,
		opts: &VerifyOptions,
	) -> Result<bool> {
		dispatch_verify(message, key, signature, opts)
	}
}
