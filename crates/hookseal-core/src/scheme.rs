// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The sign/verify capability pair every scheme implements.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Signature scheme selected for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
	/// Shared-secret HMAC-SHA256, lowercase hex signatures.
	#[serde(rename = "hmac-sha256")]
	Hmac,
	/// RSASSA-PKCS1-v1_5 with SHA-256, base64 signatures.
	#[serde(rename = "rsa-sha256")]
	Rsa,
}

impl Scheme {
	pub fn as_str(&self) -> &'static str {
		match self {
			Scheme::Hmac => "hmac-sha256",
			Scheme::Rsa => "rsa-sha256",
		}
	}
}

impl std::fmt::Display for Scheme {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Options forwarded from the caller to the scheme doing the verification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct VerifyOptions {
	/// Lowercase an HMAC digest before comparing it. Ignored by RSA.
	pub accept_uppercase_hex: bool,
}

impl VerifyOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_uppercase_hex(mut self, accept: bool) -> Self {
		self.accept_uppercase_hex = accept;
		self
	}
}

/// Produce a signature over `message` with `key`.
pub trait Sign {
	fn sign(&self, message: &[u8], key: &str) -> Result<String>;
}

/// Check `signature` over `message` against `key`.
///
/// A mismatch is `Ok(false)`. `Err` is reserved for unusable key material.
pub trait Verify {
	fn verify(
		&self,
		message: &[u8],
		key: &str,
		signature: &str,
		opts: &VerifyOptions,
	) -> Result<bool>;
}
