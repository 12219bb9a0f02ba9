// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hard failures of the signing engine.
//!
//! A signature that does not match is never an error; verification reports it
//! as `Ok(false)`. Everything here means the caller's key material or
//! environment is wrong.

use hookseal_codec::CodecError;
use thiserror::Error;

/// Result type for signing and verification.
pub type Result<T> = std::result::Result<T, SignatureError>;

#[derive(Debug, Error)]
pub enum SignatureError {
	/// The cryptographic backend refused the key.
	#[error("key import failed: {0}")]
	KeyImport(String),

	/// The PEM body could not be decoded.
	#[error("invalid key encoding: {0}")]
	InvalidKeyEncoding(#[from] CodecError),

	/// The key is valid PEM but not in a format the scheme accepts.
	#[error("unsupported key format: {0}")]
	UnsupportedKeyFormat(String),

	/// The signing primitive failed after the key was imported.
	#[error("signing failed: {0}")]
	Signing(String),

	/// A background signing task panicked or was cancelled.
	#[error("signing task failed: {0}")]
	Task(String),
}
