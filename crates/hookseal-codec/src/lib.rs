// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Text encodings used by webhook signatures and key material.
//!
//! - HMAC signatures travel as lowercase hex.
//! - RSA signatures travel as standard, padded base64.
//! - RSA keys travel as PEM: base64 DER between `-----BEGIN <label>-----` and
//!   `-----END <label>-----` markers.

pub mod error;
pub mod pem;

use base64::{engine::general_purpose::STANDARD, Engine as _};

pub use error::CodecError;
pub use pem::{decode_pem, strip_pem, wrap_pem, PemLabel};

/// Encode bytes as lowercase hex, two characters per byte.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
	hex::encode(bytes)
}

/// Decode hex text of either case.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CodecError> {
	hex::decode(text).map_err(CodecError::InvalidHex)
}

/// Encode bytes as standard, padded base64.
pub fn encode_base64(bytes: impl AsRef<[u8]>) -> String {
	STANDARD.encode(bytes)
}

/// Decode standard, padded base64.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, CodecError> {
	STANDARD.decode(text).map_err(CodecError::InvalidBase64)
}
