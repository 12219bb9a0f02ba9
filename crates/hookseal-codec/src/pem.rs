// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! PEM framing for RSA key material.

use crate::{decode_base64, encode_base64, CodecError};

const LINE_WIDTH: usize = 64;

/// PEM block labels the signing engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PemLabel {
	/// PKCS#8 private key.
	PrivateKey,
	/// SPKI public key.
	PublicKey,
	/// PKCS#1 private key. Recognized only so it can be rejected by name.
	RsaPrivateKey,
}

impl PemLabel {
	pub fn as_str(&self) -> &'static str {
		match self {
			PemLabel::PrivateKey => "PRIVATE KEY",
			PemLabel::PublicKey => "PUBLIC KEY",
			PemLabel::RsaPrivateKey => "RSA PRIVATE KEY",
		}
	}

	pub fn begin_marker(&self) -> String {
		format!("-----BEGIN {}-----", self.as_str())
	}

	pub fn end_marker(&self) -> String {
		format!("-----END {}-----", self.as_str())
	}
}

/// Remove the `label` markers and all ASCII whitespace, leaving the base64 body.
///
/// Markers for other labels are left in place, so a mismatched block fails
/// later at base64 decoding instead of being silently accepted.
pub fn strip_pem(text: &str, label: PemLabel) -> String {
	text
		.replace(&label.begin_marker(), "")
		.replace(&label.end_marker(), "")
		.chars()
		.filter(|c| !c.is_ascii_whitespace())
		.collect()
}

/// Strip the PEM framing and base64-decode the body to DER bytes.
pub fn decode_pem(text: &str, label: PemLabel) -> Result<Vec<u8>, CodecError> {
	let body = strip_pem(text, label);
	if body.is_empty() {
		return Err(CodecError::EmptyPem {
			label: label.as_str(),
		});
	}
	decode_base64(&body)
}

/// Wrap DER bytes in a PEM block with 64-column lines and `\n` endings.
pub fn wrap_pem(der: &[u8], label: PemLabel) -> String {
	let body = encode_base64(der);
	let mut out = String::with_capacity(body.len() + body.len() / LINE_WIDTH + 64);
	out.push_str(&label.begin_marker());
	out.push('\n');
	// base64 output is ASCII, so byte chunks are valid str boundaries
	for line in body.as_bytes().chunks(LINE_WIDTH) {
		out.push_str(&String::from_utf8_lossy(line));
		out.push('\n');
	}
	out.push_str(&label.end_marker());
	out.push('\n');
	out
}
