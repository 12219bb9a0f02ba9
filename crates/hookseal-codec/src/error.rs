// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors produced while decoding textual key or signature material.
#[derive(Debug, Error)]
pub enum CodecError {
	#[error("invalid hex: {0}")]
	InvalidHex(#[source] hex::FromHexError),

	#[error("invalid base64: {0}")]
	InvalidBase64(#[source] base64::DecodeError),

	#[error("PEM block for {label} has an empty body")]
	EmptyPem { label: &'static str },
}
