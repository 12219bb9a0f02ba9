// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Async wrappers that keep RSA work off the runtime's worker threads.

use tokio::task;

use crate::dispatch::{sign_with_key, verify_with_key};
use crate::error::{Result, SignatureError};
use crate::key::KeyMaterial;
use crate::scheme::VerifyOptions;

/// Run [`sign_with_key`] on the blocking pool.
pub async fn sign_async(message: Vec<u8>, key: KeyMaterial) -> Result<String> {
	task::spawn_blocking(move || sign_with_key(&message, &key))
		.await
		.map_err(|e| SignatureError::Task(e.to_string()))?
}

/// Run [`verify_with_key`] on the blocking pool.
pub async fn verify_async(
	message: Vec<u8>,
	key: KeyMaterial,
	signature: String,
	opts: VerifyOptions,
) -> Result<bool> {
	task::spawn_blocking(move || verify_with_key(&message, &key, &signature, &opts))
		.await
		.map_err(|e| SignatureError::Task(e.to_string()))?
}
