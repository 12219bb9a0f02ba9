// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for webhook signing keys.
//!
//! Keys come from environment variables using the `VAR` / `VAR_FILE`
//! convention, so PEM files and shared secrets can be mounted as Docker or
//! Kubernetes secrets instead of being placed in the environment directly.

pub mod env;

use hookseal_core::KeyMaterial;
use tracing::debug;

pub use env::{load_key_env, read_key_file, require_key_env, KeyEnvError};

/// Variable holding the key used by `sign` (shared secret or private key).
pub const SIGNING_KEY_VAR: &str = "HOOKSEAL_SIGNING_KEY";

/// Variable holding the key used by `verify` (shared secret or public key).
pub const VERIFY_KEY_VAR: &str = "HOOKSEAL_VERIFY_KEY";

/// Signing and verification keys loaded from the environment.
///
/// `Debug` prints only the kind of each key; secret variants are redacted by
/// [`KeyMaterial`] itself.
#[derive(Clone, Default)]
pub struct WebhookKeys {
	pub signing: Option<KeyMaterial>,
	pub verifying: Option<KeyMaterial>,
}

impl std::fmt::Debug for WebhookKeys {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("WebhookKeys")
			.field("signing", &self.signing.as_ref().map(KeyMaterial::kind))
			.field("verifying", &self.verifying.as_ref().map(KeyMaterial::kind))
			.finish()
	}
}

impl WebhookKeys {
	/// Load both keys from [`SIGNING_KEY_VAR`] and [`VERIFY_KEY_VAR`].
	///
	/// Either may be absent. A `_FILE` variable that points at an unreadable
	/// file is an error.
	pub fn from_env() -> Result<Self, KeyEnvError> {
		let signing = load_key_env(SIGNING_KEY_VAR)?;
		let verifying = load_key_env(VERIFY_KEY_VAR)?;

		debug!(
			signing = signing.as_ref().map(KeyMaterial::kind),
			verifying = verifying.as_ref().map(KeyMaterial::kind),
			"Loaded webhook keys"
		);

		Ok(Self { signing, verifying })
	}

	pub fn with_signing(mut self, key: impl Into<KeyMaterial>) -> Self {
		self.signing = Some(key.into());
		self
	}

	pub fn with_verifying(mut self, key: impl Into<KeyMaterial>) -> Self {
		self.verifying = Some(key.into());
		self
	}
}
