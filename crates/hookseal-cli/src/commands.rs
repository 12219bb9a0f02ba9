// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use hookseal_codec::{decode_pem, wrap_pem, PemLabel};
use hookseal_config::{load_key_env, read_key_file, SIGNING_KEY_VAR, VERIFY_KEY_VAR};
use hookseal_core::{sign_with_key, verify_with_key, KeyMaterial, Scheme, VerifyOptions};
use serde::Serialize;
use tracing::{debug, info};

/// Where the payload comes from.
#[derive(Debug, Clone, clap::Args)]
#[group(required = true, multiple = false)]
pub struct MessageArgs {
	/// Payload given inline
	#[arg(short, long)]
	pub message: Option<String>,

	/// Read the payload from a file, or `-` for stdin
	#[arg(short, long, value_name = "PATH")]
	pub input: Option<PathBuf>,
}

impl MessageArgs {
	pub fn read(&self) -> anyhow::Result<Vec<u8>> {
		if let Some(message) = &self.message {
			return Ok(message.clone().into_bytes());
		}

		match self.input.as_deref() {
			Some(path) if path == Path::new("-") => {
				let mut buf = Vec::new();
				io::stdin()
					.read_to_end(&mut buf)
					.context("failed to read payload from stdin")?;
				Ok(buf)
			}
			Some(path) => std::fs::read(path)
				.with_context(|| format!("failed to read payload from {}", path.display())),
			None => anyhow::bail!("either --message or --input is required"),
		}
	}
}

#[derive(Debug, Clone, clap::Args)]
pub struct SignArgs {
	/// Shared secret or PKCS#8 private key; `@path` reads a file.
	/// Defaults to HOOKSEAL_SIGNING_KEY / HOOKSEAL_SIGNING_KEY_FILE.
	#[arg(short, long)]
	pub key: Option<String>,

	#[command(flatten)]
	pub payload: MessageArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct VerifyArgs {
	/// Shared secret or SPKI public key; `@path` reads a file.
	/// Defaults to HOOKSEAL_VERIFY_KEY / HOOKSEAL_VERIFY_KEY_FILE.
	#[arg(short, long)]
	pub key: Option<String>,

	/// Signature to check (hex for HMAC, base64 for RSA)
	#[arg(short, long)]
	pub signature: String,

	/// Accept an HMAC digest written in uppercase hex
	#[arg(long)]
	pub accept_uppercase_hex: bool,

	#[command(flatten)]
	pub payload: MessageArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct InspectArgs {
	/// Key text or `@path`
	#[arg(short, long)]
	pub key: String,

	/// Print as JSON
	#[arg(long)]
	pub json: bool,

	/// Print the key re-framed as 64-column PEM instead of a summary
	#[arg(long, conflicts_with = "json")]
	pub pem: bool,
}

/// What the dispatcher would do with a key.
#[derive(Debug, Serialize)]
pub struct Inspection {
	pub kind: &'static str,
	pub sign_scheme: Scheme,
	pub verify_scheme: Scheme,
}

impl From<&KeyMaterial> for Inspection {
	fn from(key: &KeyMaterial) -> Self {
		Self {
			kind: key.kind(),
			sign_scheme: key.sign_scheme(),
			verify_scheme: key.verify_scheme(),
		}
	}
}

/// Resolve a `--key` value, falling back to the environment variable `var`.
pub fn resolve_key(arg: Option<&str>, var: &str) -> anyhow::Result<KeyMaterial> {
	match arg {
		Some(value) => match value.strip_prefix('@') {
			Some(path) => {
				let text = read_key_file(Path::new(path))?;
				Ok(KeyMaterial::parse(text.expose().as_str()))
			}
			None => Ok(KeyMaterial::parse(value)),
		},
		None => load_key_env(var)?
			.with_context(|| format!("no key given: pass --key or set {var} / {var}_FILE")),
	}
}

pub fn sign(args: SignArgs) -> anyhow::Result<String> {
	let key = resolve_key(args.key.as_deref(), SIGNING_KEY_VAR)?;
	let message = args.payload.read()?;

	debug!(kind = key.kind(), len = message.len(), "Signing payload");
	let signature = sign_with_key(&message, &key)?;
	info!(scheme = %key.sign_scheme(), "Payload signed");

	Ok(signature)
}

pub fn verify(args: VerifyArgs) -> anyhow::Result<bool> {
	let key = resolve_key(args.key.as_deref(), VERIFY_KEY_VAR)?;
	let message = args.payload.read()?;
	let opts = VerifyOptions::new().with_uppercase_hex(args.accept_uppercase_hex);

	debug!(kind = key.kind(), len = message.len(), "Verifying payload");
	Ok(verify_with_key(&message, &key, args.signature.trim(), &opts)?)
}

pub fn inspect(args: InspectArgs) -> anyhow::Result<String> {
	let key = resolve_key(Some(args.key.as_str()), SIGNING_KEY_VAR)?;
	if args.pem {
		return normalized_pem(&key);
	}

	let inspection = Inspection::from(&key);

	if args.json {
		return Ok(serde_json::to_string(&inspection)?);
	}

	Ok(format!(
		"kind: {}\nsign scheme: {}\nverify scheme: {}",
		inspection.kind, inspection.sign_scheme, inspection.verify_scheme
	))
}

/// Decode a PEM key and frame it again with 64-column lines.
fn normalized_pem(key: &KeyMaterial) -> anyhow::Result<String> {
	let label = match key {
		KeyMaterial::PrivateKeyPem(_) => PemLabel::PrivateKey,
		KeyMaterial::PublicKeyPem(_) => PemLabel::PublicKey,
		KeyMaterial::SharedSecret(_) => anyhow::bail!("--pem needs a PEM key, got a shared secret"),
	};

	let der = decode_pem(key.expose(), label)
		.with_context(|| format!("key is not a valid {} block", label.as_str()))?;
	Ok(wrap_pem(&der, label).trim_end().to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn inline(message: &str) -> MessageArgs {
		MessageArgs {
			message: Some(message.to_string()),
			input: None,
		}
	}

	#[test]
	fn test_sign_then_verify_with_shared_secret() {
		let signature = sign(SignArgs {
			key: Some("whsec_test".to_string()),
			payload: inline("hello"),
		})
		.unwrap();
		assert_eq!(
			signature,
			"fa1f2843ca221403e67c335d22ed782f1f2b5a33261fbee70bd5ae4cbff02490"
		);

		let valid = verify(VerifyArgs {
			key: Some("whsec_test".to_string()),
			signature,
			accept_uppercase_hex: false,
			payload: inline("hello"),
		})
		.unwrap();
		assert!(valid);
	}

	#[test]
	fn test_verify_mismatch_is_false() {
		let valid = verify(VerifyArgs {
			key: Some("whsec_test".to_string()),
			signature: "00".repeat(32),
			accept_uppercase_hex: false,
			payload: inline("hello"),
		})
		.unwrap();
		assert!(!valid);
	}

	#[test]
	fn test_key_from_file_reference() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "whsec_test").unwrap();
		let arg = format!("@{}", file.path().display());

		let key = resolve_key(Some(arg.as_str()), SIGNING_KEY_VAR).unwrap();
		assert_eq!(key.expose(), "whsec_test");
	}

	#[test]
	fn test_payload_from_file() {
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "hello").unwrap();
		let args = MessageArgs {
			message: None,
			input: Some(file.path().to_path_buf()),
		};
		assert_eq!(args.read().unwrap(), b"hello".to_vec());
	}

	#[test]
	fn test_inspect_json_reports_scheme() {
		let out = inspect(InspectArgs {
			key: "-----BEGIN PUBLIC KEY-----\nabc\n-----END PUBLIC KEY-----".to_string(),
			json: true,
			pem: false,
		})
		.unwrap();
		let value: serde_json::Value = serde_json::from_str(&out).unwrap();
		assert_eq!(value["kind"], "public key");
		assert_eq!(value["sign_scheme"], "hmac-sha256");
		assert_eq!(value["verify_scheme"], "rsa-sha256");
	}

	#[test]
	fn test_inspect_text_for_shared_secret() {
		let out = inspect(InspectArgs {
			key: "whsec_test".to_string(),
			json: false,
			pem: false,
		})
		.unwrap();
		assert!(out.contains("sign scheme: hmac-sha256"));
		assert!(out.contains("verify scheme: hmac-sha256"));
		assert!(!out.contains("whsec_test"));
	}

	#[test]
	fn test_inspect_pem_reflows_public_key() {
		let fixture = include_str!("../../hookseal-core/tests/fixtures/public_spki.pem");
		let body: String = fixture
			.lines()
			.filter(|line| !line.starts_with("-----"))
			.collect();
		let one_line = format!("-----BEGIN PUBLIC KEY-----\r\n{body}\r\n-----END PUBLIC KEY-----");

		let out = inspect(InspectArgs {
			key: one_line,
			json: false,
			pem: true,
		})
		.unwrap();
		assert_eq!(out, fixture.trim_end());
	}

	#[test]
	fn test_inspect_pem_rejects_shared_secret() {
		let err = inspect(InspectArgs {
			key: "whsec_test".to_string(),
			json: false,
			pem: true,
		})
		.unwrap_err();
		assert!(err.to_string().contains("shared secret"));
		assert!(!err.to_string().contains("whsec_test"));
	}
}
