// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading key material from environment variables.

use std::path::{Path, PathBuf};
use std::{env, fs};

use hookseal_core::KeyMaterial;
use hookseal_secret::SecretString;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyEnvError {
	#[error("failed to read key file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("key file path in {var} is empty")]
	EmptyPath { var: String },

	#[error("required key not found: set either {var} or {file_var}")]
	Missing { var: String, file_var: String },
}

/// Read a key file, dropping one trailing newline.
///
/// PEM files keep their internal line breaks; only the final `\n` (or
/// `\r\n`) that editors append is removed, which matters for shared secrets
/// stored in files.
pub fn read_key_file(path: &Path) -> Result<SecretString, KeyEnvError> {
	let content = fs::read_to_string(path).map_err(|source| KeyEnvError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	let trimmed = content
		.strip_suffix("\r\n")
		.or_else(|| content.strip_suffix('\n'))
		.unwrap_or(&content);

	Ok(SecretString::new(trimmed.to_string()))
}

/// Load key material using the `VAR` / `VAR_FILE` convention.
///
/// `VAR_FILE` takes precedence. Returns `Ok(None)` when neither is set.
pub fn load_key_env(var: &str) -> Result<Option<KeyMaterial>, KeyEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path) = env::var(&file_var) {
		if path.is_empty() {
			return Err(KeyEnvError::EmptyPath { var: file_var });
		}
		let text = read_key_file(Path::new(&path))?;
		return Ok(Some(KeyMaterial::parse(text.expose().as_str())));
	}

	Ok(env::var(var).ok().map(KeyMaterial::parse))
}

/// Like [`load_key_env`], but a missing key is an error.
pub fn require_key_env(var: &str) -> Result<KeyMaterial, KeyEnvError> {
	load_key_env(var)?.ok_or_else(|| KeyEnvError::Missing {
		var: var.to_string(),
		file_var: format!("{var}_FILE"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use hookseal_core::Scheme;
	use std::io::Write;
	use tempfile::NamedTempFile;

	fn clear(var: &str) {
		env::remove_var(var);
		env::remove_var(format!("{var}_FILE"));
	}

	#[test]
	fn test_returns_none_when_not_set() {
		let var = "HOOKSEAL_TEST_UNSET_KEY";
		clear(var);
		assert!(load_key_env(var).unwrap().is_none());
	}

	#[test]
	fn test_reads_shared_secret_from_env() {
		let var = "HOOKSEAL_TEST_DIRECT_KEY";
		clear(var);
		env::set_var(var, "whsec_direct");

		let key = load_key_env(var).unwrap().unwrap();
		assert_eq!(key.sign_scheme(), Scheme::Hmac);
		assert_eq!(key.expose(), "whsec_direct");

		clear(var);
	}

	#[test]
	fn test_file_var_takes_precedence() {
		let var = "HOOKSEAL_TEST_PRECEDENCE_KEY";
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "whsec_from_file").unwrap();

		env::set_var(var, "whsec_from_env");
		env::set_var(format!("{var}_FILE"), file.path());

		let key = load_key_env(var).unwrap().unwrap();
		assert_eq!(key.expose(), "whsec_from_file");

		clear(var);
	}

	#[test]
	fn test_pem_file_keeps_inner_newlines() {
		let var = "HOOKSEAL_TEST_PEM_FILE_KEY";
		let pem = "-----BEGIN PUBLIC KEY-----\nabc\n-----END PUBLIC KEY-----";
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "{pem}").unwrap();

		clear(var);
		env::set_var(format!("{var}_FILE"), file.path());

		let key = load_key_env(var).unwrap().unwrap();
		assert!(matches!(key, KeyMaterial::PublicKeyPem(_)));
		assert_eq!(key.expose(), pem);

		clear(var);
	}

	#[test]
	fn test_read_key_file_strips_crlf() {
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "whsec_windows\r\n").unwrap();
		assert_eq!(read_key_file(file.path()).unwrap().expose(), "whsec_windows");
	}

	#[test]
	fn test_read_key_file_preserves_content_without_newline() {
		let mut file = NamedTempFile::new().unwrap();
		write!(file, "whsec_exact").unwrap();
		assert_eq!(read_key_file(file.path()).unwrap().expose(), "whsec_exact");
	}

	#[test]
	fn test_empty_file_path_is_error() {
		let var = "HOOKSEAL_TEST_EMPTY_PATH_KEY";
		clear(var);
		env::set_var(format!("{var}_FILE"), "");

		assert!(matches!(
			load_key_env(var),
			Err(KeyEnvError::EmptyPath { .. })
		));

		clear(var);
	}

	#[test]
	fn test_missing_file_is_error() {
		let var = "HOOKSEAL_TEST_MISSING_FILE_KEY";
		clear(var);
		env::set_var(format!("{var}_FILE"), "/nonexistent/hookseal/key.pem");

		assert!(matches!(load_key_env(var), Err(KeyEnvError::Io { .. })));

		clear(var);
	}

	#[test]
	fn test_require_reports_both_variable_names() {
		let var = "HOOKSEAL_TEST_REQUIRED_KEY";
		clear(var);

		let err = require_key_env(var).unwrap_err();
		assert_eq!(
			err.to_string(),
			"required key not found: set either HOOKSEAL_TEST_REQUIRED_KEY or HOOKSEAL_TEST_REQUIRED_KEY_FILE"
		);
	}
}
