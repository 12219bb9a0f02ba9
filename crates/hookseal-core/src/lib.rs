// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Webhook signing and verification.
//!
//! Two schemes sit behind one API:
//!
//! - **HMAC-SHA256** with a shared secret, lowercase hex signatures, verified
//!   with a constant-time comparison.
//! - **RSASSA-PKCS1-v1_5 / SHA-256** with a PKCS#8 private key for signing and
//!   an SPKI public key for verification, base64 signatures.
//!
//! [`dispatch_sign`] and [`dispatch_verify`] pick the scheme from the shape of
//! the key text via [`KeyMaterial::parse`].
//!
//! ```
//! use hookseal_core::{dispatch_sign, dispatch_verify, VerifyOptions};
//!
//! let sig = dispatch_sign(b"hello", "whsec_test")?;
//! assert_eq!(sig.len(), 64);
//! assert!(dispatch_verify(b"hello", "whsec_test", &sig, &VerifyOptions::default())?);
//! # Ok::<(), hookseal_core::SignatureError>(())
//! ```

pub mod asymmetric;
pub mod compare;
pub mod dispatch;
pub mod error;
pub mod key;
pub mod scheme;
pub mod symmetric;
#[cfg(feature = "tokio")]
pub mod task;

pub use asymmetric::{rsa_sign, rsa_verify, Asymmetric};
pub use compare::{timing_safe_eq, timing_safe_eq_str};
pub use dispatch::{dispatch_sign, dispatch_verify, sign_with_key, verify_with_key, Combined};
pub use error::{Result, SignatureError};
pub use key::KeyMaterial;
pub use scheme::{Scheme, Sign, Verify, VerifyOptions};
pub use symmetric::{hmac_sign, hmac_verify, hmac_verify_with, Symmetric};
#[cfg(feature = "tokio")]
pub use task::{sign_async, verify_async};
