// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Constant-time equality for signature strings.

use subtle::{Choice, ConstantTimeEq};

/// Compare two byte strings without short-circuiting.
///
/// Every index up to the longer length is visited and folded into a single
/// [`Choice`], so neither the position of the first difference nor a length
/// mismatch ends the scan early. Missing bytes on the shorter side compare
/// against zero; the length check keeps a zero-padded prefix from matching.
pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
	let len = a.len().max(b.len());
	let mut different: Choice = !(a.len() as u64).ct_eq(&(b.len() as u64));

	for i in 0..len {
		let x = a.get(i).copied().unwrap_or(0);
		let y = b.get(i).copied().unwrap_or(0);
		different |= !x.ct_eq(&y);
	}

	!bool::from(different)
}

/// [`timing_safe_eq`] over the UTF-8 bytes of two strings.
pub fn timing_safe_eq_str(a: &str, b: &str) -> bool {
	timing_safe_eq(a.as_bytes(), b.as_bytes())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_equal_strings_match() {
		assert!(timing_safe_eq_str("deadbeef", "deadbeef"));
	}

	#[test]
	fn test_empty_strings_match() {
		assert!(timing_safe_eq_str("", ""));
	}

	#[test]
	fn test_empty_and_non_empty_differ() {
		assert!(!timing_safe_eq_str("", "a"));
		assert!(!timing_safe_eq_str("a", ""));
	}

	#[test]
	fn test_length_mismatch_differs() {
		assert!(!timing_safe_eq_str("abc", "abcd"));
		assert!(!timing_safe_eq_str("abcd", "abc"));
	}

	#[test]
	fn test_zero_padding_does_not_match() {
		assert!(!timing_safe_eq(b"ab", b"ab\0"));
	}

	#[test]
	fn test_difference_at_first_and_last_byte() {
		assert!(!timing_safe_eq_str("xbcdef", "abcdef"));
		assert!(!timing_safe_eq_str("abcdex", "abcdef"));
	}

	proptest! {
		#[test]
		fn prop_agrees_with_slice_equality(
			a in proptest::collection::vec(proptest::num::u8::ANY, 0..64),
			b in proptest::collection::vec(proptest::num::u8::ANY, 0..64)
		) {
			prop_assert_eq!(timing_safe_eq(&a, &b), a == b);
		}

		#[test]
		fn prop_reflexive(a in proptest::collection::vec(proptest::num::u8::ANY, 0..256)) {
			prop_assert!(timing_safe_eq(&a, &a));
		}
	}
}
