// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HMAC-SHA-512 signing and verification.
//!
//! Tokens are signed through `jsonwebtoken` with [`ALGORITHM`]; the raw
//! primitives here produce the same signatures and also back the
//! constant-time secret comparison in [`SharedSecret`](crate::config::SharedSecret).

use hmac::{Hmac, Mac};
use jsonwebtoken::Algorithm;
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Algorithm every token is signed with.
pub const ALGORITHM: Algorithm = Algorithm::HS512;

fn keyed(secret: &[u8]) -> HmacSha512 {
    HmacSha512::new_from_slice(secret).expect("HMAC accepts keys of any length")
}

/// Compute the signature of `signing_input` under `secret`.
pub fn sign(signing_input: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac = keyed(secret);
    mac.update(signing_input);
    mac.finalize().into_bytes().to_vec()
}

/// Check `signature` against a fresh signature of `signing_input`.
///
/// The comparison is constant-time. Any mismatch, including a truncated or
/// empty signature, yields `false`.
pub fn verify(signing_input: &[u8], signature: &[u8], secret: &[u8]) -> bool {
    let mut mac = keyed(secret);
    mac.update(signing_input);
    mac.verify_slice(signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"recipeKey";
    const INPUT: &[u8] = b"eyJhbGciOiJIUzUxMiJ9.eyJzdWIiOiJhYm5hbXJvIn0";

    #[test]
    fn signature_is_deterministic_and_512_bits() {
        let first = sign(INPUT, SECRET);
        let second = sign(INPUT, SECRET);
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn verify_accepts_own_signature() {
        let signature = sign(INPUT, SECRET);
        assert!(verify(INPUT, &signature, SECRET));
    }

    #[test]
    fn verify_rejects_mutated_input() {
        let signature = sign(INPUT, SECRET);
        let mut mutated = INPUT.to_vec();
        mutated[10] ^= 0x01;
        assert!(!verify(&mutated, &signature, SECRET));
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let signature = sign(INPUT, b"dummySecret");
        assert!(!verify(INPUT, &signature, SECRET));
    }

    #[test]
    fn verify_rejects_truncated_or_empty_signature() {
        let signature = sign(INPUT, SECRET);
        assert!(!verify(INPUT, &signature[..32], SECRET));
        assert!(!verify(INPUT, &[], SECRET));
    }

    #[test]
    fn empty_secret_still_signs() {
        let signature = sign(INPUT, b"");
        assert!(verify(INPUT, &signature, b""));
        assert!(!verify(INPUT, &signature, SECRET));
    }
}
