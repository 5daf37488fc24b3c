// SPDX-License-Identifier: Apache-2.0

//! Signature algorithm selection for JWTs generated by an API gateway.
//!
//! Tokens forwarded by the gateway to backends are either signed with RSASSA-PKCS1-v1_5 using
//! SHA-256 or deliberately left unsigned. This crate provides the closed set of those choices,
//! each bound to the code that goes into the `alg` header parameter as registered in [RFC 7518]
//! and the IANA JOSE registry. Building the token and computing the signature are left to the
//! caller (e.g. via [`jsonwebtoken`]).
//!
//! [RFC 7518]: https://www.rfc-editor.org/rfc/rfc7518#section-3.1
//!
//! # Examples
//!
//! ## Selecting an algorithm
//!
//! ```
//! use jws_alg::SignatureAlgorithm;
//!
//! fn main() {
//!     let alg: SignatureAlgorithm = "RS256".parse().unwrap();
//!     assert_eq!(alg, SignatureAlgorithm::Sha256WithRsa);
//!     assert_eq!(alg.code(), "RS256");
//!
//!     // unknown codes are rejected instead of falling back to an unsigned token
//!     assert!("HS512".parse::<SignatureAlgorithm>().is_err());
//! }
//! ```
//!
//! ## Configuration
//!
//! ```
//! use jws_alg::{SignatureAlgorithm, SigningConfig};
//!
//! fn main() {
//!     let config = SigningConfig::from_json(br#"{"signature_algorithm": "SHA256withRSA"}"#)
//!         .unwrap();
//!     assert_eq!(config.algorithm().unwrap(), SignatureAlgorithm::Sha256WithRsa);
//!
//!     // unsigned tokens need an explicit opt-in
//!     assert!(SigningConfig::from_json(br#"{"signature_algorithm": "NONE"}"#).is_err());
//! }
//! ```

mod algorithm;
mod config;
mod error;

pub use self::algorithm::SignatureAlgorithm;
pub use self::config::SigningConfig;
pub use self::error::Error;
