// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use jsonwebtoken as jwt;
use serde::{
    de::{self, Deserialize, Visitor},
    ser::{Serialize, Serializer},
};

use crate::error::Error;

/// Signing algorithms that may be used for gateway-issued JWTs
///
/// Each variant is bound to the code that is placed in the `alg` header parameter of the token,
/// as registered in the IANA "JSON Web Signature and Encryption Algorithms" registry. Verifiers
/// string-match on these codes, so they must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// RSASSA-PKCS1-v1_5 using SHA-256 (`RS256`)
    Sha256WithRsa,
    /// Unsecured JWS (`none`)
    ///
    /// Tokens carrying this algorithm have no integrity protection. It must only ever be the
    /// result of an explicit configuration decision, see [`crate::SigningConfig`].
    None,
}

impl SignatureAlgorithm {
    /// Every supported algorithm
    pub const ALL: [SignatureAlgorithm; 2] =
        [SignatureAlgorithm::Sha256WithRsa, SignatureAlgorithm::None];

    /// The JWS code for the `alg` header parameter
    pub const fn code(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha256WithRsa => "RS256",
            SignatureAlgorithm::None => "none",
        }
    }

    /// The name used for this algorithm in gateway configuration
    pub const fn config_name(self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha256WithRsa => "SHA256withRSA",
            SignatureAlgorithm::None => "NONE",
        }
    }

    /// Whether tokens using this algorithm carry a signature
    pub const fn is_signed(self) -> bool {
        match self {
            SignatureAlgorithm::Sha256WithRsa => true,
            SignatureAlgorithm::None => false,
        }
    }

    /// The `jsonwebtoken` algorithm a signer should use, or `None` if the token is left unsigned.
    pub fn jwt_algorithm(self) -> Option<jwt::Algorithm> {
        match self {
            SignatureAlgorithm::Sha256WithRsa => Some(jwt::Algorithm::RS256),
            SignatureAlgorithm::None => None,
        }
    }

    /// Look up an algorithm by its exact JWS code.
    ///
    /// Matching is case-sensitive and does not trim whitespace: `"rs256"` is not `RS256`.
    pub fn from_code(code: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.code() == code)
            .ok_or_else(|| Error::UnrecognizedAlgorithm(code.to_string()))
    }

    /// Look up an algorithm by a value read from configuration.
    ///
    /// Configuration names are matched ignoring case and surrounding whitespace. The exact JWS
    /// code is accepted as well.
    pub fn from_config_name(name: &str) -> Result<Self, Error> {
        let trimmed = name.trim();

        Self::ALL
            .into_iter()
            .find(|alg| alg.config_name().eq_ignore_ascii_case(trimmed))
            .map_or_else(|| Self::from_code(trimmed), Ok)
            .map_err(|_| Error::UnrecognizedAlgorithm(name.to_string()))
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<&str> for SignatureAlgorithm {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

impl TryFrom<jwt::Algorithm> for SignatureAlgorithm {
    type Error = Error;

    fn try_from(value: jwt::Algorithm) -> Result<Self, Self::Error> {
        match value {
            jwt::Algorithm::RS256 => Ok(SignatureAlgorithm::Sha256WithRsa),
            a => Err(Error::UnsupportedAlgorithm(format!("{a:?}"))),
        }
    }
}

impl From<SignatureAlgorithm> for &'static str {
    fn from(val: SignatureAlgorithm) -> &'static str {
        val.code()
    }
}

impl From<SignatureAlgorithm> for String {
    fn from(val: SignatureAlgorithm) -> String {
        val.code().to_string()
    }
}

impl Serialize for SignatureAlgorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for SignatureAlgorithm {
    fn deserialize<D>(deserializer: D) -> Result<SignatureAlgorithm, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(SignatureAlgorithmVisitor)
    }
}

struct SignatureAlgorithmVisitor;

impl Visitor<'_> for SignatureAlgorithmVisitor {
    type Value = SignatureAlgorithm;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JWS algorithm code")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        SignatureAlgorithm::from_code(value).map_err(E::custom)
    }
}
