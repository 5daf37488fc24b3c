// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serialize};

use crate::algorithm::SignatureAlgorithm;
use crate::error::Error;

/// Token signing settings of the gateway's JWT generator
///
/// The algorithm has no default. Issuing unsigned tokens requires both selecting
/// [`SignatureAlgorithm::None`] and setting `allow_unsigned`, so that a typo or a missing value can
/// never silently downgrade token integrity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Algorithm used to sign generated tokens, given as a configuration name (`SHA256withRSA`,
    /// `NONE`) or a JWS code (`RS256`, `none`)
    #[serde(deserialize_with = "deserialize_config_name")]
    pub signature_algorithm: SignatureAlgorithm,
    /// Explicit opt-in for issuing unsigned tokens
    #[serde(default)]
    pub allow_unsigned: bool,
}

impl SigningConfig {
    pub fn new(signature_algorithm: SignatureAlgorithm) -> SigningConfig {
        SigningConfig {
            signature_algorithm,
            allow_unsigned: false,
        }
    }

    /// Parse a JSON configuration document and validate it
    ///
    /// An algorithm name outside the supported set is reported as
    /// [`Error::UnrecognizedAlgorithm`]; any other malformed document is an [`Error::ParseError`].
    pub fn from_json(data: &[u8]) -> Result<Self, Error> {
        let raw: RawSigningConfig =
            serde_json::from_slice(data).map_err(|e| Error::ParseError(e.to_string()))?;

        let config = SigningConfig {
            signature_algorithm: SignatureAlgorithm::from_config_name(&raw.signature_algorithm)?,
            allow_unsigned: raw.allow_unsigned,
        };

        config.validate()?;

        Ok(config)
    }

    /// Accept the configuration for issuing tokens
    ///
    /// Accepting an unsigned configuration is logged as a warning. Call this once when the
    /// configuration is loaded; [`SigningConfig::algorithm`] re-checks without logging.
    pub fn validate(&self) -> Result<(), Error> {
        self.check()?;

        if !self.signature_algorithm.is_signed() {
            tracing::warn!(
                alg = %self.signature_algorithm,
                "unsigned tokens enabled; generated JWTs will carry no signature"
            );
        }

        Ok(())
    }

    /// The algorithm to sign the next token with
    pub fn algorithm(&self) -> Result<SignatureAlgorithm, Error> {
        self.check()?;

        tracing::debug!(alg = %self.signature_algorithm, "selected token signature algorithm");

        Ok(self.signature_algorithm)
    }

    fn check(&self) -> Result<(), Error> {
        if !self.signature_algorithm.is_signed() && !self.allow_unsigned {
            return Err(Error::ValidationError(format!(
                "algorithm \"{}\" issues unsigned tokens but allow_unsigned is not set",
                self.signature_algorithm
            )));
        }

        Ok(())
    }
}

#[derive(Deserialize)]
struct RawSigningConfig {
    signature_algorithm: String,
    #[serde(default)]
    allow_unsigned: bool,
}

fn deserialize_config_name<'de, D>(deserializer: D) -> Result<SignatureAlgorithm, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    SignatureAlgorithm::from_config_name(&name).map_err(serde::de::Error::custom)
}
