// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Signature algorithm selection errors
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// a string did not name any known signature algorithm
    #[error("unrecognized algorithm: {0}")]
    UnrecognizedAlgorithm(String),
    /// a signing library algorithm has no counterpart in the supported set
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// an error occured while parsing a configuration document
    #[error("parse error: {0}")]
    ParseError(String),
    /// the configuration is well-formed but not acceptable
    #[error("validation error: {0}")]
    ValidationError(String),
}
