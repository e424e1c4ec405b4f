//! # Error Types
//!
//! This module defines all error types for the chord parser and fingering search.
//!
//! ## Error Types
//! - `KeyNotRecognized` - the chord text does not start with a known key name
//! - `InvalidTuning` - a tuning list could not be read or is empty
//! - `ConfigError` - invalid YAML configuration
//! - `Io` - a configuration file could not be read
//! - `Serialization` - JSON output failed
//!
//! Only a missing leading key is fatal to parsing. Unknown text after the key
//! simply ends the parse, see [`crate::parser`].
//!
//! ## Usage
//! ```rust
//! use fretchord::{parse, ChordError, Notation};
//!
//! match parse("x7", Notation::Standard) {
//!     Ok((_, display)) => println!("Parsed {}", display),
//!     Err(ChordError::KeyNotRecognized { input, position }) => {
//!         eprintln!("No key at {} in {:?}", position, input);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordError {
    /// No key name matches the text at `position`.
    ///
    /// # Example
    /// ```
    /// # use fretchord::ChordError;
    /// let err = ChordError::KeyNotRecognized {
    ///     input: "?m".to_string(),
    ///     position: 0,
    /// };
    /// assert_eq!(err.to_string(), "Key not recognized at position 0 in \"?m\"");
    /// ```
    #[error("Key not recognized at position {position} in {input:?}")]
    KeyNotRecognized { input: String, position: usize },

    /// Tuning text that is not a preset name or a list of integers.
    ///
    /// # Example
    /// ```
    /// # use fretchord::ChordError;
    /// let err = ChordError::InvalidTuning("tuning needs at least one string".to_string());
    /// assert_eq!(err.to_string(), "Invalid tuning: tuning needs at least one string");
    /// ```
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),

    /// Invalid configuration file contents.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
