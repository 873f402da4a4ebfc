//! Lyra Validator
//!
//! Checks that relationship declarations between object types are mutually
//! consistent.
//!
//! The validator provides:
//! - Single-relationship validation (referenced type, key pairing, counterpart lookup)
//! - Attribute assertions for relationship keys
//! - Batch validation of a type or a whole model into a [`ValidationReport`]
//!
//! # Examples
//!
//! ```no_run
//! use lyra_validator::{RelationshipValidator, ValidatorConfig};
//!
//! let validator = RelationshipValidator::new(ValidatorConfig::default());
//!
//! // Validate every relationship in a loaded model
//! // let report = validator.validate_model(&registry);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod validator;

pub use config::{ConfigError, ValidatorConfig};
pub use error::{IssueCode, RelationshipError};
pub use report::{Issue, ValidationReport};
pub use validator::{assert_attribute, validate_relationship, RelationshipValidator, Validate};
