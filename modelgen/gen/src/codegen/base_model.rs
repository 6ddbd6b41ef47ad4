//! Shared runtime base generation.
//!
//! Generates the `base.rs` module every group carries: the `BaseModel` trait
//! implemented by each generated entity, the error types it reports, and the
//! constraint helpers called from generated `validate()` bodies.
//!
//! The generated module depends on `serde`, `serde_json`, `thiserror` and
//! `rust_decimal` in the consuming crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Generates the `ValidationError` and `ModelError` types.
pub fn generate_model_errors() -> TokenStream {
    quote! {
        /// A constraint violation found by [`BaseModel::validate`].
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        #[error("{field}: {message}")]
        pub struct ValidationError {
            /// Wire name of the offending field.
            pub field: &'static str,
            /// What was wrong with it.
            pub message: String,
        }

        /// Errors raised while converting models to and from JSON.
        #[derive(Debug, thiserror::Error)]
        pub enum ModelError {
            /// The input was not valid JSON for the model.
            #[error("JSON conversion failed: {0}")]
            Json(#[from] serde_json::Error),

            /// The input parsed but broke a field constraint.
            #[error("validation failed: {0}")]
            Validation(#[from] ValidationError),
        }
    }
}

/// Generates the `BaseModel` trait.
pub fn generate_base_model_trait() -> TokenStream {
    quote! {
        /// Behaviour shared by every generated model.
        ///
        /// Models are built with [`BaseModel::from_value`] or
        /// [`BaseModel::from_json`], both of which validate field constraints
        /// after deserializing. Fields that are not required default to `None`.
        pub trait BaseModel: Serialize + DeserializeOwned {
            /// Name of the schema the model was generated from.
            const SCHEMA_TITLE: &'static str;
            /// Stable schema identifier, if the schema had one.
            const SCHEMA_ID: Option<&'static str>;
            /// Storage table name.
            const TABLE_NAME: &'static str;

            /// Returns [`Self::SCHEMA_TITLE`].
            fn schema_title() -> &'static str {
                Self::SCHEMA_TITLE
            }

            /// Returns [`Self::SCHEMA_ID`].
            fn schema_id() -> Option<&'static str> {
                Self::SCHEMA_ID
            }

            /// Returns [`Self::TABLE_NAME`].
            fn table_name() -> &'static str {
                Self::TABLE_NAME
            }

            /// Checks the model's field constraints.
            fn validate(&self) -> Result<(), ValidationError>;

            /// Whether [`BaseModel::validate`] succeeds.
            fn is_valid(&self) -> bool {
                self.validate().is_ok()
            }

            /// The first constraint violation, if any.
            fn validation_error(&self) -> Option<ValidationError> {
                self.validate().err()
            }

            /// Deserializes and validates a model from a JSON value.
            fn from_value(value: serde_json::Value) -> Result<Self, ModelError> {
                let model: Self = serde_json::from_value(value)?;
                model.validate()?;
                Ok(model)
            }

            /// Deserializes and validates a model from JSON text.
            fn from_json(json: &str) -> Result<Self, ModelError> {
                let model: Self = serde_json::from_str(json)?;
                model.validate()?;
                Ok(model)
            }

            /// Serializes the model to a JSON value using wire names.
            fn to_value(&self) -> Result<serde_json::Value, ModelError> {
                Ok(serde_json::to_value(self)?)
            }

            /// Serializes the model to JSON text using wire names.
            fn to_json(&self) -> Result<String, ModelError> {
                Ok(serde_json::to_string(self)?)
            }
        }
    }
}

/// Generates the constraint helpers and the `StepValue` trait.
pub fn generate_constraint_helpers() -> TokenStream {
    quote! {
        /// Fails when `value` is longer than `max` characters.
        pub fn check_max_length(
            field: &'static str,
            value: &str,
            max: u64,
        ) -> Result<(), ValidationError> {
            let len = value.chars().count() as u64;
            if len > max {
                return Err(ValidationError {
                    field,
                    message: format!("length {len} exceeds maximum {max}"),
                });
            }
            Ok(())
        }

        /// Fails when `value` is not a multiple of `step`.
        pub fn check_multiple_of<T: StepValue + std::fmt::Display>(
            field: &'static str,
            value: &T,
            step: f64,
        ) -> Result<(), ValidationError> {
            if !value.fits_step(step) {
                return Err(ValidationError {
                    field,
                    message: format!("{value} is not a multiple of {step}"),
                });
            }
            Ok(())
        }

        /// Numeric values that can be checked against a `multipleOf` step.
        pub trait StepValue {
            /// Whether `self` is a whole multiple of `step`. A zero step always fits.
            fn fits_step(&self, step: f64) -> bool;
        }

        impl StepValue for f64 {
            fn fits_step(&self, step: f64) -> bool {
                if step == 0.0 {
                    return true;
                }
                let quotient = self / step;
                (quotient - quotient.round()).abs() <= 1e-9 * quotient.abs().max(1.0)
            }
        }

        impl StepValue for i64 {
            fn fits_step(&self, step: f64) -> bool {
                if step.fract() == 0.0 && step.abs() <= i64::MAX as f64 {
                    let step = step as i64;
                    return step == 0 || self.checked_rem(step).is_none_or(|rem| rem == 0);
                }
                (*self as f64).fits_step(step)
            }
        }

        impl StepValue for rust_decimal::Decimal {
            fn fits_step(&self, step: f64) -> bool {
                use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

                match rust_decimal::Decimal::from_f64(step) {
                    Some(step) if step.is_zero() => true,
                    Some(step) => (*self % step).is_zero(),
                    None => self.to_f64().is_none_or(|value| value.fits_step(step)),
                }
            }
        }
    }
}

/// Generates the complete `base.rs` module.
///
/// ## Examples
///
/// ```
/// use modelgen_gen::codegen::generate_base_module;
///
/// let code = generate_base_module().to_string();
/// assert!(code.contains("trait BaseModel"));
/// assert!(code.contains("fn check_max_length"));
/// ```
pub fn generate_base_module() -> TokenStream {
    let errors = generate_model_errors();
    let base_model = generate_base_model_trait();
    let helpers = generate_constraint_helpers();

    quote! {
        //! Shared base for the generated models of this group.
        //!
        //! This file is only written when missing, so local changes survive
        //! regeneration.

        use serde::Serialize;
        use serde::de::DeserializeOwned;

        #errors

        #base_model

        #helpers
    }
}
