//! # spring_core - Spring Rate Calculation Engine
//!
//! `spring_core` computes the linear rate of helical springs from their
//! geometry and wire material, and carries the material comparison data and
//! specification sheet that go with it. All inputs and outputs are
//! JSON-serializable so the same types serve a form, a CLI or an API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Quiet when incomplete**: Inputs that cannot produce a rate yield `None`, not an error
//! - **JSON-First**: All types implement Serialize
//! - **Rich Errors**: Structured error types for the cases that really fail
//!
//! ## Quick Start
//!
//! ```rust
//! use spring_core::calculations::{calculate_request, SpringRateRequest};
//!
//! let request = SpringRateRequest::from_text("2.0", "20.0", "10", "music_wire");
//! let result = calculate_request(&request).unwrap();
//! println!("k = {:.2} N/mm", result.rate_newtons_per_mm);
//!
//! // Wire as thick as the coil is not a spring
//! let request = SpringRateRequest::from_text("5", "5", "3", "music_wire");
//! assert!(calculate_request(&request).is_none());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Spring rate calculation
//! - [`calculator`] - Form state wrapper with an explicit calculate trigger
//! - [`materials`] - Wire materials, shear modulus and reference data
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`pdf`] - Material specification sheet rendering

pub mod calculations;
pub mod calculator;
pub mod errors;
pub mod materials;
pub mod pdf;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_request, try_calculate, SpringRateInput, SpringRateRequest, SpringRateResult};
pub use calculator::SpringRateCalculator;
pub use errors::{CalcError, CalcResult};
pub use materials::SpringMaterial;
