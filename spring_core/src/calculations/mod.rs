//! # Spring Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Typed input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `try_calculate(input) -> CalcResult<*Result>` - Pure calculation, keeps the failure reason
//! - `calculate(input) -> Option<*Result>` - Pure calculation, `None` when not computable
//!
//! ## Available Calculations
//!
//! - [`spring_rate`] - Linear rate of a helical compression/extension spring

pub mod spring_rate;

// Re-export commonly used types
pub use spring_rate::{
    calculate, calculate_request, try_calculate, NumericField, SpringRateInput, SpringRateRequest,
    SpringRateResult,
};
