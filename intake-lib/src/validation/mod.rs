//! Building blocks for field validation.
//!
//! Rules are written with two small builders:
//!
//! - [`RuleChain`] stops at the first failing rule and reports its message.
//! - [`Needs`] evaluates every rule and reports all failures together as
//!   `"Need: a, b, c"`.
//!
//! # Example
//!
//! ```
//! use intake_lib::validation::RuleChain;
//!
//! let verdict = RuleChain::new("Ada")
//!     .required("First name is required")
//!     .max_length(30, "Max 30 characters")
//!     .verdict();
//!
//! assert!(verdict.is_valid());
//! ```

mod chain;
mod format;
mod verdict;

pub use chain::{Needs, RuleChain};
pub use format::{digits_only, format_patient_id, format_phone, format_zip, group_digits};
pub use verdict::{CHECKMARK, Verdict, Verdicts};
