//! # GoSchool Core
//!
//! Foundational types shared by every provisioning crate:
//!
//! - [`errors`]: the [`ProvisionError`] type carried through every fallible operation
//! - [`outcome`]: the [`Outcome`] each provisioning step reports back to the operator
//!
//! # Example
//!
//! ```ignore
//! use goschool_core::{Outcome, ProvisionError};
//!
//! fn step() -> Result<Outcome, ProvisionError> {
//!     Ok(Outcome::executed("inserted 12 courses"))
//! }
//! ```

pub mod errors;
pub mod outcome;

pub use errors::{ErrorKind, ProvisionError};
pub use outcome::Outcome;
