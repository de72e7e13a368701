//! # GoSchool Auth
//!
//! Signing keys for the backend's session tokens.
//!
//! The backend signs and verifies its JWTs with ES256, reading a P-256 key
//! pair from two PEM files. This crate produces that pair:
//!
//! - [`keys`]: key generation and the on-disk replace-and-write cycle
//! - [`claims`]: the probe token used to check a freshly written pair
//!
//! # Example
//!
//! ```ignore
//! use goschool_auth::keys::generate_key_files;
//!
//! let pair = generate_key_files("ecc_private_key.pem", "ecc_public_key.pem").await?;
//! println!("{}", pair.public_pem);
//! ```

pub mod claims;
pub mod keys;

pub use claims::{ProbeClaims, sign_probe, verify_probe};
pub use keys::{KeyError, KeyPairPem, generate_key_files, generate_key_pair};
