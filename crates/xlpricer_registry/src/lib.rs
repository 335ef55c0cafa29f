//! # xlpricer_registry: Host Function Registry
//!
//! An explicit registry mapping stable external function names to scalar
//! pricing functions. The mapping is static and known at compile time: the
//! built-in table is constructed once at process startup and dispatch is a
//! map lookup followed by an arity check — no reflection, no dynamic code
//! registration.
//!
//! ## Exposed functions
//!
//! | External name     | Inputs                | Output   |
//! |-------------------|-----------------------|----------|
//! | `xlpricer.BSCall` | S, K, T, r, σ (reals) | real ≥ 0 |
//! | `xlpricer.BSPut`  | S, K, T, r, σ (reals) | real ≥ 0 |
//!
//! ## Usage Examples
//!
//! ```rust
//! use xlpricer_registry::FunctionRegistry;
//!
//! let registry = FunctionRegistry::builtin();
//! let price = registry
//!     .invoke("xlpricer.BSCall", &[100.0, 100.0, 1.0, 0.05, 0.20])
//!     .unwrap();
//! assert!((price - 10.450584).abs() < 1e-5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::{FunctionEntry, FunctionRegistry, HostFunction};
