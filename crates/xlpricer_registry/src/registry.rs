//! The function registry and its built-in table.

use std::collections::BTreeMap;

use tracing::debug;
use xlpricer_models::analytical::{call_price, put_price, AnalyticalError};

use crate::error::RegistryError;

/// A host-callable scalar function: a slice of numeric arguments in, one
/// premium out.
///
/// Implementations may assume the argument slice length matches the
/// registered arity; [`FunctionRegistry::invoke`] checks it before dispatch.
pub type HostFunction = fn(&[f64]) -> Result<f64, AnalyticalError>;

/// A registered function: stable external name, arity, and the function
/// itself.
#[derive(Debug, Clone, Copy)]
pub struct FunctionEntry {
    name: &'static str,
    arity: usize,
    func: HostFunction,
}

impl FunctionEntry {
    /// Returns the stable external name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of scalar arguments the function takes.
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// Registry mapping stable external names to pricing functions.
///
/// Built once at startup; lookups and dispatch are read-only afterwards, so
/// a shared reference can be used from any number of threads.
///
/// # Examples
/// ```
/// use xlpricer_registry::FunctionRegistry;
///
/// let registry = FunctionRegistry::builtin();
/// assert!(registry.contains("xlpricer.BSPut"));
///
/// let premium = registry
///     .invoke("xlpricer.BSPut", &[100.0, 100.0, 1.0, 0.05, 0.20])
///     .unwrap();
/// assert!((premium - 5.573526).abs() < 1e-5);
/// ```
#[derive(Debug, Default, Clone)]
pub struct FunctionRegistry {
    entries: BTreeMap<&'static str, FunctionEntry>,
}

fn bs_call(args: &[f64]) -> Result<f64, AnalyticalError> {
    call_price(args[0], args[1], args[2], args[3], args[4])
}

fn bs_put(args: &[f64]) -> Result<f64, AnalyticalError> {
    put_price(args[0], args[1], args[2], args[3], args[4])
}

/// The built-in function table: name, arity, function. Names are distinct
/// by construction.
const BUILTINS: [(&str, usize, HostFunction); 2] = [
    ("xlpricer.BSCall", 5, bs_call),
    ("xlpricer.BSPut", 5, bs_put),
];

impl FunctionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the registry with the built-in pricing functions.
    ///
    /// Registered names:
    /// - `xlpricer.BSCall` — Black-Scholes call price `(S, K, T, r, σ)`
    /// - `xlpricer.BSPut` — Black-Scholes put price `(S, K, T, r, σ)`
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        for (name, arity, func) in BUILTINS {
            debug!(name, arity, "registered host function");
            registry
                .entries
                .insert(name, FunctionEntry { name, arity, func });
        }

        registry
    }

    /// Registers a function under a stable external name.
    ///
    /// # Errors
    /// - `RegistryError::DuplicateName` if the name is already registered
    pub fn register(
        &mut self,
        name: &'static str,
        arity: usize,
        func: HostFunction,
    ) -> Result<(), RegistryError> {
        if self.entries.contains_key(name) {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }

        debug!(name, arity, "registered host function");
        self.entries.insert(name, FunctionEntry { name, arity, func });
        Ok(())
    }

    /// Returns true if a function is registered under `name`.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the registered entry for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&FunctionEntry> {
        self.entries.get(name)
    }

    /// Iterates over the registered entries in name order.
    pub fn entries(&self) -> impl Iterator<Item = &FunctionEntry> {
        self.entries.values()
    }

    /// Returns the number of registered functions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no functions are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes a registered function by name.
    ///
    /// # Errors
    /// - `RegistryError::UnknownFunction` if `name` is not registered
    /// - `RegistryError::ArityMismatch` if `args.len()` differs from the
    ///   registered arity
    /// - `RegistryError::Pricing` if the function rejects its inputs
    pub fn invoke(&self, name: &str, args: &[f64]) -> Result<f64, RegistryError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownFunction {
                name: name.to_string(),
            })?;

        if args.len() != entry.arity {
            return Err(RegistryError::ArityMismatch {
                name: name.to_string(),
                expected: entry.arity,
                actual: args.len(),
            });
        }

        let result = (entry.func)(args)?;
        Ok(result)
    }
}
