//! End-to-end dispatch tests: the surface a spreadsheet host exercises.

use approx::assert_relative_eq;
use xlpricer_registry::{FunctionRegistry, RegistryError};

#[test]
fn test_host_prices_option_chain_by_name() {
    let registry = FunctionRegistry::builtin();

    // A host recalculating a strike ladder, one call per cell
    for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
        let call = registry
            .invoke("xlpricer.BSCall", &[100.0, strike, 1.0, 0.05, 0.20])
            .unwrap();
        let put = registry
            .invoke("xlpricer.BSPut", &[100.0, strike, 1.0, 0.05, 0.20])
            .unwrap();

        // Premiums satisfy put-call parity cell-to-cell
        let forward = 100.0 - strike * (-0.05_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-7);
    }
}

#[test]
fn test_host_receives_structured_errors() {
    let registry = FunctionRegistry::builtin();

    // Misspelled name
    let err = registry
        .invoke("xlpricer.BScall", &[100.0, 100.0, 1.0, 0.05, 0.20])
        .unwrap_err();
    assert!(matches!(err, RegistryError::UnknownFunction { .. }));

    // Missing trailing arguments
    let err = registry
        .invoke("xlpricer.BSCall", &[100.0, 100.0, 1.0])
        .unwrap_err();
    assert!(matches!(err, RegistryError::ArityMismatch { .. }));

    // Invalid market inputs surface the pricing error, not NaN
    let err = registry
        .invoke("xlpricer.BSCall", &[100.0, 100.0, 1.0, 0.05, -0.2])
        .unwrap_err();
    assert!(format!("{err}").contains("volatility"));

    // A non-positive strike is likewise an error, never Ok(NaN)
    let err = registry
        .invoke("xlpricer.BSCall", &[100.0, -100.0, 1.0, 0.05, 0.20])
        .unwrap_err();
    assert!(format!("{err}").contains("strike"));
}

#[test]
fn test_registry_shared_across_threads() {
    let registry = FunctionRegistry::builtin();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let price = registry
                    .invoke("xlpricer.BSCall", &[100.0, 100.0, 1.0, 0.05, 0.20])
                    .unwrap();
                assert_relative_eq!(price, 10.450584, epsilon = 1e-5);
            });
        }
    });
}
