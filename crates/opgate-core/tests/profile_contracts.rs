//! Backend profile contract tests.
//!
//! Run with and without `--features constrained-backends` to cover both
//! build profiles.

use opgate_core::backend::{CONSTRAINED_BACKENDS, CONSTRAINED_TABLE_VERSION};
use opgate_core::{is_backend_admitted, BackendProfile, DispatchKey};

#[test]
fn constrained_table_is_small_and_versioned() {
    assert_eq!(CONSTRAINED_TABLE_VERSION, 1);
    assert_eq!(CONSTRAINED_BACKENDS.len(), 5);
    assert!(CONSTRAINED_BACKENDS.contains(&DispatchKey::CPU));
    assert!(CONSTRAINED_BACKENDS.contains(&DispatchKey::Vulkan));
    assert!(CONSTRAINED_BACKENDS.contains(&DispatchKey::QuantizedCPU));
    assert!(CONSTRAINED_BACKENDS.contains(&DispatchKey::BackendSelect));
    assert!(CONSTRAINED_BACKENDS.contains(&DispatchKey::CatchAll));
}

#[test]
fn cpu_admitted_everywhere() {
    assert!(BackendProfile::Unrestricted.admits(DispatchKey::CPU));
    assert!(BackendProfile::Constrained.admits(DispatchKey::CPU));
    assert!(is_backend_admitted(DispatchKey::CPU));
}

#[test]
fn cuda_only_unrestricted() {
    assert!(BackendProfile::Unrestricted.admits(DispatchKey::CUDA));
    assert!(!BackendProfile::Constrained.admits(DispatchKey::CUDA));
}

#[test]
#[cfg(feature = "constrained-backends")]
fn constrained_build_drops_accelerators() {
    assert!(!is_backend_admitted(DispatchKey::CUDA));
    assert!(!is_backend_admitted(DispatchKey::Autograd));
    assert!(is_backend_admitted(DispatchKey::Vulkan));
}

#[test]
#[cfg(not(feature = "constrained-backends"))]
fn unrestricted_build_admits_all_keys() {
    for key in DispatchKey::ALL {
        assert!(is_backend_admitted(key), "{key}");
    }
}

#[test]
fn profile_names() {
    assert_eq!(BackendProfile::Unrestricted.as_str(), "unrestricted");
    assert_eq!(BackendProfile::Constrained.as_str(), "constrained");
    assert_eq!(BackendProfile::default(), BackendProfile::Unrestricted);
}

const _: () = assert!(BackendProfile::Constrained.admits(DispatchKey::QuantizedCPU));
const _: () = assert!(!BackendProfile::Constrained.admits(DispatchKey::XLA));
