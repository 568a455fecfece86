//! Dispatch keys and backend profiles.
//!
//! The constrained profile admits a fixed backend table. Admission is written
//! as an exhaustive `match` so a new [`DispatchKey`] variant does not compile
//! until it is placed on one side of the table.
//!
//! ```bash
//! # constrained (mobile) targets
//! cargo build --features opgate-core/constrained-backends
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpgateError;

/// Execution backend or dispatch-infrastructure tag.
///
/// Manifests carry keys as text and parse them with [`FromStr`], so an
/// unknown key stays a recoverable value instead of a load error.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DispatchKey {
    // backends
    CPU,
    CUDA,
    HIP,
    FPGA,
    MSNPU,
    XLA,
    Vulkan,
    Metal,
    MkldnnCPU,
    OpenGL,
    OpenCL,
    IDEEP,
    QuantizedCPU,
    QuantizedCUDA,
    ComplexCPU,
    ComplexCUDA,
    SparseCPU,
    SparseCUDA,
    SparseHIP,
    PrivateUse1,
    PrivateUse2,
    PrivateUse3,
    Meta,
    // infrastructure
    BackendSelect,
    Named,
    Autograd,
    Tracer,
    Autocast,
    Batched,
    VmapMode,
    TESTING_ONLY_GenericWrapper,
    TESTING_ONLY_GenericMode,
    CatchAll,
}

impl DispatchKey {
    /// Every key, in declaration order.
    pub const ALL: [DispatchKey; 33] = [
        DispatchKey::CPU,
        DispatchKey::CUDA,
        DispatchKey::HIP,
        DispatchKey::FPGA,
        DispatchKey::MSNPU,
        DispatchKey::XLA,
        DispatchKey::Vulkan,
        DispatchKey::Metal,
        DispatchKey::MkldnnCPU,
        DispatchKey::OpenGL,
        DispatchKey::OpenCL,
        DispatchKey::IDEEP,
        DispatchKey::QuantizedCPU,
        DispatchKey::QuantizedCUDA,
        DispatchKey::ComplexCPU,
        DispatchKey::ComplexCUDA,
        DispatchKey::SparseCPU,
        DispatchKey::SparseCUDA,
        DispatchKey::SparseHIP,
        DispatchKey::PrivateUse1,
        DispatchKey::PrivateUse2,
        DispatchKey::PrivateUse3,
        DispatchKey::Meta,
        DispatchKey::BackendSelect,
        DispatchKey::Named,
        DispatchKey::Autograd,
        DispatchKey::Tracer,
        DispatchKey::Autocast,
        DispatchKey::Batched,
        DispatchKey::VmapMode,
        DispatchKey::TESTING_ONLY_GenericWrapper,
        DispatchKey::TESTING_ONLY_GenericMode,
        DispatchKey::CatchAll,
    ];

    /// Stable textual name, identical to the variant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            DispatchKey::CPU => "CPU",
            DispatchKey::CUDA => "CUDA",
            DispatchKey::HIP => "HIP",
            DispatchKey::FPGA => "FPGA",
            DispatchKey::MSNPU => "MSNPU",
            DispatchKey::XLA => "XLA",
            DispatchKey::Vulkan => "Vulkan",
            DispatchKey::Metal => "Metal",
            DispatchKey::MkldnnCPU => "MkldnnCPU",
            DispatchKey::OpenGL => "OpenGL",
            DispatchKey::OpenCL => "OpenCL",
            DispatchKey::IDEEP => "IDEEP",
            DispatchKey::QuantizedCPU => "QuantizedCPU",
            DispatchKey::QuantizedCUDA => "QuantizedCUDA",
            DispatchKey::ComplexCPU => "ComplexCPU",
            DispatchKey::ComplexCUDA => "ComplexCUDA",
            DispatchKey::SparseCPU => "SparseCPU",
            DispatchKey::SparseCUDA => "SparseCUDA",
            DispatchKey::SparseHIP => "SparseHIP",
            DispatchKey::PrivateUse1 => "PrivateUse1",
            DispatchKey::PrivateUse2 => "PrivateUse2",
            DispatchKey::PrivateUse3 => "PrivateUse3",
            DispatchKey::Meta => "Meta",
            DispatchKey::BackendSelect => "BackendSelect",
            DispatchKey::Named => "Named",
            DispatchKey::Autograd => "Autograd",
            DispatchKey::Tracer => "Tracer",
            DispatchKey::Autocast => "Autocast",
            DispatchKey::Batched => "Batched",
            DispatchKey::VmapMode => "VmapMode",
            DispatchKey::TESTING_ONLY_GenericWrapper => "TESTING_ONLY_GenericWrapper",
            DispatchKey::TESTING_ONLY_GenericMode => "TESTING_ONLY_GenericMode",
            DispatchKey::CatchAll => "CatchAll",
        }
    }
}

impl fmt::Display for DispatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DispatchKey {
    type Err = OpgateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DispatchKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| OpgateError::UnknownDispatchKey(s.to_string()))
    }
}

/// Bumped whenever [`CONSTRAINED_BACKENDS`] changes.
pub const CONSTRAINED_TABLE_VERSION: u32 = 1;

/// Keys admitted under [`BackendProfile::Constrained`].
pub const CONSTRAINED_BACKENDS: [DispatchKey; 5] = [
    DispatchKey::CPU,
    DispatchKey::Vulkan,
    DispatchKey::QuantizedCPU,
    DispatchKey::BackendSelect,
    DispatchKey::CatchAll,
];

/// Which backends a build may register kernels for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendProfile {
    /// Every dispatch key is admitted.
    #[default]
    Unrestricted,
    /// Only [`CONSTRAINED_BACKENDS`] are admitted.
    Constrained,
}

impl BackendProfile {
    /// Profile selected by cargo features for this build.
    #[cfg(feature = "constrained-backends")]
    pub const ACTIVE: BackendProfile = BackendProfile::Constrained;

    /// Profile selected by cargo features for this build.
    #[cfg(not(feature = "constrained-backends"))]
    pub const ACTIVE: BackendProfile = BackendProfile::Unrestricted;

    pub const fn as_str(self) -> &'static str {
        match self {
            BackendProfile::Unrestricted => "unrestricted",
            BackendProfile::Constrained => "constrained",
        }
    }

    pub const fn admits(self, key: DispatchKey) -> bool {
        match self {
            BackendProfile::Unrestricted => true,
            BackendProfile::Constrained => constrained_admits(key),
        }
    }
}

const fn constrained_admits(key: DispatchKey) -> bool {
    match key {
        DispatchKey::CPU
        | DispatchKey::Vulkan
        | DispatchKey::QuantizedCPU
        | DispatchKey::BackendSelect
        | DispatchKey::CatchAll => true,

        DispatchKey::CUDA
        | DispatchKey::HIP
        | DispatchKey::FPGA
        | DispatchKey::MSNPU
        | DispatchKey::XLA
        | DispatchKey::Metal
        | DispatchKey::MkldnnCPU
        | DispatchKey::OpenGL
        | DispatchKey::OpenCL
        | DispatchKey::IDEEP
        | DispatchKey::QuantizedCUDA
        | DispatchKey::ComplexCPU
        | DispatchKey::ComplexCUDA
        | DispatchKey::SparseCPU
        | DispatchKey::SparseCUDA
        | DispatchKey::SparseHIP
        | DispatchKey::PrivateUse1
        | DispatchKey::PrivateUse2
        | DispatchKey::PrivateUse3
        | DispatchKey::Meta
        | DispatchKey::Named
        | DispatchKey::Autograd
        | DispatchKey::Tracer
        | DispatchKey::Autocast
        | DispatchKey::Batched
        | DispatchKey::VmapMode
        | DispatchKey::TESTING_ONLY_GenericWrapper
        | DispatchKey::TESTING_ONLY_GenericMode => false,
    }
}
