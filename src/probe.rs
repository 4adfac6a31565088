//! One-time CPU capability probe.
//!
//! The processor's CPUID leaves are read once, on first query, behind a
//! `Lazy` barrier; every later query is a plain read of the cached set.
//! The result is informational: no vector operation consults it.

#[cfg(target_arch = "x86")]
use core::arch::x86::{__cpuid, __cpuid_count};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{__cpuid, __cpuid_count};
use core::fmt;
use core::str::FromStr;

use bitflags::bitflags;
use log::{debug, trace};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::ProbeError;

bitflags! {
    /// Set of detected instruction-set extensions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Features: u32 {
        const SSE4_1 = 1 << 0;
        const SSE4_2 = 1 << 1;
        const AVX = 1 << 2;
        const AVX2 = 1 << 3;
        const FMA = 1 << 4;
    }
}

/// A single queryable extension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    #[serde(rename = "sse4.1")]
    Sse41,
    #[serde(rename = "sse4.2")]
    Sse42,
    Avx,
    Avx2,
    Fma,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Sse41,
        Feature::Sse42,
        Feature::Avx,
        Feature::Avx2,
        Feature::Fma,
    ];

    pub fn flag(self) -> Features {
        match self {
            Feature::Sse41 => Features::SSE4_1,
            Feature::Sse42 => Features::SSE4_2,
            Feature::Avx => Features::AVX,
            Feature::Avx2 => Features::AVX2,
            Feature::Fma => Features::FMA,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Sse41 => "sse4.1",
            Feature::Sse42 => "sse4.2",
            Feature::Avx => "avx",
            Feature::Avx2 => "avx2",
            Feature::Fma => "fma",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sse4.1" | "sse4_1" | "sse41" => Ok(Feature::Sse41),
            "sse4.2" | "sse4_2" | "sse42" => Ok(Feature::Sse42),
            "avx" => Ok(Feature::Avx),
            "avx2" => Ok(Feature::Avx2),
            "fma" => Ok(Feature::Fma),
            _ => Err(ProbeError::UnknownFeature(s.to_owned())),
        }
    }
}

// CPUID bit positions.
const LEAF1_ECX_SSE4_1: u32 = 19;
const LEAF1_ECX_SSE4_2: u32 = 20;
const LEAF1_ECX_AVX: u32 = 28;
const LEAF1_ECX_FMA: u32 = 12;
const LEAF7_EBX_AVX2: u32 = 5;

/// Maps raw CPUID words to the feature set. Leaves above `max_leaf` are
/// ignored.
pub(crate) fn decode(max_leaf: u32, leaf1_ecx: u32, leaf7_ebx: u32) -> Features {
    let bit = |word: u32, n: u32| word & (1 << n) != 0;
    let mut features = Features::empty();
    if max_leaf >= 1 {
        features.set(Features::SSE4_1, bit(leaf1_ecx, LEAF1_ECX_SSE4_1));
        features.set(Features::SSE4_2, bit(leaf1_ecx, LEAF1_ECX_SSE4_2));
        features.set(Features::AVX, bit(leaf1_ecx, LEAF1_ECX_AVX));
        features.set(Features::FMA, bit(leaf1_ecx, LEAF1_ECX_FMA));
    }
    if max_leaf >= 7 {
        features.set(Features::AVX2, bit(leaf7_ebx, LEAF7_EBX_AVX2));
    }
    features
}

fn detect() -> Features {
    #[cfg(target_arch = "x86")]
    if !core::arch::x86::has_cpuid() {
        debug!("CPUID unavailable, reporting no extensions");
        return Features::empty();
    }

    #[allow(unused_unsafe)]
    let (max_leaf, leaf1_ecx, leaf7_ebx) = unsafe {
        let max_leaf = __cpuid(0).eax;
        let leaf1_ecx = if max_leaf >= 1 { __cpuid_count(1, 0).ecx } else { 0 };
        let leaf7_ebx = if max_leaf >= 7 { __cpuid_count(7, 0).ebx } else { 0 };
        (max_leaf, leaf1_ecx, leaf7_ebx)
    };
    trace!(
        "cpuid: max_leaf={} leaf1.ecx={:#010x} leaf7.ebx={:#010x}",
        max_leaf,
        leaf1_ecx,
        leaf7_ebx
    );
    decode(max_leaf, leaf1_ecx, leaf7_ebx)
}

static DETECTED: Lazy<Features> = Lazy::new(|| {
    let features = detect();
    debug!("Detected CPU features: {:?}", features);
    features
});

/// All detected extensions.
pub fn features() -> Features {
    *DETECTED
}

/// Whether the running processor reports `feature`.
pub fn has(feature: Feature) -> bool {
    features().contains(feature.flag())
}

/// `Ok(())` if the processor reports `feature`, for callers that want to
/// fail fast before running code that needs it.
pub fn require(feature: Feature) -> Result<(), ProbeError> {
    if has(feature) {
        Ok(())
    } else {
        Err(ProbeError::Missing(feature))
    }
}

pub fn sse4_1() -> bool {
    has(Feature::Sse41)
}

pub fn sse4_2() -> bool {
    has(Feature::Sse42)
}

pub fn avx() -> bool {
    has(Feature::Avx)
}

pub fn avx2() -> bool {
    has(Feature::Avx2)
}

pub fn fma() -> bool {
    has(Feature::Fma)
}
