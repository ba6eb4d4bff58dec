//! Batch/parallel evaluation layer over [`pandora_core`] for planet + moon
//! transit light curves.
//!
//! This crate owns every parallelism knob and every log statement; the
//! underlying engine stays synchronous, allocation-light, and silent.

pub mod batch;

pub use batch::{batch_light_curve, BatchRowError};
pub use pandora_core::{
    coordinates, light_curve, Coordinates, Diagnostics, LightCurve, ModelOutput, PandoraError,
    PandoraResult, SystemParams, SystemParamsBuilder,
};
