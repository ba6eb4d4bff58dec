//! Stellar occultation flux models: the exact Mandel-Agol solution and the
//! cheaper small-body approximation, both built on Carlson elliptic
//! integrals.

pub mod elliptic;
pub mod mandel_agol;
pub mod small_body;

pub use mandel_agol::occult;
pub use small_body::occult_small;
