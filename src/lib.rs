//! `dosekit` is a small toolkit for reconstructing and slicing voxelised dose
//! simulation outputs
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use dosekit_utils as utils;

#[cfg(feature = "phantom")]
#[cfg_attr(docsrs, doc(cfg(feature = "phantom")))]
#[doc(inline)]
pub use dosekit_phantom as phantom;

#[cfg(feature = "dose")]
#[cfg_attr(docsrs, doc(cfg(feature = "dose")))]
#[doc(inline)]
pub use dosekit_dose as dose;
