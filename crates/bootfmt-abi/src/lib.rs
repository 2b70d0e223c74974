#![cfg_attr(feature = "c-variadic", feature(c_variadic))]
// Entry points accept raw pointers from C callers and validate at runtime;
// per-function safety docs would repeat the same contract every time.
#![allow(clippy::missing_safety_doc)]
//! # bootfmt-abi
//!
//! `extern "C"` boundary for the bootfmt formatter.
//!
//! Produces a `cdylib` exposing the formatter to C and firmware callers:
//!
//! ```text
//! C caller -> ABI entry (this crate) -> bootfmt-core engine -> return
//! ```
//!
//! The always-available surface takes an explicit argument array
//! (`bootfmt_vsprintf` / `bootfmt_vsnprintf`) and builds on stable Rust.
//! With the `c-variadic` feature (nightly toolchains) true variadic
//! `sprintf` and `snprintf` symbols are exported under their C names for
//! drop-in use.

pub mod sprintf_abi;

// Gated out of test builds: this module exports the real `sprintf` and
// `snprintf` symbol names, which would shadow host libc inside the test
// binary.
#[cfg(all(feature = "c-variadic", not(test)))]
pub mod variadic_abi;

pub use sprintf_abi::{
    BOOTFMT_ARG_NUMBER, BOOTFMT_ARG_STR, BOOTFMT_MAX_ARGS, BootfmtArg, bootfmt_vsnprintf,
    bootfmt_vsprintf,
};
