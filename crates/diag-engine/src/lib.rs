#![deny(missing_docs)]
#![doc = "Majority-bit extraction, inversion, rule filtering and the convergence loop for the binary diagnostic."]

//! Every algorithm here is a pure function of its input sequence, except
//! [`filter_by_rule`] which mutates the sequence it is handed and
//! [`reduce_to_one`] which consumes its working copy.

mod filter;
mod frequency;
mod invert;
mod rating;
mod reduce;
mod report;
/// Canonical JSON helpers for reports.
pub mod serde;

pub use filter::filter_by_rule;
pub use frequency::{bit_frequencies, majority_bits, FrequencyVector};
pub use invert::{invert, invert_raw};
pub use rating::{
    life_support, parse_binary, power_consumption, LifeSupport, PowerConsumption, Rating,
};
pub use reduce::{reduce_to_one, reduce_with_trace, BitPreference, FilterRound, ReductionTrace};
pub use report::{diagnose, DiagnosticEngine, DiagnosticReport, REPORT_SCHEMA};
