use diag_core::{BitString, Result};
use diag_seq::BitStringSequence;
use serde::{Deserialize, Serialize};

use crate::frequency::majority_bits;
use crate::invert::invert;
use crate::reduce::{reduce_with_trace, BitPreference, FilterRound};

/// Decodes a bit-string as an unsigned base-2 integer.
pub fn parse_binary(bits: &BitString) -> u32 {
    bits.to_u32()
}

/// Gamma and epsilon rates and their product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerConsumption {
    /// Majority bit-string.
    pub gamma_bits: BitString,
    /// Inverted majority bit-string.
    pub epsilon_bits: BitString,
    /// `gamma_bits` decoded.
    pub gamma_rate: u32,
    /// `epsilon_bits` decoded.
    pub epsilon_rate: u32,
    /// `gamma_rate * epsilon_rate`.
    pub value: u64,
}

/// Computes power consumption from the majority bits of the sequence.
pub fn power_consumption(sequence: &BitStringSequence) -> Result<PowerConsumption> {
    let gamma_bits = majority_bits(sequence)?;
    let epsilon_bits = invert(&gamma_bits);
    let gamma_rate = parse_binary(&gamma_bits);
    let epsilon_rate = parse_binary(&epsilon_bits);
    Ok(PowerConsumption {
        gamma_bits,
        epsilon_bits,
        gamma_rate,
        epsilon_rate,
        value: u64::from(gamma_rate) * u64::from(epsilon_rate),
    })
}

/// A rating produced by the convergence loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Surviving bit-string.
    pub bits: BitString,
    /// `bits` decoded.
    pub value: u32,
    /// Filtering rounds that led to the survivor.
    pub rounds: Vec<FilterRound>,
}

fn rating(sequence: &BitStringSequence, preference: BitPreference) -> Result<Rating> {
    let trace = reduce_with_trace(sequence.duplicate(), preference)?;
    Ok(Rating {
        value: parse_binary(&trace.survivor),
        bits: trace.survivor,
        rounds: trace.rounds,
    })
}

/// Oxygen generator and CO2 scrubber ratings and their product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeSupport {
    /// Rating from majority filtering.
    pub oxygen: Rating,
    /// Rating from minority filtering.
    pub co2: Rating,
    /// `oxygen.value * co2.value`.
    pub value: u64,
}

/// Computes the life support rating; `sequence` itself is left untouched.
pub fn life_support(sequence: &BitStringSequence) -> Result<LifeSupport> {
    let oxygen = rating(sequence, BitPreference::MostCommon)?;
    let co2 = rating(sequence, BitPreference::LeastCommon)?;
    let value = u64::from(oxygen.value) * u64::from(co2.value);
    Ok(LifeSupport { oxygen, co2, value })
}
