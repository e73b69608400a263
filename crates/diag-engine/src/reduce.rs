use std::fmt;

use diag_core::{BitString, DiagError, ErrorInfo, Result};
use diag_seq::BitStringSequence;
use serde::{Deserialize, Serialize};

use crate::filter::filter_by_rule;
use crate::frequency::majority_bits;
use crate::invert::invert;

/// Which bit value survives each filtering round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BitPreference {
    /// Keep elements holding the majority bit (ties favour `'1'`).
    MostCommon,
    /// Keep elements holding the minority bit (ties favour `'0'`).
    LeastCommon,
}

impl fmt::Display for BitPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitPreference::MostCommon => f.write_str("most-common"),
            BitPreference::LeastCommon => f.write_str("least-common"),
        }
    }
}

/// One filtering step of the convergence loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRound {
    /// Bit position the round filtered on.
    pub position: usize,
    /// Reference bit-string derived from the working set.
    pub reference: BitString,
    /// Elements dropped in this round.
    pub removed: usize,
    /// Elements left after the round.
    pub survivors: usize,
}

/// Outcome of a convergence run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionTrace {
    /// Preference used for every round.
    pub preference: BitPreference,
    /// The single surviving element.
    pub survivor: BitString,
    /// Rounds in execution order; empty when the input already had one element.
    pub rounds: Vec<FilterRound>,
}

/// Filters `working` one bit position at a time until a single element is left.
///
/// The sequence is consumed; pass a duplicate to keep the original.
pub fn reduce_to_one(working: BitStringSequence, preference: BitPreference) -> Result<BitString> {
    reduce_with_trace(working, preference).map(|trace| trace.survivor)
}

/// Same as [`reduce_to_one`] but also records every filtering round.
pub fn reduce_with_trace(
    mut working: BitStringSequence,
    preference: BitPreference,
) -> Result<ReductionTrace> {
    if working.is_empty() {
        let info = ErrorInfo::new("empty-sequence", "cannot reduce an empty sequence")
            .with_context("preference", preference);
        return Err(DiagError::EmptySequence(info));
    }

    let width = working.width().get();
    let mut rounds = Vec::new();
    for position in 0..width {
        if working.size() == 1 {
            break;
        }
        let majority = majority_bits(&working)?;
        let reference = match preference {
            BitPreference::MostCommon => majority,
            BitPreference::LeastCommon => invert(&majority),
        };
        let removed = filter_by_rule(&mut working, &reference, position)?;
        tracing::debug!(
            %preference,
            position,
            reference = %reference,
            removed,
            survivors = working.size(),
            "filter round"
        );
        rounds.push(FilterRound {
            position,
            reference,
            removed,
            survivors: working.size(),
        });
        if working.is_empty() {
            let info = ErrorInfo::new(
                "reduction-emptied",
                "no candidate holds the reference bit at this position",
            )
            .with_context("preference", preference)
            .with_context("position", position);
            return Err(DiagError::EmptySequence(info));
        }
    }

    if working.size() != 1 {
        let info = ErrorInfo::new(
            "ambiguous-reduction",
            "all bit positions exhausted with more than one candidate left",
        )
        .with_context("preference", preference)
        .with_context("survivors", working.size())
        .with_context("width", width)
        .with_hint("the input likely contains duplicate bit-strings");
        return Err(DiagError::AmbiguousReduction(info));
    }

    let survivor = working.remove(0)?;
    Ok(ReductionTrace {
        preference,
        survivor,
        rounds,
    })
}
