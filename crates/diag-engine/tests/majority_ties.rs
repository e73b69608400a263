use diag_core::{BitWidth, DiagError};
use diag_engine::{bit_frequencies, majority_bits, reduce_to_one, BitPreference};
use diag_seq::{sequence_from_lines, BitStringSequence};

#[test]
fn exact_half_resolves_to_one() {
    let sequence = sequence_from_lines(["10", "01"], BitWidth::new(2).unwrap()).unwrap();
    assert_eq!(majority_bits(&sequence).unwrap().as_str(), "11");
}

#[test]
fn frequencies_count_ones_per_position() {
    let sequence =
        sequence_from_lines(["110", "100", "101"], BitWidth::new(3).unwrap()).unwrap();
    let freq = bit_frequencies(&sequence);
    assert_eq!(freq.ones(), &[3, 1, 1]);
    assert_eq!(freq.samples(), 3);
    assert_eq!(freq.majority().unwrap().as_str(), "100");
}

#[test]
fn empty_sequence_has_no_majority() {
    let sequence = BitStringSequence::new(BitWidth::new(4).unwrap());
    let err = majority_bits(&sequence).unwrap_err();
    if let DiagError::EmptySequence(info) = err {
        assert_eq!(info.code, "empty-sequence");
    } else {
        panic!("unexpected error variant");
    }
}

#[test]
fn least_common_tie_keeps_zero() {
    let sequence = sequence_from_lines(["10", "01"], BitWidth::new(2).unwrap()).unwrap();
    let most = reduce_to_one(sequence.duplicate(), BitPreference::MostCommon).unwrap();
    let least = reduce_to_one(sequence, BitPreference::LeastCommon).unwrap();
    assert_eq!(most.as_str(), "10");
    assert_eq!(least.as_str(), "01");
}
