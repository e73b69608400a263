use diag_core::{BitString, BitWidth, DiagError};
use diag_engine::{filter_by_rule, invert_raw, majority_bits};
use diag_seq::{sequence_from_lines, BitStringSequence};
use proptest::prelude::*;

const WIDTH: usize = 5;

fn bit_string() -> impl Strategy<Value = BitString> {
    proptest::collection::vec(any::<bool>(), WIDTH)
        .prop_map(|bits| BitString::from_bits(bits).unwrap())
}

fn sequence() -> impl Strategy<Value = BitStringSequence> {
    proptest::collection::vec(bit_string(), 1..32).prop_map(|values| {
        BitStringSequence::from_elements(BitWidth::new(WIDTH).unwrap(), values).unwrap()
    })
}

proptest! {
    #[test]
    fn filter_keeps_an_ordered_agreeing_subsequence(
        seq in sequence(),
        reference in bit_string(),
        pos in 0..WIDTH,
    ) {
        let mut filtered = seq.duplicate();
        let removed = filter_by_rule(&mut filtered, &reference, pos).unwrap();
        prop_assert_eq!(removed + filtered.size(), seq.size());

        let wanted = reference.bit(pos).unwrap();
        let mut kept = filtered.iter();
        let mut next = kept.next();
        for value in seq.iter() {
            let agrees = value.bit(pos).unwrap() == wanted;
            if next == Some(value) && agrees {
                next = kept.next();
            } else {
                prop_assert!(!agrees);
            }
        }
        prop_assert!(next.is_none());
    }

    #[test]
    fn majority_has_configured_width(seq in sequence()) {
        let majority = majority_bits(&seq).unwrap();
        prop_assert_eq!(majority.width(), WIDTH);
        prop_assert!(majority.as_str().chars().all(|ch| ch == '0' || ch == '1'));
    }

    #[test]
    fn raw_inversion_is_an_involution(text in "[01]{1,16}") {
        prop_assert_eq!(invert_raw(&invert_raw(&text)), text);
    }
}

#[test]
fn raw_inversion_passes_other_characters_through() {
    assert_eq!(invert_raw("10_1\n"), "01_0\n");
}

#[test]
fn filter_on_last_position() {
    let width = BitWidth::new(3).unwrap();
    let mut sequence = sequence_from_lines(["001", "010", "011", "100"], width).unwrap();
    let reference: BitString = "001".parse().unwrap();
    let removed = filter_by_rule(&mut sequence, &reference, 2).unwrap();
    assert_eq!(removed, 2);
    let kept: Vec<_> = sequence.iter().map(|v| v.to_string()).collect();
    assert_eq!(kept, ["001", "011"]);
}

#[test]
fn filter_rejects_bad_position_and_reference() {
    let width = BitWidth::new(3).unwrap();
    let mut sequence = sequence_from_lines(["001", "010"], width).unwrap();
    let reference: BitString = "001".parse().unwrap();
    assert!(matches!(
        filter_by_rule(&mut sequence, &reference, 3),
        Err(DiagError::OutOfRange(_))
    ));
    let wide: BitString = "0010".parse().unwrap();
    assert!(matches!(
        filter_by_rule(&mut sequence, &wide, 0),
        Err(DiagError::WidthMismatch(_))
    ));
    assert_eq!(sequence.size(), 2);
}
