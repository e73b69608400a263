use diag_core::{BitWidth, DiagError};
use diag_seq::{infer_width, sequence_from_lines};

#[test]
fn terminators_and_blank_lines_are_stripped() {
    let lines = ["00100\n", "11110\r\n", "", "  10110  ", "\n"];
    let width = infer_width(lines).unwrap();
    assert_eq!(width.get(), 5);
    let sequence = sequence_from_lines(lines, width).unwrap();
    let values: Vec<_> = sequence.iter().map(|v| v.to_string()).collect();
    assert_eq!(values, ["00100", "11110", "10110"]);
}

#[test]
fn width_is_inferred_from_first_non_blank_line() {
    let width = infer_width(["", "   ", "000011000111"]).unwrap();
    assert_eq!(width.get(), 12);
}

#[test]
fn no_lines_cannot_infer_width() {
    let err = infer_width(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, DiagError::EmptySequence(_)));
}

#[test]
fn errors_report_line_numbers() {
    let width = BitWidth::new(5).unwrap();
    let err = sequence_from_lines(["00100", "11x10"], width).unwrap_err();
    if let DiagError::MalformedBitString(info) = err {
        assert_eq!(info.context["line"], "2");
    } else {
        panic!("unexpected error variant");
    }

    let err = sequence_from_lines(["00100", "", "1111"], width).unwrap_err();
    if let DiagError::WidthMismatch(info) = err {
        assert_eq!(info.context["line"], "3");
    } else {
        panic!("unexpected error variant");
    }
}
