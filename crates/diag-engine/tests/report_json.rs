use diag_core::{BitWidth, DiagError};
use diag_engine::serde::{report_from_json_slice, to_canonical_json_bytes};
use diag_engine::DiagnosticEngine;
use diag_seq::sequence_from_lines;

#[test]
fn report_json_round_trip_is_sorted() {
    let sequence = sequence_from_lines(
        ["00100", "11110", "10110", "10111", "10101", "01111", "00111"],
        BitWidth::new(5).unwrap(),
    )
    .unwrap();
    let engine = DiagnosticEngine::new(BitWidth::new(5).unwrap());
    let report = engine.diagnose(&sequence).unwrap();
    let bytes = to_canonical_json_bytes(&report).unwrap();
    let text = String::from_utf8(bytes.clone()).unwrap();
    let input_hash = text.find("\"input_hash\"").unwrap();
    let life_support = text.find("\"life_support\"").unwrap();
    let width = text.find("\"width\"").unwrap();
    assert!(input_hash < life_support && life_support < width);

    let restored = report_from_json_slice(&bytes).unwrap();
    assert_eq!(restored, report);
}

#[test]
fn engine_rejects_foreign_widths() {
    let sequence = sequence_from_lines(["001", "010"], BitWidth::new(3).unwrap()).unwrap();
    let engine = DiagnosticEngine::new(BitWidth::new(12).unwrap());
    assert!(matches!(
        engine.power_consumption(&sequence),
        Err(DiagError::WidthMismatch(_))
    ));
    assert!(matches!(
        engine.life_support(&sequence),
        Err(DiagError::WidthMismatch(_))
    ));
}
