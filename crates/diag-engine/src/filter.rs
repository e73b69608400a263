use diag_core::{BitString, DiagError, ErrorInfo, Result};
use diag_seq::BitStringSequence;

/// Keeps only the elements whose bit at `pos` matches `reference` at `pos`.
///
/// Filtering is in place and preserves relative order. Returns the number of
/// elements removed.
pub fn filter_by_rule(
    sequence: &mut BitStringSequence,
    reference: &BitString,
    pos: usize,
) -> Result<usize> {
    let width = sequence.width().get();
    if reference.width() != width {
        let info = ErrorInfo::new(
            "width-mismatch",
            "reference width differs from the sequence width",
        )
        .with_context("expected", width)
        .with_context("actual", reference.width());
        return Err(DiagError::WidthMismatch(info));
    }
    let wanted = reference
        .bit(pos)
        .map_err(|_| DiagError::out_of_range("filter", pos, width))?;
    // Every element shares the reference width, so `pos` is in bounds for all of them.
    let removed = sequence.retain(|value| value.bit(pos).ok() == Some(wanted));
    Ok(removed)
}
