use diag_core::{BitString, BitWidth, DiagError, ErrorInfo, Result};

use crate::sequence::BitStringSequence;

/// Infers the width from the first non-blank line.
pub fn infer_width<I, S>(lines: I) -> Result<BitWidth>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        let trimmed = line.as_ref().trim();
        if !trimmed.is_empty() {
            return BitWidth::new(trimmed.len());
        }
    }
    let info = ErrorInfo::new("no-input-lines", "input contains no bit-string lines")
        .with_hint("pass an explicit width or a non-empty input");
    Err(DiagError::EmptySequence(info))
}

/// Builds a sequence from raw text lines.
///
/// Line terminators and surrounding whitespace are stripped and blank lines
/// skipped. Errors carry the 1-based line number in their context.
pub fn sequence_from_lines<I, S>(lines: I, width: BitWidth) -> Result<BitStringSequence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sequence = BitStringSequence::new(width);
    for (idx, line) in lines.into_iter().enumerate() {
        let trimmed = line.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = BitString::parse(trimmed, width).map_err(|err| with_line(err, idx + 1))?;
        sequence.append(value)?;
    }
    tracing::debug!(size = sequence.size(), width = %width, "loaded sequence from lines");
    Ok(sequence)
}

fn with_line(err: DiagError, line: usize) -> DiagError {
    let attach = |info: ErrorInfo| info.with_context("line", line);
    match err {
        DiagError::MalformedBitString(info) => DiagError::MalformedBitString(attach(info)),
        DiagError::WidthMismatch(info) => DiagError::WidthMismatch(attach(info)),
        DiagError::InvalidWidth(info) => DiagError::InvalidWidth(attach(info)),
        other => other,
    }
}
