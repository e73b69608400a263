use diag_core::{BitWidth, DiagError, ErrorInfo, Result, SchemaVersion};
use diag_seq::{canonical_sequence_hash, BitStringSequence};
use serde::{Deserialize, Serialize};

use crate::rating::{life_support, power_consumption, LifeSupport, PowerConsumption};

/// Schema written alongside serialized reports.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Every intermediate and final value of one diagnostic run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Schema of this payload.
    pub schema_version: SchemaVersion,
    /// Width of the analysed bit-strings.
    pub width: BitWidth,
    /// Number of bit-strings analysed.
    pub samples: usize,
    /// Canonical hash of the input sequence.
    pub input_hash: String,
    /// Gamma/epsilon rates and power consumption.
    pub power: PowerConsumption,
    /// Oxygen/CO2 ratings and life support rating.
    pub life_support: LifeSupport,
}

/// Runs both diagnostic computations on a sequence.
pub fn diagnose(sequence: &BitStringSequence) -> Result<DiagnosticReport> {
    let power = power_consumption(sequence)?;
    let life_support = life_support(sequence)?;
    tracing::info!(
        samples = sequence.size(),
        width = %sequence.width(),
        power = power.value,
        life_support = life_support.value,
        "diagnostic complete"
    );
    Ok(DiagnosticReport {
        schema_version: REPORT_SCHEMA,
        width: sequence.width(),
        samples: sequence.size(),
        input_hash: canonical_sequence_hash(sequence),
        power,
        life_support,
    })
}

/// Diagnostic runner bound to one configured width.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticEngine {
    width: BitWidth,
}

impl DiagnosticEngine {
    /// Creates an engine accepting only sequences of `width` bits.
    pub fn new(width: BitWidth) -> Self {
        Self { width }
    }

    /// Width this engine was configured with.
    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// Computes power consumption after checking the sequence width.
    pub fn power_consumption(&self, sequence: &BitStringSequence) -> Result<PowerConsumption> {
        self.check(sequence)?;
        power_consumption(sequence)
    }

    /// Computes the life support rating after checking the sequence width.
    pub fn life_support(&self, sequence: &BitStringSequence) -> Result<LifeSupport> {
        self.check(sequence)?;
        life_support(sequence)
    }

    /// Produces the full report after checking the sequence width.
    pub fn diagnose(&self, sequence: &BitStringSequence) -> Result<DiagnosticReport> {
        self.check(sequence)?;
        diagnose(sequence)
    }

    fn check(&self, sequence: &BitStringSequence) -> Result<()> {
        if sequence.width() != self.width {
            let info = ErrorInfo::new(
                "width-mismatch",
                "sequence width differs from the engine width",
            )
            .with_context("expected", self.width)
            .with_context("actual", sequence.width());
            return Err(DiagError::WidthMismatch(info));
        }
        Ok(())
    }
}
