//! Serializer trait and the per-call options and result types.

use super::degradation::DegradationReport;
use super::interrupt::Interrupt;
use crate::error::Result;
use crate::model::Document;
use std::io::Write;

/// Per-call serialization options
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    /// Cancellation flag and deadline
    pub interrupt: Interrupt,
}

impl SerializeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }
}

/// Result of a successful conversion: the document plus what was lost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion<T> {
    pub document: T,
    pub report: DegradationReport,
}

impl<T> Conversion<T> {
    /// Whether the conversion lost nothing
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        self.report.is_empty()
    }

    /// Drop the report and keep the document
    pub fn into_document(self) -> T {
        self.document
    }
}

/// Trait for target-format serializers.
///
/// Implementations hold only immutable configuration; every call builds its
/// own working state, so one serializer can be shared across threads.
pub trait Serializer: Send + Sync {
    /// Target document type
    type Output;

    /// Convert a graph document into the target document
    fn serialize(
        &self,
        document: &Document,
        options: &SerializeOptions,
    ) -> Result<Conversion<Self::Output>>;

    /// Write a target document to `writer`
    fn render(&self, output: &Self::Output, writer: &mut dyn Write) -> Result<()>;

    /// Get format name
    fn format_name(&self) -> &str;

    /// Serialize and render in one step, returning the degradation report
    fn serialize_to(
        &self,
        document: &Document,
        options: &SerializeOptions,
        writer: &mut dyn Write,
    ) -> Result<DegradationReport> {
        let conversion = self.serialize(document, options)?;
        self.render(&conversion.document, writer)?;
        Ok(conversion.report)
    }
}
