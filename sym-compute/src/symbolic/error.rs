use ariadne::Report;
use std::{fmt, io, ops::Range};
use sym_error::Error;

/// The error returned when text cannot be parsed into an [`Expr`](super::Expr).
///
/// Every lexing and parsing failure is collapsed into this one type. The underlying diagnostic is
/// kept as the [`source`](std::error::Error::source) of the error, so that callers who want to
/// point at the offending part of the input can still render a report for it.
#[derive(Debug)]
pub struct InvalidExpression {
    inner: Error,
}

impl InvalidExpression {
    /// The regions of the input that caused the failure.
    pub fn spans(&self) -> &[Range<usize>] {
        &self.inner.spans
    }

    /// A one-line description of what went wrong.
    pub fn reason(&self) -> String {
        self.inner.to_string()
    }

    /// Build a report for this error, pointing into the source named `src_id`.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.inner.build_report(src_id)
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report(&self, src_id: &str, input: &str, out: impl io::Write) -> io::Result<()> {
        self.inner.write_report(src_id, input, out)
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.inner.report_to_stderr(src_id, input)
    }
}

impl From<Error> for InvalidExpression {
    fn from(inner: Error) -> Self {
        Self { inner }
    }
}

impl fmt::Display for InvalidExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid expression: {}", self.inner)
    }
}

impl std::error::Error for InvalidExpression {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}
