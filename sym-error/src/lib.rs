//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the spanned [`Error`] type that carries them.

use ariadne::{Color, Report, Source};
use std::{fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send + Sync {
    /// A one-line summary of the error, used when the error is displayed without its source.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report for this error to the given writer.
    pub fn write_report(&self, src_id: &str, input: &str, out: impl io::Write) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), out)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not implement [`Display`], so the report can
    /// only be printed through one of its writer methods.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    #[derive(Debug)]
    struct Stray;

    impl ErrorKind for Stray {
        fn message(&self) -> String {
            "stray character".to_string()
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message(self.message())
                .with_label(Label::new((src_id, spans[0].clone())).with_message("remove this"))
                .finish()
        }
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![2..3], Stray);
        assert_eq!(err.to_string(), "stray character");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();

        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(Error::new(vec![0..1], Stray));
        assert_eq!(boxed.to_string(), "stray character");
    }

    #[test]
    fn report_points_at_span() {
        let err = Error::new(vec![2..3], Stray);
        let mut out = Vec::new();
        err.write_report("input", "x $ y", &mut out).unwrap();

        let report = String::from_utf8(strip_ansi_escapes::strip(out)).unwrap();
        assert!(report.contains("stray character"));
        assert!(report.contains("remove this"));
    }
}
