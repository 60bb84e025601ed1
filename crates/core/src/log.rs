//! Ordered log sink abstraction
//!
//! The converter reports progress as plain text lines. It stays
//! presentation-agnostic by writing each line into a caller-supplied
//! sink: a CLI prints them, a test collects them into a `Vec`. Lines
//! are delivered in emission order and are never revised afterwards.

/// An append-only, ordered sink for human-readable progress lines.
///
/// Implementations must preserve emission order. Lines arrive without
/// a trailing newline.
pub trait LogSink {
    /// Receive one progress line.
    fn line(&mut self, message: &str);
}

/// Any `FnMut(&str)` closure works as a sink.
///
/// Lets callers stream lines without defining a type:
/// `&mut |line: &str| println!("{line}")`.
impl<F: FnMut(&str)> LogSink for F {
    fn line(&mut self, message: &str) {
        self(message);
    }
}

/// Collects lines in emission order.
///
/// Handy for tests and for callers that want the full transcript after
/// the run instead of streaming it.
impl LogSink for Vec<String> {
    fn line(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
