pub mod output;

pub use output::{display_error, display_hint, emit, ConsoleOutput, OutputFormat, OutputSink};
