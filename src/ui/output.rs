use std::io::Write;

use clap::ValueEnum;
use colored::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Text,
}

/// Destination for values produced by an invocation.
pub trait OutputSink {
    fn write(&mut self, value: &Value) -> Result<()>;
}

impl OutputSink for Vec<Value> {
    fn write(&mut self, value: &Value) -> Result<()> {
        self.push(value.clone());
        Ok(())
    }
}

/// Writes a selected value to the sink, enumerating arrays one element at a
/// time. `null` writes nothing. Returns the number of values written.
pub fn emit(sink: &mut dyn OutputSink, value: Value) -> Result<usize> {
    match value {
        Value::Null => Ok(0),
        Value::Array(items) => {
            let mut written = 0;
            for item in items.into_iter().filter(|item| !item.is_null()) {
                sink.write(&item)?;
                written += 1;
            }
            Ok(written)
        }
        other => {
            sink.write(&other)?;
            Ok(1)
        }
    }
}

pub struct ConsoleOutput<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl ConsoleOutput<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleOutput<W> {
    fn write(&mut self, value: &Value) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, value)?;
                writeln!(self.writer)?;
            }
            OutputFormat::Yaml => {
                // one YAML document per emitted value
                writeln!(self.writer, "---")?;
                serde_yaml::to_writer(&mut self.writer, value)?;
            }
            OutputFormat::Text => {
                write!(self.writer, "{}", render_text(value))?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Renders a value the way a shell list view would: scalars on one line,
/// objects as aligned `Key : Value` rows followed by a blank line.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
            let mut out = String::new();
            for (key, field) in map {
                out.push_str(&format!("{:<width$} : {}\n", key, scalar_text(field), width = width));
            }
            out.push('\n');
            out
        }
        other => format!("{}\n", scalar_text(other)),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(scalar_text).collect();
            format!("{{{}}}", parts.join(", "))
        }
        Value::Object(_) => value.to_string(),
    }
}

/// Print an error to stderr
pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

/// Print a dimmed hint to stderr
pub fn display_hint(message: &str) {
    eprintln!("{}", message.dimmed());
}
