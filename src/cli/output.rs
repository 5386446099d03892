use crate::parser::ClassName;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    pattern: &'a str,
    total: usize,
    matches: Vec<String>,
}

pub fn print_matches(
    pattern: &str,
    classes: &[ClassName],
    colored_output: bool,
    format: OutputFormat,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_matches(&mut out, pattern, classes, colored_output, format)?;
    out.flush()
}

pub fn write_matches<W: Write>(
    out: &mut W,
    pattern: &str,
    classes: &[ClassName],
    colored_output: bool,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, classes, colored_output),
        OutputFormat::Json => write_json(out, pattern, classes),
    }
}

fn write_text<W: Write>(out: &mut W, classes: &[ClassName], colored_output: bool) -> io::Result<()> {
    for class in classes {
        if colored_output {
            match &class.package {
                Some(package) => writeln!(
                    out,
                    "{}{}",
                    format!("{}.", package).dimmed(),
                    class.name.bold()
                )?,
                None => writeln!(out, "{}", class.name.bold())?,
            }
        } else {
            writeln!(out, "{}", class)?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, pattern: &str, classes: &[ClassName]) -> io::Result<()> {
    let output = JsonOutput {
        pattern,
        total: classes.len(),
        matches: classes.iter().map(ClassName::qualified_name).collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)
}
