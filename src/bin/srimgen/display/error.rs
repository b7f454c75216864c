use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_config_hints(err);
        collector.collect_model_hints(err.downcast_ref::<srim_input::Error>());
        collector.collect_writer_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_config_hints(&mut self, err: &Error) {
        use srim_input::config::Error as ConfigError;

        let Some(config_err) = err.downcast_ref::<ConfigError>() else {
            return;
        };

        self.mark_typed();

        match config_err {
            ConfigError::Read { source, .. } => {
                self.collect_std_io_hints(source);
            }

            ConfigError::Parse(_) => {
                self.add("The run description is not valid TOML or has the wrong shape");
                self.add("Check section names: [ion], [[layers]], [trim], [sr]");
                self.add("Unknown keys are rejected, so check for typos");
            }

            ConfigError::Model(inner) => {
                self.collect_model_hints(Some(inner));
            }

            ConfigError::InvalidLayer { index, .. } => {
                self.add(format!(
                    "Layer {} (counting from 0) needs exactly one composition source",
                    index
                ));
                self.add("Use `formula = \"...\"` or a [layers.elements] table");
            }

            ConfigError::Incomplete(_) => {
                self.add("The command needs a section the file does not have");
                self.add("`trim` needs [trim] and `sr` needs [sr], both need [ion] and [[layers]]");
            }
        }
    }

    fn collect_model_hints(&mut self, err: Option<&srim_input::Error>) {
        use srim_input::Error as ModelError;

        let Some(model_err) = err else {
            return;
        };

        self.mark_typed();

        match model_err {
            ModelError::UnknownElement(id) => {
                self.add(format!("'{}' is not an element symbol or number", id));
                self.add("Symbols are case-sensitive (Fe, not FE); numbers run 1 to 92");
            }

            ModelError::DuplicateElement(element) => {
                self.add(format!("{} appears more than once in the formula", element));
                self.add("Merge the counts into a single term");
            }

            ModelError::Validation { field, .. } => {
                self.collect_validation_hints(field);
            }
        }
    }

    fn collect_validation_hints(&mut self, field: &str) {
        match field {
            "chemical formula" => {
                self.add("Formulas are symbol/count pairs such as SiC or Fe0.7Cr0.2Ni0.1");
                self.add("Counts must be non-negative numbers");
            }
            "composition" => {
                self.add("A composition list holds 1 to 4 values:");
                self.add("[stoich, E_d, lattice, surface]");
            }
            "density" | "width" | "ion energy" | "ion mass" => {
                self.add(format!("The {} must be a positive number", field));
            }
            "energy_min" => {
                self.add("energy_min in [sr.settings] must be below the ion energy");
            }
            "description" => {
                self.add("Keep the description under 80 characters without quotes");
            }
            "layer name" => {
                self.add("Layer names are written in quotes on one TRIM.IN line");
                self.add("Remove double quotes and line breaks from `name`");
            }
            _ => {
                self.add(format!("Check the value given for `{}`", field));
            }
        }
    }

    fn collect_writer_hints(&mut self, err: &Error) {
        use srim_input::io::Error as WriteError;

        let Some(write_err) = err.downcast_ref::<WriteError>() else {
            return;
        };

        self.mark_typed();

        match write_err {
            WriteError::Io { source } | WriteError::WriteFile { source, .. } => {
                self.collect_std_io_hints(source);
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn hints_for(err: Error) -> Vec<String> {
        HintCollector::collect(&err).unwrap_or_default()
    }

    #[test]
    fn config_model_errors_get_model_hints() {
        let err: Result<(), srim_input::config::Error> = Err(srim_input::config::Error::Model(
            srim_input::Error::UnknownElement("Xx".into()),
        ));
        let hints = hints_for(err.context("loading run").unwrap_err());
        assert!(hints.iter().any(|h| h.contains("'Xx'")));
    }

    #[test]
    fn direct_model_errors_get_hints() {
        let err = Error::new(srim_input::Error::validation("composition", "too long"));
        let hints = hints_for(err);
        assert!(hints.iter().any(|h| h.contains("1 to 4")));
    }

    #[test]
    fn untyped_errors_fall_back_to_message() {
        let hints = hints_for(anyhow::anyhow!("Permission denied"));
        assert!(hints.iter().any(|h| h.contains("ls -la")));
        assert!(hints_for(anyhow::anyhow!("something else")).is_empty());
    }
}
