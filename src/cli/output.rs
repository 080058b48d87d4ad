/// Output formatting: JSON, table, id modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use tracing::debug;

use super::args::OutputFormat;
use crate::definition::MembershipChange;
use crate::types::{ErrorOutput, MembershipOutput, ViewOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, phase timings are logged.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Views ---

/// Write a definition's views to stdout.
pub fn write_views(views: &[ViewOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(views),
        OutputFormat::Compact => print_compact_json(views),
        OutputFormat::Ndjson => print_ndjson(views),
        OutputFormat::Id => {
            for v in views {
                println!("{}", v.id);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_views_table(views, ctx),
    }
}

fn write_views_table(views: &[ViewOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["ID", "LABEL", "NAME"]);
    }
    for v in views {
        table.add_row([
            Cell::new(v.id),
            Cell::new(&v.label),
            Cell::new(&v.name),
        ]);
    }
    println!("{table}");
}

// --- Add / remove ---

/// Write an add/remove result to stdout.
pub fn write_membership(result: &MembershipOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(std::slice::from_ref(result)),
        OutputFormat::Id => {
            for id in &result.views {
                println!("{id}");
            }
        }
        OutputFormat::Table | OutputFormat::Auto => println!("{}", membership_summary(result)),
    }
}

/// One-line human summary of an add/remove result.
#[must_use]
pub fn membership_summary(result: &MembershipOutput) -> String {
    let (verb, prep) = match (result.change, result.dry_run) {
        (MembershipChange::Add, false) => ("Added", "to"),
        (MembershipChange::Add, true) => ("Would add", "to"),
        (MembershipChange::Remove, false) => ("Removed", "from"),
        (MembershipChange::Remove, true) => ("Would remove", "from"),
    };
    let ids = result
        .views
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{verb} content view '{}' {prep} definition '{}' (views: [{ids}])",
        result.view, result.definition
    )
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(phase = self.label, "{ms:.2}ms");
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(change: MembershipChange, dry_run: bool) -> MembershipOutput {
        MembershipOutput {
            org: "ACME".into(),
            definition: "def1".into(),
            definition_id: 1,
            view: "view2".into(),
            view_id: 2,
            change,
            views: vec![1, 2],
            dry_run,
        }
    }

    #[test]
    fn test_timer_follows_debug_flag() {
        let quiet = OutputCtx::new(OutputFormat::Json, false, false, false);
        let loud = OutputCtx::new(OutputFormat::Json, false, false, true);
        assert!(!quiet.timer("phase").active);
        assert!(loud.timer("phase").active);
    }

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(resolve_format(OutputFormat::Auto, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Id, false), OutputFormat::Id);
    }

    #[test]
    fn test_summary_add() {
        assert_eq!(
            membership_summary(&result(MembershipChange::Add, false)),
            "Added content view 'view2' to definition 'def1' (views: [1, 2])"
        );
    }

    #[test]
    fn test_summary_remove_dry_run() {
        assert_eq!(
            membership_summary(&result(MembershipChange::Remove, true)),
            "Would remove content view 'view2' from definition 'def1' (views: [1, 2])"
        );
    }
}
