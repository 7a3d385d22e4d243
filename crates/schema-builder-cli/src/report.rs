use console::style;
use schema_builder::{FileAction, Plan, Report};
use std::io::{self, Write};

/// Prints skipped files first, with a rename hint, then created files.
pub(crate) fn render_report(out: &mut dyn Write, report: &Report) -> io::Result<()> {
    if !report.skipped.is_empty() {
        writeln!(out, "{}", style("== Existing Files ==").yellow().bold())?;
        writeln!(
            out,
            "{}",
            style("Please rename them before they can be re-generated").dim()
        )?;
        for path in &report.skipped {
            writeln!(out, "{}", path.display())?;
        }
    }

    if !report.created.is_empty() {
        writeln!(out, "{}", style("== Created Files ==").green().bold())?;
        for path in &report.created {
            writeln!(out, "{}", path.display())?;
        }
    }

    if report.skipped.is_empty() && report.created.is_empty() {
        writeln!(out, "{}", style("No models found. Nothing to generate.").magenta().dim())?;
    }

    Ok(())
}

pub(crate) fn render_plan(out: &mut dyn Write, plan: &Plan) -> io::Result<()> {
    for file in &plan.files {
        let label = match file.action {
            FileAction::Create => style("would create").green(),
            FileAction::Skip => style("would skip").yellow(),
        };
        writeln!(out, "  {:>12}    {}", label, file.path.display())?;
    }
    Ok(())
}
