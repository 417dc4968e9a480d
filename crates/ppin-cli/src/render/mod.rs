//! Output rendering for analyses
//!
//! Each format is a pure function from data to `String`; callers decide
//! whether it goes to stdout or a file.

pub mod diagram;
pub mod report;
pub mod table;

use crate::error::Result;
use crate::pipeline::Analysis;
use crate::OutputFormat;
use colored::Colorize;
use std::path::Path;

/// Diagram line shown when `ppin analyze` ran without `--diagram`
pub const DIAGRAM_FLAG_HINT: &str = "use --diagram FILE to write an SVG";

/// Display options shared by the one-shot and interactive modes
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub rows: usize,
    pub top: usize,
    /// Where the diagram was written, if it was
    pub diagram: Option<&'a Path>,
    /// Diagram line when nothing was written
    pub diagram_hint: &'a str,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            rows: 10,
            top: 5,
            diagram: None,
            diagram_hint: DIAGRAM_FLAG_HINT,
        }
    }
}

/// Render an analysis in the requested format
pub fn render(analysis: &Analysis, format: OutputFormat, options: &RenderOptions<'_>) -> Result<String> {
    let rendered = match format {
        OutputFormat::Table => {
            let heading = format!(
                "{} interactions for {} from {}",
                analysis.table.len(),
                analysis.protein,
                analysis.database
            );
            format!(
                "{}\n{}\n{}",
                heading.as_str().bold(),
                table::format_as_table(&analysis.table, options.rows),
                report::format_two_column(analysis, options)
            )
        },
        OutputFormat::Json => report::format_as_json(analysis, options.top)?,
        OutputFormat::Csv => table::format_as_csv(&analysis.table),
        OutputFormat::Tsv => table::format_as_tsv(&analysis.table),
        OutputFormat::Dot => format!("{}\n", analysis.graph.to_dot()),
    };
    Ok(rendered)
}

/// Write to a file or stdout
pub fn output(rendered: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        std::fs::write(path, rendered)?;
        eprintln!(
            "{} Output written to: {}",
            "✓".green(),
            path.display().to_string().cyan()
        );
    } else {
        print!("{rendered}");
    }
    Ok(())
}

/// Draw the SVG diagram for an analysis
pub fn draw_diagram(analysis: &Analysis, path: &Path) -> Result<()> {
    let title = format!("{} interaction network ({})", analysis.protein, analysis.database);
    diagram::write_svg(&analysis.graph, &analysis.layout, &title, path)?;
    Ok(())
}

/// Draw the SVG diagram and confirm on stderr
pub fn write_diagram(analysis: &Analysis, path: &Path) -> Result<()> {
    draw_diagram(analysis, path)?;
    eprintln!(
        "{} Diagram written to: {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}
