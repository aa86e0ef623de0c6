//! Markdown input table for a single component spec.
//!
//! The Type, Options and Regex columns are only emitted when at least one
//! input in the spec sets them; every row then carries a cell for them.

use crate::model::{ComponentInput, ComponentSpec};
use regex::Regex;
use std::sync::LazyLock;

/// Default-value cell for inputs without a default.
pub const NO_DEFAULT: &str = "\u{26D4}";

/// Inline line break understood by GitLab and GitHub markdown tables.
const LINE_BREAK: &str = "<br>";

static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Description,
    Default,
    Type,
    Options,
    Regex,
}

impl Column {
    pub fn title(self) -> &'static str {
        match self {
            Column::Name => "Input / Variable",
            Column::Description => "Description",
            Column::Default => "Default value",
            Column::Type => "Type",
            Column::Options => "Options",
            Column::Regex => "Regex",
        }
    }

    fn cell(self, name: &str, input: &ComponentInput) -> String {
        match self {
            Column::Name => code(name),
            Column::Description => description(&input.description),
            Column::Default => default_value(&input.default),
            Column::Type => code(&input.input_type),
            Column::Options => options(&input.options),
            Column::Regex => code(&input.regex),
        }
    }
}

/// Columns present in the table for `spec`, in display order.
pub fn columns(spec: &ComponentSpec) -> Vec<Column> {
    let mut cols = vec![Column::Name, Column::Description, Column::Default];
    if spec.has_types() {
        cols.push(Column::Type);
    }
    if spec.has_options() {
        cols.push(Column::Options);
    }
    if spec.has_regex() {
        cols.push(Column::Regex);
    }
    cols
}

/// Render the input table, rows sorted by input name. No trailing newline.
pub fn render_table(spec: &ComponentSpec) -> String {
    let cols = columns(spec);

    let rows: Vec<Vec<String>> = spec
        .inputs
        .iter()
        .map(|(name, input)| cols.iter().map(|c| c.cell(name, input)).collect())
        .collect();

    let widths: Vec<usize> = cols
        .iter()
        .enumerate()
        .map(|(i, col)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(col.title().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render_row(cols.iter().map(|c| c.title()), &widths));
    lines.push(render_row(widths.iter().map(|w| "-".repeat(*w)), &widths));
    for row in &rows {
        lines.push(render_row(row.iter(), &widths));
    }
    lines.join("\n")
}

fn render_row<I, S>(cells: I, widths: &[usize]) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let padded: Vec<String> = cells
        .into_iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    format!("| {} |", padded.join(" | "))
}

// -- Cell formatting ----------------------------------------------------------

/// `|` would end the cell early, even inside a code span.
fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Fixed-width span; an empty value still yields an empty span.
fn code(text: &str) -> String {
    format!("`{}`", escape_pipes(text))
}

fn emphasis(text: &str) -> String {
    format!("_{}_", escape_pipes(text))
}

/// `""` → sentinel, anything else → `_value_`.
fn default_value(text: &str) -> String {
    if text.is_empty() {
        NO_DEFAULT.to_string()
    } else {
        emphasis(text)
    }
}

/// Multi-line descriptions are folded onto one line with `<br>` markers.
fn description(text: &str) -> String {
    let text = escape_pipes(text.trim_end());
    RE_LINE_BREAK.replace_all(&text, LINE_BREAK).into_owned()
}

/// `[a, b]` → `_a, b_`, `[]` → `__`.
fn options(values: &[String]) -> String {
    emphasis(&values.join(", "))
}
