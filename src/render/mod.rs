//! Render model: a pure projection of a table into displayable rows.
//!
//! Presentation layers (HTML page, terminal UI) only ever consume a
//! [`TableView`]; they never read an [`AnimalTable`] directly.

pub mod html;

use crate::core::format_size;
use crate::storage::{AnimalTable, Catalog, TableId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowCommand {
    Edit,
    Delete,
}

/// A row control. `(name, table)` is enough to dispatch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowAction {
    pub command: RowCommand,
    pub name: String,
    pub table: TableId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderRow {
    pub name: String,
    pub image: String,
    pub location: String,
    pub size: f64,
    pub size_label: String,
    pub actions: Vec<RowAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub id: TableId,
    pub label: String,
    pub size_unit: String,
    pub rows: Vec<RenderRow>,
}

impl TableView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Rebuilds the whole view of `table`; there are no incremental updates.
pub fn render_table(id: &TableId, table: &AnimalTable, size_unit: &str) -> TableView {
    let rows = table
        .list()
        .iter()
        .map(|animal| RenderRow {
            name: animal.name.clone(),
            image: animal.image_ref.clone(),
            location: animal.location.clone(),
            size: animal.size,
            size_label: format!("{} {}", format_size(animal.size), size_unit),
            actions: [RowCommand::Edit, RowCommand::Delete]
                .into_iter()
                .map(|command| RowAction {
                    command,
                    name: animal.name.clone(),
                    table: id.clone(),
                })
                .collect(),
        })
        .collect();

    TableView {
        id: id.clone(),
        label: table.label().to_string(),
        size_unit: size_unit.to_string(),
        rows,
    }
}

pub fn render_catalog(catalog: &Catalog, size_unit: &str) -> Vec<TableView> {
    catalog
        .tables()
        .map(|(id, table)| render_table(id, table, size_unit))
        .collect()
}

/// Column widths for fixed-width text output.
pub fn column_widths(view: &TableView) -> [usize; 4] {
    let mut widths = ["Name".len(), "Image".len(), "Location".len(), "Size".len()];
    for row in &view.rows {
        widths[0] = widths[0].max(row.name.chars().count());
        widths[1] = widths[1].max(row.image.chars().count());
        widths[2] = widths[2].max(row.location.chars().count());
        widths[3] = widths[3].max(row.size_label.chars().count());
    }
    widths
}

/// Plain-text table, one line per row.
pub fn render_text(view: &TableView) -> String {
    let widths = column_widths(view);
    let line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let mut out = format!("{}\n", view.label);
    out.push_str(&line(["Name", "Image", "Location", "Size"]));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &view.rows {
        out.push_str(&line([
            row.name.as_str(),
            row.image.as_str(),
            row.location.as_str(),
            row.size_label.as_str(),
        ]));
        out.push('\n');
    }
    out.push_str(&format!("{} row(s)\n", view.rows.len()));
    out
}
