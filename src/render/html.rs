//! HTML table emission

use crate::options::RenderOptions;
use crate::payload::{CellKind, ResultPayload};

use super::{cell_value, split_results, ResultTable};

/// Renders a whole payload as an HTML table.
///
/// ARRAY payloads become a `table.array` with a `thead` when any header cells
/// were found; every other kind is wrapped by [`render_cell_table`].
pub fn render_table(result: &ResultPayload, opts: &RenderOptions) -> String {
    if result.kind != CellKind::Array {
        return render_cell_table(&cell_value(result), result.kind, opts);
    }

    let table = split_results(result);
    render_array(&table, result.cols, result.rows)
}

/// Renders split array values. When a header row exists it is not repeated
/// in the body, so one fewer body row is emitted.
pub fn render_array(table: &ResultTable, cols: usize, rows: usize) -> String {
    let mut answer = String::from(r#"<table class="array">"#);
    let mut rows = rows;

    if !table.header.is_empty() {
        answer.push_str("<thead>");
        answer.push_str(&render_row(&table.header, cols, 0, true));
        answer.push_str("</thead>");
        rows = rows.saturating_sub(1);
    }

    for row in 0..rows {
        answer.push_str("<tbody>");
        answer.push_str(&render_row(&table.body, cols, row, false));
        answer.push_str("</tbody>");
    }

    answer.push_str("</table>");
    answer
}

/// Renders row `row` of `cells`, `cols` values per row. Missing values render
/// as empty cells.
pub fn render_row(cells: &[String], cols: usize, row: usize, is_header: bool) -> String {
    let tag = if is_header { "th" } else { "td" };

    let start = row * cols;
    let mut answer = String::from("<tr>");
    for i in start..start + cols {
        let value = cells.get(i).map(String::as_str).unwrap_or_default();
        answer.push_str(&format!("<{tag}>{value}</{tag}>"));
    }
    answer.push_str("</tr>");
    answer
}

/// Wraps a single value in the table used for its kind.
///
/// ERROR and confirmation kinds ignore `value` and show a fixed message in
/// the configured language. Unknown kinds render as nothing.
pub fn render_cell_table(value: &str, kind: CellKind, opts: &RenderOptions) -> String {
    let lang = opts.language;

    match kind {
        CellKind::Text | CellKind::Json | CellKind::Link => {
            format!(r#"<table class="text"><tr><td>{value}</td></tr></table>"#)
        }
        CellKind::Date | CellKind::Number => {
            format!(r#"<table class="number"><tr><td>{value}</td></tr></table>"#)
        }
        CellKind::Error => format!(
            r#"<table class="null"><tr><td> {}. <span>{} <a id="id_retryButton" title="{}">{}</a>.</span></td></tr></table>"#,
            lang.pick("No data found", "No se encontraron datos"),
            lang.pick("Please", "Por favor"),
            lang.pick("Try Again", "Inténtalo Nuevamente"),
            lang.pick("try again", "inténtalo Nuevamente"),
        ),
        CellKind::ConfirmWriteDataset => {
            let proceed = lang.pick("Continue anyway", "Continuar de todas formas");
            format!(
                r#"<table class="text"><tr><td> {}. <span><a id="id_retryButton" title="{proceed}">{proceed}</a></span></td></tr></table>"#,
                lang.pick(
                    "You are about to run an origin that can affect the data",
                    "Usted se encuentra por ejecutar un origen que puede cambiar datos",
                ),
            )
        }
        CellKind::ConfirmWriteDatasetPro => format!(
            r#"<table class="text"><tr><td> {}</td></tr></table>"#,
            lang.pick(
                "Write-type Data Views that belong to the production environment cannot be previewed in the workspace.",
                "Las vistas de tipo escritura que pertenecen al entorno de producción no se pueden previsualizar en el espacio de trabajo.",
            ),
        ),
        CellKind::Array | CellKind::Unknown => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_row_missing_cells() {
        let cells = vec!["a".to_string()];
        assert_eq!(render_row(&cells, 2, 0, false), "<tr><td>a</td><td></td></tr>");
    }
}
