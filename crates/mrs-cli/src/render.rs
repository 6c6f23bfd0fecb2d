//! Terminal rendering of controller state with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use mrs_app::{NavigationView, RawDataView, ReportInputs};
use mrs_model::{GroupedData, MeasureGroup};
use mrs_persistence::{AppConfiguration, HistoryEntry};
use mrs_updater::UpdateState;

/// Groups with their counts; the selected one is highlighted.
pub fn groups_table(data: &GroupedData, selected: Option<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Measures"),
        header_cell("Ignored"),
        header_cell("Mean (included)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for group in data.groups() {
        let name = if selected == Some(group.name.as_str()) {
            Cell::new(&group.name)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&group.name)
        };
        table.add_row(vec![
            name,
            Cell::new(group.measures.len()),
            count_cell(group.ignored_count(), Color::Yellow),
            mean_cell(group.included_mean(), 3),
        ]);
    }
    table
}

/// Measures of one group. Ignored measures are dimmed.
pub fn measures_table(group: &MeasureGroup) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Value"),
        header_cell("Status"),
        header_cell("Fields"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    for measure in &group.measures {
        let fields = measure
            .extra
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(", ");
        let status = if measure.ignored {
            Cell::new("ignored").fg(Color::Yellow)
        } else {
            Cell::new("included").fg(Color::Green)
        };
        let row = vec![
            Cell::new(measure.id),
            Cell::new(measure.value),
            status,
            Cell::new(fields),
        ];
        if measure.ignored {
            table.add_row(
                row.into_iter()
                    .map(|cell| cell.add_attribute(Attribute::Dim))
                    .collect::<Vec<_>>(),
            );
        } else {
            table.add_row(row);
        }
    }
    table
}

/// The raw-data page: group overview plus the visible group's measures.
pub fn raw_data(view: &RawDataView<'_>) -> String {
    let mut out = groups_table(view.data, view.selected_group).to_string();
    if let Some(group) = view.visible_group() {
        out.push_str(&format!("\n\n{}:\n{}", group.name, measures_table(group)));
    }
    out
}

/// History entries in the order given.
pub fn history_table<'a>(entries: impl Iterator<Item = &'a HistoryEntry>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Recorded"),
        header_cell("Event"),
        header_cell("Groups"),
        header_cell("Measures"),
        header_cell("Ignored"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    for entry in entries {
        let summary = entry.data.summary();
        let recorded = entry
            .recorded_at()
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| entry.recorded_at.clone());
        table.add_row(vec![
            Cell::new(entry.sequence).add_attribute(Attribute::Bold),
            Cell::new(recorded),
            Cell::new(entry.event.label()),
            Cell::new(summary.groups),
            Cell::new(summary.measures),
            count_cell(summary.ignored, Color::Yellow),
        ]);
    }
    table
}

/// What the report renderer would receive.
pub fn report(inputs: &ReportInputs<'_>) -> String {
    let config = inputs.configuration;
    let decimals = usize::from(config.report.decimal_places);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Included"),
        header_cell("Ignored"),
        header_cell("Mean"),
        header_cell("Target"),
        header_cell("Tolerance"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..6 {
        align_column(&mut table, column, CellAlignment::Right);
    }

    for group in inputs.data.groups() {
        if !config.report.show_ignored && group.ignored_count() == group.measures.len() {
            continue;
        }
        let mean = group.included_mean();
        let baseline = config.referential.value_for(&group.name);
        let mut mean_display = mean_cell(mean, decimals);
        if inputs.display_conditional_formatting
            && let (Some(mean), Some(baseline)) = (mean, baseline)
        {
            mean_display = if baseline.accepts(mean) {
                mean_display.fg(Color::Green)
            } else {
                mean_display.fg(Color::Red).add_attribute(Attribute::Bold)
            };
        }
        table.add_row(vec![
            Cell::new(&group.name),
            Cell::new(group.included().count()),
            count_cell(group.ignored_count(), Color::Yellow),
            mean_display,
            baseline.map_or_else(
                || dim_cell("-"),
                |b| Cell::new(format!("{:.*}", decimals, b.target)),
            ),
            baseline.map_or_else(
                || dim_cell("-"),
                |b| Cell::new(format!("{:.*}", decimals, b.tolerance)),
            ),
        ]);
    }

    let referential = if config.referential.name.is_empty() {
        "(none)"
    } else {
        config.referential.name.as_str()
    };
    format!(
        "{}\nReferential: {}\nUse error for referential: {}\nConditional formatting: {}\n{}",
        config.report.title,
        referential,
        on_off(inputs.use_error_for_referential),
        on_off(inputs.display_conditional_formatting),
        table
    )
}

/// Referential values from a configuration.
pub fn configuration_table(config: &AppConfiguration) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Target"),
        header_cell("Tolerance"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (group, value) in &config.referential.values {
        table.add_row(vec![
            Cell::new(group),
            Cell::new(value.target),
            Cell::new(value.tolerance),
        ]);
    }
    table
}

/// One-line summary of the navigation bar.
pub fn status_line(view: &NavigationView) -> String {
    let mut line = format!("Page: {}", view.current_page.label());
    if !view.enable_data_and_report {
        line.push_str(" (no model loaded)");
    }
    if view.is_fullscreen {
        line.push_str(" [fullscreen]");
    }
    if view.show_update_prompt {
        line.push_str(&format!(" | update: {:?}", view.update_state));
    } else if view.update_prompt_hidden && view.update_state != UpdateState::Idle {
        line.push_str(&format!(" | update: {:?} (dismissed)", view.update_state));
    }
    line
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn mean_cell(mean: Option<f64>, decimals: usize) -> Cell {
    match mean {
        Some(mean) => Cell::new(format!("{mean:.decimals$}")),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
