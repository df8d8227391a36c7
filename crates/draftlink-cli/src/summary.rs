use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use draftlink_cli::types::{BuildSummary, MatchSummary};
use draftlink_ingest::LoadWarning;
use draftlink_map::MatchRule;

/// Warnings listed individually before the rest are only counted.
const MAX_LISTED_WARNINGS: usize = 20;

pub fn print_build_summary(summary: &BuildSummary) {
    println!("Output: {}", summary.output.display());
    if let Some((path, rows)) = &summary.unmatched {
        println!("Unmatched rows: {} ({rows})", path.display());
    }
    println!("{}", build_table(summary));
    print_warnings(&summary.warnings);
}

pub fn print_match_summary(summary: &MatchSummary) {
    println!("{}", match_table(summary));
    print_warnings(&summary.warnings);
}

fn build_table(summary: &BuildSummary) -> Table {
    let report = &summary.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Statistics rows"), Cell::new(report.total)]);
    table.add_row(vec![
        Cell::new("Drafted")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(report.matched, Color::Green).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("  fuzzy name, exact school"),
        count_cell(report.fuzzy_name_matches, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("  exact name, fuzzy school"),
        count_cell(report.exact_name_matches, Color::Green),
    ]);
    table.add_row(vec![Cell::new("Not drafted"), Cell::new(report.unmatched())]);
    table.add_row(vec![
        Cell::new("  no usable year"),
        count_cell(report.missing_year, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Match rate"),
        Cell::new(format!("{:.1}%", report.match_rate() * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Draft records"),
        Cell::new(format!(
            "{} ({} years)",
            summary.draft_records, summary.draft_years
        )),
    ]);
    table.add_row(vec![Cell::new("School aliases"), Cell::new(summary.aliases)]);
    table.add_row(vec![
        Cell::new("Teams"),
        summary.teams.map_or_else(|| dim_cell("-"), Cell::new),
    ]);
    table.add_row(vec![
        Cell::new("Load warnings"),
        count_cell(summary.warnings.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Elapsed"),
        dim_cell(format!("{:.2}s", summary.elapsed.as_secs_f64())),
    ]);
    table
}

fn match_table(summary: &MatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_summary_table_style(&mut table);

    table.add_row(vec![Cell::new("Player"), Cell::new(&summary.name)]);
    table.add_row(vec![Cell::new("School"), Cell::new(&summary.school)]);
    table.add_row(vec![
        Cell::new("Year"),
        summary.year.map_or_else(|| dim_cell("-"), Cell::new),
    ]);
    table.add_row(vec![
        Cell::new("Candidates"),
        Cell::new(format!(
            "{} of {} scanned",
            summary.candidates_scanned, summary.candidates
        )),
    ]);
    table.add_row(vec![
        Cell::new("Best name score"),
        Cell::new(format!("{:.1}", summary.best_name_score)),
    ]);
    match &summary.record {
        Some(record) => {
            table.add_row(vec![
                Cell::new("Drafted?"),
                Cell::new("True")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Rule"), Cell::new(rule_label(summary.rule))]);
            table.add_row(vec![Cell::new("Round"), Cell::new(record.round)]);
            table.add_row(vec![Cell::new("Pick"), Cell::new(record.pick)]);
            table.add_row(vec![Cell::new("Drafted By"), Cell::new(&record.drafted_by)]);
            table.add_row(vec![
                Cell::new("Drafted From"),
                Cell::new(&record.drafted_from),
            ]);
        }
        None => {
            table.add_row(vec![
                Cell::new("Drafted?"),
                Cell::new("False").fg(Color::Yellow),
            ]);
        }
    }
    table
}

fn print_warnings(warnings: &[LoadWarning]) {
    if warnings.is_empty() {
        return;
    }
    eprintln!("Warnings:");
    for warning in warnings.iter().take(MAX_LISTED_WARNINGS) {
        eprintln!("- {warning}");
    }
    if warnings.len() > MAX_LISTED_WARNINGS {
        eprintln!("- ... and {} more", warnings.len() - MAX_LISTED_WARNINGS);
    }
}

fn rule_label(rule: Option<MatchRule>) -> &'static str {
    match rule {
        Some(MatchRule::FuzzyNameExactSchool) => "fuzzy name, exact school",
        Some(MatchRule::ExactNameFuzzySchool) => "exact name, fuzzy school",
        None => "-",
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
