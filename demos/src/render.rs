//! Plain-text rendering of report tables and chart series.

use esgchart::{ChartLine, EsgReport, LongTable, NormalizedTable};

fn cell(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{x:.2}"))
}

/// Print a heading followed by a wide table, one row per observation.
pub fn print_table(heading: &str, table: &NormalizedTable) {
    println!("\n## {heading}");
    let cols = NormalizedTable::COLUMNS;
    println!(
        "{:<12} | {:<10} | {:>8} | {:>15} | {:>16} | {:>11}",
        cols[0], cols[1], cols[2], cols[3], cols[4], cols[5]
    );
    println!("{:-<13}|{:-<12}|{:-<10}|{:-<17}|{:-<18}|{:-<12}", "", "", "", "", "", "");
    for r in table {
        println!(
            "{:<12} | {:<10} | {:>8} | {:>15} | {:>16} | {:>11}",
            r.timestamp.format("%Y-%m-%d"),
            r.series_type.label(),
            cell(r.esg_score),
            cell(r.governance_score),
            cell(r.environment_score),
            cell(r.social_score),
        );
    }
    if table.is_empty() {
        println!("(no rows)");
    }
}

/// Print both tables of a report under their headings.
pub fn print_report(report: &EsgReport) {
    print_table(&report.company_heading(), &report.company);
    print_table(&report.peer_heading(), &report.peer);
}

/// Print a summary of a long table: row count per series type.
pub fn print_long_summary(long: &LongTable) {
    let company = long
        .iter()
        .filter(|r| r.series_type == esgchart::SeriesType::Company)
        .count();
    println!(
        "long table: {} rows ({} company, {} peer group)",
        long.len(),
        company,
        long.len() - company
    );
}

/// Print one chart line as `legend: date=score, ...`.
pub fn print_line(line: &ChartLine) {
    let pts: Vec<String> = line
        .points
        .iter()
        .map(|(t, v)| format!("{}={v:.2}", t.format("%Y-%m")))
        .collect();
    println!("  {:<24} {}", line.legend(), pts.join(", "));
}
