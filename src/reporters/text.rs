//! Text (terminal) reporter with colors and formatting

use super::DocumentReport;
use crate::models::Severity;
use anyhow::Result;

/// Grade colors (ANSI escape codes)
fn grade_color(grade: &str) -> &'static str {
    match grade {
        "A" => "\x1b[32m", // Green
        "B" => "\x1b[92m", // Light green
        "C" => "\x1b[33m", // Yellow
        "D" => "\x1b[91m", // Light red
        "F" => "\x1b[31m", // Red
        _ => "\x1b[0m",
    }
}

/// Severity colors
fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "\x1b[91m",   // Light red
        Severity::Medium => "\x1b[33m", // Yellow
        Severity::Low => "\x1b[34m",    // Blue
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Severity tag
fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "[H]",
        Severity::Medium => "[M]",
        Severity::Low => "[L]",
    }
}

/// Render reports as formatted terminal output
pub fn render(reports: &[DocumentReport]) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        render_one(report, &mut out);
    }
    Ok(out)
}

fn render_one(report: &DocumentReport, out: &mut String) {
    let result = &report.result;
    let score = &result.score;
    let m = &result.metrics;

    // Header
    let grade = report.grade();
    let grade_c = grade_color(grade);
    out.push_str(&format!("\n{BOLD}{}{RESET}\n", report.source));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {BOLD}{}/100{RESET}  Grade: {grade_c}{BOLD}{}{RESET}  ",
        score.total, grade
    ));
    out.push_str(&format!(
        "Words: {}  Readability: {:.0}  Keywords: {} ({:.1}%)\n\n",
        m.word_count, m.readability_index, m.keyword_count, m.keyword_density_percent
    ));

    // Components (compact)
    out.push_str(&format!("{BOLD}COMPONENTS{RESET}\n"));
    for (name, points, cap) in score.components() {
        let value = match cap {
            Some(cap) => format_points(points, cap),
            None => format!("+{}", points),
        };
        out.push_str(&format!("  {:<16} {}\n", name, value));
    }
    out.push('\n');

    // Suggestions summary
    let summary = result.summary();
    out.push_str(&format!(
        "{BOLD}SUGGESTIONS{RESET} ({} total)\n",
        summary.total
    ));

    let mut summary_parts = Vec::new();
    if summary.high > 0 {
        summary_parts.push(format!("\x1b[91m{} high{RESET}", summary.high));
    }
    if summary.medium > 0 {
        summary_parts.push(format!("\x1b[33m{} medium{RESET}", summary.medium));
    }
    if summary.low > 0 {
        summary_parts.push(format!("\x1b[34m{} low{RESET}", summary.low));
    }
    if !summary_parts.is_empty() {
        out.push_str(&format!("  {}\n\n", summary_parts.join(" | ")));
    }

    for suggestion in &result.suggestions {
        let sev_c = severity_color(suggestion.severity);
        let sev_tag = severity_tag(suggestion.severity);
        let fix = if suggestion.is_auto_applicable() {
            "auto"
        } else {
            "manual"
        };
        out.push_str(&format!(
            "  {sev_c}{}{RESET}  {:<18} {}  {DIM}{}{RESET}\n",
            sev_tag,
            suggestion.kind.as_str(),
            suggestion.message,
            fix
        ));
    }
    if !result.suggestions.is_empty() {
        out.push('\n');
    }

    if let Some(explanation) = &report.explanation {
        out.push_str(explanation);
        out.push_str("\n\n");
    }

    // Tips based on grade
    match grade {
        "A" if result.suggestions.is_empty() => {
            out.push_str(&format!("{DIM}Nothing to fix. Great work.{RESET}\n"))
        }
        "A" | "B" => out.push_str(&format!(
            "{DIM}Good shape. Address remaining suggestions for a higher score.{RESET}\n"
        )),
        _ if result.has_auto_fixes() => out.push_str(&format!(
            "{DIM}Run `contentscore fix {}` to apply automatic fixes.{RESET}\n",
            report.source
        )),
        _ => {}
    }
}

fn format_points(points: u32, cap: u32) -> String {
    let ratio = f64::from(points) / f64::from(cap.max(1));
    let color = if ratio >= 0.8 {
        "\x1b[32m"
    } else if ratio >= 0.5 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!("{color}{}{RESET}/{}", points, cap)
}
