//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments on content repositories
//! - Editorial review checklists

use super::DocumentReport;
use crate::models::Severity;
use anyhow::Result;
use chrono::Local;

/// Render reports as GitHub-flavored Markdown
pub fn render(reports: &[DocumentReport]) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(reports));
    md.push('\n');

    for report in reports {
        md.push_str(&render_document(report));
        md.push('\n');
    }

    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(reports: &[DocumentReport]) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let average = if reports.is_empty() {
        0.0
    } else {
        reports
            .iter()
            .map(|r| f64::from(r.result.score.total))
            .sum::<f64>()
            / reports.len() as f64
    };

    format!(
        r#"# Content Score Report

**Documents: {}** | **Average score: {:.1}/100**

Generated: {}
"#,
        reports.len(),
        average,
        timestamp
    )
}

fn grade_emoji(grade: &str) -> &'static str {
    match grade {
        "A" => "🏆",
        "B" => "⭐",
        "C" => "⚠️",
        "D" => "❌",
        "F" => "💀",
        _ => "❓",
    }
}

fn severity_emoji(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🟠",
        Severity::Medium => "🟡",
        Severity::Low => "🔵",
    }
}

fn render_document(report: &DocumentReport) -> String {
    let result = &report.result;
    let score = &result.score;
    let m = &result.metrics;
    let grade = report.grade();

    let mut md = format!(
        "## {} `{}`\n\n**Grade: {}** | **Score: {}/100**\n\n",
        grade_emoji(grade),
        report.source,
        grade,
        score.total
    );

    md.push_str("### Components\n\n| Component | Points | Max |\n|-----------|--------|-----|\n");
    for (name, points, cap) in score.components() {
        let max = cap.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string());
        md.push_str(&format!("| {} | {} | {} |\n", name, points, max));
    }
    md.push('\n');

    md.push_str(&format!(
        r#"### Key Metrics

| Metric | Value |
|--------|-------|
| Words | {} |
| Unique words | {:.1}% |
| Readability | {:.1} |
| Keywords | {} |
| Keyword density | {:.2}% |
| Headings (h1/h2/h3) | {}/{}/{} |
| Title length | {}{} |
| Description length | {}{} |

"#,
        m.word_count,
        m.unique_word_ratio * 100.0,
        m.readability_index,
        m.keyword_count,
        m.keyword_density_percent,
        m.heading_counts.h1,
        m.heading_counts.h2,
        m.heading_counts.h3,
        m.title_length,
        if m.title_optimal { " ✅" } else { "" },
        m.description_length,
        if m.description_optimal { " ✅" } else { "" },
    ));

    md.push_str("### Suggestions\n\n");
    if result.suggestions.is_empty() {
        md.push_str("Nothing to fix. 🎉\n");
    }
    for suggestion in &result.suggestions {
        md.push_str(&format!(
            "- [ ] {} **{}** `{}`: {}\n",
            severity_emoji(suggestion.severity),
            suggestion.severity,
            suggestion.kind,
            suggestion.message
        ));
        if let Some(action) = &suggestion.remediation {
            for step in &action.steps {
                md.push_str(&format!("  - {}\n", step));
            }
        }
    }

    if let Some(explanation) = &report.explanation {
        md.push_str("\n<details>\n<summary>Score explanation</summary>\n\n");
        md.push_str(explanation);
        md.push_str("\n\n</details>\n");
    }

    md
}

fn render_footer() -> String {
    "---\n\n*Generated by contentscore*\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_render() {
        let report = test_report();
        let md = render(std::slice::from_ref(&report)).expect("render markdown");
        assert!(md.starts_with("# Content Score Report"));
        assert!(md.contains("| Content length |"));
        assert!(md.contains("`short-content`"));
        assert!(md.contains("- [ ]"));
    }

    #[test]
    fn test_markdown_explanation_is_collapsed() {
        let report = test_report().with_explanation("details here".to_string());
        let md = render(&[report]).expect("render markdown");
        assert!(md.contains("<details>"));
        assert!(md.contains("details here"));
    }

    #[test]
    fn test_markdown_empty() {
        let md = render(&[]).expect("render markdown");
        assert!(md.contains("**Documents: 0**"));
    }
}
