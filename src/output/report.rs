use crate::error::OutputError;
use crate::verify::{Issue, Report};

/// Console rendering: one block per issue, then a summary line
pub fn render_text(report: &Report) -> String {
    let mut content = String::new();

    for issue in report.issues() {
        content.push_str(&format_issue(issue));
        content.push('\n');
    }

    content.push_str(&summary_line(report));
    content.push('\n');
    content
}

/// The report as pretty-printed JSON
pub fn render_json(report: &Report) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn summary_line(report: &Report) -> String {
    if report.is_clean() {
        return "No issue found.".to_string();
    }
    format!(
        "{} issue(s): {} error(s), {} warning(s).",
        report.len(),
        report.errors().len(),
        report.warnings().len()
    )
}

fn format_issue(issue: &Issue) -> String {
    let mut block = String::new();
    block.push_str(&format!(
        "{:<8}{} @ {}\n",
        issue.level.to_string(),
        issue.code,
        issue.location
    ));
    block.push_str(&format!("        {}\n", issue.description));
    block.push_str(&format!("        Advice: {}\n", issue.advice));
    block
}
