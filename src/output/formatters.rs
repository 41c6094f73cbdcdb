//! Output formatting functionality

use ansi_term::Colour::{Green, Red, Yellow};
use ansi_term::Style;

use crate::error::Result;
use crate::models::config::Severity;
use crate::models::finding::{CheckResults, FileError, FileReport, Finding};

/// Word printed next to each finding
pub fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Warn => "warning",
        Severity::Error | Severity::Off => "error",
    }
}

fn paint_label(label: &str, use_colors: bool) -> String {
    if !use_colors {
        return label.to_string();
    }
    match label {
        "warning" => Yellow.paint(label).to_string(),
        _ => Red.paint(label).to_string(),
    }
}

/// Format one finding as `path:line:col  error  message  rule-id`
pub fn format_finding_text(
    report: &FileReport,
    finding: &Finding,
    label: &str,
    use_colors: bool,
) -> String {
    let location = format!(
        "{}:{}:{}",
        report.path.display(),
        finding.start.line,
        finding.start.column
    );
    let location = if use_colors {
        Style::new().underline().paint(location).to_string()
    } else {
        location
    };
    let rule_id = if use_colors {
        Style::new().dimmed().paint(finding.rule_id.as_str()).to_string()
    } else {
        finding.rule_id.clone()
    };

    format!(
        "{}  {}  {}  {}\n",
        location,
        paint_label(label, use_colors),
        finding.message,
        rule_id
    )
}

/// Format every finding of a file, plus fix details in verbose mode
pub fn format_report_text(report: &FileReport, label: &str, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    for finding in &report.findings {
        output.push_str(&format_finding_text(report, finding, label, use_colors));

        if verbose {
            let preview = finding.fix.replacement.lines().next().unwrap_or_default();
            output.push_str(&format!("    fix: {}\n", preview));
        }
    }

    if report.fixes_applied > 0 {
        let verb = if report.fixed_source.is_some() {
            "would fix"
        } else {
            "fixed"
        };
        let line = format!(
            "{}  {} {} declaration(s)\n",
            report.path.display(),
            verb,
            report.fixes_applied
        );
        if use_colors {
            output.push_str(&Green.paint(line).to_string());
        } else {
            output.push_str(&line);
        }
    }

    output
}

/// Format a file that could not be checked
pub fn format_file_error_text(error: &FileError, use_colors: bool) -> String {
    let tag = if use_colors {
        Yellow.paint("skipped").to_string()
    } else {
        "skipped".to_string()
    };
    format!("{}  {}  {}\n", error.path.display(), tag, error.message)
}

/// Format the closing summary line(s)
pub fn format_summary_text(results: &CheckResults, use_colors: bool) -> String {
    let summary = &results.summary;
    let mut output = String::new();

    if summary.total_findings == 0 {
        let line = format!("No problems found in {} file(s)", summary.files_checked);
        if use_colors {
            output.push_str(&format!("{} {}\n", Green.paint("✔"), line));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    } else {
        let line = format!(
            "{} problem(s) in {} of {} file(s)",
            summary.total_findings, summary.files_with_findings, summary.files_checked
        );
        if use_colors {
            output.push_str(&format!("{} {}\n", Red.bold().paint("✖"), Red.bold().paint(line)));
        } else {
            output.push_str(&format!("{}\n", line));
        }
    }

    if summary.fixes_applied > 0 {
        output.push_str(&format!("{} fix(es) applied\n", summary.fixes_applied));
    }

    if summary.files_failed > 0 {
        output.push_str(&format!("{} file(s) could not be checked\n", summary.files_failed));
    }

    output
}

/// Serialize the full results as JSON
pub fn format_results_json(results: &CheckResults, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };
    Ok(json + "\n")
}
