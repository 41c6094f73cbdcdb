//! Applying finding fixes to source text

use tracing::debug;

use crate::error::Result;
use crate::models::finding::{Finding, Fix};

/// Upper bound on analyze-and-fix rounds for one file
pub const MAX_FIX_PASSES: usize = 10;

/// Result of fixing one source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub output: String,
    /// Total edits applied across all passes
    pub applied: usize,
    pub passes: usize,
    /// Findings left after the last pass
    pub remaining: Vec<Finding>,
}

impl FixOutcome {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Apply the fixes of `findings` to `source` in a single pass
///
/// Fixes are applied in span order. A fix overlapping one already applied,
/// or whose span is not a valid range of `source`, is skipped. Returns the
/// new text and the number of fixes applied.
pub fn apply_fixes(source: &str, findings: &[Finding]) -> (String, usize) {
    let mut fixes: Vec<&Fix> = findings.iter().map(|finding| &finding.fix).collect();
    fixes.sort_by_key(|fix| (fix.span.start, fix.span.end));

    let mut output = String::with_capacity(source.len() + fixes.len() * "export ".len());
    let mut cursor = 0usize;
    let mut applied = 0usize;

    for fix in fixes {
        let start = fix.span.start as usize;
        let end = fix.span.end as usize;
        if start < cursor {
            debug!(start, end, "skipping overlapping fix");
            continue;
        }
        let (Some(before), Some(_)) = (source.get(cursor..start), source.get(start..end)) else {
            debug!(start, end, "skipping fix outside the source text");
            continue;
        };

        output.push_str(before);
        output.push_str(&fix.replacement);
        cursor = end;
        applied += 1;
    }

    output.push_str(&source[cursor..]);
    (output, applied)
}

/// Analyze and fix repeatedly until no fixable findings remain
///
/// `analyze` is re-run on each intermediate text, so fixes always apply to
/// spans of the text they were computed from. Only a failure on the input
/// text is an error: when a fixed text no longer analyzes, fixing stops at
/// the last text that did, with that text's findings as `remaining`.
pub fn fix_until_stable<F>(source: &str, mut analyze: F) -> Result<FixOutcome>
where
    F: FnMut(&str) -> Result<Vec<Finding>>,
{
    let mut current = source.to_string();
    let mut findings = analyze(&current)?;
    let mut applied = 0;

    for pass in 1..=MAX_FIX_PASSES {
        if findings.is_empty() {
            return Ok(FixOutcome {
                output: current,
                applied,
                passes: pass,
                remaining: findings,
            });
        }

        let (next, count) = apply_fixes(&current, &findings);
        debug!(pass, count, "applied fixes");
        if count == 0 {
            return Ok(FixOutcome {
                output: current,
                applied,
                passes: pass,
                remaining: findings,
            });
        }

        match analyze(&next) {
            Ok(next_findings) => {
                applied += count;
                current = next;
                findings = next_findings;
            }
            Err(err) => {
                debug!(pass, error = %err, "fixed text no longer analyzes, keeping previous text");
                return Ok(FixOutcome {
                    output: current,
                    applied,
                    passes: pass,
                    remaining: findings,
                });
            }
        }
    }

    Ok(FixOutcome {
        output: current,
        applied,
        passes: MAX_FIX_PASSES,
        remaining: findings,
    })
}
