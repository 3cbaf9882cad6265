//! Rendering an issue snapshot into note frontmatter, body, and file name.

use crate::error::Result;
use crate::github::{Comment, Issue};
use crate::note::{DATE_FORMAT, FrontMatter};
use chrono::{DateTime, Local};
use serde_yaml::Value;

/// Maximum length, in characters, of the title part of an issue file name.
pub const MAX_TITLE_CHARS: usize = 50;

pub const ISSUE_TAGS: [&str; 2] = ["github-issue", "imported"];

pub const IMPORTED_STATUS: &str = "imported";

/// `{created}-issue-{number}-{sanitized title}.md`
///
/// The title part and its separator are left out when nothing of the
/// title survives sanitization.
pub fn generate_issue_filename(issue: &Issue) -> String {
    let date = issue.created_at.format(DATE_FORMAT);
    let sanitized = sanitize_filename(&issue.title);
    let title = truncate_title(&sanitized);
    if title.is_empty() {
        format!("{}-issue-{}.md", date, issue.number)
    } else {
        format!("{}-issue-{}-{}.md", date, issue.number, title)
    }
}

/// Turn a free-form title into a lower-case, dash-separated file name part.
///
/// ASCII letters are lower-cased and ASCII digits kept. Whitespace, ASCII
/// punctuation, and other ASCII symbols become `-`. Non-ASCII characters are
/// kept as they are. Runs of `-` collapse and leading or trailing `-` are
/// dropped.
pub fn sanitize_filename(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        let mapped = if c.is_ascii_alphanumeric() {
            c.to_ascii_lowercase()
        } else if c.is_ascii() || c.is_whitespace() {
            '-'
        } else {
            c
        };
        if mapped == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(mapped);
    }
    out.trim_end_matches('-').to_string()
}

fn truncate_title(title: &str) -> &str {
    let end = title
        .char_indices()
        .nth(MAX_TITLE_CHARS)
        .map_or(title.len(), |(i, _)| i);
    title[..end].trim_end_matches('-')
}

/// Frontmatter for an imported issue. `now` is the import run's timestamp.
pub fn issue_frontmatter(issue: &Issue, now: &DateTime<Local>) -> Result<FrontMatter> {
    let mut fm = FrontMatter::new();
    fm.set_created(&issue.created_at)?;
    fm.insert("tags", ISSUE_TAGS.to_vec());
    fm.insert("status", IMPORTED_STATUS);
    fm.insert("issue_number", issue.number);
    fm.insert("issue_url", issue.url.as_str());
    fm.insert("state", issue.state.as_str());
    fm.insert("imported_at", now.to_rfc3339());
    fm.insert("original_updated", issue.updated_at.to_rfc3339());

    let assignees = issue.assignee_logins();
    if !assignees.is_empty() {
        fm.insert("assignees", assignees);
    }
    let labels = issue.label_names();
    if !labels.is_empty() {
        fm.insert("labels", labels);
    }
    if let Some(milestone) = issue.milestone_title() {
        fm.insert("milestone", Value::from(milestone));
    }
    Ok(fm)
}

/// Markdown body for an imported issue and its comments.
pub fn issue_markdown(issue: &Issue, comments: &[Comment], now: &DateTime<Local>) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Issue #{}: {}\n\n", issue.number, issue.title));
    md.push_str(&format!(
        "**Created by:** @{} on {}\n",
        issue.author.login,
        issue.created_at.format(DATE_FORMAT)
    ));

    let labels = issue.label_names();
    if !labels.is_empty() {
        md.push_str(&format!("**Labels:** {}\n", labels.join(", ")));
    }
    let assignees = issue.assignee_logins();
    if !assignees.is_empty() {
        let mentions: Vec<String> = assignees.iter().map(|a| format!("@{a}")).collect();
        md.push_str(&format!("**Assignees:** {}\n", mentions.join(", ")));
    }
    if let Some(milestone) = issue.milestone_title() {
        md.push_str(&format!("**Milestone:** {milestone}\n"));
    }
    md.push('\n');

    if !issue.body.is_empty() {
        md.push_str("## Description\n\n");
        md.push_str(&issue.body);
        md.push_str("\n\n");
    }

    if !comments.is_empty() {
        md.push_str("## Comments\n\n");
        for comment in comments {
            md.push_str(&format!(
                "### Comment by @{} on {}\n\n",
                comment.author.login,
                comment.created_at.format(DATE_FORMAT)
            ));
            md.push_str(&comment.body);
            md.push_str("\n\n");
        }
    }

    md.push_str("---\n");
    md.push_str(&format!(
        "*Issue automatically imported by krapp on {}*\n",
        now.to_rfc3339()
    ));
    md
}
