//! App submission via a pre-filled GitHub issue.

use crate::util::{open_url, percent_encode};

/// Issue tracker receiving new app submissions.
pub const SUBMIT_ISSUES_URL: &str = "https://github.com/cortensor/community-projects/issues/new";

/// Categories offered on the submission form.
pub const SUBMIT_CATEGORIES: &[&str] = &["Oracle", "Research", "Analytics", "Bot", "Developer", "Agent"];

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Fields collected for a new app submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    /// App name (required).
    pub name: String,
    /// Author handle (required).
    pub author: String,
    /// Live app URL.
    pub url: String,
    /// Source repository URL.
    pub github: String,
    /// One of [`SUBMIT_CATEGORIES`] (required).
    pub category: String,
    /// Comma-separated tags.
    pub tags: String,
    /// What the app does (required).
    pub description: String,
}

impl SubmissionForm {
    /// What: Names of required fields that are still empty.
    ///
    /// Output:
    /// - Field names in form order; empty when the form can be submitted.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("author", &self.author),
            ("category", &self.category),
            ("description", &self.description),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    /// Whether all required fields are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// What: Issue title for this submission.
    #[must_use]
    pub fn issue_title(&self) -> String {
        format!("[New App] {}", self.name)
    }

    /// What: Markdown issue body for this submission.
    #[must_use]
    pub fn issue_body(&self) -> String {
        format!(
            "## App Submission\n\
             \n\
             **Name:** {}\n\
             **Author:** {}\n\
             **URL:** {}\n\
             **GitHub:** {}\n\
             **Category:** {}\n\
             **Tags:** {}\n\
             \n\
             **Description:**\n\
             {}\n\
             \n\
             ---\n\
             _Submitted via CortexHub_",
            self.name,
            self.author,
            self.url,
            self.github,
            self.category,
            self.tags,
            self.description
        )
        .trim()
        .to_string()
    }

    /// What: Pre-filled "new issue" URL carrying title and body.
    #[must_use]
    pub fn issue_url(&self) -> String {
        format!(
            "{SUBMIT_ISSUES_URL}?title={}&body={}",
            percent_encode(&self.issue_title()),
            percent_encode(&self.issue_body())
        )
    }
}

/// What: Validate a submission and open its issue URL in the browser.
///
/// Inputs:
/// - `form`: Submission fields
///
/// Output:
/// - `Ok(url)` with the opened URL.
///
/// # Errors
/// - Returns `Err` listing missing required fields
pub fn submit(form: &SubmissionForm) -> Result<String> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(format!("missing required fields: {}", missing.join(", ")).into());
    }
    if !SUBMIT_CATEGORIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(form.category.trim()))
    {
        tracing::warn!(category = %form.category, "submission uses a category outside the form list");
    }
    let url = form.issue_url();
    tracing::info!(name = %form.name, "opening submission issue");
    open_url(&url);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionForm {
        SubmissionForm {
            name: "My App".into(),
            author: "@me".into(),
            url: "https://myapp.com".into(),
            github: String::new(),
            category: "Oracle".into(),
            tags: "oracle, validation".into(),
            description: "Does things".into(),
        }
    }

    #[test]
    /// What: Required fields gate submission.
    ///
    /// - Input: Empty form, then a filled form
    /// - Output: All four required names listed; then none
    fn required_fields_gate_submission() {
        let empty = SubmissionForm::default();
        assert_eq!(
            empty.missing_fields(),
            vec!["name", "author", "category", "description"]
        );
        assert!(!empty.is_complete());
        let err = submit(&empty).expect_err("incomplete form");
        assert!(err.to_string().contains("missing required fields"));
        assert!(filled().is_complete());
    }

    #[test]
    /// What: Issue URL carries an encoded title and Markdown body.
    fn issue_url_encodes_title_and_body() {
        let form = filled();
        let body = form.issue_body();
        assert!(body.starts_with("## App Submission\n\n**Name:** My App\n**Author:** @me"));
        assert!(body.contains("**Tags:** oracle, validation"));
        assert!(body.contains("**Description:**\nDoes things"));
        assert!(body.ends_with("---\n_Submitted via CortexHub_"));

        let url = submit(&form).expect("submit");
        assert!(url.starts_with(
            "https://github.com/cortensor/community-projects/issues/new?title=%5BNew%20App%5D%20My%20App&body="
        ));
        assert!(url.contains("%23%23%20App%20Submission%0A%0A"));
        assert!(!url.contains(' '));
    }
}
