//! Command-line app submission.

use crate::args::Args;
use crate::logic::{SUBMIT_CATEGORIES, SubmissionForm, submit};

/// What: Build a submission form from command-line flags.
///
/// Details:
/// - Missing flags become empty fields; values are trimmed.
#[must_use]
pub fn form_from_args(args: &Args) -> SubmissionForm {
    let field = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or_default().to_string();
    SubmissionForm {
        name: field(&args.name),
        author: field(&args.author),
        url: field(&args.url),
        github: field(&args.github),
        category: field(&args.submit_category),
        tags: field(&args.tags),
        description: field(&args.description),
    }
}

/// What: Handle `--submit`: open the pre-filled issue and exit.
///
/// Output:
/// - Prints the issue URL and exits with code 0; prints the missing fields and exits with code 2.
pub fn handle_submit(args: &Args) -> ! {
    let form = form_from_args(args);
    match submit(&form) {
        Ok(url) => {
            println!("Opening submission issue in your browser:");
            println!("{url}");
            std::process::exit(0);
        }
        Err(e) => {
            tracing::warn!(error = %e, "submission rejected");
            eprintln!("{e}");
            eprintln!(
                "Required: --name --author --submit-category <{}> --description",
                SUBMIT_CATEGORIES.join("|")
            );
            std::process::exit(2);
        }
    }
}
