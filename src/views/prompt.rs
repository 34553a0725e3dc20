use crate::api::CommentInput;

/// Author recorded when the author prompt is left blank.
pub const DEFAULT_AUTHOR_EMAIL: &str = "user@example.com";

/// Source of free-text answers, e.g. a terminal or a scripted test double.
pub trait Prompter {
    /// Ask for one line of text. `None` means the prompt was dismissed.
    fn ask(&mut self, label: &str) -> Option<String>;
}

/// Ask for a comment's content, then its author.
///
/// Both prompts are always asked. Blank or dismissed content yields `None`.
pub fn comment_draft(prompter: &mut dyn Prompter, task_id: &str) -> Option<CommentInput> {
    let content = prompter.ask("Comment");
    let author_email = prompter
        .ask("Author email")
        .map(|email| email.trim().to_string())
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| DEFAULT_AUTHOR_EMAIL.to_string());
    let content = content.filter(|text| !text.trim().is_empty())?;
    Some(CommentInput {
        task_id: task_id.to_string(),
        content,
        author_email,
    })
}
