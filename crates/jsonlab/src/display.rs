use crate::prelude::*;
use crate::prelude::{eprintln, println};
use colored::Colorize;
use jsonlab_core::rank::title_length;
use jsonlab_core::records::{Comment, Post, Todo, UserSummary};
use serde::Serialize;

const RULE_WIDTH: usize = 50;
const COMMENT_PREVIEW_CHARS: usize = 60;

/// A record that can be listed in a result section
pub trait Entry: Serialize {
    /// Labelled fields, in display order
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl Entry for Post {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Length", format!("{} characters", title_length(self))),
            ("User ID", self.user_id.to_string()),
        ]
    }
}

impl Entry for Comment {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            (
                "Comment",
                format!("{}...", preview(&self.body, COMMENT_PREVIEW_CHARS)),
            ),
        ]
    }
}

impl Entry for UserSummary {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Username", self.username.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
        ]
    }
}

impl Entry for Todo {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let status = if self.completed {
            "Completed"
        } else {
            "Not completed"
        };

        vec![
            ("Task", self.title.clone()),
            ("Status", status.to_string()),
            ("User ID", self.user_id.to_string()),
        ]
    }
}

/// First `max_chars` characters of `text`, never splitting a character
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Render a titled section with one numbered block per record
pub fn format_section_text<T: Entry>(title: &str, items: &[T]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", title.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "─".repeat(RULE_WIDTH).bright_black()));

    for (idx, item) in items.iter().enumerate() {
        result.push_str(&format!("{}\n", format!("{}.", idx + 1).yellow()));
        for (label, value) in item.fields() {
            result.push_str(&format!("   {}: {}\n", label.green(), value));
        }
        result.push('\n');
    }

    result
}

#[derive(Serialize)]
struct SectionOutput<'a, T> {
    section: &'a str,
    items: &'a [T],
}

/// Render a section as a single line of JSON
pub fn format_section_json<T: Serialize>(title: &str, items: &[T]) -> Result<String> {
    serde_json::to_string(&SectionOutput {
        section: title,
        items,
    })
    .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Print a section to stdout in the requested format
pub fn print_section<T: Entry>(title: &str, items: &[T], json: bool) -> Result<()> {
    if json {
        println!("{}", format_section_json(title, items)?);
    } else {
        // Sections already end with a blank line.
        anstream::print!("{}", format_section_text(title, items));
    }

    Ok(())
}

/// Report a settled unit: its section on success, `Error: ...` on stderr otherwise
///
/// Units launched on their own have no caller to propagate to, so every
/// failure ends here, including one while printing the section.
pub fn report_unit<T: Entry>(title: &str, settled: Settled<Vec<T>>, json: bool) {
    let outcome = match settled {
        Ok(items) => print_section(title, &items, json),
        Err(err) => Err(err.into()),
    };

    if let Err(err) = outcome {
        eprintln!("Error: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short", 60), "short");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("héllo wörld", 4), "héll");
        assert_eq!(preview("abc", 0), "");
    }

    #[test]
    fn test_format_posts_section() {
        plain();
        let posts = vec![Post {
            id: 1,
            user_id: 7,
            title: "abcd".to_string(),
            body: String::new(),
        }];

        let text = format_section_text("A.i - POSTS (sorted by title length)", &posts);

        assert!(text.starts_with("\nA.i - POSTS (sorted by title length)\n"));
        assert!(text.contains(&"─".repeat(50)));
        assert!(text.contains("1.\n   Title: abcd\n   Length: 4 characters\n   User ID: 7\n\n"));
    }

    #[test]
    fn test_format_comment_body_preview() {
        plain();
        let comments = vec![Comment {
            id: 1,
            post_id: 1,
            name: "id labore ex et quam laborum".to_string(),
            email: "Eliseo@gardner.biz".to_string(),
            body: "x".repeat(100),
        }];

        let text = format_section_text("A.ii - COMMENTS (sorted by name)", &comments);

        let expected = format!("   Comment: {}...\n", "x".repeat(60));
        assert!(text.contains(&expected));
        assert!(text.contains("   Email: Eliseo@gardner.biz\n"));
    }

    #[test]
    fn test_format_users_section() {
        plain();
        let users = vec![UserSummary {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031 x56442".to_string(),
        }];

        let text = format_section_text("B.i - USERS (selected fields only)", &users);

        assert!(text.contains(
            "   Name: Leanne Graham\n   Username: Bret\n   Email: Sincere@april.biz\n   Phone: 1-770-736-8031 x56442\n"
        ));
    }

    #[test]
    fn test_format_todo_status() {
        plain();
        let todos = vec![
            Todo {
                id: 1,
                user_id: 1,
                title: "delectus aut autem".to_string(),
                completed: false,
            },
            Todo {
                id: 2,
                user_id: 1,
                title: "fugiat veniam minus".to_string(),
                completed: true,
            },
        ];

        let text = format_section_text("todos", &todos);

        assert!(text.contains("1.\n   Task: delectus aut autem\n   Status: Not completed\n"));
        assert!(text.contains("2.\n   Task: fugiat veniam minus\n   Status: Completed\n"));
    }

    #[test]
    fn test_format_empty_section_has_only_header() {
        plain();
        let text = format_section_text::<Todo>("empty", &[]);
        assert_eq!(text, format!("\nempty\n{}\n", "─".repeat(50)));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot serialize"))
        }
    }

    impl Entry for Unserializable {
        fn fields(&self) -> Vec<(&'static str, String)> {
            Vec::new()
        }
    }

    #[test]
    fn test_print_section_propagates_json_failure() {
        let result = print_section("broken", &[Unserializable], true);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("JSON serialization failed"));
    }

    #[test]
    fn test_print_section_text_succeeds() {
        plain();
        assert!(print_section("empty", &[] as &[Todo], false).is_ok());
    }

    #[test]
    fn test_format_section_json() {
        let todos = vec![Todo {
            id: 3,
            user_id: 1,
            title: "fugiat".to_string(),
            completed: false,
        }];

        let line = format_section_json("todos", &todos).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert!(!line.contains('\n'));
        assert_eq!(value["section"], "todos");
        assert_eq!(value["items"][0]["userId"], 1);
        assert_eq!(value["items"][0]["completed"], false);
    }
}
