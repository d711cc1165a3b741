use serde::{Deserialize, Serialize};

// Records are not validated beyond what the rules read: only ranking keys
// and projected fields are required, everything else falls back to a default.

/// Blog post from the `/posts` collection
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Comment from the `/comments` collection
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub post_id: u64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub body: String,
}

/// User from the `/users` collection
///
/// Only the fields the pipeline projects are typed. Everything else the API
/// returns (address, company, website, ...) is kept in `extra`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Projection of a [`User`] down to the five fields the users rule keeps
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            phone: user.phone,
        }
    }
}

/// Task from the `/todos` collection
///
/// A todo without a `completed` flag counts as not completed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_camel_case() {
        let json = r#"{"userId": 7, "id": 3, "title": "hello", "body": "world"}"#;
        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.id, 3);
        assert_eq!(post.user_id, 7);
        assert_eq!(post.title, "hello");
    }

    #[test]
    fn test_post_requires_title() {
        let json = r#"{"userId": 7, "id": 3, "body": "world"}"#;
        let result: Result<Post, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_post_without_body_or_user_decodes() {
        let json = r#"[{"id": 3, "title": "hello"}]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();

        assert_eq!(posts[0].title, "hello");
        assert_eq!(posts[0].user_id, 0);
        assert!(posts[0].body.is_empty());
    }

    #[test]
    fn test_comment_without_email_decodes() {
        let json = r#"[
            {"postId": 1, "id": 1, "name": "b", "body": "x"},
            {"postId": 1, "id": 2, "name": "a", "email": "a@x.io", "body": "y"}
        ]"#;
        let comments: Vec<Comment> = serde_json::from_str(json).unwrap();

        assert_eq!(comments.len(), 2);
        assert!(comments[0].email.is_empty());
        assert_eq!(comments[1].email, "a@x.io");
    }

    #[test]
    fn test_comment_requires_name() {
        let json = r#"{"postId": 1, "id": 2, "email": "e@x.io", "body": "b"}"#;
        let result: Result<Comment, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_requires_projected_fields() {
        let json = r#"{"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz"}"#;
        let result: Result<User, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_todo_without_completed_is_open() {
        let json = r#"{"id": 5, "title": "no flag"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();

        assert!(!todo.completed);
        assert_eq!(todo.user_id, 0);
    }

    #[test]
    fn test_comment_deserializes_post_id() {
        let json = r#"{"postId": 1, "id": 2, "name": "n", "email": "e@x.io", "body": "b"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();

        assert_eq!(comment.post_id, 1);
        assert_eq!(comment.email, "e@x.io");
    }

    #[test]
    fn test_user_keeps_unknown_fields_as_extra() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {"name": "Romaguera-Crona"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.username, "Bret");
        assert_eq!(user.extra.len(), 2);
        assert!(user.extra.contains_key("website"));
        assert!(user.extra.contains_key("company"));
    }

    #[test]
    fn test_user_summary_serializes_exactly_five_fields() {
        let user = User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031".to_string(),
            extra: serde_json::Map::from_iter([(
                "website".to_string(),
                serde_json::Value::String("hildegard.org".to_string()),
            )]),
        };

        let summary = UserSummary::from(&user);
        let value = serde_json::to_value(&summary).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["email", "id", "name", "phone", "username"]);
    }

    #[test]
    fn test_todo_deserializes_completed_flag() {
        let json = r#"{"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();

        assert!(!todo.completed);
        assert_eq!(todo.user_id, 1);
    }
}
