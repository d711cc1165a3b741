//! Ranking and filtering rules
//!
//! Each rule takes a whole collection and returns at most [`TOP_K`] records.
//! All sorts are stable: records that compare equal keep their source order.

use crate::collation::locale_compare;
use crate::records::{Comment, Post, Todo, User, UserSummary};

/// Number of records every rule keeps
pub const TOP_K: usize = 3;

/// Length of a post title in UTF-16 code units
///
/// Characters outside the Basic Multilingual Plane, such as most emoji,
/// count as two.
pub fn title_length(post: &Post) -> usize {
    post.title.encode_utf16().count()
}

/// Posts with the longest titles first
pub fn top_posts_by_title_length(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| title_length(b).cmp(&title_length(a)));
    posts.truncate(TOP_K);
    posts
}

/// Comments ordered by name using locale-aware collation
pub fn top_comments_by_name(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by(|a, b| locale_compare(&a.name, &b.name));
    comments.truncate(TOP_K);
    comments
}

/// First users in source order, projected to [`UserSummary`]
pub fn first_user_summaries(users: Vec<User>) -> Vec<UserSummary> {
    users
        .into_iter()
        .take(TOP_K)
        .map(UserSummary::from)
        .collect()
}

/// First todos that are not completed, in source order
pub fn first_open_todos(todos: Vec<Todo>) -> Vec<Todo> {
    todos
        .into_iter()
        .filter(|todo| !todo.completed)
        .take(TOP_K)
        .collect()
}
