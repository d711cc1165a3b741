//! Sequential style: one unit after another, the first failure aborts the batch.

use crate::display::print_section;
use crate::fetch::Api;
use crate::prelude::*;
use crate::prelude::println;
use jsonlab_core::rank::{
    first_open_todos, first_user_summaries, top_comments_by_name, top_posts_by_title_length,
};
use jsonlab_core::records::{Comment, Post, Todo, User, UserSummary};
use jsonlab_core::resource::Resource;
use serde::Serialize;

/// Results of the four rules, gathered in one pass
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AllData {
    pub sorted_posts: Vec<Post>,
    pub sorted_comments: Vec<Comment>,
    pub filtered_users: Vec<UserSummary>,
    pub uncompleted_todos: Vec<Todo>,
}

/// Run posts, comments, users and todos strictly in that order
///
/// Each fetch starts only after the previous unit has settled. The first
/// error is returned as is and no later collection is requested.
pub async fn all_data(api: &Api) -> Settled<AllData> {
    let posts = api.fetch::<Post>(Resource::Posts).await?;
    let sorted_posts = top_posts_by_title_length(posts);

    let comments = api.fetch::<Comment>(Resource::Comments).await?;
    let sorted_comments = top_comments_by_name(comments);

    let users = api.fetch::<User>(Resource::Users).await?;
    let filtered_users = first_user_summaries(users);

    let todos = api.fetch::<Todo>(Resource::Todos).await?;
    let uncompleted_todos = first_open_todos(todos);

    Ok(AllData {
        sorted_posts,
        sorted_comments,
        filtered_users,
        uncompleted_todos,
    })
}

/// Run the batch and print every section, or return the error that stopped it
///
/// A failed unit surfaces as an [`Error`] inside the report; printing
/// failures propagate the same way.
pub async fn report(api: &Api, json: bool) -> Result<()> {
    let data = all_data(api).await?;

    if json {
        let line = serde_json::to_string(&data).wrap_err("JSON serialization failed")?;
        println!("{line}");
        return Ok(());
    }

    print_section("C/A.i - POSTS via async/await", &data.sorted_posts, false)?;
    print_section("C/A.ii - COMMENTS via async/await", &data.sorted_comments, false)?;
    print_section("C/B.i - USERS via async/await", &data.filtered_users, false)?;
    print_section("C/B.ii - TODOS via async/await", &data.uncompleted_todos, false)?;

    Ok(())
}
