//! Callback style: every unit reports through a completion function.
//!
//! Each call spawns its own task and returns immediately. The callback is an
//! `FnOnce`, so it is invoked exactly once, with either the ranked records or
//! the error that stopped the unit. Two units launched back to back are not
//! coordinated in any way; their output may interleave.

use crate::display::report_unit;
use crate::fetch::Api;
use crate::prelude::*;
use jsonlab_core::rank::{top_comments_by_name, top_posts_by_title_length};
use jsonlab_core::records::{Comment, Post};
use jsonlab_core::resource::Resource;
use tokio::task::JoinHandle;

/// Fetch posts and hand the three with the longest titles to `callback`
pub fn posts_by_title_length<F>(api: &Api, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Settled<Vec<Post>>) + Send + 'static,
{
    let api = api.clone();
    tokio::spawn(async move {
        let result = api
            .fetch::<Post>(Resource::Posts)
            .await
            .map(top_posts_by_title_length);
        callback(result);
    })
}

/// Fetch comments and hand the first three by name to `callback`
pub fn comments_by_name<F>(api: &Api, callback: F) -> JoinHandle<()>
where
    F: FnOnce(Settled<Vec<Comment>>) + Send + 'static,
{
    let api = api.clone();
    tokio::spawn(async move {
        let result = api
            .fetch::<Comment>(Resource::Comments)
            .await
            .map(top_comments_by_name);
        callback(result);
    })
}

/// Launch both callback units and return without waiting for either
pub fn launch(api: &Api, json: bool) -> Vec<JoinHandle<()>> {
    let posts = posts_by_title_length(api, move |result| {
        report_unit("A.i - POSTS (sorted by title length)", result, json)
    });

    let comments = comments_by_name(api, move |result| {
        report_unit("A.ii - COMMENTS (sorted by name)", result, json)
    });

    vec![posts, comments]
}
