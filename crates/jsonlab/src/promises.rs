//! Deferred style: every unit returns a value that settles later.
//!
//! A [`Deferred`] starts running as soon as it is created, like an eager
//! promise, and resolves exactly once to `Ok` or `Err`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};

use crate::display::report_unit;
use crate::fetch::Api;
use crate::prelude::*;
use futures::FutureExt;
use jsonlab_core::rank::{first_open_todos, first_user_summaries};
use jsonlab_core::records::{Todo, User, UserSummary};
use jsonlab_core::resource::Resource;
use tokio::task::JoinHandle;

/// Eventual result of a unit already running on the runtime
#[must_use = "a deferred value does nothing unless awaited or reported"]
pub struct Deferred<T> {
    handle: JoinHandle<Settled<T>>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Start `future` immediately and return its deferred result
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Settled<T>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }
}

impl<T> Future for Deferred<T> {
    type Output = Settled<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Self::Output> {
        self.handle.poll_unpin(cx).map(|joined| match joined {
            Ok(settled) => settled,
            Err(err) => Err(Error::Task(err.to_string())),
        })
    }
}

/// Fetch users and project the first three to their summary fields
pub fn users_with_selected_fields(api: &Api) -> Deferred<Vec<UserSummary>> {
    let api = api.clone();
    Deferred::spawn(async move {
        api.fetch::<User>(Resource::Users)
            .await
            .map(first_user_summaries)
    })
}

/// Fetch todos and keep the first three that are not completed
pub fn open_todos(api: &Api) -> Deferred<Vec<Todo>> {
    let api = api.clone();
    Deferred::spawn(async move {
        api.fetch::<Todo>(Resource::Todos)
            .await
            .map(first_open_todos)
    })
}

/// Start both deferred units, each reporting on its own, and return at once
pub fn launch(api: &Api, json: bool) -> Vec<JoinHandle<()>> {
    let users = users_with_selected_fields(api);
    let todos = open_todos(api);

    vec![
        tokio::spawn(async move {
            report_unit("B.i - USERS (selected fields only)", users.await, json);
        }),
        tokio::spawn(async move {
            report_unit("B.ii - TODOS (uncompleted tasks only)", todos.await, json);
        }),
    ]
}
