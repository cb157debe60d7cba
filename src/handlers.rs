use std::sync::Arc;

use axum::extract::{Form, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::error::AppError;
use crate::poll;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VoteForm {
    pub choice_id: i32,
}

#[derive(Deserialize)]
pub struct NewPollForm {
    pub text: String,
    pub options: String,
}

/// GET / : the current poll with live tallies, or a no-poll notice.
pub async fn show_poll(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let mut ctx = state.base_context();
    match poll::current_poll(&state.pool).await? {
        Some(current) => {
            ctx.insert("no_poll", &false);
            ctx.insert("question", &current.question);
            ctx.insert("results", &current.results);
        }
        None => ctx.insert("no_poll", &true),
    }
    Ok(Html(state.templates.render("poll.html", &ctx)?))
}

/// POST /vote : record a vote, then bounce back to the poll page.
pub async fn submit_vote(
    State(state): State<Arc<AppState>>,
    Form(form): Form<VoteForm>,
) -> Result<Redirect, AppError> {
    poll::cast_vote(&state.pool, &state.cache, form.choice_id).await?;
    Ok(Redirect::to("/"))
}

/// GET /admin : the empty poll-creation form.
pub async fn admin_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let ctx = state.base_context();
    Ok(Html(state.templates.render("admin.html", &ctx)?))
}

/// POST /admin : create a new poll from the submitted form.
pub async fn create_poll(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewPollForm>,
) -> Result<Redirect, AppError> {
    poll::create_poll(&state.pool, &state.cache, &form.text, &form.options).await?;
    Ok(Redirect::to("/"))
}
