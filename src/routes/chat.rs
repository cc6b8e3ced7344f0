use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Path, State},
    response::{Html, Redirect},
};
use tracing::debug;

use crate::{
    error::AppError,
    message::SubmitForm,
    services::chat::run_ask,
    state::SharedState,
    view::{PageView, TranscriptView, render_page},
};

pub async fn page_handler(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    let criteria = *state.active_filters.borrow();
    let page = {
        let chat = state.chat.lock().await;
        PageView::build(&chat, &criteria)
    };
    Ok(Html(render_page(&state.templates, &page)?))
}

/// Records the user turn right away and runs the ask in the background.
pub async fn submit_handler(
    State(state): State<SharedState>,
    Form(form): Form<SubmitForm>,
) -> Redirect {
    let ticket = {
        let mut chat = state.chat.lock().await;
        chat.set_draft(form.query.as_str());
        chat.begin_submit(&form.query)
    };

    match ticket {
        Some(ticket) => {
            let state = Arc::clone(&state);
            tokio::spawn(async move {
                let outcome = run_ask(state.asker.as_ref(), &ticket).await;
                state.chat.lock().await.complete(ticket, outcome);
            });
        }
        None => debug!("submit ignored"),
    }

    Redirect::to("/")
}

pub async fn clear_handler(State(state): State<SharedState>) -> Redirect {
    state.chat.lock().await.clear();
    Redirect::to("/")
}

pub async fn sample_question_handler(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<Redirect, AppError> {
    if !state.chat.lock().await.use_sample_question(index) {
        return Err(AppError::NotFound(format!("no sample question {index}")));
    }
    Ok(Redirect::to("/"))
}

pub async fn transcript_handler(
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let filters = *state.active_filters.borrow();
    let chat = state.chat.lock().await;
    let body = serde_json::to_value(TranscriptView {
        messages: chat.messages(),
        is_waiting: chat.is_waiting(),
        filters,
    })
    .map_err(anyhow::Error::from)?;
    Ok(Json(body))
}
