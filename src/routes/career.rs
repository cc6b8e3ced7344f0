use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};

use crate::{
    components::career_filter::FilterChange, error::AppError, message::FilterForm,
    state::SharedState,
};

pub async fn toggle_expand_handler(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<Redirect, AppError> {
    let mut chat = state.chat.lock().await;
    let card = chat
        .card_mut(index)
        .ok_or_else(|| AppError::NotFound(format!("no career card at {index}")))?;
    card.toggle_expand();
    Ok(Redirect::to("/"))
}

// Own route, so a bookmark click never reaches the expand handler.
pub async fn toggle_bookmark_handler(
    State(state): State<SharedState>,
    Path(index): Path<usize>,
) -> Result<Redirect, AppError> {
    let mut chat = state.chat.lock().await;
    let card = chat
        .card_mut(index)
        .ok_or_else(|| AppError::NotFound(format!("no career card at {index}")))?;
    card.toggle_bookmark();
    Ok(Redirect::to("/"))
}

pub async fn filter_handler(
    State(state): State<SharedState>,
    Path(field): Path<String>,
    Form(form): Form<FilterForm>,
) -> Result<Redirect, AppError> {
    let change = FilterChange::parse(&field, &form.value)?;
    state.filter.lock().await.apply(change);
    Ok(Redirect::to("/"))
}

pub async fn reset_filter_handler(State(state): State<SharedState>) -> Redirect {
    state.filter.lock().await.reset();
    Redirect::to("/")
}
