use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::{
    AppState,
    error::{AppError, AppResult},
    flash::Flash,
    links::{Linked, attach_links, movie_url, person_url},
    models::{MovieOrder, PersonOrder, SearchKind, SearchOutcome},
    templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/query/", get(search))
        .route("/nm/{nm}", get(person_detail))
        .route("/tt/{tt}", get(movie_detail))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn index(State(state): State<Arc<AppState>>, flash: Flash) -> AppResult<Response> {
    let stats = state.catalog.stats().await?;
    let person = state.catalog.random_person().await?.map(Linked::new);
    let movie = state.catalog.random_movie().await?.map(Linked::new);

    Ok(render(flash, StatusCode::OK, |flashes| {
        templates::home_page(&stats, flashes, person.as_ref(), movie.as_ref())
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    query: Option<String>,
    kind: Option<String>,
    order: Option<String>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Query(q): Query<SearchQuery>,
) -> AppResult<Response> {
    let kind = SearchKind::parse(q.kind.as_deref())?;
    // An empty fragment matches every row.
    let text = q.query.ok_or_else(|| AppError::bad_request("missing search text"))?;
    let order = q.order.as_deref();

    match kind {
        SearchKind::Person => {
            let rows = state.catalog.search_people(&text, PersonOrder::from_token(order)).await?;
            debug!(%text, results = rows.len(), "person search");
            match SearchOutcome::from_rows(rows) {
                SearchOutcome::NotFound => {
                    let notice = format!("Sorry, no people were found with the search term '{text}'");
                    not_found(&state, flash, kind, notice).await
                }
                SearchOutcome::Single(person) => {
                    Ok((flash.keep(), Redirect::to(&person_url(&person.nm))).into_response())
                }
                SearchOutcome::Many(rows) => {
                    let people = attach_links(rows);
                    let stats = state.catalog.stats().await?;
                    Ok(render(flash, StatusCode::OK, |flashes| {
                        templates::people_list(&stats, flashes, &text, &people)
                    }))
                }
            }
        }
        SearchKind::Movie => {
            let rows = state.catalog.search_movies(&text, MovieOrder::from_token(order)).await?;
            debug!(%text, results = rows.len(), "movie search");
            match SearchOutcome::from_rows(rows) {
                SearchOutcome::NotFound => {
                    let notice = format!("Sorry, no movies were found for '{text}'");
                    not_found(&state, flash, kind, notice).await
                }
                SearchOutcome::Single(movie) => {
                    Ok((flash.keep(), Redirect::to(&movie_url(&movie.tt))).into_response())
                }
                SearchOutcome::Many(rows) => {
                    let movies = attach_links(rows);
                    let stats = state.catalog.stats().await?;
                    Ok(render(flash, StatusCode::OK, |flashes| {
                        templates::movie_list(&stats, flashes, &text, &movies)
                    }))
                }
            }
        }
    }
}

pub async fn person_detail(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Path(nm): Path<String>,
) -> AppResult<Response> {
    let Some(person) = state.catalog.get_person(&nm).await? else {
        let notice = "Sorry, no person with that ID is in the database".to_string();
        return not_found(&state, flash, SearchKind::Person, notice).await;
    };

    let addedby = state.catalog.get_staff_name(person.addedby).await?;
    let movies = attach_links(state.catalog.get_past_movies(&nm).await?);
    let stats = state.catalog.stats().await?;

    Ok(render(flash, StatusCode::OK, |flashes| {
        templates::person_detail(&stats, flashes, &person, &addedby, &movies)
    }))
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    flash: Flash,
    Path(tt): Path<String>,
) -> AppResult<Response> {
    let Some(movie) = state.catalog.get_movie(&tt).await? else {
        let notice = "Sorry, no movie with that ID is in the database".to_string();
        return not_found(&state, flash, SearchKind::Movie, notice).await;
    };

    let addedby = state.catalog.get_staff_name(movie.addedby).await?;
    let director = state.catalog.get_director(movie.director.as_deref()).await?.map(Linked::new);
    let cast = attach_links(state.catalog.get_cast(&tt).await?);
    let stats = state.catalog.stats().await?;

    Ok(render(flash, StatusCode::OK, |flashes| {
        templates::movie_detail(&stats, flashes, &movie, director.as_ref(), &addedby, &cast)
    }))
}

async fn not_found(
    state: &AppState,
    mut flash: Flash,
    kind: SearchKind,
    notice: String,
) -> AppResult<Response> {
    debug!(kind = kind.as_str(), %notice, "not found");
    flash.push(notice);
    let stats = state.catalog.stats().await?;
    Ok(render(flash, StatusCode::NOT_FOUND, |flashes| templates::not_found(&stats, flashes, kind)))
}

fn render(flash: Flash, status: StatusCode, page: impl FnOnce(&[String]) -> String) -> Response {
    let (jar, flashes) = flash.take();
    (status, jar, Html(page(&flashes))).into_response()
}
