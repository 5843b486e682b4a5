//! Server-rendered page handlers

use askama::Template;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::db;
use crate::error::AppError;
use crate::models::{Cafe, CafeList};
use crate::state::AppState;
use crate::web::form::{AddCafeForm, FormErrors};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Template)]
#[template(path = "cafes.html")]
struct CafesTemplate {
    cafes: Vec<Cafe>,
}

#[derive(Template)]
#[template(path = "add.html")]
struct AddTemplate {
    form: AddCafeForm,
    errors: FormErrors,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    title: String,
    message: String,
}

/// GET / - landing page
pub async fn home() -> Response {
    render(IndexTemplate)
}

/// GET /cafes - listing page fed by the JSON API
pub async fn cafes(State(state): State<AppState>) -> Response {
    match fetch_cafes(&state).await {
        Ok(cafes) => render(CafesTemplate { cafes }),
        Err(err) => {
            tracing::warn!(error = %err, "cafe list fetch failed");
            error_page(
                StatusCode::BAD_GATEWAY,
                "Cafe list unavailable",
                "The cafe API could not be reached. Please try again shortly.",
            )
        }
    }
}

async fn fetch_cafes(state: &AppState) -> Result<Vec<Cafe>, reqwest::Error> {
    let url = format!("{}/all", state.api_base_url);
    let list: CafeList = state
        .http
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(list.cafes)
}

/// GET /add - blank add-cafe form
pub async fn add_form() -> Response {
    render(AddTemplate {
        form: AddCafeForm::default(),
        errors: FormErrors::default(),
    })
}

/// POST /add - validate, insert, redirect to the listing
pub async fn add_submit(State(state): State<AppState>, Form(form): Form<AddCafeForm>) -> Response {
    let cafe = match form.parse() {
        Ok(cafe) => cafe,
        Err(errors) => return render(AddTemplate { form, errors }),
    };

    match db::cafes::insert(&state.pool, &cafe).await.map_err(AppError::from) {
        Ok(_) => Redirect::to("/cafes").into_response(),
        Err(AppError::Conflict(message)) => {
            let mut errors = FormErrors::default();
            errors.name = Some(message);
            render(AddTemplate { form, errors })
        }
        Err(err) => {
            tracing::error!(error = %err, "cafe insert failed");
            error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "The cafe could not be saved. Please try again shortly.",
            )
        }
    }
}

/// GET /delete/{id} - browser-facing delete, guarded against unknown ids
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match db::cafes::delete(&state.pool, id).await {
        Ok(true) => Redirect::to("/cafes").into_response(),
        Ok(false) => error_page(
            StatusCode::NOT_FOUND,
            "Cafe not found",
            "No cafe with that id exists, so nothing was deleted.",
        ),
        Err(err) => {
            tracing::error!(error = %err, "cafe delete failed");
            error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "The cafe could not be deleted. Please try again shortly.",
            )
        }
    }
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    let template = ErrorTemplate {
        title: title.to_string(),
        message: message.to_string(),
    };
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template rendering failed");
            status.into_response()
        }
    }
}
