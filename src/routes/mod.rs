//! HTTP handlers and the helpers they share.

use actix_web::{HttpResponse, http::header};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::dto::api::ErrorResponse;

pub mod api;
pub mod contacts;
pub mod main;

/// Message key returned for any unexpected failure inside a handler.
pub const INTERNAL_SERVER_ERROR: &str = "generic.error.internalServerError";
/// Message key returned when a submitted form could not be parsed.
pub const BAD_REQUEST: &str = "generic.error.badRequest";

/// Maps a flash message level onto the CSS class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every page: pending flash alerts and the active page.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            internal_error()
        }
    }
}

/// `303 See Other` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// `500` with the generic error payload.
pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: INTERNAL_SERVER_ERROR,
    })
}

/// `400` with the bad request payload.
pub fn bad_request() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse { error: BAD_REQUEST })
}
