use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use serde_json::json;
use tera::Tera;

use crate::forms::main::IndexActionForm;
use crate::repository::DieselRepository;
use crate::routes::{bad_request, base_context, internal_error, render_template};
use crate::services::ServiceError;
use crate::services::main::{self as main_service, IndexQuery};

#[derive(Deserialize)]
struct IndexQueryParams {
    q: Option<String>,
}

#[get("/")]
/// Render every contact with the last-name search box.
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = IndexQuery {
        search: params.into_inner().q,
    };

    match main_service::load_index_page(repo.get_ref(), query) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "index");
            context.insert("rows", &data.rows);
            context.insert("visible_count", &data.visible_count);
            context.insert("search_query", &data.search_query.unwrap_or_default());

            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load index page: {err}");
            internal_error()
        }
    }
}

#[post("/")]
/// Apply a list page action; only `action=delete` changes anything.
pub async fn index_action(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<IndexActionForm>,
) -> impl Responder {
    match main_service::apply_index_action(repo.get_ref(), form) {
        Ok(()) => HttpResponse::Ok().json(json!({})),
        Err(ServiceError::Form(_)) => bad_request(),
        Err(err) => {
            log::error!("Failed to apply index action: {err}");
            internal_error()
        }
    }
}
