use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::repository::DieselRepository;
use crate::routes::internal_error;
use crate::services::api::{self as api_service, ContactsQuery};

#[derive(Deserialize)]
struct ApiV1ContactsQueryParams {
    q: Option<String>,
}

#[get("/v1/contacts")]
pub async fn api_v1_contacts(
    params: web::Query<ApiV1ContactsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let query = ContactsQuery {
        search: params.into_inner().q,
    };

    match api_service::list_contacts(repo.get_ref(), query) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list contacts: {err}");
            internal_error()
        }
    }
}
