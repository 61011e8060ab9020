//! Routes of the create view.

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::contacts::AddContactForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, internal_error, redirect, render_template};
use crate::services::{ServiceError, contacts as contacts_service};

#[get("/new")]
/// Show the empty add-contact form.
pub async fn show_new_contact(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "new");
    render_template(&tera, "contacts/new.html", &context)
}

#[post("/new")]
/// Create the submitted contact and go back to the list. A form with an
/// empty field stores nothing but still redirects, with an error alert.
pub async fn add_contact(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddContactForm>,
) -> impl Responder {
    match contacts_service::add_contact(repo.get_ref(), form) {
        Ok(_) => {
            FlashMessage::success("Contact added.").send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to add contact: {err}");
            internal_error()
        }
    }
}
