use crate::types::error::AppError;
use crate::utils::multipart::form_config;
use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod auth;
pub mod books;
pub mod comments;
pub mod health;
pub mod movies;
pub mod notes;
pub mod scenarios;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);

    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
    cfg.app_data(form_config());

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/auth")
            .service(auth::register::register)
            .service(auth::login::login)
            .service(
                web::scope("")
                    .wrap(user_auth.clone())
                    .service(auth::logout::logout)
                    .service(auth::validate::validate_director)
                    .service(auth::validate::validate)
                    .service(auth::all::all)
                    .service(auth::me::me),
            ),
    );
    cfg.service(
        web::scope("/movies")
            .wrap(user_auth.clone())
            .service(movies::add::add)
            .service(movies::list::my_movies)
            .service(movies::list::not_my_movies)
            .service(movies::users::users)
            .service(movies::roles::my_role)
            .service(movies::roles::my_roles)
            .service(movies::roles::user_roles)
            .service(movies::available_users::available_users)
            .service(movies::assign_role::assign_role)
            .service(movies::remove_role::remove_role)
            .service(movies::get::get),
    );
    cfg.service(
        web::scope("/notes")
            .wrap(user_auth.clone())
            .service(notes::create::create)
            .service(notes::list::list)
            .service(notes::mine::mine)
            .service(notes::all::all)
            .service(notes::get::get),
    );
    cfg.service(
        web::scope("/comments")
            .wrap(user_auth.clone())
            .service(comments::create::create)
            .service(comments::list::list)
            .service(comments::delete::delete),
    );
    cfg.service(
        web::scope("/scenarios")
            .service(scenarios::get::get)
            .service(
                web::scope("")
                    .wrap(user_auth.clone())
                    .service(scenarios::add::add)
                    .service(scenarios::update::update)
                    .service(scenarios::delete::delete),
            ),
    );
    cfg.service(
        web::scope("/books")
            .service(books::get::get)
            .service(
                web::scope("")
                    .wrap(user_auth)
                    .service(books::create_empty::create_empty)
                    .service(books::add::add)
                    .service(books::update::update)
                    .service(books::delete::delete),
            ),
    );
}
