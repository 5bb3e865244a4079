use actix_identity::IdentityMiddleware;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};

use academia::db::establish_connection_pool;
use academia::models::config::ServerConfig;
use academia::repository::DieselRepository;
use academia::routes::categories::list_categories;
use academia::routes::courses::{
    course_detail, courses_by_subcategory, create_course, list_courses, my_courses,
    popular_courses, publish_course,
};
use academia::routes::users::{create_professor, current_profile, register_profile, verify_email};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = match config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .and_then(|settings| settings.try_deserialize::<ServerConfig>())
    {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if settings.secret_key.len() < 64 {
        log::error!("secret_key must be at least 64 bytes long");
        std::process::exit(1);
    }
    let secret_key = Key::from(settings.secret_key.as_bytes());

    let pool = match establish_connection_pool(&settings.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to create database pool: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    log::info!("Starting server at {}", settings.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .service(
                web::scope("/api")
                    // Fixed course segments must register before the slug
                    // catch-all.
                    .service(popular_courses)
                    .service(courses_by_subcategory)
                    .service(my_courses)
                    .service(list_courses)
                    .service(course_detail)
                    .service(create_course)
                    .service(publish_course)
                    .service(list_categories)
                    .service(current_profile)
                    .service(register_profile)
                    .service(verify_email)
                    .service(create_professor),
            )
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
