#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Every JSON route of the booking API, mounted at the root.
#[cfg(feature = "server")]
pub fn api_scope() -> actix_web::Scope {
    use actix_web::web;

    use crate::routes::auth::{current_user, login, logout, register};
    use crate::routes::bookings::{
        create_booking, delete_booking, get_booking, list_bookings, update_booking,
    };
    use crate::routes::catalog::{
        create_service, delete_service, get_service, list_services, update_service,
    };

    web::scope("")
        .app_data(web::JsonConfig::default().error_handler(routes::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(routes::path_error_handler))
        .service(login)
        .service(logout)
        .service(current_user)
        .service(register)
        .service(list_bookings)
        .service(get_booking)
        .service(create_booking)
        .service(update_booking)
        .service(delete_booking)
        .service(list_services)
        .service(get_service)
        .service(create_service)
        .service(update_service)
        .service(delete_service)
        .default_service(web::route().to(routes::not_found))
}

/// Builds and runs the Actix-Web HTTP server using the provided
/// configuration. Pending migrations are applied on startup so a fresh
/// database file is usable immediately.
#[cfg(feature = "server")]
pub async fn run(server_config: crate::models::config::ServerConfig) -> std::io::Result<()> {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_identity::IdentityMiddleware;
    use actix_session::{SessionMiddleware, storage::CookieSessionStore};
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use diesel_migrations::MigrationHarness;

    use crate::db::establish_connection_pool;
    use crate::repository::DieselRepository;

    // Establish the Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    {
        let mut conn = pool
            .get()
            .map_err(|e| std::io::Error::other(format!("Failed to get connection: {e}")))?;
        conn.run_pending_migrations(db::MIGRATIONS)
            .map_err(|e| std::io::Error::other(format!("Failed to run migrations: {e}")))?;
    }

    let repo = DieselRepository::new(pool);

    // Key for the session cookie and the identity token.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let bind_address = (server_config.address.clone(), server_config.port);
    let assets_dir = server_config.assets_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", assets_dir.clone()))
            .service(api_scope())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
