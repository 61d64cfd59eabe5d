use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use taskdesk::{config::Config, routes, seed, AppError, TaskStore, UserStore};

fn to_io_error(err: AppError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(to_io_error)?;

    let (tasks, users) = if config.load_seed_data {
        (
            seed::default_tasks().map_err(to_io_error)?,
            seed::default_users().map_err(to_io_error)?,
        )
    } else {
        (Vec::new(), Vec::new())
    };
    info!("Loaded {} seed task(s) and {} seed user(s)", tasks.len(), users.len());

    // Created once so every worker shares the same stores.
    let task_store = web::Data::new(TaskStore::new(tasks));
    let user_store = web::Data::new(UserStore::new(users));

    info!("Starting taskdesk server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(task_store.clone())
            .app_data(user_store.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
            .default_service(web::route().to(routes::health::not_found))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
