use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use dokhae_trainer::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config);
    if !state.has_credential().await {
        log::warn!(
            "no OpenAI API key resolved; quiz generation is blocked until one is supplied via POST /api/credential"
        );
    }

    log::info!("starting HTTP server on {host}:{port}");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::create_session)
            .service(handlers::get_session)
            .service(handlers::generate_quiz)
            .service(handlers::start_quiz)
            .service(handlers::select_answer)
            .service(handlers::submit_quiz)
            .service(handlers::set_credential)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
