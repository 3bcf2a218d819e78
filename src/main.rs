use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use kurso_server::{
    app_state::AppState,
    config::Config,
    handlers::{course_handler, enrollment_handler, health_handler},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&state.config.cors_allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(cors)
            .service(health_handler::health_check)
            .service(health_handler::health_check_live)
            .service(health_handler::health_check_ready)
            .service(course_handler::create_course)
            .service(course_handler::get_course_tree)
            .service(course_handler::put_module_content)
            .service(course_handler::open_lesson)
            .service(enrollment_handler::enroll)
            .service(enrollment_handler::my_enrollment)
            .service(enrollment_handler::mark_complete)
            .service(enrollment_handler::submit_quiz)
            .service(enrollment_handler::leaderboard)
    })
    .bind((host, port))?
    .run()
    .await
}
