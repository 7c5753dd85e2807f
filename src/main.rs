use astra::Server;

use atlas_dashboard::api::ApiClient;
use atlas_dashboard::config::AppConfig;
use atlas_dashboard::responses::error_to_response;
use atlas_dashboard::router::handle;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let client = match ApiClient::connect(config.api_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Cannot create the backend client: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Serving dashboard at http://{} (backend {}, {} workers)",
        config.bind,
        config.api_url,
        config.workers
    );

    let server = Server::bind(&config.bind).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &client) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    log::info!("Server shut down cleanly.");
}
