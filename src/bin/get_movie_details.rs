use std::{env, process::ExitCode};

use letterboxd2json::{
    clients::{letterboxd_client::LetterboxdClient, provider_client::WatchProviderClient},
    commands,
    config::Config,
    logging, output,
};

#[tokio::main]
async fn main() -> ExitCode {
    logging::setup_logging();

    let Some(slug) = env::args().nth(1) else {
        return output::print_error("No slug provided");
    };

    let config = Config::from_env();
    let clients = LetterboxdClient::new(&config)
        .and_then(|letterboxd| Ok((letterboxd, WatchProviderClient::new(&config)?)));
    let (letterboxd, providers) = match clients {
        Ok(clients) => clients,
        Err(e) => return output::print_error(e.to_string()),
    };

    output::print_result(commands::get_movie_details(&letterboxd, &providers, &slug).await)
}
