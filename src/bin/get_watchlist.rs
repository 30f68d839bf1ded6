use std::{env, process::ExitCode};

use letterboxd2json::{
    clients::letterboxd_client::LetterboxdClient, commands, config::Config, logging, output,
};

#[tokio::main]
async fn main() -> ExitCode {
    logging::setup_logging();

    let Some(username) = env::args().nth(1) else {
        return output::print_error("No username provided");
    };

    let client = match LetterboxdClient::new(&Config::from_env()) {
        Ok(client) => client,
        Err(e) => return output::print_error(e.to_string()),
    };

    output::print_result(commands::get_watchlist(&client, &username).await)
}
