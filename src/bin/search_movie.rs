use std::{env, process::ExitCode};

use letterboxd2json::{
    clients::letterboxd_client::LetterboxdClient, commands, config::Config, logging, output,
};

#[tokio::main]
async fn main() -> ExitCode {
    logging::setup_logging();

    // No query means nothing to look for, which is not an error.
    let Some(query) = env::args().nth(1).filter(|q| !q.trim().is_empty()) else {
        return output::print_json(&serde_json::json!([]));
    };

    let client = match LetterboxdClient::new(&Config::from_env()) {
        Ok(client) => client,
        Err(e) => return output::print_error(e.to_string()),
    };

    output::print_result(commands::search_movies(&client, &query).await)
}
