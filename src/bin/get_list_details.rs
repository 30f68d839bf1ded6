use std::{env, process::ExitCode};

use letterboxd2json::{
    clients::letterboxd_client::LetterboxdClient, commands, config::Config, logging, output,
};

#[tokio::main]
async fn main() -> ExitCode {
    logging::setup_logging();

    let args: Vec<String> = env::args().collect();
    let [_, owner, slug, ..] = args.as_slice() else {
        return output::print_error("Usage: get_list_details <owner_username> <list_slug>");
    };

    let client = match LetterboxdClient::new(&Config::from_env()) {
        Ok(client) => client,
        Err(e) => return output::print_error(e.to_string()),
    };

    output::print_result(commands::get_list_details(&client, owner, slug).await)
}
