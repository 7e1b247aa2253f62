mod colors;
mod error;
mod picker;

use std::io;

use clap::Parser;
use log::debug;

use crate::error::UnwrapOrExplode;

/// Print a random user from the `users.json` file that sits next to this executable.
///
/// The file must hold a JSON list; every element is a user and is printed as is.
#[derive(Parser)]
#[command(version)]
struct CliArgs {}

fn main() {
    let CliArgs {} = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let users_path = picker::resolve_path().unwrap_or_explode();
    debug!("reading users from {}", users_path.display());

    let users = picker::load_users(&users_path).unwrap_or_explode();
    debug!("loaded {} users", users.len());

    let user = picker::pick_random(&users, &mut rand::thread_rng()).unwrap_or_explode();
    debug!("picked {user}");

    picker::display(user, &mut io::stdout().lock()).unwrap_or_explode();
}
