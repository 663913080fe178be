//! # Forkify CLI Entry Point
//!
//! ```text
//! forkify search pizza --page 2
//! forkify recipe 5ed6604591c37cdc054bc886 --servings 6 --toggle-bookmark
//! forkify bookmarks
//! forkify upload -f title=Soup -f servings=2 -f ingredient-1=1,l,Water ...
//! forkify shell
//! ```
//!
//! Container HTML goes to stdout, logs to stderr. The setup lives in lib.rs
//! so it can be tested.

use clap::Parser;

use forkify_cli::cli::Cli;

#[tokio::main]
async fn main() {
    forkify_cli::init_tracing();

    let cli = Cli::parse();
    if let Err(err) = forkify_cli::run(cli).await {
        eprintln!("Error [{:?}]: {}", err.code, err);
        std::process::exit(1);
    }
}
