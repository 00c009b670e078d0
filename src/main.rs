// Entrypoint for the CLI application.
// - Keeps `main` small: load the account store and hand it to the UI loop.
// - Returns `anyhow::Result` to simplify error handling in the shell glue.

use std::thread;
use std::time::Duration;

use lunar_accounts_cli::store::AccountStore;
use lunar_accounts_cli::ui::{self, Tag};

fn main() -> anyhow::Result<()> {
    let path = ui::accounts_path();

    // An absent file just means a fresh install; anything else wrong with
    // the accounts file is fatal before the menu is ever shown.
    let mut store = match AccountStore::load(&path) {
        Ok(store) => store,
        Err(e) => {
            ui::report_persistence_error(&e);
            ui::status(Tag::Notice, "Please check that you have Lunar Client installed.");
            ui::status(Tag::Notice, "Exiting in 3 seconds...");
            thread::sleep(Duration::from_secs(3));
            std::process::exit(1);
        }
    };

    // Start the interactive menu. This call blocks until the user exits.
    ui::main_menu(&mut store, &path)?;

    // One last save so an exit right after a failed mid-session save still
    // gets a chance to land on disk.
    ui::save(&store, &path);
    Ok(())
}
