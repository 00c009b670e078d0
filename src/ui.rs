// UI layer: provides the interactive menus using `dialoguer`.
// The functions are small and synchronous to make the flow easy to follow.

use crate::store::{AccountStore, PersistenceError};
use crate::validate::{is_valid_display_name, is_valid_identifier};
use anyhow::Result;
use chrono::Local;
use crossterm::style::Stylize;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Classification tag shown in brackets on every status line. Colors
/// follow the original tool's palette: problems in red, the notice in
/// yellow, everything else in blue.
#[derive(Clone, Copy)]
pub enum Tag {
    Error,
    Warning,
    Notice,
    Success,
    Info,
    Account,
}

impl Tag {
    fn label(self) -> &'static str {
        match self {
            Tag::Error => "ERROR",
            Tag::Warning => "WARNING",
            Tag::Notice => "NOTICE",
            Tag::Success => "SUCCESS",
            Tag::Info => "INFO",
            Tag::Account => "ACCOUNT",
        }
    }
}

/// Print one timestamped status line, ` [HH:MM:SS] > [TAG] message`.
pub fn status(tag: Tag, message: &str) {
    let timestamp = Local::now().format("%H:%M:%S");
    let styled = match tag {
        Tag::Error | Tag::Warning => message.to_string().red(),
        Tag::Notice => message.to_string().yellow(),
        Tag::Success | Tag::Info | Tag::Account => message.to_string().blue(),
    };
    println!(" [{}] > [{}] {}", timestamp, tag.label(), styled);
}

/// The launcher keeps its account list at a fixed location under the
/// user's home directory; this tool edits that file in place.
pub fn accounts_path() -> PathBuf {
    let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.join(".lunarclient")
        .join("settings")
        .join("game")
        .join("accounts.json")
}

/// Main interactive menu. Borrows the session's store and runs a select
/// loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: you can use arrow keys
/// and Enter to choose an option.
pub fn main_menu(store: &mut AccountStore, path: &Path) -> Result<()> {
    loop {
        clear_screen();
        println!(
            "Cracked Lunar Account Tool v{}\n",
            env!("CARGO_PKG_VERSION")
        );

        let items = vec![
            "Create Account",
            "Remove Accounts",
            "View Installed Accounts",
            "Exit",
        ];
        let selection = Select::new()
            .with_prompt("What would you like to do?")
            .items(&items)
            .default(0)
            .interact()?;
        match selection {
            0 => handle_create(store, path)?,
            1 => handle_remove(store, path)?,
            2 => handle_view(store),
            3 => {
                status(Tag::Info, "Exiting the program.");
                break;
            }
            _ => {}
        }

        pause()?;
    }
    Ok(())
}

/// Create flow: collect a username (advisory check only) and an
/// identifier (retried until valid or the user gives up), then insert the
/// record and save.
fn handle_create(store: &mut AccountStore, path: &Path) -> Result<()> {
    let username: String = Input::new()
        .with_prompt("Enter your desired username")
        .interact_text()?;

    if !is_valid_display_name(&username) {
        status(
            Tag::Warning,
            "You may experience issues joining servers because of your username being invalid.",
        );
    }

    loop {
        let identifier: String = Input::new()
            .with_prompt("Enter a valid UUID")
            .interact_text()?;
        let identifier = identifier.trim();

        if !is_valid_identifier(identifier) {
            status(
                Tag::Warning,
                "The UUID you entered is invalid. Please ensure it follows the correct format.",
            );
            let retry = Confirm::new()
                .with_prompt("Would you like to try again?")
                .default(true)
                .interact()?;
            if !retry {
                status(Tag::Info, "Returning to main menu.");
                return Ok(());
            }
        } else {
            store.create_account(&username, identifier);
            status(Tag::Success, "Your account has successfully been created.");
            save(store, path);
            return Ok(());
        }
    }
}

/// Remove sub-menu: all, cracked only, or premium only. Whatever the
/// choice, the file is saved afterwards. A removal that matches nothing
/// still reports SUCCESS; the tool has never distinguished that case.
fn handle_remove(store: &mut AccountStore, path: &Path) -> Result<()> {
    clear_screen();
    let items = vec![
        "Remove All Accounts",
        "Remove Cracked Accounts (accessToken is not a UUID)",
        "Remove Premium Accounts (accessToken is a UUID)",
    ];
    let selection = Select::new()
        .with_prompt("Choose an option to remove accounts")
        .items(&items)
        .default(0)
        .interact()?;
    match selection {
        0 => {
            store.remove_all();
            status(Tag::Success, "All accounts have been successfully removed.");
        }
        1 => {
            store.remove_by_classification(true);
            status(Tag::Success, "Cracked accounts have been successfully removed.");
        }
        2 => {
            store.remove_by_classification(false);
            status(Tag::Success, "Premium accounts have been successfully removed.");
        }
        _ => {}
    }

    save(store, path);
    Ok(())
}

/// Print every installed account, one line per record. Order is whatever
/// the map yields.
fn handle_view(store: &AccountStore) {
    status(Tag::Info, "Installed Accounts:");
    for (identifier, username) in store.list() {
        status(Tag::Account, &format!("{}: {}", identifier, username));
    }
}

/// Save the store, showing a short spinner for UX. A failure is reported
/// but never rolls back the in-memory state; the next mutating action or
/// a normal exit will try again.
pub fn save(store: &AccountStore, path: &Path) {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Saving...");
    // brief wait so the spinner is actually visible
    thread::sleep(Duration::from_millis(300));

    let result = store.save(path);
    spinner.finish_and_clear();
    if let Err(e) = result {
        report_persistence_error(&e);
    }
}

/// Translate a persistence failure into an ERROR status line.
pub fn report_persistence_error(e: &PersistenceError) {
    status(Tag::Error, &format!("{}", e));
}

fn pause() -> Result<()> {
    status(Tag::Info, "Press enter to return to the main menu...");
    let _: String = Input::new().allow_empty(true).interact_text()?;
    Ok(())
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}
