use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::models::SubscriptionId;
use crate::store;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let id = SubscriptionId::new(id.as_str());
        let mut store = store::open(cfg)?;

        if !*force {
            let current = store.get(&id)?;
            let prompt = format!(
                "Delete subscription #{id} '{}'? This action is irreversible.",
                current.name
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(store.as_mut(), &id)?;
        success(format!(
            "Subscription #{id} '{}' has been deleted.",
            removed.name
        ));
    }

    Ok(())
}
