//! Shell housekeeping commands: help, version, storage info, config, exit.

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::{help, io};
use crate::storage::JournalStore;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new(
            "version",
            "Show version and build information",
            "version",
            cmd_version,
        ),
        CommandEntry::new(
            "store",
            "Inspect the journal storage slot",
            "store info",
            cmd_store,
        ),
        CommandEntry::new(
            "config",
            "Show or change entry form defaults",
            "config <show|set> [key] [value]",
            cmd_config,
        ),
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(name) => help::show_command_help(context, &name.to_ascii_lowercase()),
        None => help::show_general_help(context),
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let build = build_info::current();
    io::print_info(format!(
        "Kharcha {} ({}-{})",
        build.version, build.git_hash, build.git_status
    ));
    io::print_info(format!("built {} for {}", build.timestamp, build.target));
    io::print_info(format!("{} profile, {}", build.profile, build.rustc));
    Ok(())
}

fn cmd_store(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let sub = args.first().map(|arg| arg.to_ascii_lowercase());
    match sub.as_deref() {
        None | Some("info") => {
            io::print_info(format!("Slot: {}", context.slot));
            io::print_info(format!(
                "File: {}",
                context.storage.slot_path(&context.slot).display()
            ));
            io::print_info(format!("Records: {}", context.journal.len()));
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown store subcommand `{}`",
            other
        ))),
    }
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|arg| arg.to_ascii_lowercase()).as_deref() {
        None | Some("show") => {
            let config = &context.config;
            io::print_info(format!("default-app:      {}", config.default_used_app));
            io::print_info(format!("default-account:  {}", config.default_used_account));
            io::print_info(format!("default-category: {}", config.default_category));
            io::print_info(format!("payment apps:     {}", config.payment_apps.join(", ")));
            io::print_info(format!("accounts:         {}", config.accounts.join(", ")));
            io::print_info(format!("categories:       {}", config.categories.join(", ")));
            Ok(())
        }
        Some("set") => {
            let key = args.get(1).ok_or_else(usage)?.to_ascii_lowercase();
            let value = args.get(2..).filter(|rest| !rest.is_empty()).ok_or_else(usage)?.join(" ");
            apply_config_change(context, &key, value)?;
            context.persist_config()?;
            io::print_success("Configuration updated.");
            Ok(())
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`",
            other
        ))),
    }
}

/// Updates one form default. A value outside the matching vocabulary is
/// appended to it so the entry form can still offer it.
fn apply_config_change(
    context: &mut ShellContext,
    key: &str,
    value: String,
) -> Result<(), CommandError> {
    let config = &mut context.config;
    match key {
        "default-app" => {
            if !config.payment_apps.contains(&value) {
                config.payment_apps.push(value.clone());
            }
            config.default_used_app = value;
        }
        "default-account" => {
            if !config.accounts.contains(&value) {
                config.accounts.push(value.clone());
            }
            config.default_used_account = value;
        }
        "default-category" => {
            if !config.categories.contains(&value) {
                config.categories.push(value.clone());
            }
            config.default_category = value;
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{}` (expected default-app, default-account, or default-category)",
                other
            )))
        }
    }
    Ok(())
}

fn usage() -> CommandError {
    CommandError::InvalidArguments("usage: config set <key> <value>".into())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
