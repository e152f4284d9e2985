//! The `expense` command: logging, listing, inspecting, and removing records.

use chrono::Local;
use uuid::Uuid;

use crate::cli::core::{parse_amount, parse_date, CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::formatters::{format_amount, format_date, record_detail, record_line, short_id};
use crate::cli::registry::CommandEntry;
use crate::cli::{io, output};
use crate::core::services::RecordService;
use crate::domain::ExpenseRecord;
use crate::journal::grouping::{display_order, group_by_date};

const ADD_USAGE: &str = "usage: expense add <amount> [YYYY-MM-DD] [note...]";
const SHOW_USAGE: &str = "usage: expense show <index|id>";
const REMOVE_USAGE: &str = "usage: expense remove <index|id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "expense",
        "Log, list, inspect, and remove expenses",
        "expense <add|list|show|remove>",
        cmd_expense,
    )]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.refresh_journal();
    if let Some((subcommand, rest)) = args.split_first() {
        match subcommand.to_ascii_lowercase().as_str() {
            "add" => handle_add(context, rest),
            "list" => handle_list(context),
            "show" => handle_show(context, rest),
            "remove" => handle_remove(context, rest),
            other => Err(CommandError::InvalidArguments(format!(
                "unknown expense subcommand `{}`",
                other
            ))),
        }
    } else {
        Err(CommandError::InvalidArguments(
            "usage: expense <add|list|show|remove>".into(),
        ))
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let record = if context.mode() == CliMode::Interactive && args.is_empty() {
        prompt_record_form(context)?
    } else {
        record_from_args(context, args)?
    };

    RecordService::add(&mut context.journal, record)?;
    context.save_journal();
    io::print_success("Expense added successfully!");
    Ok(())
}

/// Interactive entry form. Tag fields are chosen from the configured
/// vocabularies, starting on the configured defaults.
fn prompt_record_form(context: &ShellContext) -> Result<ExpenseRecord, CommandError> {
    let theme = &context.theme;
    let config = &context.config;
    let today = Local::now().date_naive();

    let date_raw = io::prompt_text_with_default(theme, "Date (YYYY-MM-DD)", &format_date(today))?;
    let date = parse_date(date_raw.trim())?;

    let from = non_empty(io::prompt_text(theme, "From")?);
    let to = non_empty(io::prompt_text(theme, "To")?);

    let app_idx = io::select_option(
        theme,
        "Payment app",
        &config.payment_apps,
        default_index(&config.payment_apps, &config.default_used_app),
    )?;
    let account_idx = io::select_option(
        theme,
        "Account",
        &config.accounts,
        default_index(&config.accounts, &config.default_used_account),
    )?;
    let category_idx = io::select_option(
        theme,
        "Category",
        &config.categories,
        default_index(&config.categories, &config.default_category),
    )?;

    let amount = parse_amount(io::prompt_text(theme, "Amount")?.trim())?;
    let note = io::prompt_text(theme, "Note")?;

    Ok(
        ExpenseRecord::new(date, config.categories[category_idx].clone(), amount)
            .with_parties(from, to)
            .with_tags(
                Some(config.payment_apps[app_idx].clone()),
                Some(config.accounts[account_idx].clone()),
            )
            .with_note(note.trim()),
    )
}

fn default_index(options: &[String], value: &str) -> usize {
    options
        .iter()
        .position(|option| option == value)
        .unwrap_or(0)
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Script-mode entry: `expense add <amount> [YYYY-MM-DD] [note...]`. Tag
/// fields come from the configured defaults.
fn record_from_args(context: &ShellContext, args: &[&str]) -> Result<ExpenseRecord, CommandError> {
    let (amount_raw, rest) = args
        .split_first()
        .ok_or_else(|| CommandError::InvalidArguments(ADD_USAGE.into()))?;
    let amount = parse_amount(amount_raw)?;

    let (date, note_parts) = match rest.first() {
        Some(token) if parse_date(token).is_ok() => (parse_date(token)?, &rest[1..]),
        _ => (Local::now().date_naive(), rest),
    };

    let config = &context.config;
    Ok(ExpenseRecord::new(date, config.default_category.clone(), amount)
        .with_tags(
            Some(config.default_used_app.clone()),
            Some(config.default_used_account.clone()),
        )
        .with_note(note_parts.join(" ")))
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    if context.journal.is_empty() {
        io::print_info("No expenses recorded.");
        return Ok(());
    }

    let mut index = 1;
    for group in group_by_date(&context.journal) {
        output::section(format_date(group.date));
        for record in group.records {
            output::plain(record_line(index, record));
            index += 1;
        }
    }
    Ok(())
}

fn handle_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(id) = resolve_record_id(context, args, SHOW_USAGE, "Select an expense:")? else {
        return Ok(());
    };
    let record = context
        .journal
        .get(id)
        .ok_or(CommandError::Core(crate::errors::JournalError::RecordNotFound(id)))?;
    output::plain(record_detail(record));
    Ok(())
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(id) = resolve_record_id(context, args, REMOVE_USAGE, "Select an expense to delete:")?
    else {
        return Ok(());
    };

    if context.mode() == CliMode::Interactive {
        let confirmed = io::confirm_action(&context.theme, "Delete this expense?", false)?;
        if !confirmed {
            io::print_info("Operation cancelled.");
            return Ok(());
        }
    }

    RecordService::remove(&mut context.journal, id)?;
    context.save_journal();
    io::print_success("Expense removed.");
    Ok(())
}

/// Resolves a record target from a listing index or a full id. With no
/// argument, interactive mode falls back to a picker over the listing order.
fn resolve_record_id(
    context: &ShellContext,
    args: &[&str],
    usage: &str,
    select_prompt: &str,
) -> Result<Option<Uuid>, CommandError> {
    if let Some(token) = args.first() {
        if let Ok(id) = Uuid::parse_str(token) {
            return Ok(Some(id));
        }
        let ordered = display_order(&context.journal);
        let index: usize = token.parse().map_err(|_| {
            CommandError::InvalidArguments(format!("`{}` is neither an index nor an id", token))
        })?;
        let record = index
            .checked_sub(1)
            .and_then(|idx| ordered.get(idx))
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "index {} out of range (1..={})",
                    index,
                    ordered.len()
                ))
            })?;
        return Ok(Some(record.id));
    }

    if context.mode() != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(usage.into()));
    }
    if context.journal.is_empty() {
        io::print_info("No expenses recorded.");
        return Ok(None);
    }

    let ordered = display_order(&context.journal);
    let labels: Vec<String> = ordered
        .iter()
        .map(|record| {
            format!(
                "{}  {:>10}  {}  ({})",
                format_date(record.date),
                format_amount(record.amount),
                if record.note.is_empty() {
                    record.category.as_str()
                } else {
                    record.note.as_str()
                },
                short_id(record.id)
            )
        })
        .collect();
    let choice = io::select_option(&context.theme, select_prompt, &labels, 0)?;
    Ok(Some(ordered[choice].id))
}
