use crate::cli::core::ShellContext;
use crate::cli::io;

pub fn show_general_help(context: &ShellContext) {
    io::print_info("Available commands:");
    for entry in context.registry.list() {
        io::print_info(format!("  {:<10} {}", entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for usage details.");
}

pub fn show_command_help(context: &ShellContext, name: &str) {
    match context.registry.get(name) {
        Some(entry) => {
            io::print_info(format!("{} - {}", entry.name, entry.description));
            io::print_info(format!("usage: {}", entry.usage));
        }
        None => io::print_warning(format!("Unknown command `{}`.", name)),
    }
}
