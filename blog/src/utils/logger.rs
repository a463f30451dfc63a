use colored::{ColoredString, Colorize};
use std::fmt::Display;

fn line(label: ColoredString, message: ColoredString) -> String {
    format!("{}: {}", label, message)
}

pub fn log_success(message: impl Display) {
    println!("{}", line("Success".bright_green(), message.to_string().green()));
}

pub fn log_warning(message: impl Display) {
    println!("{}", line("Warning".bright_yellow(), message.to_string().yellow()));
}

pub fn log_error(message: impl Display) {
    eprintln!("{}", line("Error".bright_red().bold(), message.to_string().red()));
}

pub fn log_fatal(message: impl Display) {
    eprintln!("{}", line("FATAL".bright_red().bold(), message.to_string().bright_red().bold()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_keeps_label_and_message() {
        colored::control::set_override(false);

        assert_eq!(line("Warning".yellow(), "disk almost full".yellow()), "Warning: disk almost full");
    }
}
