use crate::utils::colors::{BLUE, BOLD, GREEN, MAGENTA, RED, RESET, YELLOW};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_BELL: &str = "🔔";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// A fired reminder: the one line users must not miss.
pub fn reminder<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", MAGENTA, BOLD, ICON_BELL, msg, RESET);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}\n", BLUE, BOLD, msg, RESET);
}
