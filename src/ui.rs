use std::io::{self, BufRead, Write};

use alert_core::{normalize_phone, Contact, Selection};

pub fn draw_preview(message: &str) {
    println!();
    println!("──── Preview ─────────────────────────────");
    println!("{}", message);
    println!("──────────────────────────────────────────");
}

pub fn draw_contacts(contacts: &[Contact], selection: &Selection) {
    println!();
    println!("Contacts:");
    if contacts.is_empty() {
        println!("  (none yet — use `add`)");
        return;
    }
    for (i, contact) in contacts.iter().enumerate() {
        let mark = if selection.is_selected(&contact.id) { "x" } else { " " };
        let phone = if contact.phone.is_empty() {
            "Pick inside WhatsApp".to_string()
        } else {
            normalize_phone(&contact.phone)
        };
        println!("  [{}] {:>2}. {}  ({})", mark, i + 1, contact.name, phone);
    }
}

pub fn draw_status(selection: &Selection, copied: bool) {
    let copied = if copied { "  ✓ Copied" } else { "" };
    println!();
    println!("{} selected{}", selection.len(), copied);
}

pub fn draw_help(text: &str) {
    println!();
    println!("{}", text);
}

/// Ask one question on its own line. None means stdin closed.
pub fn prompt(label: &str) -> Option<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
