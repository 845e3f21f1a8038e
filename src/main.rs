mod config;
mod storage;
mod system;
mod ui;

use std::io::{self, BufRead, Write};
use std::time::Instant;

use alert_core::{
    broadcast, compose, copy_message, AlertDetails, ContactStore, CopyFeedback, DispatchError,
    Selection,
};
use alert_core::donor::is_canonical_blood_type;
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::storage::FileSnapshot;
use crate::system::{SystemClipboard, SystemOpener};

const APP_NAME: &str = "bloodcast";

const HELP_TEXT: &str = "BLOODCAST HELP\n\n\
     set <field> <value>   Edit an alert field\n\
     clear [field]         Clear one field, or the whole form\n\
     preview, p            Show the composed message\n\
     contacts, c           List contacts\n\
     add, a                Add a contact (prompts)\n\
     remove, rm <n>        Delete contact n\n\
     toggle, t <n>         Select/deselect contact n\n\
     copy                  Copy the message to the clipboard\n\
     send, b               Open one WhatsApp chat per selected contact\n\
     open                  Open WhatsApp without a preselected recipient\n\
     help, h               This screen\n\
     quit, q               Exit\n\n\
     Fields: patient group units hospital area time cname cphone notes";

struct BloodcastApp {
    details: AlertDetails,
    store: ContactStore<FileSnapshot>,
    selection: Selection,
    opener: SystemOpener,
    clipboard: SystemClipboard,
    copy_feedback: CopyFeedback,
    started: Instant,
}

impl BloodcastApp {
    fn new(config: Config) -> Self {
        let store = ContactStore::load(FileSnapshot::new(config.contacts_path));
        Self {
            details: AlertDetails::new(),
            store,
            selection: Selection::new(),
            opener: SystemOpener,
            clipboard: SystemClipboard,
            copy_feedback: CopyFeedback::new(),
            started: Instant::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn run(&mut self) -> Result<()> {
        println!("🩸 {} — WhatsApp blood alert (manual send)", APP_NAME);
        ui::draw_help(HELP_TEXT);
        ui::draw_contacts(self.store.contacts(), &self.selection);

        let stdin = io::stdin();
        loop {
            ui::draw_status(&self.selection, self.copy_feedback.is_visible(self.now_ms()));
            print!("> ");
            io::stdout().flush().ok();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            if !self.handle_command(line.trim()) {
                break;
            }
        }
        Ok(())
    }

    /// Returns false when the app should exit.
    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match command {
            "" => {}
            "help" | "h" => ui::draw_help(HELP_TEXT),
            "preview" | "p" => ui::draw_preview(&compose(&self.details)),
            "set" => self.handle_set(rest),
            "clear" => self.handle_clear(rest),
            "contacts" | "c" => ui::draw_contacts(self.store.contacts(), &self.selection),
            "add" | "a" => self.handle_add(),
            "remove" | "rm" => self.handle_remove(rest),
            "toggle" | "t" => self.handle_toggle(rest),
            "copy" => self.handle_copy(),
            "send" | "b" => self.handle_send(false),
            "open" => self.handle_send(true),
            "quit" | "q" => return false,
            other => println!("Unknown command `{other}` — try `help`"),
        }
        true
    }

    fn handle_set(&mut self, rest: &str) {
        let mut parts = rest.splitn(2, char::is_whitespace);
        let field = parts.next().unwrap_or("");
        let value = parts.next().unwrap_or("").trim().to_string();
        if field.is_empty() || value.is_empty() {
            println!("Usage: set <field> <value>");
            return;
        }
        if !self.assign(field, value) {
            println!("Unknown field `{field}` — try `help`");
            return;
        }
        ui::draw_preview(&compose(&self.details));
    }

    fn handle_clear(&mut self, field: &str) {
        if field.is_empty() {
            self.details = AlertDetails::new();
            ui::draw_preview(&compose(&self.details));
            return;
        }
        if !self.assign(field, String::new()) {
            println!("Unknown field `{field}` — try `help`");
            return;
        }
        ui::draw_preview(&compose(&self.details));
    }

    fn assign(&mut self, field: &str, value: String) -> bool {
        match field {
            "patient" => self.details.patient = value,
            "group" => {
                // Upper-cased at the edit site, passed through unvalidated
                let value = value.to_uppercase();
                if !value.is_empty() && !is_canonical_blood_type(&value) {
                    warn!("blood group `{value}` is not one of the canonical eight");
                }
                self.details.blood_group = value;
            }
            "units" => self.details.units = value,
            "hospital" => self.details.hospital = value,
            "area" => self.details.location = value,
            "time" => self.details.needed_by = value,
            "cname" => self.details.contact_name = value,
            "cphone" => self.details.contact_phone = value,
            "notes" => self.details.notes = value,
            _ => return false,
        }
        true
    }

    fn handle_add(&mut self) {
        let name = match ui::prompt("Contact name (e.g., Donor Group)") {
            Some(name) if !name.trim().is_empty() => name,
            _ => return,
        };
        let phone = ui::prompt("Phone in international format, blank to choose inside WhatsApp")
            .unwrap_or_default();
        if self.store.add(&name, &phone) {
            ui::draw_contacts(self.store.contacts(), &self.selection);
        } else {
            println!("Contact not added");
        }
    }

    fn handle_remove(&mut self, rest: &str) {
        let Some(id) = self.contact_id_at(rest) else {
            println!("Usage: remove <n>");
            return;
        };
        self.store.remove(&id, &mut self.selection);
        ui::draw_contacts(self.store.contacts(), &self.selection);
    }

    fn handle_toggle(&mut self, rest: &str) {
        let Some(id) = self.contact_id_at(rest) else {
            println!("Usage: toggle <n>");
            return;
        };
        let selected = self.selection.is_selected(&id);
        self.selection.toggle(&id, !selected);
        ui::draw_contacts(self.store.contacts(), &self.selection);
    }

    fn contact_id_at(&self, rest: &str) -> Option<String> {
        let index: usize = rest.parse().ok()?;
        self.store
            .contacts()
            .get(index.checked_sub(1)?)
            .map(|c| c.id.clone())
    }

    fn handle_copy(&mut self) {
        let message = compose(&self.details);
        let now = self.now_ms();
        match copy_message(&mut self.clipboard, &message, &mut self.copy_feedback, now) {
            Ok(()) => println!("✓ Copied"),
            Err(e) => {
                warn!("{e}");
                ui::draw_preview(&message);
                println!("Copy failed — select the text above and copy manually.");
            }
        }
    }

    fn handle_send(&mut self, generic_only: bool) {
        let message = compose(&self.details);
        let targets = if generic_only {
            Vec::new()
        } else {
            self.selection.targets(&self.store)
        };
        match broadcast(&mut self.opener, &message, &targets) {
            Ok(opened) => {
                info!("issued {opened} link opening(s)");
                println!("Opened {opened} chat(s) — review and press Send in WhatsApp.");
            }
            Err(DispatchError::EmptyMessage) => {
                println!("Please fill the form to create a message.");
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    info!("starting {}", APP_NAME);

    let mut app = BloodcastApp::new(config);
    app.run()
}
