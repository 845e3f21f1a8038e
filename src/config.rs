use std::{env, path::PathBuf};

use tracing::info;

pub struct Config {
    pub contacts_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let contacts_path = match env::var("BLOODCAST_CONTACTS") {
            Ok(p) => PathBuf::from(p),
            Err(_) => {
                let default = default_contacts_path();
                info!(
                    "BLOODCAST_CONTACTS not set, using default: {}",
                    default.display()
                );
                default
            }
        };
        Self { contacts_path }
    }
}

fn default_contacts_path() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".bloodcast")
        .join("contacts.json")
}
