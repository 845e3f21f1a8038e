use std::io::Write;
use std::process::{Command, Stdio};

use alert_core::{Clipboard, LinkOpener};
use tracing::warn;

/// Opens deep links through the desktop's URL handler. Fire-and-forget: the
/// spawn result is logged but a failed open never stops the fan-out.
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) {
        let result = Command::new(open_command())
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Err(e) = result {
            warn!("could not open link: {e}");
        }
    }
}

fn open_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

const CLIPBOARD_COMMANDS: [&[&str]; 3] = [
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["pbcopy"],
];

/// Clipboard via whichever system clipboard command is installed.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), String> {
        for argv in CLIPBOARD_COMMANDS {
            if pipe_to(argv, text).is_ok() {
                return Ok(());
            }
        }
        Err("no clipboard command found (tried wl-copy, xclip, pbcopy)".to_string())
    }
}

fn pipe_to(argv: &[&str], text: &str) -> Result<(), String> {
    let mut child = Command::new(argv[0])
        .args(&argv[1..])
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| e.to_string())?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin.write_all(text.as_bytes()).map_err(|e| e.to_string())?;
    }
    let status = child.wait().map_err(|e| e.to_string())?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{} exited with {}", argv[0], status))
    }
}
