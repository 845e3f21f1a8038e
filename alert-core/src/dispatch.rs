use thiserror::Error;

use crate::contact::Contact;
use crate::link::wa_link;

/// How long the "copied" indicator stays visible after a successful copy.
pub const COPY_FLASH_MS: u64 = 1500;

#[derive(Error, Debug, PartialEq)]
pub enum DispatchError {
    /// Dispatch was attempted with no composed message. Nothing is opened.
    #[error("no message composed — fill in the alert form first")]
    EmptyMessage,
    /// The clipboard rejected the write; the user must copy manually.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

/// Fire-and-forget navigation to a deep link. Opening is best-effort: a
/// blocked open is neither detected nor reported, and one failure must not
/// stop the rest of the fan-out, so the call is infallible by contract.
pub trait LinkOpener {
    fn open(&mut self, url: &str);
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), String>;
}

/// Open one deep link per target, or a single generic link when no targets
/// are selected (the messaging app then prompts for a recipient). Returns
/// the number of opens issued. Targets with an empty phone fall back to the
/// generic form individually.
pub fn broadcast<O: LinkOpener>(
    opener: &mut O,
    message: &str,
    targets: &[&Contact],
) -> Result<usize, DispatchError> {
    if message.is_empty() {
        return Err(DispatchError::EmptyMessage);
    }

    if targets.is_empty() {
        opener.open(&wa_link("", message));
        return Ok(1);
    }

    for contact in targets {
        opener.open(&wa_link(&contact.phone, message));
    }
    Ok(targets.len())
}

/// Transient "copied" indicator, driven purely by a caller-supplied clock.
/// Re-arming moves the deadline forward, so a newer copy supersedes the
/// flash window of an older one.
#[derive(Default)]
pub struct CopyFeedback {
    visible_until_ms: Option<u64>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, now_ms: u64) {
        self.visible_until_ms = Some(now_ms + COPY_FLASH_MS);
    }

    pub fn is_visible(&self, now_ms: u64) -> bool {
        match self.visible_until_ms {
            Some(until) => now_ms < until,
            None => false,
        }
    }
}

/// Copy the composed message and arm the flash indicator on success. A
/// clipboard failure is surfaced so the caller can tell the user to copy
/// manually — never swallowed.
pub fn copy_message<C: Clipboard>(
    clipboard: &mut C,
    message: &str,
    feedback: &mut CopyFeedback,
    now_ms: u64,
) -> Result<(), DispatchError> {
    match clipboard.copy(message) {
        Ok(()) => {
            feedback.arm(now_ms);
            Ok(())
        }
        Err(e) => Err(DispatchError::ClipboardUnavailable(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingOpener {
        opened: Vec<String>,
    }

    impl RecordingOpener {
        fn new() -> Self {
            Self { opened: Vec::new() }
        }
    }

    impl LinkOpener for RecordingOpener {
        fn open(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }
    }

    struct FailingClipboard;

    impl Clipboard for FailingClipboard {
        fn copy(&mut self, _text: &str) -> Result<(), String> {
            Err("denied".to_string())
        }
    }

    struct WorkingClipboard {
        copied: Option<String>,
    }

    impl Clipboard for WorkingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), String> {
            self.copied = Some(text.to_string());
            Ok(())
        }
    }

    fn contact(id: &str, phone: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: format!("contact {id}"),
            phone: phone.to_string(),
        }
    }

    #[test]
    fn test_empty_message_opens_nothing() {
        let mut opener = RecordingOpener::new();
        let c = contact("1", "+911234");
        let result = broadcast(&mut opener, "", &[&c]);
        assert_eq!(result, Err(DispatchError::EmptyMessage));
        assert!(opener.opened.is_empty());
    }

    #[test]
    fn test_no_targets_opens_one_generic_link() {
        let mut opener = RecordingOpener::new();
        assert_eq!(broadcast(&mut opener, "X", &[]), Ok(1));
        assert_eq!(opener.opened.len(), 1);
        assert!(opener.opened[0].starts_with("https://wa.me/send?phone=&text="));
    }

    #[test]
    fn test_fan_out_one_open_per_target_in_order() {
        let mut opener = RecordingOpener::new();
        let a = contact("a", "+911111");
        let b = contact("b", "");
        let c = contact("c", "+913333");

        assert_eq!(broadcast(&mut opener, "help", &[&a, &b, &c]), Ok(3));
        assert_eq!(opener.opened.len(), 3);
        assert!(opener.opened[0].contains("phone=+911111&"));
        // Empty phone falls back to the generic form for that target only
        assert!(opener.opened[1].contains("phone=&"));
        assert!(opener.opened[2].contains("phone=+913333&"));
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let mut feedback = CopyFeedback::new();
        let result = copy_message(&mut FailingClipboard, "msg", &mut feedback, 0);
        assert_eq!(
            result,
            Err(DispatchError::ClipboardUnavailable("denied".to_string()))
        );
        assert!(!feedback.is_visible(0));
    }

    #[test]
    fn test_copy_arms_flash_indicator() {
        let mut clipboard = WorkingClipboard { copied: None };
        let mut feedback = CopyFeedback::new();
        copy_message(&mut clipboard, "msg", &mut feedback, 1000).unwrap();

        assert_eq!(clipboard.copied.as_deref(), Some("msg"));
        assert!(feedback.is_visible(1000));
        assert!(feedback.is_visible(1000 + COPY_FLASH_MS - 1));
        assert!(!feedback.is_visible(1000 + COPY_FLASH_MS));
    }

    #[test]
    fn test_newer_copy_supersedes_flash_window() {
        let mut feedback = CopyFeedback::new();
        feedback.arm(0);
        feedback.arm(1000);
        assert!(feedback.is_visible(1000 + COPY_FLASH_MS - 1));
    }
}
