use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

const SEND_ENDPOINT: &str = "https://wa.me/send";

/// Build the wa.me deep link for one recipient. The phone goes into the URL
/// exactly as stored — a leading `+` and any digits are preserved, never
/// reformatted. An empty phone leaves the parameter blank, which makes the
/// messaging app prompt for a recipient. Only the message text is encoded.
pub fn wa_link(phone: &str, message: &str) -> String {
    let text = utf8_percent_encode(message, NON_ALPHANUMERIC);
    format!("{}?phone={}&text={}", SEND_ENDPOINT, phone, text)
}

/// Digits-only form of a phone number, for display next to a contact.
/// Never feed this into `wa_link`: the link keeps the raw stored phone.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
