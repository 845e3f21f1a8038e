const OPENING_LINE: &str = "🚨 *Emergency Blood Requirement*";
const CLOSING_LINE: &str = "Please share / donate if you can. 🙏";

/// Fields describing one blood-need broadcast. All optional; empty means
/// "leave that line out of the message".
#[derive(Clone, Default, PartialEq, Debug)]
pub struct AlertDetails {
    pub patient: String,
    pub blood_group: String,
    pub units: String,
    pub hospital: String,
    pub location: String,
    pub needed_by: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub notes: String,
}

impl AlertDetails {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the broadcast message from the alert fields. Pure: equal inputs
/// always give byte-identical output. The result is never empty — the
/// opening line and the call-to-action are always present, with one blank
/// line before the call-to-action.
pub fn compose(details: &AlertDetails) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(OPENING_LINE.to_string());

    push_field(&mut lines, "Patient: ", details.patient.trim());
    let group = details.blood_group.trim();
    if !group.is_empty() {
        lines.push(format!("Blood Group: *{}*", group));
    }
    push_field(&mut lines, "Units Needed: ", details.units.trim());
    push_joined(&mut lines, "Location: ", details.hospital.trim(), details.location.trim(), ", ");
    push_field(&mut lines, "Needed By: ", details.needed_by.trim());
    push_joined(
        &mut lines,
        "Contact: ",
        details.contact_name.trim(),
        details.contact_phone.trim(),
        " · ",
    );
    push_field(&mut lines, "Notes: ", details.notes.trim());

    lines.push(format!("\n{}", CLOSING_LINE));
    lines.join("\n").trim().to_string()
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{}{}", label, value));
    }
}

/// Two sub-values share one labeled line; the line is omitted only when
/// both are empty.
fn push_joined(lines: &mut Vec<String>, label: &str, first: &str, second: &str, sep: &str) {
    let joined = match (first.is_empty(), second.is_empty()) {
        (true, true) => return,
        (false, true) => first.to_string(),
        (true, false) => second.to_string(),
        (false, false) => format!("{}{}{}", first, sep, second),
    };
    lines.push(format!("{}{}", label, joined));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty_gives_fixed_lines_only() {
        let msg = compose(&AlertDetails::new());
        assert_eq!(msg, format!("{}\n\n{}", OPENING_LINE, CLOSING_LINE));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let details = AlertDetails {
            patient: "John Doe".to_string(),
            blood_group: "O+".to_string(),
            units: "2".to_string(),
            ..AlertDetails::new()
        };
        assert_eq!(compose(&details), compose(&details));
    }

    #[test]
    fn test_partial_details_omit_missing_lines() {
        let details = AlertDetails {
            patient: "John Doe".to_string(),
            blood_group: "O+".to_string(),
            units: "2".to_string(),
            ..AlertDetails::new()
        };
        let msg = compose(&details);
        assert!(msg.starts_with(OPENING_LINE));
        assert!(msg.ends_with(CLOSING_LINE));
        assert!(msg.contains("Patient: John Doe"));
        assert!(msg.contains("Blood Group: *O+*"));
        assert!(msg.contains("Units Needed: 2"));
        assert!(!msg.contains("Location:"));
        assert!(!msg.contains("Needed By:"));
        assert!(!msg.contains("Contact:"));
        assert!(!msg.contains("Notes:"));
    }

    #[test]
    fn test_location_joins_hospital_and_area() {
        let mut details = AlertDetails::new();
        details.hospital = "Apollo Hospital".to_string();
        details.location = "Madurai".to_string();
        assert!(compose(&details).contains("Location: Apollo Hospital, Madurai"));

        details.hospital.clear();
        assert!(compose(&details).contains("Location: Madurai"));

        details.location.clear();
        details.hospital = "Apollo Hospital".to_string();
        assert!(compose(&details).contains("Location: Apollo Hospital"));
    }

    #[test]
    fn test_contact_joins_name_and_phone() {
        let mut details = AlertDetails::new();
        details.contact_name = "Naveen".to_string();
        details.contact_phone = "+919012345678".to_string();
        assert!(compose(&details).contains("Contact: Naveen · +919012345678"));
    }

    #[test]
    fn test_whitespace_only_fields_are_omitted() {
        let mut details = AlertDetails::new();
        details.patient = "   ".to_string();
        details.notes = "\t".to_string();
        let msg = compose(&details);
        assert_eq!(msg, format!("{}\n\n{}", OPENING_LINE, CLOSING_LINE));
    }

    #[test]
    fn test_field_values_are_trimmed() {
        let mut details = AlertDetails::new();
        details.patient = "  John Doe  ".to_string();
        assert!(compose(&details).contains("Patient: John Doe\n"));
    }

    #[test]
    fn test_unvalidated_blood_group_passes_through() {
        let mut details = AlertDetails::new();
        details.blood_group = "Q+".to_string();
        assert!(compose(&details).contains("Blood Group: *Q+*"));
    }
}
