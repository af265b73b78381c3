//! Display helpers shared by the dashboards.

use community_core::ProjectStatus;

pub fn status_label(status: ProjectStatus) -> &'static str {
    if status.is_open() {
        "🟢 Open"
    } else {
        "🔴 Closed"
    }
}

pub fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Value of the hours `<select>`; the empty choice clears the selection.
pub fn parse_hours(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(ProjectStatus::Open), "🟢 Open");
        assert_eq!(status_label(ProjectStatus::Closed), "🔴 Closed");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder("", "Not specified"), "Not specified");
        assert_eq!(or_placeholder("  ", "None"), "None");
        assert_eq!(or_placeholder("Mysore", "Not specified"), "Mysore");
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("9"), Some(9));
        assert_eq!(parse_hours(""), None);
        assert_eq!(parse_hours("--Choose--"), None);
    }
}
