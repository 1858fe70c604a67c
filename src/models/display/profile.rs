//! Profile display model
//!
//! Renders the dashboard: an avatar badge with the user's initial, the
//! username and email, and an info grid with ID, role and signup date.

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::models::UserProfile;
use crate::error::Result;
use crate::output::Formattable;
use crate::output::formatters::{avatar_initial, format_member_since};
use crate::output::json::format_json;
use crate::output::table::format_table;

/// Profile display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProfileDisplay {
    /// User ID, shown as `#<id>`
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    /// Long-form signup date
    #[tabled(rename = "MEMBER SINCE")]
    pub member_since: String,
}

impl From<&UserProfile> for ProfileDisplay {
    fn from(profile: &UserProfile) -> Self {
        Self {
            id: format!("#{}", profile.id),
            username: profile.username.clone(),
            email: profile.email.clone(),
            role: if profile.role.is_empty() {
                "--".to_string()
            } else {
                profile.role.clone()
            },
            member_since: format_member_since(profile.created_at.as_deref()),
        }
    }
}

impl From<UserProfile> for ProfileDisplay {
    fn from(profile: UserProfile) -> Self {
        ProfileDisplay::from(&profile)
    }
}

/// Render the profile card for pretty output
pub fn render_card(profile: &UserProfile) -> String {
    let display = ProfileDisplay::from(profile);
    let badge = format!(" {} ", avatar_initial(&profile.username));

    let mut out = String::new();
    out.push_str(&format!(
        "{}  {}\n",
        badge.bold().black().on_cyan(),
        display.username.bold()
    ));
    out.push_str(&format!(
        "{}  {}\n\n",
        " ".repeat(badge.chars().count()),
        display.email.dimmed()
    ));

    let rows = [
        ("User ID", display.id),
        ("Role", display.role),
        ("Member since", display.member_since),
    ];
    for (label, value) in rows {
        out.push_str(&format!("  {}{}\n", format!("{:<14}", label).dimmed(), value));
    }

    out.push_str(&format!(
        "\n{} Refresh with {}, sign out with {}",
        "→".cyan(),
        "authdesk profile".cyan(),
        "authdesk logout".cyan()
    ));
    out
}

impl Formattable for UserProfile {
    fn format(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Pretty => render_card(self),
            OutputFormat::Table => format_table(&[ProfileDisplay::from(self)]),
            OutputFormat::Json => format_json(self)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: 42,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: "ROLE_USER".to_string(),
            created_at: Some("2024-01-15T10:30:00".to_string()),
        }
    }

    #[test]
    fn test_profile_display_from_profile() {
        let display = ProfileDisplay::from(profile());

        assert_eq!(display.id, "#42");
        assert_eq!(display.username, "alice");
        assert_eq!(display.role, "ROLE_USER");
        assert_eq!(display.member_since, "January 15, 2024");
    }

    #[test]
    fn test_profile_display_missing_role() {
        let mut p = profile();
        p.role = String::new();
        p.created_at = None;

        let display = ProfileDisplay::from(&p);
        assert_eq!(display.role, "--");
        assert_eq!(display.member_since, "N/A");
    }

    #[test]
    fn test_render_card_contents() {
        let card = render_card(&profile());

        assert!(card.contains(" A "));
        assert!(card.contains("alice"));
        assert!(card.contains("alice@example.com"));
        assert!(card.contains("#42"));
        assert!(card.contains("ROLE_USER"));
        assert!(card.contains("January 15, 2024"));
    }

    #[test]
    fn test_table_format() {
        let out = profile().format(OutputFormat::Table).unwrap();
        assert!(out.contains("MEMBER SINCE"));
        assert!(out.contains("#42"));
    }

    #[test]
    fn test_json_format_is_verbatim() {
        let out = profile().format(OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["data"]["id"], 42);
        assert_eq!(parsed["data"]["createdAt"], "2024-01-15T10:30:00");
        assert!(parsed["meta"]["version"].is_string());
    }
}
