//! CSV export of guest-list signups.

use crate::domain::{EventSignup, SiteContent};

/// Column order of the export.
pub const CSV_HEADER: [&str; 9] = [
    "createdAt",
    "eventSlug",
    "eventTitle",
    "name",
    "email",
    "phone",
    "city",
    "guestCount",
    "notes",
];

/// A rendered CSV download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Attachment file name, e.g. `sunset-inscricoes.csv`.
    pub file_name: String,
    /// CSV text, rows separated by `\n`, no trailing newline.
    pub body: String,
}

/// Quotes a cell: always wrapped in `"`, inner quotes doubled.
#[must_use]
pub fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// `{slug}-inscricoes.csv`, or `todos-eventos-inscricoes.csv` without a filter.
#[must_use]
pub fn export_file_name(event_slug: Option<&str>) -> String {
    let label = event_slug.filter(|s| !s.is_empty()).unwrap_or("todos-eventos");
    format!("{label}-inscricoes.csv")
}

/// Renders `signups` in the given order. Event titles come from `content`;
/// signups for events that no longer exist get an empty title.
#[must_use]
pub fn render_signups_csv(signups: &[EventSignup], content: &SiteContent) -> String {
    let mut lines = Vec::with_capacity(signups.len().saturating_add(1));
    lines.push(CSV_HEADER.join(","));

    for signup in signups {
        let title = content
            .event_by_slug(&signup.event_slug)
            .map_or("", |event| event.title.as_str());
        let guest_count = signup.guest_count.to_string();
        let cells = [
            signup.created_at.as_str(),
            signup.event_slug.as_str(),
            title,
            signup.name.as_str(),
            signup.email.as_deref().unwrap_or_default(),
            signup.phone.as_deref().unwrap_or_default(),
            signup.city.as_deref().unwrap_or_default(),
            guest_count.as_str(),
            signup.notes.as_deref().unwrap_or_default(),
        ];
        let row: Vec<String> = cells.iter().map(|cell| csv_cell(cell)).collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordId, default_site_content};

    fn signup(slug: &str, notes: Option<&str>) -> EventSignup {
        EventSignup {
            id: RecordId::new(),
            event_slug: slug.to_string(),
            name: "Maria Silva".to_string(),
            email: Some("maria@example.com".to_string()),
            phone: None,
            city: Some("Brasilia".to_string()),
            guest_count: 1,
            notes: notes.map(str::to_string),
            created_at: "2026-02-01T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(
            csv_cell(r#"Said "hello" to the DJ"#),
            r#""Said ""hello"" to the DJ""#
        );
        assert_eq!(csv_cell(""), r#""""#);
    }

    #[test]
    fn file_name_reflects_filter() {
        assert_eq!(export_file_name(Some("sunset")), "sunset-inscricoes.csv");
        assert_eq!(export_file_name(None), "todos-eventos-inscricoes.csv");
        assert_eq!(export_file_name(Some("")), "todos-eventos-inscricoes.csv");
    }

    #[test]
    fn header_only_when_empty() {
        let csv = render_signups_csv(&[], &default_site_content());
        assert_eq!(
            csv,
            "createdAt,eventSlug,eventTitle,name,email,phone,city,guestCount,notes"
        );
    }

    #[test]
    fn rows_resolve_event_titles() {
        let content = default_site_content();
        let csv = render_signups_csv(
            &[
                signup("sunset-clubinho-edition", Some(r#"Said "hello" to the DJ"#)),
                signup("evento-removido", None),
            ],
            &content,
        );
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines.get(1).copied(),
            Some(
                r#""2026-02-01T10:00:00.000Z","sunset-clubinho-edition","Sunset Clubinho Edition","Maria Silva","maria@example.com","","Brasilia","1","Said ""hello"" to the DJ""#
            )
        );
        assert_eq!(
            lines.get(2).copied(),
            Some(
                r#""2026-02-01T10:00:00.000Z","evento-removido","","Maria Silva","maria@example.com","","Brasilia","1","""#
            )
        );
        assert!(!csv.ends_with('\n'));
    }
}
