// src/notify/console.rs

//! Terminal report sink.
//!
//! Prints a banner plus one block per announcement, oldest new item
//! first so the terminal reads chronologically.

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::models::Announcement;
use crate::notify::Notifier;
use crate::utils::resolve;

/// Sink that renders the batch as a terminal report on stdout.
pub struct ConsoleNotifier {
    base_url: String,
}

impl ConsoleNotifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Render the full report, including the banner.
    fn render(&self, batch: &[Announcement]) -> String {
        let mut out = String::new();

        out.push_str(&format!("\n{}\n", "=".repeat(50)));
        out.push_str(&format!(
            "🔔 {} new announcement(s) found!\n",
            batch.len()
        ));
        out.push_str(&format!("{}\n\n", "=".repeat(50)));

        // Oldest new item first.
        for a in batch.iter().rev() {
            out.push_str(&format!("{}\n", "=".repeat(36)));
            out.push_str(&format!("🆔 ID       : {}\n", a.id));
            out.push_str(&format!(
                "📅 Date     : {}\n",
                a.date.as_deref().unwrap_or("N/A")
            ));
            out.push_str(&format!(
                "🇫🇷 Title   : {}\n",
                a.title_fr.as_deref().unwrap_or("")
            ));
            out.push_str(&format!(
                "🇲🇦 العنوان : {}\n",
                a.title_ar.as_deref().unwrap_or("")
            ));
            out.push_str(&format!(
                "\nSummary EN : {}\n",
                a.description_fr.as_deref().unwrap_or("")
            ));
            out.push_str(&format!(
                "الملخص AR : {}\n\n",
                a.description_ar.as_deref().unwrap_or("")
            ));

            if !a.pdf.is_empty() {
                out.push_str("📄 PDF :\n");
                for doc in &a.pdf {
                    out.push_str(&format!(
                        "  - {} → {}\n",
                        doc.label_fr.as_deref().unwrap_or("Link"),
                        resolve(&self.base_url, &doc.url)
                    ));
                }
            }
            out.push_str(&format!("{}\n\n", "=".repeat(36)));
        }

        out
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn name(&self) -> &'static str {
        "console"
    }

    async fn notify(&self, batch: &[Announcement]) -> Result<(), NotifyError> {
        print!("{}", self.render(batch));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentLink;

    fn make_announcement(id: &str, title_fr: &str) -> Announcement {
        Announcement {
            id: id.to_string(),
            date: Some("2026-02-02".to_string()),
            title_fr: Some(title_fr.to_string()),
            title_ar: Some("إعلان".to_string()),
            description_fr: Some("Details".to_string()),
            description_ar: Some("تفاصيل".to_string()),
            pdf: Vec::new(),
        }
    }

    #[test]
    fn test_report_header_counts_batch() {
        let sink = ConsoleNotifier::new("https://www.men.gov.ma/");
        let batch = vec![make_announcement("2", "B"), make_announcement("1", "A")];

        let report = sink.render(&batch);
        assert!(report.contains("🔔 2 new announcement(s) found!"));
    }

    #[test]
    fn test_items_print_oldest_first() {
        let sink = ConsoleNotifier::new("https://www.men.gov.ma/");
        let batch = vec![make_announcement("2", "Newest"), make_announcement("1", "Oldest")];

        let report = sink.render(&batch);
        let oldest = report.find("🆔 ID       : 1").unwrap();
        let newest = report.find("🆔 ID       : 2").unwrap();
        assert!(oldest < newest);
    }

    #[test]
    fn test_missing_date_renders_as_na() {
        let sink = ConsoleNotifier::new("https://www.men.gov.ma/");
        let mut a = make_announcement("1", "A");
        a.date = None;

        let report = sink.render(&[a]);
        assert!(report.contains("📅 Date     : N/A"));
    }

    #[test]
    fn test_document_links_resolve_against_base() {
        let sink = ConsoleNotifier::new("https://www.men.gov.ma/");
        let mut a = make_announcement("1", "A");
        a.pdf.push(DocumentLink {
            url: "sites/default/files/avis.pdf".to_string(),
            label_fr: Some("Avis".to_string()),
            label_ar: None,
        });

        let report = sink.render(&[a]);
        assert!(report.contains("  - Avis → https://www.men.gov.ma/sites/default/files/avis.pdf"));
    }

    #[test]
    fn test_no_pdf_section_for_empty_attachments() {
        let sink = ConsoleNotifier::new("https://www.men.gov.ma/");
        let report = sink.render(&[make_announcement("1", "A")]);
        assert!(!report.contains("📄 PDF :"));
    }
}
