//! Audit input and its validation.

use log::warn;

use crate::error_handling::AuditError;
use crate::utils::default_competitor_label;

/// Documents to audit: the reference page and the competitor pages, in report order.
///
/// # Example
///
/// ```
/// use schema_gap::AuditRequest;
///
/// let request = AuditRequest::new("<html>...</html>")
///     .with_competitor("Acme", "<html>...</html>")
///     .with_unlabeled_competitor("<html>...</html>");
/// assert_eq!(request.competitors[1].0, "Competitor 2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditRequest {
    /// HTML of the page being audited
    pub reference_html: String,
    /// `(label, html)` pairs; labels need not be unique
    pub competitors: Vec<(String, String)>,
}

/// Inputs that passed validation.
pub(crate) struct ValidatedRequest {
    pub reference_html: String,
    pub competitors: Vec<(String, String)>,
}

impl AuditRequest {
    /// Starts a request for `reference_html` with no competitors.
    pub fn new(reference_html: impl Into<String>) -> Self {
        Self {
            reference_html: reference_html.into(),
            competitors: Vec::new(),
        }
    }

    /// Appends a labelled competitor.
    pub fn with_competitor(mut self, label: impl Into<String>, html: impl Into<String>) -> Self {
        self.competitors.push((label.into(), html.into()));
        self
    }

    /// Appends a competitor labelled by its position (`Competitor N`).
    pub fn with_unlabeled_competitor(self, html: impl Into<String>) -> Self {
        let label = default_competitor_label(self.competitors.len());
        self.with_competitor(label, html)
    }

    /// Checks the inputs before any extraction starts.
    ///
    /// Competitors with blank HTML are dropped with a warning; their labels are
    /// not reused by the remaining ones.
    pub(crate) fn validate(self) -> Result<ValidatedRequest, AuditError> {
        if self.reference_html.trim().is_empty() {
            return Err(AuditError::MissingReference);
        }

        let competitors: Vec<(String, String)> = self
            .competitors
            .into_iter()
            .filter(|(label, html)| {
                let blank = html.trim().is_empty();
                if blank {
                    warn!("Skipping competitor '{}': no HTML supplied", label);
                }
                !blank
            })
            .collect();

        if competitors.is_empty() {
            return Err(AuditError::NoCompetitors);
        }

        Ok(ValidatedRequest {
            reference_html: self.reference_html,
            competitors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_follow_position() {
        let request = AuditRequest::new("<html></html>")
            .with_unlabeled_competitor("<p>a</p>")
            .with_competitor("Named", "<p>b</p>")
            .with_unlabeled_competitor("<p>c</p>");
        let labels: Vec<&str> = request.competitors.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Competitor 1", "Named", "Competitor 3"]);
    }

    #[test]
    fn test_blank_reference_is_refused() {
        let request = AuditRequest::new("   \n").with_competitor("A", "<html></html>");
        assert!(matches!(request.validate(), Err(AuditError::MissingReference)));
    }

    #[test]
    fn test_no_competitors_is_refused() {
        let request = AuditRequest::new("<html></html>");
        assert!(matches!(request.validate(), Err(AuditError::NoCompetitors)));
    }

    #[test]
    fn test_blank_competitors_are_skipped() {
        let request = AuditRequest::new("<html></html>")
            .with_competitor("Empty", "  ")
            .with_competitor("Real", "<html></html>");
        let validated = request.validate().unwrap();
        assert_eq!(validated.competitors.len(), 1);
        assert_eq!(validated.competitors[0].0, "Real");
    }

    #[test]
    fn test_only_blank_competitors_is_refused() {
        let request = AuditRequest::new("<html></html>").with_unlabeled_competitor("");
        assert!(matches!(request.validate(), Err(AuditError::NoCompetitors)));
    }
}
