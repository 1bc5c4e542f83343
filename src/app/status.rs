use crate::host::FormReport;

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to validate and save.";

/// What the footer reports about the last form action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusLine {
    #[default]
    Ready,
    Editing(String),
    /// Rows that failed the last full validation, in row order.
    Blocked(Vec<String>),
    Saved,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_report(report: &FormReport) -> Self {
        if report.is_valid() {
            StatusLine::Saved
        } else {
            StatusLine::Blocked(report.issues.iter().map(|issue| issue.name.clone()).collect())
        }
    }

    pub fn message(&self) -> String {
        match self {
            StatusLine::Ready => READY_STATUS.to_string(),
            StatusLine::Editing(name) => format!("Editing {name}"),
            StatusLine::Blocked(names) => format!("Cannot save, check: {}", names.join(", ")),
            StatusLine::Saved => "All rows valid, values saved".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::FieldIssue;

    #[test]
    fn blocked_status_names_the_invalid_rows() {
        let report = FormReport {
            issues: vec![
                FieldIssue {
                    name: "email".into(),
                    message: None,
                },
                FieldIssue {
                    name: "zip".into(),
                    message: Some("postcode like 1234AB".into()),
                },
            ],
        };
        let status = StatusLine::from_report(&report);
        assert_eq!(status, StatusLine::Blocked(vec!["email".into(), "zip".into()]));
        assert_eq!(status.message(), "Cannot save, check: email, zip");
    }

    #[test]
    fn clean_report_means_saved() {
        assert_eq!(
            StatusLine::from_report(&FormReport::default()),
            StatusLine::Saved
        );
    }
}
