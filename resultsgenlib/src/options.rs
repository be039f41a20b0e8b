//! Generation parameters.
//!
//! The values an operator selects before generating a document (season
//! year, event, race, results range) are passed explicitly through
//! `GenerationParams` rather than read from fixed cells.

use crate::error::ResultsgenError;
use crate::Result;

/// Public root of the published files API.
pub const DEFAULT_FILES_BASE_URL: &str = "https://api-files.federacao-triatlo.pt/";

/// Parameters for the generation operations.
///
/// Each operation checks only the parameters it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationParams {
    /// Season year of the event (path segment of file URLs)
    pub event_year: Option<String>,
    /// Event id in the Event table
    pub event_id: Option<String>,
    /// Event reference, used for file names and URLs
    pub event_reference: Option<String>,
    /// Race reference, used for the results table file name
    pub race_reference: Option<String>,
    /// Named range holding the race results
    pub results_range: Option<String>,
    /// Root URL the event files are served from
    pub files_base_url: String,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            event_year: None,
            event_id: None,
            event_reference: None,
            race_reference: None,
            results_range: None,
            files_base_url: DEFAULT_FILES_BASE_URL.to_string(),
        }
    }
}

impl GenerationParams {
    /// Create new default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the season year.
    pub fn event_year(mut self, year: impl Into<String>) -> Self {
        self.event_year = Some(year.into());
        self
    }

    /// Set the event id.
    pub fn event_id(mut self, id: impl Into<String>) -> Self {
        self.event_id = Some(id.into());
        self
    }

    /// Set the event reference.
    pub fn event_reference(mut self, reference: impl Into<String>) -> Self {
        self.event_reference = Some(reference.into());
        self
    }

    /// Set the race reference.
    pub fn race_reference(mut self, reference: impl Into<String>) -> Self {
        self.race_reference = Some(reference.into());
        self
    }

    /// Set the results range name.
    pub fn results_range(mut self, range: impl Into<String>) -> Self {
        self.results_range = Some(range.into());
        self
    }

    /// Set the files API root. A trailing slash is added when missing.
    pub fn files_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.files_base_url = url;
        self
    }

    pub fn require_event_year(&self) -> Result<&str> {
        require(&self.event_year, "event year")
    }

    pub fn require_event_id(&self) -> Result<&str> {
        require(&self.event_id, "event id")
    }

    pub fn require_event_reference(&self) -> Result<&str> {
        require(&self.event_reference, "event reference")
    }

    pub fn require_race_reference(&self) -> Result<&str> {
        require(&self.race_reference, "race reference")
    }

    pub fn require_results_range(&self) -> Result<&str> {
        require(&self.results_range, "results range")
    }

    /// Folder URL of an event's files: `<base><year>/events/<reference>/`.
    pub fn event_files_url(&self) -> Result<String> {
        Ok(format!(
            "{}{}/events/{}/",
            self.files_base_url,
            self.require_event_year()?,
            self.require_event_reference()?
        ))
    }
}

fn require<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ResultsgenError::MissingParameter(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GenerationParams::new();
        assert_eq!(params.files_base_url, DEFAULT_FILES_BASE_URL);
        assert!(params.event_id.is_none());
    }

    #[test]
    fn test_event_files_url() {
        let params = GenerationParams::new()
            .event_year("2024")
            .event_reference("2024-lisboa");
        assert_eq!(
            params.event_files_url().unwrap(),
            "https://api-files.federacao-triatlo.pt/2024/events/2024-lisboa/"
        );
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let params = GenerationParams::new()
            .files_base_url("https://files.example")
            .event_year("2023")
            .event_reference("porto");
        assert_eq!(
            params.event_files_url().unwrap(),
            "https://files.example/2023/events/porto/"
        );
    }

    #[test]
    fn test_missing_and_blank_parameters() {
        let params = GenerationParams::new().event_id("  ");
        let err = params.require_event_id().unwrap_err();
        assert_eq!(err.to_string(), "missing parameter: event id");
        assert!(params.require_race_reference().is_err());
        assert!(params.event_files_url().is_err());
    }

    #[test]
    fn test_required_values_trimmed() {
        let params = GenerationParams::new().event_id(" 10 ");
        assert_eq!(params.require_event_id().unwrap(), "10");
    }
}
