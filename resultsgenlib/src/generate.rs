//! Document generation: load, join, render, write.
//!
//! Each published artifact has one render function that reads the tables it
//! needs from the data source and returns the finished document. `generate`
//! renders and hands the document to a file sink.
//!
//! A missing named range aborts the operation before anything is written.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::data::table::{self, Table};
use crate::error::ResultsgenError;
use crate::options::GenerationParams;
use crate::output::{html, json, Presentation};
use crate::query;
use crate::source::{FileSink, Mime, TabularSource};
use crate::Result;

/// The documents this crate publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// `events.json`: every event summary
    EventsJson,
    /// `<eventReference>.json`: one event with organizers and races
    EventJson,
    /// `<eventReference>.html`: results file list and results-table host
    ResultsFiles,
    /// `<raceReference>.html`: results table of one race
    ResultsTable,
    /// `<eventReference>-LIVE.html`: live results tabs
    LiveResults,
    /// `<eventReference>-EventON.html`: EventON resource list
    EventResources,
}

impl Artifact {
    pub const ALL: [Artifact; 6] = [
        Artifact::EventsJson,
        Artifact::EventJson,
        Artifact::ResultsFiles,
        Artifact::ResultsTable,
        Artifact::LiveResults,
        Artifact::EventResources,
    ];

    /// Command-line name of the artifact.
    pub fn name(&self) -> &'static str {
        match self {
            Artifact::EventsJson => "events-json",
            Artifact::EventJson => "event-json",
            Artifact::ResultsFiles => "results-files",
            Artifact::ResultsTable => "results-table",
            Artifact::LiveResults => "live-results",
            Artifact::EventResources => "event-on",
        }
    }

    pub fn mime(&self) -> Mime {
        match self {
            Artifact::EventsJson | Artifact::EventJson => Mime::Json,
            _ => Mime::Html,
        }
    }

    /// File name the artifact is written under.
    pub fn file_name(&self, params: &GenerationParams) -> Result<String> {
        Ok(match self {
            Artifact::EventsJson => "events.json".to_string(),
            Artifact::EventJson => format!("{}.json", params.require_event_reference()?),
            Artifact::ResultsFiles => format!("{}.html", params.require_event_reference()?),
            Artifact::ResultsTable => format!("{}.html", params.require_race_reference()?),
            Artifact::LiveResults => format!("{}-LIVE.html", params.require_event_reference()?),
            Artifact::EventResources => {
                format!("{}-EventON.html", params.require_event_reference()?)
            }
        })
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Artifact {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Artifact::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| format!("Unknown artifact: {}", s))
    }
}

/// Where tables are read from.
///
/// Race results usually live in a separate workbook from the season tables.
#[derive(Clone, Copy)]
pub struct Sources<'a> {
    /// Season tables: events, programs, races, files, organizers, live and EventON tables
    pub database: &'a dyn TabularSource,
    /// Race results ranges
    pub results: &'a dyn TabularSource,
}

impl<'a> Sources<'a> {
    /// Use one source for everything.
    pub fn single(source: &'a dyn TabularSource) -> Self {
        Self {
            database: source,
            results: source,
        }
    }
}

/// A rendered document ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub mime: Mime,
    pub content: String,
}

/// Array of event summaries.
pub fn render_events_json(source: &dyn TabularSource) -> Result<String> {
    let events = Table::load(source, &table::EVENTS)?;
    json::events_json(&query::events_summary(&events.records))
}

/// One event with its organizers and its deduplicated, id-sorted races.
pub fn render_event_json(source: &dyn TabularSource, params: &GenerationParams) -> Result<String> {
    let event_id = params.require_event_id()?;
    let events = Table::load(source, &table::EVENTS)?;
    let event = query::find_event(&events.records, event_id)
        .ok_or_else(|| ResultsgenError::EventNotFound(event_id.to_string()))?;

    let programs = Table::load(source, &table::PROGRAMS)?;
    let races = Table::load(source, &table::RACES)?;
    let organizers = Table::load(source, &table::ORGANIZERS)?;
    let links = Table::load(source, &table::EVENT_ORGANIZERS)?;

    let event_programs = query::programs_by_event(&programs.records, &races.records, event_id);
    let event_organizers =
        query::organizers_by_event(&organizers.records, &links.records, event_id);

    json::event_json(&query::assemble_event(event, &event_programs, event_organizers))
}

/// Active results files of the event, in display order.
pub fn render_results_files(source: &dyn TabularSource, params: &GenerationParams) -> Result<String> {
    let event_id = params.require_event_id()?;
    let event_reference = params.require_event_reference()?;
    let base_url = params.event_files_url()?;

    let programs = Table::load(source, &table::PROGRAMS)?;
    let races = Table::load(source, &table::RACES)?;
    let files = Table::load(source, &table::RESULTS_FILES)?;

    let event_files = query::results_files_by_event(
        &programs.records,
        &races.records,
        &files.records,
        event_id,
    );
    let published = query::published_results_files(event_files);
    html::results_files_list(&published, event_reference, &base_url)
}

/// Results table of the configured results range.
pub fn render_results_table(
    source: &dyn TabularSource,
    params: &GenerationParams,
    presentation: &Presentation,
) -> Result<String> {
    let range = params.require_results_range()?;
    let results = Table::read(source, range)?;
    if results.is_empty() {
        return Err(ResultsgenError::EmptyResults {
            range: range.to_string(),
        });
    }
    html::results_table(&results.records, presentation)
}

/// Live results tabs, one per row of the live results table.
pub fn render_live_results(source: &dyn TabularSource) -> Result<String> {
    let rows = Table::load(source, &table::LIVE_RESULTS)?;
    html::live_results(&query::live_races(&rows.records))
}

/// EventON resource list of the event.
pub fn render_event_resources(
    source: &dyn TabularSource,
    params: &GenerationParams,
    presentation: &Presentation,
) -> Result<String> {
    let event_id = params.require_event_id()?;
    let base_url = params.event_files_url()?;

    let event_files = Table::load(source, &table::EVENT_FILES)?;
    let event_on = Table::load(source, &table::EVENT_ON)?;

    let resources = query::event_resources(
        &event_files.records,
        &event_on.records,
        event_id,
        &base_url,
    );
    html::resources_list(&resources, presentation)
}

/// Render an artifact without writing it.
pub fn render(
    artifact: Artifact,
    sources: Sources<'_>,
    params: &GenerationParams,
    presentation: &Presentation,
) -> Result<Document> {
    let file_name = artifact.file_name(params)?;
    let content = match artifact {
        Artifact::EventsJson => render_events_json(sources.database)?,
        Artifact::EventJson => render_event_json(sources.database, params)?,
        Artifact::ResultsFiles => render_results_files(sources.database, params)?,
        Artifact::ResultsTable => render_results_table(sources.results, params, presentation)?,
        Artifact::LiveResults => render_live_results(sources.database)?,
        Artifact::EventResources => render_event_resources(sources.database, params, presentation)?,
    };

    Ok(Document {
        file_name,
        mime: artifact.mime(),
        content,
    })
}

/// Render an artifact and write it to the sink. Returns the file name written.
pub fn generate(
    artifact: Artifact,
    sources: Sources<'_>,
    sink: &dyn FileSink,
    params: &GenerationParams,
    presentation: &Presentation,
) -> Result<String> {
    let document = render(artifact, sources, params, presentation)?;
    sink.write(&document.file_name, &document.content, document.mime)?;
    info!(artifact = %artifact, file = %document.file_name, "generated");
    Ok(document.file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MemorySink, MemorySource};

    fn season() -> MemorySource {
        MemorySource::new()
            .with_range(
                "TableEvent",
                &[
                    &["id", "eventReference", "title", "startDate", "endDate", "city", "county", "district", "budget"],
                    &["10", "2024-lisboa", "Triatlo de Lisboa", "01/06/2024", "02/06/2024", "Lisboa", "Lisboa", "Lisboa", "5000"],
                    &["11", "2024-porto", "Duatlo do Porto", "08/06/2024", "08/06/2024", "Porto", "Porto", "Porto", "100"],
                    &["", "", "", "", "", "", "", "", ""],
                ],
            )
            .with_range(
                "TableProgram",
                &[
                    &["id", "eventID", "sport", "distanceType", "swimDistance", "races"],
                    &["1", "10", "TRIATHLON", "SPRINT", "750", "5;3"],
                    &["2", "10", "TRIATHLON", "STANDARD", "1500", "5;4"],
                    &["3", "11", "DUATHLON", "SPRINT", "", "9"],
                ],
            )
            .with_range(
                "TableRace",
                &[
                    &["id", "programID", "title", "resultsRangeName", "headReferee"],
                    &["5", "1", "Elite", "R005", "Rui"],
                    &["3", "1", "Juniores", "R003", "Rui"],
                    &["5", "2", "Elite", "R005", "Rui"],
                    &["4", "2", "Open", "R004", "Ana"],
                    &["9", "3", "Duatlo", "R009", "Ana"],
                ],
            )
            .with_range(
                "TableOrganizer",
                &[&["id", "name"], &["20", "Clube Naval"], &["3", "Câmara Municipal"], &["8", "Outro"]],
            )
            .with_range(
                "TableEventOrganizer",
                &[&["id", "eventID", "organizerID"], &["1", "10", "20"], &["2", "10", "3"], &["3", "11", "8"]],
            )
            .with_range(
                "TableResultsFile",
                &[
                    &["id", "raceID", "active", "displayOrder", "fileName", "title", "subtitle"],
                    &["1", "4", "TRUE", "2", "open.pdf", "Open", "Geral"],
                    &["2", "5", "TRUE", "1", "elite.pdf", "Elite", "Geral"],
                    &["3", "3", "FALSE", "3", "juniores.pdf", "Juniores", "Geral"],
                    &["4", "9", "TRUE", "1", "duatlo.pdf", "Duatlo", "Geral"],
                ],
            )
            .with_range(
                "TableEventFile",
                &[
                    &["id", "eventID", "title", "description", "active", "fileName", "linkType"],
                    &["1", "10", "Lista de Partida", "", "TRUE", "partida.pdf", "START_LIST"],
                    &["2", "10", "Guia do Atleta", "", "TRUE", "guia.pdf", "GUIDE"],
                    &["3", "10", "Cartaz", "", "TRUE", "cartaz.jpg", "POSTER"],
                ],
            )
            .with_range(
                "TableEventOn",
                &[&["linkType", "linkLabel", "linkUrl"], &["FORM", "Inscrições", "https://forms.example/10"]],
            )
            .with_range(
                "TableLiveResults",
                &[&["label", "title", "url"], &["Elite", "Elite Masculino", "https://live.example/1"]],
            )
            .with_range(
                "R005",
                &[
                    &["athleteID", "rank", "name", "time"],
                    &["77", "1", "Ana", "01:02:03"],
                    &["", "", "", ""],
                ],
            )
            .with_range("R000", &[&["athleteID", "rank", "name"]])
    }

    fn params() -> GenerationParams {
        GenerationParams::new()
            .event_year("2024")
            .event_id("10")
            .event_reference("2024-lisboa")
            .race_reference("2024-lisboa-elite")
            .results_range("R005")
    }

    #[test]
    fn test_events_json_projects_fields() {
        let json = render_events_json(&season()).unwrap();
        assert!(json.starts_with(r#"[{"id":"10","eventReference":"2024-lisboa","#));
        assert!(!json.contains("budget"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_event_json_assembles_races_and_organizers() {
        let json = render_event_json(&season(), &params()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let race_ids: Vec<&str> = value["races"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap())
            .collect();
        assert_eq!(race_ids, vec!["3", "4", "5"]);
        assert_eq!(value["races"][0]["swimDistance"], "750");
        assert!(value["races"][0].get("resultsRangeName").is_none());
        assert!(value["races"][0].get("programID").is_none());

        let organizer_ids: Vec<&str> = value["organizers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_str().unwrap())
            .collect();
        assert_eq!(organizer_ids, vec!["3", "20"]);
        assert!(value.get("programs").is_none());
    }

    #[test]
    fn test_event_json_unknown_event() {
        let err = render_event_json(&season(), &params().event_id("99")).unwrap_err();
        assert!(matches!(err, ResultsgenError::EventNotFound(ref id) if id == "99"));
    }

    #[test]
    fn test_results_files_list_for_event() {
        let html = render_results_files(&season(), &params()).unwrap();
        let elite = html.find("elite.pdf").unwrap();
        let open = html.find("open.pdf").unwrap();
        assert!(elite < open);
        assert!(!html.contains("juniores.pdf"));
        assert!(!html.contains("duatlo.pdf"));
        assert!(html.contains(
            "https://api-files.federacao-triatlo.pt/2024/events/2024-lisboa/elite.pdf"
        ));
    }

    #[test]
    fn test_results_table_from_results_range() {
        let html = render_results_table(&season(), &params(), &Presentation::default()).unwrap();
        assert!(html.contains("<th>#</th>"));
        assert!(html.contains("<td>Ana</td>"));
        assert!(!html.contains("<td>77</td>"));
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_results_table_without_rows() {
        let err = render_results_table(&season(), &params().results_range("R000"), &Presentation::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "results range 'R000' has no rows");
    }

    #[test]
    fn test_event_resources_order() {
        let html = render_event_resources(&season(), &params(), &Presentation::default()).unwrap();
        let guide = html.find("Guia do Atleta").unwrap();
        let form = html.find("Inscrições").unwrap();
        let start = html.find("Lista de Partida").unwrap();
        assert!(guide < form && form < start);
        assert!(!html.contains("cartaz.jpg"));
    }

    #[test]
    fn test_generate_writes_named_files() {
        let source = season();
        let sink = MemorySink::new();
        let presentation = Presentation::default();

        for artifact in Artifact::ALL {
            generate(artifact, Sources::single(&source), &sink, &params(), &presentation).unwrap();
        }

        assert_eq!(
            sink.file_names(),
            vec![
                "events.json",
                "2024-lisboa.json",
                "2024-lisboa.html",
                "2024-lisboa-elite.html",
                "2024-lisboa-LIVE.html",
                "2024-lisboa-EventON.html",
            ]
        );
        assert!(sink
            .content("2024-lisboa-LIVE.html")
            .unwrap()
            .contains("data-target=\"live001\""));
    }

    #[test]
    fn test_missing_range_writes_nothing() {
        let source = MemorySource::new();
        let sink = MemorySink::new();
        let err = generate(
            Artifact::EventsJson,
            Sources::single(&source),
            &sink,
            &params(),
            &Presentation::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ResultsgenError::RangeNotFound { .. }));
        assert!(sink.file_names().is_empty());
    }

    #[test]
    fn test_missing_parameter() {
        let err = render(
            Artifact::ResultsTable,
            Sources::single(&season()),
            &GenerationParams::new(),
            &Presentation::default(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "missing parameter: race reference");
    }

    #[test]
    fn test_artifact_names_round_trip() {
        for artifact in Artifact::ALL {
            assert_eq!(artifact.name().parse::<Artifact>().unwrap(), artifact);
        }
        assert!("pdf".parse::<Artifact>().is_err());
    }
}
