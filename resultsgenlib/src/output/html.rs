//! HTML fragment rendering.
//!
//! Each fragment lives in a handlebars template under `templates/`, embedded
//! at compile time and rendered from a small serializable context. Templates
//! indent with tabs; the rendered markup is normalized to two spaces per
//! level. Cell values are inserted verbatim.

use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde::Serialize;
use tracing::warn;

use crate::data::Record;
use crate::query::{is_active, LiveRace, Resource};
use crate::Result;

use super::presentation::Presentation;

/// Result column that is never published.
pub const HIDDEN_RESULT_FIELD: &str = "athleteID";

const RESULTS_FILES_TEMPLATE: &str = include_str!("../../templates/results_files.html.hbs");
const RESULTS_TABLE_TEMPLATE: &str = include_str!("../../templates/results_table.html.hbs");
const RESOURCES_LIST_TEMPLATE: &str = include_str!("../../templates/resources_list.html.hbs");
const LIVE_RESULTS_TEMPLATE: &str = include_str!("../../templates/live_results.html.hbs");

#[derive(Debug, Serialize)]
struct ResultsFilesContext<'a> {
    event_reference: &'a str,
    files: Vec<FileLink<'a>>,
}

#[derive(Debug, Serialize)]
struct FileLink<'a> {
    url: String,
    title: &'a str,
    subtitle: &'a str,
}

#[derive(Debug, Serialize)]
struct ResultsTableContext<'a> {
    labels: Vec<String>,
    rows: Vec<Vec<&'a str>>,
}

#[derive(Debug, Serialize)]
struct ResourcesContext<'a> {
    resources: Vec<ResourceItem<'a>>,
}

/// A resource with its icon classes resolved.
#[derive(Debug, Serialize)]
struct ResourceItem<'a> {
    #[serde(flatten)]
    resource: &'a Resource,
    icon: &'a str,
}

#[derive(Debug, Serialize)]
struct LiveResultsContext<'a> {
    races: &'a [LiveRace],
}

/// Registry shared by every fragment: no HTML escaping, plus an `upper` helper.
fn get_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(no_escape);

    handlebars_helper!(upper: |s: String| s.to_uppercase());
    handlebars.register_helper("upper", Box::new(upper));

    handlebars
}

fn render_fragment<T: Serialize>(template: &str, context: &T) -> Result<String> {
    let html = get_handlebars().render_template(template, context)?;
    Ok(normalize_indentation(&html))
}

/// Replace every tab with two spaces.
pub fn normalize_indentation(html: &str) -> String {
    html.replace('\t', "\x20\x20")
}

/// Downloadable results files of an event, preceded by the results-table host element.
///
/// Only files with `active == "TRUE"` are listed, in the order given.
pub fn results_files_list(
    files: &[Record],
    event_reference: &str,
    file_base_url: &str,
) -> Result<String> {
    let context = ResultsFilesContext {
        event_reference,
        files: files
            .iter()
            .filter(|f| is_active(f))
            .map(|f| FileLink {
                url: format!("{}{}", file_base_url, f.value("fileName")),
                title: f.value("title"),
                subtitle: f.value("subtitle"),
            })
            .collect(),
    };
    render_fragment(RESULTS_FILES_TEMPLATE, &context)
}

/// Column labels for a results table: the first row's fields minus `athleteID`, translated.
///
/// Fields missing from the label table render as an empty header cell.
pub fn results_table_labels(results: &[Record], presentation: &Presentation) -> Vec<String> {
    let Some(first) = results.first() else {
        return Vec::new();
    };

    first
        .fields()
        .filter(|field| *field != HIDDEN_RESULT_FIELD)
        .map(|field| match presentation.label(field) {
            Some(label) => label.to_string(),
            None => {
                warn!(field, "no display label for field");
                String::new()
            }
        })
        .collect()
}

/// Race results as a table.
pub fn results_table(results: &[Record], presentation: &Presentation) -> Result<String> {
    let context = ResultsTableContext {
        labels: results_table_labels(results, presentation),
        rows: results
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|(field, _)| *field != HIDDEN_RESULT_FIELD)
                    .map(|(_, value)| value)
                    .collect()
            })
            .collect(),
    };
    render_fragment(RESULTS_TABLE_TEMPLATE, &context)
}

/// Resource links for an event's EventON page. Unknown link types get no icon.
pub fn resources_list(resources: &[Resource], presentation: &Presentation) -> Result<String> {
    let context = ResourcesContext {
        resources: resources
            .iter()
            .map(|resource| ResourceItem {
                resource,
                icon: presentation.icon(&resource.link_type).unwrap_or_default(),
            })
            .collect(),
    };
    render_fragment(RESOURCES_LIST_TEMPLATE, &context)
}

/// Live results widget: tab strip, one framed panel per race, and the toggle script.
pub fn live_results(races: &[LiveRace]) -> Result<String> {
    render_fragment(LIVE_RESULTS_TEMPLATE, &LiveResultsContext { races })
}
