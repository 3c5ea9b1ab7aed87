use crate::model::entry::EntryFields;
use crate::models::{Ack, ErrorBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Timelog API",
        version = "0.1.0",
        description = r#"
## Daily attendance log

Stores check-in/check-out times, leave and comp-off days as a single JSON
document on disk, and serves the browser page that edits it.

### Keys
Entries are addressed by their `date` string. Creating an entry never checks
for an existing date. Updates change the **first** entry with that date;
deletes remove **every** entry with that date.

### Bodies
Entries are free-form JSON objects. The fields below are the ones the front
end understands; anything else is stored and returned untouched.
"#,
    ),
    paths(
        crate::api::entry::get_data,
        crate::api::entry::add_entry,
        crate::api::entry::update_entry,
        crate::api::entry::delete_entry
    ),
    components(schemas(EntryFields, Ack, ErrorBody)),
    tags(
        (name = "Entries", description = "Attendance entry CRUD"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/getData",
            "/addEntry",
            "/updateEntry/{date}",
            "/deleteEntry/{date}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
