use crate::{
    api::body::decode_json,
    error::ApiError,
    model::entry::{self, Entry, EntryFields},
    models::{Ack, ErrorBody},
    store::Store,
};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, info, instrument};

/// List all entries
#[utoipa::path(
    get,
    path = "/getData",
    responses(
        (status = 200, description = "Every stored entry, in insertion order", body = [EntryFields]),
        (status = 500, description = "Data file unreadable", body = ErrorBody, example = json!({
            "error": "Unable to read data file."
        }))
    ),
    tag = "Entries"
)]
pub async fn get_data(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    store.ensure_exists().await?;
    let entries = store.load().await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// Append an entry
///
/// The body is stored as sent, whatever its shape. A body not sent as JSON is
/// stored as `{}`. Duplicate dates are allowed.
#[utoipa::path(
    post,
    path = "/addEntry",
    request_body = EntryFields,
    responses(
        (status = 200, description = "Entry appended", body = Ack, example = json!({
            "success": true,
            "message": "Entry added successfully!"
        })),
        (status = 400, description = "Body is not valid JSON, or is a bare scalar", body = ErrorBody),
        (status = 413, description = "Body larger than the configured limit"),
        (status = 500, description = "Data file unreadable or unwritable", body = ErrorBody)
    ),
    tag = "Entries"
)]
pub async fn add_entry(
    store: web::Data<Store>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let new_entry = Entry::from(decode_json(&req, &body)?);
    debug!(
        entry = ?new_entry,
        unrecognized = ?new_entry.unrecognized_fields(),
        "New entry"
    );

    let date = new_entry.date().map(str::to_owned);
    let total = store
        .modify(|entries| -> Result<usize, ApiError> {
            entries.push(new_entry);
            Ok(entries.len())
        })
        .await?;

    info!(date = ?date, total, "Entry added");
    Ok(HttpResponse::Ok().json(Ack::new("Entry added successfully!")))
}

/// Update the first entry with the given date
///
/// Fields in the body overwrite the stored ones; everything else is kept.
/// Sending a different `date` re-keys the entry. A body that is not an object
/// changes nothing.
#[utoipa::path(
    put,
    path = "/updateEntry/{date}",
    params(
        ("date" = String, Path, description = "Date key of the entry to update")
    ),
    request_body = EntryFields,
    responses(
        (status = 200, description = "Entry updated", body = Ack, example = json!({
            "success": true,
            "message": "Entry updated successfully!"
        })),
        (status = 400, description = "Body is not valid JSON, or is a bare scalar", body = ErrorBody),
        (status = 404, description = "No entry has this date", body = ErrorBody, example = json!({
            "error": "Entry not found."
        })),
        (status = 500, description = "Data file unreadable or unwritable", body = ErrorBody)
    ),
    tag = "Entries"
)]
#[instrument(skip(store, path, req, body), fields(date = %path.as_str()))]
pub async fn update_entry(
    store: web::Data<Store>,
    path: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let date = path.into_inner();
    let patch = decode_json(&req, &body)?;

    store
        .modify(|entries| -> Result<(), ApiError> {
            let target = entry::find_first_mut(entries, &date).ok_or(ApiError::NotFound)?;
            target.merge(patch);
            Ok(())
        })
        .await?;

    info!("Entry updated");
    Ok(HttpResponse::Ok().json(Ack::new("Entry updated successfully!")))
}

/// Delete every entry with the given date
///
/// Succeeds even when nothing matched.
#[utoipa::path(
    delete,
    path = "/deleteEntry/{date}",
    params(
        ("date" = String, Path, description = "Date key of the entries to delete")
    ),
    responses(
        (status = 200, description = "Matching entries removed", body = Ack, example = json!({
            "success": true,
            "message": "Entry deleted successfully!"
        })),
        (status = 500, description = "Data file unreadable or unwritable", body = ErrorBody)
    ),
    tag = "Entries"
)]
#[instrument(skip(store, path), fields(date = %path.as_str()))]
pub async fn delete_entry(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let date = path.into_inner();

    let removed = store
        .modify(|entries| -> Result<usize, ApiError> {
            Ok(entry::remove_by_date(entries, &date))
        })
        .await?;

    info!(removed, "Entries deleted");
    Ok(HttpResponse::Ok().json(Ack::new("Entry deleted successfully!")))
}
