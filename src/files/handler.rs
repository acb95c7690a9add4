//! Request routing for the file server.
//!
//! GET reads `<root>/<path>` and serves it when the path ends in `.txt` or
//! `.json`. POST stores the body at `<root>/<path><ext>`, where the extension
//! comes from the request's Content-Type. Every other method gets 501.

use tracing::{debug, error, info, warn};

use crate::files::store::{FileStore, StoreError};
use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, ResponseBuilder, StatusCode};

pub const NOT_FOUND_MESSAGE: &str = "Not Found. Make sure the file you are looking for exists, and make sure you include either .txt or .json in the path.";
pub const MISSING_EXTENSION_MESSAGE: &str = "Please specify a .txt or .json in the file path.";
pub const CONTENT_TYPE_MESSAGE: &str =
    "Please provide a Content-Type header of either text/plain or application/json.";
pub const INVALID_PATH_MESSAGE: &str = "Invalid file path.";
pub const CREATE_FAILED_MESSAGE: &str = "ERROR: Could not create file.";
pub const WRITE_FAILED_MESSAGE: &str = "ERROR: Could not create or write to file.";
pub const NOT_IMPLEMENTED_MESSAGE: &str =
    "ERROR: Method not implemented. Implemented methods include GET and POST.";

/// Turns parsed requests into responses backed by a [`FileStore`].
#[derive(Debug, Clone)]
pub struct FileHandler {
    store: FileStore,
}

impl FileHandler {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub async fn handle(&self, request: &Request) -> Response {
        let response = match &request.method {
            Method::GET => self.get(&request.path).await,
            Method::POST => self.post(request).await,
            Method::Other(_) => {
                Response::text(StatusCode::NotImplemented, NOT_IMPLEMENTED_MESSAGE)
            }
        };

        info!(
            method = %request.method,
            path = %request.path,
            status = response.status.as_u16(),
            "Request handled"
        );

        response
    }

    async fn get(&self, path: &str) -> Response {
        let Some(file) = self.store.resolve(path) else {
            warn!(path, "Rejected path outside storage root");
            return Response::text(StatusCode::NotFound, NOT_FOUND_MESSAGE);
        };

        let contents = match self.store.read(&file).await {
            Ok(contents) => contents,
            Err(e) => {
                debug!(file = %file.display(), error = %e, "Read failed");
                return Response::text(StatusCode::NotFound, NOT_FOUND_MESSAGE);
            }
        };

        match mime::content_type_for_path(path) {
            Some(content_type) => ResponseBuilder::new(StatusCode::Ok)
                .header("Content-Type", content_type)
                .body(contents)
                .build(),
            None => Response::text(StatusCode::NotFound, MISSING_EXTENSION_MESSAGE),
        }
    }

    async fn post(&self, request: &Request) -> Response {
        let extension = request
            .content_type()
            .map(mime::extension_for)
            .unwrap_or_default();

        if extension.is_empty() {
            return Response::text(StatusCode::BadRequest, CONTENT_TYPE_MESSAGE);
        }

        // Appended as-is: "/a.txt" posted as text/plain lands in "a.txt.txt".
        let Some(target) = self.store.resolve(&format!("{}{}", request.path, extension)) else {
            warn!(path = %request.path, "Rejected path outside storage root");
            return Response::text(StatusCode::BadRequest, INVALID_PATH_MESSAGE);
        };

        match self.store.write(&target, &request.body).await {
            Ok(()) => {
                debug!(file = %target.display(), bytes = request.body.len(), "Stored file");
                Response::created()
            }
            Err(e @ StoreError::CreateDir(_)) => {
                error!(file = %target.display(), error = %e, "Failed to store file");
                Response::text(StatusCode::InternalServerError, CREATE_FAILED_MESSAGE)
            }
            Err(e @ StoreError::Write(_)) => {
                error!(file = %target.display(), error = %e, "Failed to store file");
                Response::text(StatusCode::InternalServerError, WRITE_FAILED_MESSAGE)
            }
        }
    }
}
