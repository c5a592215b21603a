//! Route table of the backend tender API.
//!
//! Every builder takes the API origin (e.g. `http://localhost:5000`) so the
//! frontend can point at whichever backend it was configured for. The origin
//! is expected without a trailing slash.

/// The base path for all tender endpoints.
pub const API_PATH: &str = "/api/tenders";

/// `GET` list of active tenders.
pub fn tenders_url(base: &str) -> String {
    format!("{}{}", base, API_PATH)
}

/// `GET` list of archived tenders.
pub fn archived_tenders_url(base: &str) -> String {
    format!("{}{}/archive", base, API_PATH)
}

/// `POST` moves an active tender to the archive.
pub fn archive_tender_url(base: &str, tender_id: u64) -> String {
    format!("{}{}/{}/archive", base, API_PATH, tender_id)
}

/// `DELETE` removes an active tender.
pub fn delete_tender_url(base: &str, tender_id: u64) -> String {
    format!("{}{}/{}", base, API_PATH, tender_id)
}

/// `DELETE` removes a tender from the archive.
pub fn delete_archived_tender_url(base: &str, tender_id: u64) -> String {
    format!("{}{}/archive/{}", base, API_PATH, tender_id)
}

/// `GET` streams a tender document as an attachment.
pub fn document_download_url(base: &str, tender_id: u64, document_id: &str) -> String {
    format!(
        "{}{}/{}/documents/{}/download",
        base, API_PATH, tender_id, document_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:5000";

    #[test]
    fn download_url_matches_backend_route() {
        assert_eq!(
            document_download_url(BASE, 42, "abc123"),
            "http://localhost:5000/api/tenders/42/documents/abc123/download"
        );
    }

    #[test]
    fn action_urls() {
        assert_eq!(archive_tender_url(BASE, 9), "http://localhost:5000/api/tenders/9/archive");
        assert_eq!(delete_tender_url(BASE, 9), "http://localhost:5000/api/tenders/9");
        assert_eq!(
            delete_archived_tender_url(BASE, 9),
            "http://localhost:5000/api/tenders/archive/9"
        );
    }

    #[test]
    fn list_urls_work_with_relative_origin() {
        assert_eq!(tenders_url(""), "/api/tenders");
        assert_eq!(archived_tenders_url(""), "/api/tenders/archive");
    }
}
