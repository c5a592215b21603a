//! Client side of the backend tender API.
//!
//! `TenderActions` is the dispatcher the tender modal talks to when it mutates
//! a tender. `HttpTenderActions` implements it over `gloo-net`; tests swap in
//! an in-memory fake.

mod error;

use std::future::Future;

use gloo_net::http::{Request, RequestBuilder};

use common::model::tender::Tender;
use common::requests;

use crate::config::AppConfig;

pub use error::{ApiError, Result};

/// Mutating operations on a tender.
///
/// Each call prepares and logs the request before returning. The returned
/// future sends it and reports the outcome; it owns everything it needs, so
/// callers can hand it to `spawn_local` and carry on synchronously.
pub trait TenderActions {
    /// Moves an active tender to the archive.
    fn archive(&self, tender_id: u64) -> impl Future<Output = Result<()>> + 'static;

    /// Removes an active tender.
    fn delete(&self, tender_id: u64) -> impl Future<Output = Result<()>> + 'static;

    /// Removes a tender from the archive.
    fn delete_archived(&self, tender_id: u64) -> impl Future<Output = Result<()>> + 'static;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpTenderActions {
    config: AppConfig,
}

impl HttpTenderActions {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl TenderActions for HttpTenderActions {
    fn archive(&self, tender_id: u64) -> impl Future<Output = Result<()>> + 'static {
        let url = requests::archive_tender_url(&self.config.api_base, tender_id);
        gloo_console::log!(format!("archiving tender {}", tender_id));
        expect_success(Request::post(&url))
    }

    fn delete(&self, tender_id: u64) -> impl Future<Output = Result<()>> + 'static {
        let url = requests::delete_tender_url(&self.config.api_base, tender_id);
        gloo_console::log!(format!("deleting tender {}", tender_id));
        expect_success(Request::delete(&url))
    }

    fn delete_archived(&self, tender_id: u64) -> impl Future<Output = Result<()>> + 'static {
        let url = requests::delete_archived_tender_url(&self.config.api_base, tender_id);
        gloo_console::log!(format!("deleting archived tender {}", tender_id));
        expect_success(Request::delete(&url))
    }
}

/// Loads the active tenders, or the archived ones when `archived` is set.
pub async fn fetch_tenders(config: &AppConfig, archived: bool) -> Result<Vec<Tender>> {
    let url = if archived {
        requests::archived_tenders_url(&config.api_base)
    } else {
        requests::tenders_url(&config.api_base)
    };

    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        });
    }
    Ok(response.json::<Vec<Tender>>().await?)
}

/// Sends `request` and maps any non-2xx status to `ApiError::Status`.
async fn expect_success(request: RequestBuilder) -> Result<()> {
    let response = request.send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}
