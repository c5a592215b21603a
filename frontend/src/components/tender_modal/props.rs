//! Properties of the `TenderModal`.

use std::rc::Rc;

use common::model::tender::Tender;
use yew::prelude::*;

use crate::config::AppConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct TenderModalProps {
    /// The tender to display. Local comment state is seeded from it on mount.
    pub tender: Rc<Tender>,

    /// Whether the overlay is shown.
    #[prop_or_default]
    pub is_open: bool,

    /// Dismisses the modal. Emitted by the OK button, a backdrop click, a
    /// delete, and a confirmed archive.
    pub on_close: Callback<()>,

    /// Emitted with the tender id once the backend confirms the tender left
    /// the current list (deleted or archived).
    #[prop_or_default]
    pub on_delete: Option<Callback<u64>>,

    /// Archive listing: offers permanent deletion instead of archiving.
    #[prop_or_default]
    pub is_archive_view: bool,

    /// Backend origin used for actions and document downloads.
    #[prop_or_default]
    pub config: AppConfig,
}
