//! State held by a mounted `TenderModal`.

use common::model::tender::Tender;
use common::requests::document_download_url;

use super::actions::Liveness;
use super::comment::CommentEditor;
use super::props::TenderModalProps;

pub struct TenderModal {
    /// Comment widget, seeded once from the tender.
    pub comment: CommentEditor,

    /// Download URL of the tender documentation, `None` disables the button.
    /// Recomputed only when the `tender` property is replaced.
    pub download_url: Option<String>,

    /// Cleared on unmount so pending archive responses do not touch the modal.
    pub liveness: Liveness,
}

impl TenderModal {
    pub fn new(props: &TenderModalProps) -> Self {
        Self {
            comment: CommentEditor::new(props.tender.comment_text()),
            download_url: documentation_url(&props.config.api_base, &props.tender),
            liveness: Liveness::new(),
        }
    }
}

/// Download URL for the first "Тендерна документація" document, if any.
pub fn documentation_url(api_base: &str, tender: &Tender) -> Option<String> {
    tender
        .documentation()
        .map(|document| document_download_url(api_base, tender.tender_id, &document.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::tender::{Document, DocumentGroup, TENDER_DOCUMENTATION_TITLE};
    use std::rc::Rc;
    use yew::Callback;

    use crate::components::tender_modal::comment::CommentState;
    use crate::config::AppConfig;

    fn props(tender: Tender) -> TenderModalProps {
        TenderModalProps {
            tender: Rc::new(tender),
            is_open: true,
            on_close: Callback::noop(),
            on_delete: None,
            is_archive_view: false,
            config: AppConfig::new("http://localhost:5000"),
        }
    }

    #[test]
    fn bare_tender_starts_empty_with_download_disabled() {
        let modal = TenderModal::new(&props(Tender {
            tender_id: 42,
            comment: Some(String::new()),
            ..Default::default()
        }));

        assert_eq!(modal.comment.state(), CommentState::Empty);
        assert!(modal.download_url.is_none());

        let mut comment = modal.comment;
        comment.set_text("ok");
        comment.add();
        assert_eq!(comment.state(), CommentState::Committed);
        assert!(comment.is_read_only());
    }

    #[test]
    fn documentation_enables_download() {
        let modal = TenderModal::new(&props(Tender {
            tender_id: 42,
            documents: vec![DocumentGroup {
                title: TENDER_DOCUMENTATION_TITLE.to_string(),
                documents: vec![Document {
                    id: "d-1".to_string(),
                    title: None,
                }],
            }],
            comment: Some("уже есть".to_string()),
            ..Default::default()
        }));

        assert_eq!(
            modal.download_url.as_deref(),
            Some("http://localhost:5000/api/tenders/42/documents/d-1/download")
        );
        assert_eq!(modal.comment.state(), CommentState::Committed);
    }
}
