//! Update function of the tender modal.
//!
//! Comment messages only touch local state. Delete and archive dispatch
//! through `actions` inside the click handler and spawn the returned
//! follow-up; `actions` decides when the modal closes. Document download is a
//! plain browser navigation.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::HttpTenderActions;
use crate::notifications::Toasts;

use super::actions::{archive_tender, delete_tender};
use super::helpers::navigate_to;
use super::messages::Msg;
use super::state::TenderModal;

/// Returns `true` when the view must re-render.
pub fn update(component: &mut TenderModal, ctx: &Context<TenderModal>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateComment(text) => {
            component.comment.set_text(&text);
            true
        }
        Msg::AddComment => {
            component.comment.add();
            true
        }
        Msg::EditComment => {
            component.comment.edit();
            true
        }
        Msg::SaveComment => {
            component.comment.save();
            true
        }
        Msg::DownloadDocumentation => {
            if let Some(url) = &component.download_url {
                navigate_to(url);
            }
            false
        }
        Msg::Delete => {
            let props = ctx.props();
            let actions = HttpTenderActions::new(props.config.clone());
            let on_close = props.on_close.clone();
            let on_delete = props.on_delete.clone();

            let outcome = delete_tender(
                &actions,
                Toasts,
                props.tender.tender_id,
                props.is_archive_view,
                move || on_close.emit(()),
                move |id| {
                    if let Some(on_delete) = on_delete {
                        on_delete.emit(id);
                    }
                },
            );
            spawn_local(outcome);
            false
        }
        Msg::Archive => {
            let props = ctx.props();
            let actions = HttpTenderActions::new(props.config.clone());
            let on_close = props.on_close.clone();
            let on_delete = props.on_delete.clone();

            let outcome = archive_tender(
                &actions,
                Toasts,
                props.tender.tender_id,
                component.liveness.clone(),
                move || on_close.emit(()),
                move |id| {
                    if let Some(on_delete) = on_delete {
                        on_delete.emit(id);
                    }
                },
            );
            spawn_local(outcome);
            false
        }
    }
}
