//! Tender details modal: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! Responsibilities
//! - Re-export `Msg`, `TenderModalProps` and `TenderModal`.
//! - Seed the comment widget on mount and memoize the documentation download
//!   URL per `tender` property.
//! - Mark the component as gone on unmount so pending archive responses do
//!   not close a modal that no longer exists.

use std::rc::Rc;

use yew::prelude::*;

mod actions;
mod comment;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TenderModalProps;
pub use state::TenderModal;

impl Component for TenderModal {
    type Message = Msg;
    type Properties = TenderModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        TenderModal::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if !Rc::ptr_eq(&old_props.tender, &props.tender) || old_props.config != props.config {
            self.download_url = state::documentation_url(&props.config.api_base, &props.tender);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.liveness.end();
    }
}
