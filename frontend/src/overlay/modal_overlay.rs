use yew::prelude::*;

/// Full-screen backdrop with a centered content box.
///
/// Renders nothing while closed. A click on the backdrop emits `on_close`;
/// clicks inside the content box are stopped before they reach it.
pub struct ModalOverlay;

#[derive(Properties, PartialEq)]
pub struct ModalOverlayProps {
    #[prop_or_default]
    pub children: Html,
    pub is_open: bool,
    pub on_close: Callback<()>,
}

impl Component for ModalOverlay {
    type Message = ();
    type Properties = ModalOverlayProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.is_open {
            return html! {};
        }

        let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="modal-overlay" onclick={on_backdrop}>
                <div class="modal-content" onclick={stop}>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
