use std::rc::Rc;

use common::model::tender::Tender;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::api::{fetch_tenders, ApiError};
use crate::components::tender_modal::TenderModal;
use crate::config::AppConfig;
use crate::notifications::{Notifier, Toasts};

/// Tender board: lists active or archived tenders and opens the selected one
/// in a `TenderModal`.
pub struct App {
    config: AppConfig,
    tenders: Vec<Rc<Tender>>,
    archive_view: bool,
    selected: Option<Rc<Tender>>,
    loading: bool,
}

pub enum Msg {
    Load,
    Loaded { archived: bool, tenders: Vec<Tender> },
    LoadFailed(ApiError),
    ToggleArchive,
    Select(Rc<Tender>),
    CloseModal,
    Removed(u64),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            config: AppConfig::from_env(),
            tenders: Vec::new(),
            archive_view: false,
            selected: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                self.loading = true;
                let link = ctx.link().clone();
                let config = self.config.clone();
                let archived = self.archive_view;
                spawn_local(async move {
                    match fetch_tenders(&config, archived).await {
                        Ok(tenders) => link.send_message(Msg::Loaded { archived, tenders }),
                        Err(err) => link.send_message(Msg::LoadFailed(err)),
                    }
                });
                true
            }
            Msg::Loaded { archived, tenders } => {
                // a response for the view we already left
                if archived != self.archive_view {
                    return false;
                }
                self.loading = false;
                self.tenders = tenders.into_iter().map(Rc::new).collect();
                true
            }
            Msg::LoadFailed(err) => {
                self.loading = false;
                Toasts.error(&format!("Не удалось загрузить тендеры: {}", err));
                true
            }
            Msg::ToggleArchive => {
                self.archive_view = !self.archive_view;
                self.selected = None;
                self.tenders.clear();
                ctx.link().send_message(Msg::Load);
                true
            }
            Msg::Select(tender) => {
                self.selected = Some(tender);
                true
            }
            Msg::CloseModal => {
                self.selected = None;
                true
            }
            Msg::Removed(tender_id) => {
                self.tenders.retain(|t| t.tender_id != tender_id);
                if self.selected.as_ref().map(|t| t.tender_id) == Some(tender_id) {
                    self.selected = None;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let toggle_label = if self.archive_view {
            "К активным тендерам"
        } else {
            "Архив"
        };

        html! {
            <div class="tender-board">
                <div class="board-toolbar">
                    <h2>{ if self.archive_view { "Архив тендеров" } else { "Тендеры" } }</h2>
                    <button class="button" onclick={link.callback(|_| Msg::ToggleArchive)}>
                        { toggle_label }
                    </button>
                </div>
                {
                    if self.loading {
                        html! { <p>{ "Загрузка..." }</p> }
                    } else if self.tenders.is_empty() {
                        html! { <p>{ "Тендеров нет" }</p> }
                    } else {
                        html! {
                            <ul class="tender-list">
                                { for self.tenders.iter().map(|tender| {
                                    let selected = tender.clone();
                                    html! {
                                        <li
                                            key={tender.tender_id.to_string()}
                                            class="tender-row"
                                            onclick={link.callback(move |_| Msg::Select(selected.clone()))}
                                        >
                                            <b>{ format!("№{}", tender.tender_id) }</b>
                                            { " " }
                                            { tender.description.clone().unwrap_or_default() }
                                        </li>
                                    }
                                }) }
                            </ul>
                        }
                    }
                }
                {
                    if let Some(tender) = &self.selected {
                        html! {
                            <TenderModal
                                key={tender.tender_id.to_string()}
                                tender={tender.clone()}
                                is_open={true}
                                on_close={link.callback(|_| Msg::CloseModal)}
                                on_delete={Some(link.callback(Msg::Removed))}
                                is_archive_view={self.archive_view}
                                config={self.config.clone()}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

