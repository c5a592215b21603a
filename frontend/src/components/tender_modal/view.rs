//! View rendering for the tender modal.
//!
//! Layout: a header with the tender number, documentation download, registry
//! link and publication date; two scrollable columns with organizer/budget on
//! the left and dates, nomenclatures and the comment widget on the right; a
//! footer with the archive/delete action and OK.
//!
//! All user-facing labels are in Russian, matching the rest of the board.

use common::model::tender::{ImportantDates, Nomenclature, Organizer, Tender};
use web_sys::HtmlTextAreaElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::overlay::ModalOverlay;

use super::comment::{CommentState, MAX_COMMENT_LEN};
use super::helpers::{format_amount, format_date};
use super::messages::Msg;
use super::state::TenderModal;

pub fn view(component: &TenderModal, ctx: &Context<TenderModal>) -> Html {
    let props = ctx.props();
    let link = ctx.link();
    let tender = &props.tender;
    let on_close = props.on_close.clone();

    html! {
        <ModalOverlay is_open={props.is_open} on_close={on_close.clone()}>
            { build_header(component, tender, link) }
            <div class="modal-scrollable">
                <div class="modal-columns">
                    <div class="modal-column left">
                        { build_organizer(tender.organizer.as_ref()) }
                        { build_finances(tender) }
                    </div>
                    <div class="modal-column right">
                        { build_dates(tender.important_dates.as_ref()) }
                        { build_nomenclatures(&tender.nomenclatures) }
                        { build_comment(component, link) }
                    </div>
                </div>
            </div>
            { build_footer(props.is_archive_view, link, on_close) }
        </ModalOverlay>
    }
}

fn build_header(component: &TenderModal, tender: &Tender, link: &Scope<TenderModal>) -> Html {
    let has_docs = component.download_url.is_some();
    let docs_style = if has_docs {
        "margin-left: auto; opacity: 1; cursor: pointer;"
    } else {
        "margin-left: auto; opacity: 0.5; cursor: not-allowed;"
    };
    let published = tender
        .date_published
        .as_deref()
        .map(format_date)
        .unwrap_or_default();

    html! {
        <div class="modal-header">
            <b>{ format!("Тендер №{}", tender.tender_id) }</b>
            <button
                class="button-link"
                style={docs_style}
                disabled={!has_docs}
                onclick={link.callback(|_| Msg::DownloadDocumentation)}
            >
                { "📄 Тендерна документація" }
            </button>
            <a
                class="button-link"
                href={tender.link_to_tender.clone().unwrap_or_default()}
                target="_blank"
                rel="noopener noreferrer"
            >
                { tender.prozorro_number.clone().unwrap_or_default() }
            </a>
            <div>
                <p>{ "Дата публикации:" }</p>
                <p>{ published }</p>
            </div>
        </div>
    }
}

fn build_organizer(organizer: Option<&Organizer>) -> Html {
    let name = organizer.and_then(|o| o.name.clone()).unwrap_or_default();
    let contact = organizer.and_then(|o| o.contact_person.as_ref());

    html! {
        <div class="info-row">
            <div class="info-block">
                <strong>{ "Организатор" }</strong>
                <p>{ name }</p>
                {
                    if let Some(person) = contact {
                        html! {
                            <div class="contact-info">
                                <p>{ format!("Контактное лицо: {}", person.name.as_deref().unwrap_or_default()) }</p>
                                <p>{ format!("Телефон: {}", person.phone.as_deref().unwrap_or_default()) }</p>
                                <p>{ format!("Email: {}", person.email.as_deref().unwrap_or_default()) }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

fn build_finances(tender: &Tender) -> Html {
    let budget = tender.budget.clone().unwrap_or_default();
    let amount = |value: Option<f64>| value.map(format_amount).unwrap_or_default();

    html! {
        <div class="info-block">
            <p>
                <b>{ "Бюджет" }</b>
                { format!(
                    " - {} ({})",
                    budget.amount_title.unwrap_or_default(),
                    budget.vat_title.unwrap_or_default()
                ) }
            </p>
            <p><b>{ "Участие" }</b>{ format!(" - {}", amount(tender.participation_cost)) }</p>
            <p><b>{ "Мин. шаг" }</b>{ format!(" - {}", amount(tender.minimal_step_amount)) }</p>
            <p style="margin-top: 10px;">
                <b>{ "Очень краткий пересказ" }</b>
                { format!(": {}", tender.description.as_deref().unwrap_or_default()) }
            </p>
        </div>
    }
}

fn build_dates(dates: Option<&ImportantDates>) -> Html {
    let dates = dates.cloned().unwrap_or_default();
    let show = |value: Option<String>| value.unwrap_or_default();

    html! {
        <div class="info-row">
            <div class="info-block">
                <strong>{ "Период уточнений" }</strong>
                <p>{ format!("с {}", show(dates.enquiry_period_start)) }</p>
                <p>{ format!(" по {}", show(dates.enquiry_period_end)) }</p>
            </div>
            <div class="info-block">
                <strong>{ "Приём предложений" }</strong>
                <p>{ format!("с {}", show(dates.tendering_period_start)) }</p>
                <p>{ format!(" по {}", show(dates.tendering_period_end)) }</p>
            </div>
            <div class="info-block">
                <strong>{ "Аукцион" }</strong>
                <p>{ show(dates.auction_start) }</p>
            </div>
        </div>
    }
}

fn build_nomenclatures(items: &[Nomenclature]) -> Html {
    if items.is_empty() {
        return html! {};
    }

    html! {
        <div class="nomenclatures">
            <strong>{ "Номенклатура" }</strong>
            <ul>
                { for items.iter().map(|item| {
                    let quantity = item.quantity.map(format_amount).unwrap_or_default();
                    html! {
                        <li>
                            { item.name.clone().unwrap_or_default() }
                            { format!(" - {} {}", quantity, item.unit.as_deref().unwrap_or_default()) }
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}

fn build_comment(component: &TenderModal, link: &Scope<TenderModal>) -> Html {
    let comment = &component.comment;
    let read_only = comment.is_read_only();
    let background = if read_only { "#f5f5f5" } else { "white" };

    let action = match comment.state() {
        CommentState::Empty => html! {
            <button
                class="button"
                style="margin-top: 10px;"
                disabled={!comment.can_add()}
                onclick={link.callback(|_| Msg::AddComment)}
            >
                { "Добавить" }
            </button>
        },
        CommentState::Editing => html! {
            <div style="margin-top: 10px;">
                <button class="button" onclick={link.callback(|_| Msg::SaveComment)}>
                    { "Сохранить" }
                </button>
            </div>
        },
        CommentState::Committed => html! {
            <div style="margin-top: 10px;">
                <button class="button" onclick={link.callback(|_| Msg::EditComment)}>
                    { "Редактировать" }
                </button>
            </div>
        },
    };

    html! {
        <>
            <strong>{ format!("Комментарий из {} символов", comment.remaining()) }</strong>
            <div>
                <textarea
                    value={comment.text().to_string()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::UpdateComment(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                    placeholder="Напишите комментарий..."
                    rows="4"
                    maxlength={MAX_COMMENT_LEN.to_string()}
                    disabled={read_only}
                    style={format!(
                        "width: 515px; padding: 10px; border-radius: 4px; border: 1px solid #ddd; background-color: {}; resize: vertical;",
                        background
                    )}
                />
                { action }
            </div>
        </>
    }
}

fn build_footer(archive_view: bool, link: &Scope<TenderModal>, on_close: Callback<()>) -> Html {
    let primary = if archive_view {
        html! { <button class="button" onclick={link.callback(|_| Msg::Delete)}>{ "Удалить" }</button> }
    } else {
        html! { <button class="button" onclick={link.callback(|_| Msg::Archive)}>{ "Перенести в архив" }</button> }
    };

    html! {
        <div class="button-group">
            { primary }
            <button class="button" onclick={on_close.reform(|_: MouseEvent| ())}>{ "ОК" }</button>
        </div>
    }
}
