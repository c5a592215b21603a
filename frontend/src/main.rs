use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod notifications;
mod overlay;

fn main() {
    yew::Renderer::<App>::new().render();
}
