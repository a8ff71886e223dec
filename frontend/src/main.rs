use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod pages;
mod sequence;

fn main() {
    yew::Renderer::<App>::new().render();
}
