use crate::app::App;

mod app;
mod components;
mod helpers;
mod layout;

fn main() {
    yew::Renderer::<App>::new().render();
}
