use common::catalog::find_style;
use common::model::gallery::GeneratedImage;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::effects::gradient_text::GradientText;
use crate::layout::Panel;

const HEADING_GRADIENT: &[&str] = &["#40ffaa", "#4079ff", "#40ffaa"];

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    #[prop_or_default]
    pub images: Vec<GeneratedImage>,
}

/// "Your Creations": finished images, newest first, or the empty state.
pub struct Gallery;

impl Component for Gallery {
    type Message = ();
    type Properties = GalleryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Gallery
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let images = &ctx.props().images;

        html! {
            <Panel>
                <GradientText colors={HEADING_GRADIENT} animation_speed={3.0} class={classes!("heading-lg", "gallery-title")}>
                    {"Your Creations"}
                </GradientText>
                if images.is_empty() {
                    <div class="gallery-empty">
                        <p class="gallery-empty-title">{"No images generated yet"}</p>
                        <p>{"Enter a prompt and click generate to create your first image"}</p>
                    </div>
                } else {
                    <div class="gallery-grid">
                        { for images.iter().rev().map(gallery_card) }
                    </div>
                }
            </Panel>
        }
    }
}

fn gallery_card(image: &GeneratedImage) -> Html {
    let style_name = find_style(&image.settings.style).map_or("Custom", |s| s.name);

    html! {
        <figure key={image.id.clone()} class="gallery-card">
            <img src={image.url.clone()} alt={image.prompt.clone()} loading="lazy" />
            <figcaption>
                <p class="gallery-prompt">{ image.prompt.clone() }</p>
                <p class="message-muted">
                    { format!("{} · {}", style_name, format_timestamp(image.timestamp)) }
                </p>
            </figcaption>
        </figure>
    }
}

fn format_timestamp(millis: u64) -> String {
    js_sys::Date::new(&JsValue::from_f64(millis as f64))
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}
