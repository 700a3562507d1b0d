//! Root view. Owns the `GenerationSettings` record and replaces it wholesale
//! whenever a child reports a change.

use common::model::gallery::GeneratedImage;
use common::model::settings::GenerationSettings;
use gloo_console::{log, warn};
use yew::{classes, html, Component, Context, Html};

use crate::components::effects::click_spark::ClickSpark;
use crate::components::effects::dark_veil::DarkVeil;
use crate::components::effects::gradient_text::GradientText;
use crate::components::gallery::Gallery;
use crate::components::negative_prompt::NegativePromptInput;
use crate::components::prompt::PromptInputComponent;
use crate::components::selectors::aspect_ratio::AspectRatioSelector;
use crate::components::selectors::resolution::ResolutionSelector;
use crate::components::selectors::style::StyleSelector;
use crate::helpers::show_toast;
use crate::layout::Panel;

const TITLE_GRADIENT: &[&str] = &["#40ffaa", "#4079ff", "#9c40ff", "#4079ff", "#40ffaa"];

pub enum Msg {
    SetPrompt(String),
    SetNegativePrompt(String),
    SetStyle(String),
    SetAspectRatio(String),
    SetResolution(String),
    Generate,
}

pub struct App {
    settings: GenerationSettings,
    gallery: Vec<GeneratedImage>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            settings: GenerationSettings::default(),
            gallery: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.settings = match msg {
            Msg::SetPrompt(value) => self.settings.with_prompt(value),
            Msg::SetNegativePrompt(value) => self.settings.with_negative_prompt(value),
            Msg::SetStyle(value) => self.settings.with_style(value),
            Msg::SetAspectRatio(value) => self.settings.with_aspect_ratio(value),
            Msg::SetResolution(value) => self.settings.with_resolution(value),
            Msg::Generate => {
                self.generate();
                return false;
            }
        };
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let settings = &self.settings;

        html! {
            <ClickSpark spark_color="#40ffaa" spark_count={12} spark_radius={20.0}>
                <div class="app-root">
                    <div class="app-background">
                        <DarkVeil
                            hue_shift={180.0}
                            noise_intensity={0.03}
                            scanline_intensity={0.08}
                            speed={0.3}
                            scanline_frequency={0.8}
                            warp_amount={0.15}
                        />
                    </div>

                    <div class="app-content">
                        <header class="app-header">
                            <GradientText colors={TITLE_GRADIENT} animation_speed={4.0} class={classes!("heading-xl")}>
                                {"✨ Gemini AI Image Generator"}
                            </GradientText>
                            <p class="app-subtitle">{"Transform your imagination into stunning visuals with AI"}</p>
                        </header>

                        <main class="app-main">
                            <div class="form-grid">
                                <div class="form-column-wide">
                                    <PromptInputComponent
                                        value={settings.prompt.clone()}
                                        on_change={link.callback(Msg::SetPrompt)}
                                    />
                                    <NegativePromptInput
                                        value={settings.negative_prompt.clone()}
                                        on_change={link.callback(Msg::SetNegativePrompt)}
                                    />
                                    { image_to_image_panel() }
                                </div>

                                <div class="form-column">
                                    <StyleSelector
                                        value={settings.style.clone()}
                                        on_change={link.callback(Msg::SetStyle)}
                                    />
                                    <AspectRatioSelector
                                        value={settings.aspect_ratio.clone()}
                                        on_change={link.callback(Msg::SetAspectRatio)}
                                    />
                                    <ResolutionSelector
                                        value={settings.resolution.clone()}
                                        aspect_ratio={settings.aspect_ratio.clone()}
                                        on_change={link.callback(Msg::SetResolution)}
                                    />
                                    <button
                                        type="button"
                                        class="generate-button"
                                        disabled={!settings.can_generate()}
                                        onclick={link.callback(|_| Msg::Generate)}
                                    >
                                        {"✨ Generate Image"}
                                    </button>
                                </div>
                            </div>

                            <Gallery images={self.gallery.clone()} />
                        </main>

                        <footer class="app-footer">
                            <p>{"Made with ❤️ by Riya | Powered by Google Gemini AI"}</p>
                        </footer>
                    </div>
                </div>
            </ClickSpark>
        }
    }
}

impl App {
    /// No generation backend is wired in: a valid request is only logged.
    fn generate(&self) {
        match self.settings.validate() {
            Ok(()) => {
                let payload = serde_json::to_string(&self.settings).unwrap_or_default();
                log!(format!("generate requested: {}", payload));
                show_toast("Image generation is not available yet.");
            }
            Err(err) => {
                warn!(format!("generate rejected: {}", err));
                show_toast(&err.to_string());
            }
        }
    }
}

/// Drop zone for image-to-image requests. Uploads are not accepted yet.
fn image_to_image_panel() -> Html {
    html! {
        <Panel>
            <h3 class="heading-md">
                {"Image to Image "}
                <span class="muted-note">{"(Optional)"}</span>
            </h3>
            <div class="drop-zone">
                <p>{"Click to upload an image or drag and drop"}</p>
                <p class="drop-zone-hint">{"PNG, JPG up to 10MB"}</p>
            </div>
        </Panel>
    }
}
