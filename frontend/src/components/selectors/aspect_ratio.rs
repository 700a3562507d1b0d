use common::catalog::ASPECT_RATIOS;
use yew::prelude::*;

use super::SelectorProps;
use crate::layout::Panel;

pub struct AspectRatioSelector;

impl Component for AspectRatioSelector {
    type Message = ();
    type Properties = SelectorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AspectRatioSelector
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <Panel>
                <h3 class="heading-md">{"Aspect Ratio"}</h3>
                <div class="option-row">
                    {
                        for ASPECT_RATIOS.iter().map(|ratio| {
                            let id = ratio.id;
                            let on_change = props.on_change.clone();
                            html! {
                                <button
                                    key={id}
                                    type="button"
                                    class={classes!("ratio-option", format!("ratio-{}", id), (props.value.as_str() == id).then_some("selected"))}
                                    onclick={Callback::from(move |_: MouseEvent| on_change.emit(id.to_string()))}
                                >
                                    <span class="ratio-shape" />
                                    <span class="option-name">{ ratio.name }</span>
                                </button>
                            }
                        })
                    }
                </div>
            </Panel>
        }
    }
}
