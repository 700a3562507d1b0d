//! Click feedback: every click inside the wrapper emits a ring of sparks that
//! fly outward and fade. Each burst removes itself after `duration_ms`.

use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ClickSparkProps {
    #[prop_or(AttrValue::Static("#fff"))]
    pub spark_color: AttrValue,
    /// Length of a spark line in px.
    #[prop_or(10.0)]
    pub spark_size: f64,
    /// Distance travelled in px.
    #[prop_or(15.0)]
    pub spark_radius: f64,
    #[prop_or(8)]
    pub spark_count: u32,
    #[prop_or(400)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Burst { x: i32, y: i32 },
    Expire(String),
}

struct Burst {
    id: String,
    x: i32,
    y: i32,
}

pub struct ClickSpark {
    bursts: Vec<Burst>,
}

impl Component for ClickSpark {
    type Message = Msg;
    type Properties = ClickSparkProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { bursts: Vec::new() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Burst { x, y } => {
                let id = format!("spark-{}", Uuid::new_v4());
                self.bursts.push(Burst { id: id.clone(), x, y });

                let link = ctx.link().clone();
                let duration = ctx.props().duration_ms;
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(duration).await;
                    link.send_message(Msg::Expire(id));
                });
                true
            }
            Msg::Expire(id) => {
                let before = self.bursts.len();
                self.bursts.retain(|burst| burst.id != id);
                self.bursts.len() != before
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onclick = ctx.link().callback(|e: MouseEvent| Msg::Burst {
            x: e.client_x(),
            y: e.client_y(),
        });

        html! {
            <div class="click-spark" {onclick}>
                { props.children.clone() }
                <div class="spark-layer">
                    {
                        for self.bursts.iter().map(|burst| html! {
                            <div key={burst.id.clone()} class="spark-burst"
                                 style={format!("left: {}px; top: {}px;", burst.x, burst.y)}>
                                {
                                    for spark_angles(props.spark_count).into_iter().map(|angle| html! {
                                        <span class="spark" style={spark_style(props, angle)} />
                                    })
                                }
                            </div>
                        })
                    }
                </div>
            </div>
        }
    }
}

/// Evenly spaced directions in degrees, starting at 0.
pub fn spark_angles(count: u32) -> Vec<f64> {
    (0..count)
        .map(|i| 360.0 * f64::from(i) / f64::from(count))
        .collect()
}

fn spark_style(props: &ClickSparkProps, angle: f64) -> String {
    format!(
        "--spark-angle: {}deg; --spark-radius: {}px; width: {}px; background: {}; animation-duration: {}ms;",
        angle, props.spark_radius, props.spark_size, props.spark_color, props.duration_ms
    )
}
