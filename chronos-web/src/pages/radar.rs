use yew::prelude::*;

use crate::components::banner::LimitedBanner;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// The full radar feed needs a plus or premium plan.
    pub limited: bool,
}

#[function_component(RadarPage)]
pub fn radar_page(props: &Props) -> Html {
    html! {
        <section class="view view-radar">
            if props.limited {
                <LimitedBanner text="Radar is limited on your plan. Plus and Premium unlock the full market feed." />
            }
            <div class="card">
                <p class="placeholder">{ "Market opportunities will appear here as the scanner publishes them." }</p>
            </div>
        </section>
    }
}
