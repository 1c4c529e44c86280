use yew::prelude::*;

use crate::components::banner::LimitedBanner;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Guest and free tiers only see the capped ranking.
    pub limited: bool,
}

#[function_component(SignalsPage)]
pub fn signals_page(props: &Props) -> Html {
    html! {
        <section class="view view-signals">
            if props.limited {
                <LimitedBanner text="Free tier shows the top 3 signals only. Upgrade for the full ranking." />
            }
            <div class="card">
                <table class="table signals-table">
                    <thead>
                        <tr>
                            <th>{ "Pair" }</th>
                            <th>{ "Score" }</th>
                            <th>{ "Direction" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr><td colspan="3" class="placeholder">{ "Waiting for the next scan…" }</td></tr>
                    </tbody>
                </table>
            </div>
        </section>
    }
}
