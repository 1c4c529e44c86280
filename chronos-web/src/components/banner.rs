use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
}

/// Plan-limited notice shown on capped views for guest/free tiers.
#[function_component(LimitedBanner)]
pub fn limited_banner(p: &Props) -> Html {
    html! {
        <div class="banner banner-limited" role="note">
            { p.text.clone() }
        </div>
    }
}
