use yew::prelude::*;

use crate::session::SupportChannel;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub channel: SupportChannel,
    pub on_resolve: Callback<()>,
    pub on_open_docs: Callback<()>,
}

#[function_component(SupportPage)]
pub fn support_page(props: &Props) -> Html {
    // Resolve the contact link on first entry; an unconfigured channel is a
    // valid resting state, so no retry loop.
    {
        let resolve = props.on_resolve.clone();
        let unresolved = props.channel == SupportChannel::Unknown;
        use_effect_with(unresolved, move |pending| {
            if *pending {
                resolve.emit(());
            }
            || {}
        });
    }

    let open_docs = {
        let cb = props.on_open_docs.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let contact = match &props.channel {
        SupportChannel::Unknown => html! {
            <p class="placeholder">{ "Looking up the support contact…" }</p>
        },
        SupportChannel::Configured(url) => html! {
            <a class="btn btn-primary" href={url.clone()} target="_blank" rel="noopener">
                { "Chat on WhatsApp" }
            </a>
        },
        SupportChannel::Unconfigured => html! {
            <p class="placeholder">{ "WhatsApp support is not configured for this deployment." }</p>
        },
    };

    html! {
        <section class="view view-support">
            <div class="card">
                <h2>{ "Need help?" }</h2>
                { contact }
                <button class="btn btn-ghost" onclick={open_docs}>{ "Open API docs" }</button>
            </div>
        </section>
    }
}
