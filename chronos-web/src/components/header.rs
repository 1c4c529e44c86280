use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    /// Status pill text, e.g. `"Active · Premium"` or `"Guest"`.
    pub pill_label: String,
    /// Tone class suffix for the pill dot.
    pub pill_tone: AttrValue,
    /// `None` while the boot health probe is still running.
    pub api_live: Option<bool>,
    pub on_menu: Callback<()>,
    pub on_open_docs: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let open_menu = {
        let cb = p.on_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_docs = {
        let cb = p.on_open_docs.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let api_status = match p.api_live {
        Some(true) => "API live",
        Some(false) => "API unreachable",
        None => "Probing API…",
    };

    html! {
        <header role="banner" class="topbar">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="topbar-left">
                <button class="menu-btn" aria-label="Open navigation" onclick={open_menu}>
                    { "☰" }
                </button>
                <div class="view-heading">
                    <h1 id="view-title">{ p.title.clone() }</h1>
                    <p id="view-subtitle">{ p.subtitle.clone() }</p>
                </div>
            </div>
            <div class="topbar-right">
                <span class={classes!("pill", p.pill_tone.to_string())} aria-live="polite">
                    <span class="dot"></span>
                    { p.pill_label.clone() }
                </span>
                <span class="api-status">{ api_status }</span>
                <button class="docs-btn" onclick={open_docs}>{ "API docs" }</button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        live: Option<bool>,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <Header
                title="Dashboard"
                subtitle="Control center"
                pill_label={String::from("Active · Premium")}
                pill_tone="tone-ok"
                api_live={props.live}
                on_menu={Callback::noop()}
                on_open_docs={Callback::noop()}
            />
        }
    }

    fn render(live: Option<bool>) -> String {
        block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps { live })
                .hydratable(false)
                .render(),
        )
    }

    #[test]
    fn header_shows_pill_and_health_state() {
        let html = render(Some(true));
        assert!(html.contains("Active · Premium"));
        assert!(html.contains("API live"));
        assert!(html.contains("tone-ok"));

        let html = render(Some(false));
        assert!(html.contains("API unreachable"));
    }

    #[test]
    fn header_render_is_idempotent() {
        assert_eq!(render(None), render(None));
    }
}
