use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Form-scoped status text; empty renders nothing.
    pub message: String,
}

/// Inline status line scoped to a single form. Errors caught at the handler
/// boundary land here, never in a global overlay.
#[function_component(Toast)]
pub fn toast(p: &Props) -> Html {
    if p.message.is_empty() {
        return Html::default();
    }
    html! {
        <p class="toast" role="status" aria-live="polite">{ p.message.clone() }</p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        message: String,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! { <Toast message={props.message.clone()} /> }
    }

    fn render(message: &str) -> String {
        block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps {
                message: message.to_string(),
            })
            .hydratable(false)
            .render(),
        )
    }

    #[test]
    fn empty_message_renders_nothing() {
        assert!(!render("").contains("toast"));
    }

    #[test]
    fn message_is_rendered_verbatim() {
        let html = render("Error: Email already registered");
        assert!(html.contains("Error: Email already registered"));
    }
}
