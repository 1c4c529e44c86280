use chronos_core::view::ViewId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Visible destinations in display order, already gated.
    pub items: Vec<ViewId>,
    pub active: ViewId,
    /// Overlay state on narrow viewports.
    pub open: bool,
    pub signed_in: bool,
    pub on_logout: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(p: &Props) -> Html {
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let logout = {
        let cb = p.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    // Plain hash anchors: the router picks the transition up from the
    // fragment, so nav items carry no listeners to stack across renders.
    let entries = p.items.iter().map(|view| {
        let view = *view;
        let class = classes!(
            "nav-item",
            (view == p.active).then_some("active"),
        );
        html! {
            <a key={view.slug()} class={class} href={view.fragment()}>
                { view.title() }
            </a>
        }
    });

    html! {
        <>
            <aside id="sidebar" class={classes!("sidebar", p.open.then_some("open"))}>
                <div class="brand">
                    <span class="logo"></span>
                    <span class="brand-name">{ "Chronos" }</span>
                </div>
                <nav aria-label="Main navigation">
                    { for entries }
                </nav>
                if p.signed_in {
                    <button class="nav-item nav-logout" onclick={logout}>
                        { "Sign out" }
                    </button>
                }
            </aside>
            if p.open {
                <div class="backdrop" onclick={close}></div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        items: Vec<ViewId>,
        active: ViewId,
        signed_in: bool,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <Sidebar
                items={props.items.clone()}
                active={props.active}
                open={false}
                signed_in={props.signed_in}
                on_logout={Callback::noop()}
                on_close={Callback::noop()}
            />
        }
    }

    fn render(items: Vec<ViewId>, active: ViewId, signed_in: bool) -> String {
        block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps {
                items,
                active,
                signed_in,
            })
            .hydratable(false)
            .render(),
        )
    }

    #[test]
    fn only_gated_items_are_rendered() {
        let html = render(
            vec![ViewId::Dashboard, ViewId::Signals, ViewId::Support],
            ViewId::Dashboard,
            false,
        );
        assert!(html.contains("Signals"));
        assert!(!html.contains("Admin"));
        assert!(!html.contains("Sign out"));
    }

    #[test]
    fn active_item_carries_the_highlight_class() {
        let html = render(
            vec![ViewId::Dashboard, ViewId::Radar],
            ViewId::Radar,
            true,
        );
        assert!(html.contains("nav-item active"));
        assert!(html.contains("Sign out"));
    }

    #[test]
    fn nav_items_link_to_their_fragments() {
        let html = render(
            vec![ViewId::Dashboard, ViewId::Signals],
            ViewId::Dashboard,
            false,
        );
        assert!(html.contains("href=\"#/dashboard\""));
        assert!(html.contains("href=\"#/signals\""));
    }

    #[test]
    fn rendering_twice_produces_identical_markup() {
        let first = render(ViewId::ALL.to_vec(), ViewId::Dashboard, true);
        let second = render(ViewId::ALL.to_vec(), ViewId::Dashboard, true);
        assert_eq!(first, second);
    }
}
