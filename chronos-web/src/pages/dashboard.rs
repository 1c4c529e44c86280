use chronos_core::view::ViewId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub signed_in: bool,
    pub on_navigate: Callback<ViewId>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &Props) -> Html {
    let go_login = {
        let cb = props.on_navigate.clone();
        Callback::from(move |_| cb.emit(ViewId::Login))
    };

    html! {
        <section class="view view-dashboard">
            <div class="kpis">
                <div class="kpi">
                    <div class="kpi-title">{ "Trial" }</div>
                    <div class="kpi-value">{ "Free · 7 days" }</div>
                </div>
                <div class="kpi">
                    <div class="kpi-title">{ "Plans" }</div>
                    <div class="kpi-value">{ "Plus / Premium · 30 days" }</div>
                </div>
                <div class="kpi">
                    <div class="kpi-title">{ "Access" }</div>
                    <div class="kpi-value">{ "Locked on expiry" }</div>
                </div>
            </div>
            if !props.signed_in {
                <div class="card cta-card">
                    <p>{ "Sign in to see your plan, signals ranking and the full radar feed." }</p>
                    <button class="btn btn-primary" onclick={go_login}>{ "Sign in" }</button>
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        signed_in: bool,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <DashboardPage signed_in={props.signed_in} on_navigate={Callback::noop()} />
        }
    }

    fn render(signed_in: bool) -> String {
        block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps { signed_in })
                .hydratable(false)
                .render(),
        )
    }

    #[test]
    fn signed_out_dashboard_offers_the_sign_in_cta() {
        assert!(render(false).contains("Sign in"));
    }

    #[test]
    fn signed_in_dashboard_hides_the_cta() {
        assert!(!render(true).contains("cta-card"));
    }
}
