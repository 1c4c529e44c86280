use chronos_core::api::{BanRequest, LookupRequest, PlanActivateRequest};
use chronos_core::identity::Plan;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::toast::Toast;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub toast: String,
    /// Pretty-printed body of the last admin response.
    pub output: String,
    /// Ban/unban target filled by a successful lookup.
    pub target: String,
    /// A banned admin can look users up but not mutate them.
    pub read_only: bool,
    pub on_lookup: Callback<LookupRequest>,
    pub on_activate: Callback<PlanActivateRequest>,
    pub on_ban: Callback<(String, BanRequest)>,
    pub on_unban: Callback<String>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn selector(email: &str, telegram: &str) -> (Option<String>, Option<i64>) {
    let email = email.trim();
    let email = (!email.is_empty()).then(|| email.to_string());
    let telegram_id = telegram.trim().parse::<i64>().ok();
    (email, telegram_id)
}

#[function_component(AdminPage)]
pub fn admin_page(props: &Props) -> Html {
    let lookup_email = use_node_ref();
    let lookup_tg = use_node_ref();
    let activate_email = use_node_ref();
    let activate_tg = use_node_ref();
    let activate_plan = use_node_ref();
    let ban_target = use_state(String::new);

    // A lookup result replaces whatever target was typed before it.
    {
        let ban_target = ban_target.clone();
        use_effect_with(props.target.clone(), move |found| {
            if !found.is_empty() {
                ban_target.set(found.clone());
            }
            || {}
        });
    }

    let submit_lookup = {
        let cb = props.on_lookup.clone();
        let email = lookup_email.clone();
        let tg = lookup_tg.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (email, telegram_id) = selector(&input_value(&email), &input_value(&tg));
            cb.emit(LookupRequest { email, telegram_id });
        })
    };

    let submit_activate = {
        let cb = props.on_activate.clone();
        let email = activate_email.clone();
        let tg = activate_tg.clone();
        let plan = activate_plan.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (email, telegram_id) = selector(&input_value(&email), &input_value(&tg));
            let plan_key = plan
                .cast::<HtmlSelectElement>()
                .map(|sel| sel.value())
                .unwrap_or_default();
            cb.emit(PlanActivateRequest {
                email,
                telegram_id,
                plan: Plan::from_key(Some(plan_key.as_str())),
                days: PlanActivateRequest::DEFAULT_DAYS,
            });
        })
    };

    let on_target_input = {
        let ban_target = ban_target.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                ban_target.set(input.value());
            }
        })
    };

    let ban_week = {
        let cb = props.on_ban.clone();
        let target = ban_target.clone();
        Callback::from(move |_| cb.emit(((*target).clone(), BanRequest::temporary(7))))
    };
    let ban_forever = {
        let cb = props.on_ban.clone();
        let target = ban_target.clone();
        Callback::from(move |_| cb.emit(((*target).clone(), BanRequest::permanent())))
    };
    let unban = {
        let cb = props.on_unban.clone();
        let target = ban_target.clone();
        Callback::from(move |_| cb.emit((*target).clone()))
    };

    html! {
        <section class="view view-admin">
            <div class="card">
                <h2>{ "Lookup user" }</h2>
                <form onsubmit={submit_lookup}>
                    <label for="lk-email">{ "Email" }</label>
                    <input id="lk-email" type="email" ref={lookup_email} />
                    <label for="lk-tg">{ "Telegram id" }</label>
                    <input id="lk-tg" type="text" inputmode="numeric" ref={lookup_tg} />
                    <button type="submit" class="btn">{ "Lookup" }</button>
                </form>
            </div>

            <div class="card">
                <h2>{ "Activate plan" }</h2>
                <form onsubmit={submit_activate}>
                    <label for="ac-email">{ "Email" }</label>
                    <input id="ac-email" type="email" ref={activate_email} />
                    <label for="ac-tg">{ "Telegram id" }</label>
                    <input id="ac-tg" type="text" inputmode="numeric" ref={activate_tg} />
                    <label for="ac-plan">{ "Plan" }</label>
                    <select id="ac-plan" ref={activate_plan}>
                        <option value="plus">{ "Plus" }</option>
                        <option value="premium">{ "Premium" }</option>
                    </select>
                    <button type="submit" class="btn btn-primary" disabled={props.read_only}>
                        { "Activate 30 days" }
                    </button>
                </form>
            </div>

            <div class="card">
                <h2>{ "Ban / unban" }</h2>
                <label for="bn-user">{ "User id" }</label>
                <input id="bn-user" type="text" value={(*ban_target).clone()} oninput={on_target_input} />
                <div class="actions">
                    <button class="btn" onclick={ban_week} disabled={props.read_only}>
                        { "Ban 7 days" }
                    </button>
                    <button class="btn" onclick={ban_forever} disabled={props.read_only}>
                        { "Ban permanently" }
                    </button>
                    <button class="btn btn-ghost" onclick={unban} disabled={props.read_only}>
                        { "Unban" }
                    </button>
                </div>
            </div>

            <Toast message={props.toast.clone()} />
            <pre class="admin-output">{ props.output.clone() }</pre>
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
        read_only: bool,
        output: String,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <AdminPage
                toast={String::new()}
                output={props.output.clone()}
                target={String::new()}
                read_only={props.read_only}
                on_lookup={Callback::noop()}
                on_activate={Callback::noop()}
                on_ban={Callback::noop()}
                on_unban={Callback::noop()}
            />
        }
    }

    fn render(read_only: bool, output: &str) -> String {
        block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps {
                read_only,
                output: output.to_string(),
            })
            .hydratable(false)
            .render(),
        )
    }

    #[test]
    fn selector_prefers_any_present_field() {
        assert_eq!(
            selector(" a@x.com ", ""),
            (Some(String::from("a@x.com")), None)
        );
        assert_eq!(selector("", "42"), (None, Some(42)));
        assert_eq!(selector("", "not-a-number"), (None, None));
    }

    #[test]
    fn read_only_admin_loses_mutating_buttons() {
        let html = render(true, "{}");
        assert!(html.contains("disabled"));
    }

    #[test]
    fn last_response_body_is_shown() {
        let html = render(false, "{\n  \"ok\": true\n}");
        assert!(html.contains("admin-output"));
        assert!(html.contains("&quot;ok&quot;") || html.contains("\"ok\""));
    }
}
