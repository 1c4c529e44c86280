use chronos_core::identity::Identity;
use yew::prelude::*;

use crate::components::toast::Toast;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub identity: Option<Identity>,
    pub toast: String,
    /// Banned accounts keep the view but lose mutating actions.
    pub read_only: bool,
    pub on_refresh: Callback<()>,
    pub on_copy_token: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(AccountPage)]
pub fn account_page(props: &Props) -> Html {
    // Entering the account view is the one navigation that requests a
    // network call: the profile is re-fetched on mount.
    {
        let refresh = props.on_refresh.clone();
        use_effect_with((), move |()| {
            refresh.emit(());
            || {}
        });
    }

    let refresh = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let copy_token = {
        let cb = props.on_copy_token.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let profile = props.identity.as_ref().map_or_else(
        || html! { <p class="placeholder">{ "No profile loaded." }</p> },
        |identity| {
            html! {
                <dl class="profile">
                    <dt>{ "Email" }</dt>
                    <dd>{ identity.email.clone() }</dd>
                    <dt>{ "Plan" }</dt>
                    <dd>{ identity.plan.label() }</dd>
                    <dt>{ "Status" }</dt>
                    <dd class={identity.tone().css_class()}>{ identity.pill_label() }</dd>
                    if identity.is_admin {
                        <dt>{ "Role" }</dt>
                        <dd>{ "Administrator" }</dd>
                    }
                </dl>
            }
        },
    );

    html! {
        <section class="view view-account">
            <div class="card">
                { profile }
                if props.read_only {
                    <p class="banner banner-banned" role="note">
                        { "This account is banned. The dashboard is read-only until support lifts the ban." }
                    </p>
                }
                <div class="actions">
                    <button class="btn" onclick={refresh}>{ "Refresh" }</button>
                    <button class="btn" onclick={copy_token}>{ "Copy token" }</button>
                    <button class="btn btn-ghost" onclick={logout}>{ "Sign out" }</button>
                </div>
            </div>
            <Toast message={props.toast.clone()} />
        </section>
    }
}
