use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::toast::Toast;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub toast: String,
    pub on_login: Callback<(String, String)>,
    pub on_register: Callback<(String, String)>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(LoginPage)]
pub fn login_page(props: &Props) -> Html {
    let login_email = use_node_ref();
    let login_pass = use_node_ref();
    let reg_email = use_node_ref();
    let reg_pass = use_node_ref();

    let submit_login = {
        let cb = props.on_login.clone();
        let email = login_email.clone();
        let pass = login_pass.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((input_value(&email), input_value(&pass)));
        })
    };

    let submit_register = {
        let cb = props.on_register.clone();
        let email = reg_email.clone();
        let pass = reg_pass.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((input_value(&email), input_value(&pass)));
        })
    };

    html! {
        <section class="view view-login">
            <div class="card auth-card">
                <h2>{ "Sign in" }</h2>
                <form onsubmit={submit_login}>
                    <label for="login-email">{ "Email" }</label>
                    <input id="login-email" type="email" ref={login_email} />
                    <label for="login-pass">{ "Password" }</label>
                    <input id="login-pass" type="password" ref={login_pass} />
                    <button type="submit" class="btn btn-primary">{ "Sign in" }</button>
                </form>
            </div>
            <div class="card auth-card">
                <h2>{ "Create account" }</h2>
                <p class="hint">{ "New accounts start on a free 7-day trial." }</p>
                <form onsubmit={submit_register}>
                    <label for="reg-email">{ "Email" }</label>
                    <input id="reg-email" type="email" ref={reg_email} />
                    <label for="reg-pass">{ "Password" }</label>
                    <input id="reg-pass" type="password" ref={reg_pass} />
                    <button type="submit" class="btn">{ "Register" }</button>
                </form>
            </div>
            <Toast message={props.toast.clone()} />
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
        toast: String,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <LoginPage
                toast={props.toast.clone()}
                on_login={Callback::noop()}
                on_register={Callback::noop()}
            />
        }
    }

    fn render(toast: &str) -> String {
        block_on(
            LocalServerRenderer::<Harness>::with_props(HarnessProps {
                toast: toast.to_string(),
            })
            .hydratable(false)
            .render(),
        )
    }

    #[test]
    fn both_auth_forms_are_present() {
        let html = render("");
        assert!(html.contains("Sign in"));
        assert!(html.contains("Register"));
        assert!(html.contains("free 7-day trial"));
    }

    #[test]
    fn errors_surface_in_the_scoped_toast() {
        let html = render("Error: HTTP 409");
        assert!(html.contains("Error: HTTP 409"));
    }

    #[test]
    fn repeated_renders_are_identical() {
        assert_eq!(render(""), render(""));
    }
}
