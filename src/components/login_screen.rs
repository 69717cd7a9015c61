use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_verify: Callback<String>,
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub welcome_name: Option<String>,
}

/// Puerta de sesión: un PIN, un botón. El PIN vive solo en el input local;
/// al desmontarse (login exitoso / logout) desaparece con el componente.
#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let pin_ref = use_node_ref();

    let on_submit = {
        let pin_ref = pin_ref.clone();
        let on_verify = props.on_verify.clone();
        let loading = props.loading;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Sin cancelación de requests: la única protección contra el
            // overlap es ignorar submits mientras hay uno en vuelo.
            if loading {
                return;
            }

            if let Some(input) = pin_ref.cast::<HtmlInputElement>() {
                on_verify.emit(input.value());
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <h2>{"Enter PIN"}</h2>
                <form class="login-form" onsubmit={on_submit}>
                    <input
                        type="password"
                        class="pin-input"
                        placeholder="Enter your PIN"
                        ref={pin_ref}
                    />
                    <button type="submit" class="btn-verify" disabled={props.loading}>
                        { if props.loading { "Verifying..." } else { "Verify" } }
                    </button>
                </form>
                {
                    if let Some(error) = &props.error {
                        html! { <div class="login-error">{error.clone()}</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(name) = &props.welcome_name {
                        html! { <div class="login-welcome">{format!("Welcome, {}!", name)}</div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
