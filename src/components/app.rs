use yew::prelude::*;

use crate::components::{ChatLayout, LoginScreen};
use crate::hooks::use_chat_session;

/// Componente raíz: una sola rama sobre la presencia de la sesión.
/// La vista autenticada nunca se monta sin un handle vivo, y la puerta de
/// login nunca se monta con uno (modos de vista mutuamente excluyentes).
#[function_component(App)]
pub fn app() -> Html {
    let chat = use_chat_session();
    let state = (*chat.state).clone();

    if let Some(session) = state.session {
        return html! {
            <ChatLayout session={session} on_logout={chat.logout.clone()} />
        };
    }

    html! {
        <LoginScreen
            on_verify={chat.login.clone()}
            loading={state.phase.is_loading()}
            error={state.error}
            welcome_name={state.identity.map(|identity| identity.name)}
        />
    }
}
