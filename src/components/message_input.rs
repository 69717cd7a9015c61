use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::ChannelItem;

#[derive(Properties, PartialEq)]
pub struct MessageInputProps {
    #[prop_or_default]
    pub channel: Option<ChannelItem>,
}

/// Caja de envío del canal activo. Sin canal activo queda deshabilitada;
/// el texto vacío no se envía.
#[function_component(MessageInput)]
pub fn message_input(props: &MessageInputProps) -> Html {
    let input_ref = use_node_ref();

    let on_submit = {
        let input_ref = input_ref.clone();
        let channel = props.channel.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(channel) = channel.clone() else {
                return;
            };
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };

            let text = input.value();
            if text.trim().is_empty() {
                return;
            }
            input.set_value("");

            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = channel.send_text(&text).await {
                    log::error!("❌ Error enviando mensaje: {}", e);
                }
            });
        })
    };

    html! {
        <form class="message-form" onsubmit={on_submit}>
            <input
                type="text"
                class="message-input"
                placeholder="Type a message"
                disabled={props.channel.is_none()}
                ref={input_ref}
            />
            <button type="submit" class="btn-send" disabled={props.channel.is_none()}>
                {"Send"}
            </button>
        </form>
    }
}
