use yew::prelude::*;

use crate::models::MessageRecord;
use crate::services::ChannelItem;
use crate::utils::{display_label, format_message_timestamp};

#[derive(Properties, PartialEq)]
pub struct MessageListProps {
    #[prop_or_default]
    pub channel: Option<ChannelItem>,
    pub refresh_tick: u32,
}

/// Hilo de mensajes del canal activo, re-leído del estado del SDK en cada
/// tick de refresco.
#[function_component(MessageList)]
pub fn message_list(props: &MessageListProps) -> Html {
    let messages = use_state(Vec::<MessageRecord>::new);

    {
        let messages = messages.clone();
        use_effect_with(
            (props.channel.clone(), props.refresh_tick),
            move |(channel, _tick)| {
                let snapshot = channel
                    .as_ref()
                    .map(|channel| channel.messages())
                    .unwrap_or_default();
                messages.set(snapshot);
                || ()
            },
        );
    }

    html! {
        <div class="message-list">
            { messages.iter().map(render_message).collect::<Html>() }
        </div>
    }
}

/// Renderizado de un mensaje: remitente (name → id → "Unknown"), cuerpo y
/// timestamp localizado cuando existe. Los registros sin texto string no
/// producen salida.
fn render_message(message: &MessageRecord) -> Html {
    let Some(body) = message.body() else {
        return html! {};
    };

    let user = message.user.clone().unwrap_or_default();
    let sender = display_label(user.name.as_deref(), user.id.as_deref());
    let timestamp = message
        .created_at
        .as_deref()
        .and_then(format_message_timestamp);

    html! {
        <div class="message">
            <div class="message-sender">
                { sender }
                {
                    if let Some(timestamp) = timestamp {
                        html! { <span class="message-timestamp">{timestamp}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="message-body">{ body }</div>
        </div>
    }
}
