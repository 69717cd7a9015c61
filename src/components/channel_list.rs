use yew::prelude::*;

use crate::services::{ChannelItem, ChatSession};

#[derive(Properties, PartialEq)]
pub struct ChannelListProps {
    pub session: ChatSession,
    #[prop_or_default]
    pub active_id: Option<String>,
    pub on_activate: Callback<ChannelItem>,
    pub refresh_tick: u32,
}

/// Lista de canales del usuario actual (el filtro y el orden van en la
/// consulta al SDK, ver chat_service). Cada preview marca el canal activo y
/// pide su activación al hacer click.
#[function_component(ChannelList)]
pub fn channel_list(props: &ChannelListProps) -> Html {
    let channels = use_state(Vec::<ChannelItem>::new);

    {
        let channels = channels.clone();
        use_effect_with(
            (props.session.clone(), props.refresh_tick),
            move |(session, _tick)| {
                let session = session.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match session.query_channels().await {
                        Ok(list) => channels.set(list),
                        Err(e) => log::error!("❌ Error consultando canales: {}", e),
                    }
                });
                || ()
            },
        );
    }

    html! {
        <div class="channel-list">
            {
                channels.iter().map(|channel| {
                    let is_active = channel.id.is_some() && channel.id == props.active_id;
                    let class = if is_active { "channel-preview active" } else { "channel-preview" };
                    let onclick = {
                        let on_activate = props.on_activate.clone();
                        let channel = channel.clone();
                        Callback::from(move |_: MouseEvent| on_activate.emit(channel.clone()))
                    };
                    html! {
                        <div class={class} {onclick}>
                            { channel.display_name() }
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
