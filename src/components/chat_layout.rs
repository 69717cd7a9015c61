use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::components::{ChannelHeader, ChannelList, MessageInput, MessageList, PresenceList};
use crate::hooks::use_viewport;
use crate::services::{ChannelItem, ChatSession};

#[derive(Properties, PartialEq)]
pub struct ChatLayoutProps {
    pub session: ChatSession,
    pub on_logout: Callback<()>,
}

/// Shell de la vista autenticada: sidebar responsivo (canales, presencia,
/// logout) + panel principal (título, hilo de mensajes, input). El SDK es el
/// dueño del estado del chat; aquí solo se compone y se re-lee cuando el
/// cliente emite eventos.
#[function_component(ChatLayout)]
pub fn chat_layout(props: &ChatLayoutProps) -> Html {
    let broken = use_viewport();
    let toggled = use_state(|| false);
    let active = use_state(|| None::<ChannelItem>);

    // Tick de refresco: cualquier evento del cliente (message.new,
    // user.presence.changed, ...) fuerza una re-lectura del estado del SDK.
    let refresh_tick = use_state(|| 0u32);
    let tick_counter = use_mut_ref(|| 0u32);

    let bump_tick = {
        let refresh_tick = refresh_tick.clone();
        let tick_counter = tick_counter.clone();
        Callback::from(move |_: ()| {
            let next = *tick_counter.borrow() + 1;
            *tick_counter.borrow_mut() = next;
            refresh_tick.set(next);
        })
    };

    // Un único handler de eventos por sesión; se cancela al desmontar
    // (logout) para no dejar closures vivos apuntando a estado muerto
    {
        let bump_tick = bump_tick.clone();
        use_effect_with(props.session.clone(), move |session| {
            let closure = Closure::wrap(Box::new(move |_event: JsValue| {
                bump_tick.emit(());
            }) as Box<dyn FnMut(JsValue)>);

            let subscription = session.on_event(&closure);

            move || {
                subscription.cancel();
                drop(closure);
            }
        });
    }

    let on_activate = {
        let active = active.clone();
        let toggled = toggled.clone();
        let bump_tick = bump_tick.clone();
        Callback::from(move |channel: ChannelItem| {
            log::info!("📺 Canal activado: {}", channel.display_name());
            active.set(Some(channel.clone()));
            // En móvil, elegir canal cierra el sidebar
            toggled.set(false);

            let bump_tick = bump_tick.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = channel.watch().await {
                    log::warn!("⚠️ Error observando el canal: {}", e);
                }
                bump_tick.emit(());
            });
        })
    };

    let toggle_sidebar = {
        let toggled = toggled.clone();
        Callback::from(move |_: MouseEvent| toggled.set(!*toggled))
    };

    let close_sidebar = {
        let toggled = toggled.clone();
        Callback::from(move |_: MouseEvent| toggled.set(false))
    };

    let logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let title = active
        .as_ref()
        .map(|channel| channel.display_name())
        .unwrap_or_else(|| "Select a Channel".to_string());

    let active_id = active.as_ref().and_then(|channel| channel.id.clone());

    let sidebar_class = classes!(
        "sidebar",
        broken.then_some("sidebar-overlay"),
        (*toggled).then_some("toggled"),
    );

    html! {
        <div class="chat-shell">
            {
                // Hamburguesa solo en móvil
                if broken {
                    html! {
                        <button
                            class="btn-sidebar-toggle"
                            aria-label="Toggle sidebar"
                            onclick={toggle_sidebar}
                        >
                            {"☰"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
            {
                if broken && *toggled {
                    html! { <div class="sidebar-backdrop" onclick={close_sidebar}></div> }
                } else {
                    html! {}
                }
            }
            <aside class={sidebar_class}>
                <div class="sidebar-section-label">{"Channels"}</div>
                <ChannelList
                    session={props.session.clone()}
                    active_id={active_id}
                    on_activate={on_activate}
                    refresh_tick={*refresh_tick}
                />
                <div class="sidebar-section-label online-users">{"Online Users"}</div>
                <PresenceList channel={(*active).clone()} refresh_tick={*refresh_tick} />
                <button class="btn-logout" onclick={logout_click}>{"Log Out"}</button>
            </aside>
            <main class="chat-main">
                <ChannelHeader title={title} />
                <MessageList channel={(*active).clone()} refresh_tick={*refresh_tick} />
                <MessageInput channel={(*active).clone()} />
            </main>
        </div>
    }
}
