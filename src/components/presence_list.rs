use yew::prelude::*;

use crate::models::{unique_online_members, ChannelMember};
use crate::services::ChannelItem;
use crate::utils::display_label;

#[derive(Properties, PartialEq)]
pub struct PresenceListProps {
    #[prop_or_default]
    pub channel: Option<ChannelItem>,
    pub refresh_tick: u32,
}

/// Miembros online del canal activo, de-duplicados en orden de primera
/// aparición (ver models::unique_online_members).
#[function_component(PresenceList)]
pub fn presence_list(props: &PresenceListProps) -> Html {
    let members = use_state(Vec::<ChannelMember>::new);

    {
        let members = members.clone();
        use_effect_with(
            (props.channel.clone(), props.refresh_tick),
            move |(channel, _tick)| {
                let online = channel
                    .as_ref()
                    .map(|channel| unique_online_members(channel.members()))
                    .unwrap_or_default();
                members.set(online);
                || ()
            },
        );
    }

    html! {
        <ul class="presence-list">
            {
                if members.is_empty() {
                    html! { <li class="presence-empty">{"No users online"}</li> }
                } else {
                    members.iter().map(|member| {
                        let user = member.user.clone().unwrap_or_default();
                        let label = display_label(user.name.as_deref(), user.id.as_deref());
                        html! { <li class="presence-member">{ label }</li> }
                    }).collect::<Html>()
                }
            }
        </ul>
    }
}
