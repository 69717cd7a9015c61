use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelHeaderProps {
    /// Nombre del canal activo, o el prompt cuando no hay ninguno.
    pub title: String,
}

#[function_component(ChannelHeader)]
pub fn channel_header(props: &ChannelHeaderProps) -> Html {
    html! {
        <div class="channel-header">
            <span>{ props.title.clone() }</span>
        </div>
    }
}
