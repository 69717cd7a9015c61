pub mod app;
pub mod channel_header;
pub mod channel_list;
pub mod chat_layout;
pub mod login_screen;
pub mod message_input;
pub mod message_list;
pub mod presence_list;

pub use app::App;
pub use channel_header::ChannelHeader;
pub use channel_list::ChannelList;
pub use chat_layout::ChatLayout;
pub use login_screen::LoginScreen;
pub use message_input::MessageInput;
pub use message_list::MessageList;
pub use presence_list::PresenceList;
