pub mod use_chat_session;
pub mod use_viewport;

pub use use_chat_session::{use_chat_session, ChatSessionState, SessionPhase, UseChatSessionHandle};
pub use use_viewport::use_viewport;
