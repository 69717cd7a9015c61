use yew::prelude::*;

use crate::models::VerificationResult;
use crate::services::{connect, disconnect, verify_pin, ChatSession};

/// Fases del flujo de login, a nivel de vista (no de protocolo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    Connecting,
    Authenticated,
    Disconnecting,
}

impl SessionPhase {
    /// Solo se acepta un submit de PIN sin otra verificación en vuelo:
    /// el trigger se deshabilita y los submits que se cuelen se ignoran.
    pub fn accepts_pin_submit(self) -> bool {
        matches!(self, SessionPhase::Unauthenticated)
    }

    pub fn is_loading(self) -> bool {
        matches!(self, SessionPhase::Connecting | SessionPhase::Disconnecting)
    }
}

/// Estado del flujo de autenticación + la sesión de chat que éste posee.
/// Invariante: `session` es `Some` exactamente en la fase `Authenticated`.
#[derive(Clone, PartialEq)]
pub struct ChatSessionState {
    pub phase: SessionPhase,
    pub error: Option<String>,
    pub identity: Option<VerificationResult>,
    pub session: Option<ChatSession>,
}

impl ChatSessionState {
    fn unauthenticated(error: Option<String>) -> Self {
        Self {
            phase: SessionPhase::Unauthenticated,
            error,
            identity: None,
            session: None,
        }
    }
}

pub struct UseChatSessionHandle {
    pub state: UseStateHandle<ChatSessionState>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

/// Flujo completo de login: verificación de PIN y conexión al chat como dos
/// operaciones secuenciadas, cada una esperada por separado y con su propia
/// ruta de error. Ambos fallos terminan en la puerta de login con un único
/// mensaje visible.
#[hook]
pub fn use_chat_session() -> UseChatSessionHandle {
    let state = use_state(|| ChatSessionState::unauthenticated(None));

    let login = {
        let state = state.clone();
        Callback::from(move |pin: String| {
            let current = (*state).clone();
            if !current.phase.accepts_pin_submit() {
                log::warn!("⚠️ Verificación ya en curso, submit ignorado");
                return;
            }

            state.set(ChatSessionState {
                phase: SessionPhase::Connecting,
                error: None,
                identity: None,
                session: None,
            });

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let identity = match verify_pin(&pin).await {
                    Ok(identity) => identity,
                    Err(e) => {
                        log::error!("❌ Error verificando PIN: {}", e);
                        state.set(ChatSessionState::unauthenticated(Some(e)));
                        return;
                    }
                };

                // Bienvenida visible mientras el connect sigue en vuelo
                state.set(ChatSessionState {
                    phase: SessionPhase::Connecting,
                    error: None,
                    identity: Some(identity.clone()),
                    session: None,
                });

                match connect(&identity).await {
                    Ok(session) => {
                        log::info!("✅ Login completado: {}", identity.user_id);
                        state.set(ChatSessionState {
                            phase: SessionPhase::Authenticated,
                            error: None,
                            identity: Some(identity),
                            session: Some(session),
                        });
                    }
                    Err(e) => {
                        // PIN correcto pero el chat rechazó la conexión:
                        // el usuario vuelve a la puerta, nunca queda a medias.
                        log::error!("❌ Error conectando al chat: {}", e);
                        state.set(ChatSessionState::unauthenticated(Some(e)));
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            let Some(session) = current.session else {
                return;
            };

            log::info!("👋 Logout iniciado");

            // La UI vuelve a la puerta de inmediato; el teardown es best-effort.
            state.set(ChatSessionState {
                phase: SessionPhase::Disconnecting,
                error: None,
                identity: None,
                session: None,
            });

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                disconnect(session).await;
                state.set(ChatSessionState::unauthenticated(None));
                log::info!("✅ Logout completado");
            });
        })
    };

    UseChatSessionHandle { state, login, logout }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solo_la_fase_no_autenticada_acepta_submits() {
        assert!(SessionPhase::Unauthenticated.accepts_pin_submit());
        assert!(!SessionPhase::Connecting.accepts_pin_submit());
        assert!(!SessionPhase::Authenticated.accepts_pin_submit());
        assert!(!SessionPhase::Disconnecting.accepts_pin_submit());
    }

    #[test]
    fn las_fases_transitorias_muestran_loading() {
        assert!(SessionPhase::Connecting.is_loading());
        assert!(SessionPhase::Disconnecting.is_loading());
        assert!(!SessionPhase::Unauthenticated.is_loading());
        assert!(!SessionPhase::Authenticated.is_loading());
    }

    #[test]
    fn el_estado_no_autenticado_queda_limpio() {
        let state = ChatSessionState::unauthenticated(Some("invalid pin".into()));
        assert_eq!(state.phase, SessionPhase::Unauthenticated);
        assert_eq!(state.error.as_deref(), Some("invalid pin"));
        assert!(state.identity.is_none());
        assert!(state.session.is_none());
    }
}
