// ============================================================================
// CHAT SERVICE - Ciclo de vida de la sesión de chat (SDK externo)
// ============================================================================
// connect/disconnect sobre el singleton del SDK + wrappers tipados de los
// handles JS. El transporte, la entrega y la presencia son del SDK.
// ============================================================================

use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::{ChannelData, ChannelMember, MessageRecord, VerificationResult};
use crate::utils::chat_ffi::{self, StreamChannel, StreamChatClient};
use crate::utils::constants::STREAM_API_KEY;
use crate::utils::display_label;

/// Texto genérico cuando el SDK rechaza la conexión sin mensaje propio.
pub const CONNECTION_FALLBACK_ERROR: &str = "Connection failed";

/// Sesión de chat autenticada. Recurso de instancia única: la crea `connect`
/// tras una verificación exitosa, la destruye `disconnect` en el logout, y
/// vive como estado explícito del flujo raíz (nunca global ambiente).
#[derive(Clone)]
pub struct ChatSession {
    client: StreamChatClient,
    user_id: String,
}

impl PartialEq for ChatSession {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && AsRef::<JsValue>::as_ref(&self.client) == AsRef::<JsValue>::as_ref(&other.client)
    }
}

/// Canal del SDK con sus datos de preview ya extraídos.
#[derive(Clone)]
pub struct ChannelItem {
    handle: StreamChannel,
    pub id: Option<String>,
    pub name: Option<String>,
}

impl PartialEq for ChannelItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && AsRef::<JsValue>::as_ref(&self.handle) == AsRef::<JsValue>::as_ref(&other.handle)
    }
}

/// Autenticar el cliente singleton del SDK con la identidad verificada.
/// No debe llamarse con otra sesión viva: el flujo raíz solo lo alcanza
/// desde el estado no autenticado.
pub async fn connect(identity: &VerificationResult) -> Result<ChatSession, String> {
    log::info!("🔌 Conectando al chat como {}...", identity.user_id);

    let client = chat_ffi::stream_chat_get_instance(STREAM_API_KEY);

    let user = chat_ffi::to_js(&json!({
        "id": identity.user_id,
        "name": identity.name,
    }))
    .map_err(|e| js_error_message(&e, CONNECTION_FALLBACK_ERROR))?;

    client
        .connect_user(&user, &identity.token)
        .await
        .map_err(|e| js_error_message(&e, CONNECTION_FALLBACK_ERROR))?;

    log::info!("✅ Chat conectado");

    Ok(ChatSession {
        client,
        user_id: identity.user_id.clone(),
    })
}

/// Desconectar la sesión. Best-effort: el logout nunca se bloquea, los
/// errores del SDK solo se loguean.
pub async fn disconnect(session: ChatSession) {
    log::info!("👋 Desconectando la sesión de chat...");
    if let Err(e) = session.client.disconnect_user().await {
        log::warn!(
            "⚠️ Error desconectando el chat (ignorado): {}",
            js_error_message(&e, "disconnect failed")
        );
    }
}

impl ChatSession {
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Canales donde el usuario actual es miembro, los más recientes primero.
    /// El filtrado y el orden los resuelve el servicio de chat.
    pub async fn query_channels(&self) -> Result<Vec<ChannelItem>, String> {
        let filter = chat_ffi::to_js(&channel_filter(&self.user_id))
            .map_err(|e| js_error_message(&e, "Channel query failed"))?;
        let sort = chat_ffi::to_js(&channel_sort())
            .map_err(|e| js_error_message(&e, "Channel query failed"))?;
        let options = chat_ffi::to_js(&channel_options())
            .map_err(|e| js_error_message(&e, "Channel query failed"))?;

        let result = self
            .client
            .query_channels(&filter, &sort, &options)
            .await
            .map_err(|e| js_error_message(&e, "Channel query failed"))?;

        let array = js_sys::Array::from(&result);
        let mut channels = Vec::with_capacity(array.length() as usize);
        for value in array.iter() {
            let handle: StreamChannel = value.unchecked_into();
            let data: ChannelData = chat_ffi::json_of(&handle.data())
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_default();
            channels.push(ChannelItem {
                id: handle.id(),
                name: data.name,
                handle,
            });
        }

        log::info!("📋 {} canales recibidos del SDK", channels.len());
        Ok(channels)
    }

    /// Suscribir un handler a todos los eventos del cliente. El llamador
    /// mantiene vivo el closure mientras la suscripción exista y la cancela
    /// al desmontar la vista.
    pub fn on_event(&self, handler: &Closure<dyn FnMut(JsValue)>) -> EventSubscription {
        EventSubscription {
            handle: self.client.on(handler.as_ref().unchecked_ref()),
        }
    }
}

/// Suscripción viva a los eventos del cliente.
pub struct EventSubscription {
    handle: chat_ffi::StreamSubscription,
}

impl EventSubscription {
    /// Cancelar la suscripción en el SDK; el handler deja de recibir eventos.
    pub fn cancel(self) {
        self.handle.unsubscribe();
    }
}

impl ChannelItem {
    /// Nombre visible del canal: name → id → "Unknown".
    pub fn display_name(&self) -> String {
        display_label(self.name.as_deref(), self.id.as_deref())
    }

    /// Empezar a observar el canal (estado + eventos en vivo).
    pub async fn watch(&self) -> Result<(), String> {
        self.handle
            .watch()
            .await
            .map(|_| ())
            .map_err(|e| js_error_message(&e, "Channel watch failed"))
    }

    /// Mensajes del estado actual del canal (propiedad del SDK, solo lectura).
    pub fn messages(&self) -> Vec<MessageRecord> {
        chat_ffi::state_field_json(&self.handle, "messages")
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Miembros del canal en orden de inserción del SDK.
    pub fn members(&self) -> Vec<ChannelMember> {
        let Some(json) = chat_ffi::state_field_json(&self.handle, "members") else {
            return Vec::new();
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&json) else {
            return Vec::new();
        };
        let Some(map) = value.as_object() else {
            return Vec::new();
        };
        map.values()
            .filter_map(|member| serde_json::from_value(member.clone()).ok())
            .collect()
    }

    /// Enviar un mensaje de texto al canal.
    pub async fn send_text(&self, text: &str) -> Result<(), String> {
        let message = chat_ffi::to_js(&json!({ "text": text }))
            .map_err(|e| js_error_message(&e, "Send failed"))?;
        self.handle
            .send_message(&message)
            .await
            .map(|_| ())
            .map_err(|e| js_error_message(&e, "Send failed"))
    }
}

/// Contrato de consulta de canales que se le pasa al SDK.
pub fn channel_filter(user_id: &str) -> serde_json::Value {
    json!({ "members": { "$in": [user_id] } })
}

pub fn channel_sort() -> serde_json::Value {
    json!({ "last_message_at": -1 })
}

pub fn channel_options() -> serde_json::Value {
    json!({ "state": true, "watch": true, "presence": true })
}

/// Mensaje legible a partir de un error JS del SDK.
fn js_error_message(error: &JsValue, fallback: &str) -> String {
    error
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn cancelar_la_suscripcion_invoca_unsubscribe() {
        let called = Rc::new(Cell::new(false));
        let flag = called.clone();
        let unsubscribe = Closure::wrap(Box::new(move || flag.set(true)) as Box<dyn FnMut()>);

        let raw = js_sys::Object::new();
        js_sys::Reflect::set(&raw, &"unsubscribe".into(), unsubscribe.as_ref()).unwrap();
        let subscription = EventSubscription {
            handle: JsValue::from(raw).unchecked_into(),
        };

        subscription.cancel();
        assert!(called.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_filtro_limita_a_canales_del_usuario() {
        assert_eq!(
            channel_filter("u1"),
            serde_json::json!({ "members": { "$in": ["u1"] } })
        );
    }

    #[test]
    fn orden_por_ultimo_mensaje_descendente() {
        assert_eq!(
            channel_sort(),
            serde_json::json!({ "last_message_at": -1 })
        );
    }

    #[test]
    fn opciones_con_estado_watch_y_presencia() {
        let options = channel_options();
        assert_eq!(options["state"], true);
        assert_eq!(options["watch"], true);
        assert_eq!(options["presence"], true);
    }
}
