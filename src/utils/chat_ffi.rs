// ============================================================================
// CHAT FFI - Foreign Function Interface para el SDK de chat (JavaScript)
// ============================================================================
// Solo bindings al bundle global `StreamChat` - Sin estado, sin lógica.
// Los datos estructurados cruzan la frontera como JSON (ver json_of / to_js).
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Handle opaco del cliente autenticado del SDK.
    #[derive(Clone)]
    pub type StreamChatClient;

    /// Factory singleton del SDK para una API key dada. El bundle UMD expone
    /// el namespace global `StreamChat` con la clase del mismo nombre dentro.
    #[wasm_bindgen(js_namespace = ["StreamChat", "StreamChat"], js_name = getInstance)]
    pub fn stream_chat_get_instance(api_key: &str) -> StreamChatClient;

    #[wasm_bindgen(method, catch, js_name = connectUser)]
    pub async fn connect_user(
        this: &StreamChatClient,
        user: &JsValue,
        token: &str,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = disconnectUser)]
    pub async fn disconnect_user(this: &StreamChatClient) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = queryChannels)]
    pub async fn query_channels(
        this: &StreamChatClient,
        filter: &JsValue,
        sort: &JsValue,
        options: &JsValue,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, getter, js_name = userID)]
    pub fn user_id(this: &StreamChatClient) -> Option<String>;

    /// Suscribe un handler a TODOS los eventos del cliente (message.new,
    /// user.presence.changed, etc.). Devuelve el handle para cancelarla.
    #[wasm_bindgen(method)]
    pub fn on(this: &StreamChatClient, handler: &js_sys::Function) -> StreamSubscription;

    /// Handle de una suscripción a eventos del cliente.
    pub type StreamSubscription;

    #[wasm_bindgen(method)]
    pub fn unsubscribe(this: &StreamSubscription);

    /// Handle opaco de un canal del SDK.
    #[derive(Clone)]
    pub type StreamChannel;

    #[wasm_bindgen(method, getter)]
    pub fn id(this: &StreamChannel) -> Option<String>;

    #[wasm_bindgen(method, getter)]
    pub fn data(this: &StreamChannel) -> JsValue;

    #[wasm_bindgen(method, getter)]
    pub fn state(this: &StreamChannel) -> JsValue;

    #[wasm_bindgen(method, catch)]
    pub async fn watch(this: &StreamChannel) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = sendMessage)]
    pub async fn send_message(this: &StreamChannel, message: &JsValue) -> Result<JsValue, JsValue>;
}

/// Serializar un valor JS del SDK a JSON (Date se vuelve string ISO).
pub fn json_of(value: &JsValue) -> Option<String> {
    js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string())
}

/// Construir un valor JS a partir de JSON propio (filtros, payloads).
pub fn to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}

/// Leer un campo del estado de un canal como JSON.
pub fn state_field_json(channel: &StreamChannel, field: &str) -> Option<String> {
    let state = channel.state();
    let value = js_sys::Reflect::get(&state, &JsValue::from_str(field)).ok()?;
    json_of(&value)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn to_js_construye_objetos_reales() {
        let filter = to_js(&serde_json::json!({ "members": { "$in": ["u1"] } })).unwrap();
        let members = js_sys::Reflect::get(&filter, &JsValue::from_str("members")).unwrap();
        assert!(members.is_object());
    }

    #[wasm_bindgen_test]
    fn state_field_json_lee_campos_del_estado() {
        // Un objeto plano hace de handle: el binding solo lee propiedades
        let state = js_sys::Object::new();
        let messages = js_sys::Array::of1(&JsValue::from_str("hi"));
        js_sys::Reflect::set(&state, &"messages".into(), &messages).unwrap();

        let raw = js_sys::Object::new();
        js_sys::Reflect::set(&raw, &"state".into(), &state).unwrap();
        let channel: StreamChannel = JsValue::from(raw).unchecked_into();

        assert_eq!(
            state_field_json(&channel, "messages").as_deref(),
            Some(r#"["hi"]"#)
        );
        // Campos ausentes (undefined) no producen JSON
        assert_eq!(state_field_json(&channel, "members"), None);
    }
}
