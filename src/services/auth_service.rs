// ============================================================================
// AUTH SERVICE - Verificación de PIN contra el backend (stateless)
// ============================================================================
// NO tiene lógica de UI, solo el request HTTP y el mapeo de errores.
// ============================================================================

use gloo_net::http::Request;

use crate::models::{VerificationResult, VerifyErrorBody, VerifyPinRequest};
use crate::utils::constants::BACKEND_URL;

/// Texto genérico cuando el backend no manda un mensaje de error propio.
pub const VERIFICATION_FALLBACK_ERROR: &str = "Verification failed";

/// Intercambiar un PIN por una identidad + token.
/// El backend es la única autoridad sobre el PIN: aquí no se valida formato.
pub async fn verify_pin(pin: &str) -> Result<VerificationResult, String> {
    let url = format!("{}/verify-pin", BACKEND_URL);

    log::info!("🔐 Verificando PIN contra el backend...");

    let response = Request::post(&url)
        .json(&VerifyPinRequest { pin })
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = verification_error_message(&body);
        log::error!("❌ Verificación rechazada (HTTP {}): {}", status, message);
        return Err(message);
    }

    let result = response
        .json::<VerificationResult>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    log::info!("✅ PIN verificado, identidad: {}", result.user_id);
    Ok(result)
}

/// Mensaje visible para el usuario a partir del body de una respuesta no-2xx:
/// el campo `error` del servidor cuando existe y no está vacío, si no el
/// fallback fijo.
pub fn verification_error_message(body: &str) -> String {
    serde_json::from_str::<VerifyErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| VERIFICATION_FALLBACK_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usa_el_mensaje_de_error_del_servidor() {
        assert_eq!(
            verification_error_message(r#"{"error":"invalid pin"}"#),
            "invalid pin"
        );
    }

    #[test]
    fn fallback_sin_campo_error() {
        assert_eq!(verification_error_message(r#"{}"#), VERIFICATION_FALLBACK_ERROR);
        assert_eq!(
            verification_error_message(r#"{"detail":"x"}"#),
            VERIFICATION_FALLBACK_ERROR
        );
    }

    #[test]
    fn fallback_con_body_ilegible_o_vacio() {
        assert_eq!(verification_error_message("<html>"), VERIFICATION_FALLBACK_ERROR);
        assert_eq!(verification_error_message(""), VERIFICATION_FALLBACK_ERROR);
        assert_eq!(
            verification_error_message(r#"{"error":""}"#),
            VERIFICATION_FALLBACK_ERROR
        );
    }
}
