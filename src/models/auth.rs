use serde::{Deserialize, Serialize};

/// Body del POST /verify-pin.
#[derive(Debug, Serialize)]
pub struct VerifyPinRequest<'a> {
    pub pin: &'a str,
}

/// Respuesta exitosa de la verificación de PIN. Se consume una sola vez para
/// construir la sesión de chat; no se persiste.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerificationResult {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub token: String,
    /// Campos adicionales que el backend pueda devolver.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body de error que el backend devuelve (opcionalmente) con estados no-2xx.
#[derive(Debug, Default, Deserialize)]
pub struct VerifyErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsea_resultado_con_campos_extra() {
        let json = r#"{"userId":"u1","name":"Alice","token":"t","role":"admin"}"#;
        let result: VerificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.user_id, "u1");
        assert_eq!(result.name, "Alice");
        assert_eq!(result.token, "t");
        assert_eq!(result.extra.get("role").unwrap(), "admin");
    }

    #[test]
    fn rechaza_resultado_sin_token() {
        let json = r#"{"userId":"u1","name":"Alice"}"#;
        assert!(serde_json::from_str::<VerificationResult>(json).is_err());
    }
}
