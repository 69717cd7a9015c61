/// URL base del backend de verificación de PIN.
/// Configurada en tiempo de compilación:
/// - Por defecto: el backend público de producción
/// - Override: via BACKEND_URL env var (ver build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "https://chat-backend-lwq1.onrender.com",
};

/// API key del servicio de chat externo (identidad de la app frente al SDK).
/// Sin valor por defecto: se inyecta via STREAM_API_KEY env var.
pub const STREAM_API_KEY: &str = match option_env!("STREAM_API_KEY") {
    Some(key) => key,
    None => "",
};
