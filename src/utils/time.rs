use chrono::DateTime;
use chrono_tz::America::Denver;

/// Formato en-US legible: "Mar 8, 2024, 02:04 PM".
const MESSAGE_TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Formatear el `created_at` de un mensaje (ISO 8601) en la zona horaria fija
/// de la app. Timestamps inválidos o ausentes simplemente no se muestran.
pub fn format_message_timestamp(created_at: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(created_at).ok()?;
    Some(
        parsed
            .with_timezone(&Denver)
            .format(MESSAGE_TIMESTAMP_FORMAT)
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatea_en_hora_de_denver_invierno() {
        // MST (UTC-7) antes del cambio de horario de marzo 2024
        let formatted = format_message_timestamp("2024-03-08T21:04:00Z").unwrap();
        assert_eq!(formatted, "Mar 8, 2024, 02:04 PM");
    }

    #[test]
    fn formatea_en_hora_de_denver_verano() {
        // MDT (UTC-6): cruza la medianoche UTC hacia el día anterior
        let formatted = format_message_timestamp("2026-07-01T00:30:00Z").unwrap();
        assert_eq!(formatted, "Jun 30, 2026, 06:30 PM");
    }

    #[test]
    fn timestamp_invalido_no_produce_salida() {
        assert!(format_message_timestamp("not-a-date").is_none());
        assert!(format_message_timestamp("").is_none());
    }
}
