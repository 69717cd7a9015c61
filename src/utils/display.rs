/// Cadena de fallback para nombres visibles: nombre → identificador → "Unknown".
/// Los strings vacíos cuentan como ausentes (mismo comportamiento que `||` en JS,
/// que es lo que el backend y el SDK asumen).
pub fn display_label(name: Option<&str>, id: Option<&str>) -> String {
    non_empty(name)
        .or_else(|| non_empty(id))
        .unwrap_or("Unknown")
        .to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefiere_nombre_sobre_id() {
        assert_eq!(display_label(Some("Alice"), Some("u1")), "Alice");
    }

    #[test]
    fn cae_al_id_sin_nombre() {
        assert_eq!(display_label(None, Some("u1")), "u1");
        assert_eq!(display_label(Some(""), Some("u1")), "u1");
    }

    #[test]
    fn fallback_final_unknown() {
        assert_eq!(display_label(None, None), "Unknown");
        assert_eq!(display_label(Some(""), Some("")), "Unknown");
    }
}
