use serde::Deserialize;
use std::collections::HashSet;

/// Usuario tal como lo reporta el SDK dentro de mensajes y miembros.
/// Todos los campos son opcionales: el SDK no garantiza ninguno.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
}

impl UserRef {
    pub fn is_online(&self) -> bool {
        self.online.unwrap_or(false)
    }
}

/// Mensaje del estado de un canal. `text` se mantiene como JSON crudo porque
/// el SDK admite payloads no textuales; solo los strings se renderizan.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<serde_json::Value>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MessageRecord {
    /// Cuerpo renderizable del mensaje: solo si `text` es un string JSON.
    pub fn body(&self) -> Option<&str> {
        self.text.as_ref().and_then(|v| v.as_str())
    }
}

/// Miembro de un canal (wrapper del SDK alrededor de un usuario).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChannelMember {
    #[serde(default)]
    pub user: Option<UserRef>,
}

/// Datos propios de un canal (channel.data en el SDK).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ChannelData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Lista de presencia: miembros online de-duplicados, en orden de primera
/// aparición. Clave de de-duplicación: id → name → "unknown". Los miembros
/// sin flag online se excluyen por completo.
pub fn unique_online_members(members: Vec<ChannelMember>) -> Vec<ChannelMember> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut online = Vec::new();

    for member in members {
        let Some(user) = member.user.as_ref() else {
            continue;
        };
        if !user.is_online() {
            continue;
        }

        let key = user
            .id
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| user.name.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "unknown".to_string());

        if seen.insert(key) {
            online.push(member);
        }
    }

    online
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: Option<&str>, name: Option<&str>, online: bool) -> ChannelMember {
        ChannelMember {
            user: Some(UserRef {
                id: id.map(str::to_string),
                name: name.map(str::to_string),
                online: Some(online),
            }),
        }
    }

    #[test]
    fn deduplica_miembros_online_en_orden_de_aparicion() {
        let members = vec![
            member(Some("a"), None, true),
            member(Some("a"), None, true),
            member(Some("b"), None, false),
            member(None, Some("c"), true),
        ];

        let online = unique_online_members(members);
        assert_eq!(online.len(), 2);
        assert_eq!(online[0].user.as_ref().unwrap().id.as_deref(), Some("a"));
        assert_eq!(online[1].user.as_ref().unwrap().name.as_deref(), Some("c"));
    }

    #[test]
    fn excluye_miembros_sin_flag_online() {
        let members = vec![
            ChannelMember {
                user: Some(UserRef {
                    id: Some("a".into()),
                    name: None,
                    online: None,
                }),
            },
            ChannelMember { user: None },
        ];
        assert!(unique_online_members(members).is_empty());
    }

    #[test]
    fn miembros_anonimos_colapsan_en_la_clave_unknown() {
        let anon = || ChannelMember {
            user: Some(UserRef {
                id: None,
                name: None,
                online: Some(true),
            }),
        };
        let online = unique_online_members(vec![anon(), anon()]);
        assert_eq!(online.len(), 1);
    }

    #[test]
    fn mensaje_sin_texto_string_no_tiene_cuerpo() {
        let no_text: MessageRecord = serde_json::from_str(r#"{"id":"m1"}"#).unwrap();
        assert_eq!(no_text.body(), None);

        let numeric: MessageRecord =
            serde_json::from_str(r#"{"id":"m2","text":42}"#).unwrap();
        assert_eq!(numeric.body(), None);
    }

    #[test]
    fn mensaje_de_texto_se_parsea_completo() {
        let json = r#"{"text":"hi","user":{"id":"u1"},"created_at":"2024-03-08T21:04:00Z"}"#;
        let message: MessageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(message.body(), Some("hi"));
        assert_eq!(message.user.as_ref().unwrap().id.as_deref(), Some("u1"));
        assert!(message.created_at.is_some());
    }

    #[test]
    fn el_mapa_de_miembros_del_sdk_conserva_el_orden_de_insercion() {
        // El SDK entrega los miembros como objeto keyed por id; preserve_order
        // garantiza el orden de primera aparición al iterarlo.
        let json = r#"{"z":{"user":{"id":"z","online":true}},"a":{"user":{"id":"a","online":true}}}"#;
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
