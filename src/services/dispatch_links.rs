//! Links de envio da mensagem
//!
//! O envio é manual: o operador abre um destes links (ou copia o texto).

use serde::Serialize;

pub const WEB_COMPOSE_URL: &str = "https://web.whatsapp.com/send?text=";
pub const APP_COMPOSE_URL: &str = "https://wa.me/?text=";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchLinks {
    pub web_url: String,
    pub app_url: String,
    pub text: String,
}

impl DispatchLinks {
    pub fn for_message(message: &str) -> Self {
        let encoded = urlencoding::encode(message);
        Self {
            web_url: format!("{}{}", WEB_COMPOSE_URL, encoded),
            app_url: format!("{}{}", APP_COMPOSE_URL, encoded),
            text: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_encode_message() {
        let links = DispatchLinks::for_message("📌 PROGRAMAÇÃO DIÁRIA 1\n\nA & B");
        assert!(links.web_url.starts_with(WEB_COMPOSE_URL));
        assert!(links.app_url.starts_with(APP_COMPOSE_URL));
        assert!(links.app_url.contains("%0A%0A"));
        assert!(links.app_url.contains("%26"));
        assert!(!links.app_url.contains(' '));
        assert_eq!(links.text, "📌 PROGRAMAÇÃO DIÁRIA 1\n\nA & B");
    }
}
