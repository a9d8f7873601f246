//! Country-specific demo content.

/// Localized content for a country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryContent {
    pub greeting: String,
    pub currency: &'static str,
    pub flag: &'static str,
}

impl CountryContent {
    /// Look up content for an ISO 3166 country code.
    ///
    /// Unknown codes get a generic greeting built from the code itself.
    pub fn for_country(code: &str) -> Self {
        let known: Option<(&str, &str, &str)> = match code {
            "US" => Some(("Hello from the United States!", "USD", "🇺🇸")),
            "GB" => Some(("Hello from the United Kingdom!", "GBP", "🇬🇧")),
            "DE" => Some(("Hallo aus Deutschland!", "EUR", "🇩🇪")),
            "FR" => Some(("Bonjour de France!", "EUR", "🇫🇷")),
            "JP" => Some(("こんにちは日本から!", "JPY", "🇯🇵")),
            "CA" => Some(("Hello from Canada!", "CAD", "🇨🇦")),
            "AU" => Some(("G'day from Australia!", "AUD", "🇦🇺")),
            "BR" => Some(("Olá do Brasil!", "BRL", "🇧🇷")),
            "IN" => Some(("नमस्ते भारत से!", "INR", "🇮🇳")),
            "CN" => Some(("你好来自中国!", "CNY", "🇨🇳")),
            _ => None,
        };

        match known {
            Some((greeting, currency, flag)) => Self {
                greeting: greeting.to_string(),
                currency,
                flag,
            },
            None => Self {
                greeting: format!("Hello from {}!", code),
                currency: "Unknown",
                flag: "🌍",
            },
        }
    }
}
