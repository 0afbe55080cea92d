//! Post Formatting
//!
//! Wraps generated analysis in the bot's fixed post template.

/// Symbol used for tokens without a dedicated glyph
pub const FALLBACK_SYMBOL: &str = "🚀";

const SIGNATURE: &str = "By ChainSignal";

/// Glyph for well-known tokens, [`FALLBACK_SYMBOL`] otherwise
pub fn token_symbol(token: &str) -> &'static str {
    match token.to_uppercase().as_str() {
        "BTC" => "₿",
        "ETH" => "Ξ",
        "SOL" => "◎",
        "DOT" => "●",
        "ADA" => "𝔸",
        _ => FALLBACK_SYMBOL,
    }
}

/// Post template for one token
#[derive(Clone, Debug)]
pub struct PostTemplate {
    token: String,
    hashtags: bool,
}

impl PostTemplate {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self {
            token: token.as_ref().to_uppercase(),
            hashtags: false,
        }
    }

    /// Append `#TOKEN #Crypto #TechnicalAnalysis` after the signature
    pub fn with_hashtags(mut self, enabled: bool) -> Self {
        self.hashtags = enabled;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn render(&self, analysis: &str) -> String {
        let mut post = format_post(&self.token, analysis);
        if self.hashtags {
            post.push_str(&format!("\n#{} #Crypto #TechnicalAnalysis", self.token));
        }
        post
    }
}

/// Format `analysis` for `token` with the default template
pub fn format_post(token: &str, analysis: &str) -> String {
    let token = token.to_uppercase();
    let symbol = token_symbol(&token);
    format!("🤖Bot\n{symbol} {token} Technical Update {symbol}\n{analysis}\n{SIGNATURE}")
}
