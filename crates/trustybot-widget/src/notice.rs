// crates/trustybot-widget/src/notice.rs
// User-facing notices shown when the session ends

use crate::failure::ChatFailure;

/// Where "contact" links in notices point
pub const CONTACT_EMAIL: &str = "al@alnowatzki.com";

/// Input placeholder once the message cap is hit
pub const LIMIT_PLACEHOLDER: &str = "Limit reached";

/// Input placeholder once a remote call failed
pub const UNAVAILABLE_PLACEHOLDER: &str = "Chatbot unavailable";

/// The terminal notices a session can end with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    LimitReached,
    ConfigurationError,
    OutOfFunding,
    ServerOffline,
    TechnicalDifficulties,
}

impl NoticeKind {
    pub fn title(&self) -> &'static str {
        match self {
            NoticeKind::LimitReached => "Session limit reached!",
            NoticeKind::ConfigurationError => "Configuration Error",
            NoticeKind::OutOfFunding => "Out of Safety Funding!",
            NoticeKind::ServerOffline => "Server Offline",
            NoticeKind::TechnicalDifficulties => "Technical Difficulties",
        }
    }

    /// Notice text. Where a contact link belongs, the text contains
    /// `contact_link()` verbatim so renderers can split around it.
    pub fn body(&self) -> &'static str {
        match self {
            NoticeKind::LimitReached => {
                "This chatbot has reached its interaction limit for this session. \
                 If you'd like to continue receiving questionable advice, \
                 contact Al to let him know you need more terrible guidance in your life."
            }
            NoticeKind::ConfigurationError => {
                "TrustyBot isn't properly configured yet. The API key needs to be set up. \
                 This is actually very on-brand for an \"unsafe\" chatbot demonstration!"
            }
            NoticeKind::OutOfFunding => {
                "This chatbot has run out of safety funding! If you'd like to help keep this \
                 demonstration of unsafe AI running, please contact me about sponsoring more \
                 terrible advice. Ironically, running out of money might be the safest thing \
                 that could happen to this bot."
            }
            NoticeKind::ServerOffline => {
                "TrustyBot's backend server isn't running right now. Even unsafe AI needs \
                 infrastructure! Please try again later, or contact Al to let him know."
            }
            NoticeKind::TechnicalDifficulties => {
                "Even TrustyBot has limits, and apparently working properly is one of them. \
                 Please try again later, or contact Al if you desperately need bad advice right now."
            }
        }
    }

    /// Text of the mailto link inside `body()`, if the notice has one
    pub fn contact_link(&self) -> Option<&'static str> {
        match self {
            NoticeKind::ConfigurationError => None,
            NoticeKind::OutOfFunding => Some("contact me"),
            _ => Some("contact Al"),
        }
    }

    /// `body()` split around the contact link: (before, link, after)
    pub fn body_parts(&self) -> Option<(&'static str, &'static str, &'static str)> {
        let link = self.contact_link()?;
        let (before, after) = self.body().split_once(link)?;
        Some((before, link, after))
    }

    /// Whether the notice carries a contact link
    pub fn has_contact(&self) -> bool {
        self.contact_link().is_some()
    }

    /// Placeholder put on the locked input
    pub fn placeholder(&self) -> &'static str {
        match self {
            NoticeKind::LimitReached => LIMIT_PLACEHOLDER,
            _ => UNAVAILABLE_PLACEHOLDER,
        }
    }

    /// Stable CSS-ish class name for renderers
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::LimitReached => "limit-message",
            _ => "error-message",
        }
    }
}

impl From<&ChatFailure> for NoticeKind {
    fn from(failure: &ChatFailure) -> Self {
        match failure {
            ChatFailure::InvalidApiKey => NoticeKind::ConfigurationError,
            ChatFailure::RateLimited | ChatFailure::OutOfCredits => NoticeKind::OutOfFunding,
            ChatFailure::ServerOffline(_) => NoticeKind::ServerOffline,
            ChatFailure::Api { .. } | ChatFailure::MalformedResponse(_) => {
                NoticeKind::TechnicalDifficulties
            }
        }
    }
}
