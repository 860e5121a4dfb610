// crates/trustybot-widget/src/panel.rs
// Collapsible panel: minimized / normal / expanded

/// Visual state of the chat panel. Starts minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Minimized,
    Normal,
    Expanded,
}

impl PanelState {
    /// Header click. An expanded panel collapses to normal first, then
    /// normal and minimized swap.
    pub fn toggle(self) -> Self {
        match self {
            PanelState::Expanded => PanelState::Normal,
            PanelState::Normal => PanelState::Minimized,
            PanelState::Minimized => PanelState::Normal,
        }
    }

    /// Expand button
    pub fn toggle_expand(self) -> Self {
        match self {
            PanelState::Expanded => PanelState::Normal,
            _ => PanelState::Expanded,
        }
    }

    pub fn is_minimized(self) -> bool {
        self == PanelState::Minimized
    }

    /// Class list suffix for renderers
    pub fn class(self) -> &'static str {
        match self {
            PanelState::Minimized => "chatbot minimized",
            PanelState::Normal => "chatbot",
            PanelState::Expanded => "chatbot expanded",
        }
    }

    /// Whether the input should take focus once the panel settles
    pub fn wants_focus(self, session_disabled: bool) -> bool {
        !self.is_minimized() && !session_disabled
    }
}
