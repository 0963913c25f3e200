//! Scoring configuration

use crate::corpus::OpenerPanel;
use crate::features::wsa::WsaMode;

/// Choices made once before statistics are built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Openers simulated for WSA
    pub openers: OpenerPanel,
    /// How WSA is produced
    pub wsa_mode: WsaMode,
}

impl ScoringConfig {
    #[must_use]
    pub fn new(openers: OpenerPanel, wsa_mode: WsaMode) -> Self {
        Self { openers, wsa_mode }
    }

    #[must_use]
    pub fn with_wsa_mode(mut self, wsa_mode: WsaMode) -> Self {
        self.wsa_mode = wsa_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_standard_panel_and_simulation() {
        let config = ScoringConfig::default();
        assert_eq!(config.openers.len(), 10);
        assert_eq!(config.wsa_mode, WsaMode::Simulate);

        let config = config.with_wsa_mode(WsaMode::Approximate);
        assert_eq!(config.wsa_mode, WsaMode::Approximate);
    }
}
