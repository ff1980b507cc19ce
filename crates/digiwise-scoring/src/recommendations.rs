use digiwise_core::models::result::RiskLevel;
use serde::Serialize;

/// A concrete next step shown alongside a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedAction {
    pub action: &'static str,
    pub timeframe: &'static str,
}

const fn action(action: &'static str, timeframe: &'static str) -> RecommendedAction {
    RecommendedAction { action, timeframe }
}

const LOW: &[RecommendedAction] = &[
    action("Maintain current healthy digital boundaries", "Ongoing"),
    action("Set goals for continued improvement", "This week"),
];

const MODERATE: &[RecommendedAction] = &[
    action("Implement screen time limits on social media apps", "Today"),
    action("Create designated tech-free zones", "This week"),
];

const HIGH: &[RecommendedAction] = &[
    action("Schedule regular digital detox periods", "Today"),
    action("Use app blocking tools during work hours", "This week"),
];

const SEVERE: &[RecommendedAction] = &[
    action("Set up strict device usage limitations", "Today"),
    action("Seek professional support for digital dependency", "This week"),
];

pub fn recommended_actions(level: RiskLevel) -> &'static [RecommendedAction] {
    match level {
        RiskLevel::Low => LOW,
        RiskLevel::Moderate => MODERATE,
        RiskLevel::High => HIGH,
        RiskLevel::Severe => SEVERE,
    }
}
