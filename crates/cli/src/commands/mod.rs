//! CLI command implementations.

pub mod check;
pub mod features;
pub mod get;
pub mod show;
pub mod status;

use starter_config::Feature;

/// The features a command operates on: those named, or the whole catalog.
pub fn selected_features(features: &[Feature]) -> Vec<Feature> {
    if features.is_empty() {
        Feature::ALL.to_vec()
    } else {
        let mut selected = Vec::with_capacity(features.len());
        for feature in features {
            if !selected.contains(feature) {
                selected.push(*feature);
            }
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_features_defaults_to_all() {
        assert_eq!(selected_features(&[]), Feature::ALL.to_vec());
    }

    #[test]
    fn test_selected_features_dedups_in_order() {
        let selected = selected_features(&[
            Feature::DiscordBot,
            Feature::AiChat,
            Feature::DiscordBot,
        ]);
        assert_eq!(selected, vec![Feature::DiscordBot, Feature::AiChat]);
    }
}
