// src/services/layout.rs
use crate::models::{LayoutArchetype, Mood};

/// Legacy and free-form layout names accepted from older clients.
const LEGACY_LAYOUTS: &[(&str, LayoutArchetype)] = &[
    ("vintage", LayoutArchetype::ArcFlow),
    ("clean-serif", LayoutArchetype::FloatingCluster),
    ("botanical", LayoutArchetype::BotanicalFrame),
    ("grid", LayoutArchetype::EditorialGridLuxe),
    ("halo", LayoutArchetype::CircleHarmony),
    ("halo-orbital", LayoutArchetype::CircleHarmony),
    ("organic", LayoutArchetype::ArcFlow),
    ("geometric", LayoutArchetype::EditorialGridLuxe),
    ("celestial", LayoutArchetype::RadiantCenterBurst),
    ("minimal-zen", LayoutArchetype::FloatingCluster),
    ("grit", LayoutArchetype::AsymmetricBalance),
    ("grit-directional", LayoutArchetype::AsymmetricBalance),
    ("scattered-organic", LayoutArchetype::PebbleScatter),
    ("flowing-curves", LayoutArchetype::ArcFlow),
    ("angular-grid", LayoutArchetype::EditorialGridLuxe),
    ("circular-orbit", LayoutArchetype::CircleHarmony),
    ("diagonal-dynamic", LayoutArchetype::AsymmetricBalance),
    ("layered-depth", LayoutArchetype::FloatingCluster),
    ("vertical-cascade", LayoutArchetype::VerticalFlow),
    ("horizontal-sweep", LayoutArchetype::SoftAnchorLeft),
    ("corner-radial", LayoutArchetype::RadiantCenterBurst),
    ("spiral-flow", LayoutArchetype::GoldenSpiral),
    ("stepped-rhythm", LayoutArchetype::GentleColumn),
    ("arch-composition", LayoutArchetype::ArcFlow),
    ("split-panel", LayoutArchetype::SoftAnchorLeft),
    ("wave-pattern", LayoutArchetype::RibbonDrift),
    ("botanical-branch", LayoutArchetype::BotanicalFrame),
    ("minimal-focus", LayoutArchetype::MinimalHorizon),
    ("centered-stack", LayoutArchetype::CenteredSerenity),
];

/// Maps a layout name onto its canonical archetype. Canonical names pass
/// through unchanged; anything unrecognised yields `fallback`.
pub fn resolve(layout_name: &str, fallback: LayoutArchetype) -> LayoutArchetype {
    let normalized = layout_name.trim().to_lowercase();
    if normalized.is_empty() {
        return fallback;
    }

    if let Some(archetype) = LayoutArchetype::ALL
        .iter()
        .find(|a| a.as_str() == normalized)
    {
        return *archetype;
    }

    LEGACY_LAYOUTS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, archetype)| *archetype)
        .unwrap_or(fallback)
}

/// Layout used when the caller does not pick one.
pub fn default_for_mood(mood: Mood) -> LayoutArchetype {
    match mood {
        Mood::Minimalist => LayoutArchetype::BreathSpaceMinimal,
        Mood::Bohemian => LayoutArchetype::BotanicalFrame,
        Mood::ModernSerif => LayoutArchetype::EditorialGridLuxe,
        Mood::Coastal => LayoutArchetype::SoftAnchorLeft,
        Mood::Earthy => LayoutArchetype::PebbleScatter,
        Mood::Vibrant => LayoutArchetype::RadiantCenterBurst,
        Mood::Pastel => LayoutArchetype::FloatingCluster,
        Mood::Monochrome => LayoutArchetype::GentleColumn,
        Mood::Sunset => LayoutArchetype::ArcFlow,
        Mood::Forest => LayoutArchetype::BotanicalFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_pass_through() {
        for archetype in LayoutArchetype::ALL {
            assert_eq!(
                resolve(archetype.as_str(), LayoutArchetype::PrayerStack),
                archetype
            );
        }
    }

    #[test]
    fn legacy_names_map_case_insensitively() {
        assert_eq!(
            resolve("Vintage", LayoutArchetype::CenteredSerenity),
            LayoutArchetype::ArcFlow
        );
        assert_eq!(
            resolve("GRID", LayoutArchetype::CenteredSerenity),
            LayoutArchetype::EditorialGridLuxe
        );
        assert_eq!(
            resolve(" celestial ", LayoutArchetype::CenteredSerenity),
            LayoutArchetype::RadiantCenterBurst
        );
    }

    #[test]
    fn unknown_and_empty_names_use_fallback() {
        assert_eq!(
            resolve("spaghetti", LayoutArchetype::SacredGeometry),
            LayoutArchetype::SacredGeometry
        );
        assert_eq!(
            resolve("", LayoutArchetype::CalmWaterfall),
            LayoutArchetype::CalmWaterfall
        );
    }

    #[test]
    fn legacy_table_never_names_a_canonical_slug() {
        for (name, _) in LEGACY_LAYOUTS {
            assert!(LayoutArchetype::ALL.iter().all(|a| a.as_str() != *name));
        }
    }

    #[test]
    fn every_mood_has_a_default() {
        for mood in Mood::ALL {
            assert!(LayoutArchetype::ALL.contains(&default_for_mood(mood)));
        }
    }
}
