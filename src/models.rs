// src/models.rs
use crate::errors::StudioError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

pub const SPEC_VERSION: u32 = 1;
pub const PHRASE_RANGE: RangeInclusive<usize> = 6..=12;
pub const PALETTE_RANGE: RangeInclusive<usize> = 3..=5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Confidence,
    Peace,
    Focus,
    Gratitude,
    Abundance,
    Healing,
    Strength,
    Joy,
    Balance,
    Courage,
    Clarity,
    Renewal,
    Freedom,
    Passion,
    Wisdom,
}

impl Theme {
    pub const ALL: [Theme; 15] = [
        Theme::Confidence,
        Theme::Peace,
        Theme::Focus,
        Theme::Gratitude,
        Theme::Abundance,
        Theme::Healing,
        Theme::Strength,
        Theme::Joy,
        Theme::Balance,
        Theme::Courage,
        Theme::Clarity,
        Theme::Renewal,
        Theme::Freedom,
        Theme::Passion,
        Theme::Wisdom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Confidence => "confidence",
            Theme::Peace => "peace",
            Theme::Focus => "focus",
            Theme::Gratitude => "gratitude",
            Theme::Abundance => "abundance",
            Theme::Healing => "healing",
            Theme::Strength => "strength",
            Theme::Joy => "joy",
            Theme::Balance => "balance",
            Theme::Courage => "courage",
            Theme::Clarity => "clarity",
            Theme::Renewal => "renewal",
            Theme::Freedom => "freedom",
            Theme::Passion => "passion",
            Theme::Wisdom => "wisdom",
        }
    }

    /// Parses a user-supplied slug. Unknown input falls back to `Confidence`.
    pub fn from_slug(raw: &str) -> Self {
        let slug = raw.trim().to_lowercase();
        if let Some(theme) = Self::ALL.iter().find(|t| t.as_str() == slug) {
            return *theme;
        }
        match slug.as_str() {
            s if s.contains("confiden") => Theme::Confidence,
            s if s.contains("calm") || s.contains("peace") => Theme::Peace,
            s if s.contains("gratitud") || s.contains("thank") => Theme::Gratitude,
            s if s.contains("focus") => Theme::Focus,
            _ => Theme::Confidence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Minimalist,
    Bohemian,
    ModernSerif,
    Coastal,
    Earthy,
    Vibrant,
    Pastel,
    Monochrome,
    Sunset,
    Forest,
}

impl Mood {
    pub const ALL: [Mood; 10] = [
        Mood::Minimalist,
        Mood::Bohemian,
        Mood::ModernSerif,
        Mood::Coastal,
        Mood::Earthy,
        Mood::Vibrant,
        Mood::Pastel,
        Mood::Monochrome,
        Mood::Sunset,
        Mood::Forest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Minimalist => "minimalist",
            Mood::Bohemian => "bohemian",
            Mood::ModernSerif => "modern-serif",
            Mood::Coastal => "coastal",
            Mood::Earthy => "earthy",
            Mood::Vibrant => "vibrant",
            Mood::Pastel => "pastel",
            Mood::Monochrome => "monochrome",
            Mood::Sunset => "sunset",
            Mood::Forest => "forest",
        }
    }

    /// Parses a user-supplied slug, accepting common synonyms. Unknown input
    /// falls back to `Minimalist`.
    pub fn from_slug(raw: &str) -> Self {
        let slug = raw.trim().to_lowercase();
        if let Some(mood) = Self::ALL.iter().find(|m| m.as_str() == slug) {
            return *mood;
        }
        match slug.as_str() {
            "minimal" => Mood::Minimalist,
            s if s.contains("boho") => Mood::Bohemian,
            s if s.contains("modern") => Mood::ModernSerif,
            s if s.contains("coast") => Mood::Coastal,
            s if s.contains("earth") || s.contains("botan") => Mood::Earthy,
            _ => Mood::Minimalist,
        }
    }
}

/// Canonical layout composition strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutArchetype {
    CenteredSerenity,
    VerticalFlow,
    FloatingCluster,
    AsymmetricBalance,
    ArcFlow,
    GoldenSpiral,
    BotanicalFrame,
    MinimalHorizon,
    RadiantCenterBurst,
    SoftAnchorLeft,
    SoftAnchorRight,
    GentleColumn,
    PebbleScatter,
    CircleHarmony,
    PrayerStack,
    RibbonDrift,
    EditorialGridLuxe,
    CalmWaterfall,
    SacredGeometry,
    BreathSpaceMinimal,
}

impl LayoutArchetype {
    pub const ALL: [LayoutArchetype; 20] = [
        LayoutArchetype::CenteredSerenity,
        LayoutArchetype::VerticalFlow,
        LayoutArchetype::FloatingCluster,
        LayoutArchetype::AsymmetricBalance,
        LayoutArchetype::ArcFlow,
        LayoutArchetype::GoldenSpiral,
        LayoutArchetype::BotanicalFrame,
        LayoutArchetype::MinimalHorizon,
        LayoutArchetype::RadiantCenterBurst,
        LayoutArchetype::SoftAnchorLeft,
        LayoutArchetype::SoftAnchorRight,
        LayoutArchetype::GentleColumn,
        LayoutArchetype::PebbleScatter,
        LayoutArchetype::CircleHarmony,
        LayoutArchetype::PrayerStack,
        LayoutArchetype::RibbonDrift,
        LayoutArchetype::EditorialGridLuxe,
        LayoutArchetype::CalmWaterfall,
        LayoutArchetype::SacredGeometry,
        LayoutArchetype::BreathSpaceMinimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutArchetype::CenteredSerenity => "centered-serenity",
            LayoutArchetype::VerticalFlow => "vertical-flow",
            LayoutArchetype::FloatingCluster => "floating-cluster",
            LayoutArchetype::AsymmetricBalance => "asymmetric-balance",
            LayoutArchetype::ArcFlow => "arc-flow",
            LayoutArchetype::GoldenSpiral => "golden-spiral",
            LayoutArchetype::BotanicalFrame => "botanical-frame",
            LayoutArchetype::MinimalHorizon => "minimal-horizon",
            LayoutArchetype::RadiantCenterBurst => "radiant-center-burst",
            LayoutArchetype::SoftAnchorLeft => "soft-anchor-left",
            LayoutArchetype::SoftAnchorRight => "soft-anchor-right",
            LayoutArchetype::GentleColumn => "gentle-column",
            LayoutArchetype::PebbleScatter => "pebble-scatter",
            LayoutArchetype::CircleHarmony => "circle-harmony",
            LayoutArchetype::PrayerStack => "prayer-stack",
            LayoutArchetype::RibbonDrift => "ribbon-drift",
            LayoutArchetype::EditorialGridLuxe => "editorial-grid-luxe",
            LayoutArchetype::CalmWaterfall => "calm-waterfall",
            LayoutArchetype::SacredGeometry => "sacred-geometry",
            LayoutArchetype::BreathSpaceMinimal => "breath-space-minimal",
        }
    }

    /// One-line composition brief used when prompting the provider.
    pub fn description(&self) -> &'static str {
        match self {
            LayoutArchetype::CenteredSerenity => {
                "Headline centered, balanced margins, soft breathing space"
            }
            LayoutArchetype::VerticalFlow => "Text cascades downward in a gentle vertical rhythm",
            LayoutArchetype::FloatingCluster => "Affirmations grouped in a soft cluster near center",
            LayoutArchetype::AsymmetricBalance => {
                "Intentionally off-center, modern editorial balance"
            }
            LayoutArchetype::ArcFlow => "Text follows a subtle curved line, an uplifting arc",
            LayoutArchetype::GoldenSpiral => "Spiral flow anchored by a meditative focal point",
            LayoutArchetype::BotanicalFrame => "Text surrounded by delicate foliage accents",
            LayoutArchetype::MinimalHorizon => {
                "Headline in the top third, open space below like sky"
            }
            LayoutArchetype::RadiantCenterBurst => {
                "Words radiate from a quiet center with a halo effect"
            }
            LayoutArchetype::SoftAnchorLeft => "Text anchored left, breathing room to the right",
            LayoutArchetype::SoftAnchorRight => {
                "Text anchored right, elegant asymmetry to the left"
            }
            LayoutArchetype::GentleColumn => "Headline and statements aligned like poetry lines",
            LayoutArchetype::PebbleScatter => "Text arranged as soft clusters like river stones",
            LayoutArchetype::CircleHarmony => "Circular composition evoking wholeness",
            LayoutArchetype::PrayerStack => "Vertical mantra stacking in a spiritual form",
            LayoutArchetype::RibbonDrift => "Text moves like a soft ribbon in organic motion",
            LayoutArchetype::EditorialGridLuxe => "Clean magazine grid system refinement",
            LayoutArchetype::CalmWaterfall => "Words fall downward like flowing water",
            LayoutArchetype::SacredGeometry => {
                "Subtle geometric cues such as the flower of life or triangles"
            }
            LayoutArchetype::BreathSpaceMinimal => "Very little text, stillness dominates the canvas",
        }
    }
}

// ---------------------------------------------------------------------------
// Color analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorRole {
    PrimaryText,
    Background,
    Accent,
    Secondary,
}

impl ColorRole {
    pub fn label(&self) -> &'static str {
        match self {
            ColorRole::PrimaryText => "PRIMARY TEXT",
            ColorRole::Background => "BACKGROUND",
            ColorRole::Accent => "ACCENT",
            ColorRole::Secondary => "SECONDARY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaturationLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorAnalysis {
    pub hex: String,
    pub name: String,
    pub role: ColorRole,
    pub luminance: f64,
    pub temperature: Temperature,
    pub saturation: SaturationLevel,
    pub coverage: String,
    pub usage: String,
    pub mood: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContrastCheck {
    pub ratio: f64,
    pub meets_aaa: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteAnalysis {
    pub colors: Vec<ColorAnalysis>,
    pub contrast: Option<ContrastCheck>,
    pub contrast_rule: String,
    pub temperature_rule: String,
    pub hierarchy_rule: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnalysisReport {
    NoCustomPalette,
    Palette(PaletteAnalysis),
}

// ---------------------------------------------------------------------------
// Design spec
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteSource {
    Theme,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteToken {
    pub name: String,
    pub hex: Vec<String>,
    pub source: PaletteSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    pub ratio: String,
    pub dpi: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub ban: Vec<String>,
}

impl Constraints {
    /// The fixed print envelope shared by every spec.
    pub fn print_envelope() -> Self {
        Self {
            ratio: "4:5".to_string(),
            dpi: 300,
            min_width: 2400,
            min_height: 3000,
            ban: vec![
                "neon".to_string(),
                "low_legibility".to_string(),
                "overcrowded_layout".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSpec {
    pub theme: Theme,
    pub mood: Mood,
    pub layout_archetype: LayoutArchetype,
    pub palette_token: PaletteToken,
    pub accent_set: Vec<String>,
    pub main_affirmation: String,
    pub supporting_phrases: Vec<String>,
    pub seed: Option<u64>,
    pub spec_version: u32,
    pub constraints: Constraints,
}

impl DesignSpec {
    /// Checks a spec that did not come from the builder.
    pub fn validate(&self) -> Result<(), StudioError> {
        if self.spec_version != SPEC_VERSION {
            return Err(StudioError::Validation(format!(
                "Unsupported spec version {}",
                self.spec_version
            )));
        }
        if self.main_affirmation.trim().is_empty() {
            return Err(StudioError::Validation(
                "Main affirmation is empty".to_string(),
            ));
        }
        let phrases = self.supporting_phrases.len();
        if !PHRASE_RANGE.contains(&phrases)
            || self.supporting_phrases.iter().any(|p| p.trim().is_empty())
        {
            return Err(StudioError::Validation(format!(
                "Expected 6 to 12 non-empty supporting phrases, got {}",
                phrases
            )));
        }
        let colors = &self.palette_token.hex;
        if !PALETTE_RANGE.contains(&colors.len()) {
            return Err(StudioError::Validation(format!(
                "Expected 3 to 5 palette colors, got {}",
                colors.len()
            )));
        }
        if let Some(bad) = colors.iter().find(|h| !is_hex_color(h)) {
            return Err(StudioError::Validation(format!(
                "Invalid palette color {:?}",
                bad
            )));
        }
        if self.constraints != Constraints::print_envelope() {
            return Err(StudioError::Validation(
                "Constraints must match the print envelope".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// User selections that feed the spec builder. Everything except theme and
/// mood is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignRequest {
    pub theme: String,
    pub mood: String,
    pub layout: Option<String>,
    pub keywords: Option<String>,
    pub seed: Option<u64>,
    pub custom_palette: Option<Vec<String>>,
    pub custom_headline: Option<String>,
    pub custom_phrases: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Generation jobs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Preview,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Cancelled,
    Succeeded,
    Failed,
}

/// Provider failure classes, ordered from least to most specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureClass {
    Generic,
    RateLimited,
    QuotaExhausted,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: Uuid,
    /// Base64 payload exactly as returned by the provider.
    pub b64: String,
    pub byte_len: usize,
}

impl GeneratedImage {
    pub fn data_url(&self) -> String {
        format!("data:image/png;base64,{}", self.b64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationJob {
    pub id: Uuid,
    pub surface: String,
    pub kind: GenerationKind,
    pub spec: DesignSpec,
    pub status: JobStatus,
    pub progress: u8,
    pub images: Vec<GeneratedImage>,
    pub message: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub enum JobOutcome {
    /// The finished job, images included.
    Succeeded { job: GenerationJob },
    Failed {
        job_id: Uuid,
        class: FailureClass,
        message: String,
    },
    /// Cancelled explicitly or superseded by a newer job. Carries no message.
    Cancelled { job_id: Uuid },
}

// ---------------------------------------------------------------------------
// Display variations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayVariation {
    Digital,
    Canvas,
    Unframed,
    Framed,
}

impl DisplayVariation {
    /// Variations a session may be pinned to. `Digital` is the primary artwork.
    pub const SESSION_CHOICES: [DisplayVariation; 3] = [
        DisplayVariation::Canvas,
        DisplayVariation::Unframed,
        DisplayVariation::Framed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayVariation::Digital => "digital",
            DisplayVariation::Canvas => "canvas",
            DisplayVariation::Unframed => "unframed",
            DisplayVariation::Framed => "framed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDisplayImage {
    pub url: String,
    pub is_loading: bool,
    pub variation_type: Option<DisplayVariation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_slug_is_case_insensitive() {
        assert_eq!(Theme::from_slug("  Gratitude "), Theme::Gratitude);
    }

    #[test]
    fn unknown_theme_falls_back_to_confidence() {
        assert_eq!(Theme::from_slug("zzz"), Theme::Confidence);
    }

    #[test]
    fn mood_synonyms_are_accepted() {
        assert_eq!(Mood::from_slug("boho"), Mood::Bohemian);
        assert_eq!(Mood::from_slug("Modern"), Mood::ModernSerif);
        assert_eq!(Mood::from_slug("botanical"), Mood::Earthy);
        assert_eq!(Mood::from_slug("nonsense"), Mood::Minimalist);
    }

    #[test]
    fn archetype_serializes_as_kebab_slug() {
        for archetype in LayoutArchetype::ALL {
            let json = serde_json::to_string(&archetype).unwrap();
            assert_eq!(json, format!("\"{}\"", archetype.as_str()));
        }
    }

    #[test]
    fn failure_classes_order_by_specificity() {
        assert!(FailureClass::QuotaExhausted > FailureClass::RateLimited);
        assert!(FailureClass::RateLimited > FailureClass::Generic);
    }

    fn built_spec() -> DesignSpec {
        crate::services::spec_builder::DesignSpecBuilder::new().build(&DesignRequest {
            theme: "confidence".to_string(),
            mood: "minimalist".to_string(),
            seed: Some(42),
            ..Default::default()
        })
    }

    #[test]
    fn built_specs_validate() {
        assert!(built_spec().validate().is_ok());
    }

    #[test]
    fn validate_rejects_broken_specs() {
        let mut no_phrases = built_spec();
        no_phrases.supporting_phrases.clear();

        let mut one_color = built_spec();
        one_color.palette_token.hex.truncate(1);

        let mut bad_hex = built_spec();
        bad_hex.palette_token.hex[0] = "red".to_string();

        let mut low_dpi = built_spec();
        low_dpi.constraints.dpi = 72;

        let mut blank_headline = built_spec();
        blank_headline.main_affirmation = "  ".to_string();

        for spec in [no_phrases, one_color, bad_hex, low_dpi, blank_headline] {
            assert!(matches!(spec.validate(), Err(StudioError::Validation(_))));
        }
    }
}
