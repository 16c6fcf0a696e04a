// src/services/prompt.rs
use crate::models::*;
use crate::services::catalog::theme_entry;
use crate::services::color_theory::ColorTheoryTranslator;
use serde::Serialize;

/// Payload handed to the image provider for one call.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderRequest {
    pub kind: GenerationKind,
    pub theme: Theme,
    pub mood: Mood,
    pub layout: LayoutArchetype,
    pub layout_description: String,
    pub palette: Vec<String>,
    pub palette_guidance: String,
    pub accents: Vec<String>,
    pub headline: String,
    pub phrases: Vec<String>,
    /// Only present on final (print quality) requests.
    pub constraints: Option<Constraints>,
    pub prompt: String,
}

pub struct PromptBuilder {
    translator: ColorTheoryTranslator,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self {
            translator: ColorTheoryTranslator::new(),
        }
    }

    pub fn request_for(&self, spec: &DesignSpec, kind: GenerationKind) -> ProviderRequest {
        let palette_guidance = self.palette_guidance(spec);
        let constraints = match kind {
            GenerationKind::Preview => None,
            GenerationKind::Final => Some(spec.constraints.clone()),
        };
        let prompt = match kind {
            GenerationKind::Preview => self.preview_prompt(spec, &palette_guidance),
            GenerationKind::Final => self.final_prompt(spec, &palette_guidance),
        };

        ProviderRequest {
            kind,
            theme: spec.theme,
            mood: spec.mood,
            layout: spec.layout_archetype,
            layout_description: spec.layout_archetype.description().to_string(),
            palette: spec.palette_token.hex.clone(),
            palette_guidance,
            accents: spec.accent_set.clone(),
            headline: spec.main_affirmation.clone(),
            phrases: spec.supporting_phrases.clone(),
            constraints,
            prompt,
        }
    }

    fn palette_guidance(&self, spec: &DesignSpec) -> String {
        match spec.palette_token.source {
            PaletteSource::Custom => {
                let report = self.translator.analyze_hex(&spec.palette_token.hex);
                self.translator
                    .to_prompt_section(&report, spec.theme, spec.mood)
            }
            PaletteSource::Theme => format!(
                "Theme palette: {}. Use only these colors.",
                spec.palette_token.hex.join(" | ")
            ),
        }
    }

    fn preview_prompt(&self, spec: &DesignSpec, palette_guidance: &str) -> String {
        format!(
            r#"Create a premium affirmation artwork.

HEADLINE (most important, perfectly readable): "{headline}"
SUPPORTING PHRASES (in order of visual weight):
{phrases}

AESTHETIC: {aesthetic}
LAYOUT ({layout}): {layout_description}
DECORATIVE ACCENTS: {accents}

{palette_guidance}"#,
            headline = spec.main_affirmation,
            phrases = bullet_list(&spec.supporting_phrases),
            aesthetic = theme_entry(spec.theme).aesthetic,
            layout = spec.layout_archetype.as_str(),
            layout_description = spec.layout_archetype.description(),
            accents = spec.accent_set.join(", "),
        )
    }

    fn final_prompt(&self, spec: &DesignSpec, palette_guidance: &str) -> String {
        let c = &spec.constraints;
        format!(
            r#"{preview}

PRINT QUALITY REQUIREMENTS:
- Resolution: {dpi} DPI, print-ready
- Dimensions: at least {width}x{height} pixels ({ratio} portrait)
- Text must be razor sharp and perfectly readable
- Avoid: {ban}"#,
            preview = self.preview_prompt(spec, palette_guidance),
            dpi = c.dpi,
            width = c.min_width,
            height = c.min_height,
            ratio = c.ratio,
            ban = c.ban.join(", "),
        )
    }
}

fn bullet_list(lines: &[String]) -> String {
    lines
        .iter()
        .map(|l| format!("- {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::spec_builder::DesignSpecBuilder;

    fn spec(custom_palette: Option<Vec<String>>) -> DesignSpec {
        DesignSpecBuilder::new().build(&DesignRequest {
            theme: "confidence".to_string(),
            mood: "minimalist".to_string(),
            seed: Some(42),
            custom_palette,
            ..Default::default()
        })
    }

    #[test]
    fn preview_requests_omit_constraints() {
        let req = PromptBuilder::new().request_for(&spec(None), GenerationKind::Preview);
        assert!(req.constraints.is_none());
        assert!(!req.prompt.contains("PRINT QUALITY"));
        assert_eq!(req.phrases.len(), 6);
    }

    #[test]
    fn final_requests_carry_constraints() {
        let s = spec(None);
        let req = PromptBuilder::new().request_for(&s, GenerationKind::Final);
        assert_eq!(req.constraints.as_ref(), Some(&s.constraints));
        assert!(req.prompt.contains("300 DPI"));
        assert!(req.prompt.contains(&s.main_affirmation));
    }

    #[test]
    fn custom_palette_uses_color_strategy() {
        let s = spec(Some(vec![
            "#1A1A1A".to_string(),
            "#D4AF37".to_string(),
            "#FFFFFF".to_string(),
        ]));
        let req = PromptBuilder::new().request_for(&s, GenerationKind::Preview);
        assert!(req.palette_guidance.contains("COLOR STRATEGY"));
        assert!(req.prompt.contains("METALLIC GOLD"));
    }

    #[test]
    fn theme_palette_is_listed_plainly() {
        let req = PromptBuilder::new().request_for(&spec(None), GenerationKind::Preview);
        assert!(req.palette_guidance.starts_with("Theme palette: #1A1A1A"));
    }
}
