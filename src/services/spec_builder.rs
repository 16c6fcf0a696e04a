// src/services/spec_builder.rs
use crate::models::*;
use crate::services::catalog::{mood_accents, theme_entry};
use crate::services::color_theory::Rgb;
use crate::services::layout;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const PHRASE_COUNT: usize = 6;
const MAX_PHRASES: usize = 12;
const MIN_PALETTE: usize = 3;
const MAX_PALETTE: usize = 5;
const MAX_KEYWORD_CHARS: usize = 80;

pub struct DesignSpecBuilder;

impl DesignSpecBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Turns user selections into a fully resolved spec. Never fails: bad
    /// input is normalized or replaced by theme defaults.
    ///
    /// The headline pick and phrase shuffle are both driven by one PRNG seeded
    /// from `seed`, so identical requests produce identical specs. Without a
    /// seed a fresh one is drawn and recorded on the spec.
    pub fn build(&self, request: &DesignRequest) -> DesignSpec {
        let theme = Theme::from_slug(&request.theme);
        let mood = Mood::from_slug(&request.mood);
        let entry = theme_entry(theme);

        let seed = request.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        let mut rng = StdRng::seed_from_u64(seed);

        let fallback_layout = layout::default_for_mood(mood);
        let layout_archetype = match non_empty(request.layout.as_deref()) {
            Some(name) => layout::resolve(name, fallback_layout),
            None => fallback_layout,
        };

        // Draw before looking at overrides so the phrase stream does not
        // depend on whether a custom headline was supplied.
        let drawn_headline = entry
            .headlines
            .choose(&mut rng)
            .copied()
            .unwrap_or("I AM ENOUGH");
        let mut shuffled: Vec<&str> = entry.phrases.to_vec();
        shuffled.shuffle(&mut rng);

        let main_affirmation = non_empty(request.custom_headline.as_deref())
            .unwrap_or(drawn_headline)
            .to_string();

        let supporting_phrases = match &request.custom_phrases {
            Some(custom) => merge_custom_phrases(custom, &shuffled),
            None => {
                let mut phrases: Vec<String> = shuffled
                    .iter()
                    .take(PHRASE_COUNT)
                    .map(|p| p.to_string())
                    .collect();
                if let Some(line) = keyword_line(request.keywords.as_deref()) {
                    if !phrases.iter().any(|p| p.eq_ignore_ascii_case(&line)) {
                        phrases[PHRASE_COUNT - 1] = line;
                    }
                }
                phrases
            }
        };

        let palette_token = custom_palette(request.custom_palette.as_deref()).unwrap_or_else(|| {
            PaletteToken {
                name: format!("{}_theme", theme.as_str()),
                hex: entry.palette.iter().map(|h| h.to_string()).collect(),
                source: PaletteSource::Theme,
            }
        });

        debug!(
            "Built design spec theme={} mood={} layout={} seed={}",
            theme.as_str(),
            mood.as_str(),
            layout_archetype.as_str(),
            seed
        );

        DesignSpec {
            theme,
            mood,
            layout_archetype,
            palette_token,
            accent_set: mood_accents(mood).iter().map(|a| a.to_string()).collect(),
            main_affirmation,
            supporting_phrases,
            seed: Some(seed),
            spec_version: SPEC_VERSION,
            constraints: Constraints::print_envelope(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn keyword_line(keywords: Option<&str>) -> Option<String> {
    let trimmed: String = non_empty(keywords)?.chars().take(MAX_KEYWORD_CHARS).collect();
    let mut chars = trimmed.trim_end().chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}

/// Custom phrases keep their order. Blanks and duplicates are dropped, the
/// list is capped at twelve and topped up from the theme's shuffled phrases
/// when fewer than six remain.
fn merge_custom_phrases(custom: &[String], shuffled: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut phrases: Vec<String> = custom
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .filter(|p| seen.insert(p.to_lowercase()))
        .take(MAX_PHRASES)
        .map(str::to_string)
        .collect();

    for phrase in shuffled {
        if phrases.len() >= PHRASE_COUNT {
            break;
        }
        if seen.insert(phrase.to_lowercase()) {
            phrases.push(phrase.to_string());
        }
    }
    phrases
}

fn custom_palette(custom: Option<&[String]>) -> Option<PaletteToken> {
    let hex: Vec<String> = custom?
        .iter()
        .filter_map(|h| Rgb::from_hex(h))
        .map(|rgb| rgb.to_hex())
        .take(MAX_PALETTE)
        .collect();
    if hex.len() < MIN_PALETTE {
        return None;
    }
    Some(PaletteToken {
        name: "custom_palette".to_string(),
        hex,
        source: PaletteSource::Custom,
    })
}
