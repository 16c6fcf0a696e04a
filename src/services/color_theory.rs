// src/services/color_theory.rs

use crate::models::*;

const MAX_PALETTE: usize = 5;
const TEXT_LUMINANCE_CEILING: f64 = 0.3;
const BACKGROUND_LUMINANCE_FLOOR: f64 = 0.7;
const AAA_CONTRAST: f64 = 7.0;
const TEMPERATURE_MARGIN: i32 = 20;
const LOW_SATURATION_DELTA: i32 = 30;
const MEDIUM_SATURATION_DELTA: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#RRGGBB` or `RRGGBB`, case-insensitive.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn luminance(&self) -> f64 {
        fn channel(v: u8) -> f64 {
            let v = v as f64 / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    pub fn temperature(&self) -> Temperature {
        let (r, g, b) = (self.r as i32, self.g as i32, self.b as i32);
        if r > g + TEMPERATURE_MARGIN && r > b + TEMPERATURE_MARGIN {
            Temperature::Warm
        } else if b > r + TEMPERATURE_MARGIN || (g > r + 10 && b > r) {
            Temperature::Cool
        } else {
            Temperature::Neutral
        }
    }

    pub fn saturation(&self) -> SaturationLevel {
        let max = self.r.max(self.g).max(self.b) as i32;
        let min = self.r.min(self.g).min(self.b) as i32;
        let delta = max - min;
        if delta < LOW_SATURATION_DELTA {
            SaturationLevel::Low
        } else if delta < MEDIUM_SATURATION_DELTA {
            SaturationLevel::Medium
        } else {
            SaturationLevel::High
        }
    }

    pub fn name(&self) -> &'static str {
        let (r, g, b) = (self.r as i32, self.g as i32, self.b as i32);
        let luminance = self.luminance();

        if luminance < 0.15 {
            return if r < 30 && g < 30 && b < 30 {
                "deep charcoal"
            } else if r > g && r > b {
                "deep burgundy"
            } else if g > r && g > b {
                "deep forest green"
            } else if b > r && b > g {
                "midnight blue"
            } else {
                "dark earth tone"
            };
        }

        if luminance > 0.85 {
            return if r > 250 && g > 250 && b > 250 {
                "pure white"
            } else if (r - g).abs() < 10 && (g - b).abs() < 10 {
                "soft cream"
            } else {
                "light neutral"
            };
        }

        // Gold reads as metallic before it reads as a warm red.
        if r > 180 && g > 140 && b < 80 {
            return "metallic gold";
        }

        if r > g + 30 && r > b + 30 {
            return if r > 200 && g > 150 {
                "warm terracotta"
            } else if r > 180 {
                "coral"
            } else {
                "warm rust"
            };
        }

        if g > r + 20 && g > b {
            return "sage green";
        }
        if b > r + 30 {
            return "soft blue";
        }
        if r > g && g > b && r < 160 {
            return "warm brown";
        }
        "neutral tone"
    }
}

/// WCAG contrast ratio between two relative luminances.
pub fn contrast_ratio(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

fn is_metallic(name: &str) -> bool {
    name.contains("gold") || name.contains("metallic")
}

pub struct ColorTheoryTranslator;

impl ColorTheoryTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes hex strings, silently dropping entries that do not parse.
    pub fn analyze_hex<S: AsRef<str>>(&self, palette: &[S]) -> AnalysisReport {
        let colors: Vec<Rgb> = palette
            .iter()
            .filter_map(|hex| Rgb::from_hex(hex.as_ref()))
            .collect();
        self.analyze(&colors)
    }

    pub fn analyze(&self, palette: &[Rgb]) -> AnalysisReport {
        if palette.is_empty() {
            return AnalysisReport::NoCustomPalette;
        }
        let palette = &palette[..palette.len().min(MAX_PALETTE)];
        let luminances: Vec<f64> = palette.iter().map(Rgb::luminance).collect();

        // First minimum / first maximum so duplicates never share a role.
        let darkest = luminances
            .iter()
            .enumerate()
            .fold(0, |best, (i, l)| if *l < luminances[best] { i } else { best });
        let lightest = luminances
            .iter()
            .enumerate()
            .fold(0, |best, (i, l)| if *l > luminances[best] { i } else { best });

        let colors: Vec<ColorAnalysis> = palette
            .iter()
            .enumerate()
            .map(|(i, rgb)| {
                let luminance = luminances[i];
                let saturation = rgb.saturation();
                let role = if i == darkest && luminance < TEXT_LUMINANCE_CEILING {
                    ColorRole::PrimaryText
                } else if i == lightest && luminance > BACKGROUND_LUMINANCE_FLOOR {
                    ColorRole::Background
                } else if saturation != SaturationLevel::Low {
                    ColorRole::Accent
                } else {
                    ColorRole::Secondary
                };
                let name = rgb.name();
                let temperature = rgb.temperature();
                ColorAnalysis {
                    hex: rgb.to_hex(),
                    name: name.to_string(),
                    role,
                    luminance,
                    temperature,
                    saturation,
                    coverage: coverage_for(role, name).to_string(),
                    usage: usage_for(role, name).to_string(),
                    mood: mood_for(name, temperature, saturation, luminance).to_string(),
                }
            })
            .collect();

        let text = colors.iter().find(|c| c.role == ColorRole::PrimaryText);
        let background = colors.iter().find(|c| c.role == ColorRole::Background);
        let contrast = match (text, background) {
            (Some(t), Some(bg)) => {
                let ratio = contrast_ratio(t.luminance, bg.luminance);
                Some(ContrastCheck {
                    ratio,
                    meets_aaa: ratio >= AAA_CONTRAST,
                })
            }
            _ => None,
        };

        AnalysisReport::Palette(PaletteAnalysis {
            contrast_rule: contrast_rule(&colors).to_string(),
            temperature_rule: temperature_rule(&colors).to_string(),
            hierarchy_rule: hierarchy_rule(&colors),
            contrast,
            colors,
        })
    }

    /// Renders the report as the color strategy section of a provider prompt.
    pub fn to_prompt_section(&self, report: &AnalysisReport, theme: Theme, mood: Mood) -> String {
        let analysis = match report {
            AnalysisReport::NoCustomPalette => {
                return "No custom palette - use mood and theme defaults".to_string();
            }
            AnalysisReport::Palette(analysis) => analysis,
        };

        let mut out = format!(
            "COLOR STRATEGY (Theme: {}, Mood: {})\n",
            theme.as_str(),
            mood.as_str()
        );
        if let Some(contrast) = &analysis.contrast {
            let verdict = if contrast.meets_aaa {
                "WCAG AAA"
            } else {
                "may need adjustment"
            };
            out.push_str(&format!(
                "Contrast Ratio: {:.2}:1 ({})\n",
                contrast.ratio, verdict
            ));
        }
        for (i, color) in analysis.colors.iter().enumerate() {
            out.push_str(&format!(
                "\nCOLOR {}: {} ({})\nRole: {}\nTemperature: {:?} | Saturation: {:?}\nCoverage: {}\nUsage Direction: {}\nEmotional Impact: {}\n",
                i + 1,
                color.name.to_uppercase(),
                color.hex,
                color.role.label(),
                color.temperature,
                color.saturation,
                color.coverage,
                color.usage,
                color.mood,
            ));
        }
        out.push_str(&format!(
            "\nCOLOR INTERACTION RULES:\n- {}\n- {}\n- {}\n- Never use colors at equal intensity, create clear hierarchy\n- Background supports, text commands, accents delight\n",
            analysis.contrast_rule, analysis.temperature_rule, analysis.hierarchy_rule
        ));
        out
    }
}

fn coverage_for(role: ColorRole, name: &str) -> &'static str {
    match role {
        ColorRole::PrimaryText => "5-10% (text only)",
        ColorRole::Background => "70-80% (foundation)",
        ColorRole::Accent if is_metallic(name) => "10-15% (luxury touch)",
        ColorRole::Accent => "15-25% (visual interest)",
        ColorRole::Secondary => "5-10% (subtle depth)",
    }
}

fn usage_for(role: ColorRole, name: &str) -> &'static str {
    match role {
        ColorRole::PrimaryText => {
            "Use for main headline text. Ensure 7:1 contrast ratio with background (WCAG AAA). Bold, commanding, highly readable."
        }
        ColorRole::Background => {
            "Use as primary background (70-80% of canvas). Creates foundation for all other elements. Should be subtle and not compete with text."
        }
        ColorRole::Accent if is_metallic(name) => {
            "LUXURY ACCENT - use sparingly (10-15% maximum). Thin lines, small dots, edge highlights only."
        }
        ColorRole::Accent => {
            "Accent color for visual interest at 15-25% coverage. Watercolor washes, botanical silhouettes, or geometric accents depending on mood."
        }
        ColorRole::Secondary => {
            "Supporting color for depth and nuance at 5-10% coverage. Subtle shadows and secondary accents."
        }
    }
}

fn mood_for(
    name: &str,
    temperature: Temperature,
    saturation: SaturationLevel,
    luminance: f64,
) -> &'static str {
    if is_metallic(name) {
        return "Luxury, sophistication, premium quality, editorial elegance";
    }
    match (temperature, saturation) {
        (Temperature::Warm, _) if luminance > 0.7 => "Inviting, comforting, peaceful, soft warmth",
        (Temperature::Warm, _) if luminance < 0.3 => "Grounded, earthy, stable, natural strength",
        (Temperature::Cool, _) if luminance > 0.7 => "Calm, serene, tranquil, airy freshness",
        (Temperature::Cool, SaturationLevel::High) => "Vibrant, energetic, bold, confident clarity",
        (_, SaturationLevel::Low) => "Sophisticated, muted elegance, subtle refinement",
        _ => "Balanced, harmonious, versatile",
    }
}

fn contrast_rule(colors: &[ColorAnalysis]) -> &'static str {
    let has_dark = colors.iter().any(|c| c.luminance < 0.2);
    let has_light = colors.iter().any(|c| c.luminance > 0.8);
    if has_dark && has_light {
        "HIGH CONTRAST palette - use bold juxtaposition for dramatic impact and clarity"
    } else if colors.iter().all(|c| c.luminance > 0.6 && c.luminance < 0.9) {
        "LOW CONTRAST palette - rely on subtle tonal shifts for sophisticated elegance"
    } else {
        "MEDIUM CONTRAST - balance bold elements with soft transitions"
    }
}

fn temperature_rule(colors: &[ColorAnalysis]) -> &'static str {
    if colors.iter().all(|c| c.temperature == Temperature::Warm) {
        "WARM HARMONY - create inviting, comforting, cozy atmosphere"
    } else if colors.iter().all(|c| c.temperature == Temperature::Cool) {
        "COOL HARMONY - create calm, serene, spacious feeling"
    } else {
        "MIXED TEMPERATURE - use warm as focal point, cool as supporting or vice versa"
    }
}

fn hierarchy_rule(colors: &[ColorAnalysis]) -> String {
    let text = colors.iter().find(|c| c.role == ColorRole::PrimaryText);
    let accent = colors.iter().find(|c| c.role == ColorRole::Accent);
    match (text, accent) {
        (None, _) => "Establish clear visual hierarchy with darkest as text".to_string(),
        (Some(_), None) => {
            "Text dominates, background supports, use accents sparingly".to_string()
        }
        (Some(_), Some(a)) if is_metallic(&a.name) || a.saturation == SaturationLevel::High => {
            format!(
                "{} is HIGH IMPACT - use minimally (10-15%) to avoid overwhelming text",
                a.name
            )
        }
        _ => "Text first (most important), accents second (visual interest), background third (foundation)".to_string(),
    }
}
