//! Narrative synthesis for the executive overview.
//!
//! Prose lives in `templates/narratives.yaml` (embedded at compile time)
//! and is rendered with Handlebars. Every template is deterministic: the
//! same inputs always produce the same sentence. If a template cannot be
//! rendered the caller falls back to a plain formatted string so report
//! generation never halts on narrative trouble.

use exbrief_core::{ExbriefError, HealthBand, PhaseId};
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use tracing::warn;

const EMBEDDED_NARRATIVES: &str = include_str!("../templates/narratives.yaml");

/// Top-level narratives file structure
#[derive(Debug, Clone, Deserialize)]
pub struct NarrativesFile {
    pub version: String,
    pub templates: HashMap<String, NarrativeTemplate>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct NarrativeTemplate {
    pub description: String,
    pub template: String,
}

impl NarrativesFile {
    /// Parse narratives from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, ExbriefError> {
        serde_yaml::from_str(yaml).map_err(|e| ExbriefError::TemplateError(e.to_string()))
    }

    /// The embedded default narratives file
    pub fn embedded() -> Result<Self, ExbriefError> {
        Self::from_yaml(EMBEDDED_NARRATIVES)
    }
}

/// Compiled renderer with all narrative templates registered
pub struct NarrativeRenderer<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> NarrativeRenderer<'a> {
    pub fn new(file: &NarrativesFile) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        for (name, template) in &file.templates {
            let _ = handlebars.register_template_string(name, &template.template);
        }
        NarrativeRenderer { handlebars }
    }

    /// Render a named template with data
    pub fn render(&self, name: &str, data: &serde_json::Value) -> Result<String, ExbriefError> {
        self.handlebars
            .render(name, data)
            .map(|s| collapse_whitespace(&s))
            .map_err(|e| ExbriefError::RenderError(e.to_string()))
    }
}

static RENDERER: Lazy<Option<NarrativeRenderer<'static>>> = Lazy::new(|| {
    match NarrativesFile::embedded() {
        Ok(file) => Some(NarrativeRenderer::new(&file)),
        Err(e) => {
            warn!(error = %e, "embedded narratives failed to load, using fallback prose");
            None
        }
    }
});

/// Inputs interpolated into BLUF and bottom-line templates.
#[derive(Debug, Clone)]
pub struct NarrativeInputs {
    pub company: String,
    pub score: i64,
    pub trajectory_phrase: String,
    pub top_strength: String,
    pub top_finding: String,
    pub top_priority: String,
    pub top_risk: String,
}

impl NarrativeInputs {
    fn as_json(&self) -> serde_json::Value {
        json!({
            "company": self.company,
            "score": self.score,
            "trajectory_phrase": self.trajectory_phrase,
            "top_strength": self.top_strength,
            "top_finding": self.top_finding,
            "top_priority": self.top_priority,
            "top_risk": self.top_risk,
        })
    }
}

/// Synthesize the bottom-line-up-front paragraph for a health band.
pub fn synthesize_bluf(band: HealthBand, inputs: &NarrativeInputs) -> String {
    let name = match band {
        HealthBand::Strong => "bluf_strong",
        HealthBand::Moderate => "bluf_moderate",
        HealthBand::AtRisk => "bluf_at_risk",
    };
    render_or(name, inputs, || {
        format!(
            "{} earns an overall business health score of {} out of 100 and is {}. \
             The fastest path forward is to {}, beginning inside the next 30 days.",
            inputs.company, inputs.score, inputs.trajectory_phrase, inputs.top_priority
        )
    })
}

/// Closing "bottom line" statement, keyed by the same band.
pub fn bottom_line(band: HealthBand, inputs: &NarrativeInputs) -> String {
    match band {
        HealthBand::Strong => render_or("bottom_line_strong", inputs, || {
            format!(
                "{} has strong foundations. Next step: execute on {}.",
                inputs.company, inputs.top_priority
            )
        }),
        HealthBand::Moderate => render_or("bottom_line_moderate", inputs, || {
            format!(
                "This assessment shows solid potential at {}. Start with {}.",
                inputs.company, inputs.top_priority
            )
        }),
        HealthBand::AtRisk => render_or("bottom_line_at_risk", inputs, || {
            format!(
                "{} is at an inflection point and the moment calls for decisive action: \
                 start with {} this week.",
                inputs.company, inputs.top_priority
            )
        }),
    }
}

/// Focus line for one execution-roadmap window.
pub fn phase_focus(phase: PhaseId, lead: Option<&str>) -> String {
    let name = match phase {
        PhaseId::Days1To30 => "phase_focus_days_1_30",
        PhaseId::Days31To60 => "phase_focus_days_31_60",
        PhaseId::Days61To90 => "phase_focus_days_61_90",
    };
    let data = json!({ "lead": lead });
    if let Some(renderer) = RENDERER.as_ref() {
        if let Ok(text) = renderer.render(name, &data) {
            return text;
        }
    }
    match lead {
        Some(lead) => format!("{}: {}.", phase.title(), lead),
        None => format!("{}: hold the operating cadence.", phase.title()),
    }
}

fn render_or(name: &str, inputs: &NarrativeInputs, fallback: impl FnOnce() -> String) -> String {
    if let Some(renderer) = RENDERER.as_ref() {
        match renderer.render(name, &inputs.as_json()) {
            Ok(text) => return text,
            Err(e) => warn!(template = name, error = %e, "narrative render failed"),
        }
    }
    fallback()
}

// YAML folded scalars keep single newlines as spaces but template bodies
// assembled from multiple lines can still carry doubled spaces.
fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
