//! Code pane — static SDK snippets for building the shown pipeline.
//!
//! Purely presentational: language tabs, a monospace snippet body, and
//! a copy-to-clipboard button. The snippets are fixed content and do
//! not reflect the live graph.

use egui::{Color32, Ui};

use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::workspace::PaneKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnippetLanguage {
    #[default]
    Python,
    TypeScript,
    Cli,
}

impl SnippetLanguage {
    pub const ALL: [SnippetLanguage; 3] = [
        SnippetLanguage::Python,
        SnippetLanguage::TypeScript,
        SnippetLanguage::Cli,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SnippetLanguage::Python => "Python",
            SnippetLanguage::TypeScript => "TypeScript",
            SnippetLanguage::Cli => "CLI",
        }
    }

    pub fn snippet(self) -> &'static str {
        match self {
            SnippetLanguage::Python => PYTHON_SNIPPET,
            SnippetLanguage::TypeScript => TYPESCRIPT_SNIPPET,
            SnippetLanguage::Cli => CLI_SNIPPET,
        }
    }
}

/// State for the Code pane.
#[derive(Default)]
pub struct CodeViewState {
    pub language: SnippetLanguage,
    /// Frame countdown for the "copied" feedback label.
    copied_frames: u32,
}

/// Render the code pane.
pub fn render(
    state: &mut CodeViewState,
    _shared: &mut SharedState<'_>,
    ui: &mut Ui,
) -> Vec<AppAction> {
    ui.horizontal(|ui| {
        for language in SnippetLanguage::ALL {
            ui.selectable_value(&mut state.language, language, language.label());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Copy").clicked() {
                ui.ctx().copy_text(state.language.snippet().to_string());
                state.copied_frames = 120;
            }
            if state.copied_frames > 0 {
                state.copied_frames -= 1;
                ui.colored_label(Color32::from_rgb(80, 200, 120), "Copied");
            }
        });
    });
    ui.separator();

    egui::ScrollArea::both().show(ui, |ui| {
        ui.add(
            egui::Label::new(
                egui::RichText::new(state.language.snippet())
                    .monospace()
                    .size(11.0),
            )
            .wrap_mode(egui::TextWrapMode::Extend),
        );
    });

    Vec::new()
}

const PYTHON_SNIPPET: &str = r#"# Import the FlowCanvas SDK
from flowcanvas import FlowClient, Pipeline, Models

# Initialize client with your API key
client = FlowClient(api_key="your_api_key_here")

# Create a new pipeline
pipeline = Pipeline("text-completion")

# Add models to the pipeline
pipeline.add_node(
    Models.TEXT.GPT4,
    params={"max_tokens": 1000, "temperature": 0.7},
    position=(100, 150),
)

# Process input through the pipeline
result = pipeline.process("Generate a short story about a robot learning to paint.")
print(result.text)
"#;

const TYPESCRIPT_SNIPPET: &str = r#"import { FlowClient, Pipeline, Models } from 'flowcanvas';

// Initialize client with your API key
const client = new FlowClient({ apiKey: 'your_api_key_here' });

// Create a new pipeline
const pipeline = new Pipeline('text-completion');

// Add models to the pipeline
pipeline.addNode({
  model: Models.TEXT.GPT4,
  params: { maxTokens: 1000, temperature: 0.7 },
  position: { x: 100, y: 150 },
});

// Process input through the pipeline
const result = await pipeline.process(
  'A futuristic city with flying cars and neon lights'
);
console.log(result.text);
"#;

const CLI_SNIPPET: &str = r#"# Install the FlowCanvas CLI
npm install -g @flowcanvas/cli

# Log in with your API key
flow login --key your_api_key_here

# Create a new pipeline
flow pipeline create text-completion

# Add a model node
flow pipeline add-node \
  --model text.gpt4 \
  --params '{"maxTokens": 1000, "temperature": 0.7}' \
  --position "100,150"

# Execute the pipeline
flow pipeline run --input "A cat playing piano in a jazz club"
"#;

impl Pane for CodeViewState {
    fn kind(&self) -> PaneKind {
        PaneKind::CodeView
    }

    fn render(&mut self, shared: &mut SharedState, ui: &mut Ui) -> Vec<AppAction> {
        render(self, shared, ui)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_snippet() {
        for language in SnippetLanguage::ALL {
            assert!(!language.snippet().is_empty());
            assert!(!language.label().is_empty());
        }
    }
}
