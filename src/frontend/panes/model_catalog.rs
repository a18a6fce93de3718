//! Model Catalog pane — browsable list of models and data connectors.
//!
//! Static catalog content with a category filter and name search.

use egui::{Color32, RichText, Ui};

use crate::frontend::pane_trait::Pane;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::workspace::PaneKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCategory {
    Text,
    Image,
    Audio,
    Multimodal,
}

impl ModelCategory {
    pub const ALL: [ModelCategory; 4] = [
        ModelCategory::Text,
        ModelCategory::Image,
        ModelCategory::Audio,
        ModelCategory::Multimodal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ModelCategory::Text => "Text",
            ModelCategory::Image => "Image",
            ModelCategory::Audio => "Audio",
            ModelCategory::Multimodal => "Multimodal",
        }
    }
}

pub struct CatalogModel {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ModelCategory,
}

pub const MODELS: &[CatalogModel] = &[
    CatalogModel {
        name: "GPT-4o",
        description: "State-of-the-art large language model for text generation and understanding.",
        category: ModelCategory::Text,
    },
    CatalogModel {
        name: "Claude 3 Opus",
        description: "Conversational AI assistant with state-of-the-art reasoning.",
        category: ModelCategory::Text,
    },
    CatalogModel {
        name: "Llama 3",
        description: "Open source large language model with strong performance.",
        category: ModelCategory::Text,
    },
    CatalogModel {
        name: "Gemini Pro",
        description: "Multimodal AI model that can understand text, images, and code.",
        category: ModelCategory::Multimodal,
    },
    CatalogModel {
        name: "Stable Diffusion XL",
        description: "Advanced image generation model with high quality outputs.",
        category: ModelCategory::Image,
    },
    CatalogModel {
        name: "Whisper Large v3",
        description: "Speech recognition system for transcription and translation.",
        category: ModelCategory::Audio,
    },
];

pub struct DataConnector {
    pub name: &'static str,
    pub description: &'static str,
}

pub const CONNECTORS: &[DataConnector] = &[
    DataConnector {
        name: "PostgreSQL",
        description: "Open source object-relational database with a strong reputation for reliability.",
    },
    DataConnector {
        name: "MongoDB Atlas",
        description: "Fully-managed document database with automatic scaling.",
    },
    DataConnector {
        name: "MySQL",
        description: "Popular open-source relational database management system.",
    },
    DataConnector {
        name: "Redis",
        description: "In-memory data structure store used as a database, cache, and message broker.",
    },
    DataConnector {
        name: "Pinecone Vector DB",
        description: "Managed vector database optimized for AI and machine learning workloads.",
    },
];

/// State for the Model Catalog pane.
#[derive(Default)]
pub struct ModelCatalogState {
    /// Active category filter; `None` shows everything.
    pub category: Option<ModelCategory>,
    pub search: String,
}

impl ModelCatalogState {
    /// Models passing the current category and search filters.
    pub fn filtered_models(&self) -> Vec<&'static CatalogModel> {
        let query = self.search.to_lowercase();
        MODELS
            .iter()
            .filter(|m| self.category.is_none_or(|c| m.category == c))
            .filter(|m| {
                query.is_empty()
                    || m.name.to_lowercase().contains(&query)
                    || m.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}

/// Render the model catalog pane.
pub fn render(
    state: &mut ModelCatalogState,
    _shared: &mut SharedState<'_>,
    ui: &mut Ui,
) -> Vec<AppAction> {
    ui.horizontal(|ui| {
        ui.selectable_value(&mut state.category, None, "All");
        for category in ModelCategory::ALL {
            ui.selectable_value(&mut state.category, Some(category), category.label());
        }
    });
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.text_edit_singleline(&mut state.search);
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        let models = state.filtered_models();
        if models.is_empty() {
            ui.label("No models match the current filter.");
        }
        for model in models {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.strong(model.name);
                    ui.label(
                        RichText::new(model.category.label())
                            .small()
                            .color(Color32::GRAY),
                    );
                });
                ui.label(model.description);
            });
        }

        ui.add_space(8.0);
        ui.heading("Data Connectors");
        for connector in CONNECTORS {
            ui.group(|ui| {
                ui.strong(connector.name);
                ui.label(connector.description);
            });
        }
    });

    Vec::new()
}

impl Pane for ModelCatalogState {
    fn kind(&self) -> PaneKind {
        PaneKind::ModelCatalog
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
