//! Active puzzle ownership.

use tracing::info;
use crate::ast::AstTemplate;
use crate::ternary::Trit;
use crate::catalog::{self, CatalogError};
use crate::play::input::{self, InputError, InputOutcome, SlotEvent};

/// Owns the puzzle currently in play.
///
/// Loading replaces the previous template wholesale and bumps the
/// generation, so anything bound to the old tree can tell it is stale.
#[derive(Debug, Default)]
pub struct PuzzleLoader {
    active: Option<AstTemplate>,
    name: Option<String>,
    generation: u64,
}

/// Short description of the loaded puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInfo {
    pub name: Option<String>,
    pub generation: u64,
    pub answer: Trit,
    pub value_slots: usize,
    pub operator_slots: usize,
    pub open_value_slots: usize,
    pub open_operator_slots: usize,
}

impl PuzzleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a template, replacing whatever was loaded.
    pub fn load(&mut self, template: AstTemplate) -> u64 {
        self.install(template, None)
    }

    /// Build and publish a catalog puzzle.
    pub fn load_named(&mut self, name: &str) -> Result<u64, CatalogError> {
        let template = catalog::find(name)?.template()?;
        Ok(self.install(template, Some(name.to_string())))
    }

    /// Rebuild the current catalog puzzle from scratch.
    ///
    /// Returns `Ok(None)` when nothing named is loaded.
    pub fn reload(&mut self) -> Result<Option<u64>, CatalogError> {
        match self.name.clone() {
            Some(name) => self.load_named(&name).map(Some),
            None => Ok(None),
        }
    }

    /// Drop the active puzzle.
    pub fn teardown(&mut self) {
        if self.active.take().is_some() {
            info!(generation = self.generation, "puzzle torn down");
        }
        self.name = None;
    }

    pub fn template(&self) -> Option<&AstTemplate> {
        self.active.as_ref()
    }

    pub fn template_mut(&mut self) -> Option<&mut AstTemplate> {
        self.active.as_mut()
    }

    /// Route a player action to the active template.
    pub fn apply(&mut self, event: SlotEvent) -> Result<InputOutcome, InputError> {
        let template = self.active.as_mut().ok_or(InputError::NoPuzzle)?;
        input::apply_event(template, event)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn info(&self) -> Option<PuzzleInfo> {
        let template = self.active.as_ref()?;
        Some(PuzzleInfo {
            name: self.name.clone(),
            generation: self.generation,
            answer: template.answer(),
            value_slots: template.value_slots().len(),
            operator_slots: template.operator_slots().len(),
            open_value_slots: template.open_value_slots().count(),
            open_operator_slots: template.open_operator_slots().count(),
        })
    }

    fn install(&mut self, template: AstTemplate, name: Option<String>) -> u64 {
        self.generation += 1;
        info!(
            generation = self.generation,
            puzzle = name.as_deref().unwrap_or("<custom>"),
            values = template.value_slots().len(),
            operators = template.operator_slots().len(),
            "puzzle loaded"
        );
        self.active = Some(template);
        self.name = name;
        self.generation
    }
}
