//! WebAssembly bindings for the puzzle kernel.
//!
//! This module provides JavaScript-friendly wrappers around the loader,
//! input events and checker.

use wasm_bindgen::prelude::*;
use crate::ast::render_with_slots;
use crate::catalog;
use crate::config::CheckerConfig;
use crate::play::{current_result, InputOutcome, PuzzleLoader, SlotEvent, SolutionChecker, Verdict};
use crate::ternary::Trit;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly puzzle session.
#[wasm_bindgen]
pub struct WasmPuzzle {
    loader: PuzzleLoader,
    checker: SolutionChecker,
}

#[wasm_bindgen]
impl WasmPuzzle {
    /// Load a catalog puzzle by name.
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<WasmPuzzle, JsError> {
        let mut loader = PuzzleLoader::new();
        loader.load_named(name)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(Self {
            loader,
            checker: SolutionChecker::new(CheckerConfig::default()),
        })
    }

    /// Expression with slot positions, e.g. `1 OR v1:? = 2`.
    #[wasm_bindgen]
    pub fn render(&self) -> String {
        self.loader.template().map(render_with_slots).unwrap_or_default()
    }

    /// Cycle a value slot. Returns false when the slot is locked.
    #[wasm_bindgen]
    pub fn cycle_value(&mut self, slot: usize) -> Result<bool, JsError> {
        self.send(SlotEvent::CycleValue { slot })
    }

    /// Set a value slot to 0, 1 or 2. Returns false when the slot is locked.
    #[wasm_bindgen]
    pub fn set_value(&mut self, slot: usize, value: u8) -> Result<bool, JsError> {
        let value = Trit::from_u8(value)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        self.send(SlotEvent::SetValue { slot, value })
    }

    /// Cycle an operator slot. Returns false when the slot is locked.
    #[wasm_bindgen]
    pub fn cycle_operator(&mut self, slot: usize) -> Result<bool, JsError> {
        self.send(SlotEvent::CycleOperator { slot })
    }

    /// Submit the attempt: "correct", "incorrect", "incorrect-nth" or "incomplete".
    #[wasm_bindgen]
    pub fn check(&mut self) -> Result<String, JsError> {
        let template = self.loader.template()
            .ok_or_else(|| JsError::new("no puzzle loaded"))?;
        let verdict = self.checker.submit(template)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(match verdict {
            Verdict::Correct => "correct",
            Verdict::Incorrect { nth: true, .. } => "incorrect-nth",
            Verdict::Incorrect { .. } => "incorrect",
            Verdict::Incomplete(_) => "incomplete",
        }
        .to_string())
    }

    /// Live value of the left side, or undefined while incomplete.
    #[wasm_bindgen]
    pub fn result(&self) -> Option<u8> {
        self.loader.template().and_then(current_result).map(Trit::to_u8)
    }

    /// Wrong answers so far.
    #[wasm_bindgen]
    pub fn errors(&self) -> u32 {
        self.checker.errors()
    }

    /// Value slot contents: 0/1/2, or -1 for an empty slot.
    #[wasm_bindgen]
    pub fn value_slots(&self) -> js_sys::Array {
        self.loader
            .template()
            .map(|t| {
                t.value_slots()
                    .iter()
                    .map(|v| JsValue::from(v.value().map_or(-1, |t| i32::from(t.to_u8()))))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Which value slots are locked.
    #[wasm_bindgen]
    pub fn locked_value_slots(&self) -> js_sys::Array {
        self.loader
            .template()
            .map(|t| t.value_slots().iter().map(|v| JsValue::from(v.is_locked())).collect())
            .unwrap_or_default()
    }

    /// Start the puzzle over.
    #[wasm_bindgen]
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.loader.reload()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        self.checker.reset();
        Ok(())
    }
}

impl WasmPuzzle {
    fn send(&mut self, event: SlotEvent) -> Result<bool, JsError> {
        let outcome = self.loader.apply(event)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(matches!(outcome, InputOutcome::Applied(_)))
    }
}

/// Names of all catalog puzzles.
#[wasm_bindgen]
pub fn wasm_puzzle_names() -> js_sys::Array {
    catalog::all().iter().map(|p| JsValue::from_str(p.name)).collect()
}
