//! The picker facade front ends talk to

use crate::color::Color;
use crate::compositor::{BakeMode, FrameCompositor};
use crate::error::EngineError;
use crate::event::InputEvent;
use crate::layout::{Layout, LayoutSpec};
use crate::reconciler::{EventOutcome, InputReconciler};
use crate::selection::SelectionState;
use crate::surface::Surface;
use tracing::info;

/// Owns the reconciler and the compositor for one session
pub struct Picker {
    input: InputReconciler,
    compositor: FrameCompositor,
}

impl Picker {
    /// Build a picker, failing on degenerate layout geometry
    pub fn new(spec: &LayoutSpec, initial: Color, bake: BakeMode) -> Result<Self, EngineError> {
        let layout = spec.build()?;
        info!(
            width = layout.width(),
            height = layout.height(),
            radius = layout.disc().radius(),
            %initial,
            ?bake,
            "Picker created"
        );
        Ok(Self::with_layout(layout, initial, bake))
    }

    pub fn with_layout(layout: Layout, initial: Color, bake: BakeMode) -> Self {
        Self {
            input: InputReconciler::new(layout, initial),
            compositor: FrameCompositor::new(bake),
        }
    }

    /// The authoritative color
    pub fn selection(&self) -> Color {
        self.input.selection().color()
    }

    pub fn selection_state(&self) -> &SelectionState {
        self.input.selection()
    }

    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        self.input.handle_event(event)
    }

    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.compositor.render_frame(&self.input, surface);
    }

    pub fn input(&self) -> &InputReconciler {
        &self.input
    }

    pub fn compositor(&self) -> &FrameCompositor {
        &self.compositor
    }

    pub fn layout(&self) -> &Layout {
        self.input.layout()
    }
}
