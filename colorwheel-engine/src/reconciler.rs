//! Input reconciliation
//!
//! One state machine turns pointer and key events from three independent
//! controls into writes on the single [`SelectionState`]. Controls never
//! keep their own copy of the color; the fields' in-progress text is the
//! only per-control state and it reaches the selection only on commit.

use crate::color::{pixel_to_polar_clamped, Channel, Color};
use crate::event::{InputEvent, Key, PointerButton};
use crate::field::NumericField;
use crate::geometry::Point;
use crate::layout::Layout;
use crate::selection::SelectionState;
use crate::track::{value_to_alpha, TrackMode, ValueTrack};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    DraggingDisc,
    DraggingTrack,
    EditingField(Channel),
}

/// The control that currently owns input, derived from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFocus {
    None,
    Disc,
    Track,
    Field(Channel),
}

/// What an event did, so the front end can skip idle frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    pub redraw: bool,
    pub color_changed: bool,
}

impl EventOutcome {
    const NONE: Self = Self {
        redraw: false,
        color_changed: false,
    };

    const REDRAW: Self = Self {
        redraw: true,
        color_changed: false,
    };

    fn merge(self, other: Self) -> Self {
        Self {
            redraw: self.redraw || other.redraw,
            color_changed: self.color_changed || other.color_changed,
        }
    }
}

pub struct InputReconciler {
    layout: Layout,
    selection: SelectionState,
    fields: [NumericField; 3],
    state: InteractionState,
    hover: Option<Point>,
}

impl InputReconciler {
    pub fn new(layout: Layout, initial: Color) -> Self {
        let fields = Channel::ALL.map(|c| NumericField::new(c, initial.channel(c)));
        Self {
            layout,
            selection: SelectionState::new(initial),
            fields,
            state: InteractionState::Idle,
            hover: None,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn focus(&self) -> ControlFocus {
        match self.state {
            InteractionState::Idle => ControlFocus::None,
            InteractionState::DraggingDisc => ControlFocus::Disc,
            InteractionState::DraggingTrack => ControlFocus::Track,
            InteractionState::EditingField(c) => ControlFocus::Field(c),
        }
    }

    pub fn field(&self, channel: Channel) -> &NumericField {
        &self.fields[channel.index()]
    }

    /// Last pointer position seen, if any
    pub fn hover(&self) -> Option<Point> {
        self.hover
    }

    /// Current position of the track in [0, 1]
    pub fn track_value(&self) -> Option<f64> {
        self.layout.track().map(|track| match track.mode() {
            TrackMode::Value => self.selection.hsv().value,
            TrackMode::Alpha => self.selection.alpha() as f64 / 255.0,
        })
    }

    pub fn handle_event(&mut self, event: InputEvent) -> EventOutcome {
        match event {
            InputEvent::PointerDown { position, button } => {
                self.hover = Some(position);
                if button != PointerButton::Primary {
                    trace!(?button, "Ignoring non-primary press");
                    return EventOutcome::NONE;
                }
                self.pointer_down(position)
            }
            InputEvent::PointerMove { position } => {
                self.hover = Some(position);
                match self.state {
                    InteractionState::DraggingDisc => self.apply_disc(position),
                    InteractionState::DraggingTrack => self.apply_track(position),
                    _ => EventOutcome::NONE,
                }
            }
            InputEvent::PointerUp { position, button } => {
                self.hover = Some(position);
                let dragging = matches!(
                    self.state,
                    InteractionState::DraggingDisc | InteractionState::DraggingTrack
                );
                if dragging && button == PointerButton::Primary {
                    self.set_state(InteractionState::Idle);
                }
                EventOutcome::NONE
            }
            InputEvent::KeyDown { key } => match self.state {
                InteractionState::EditingField(channel) => self.field_key(channel, key),
                InteractionState::Idle => self.idle_key(key),
                _ => EventOutcome::NONE,
            },
        }
    }

    fn pointer_down(&mut self, p: Point) -> EventOutcome {
        // A press without a release in between ends the old drag
        if matches!(
            self.state,
            InteractionState::DraggingDisc | InteractionState::DraggingTrack
        ) {
            self.set_state(InteractionState::Idle);
        }

        if let Some(channel) = self.layout.field_at(p) {
            if self.state == InteractionState::EditingField(channel) {
                return EventOutcome::NONE;
            }
            let outcome = self.leave_field();
            self.set_state(InteractionState::EditingField(channel));
            return outcome.merge(EventOutcome::REDRAW);
        }

        if self.layout.track().is_some_and(|t| t.hit(p)) {
            let outcome = self.leave_field();
            self.set_state(InteractionState::DraggingTrack);
            return outcome.merge(self.apply_track(p));
        }

        if self.layout.disc().bounds().contains(p) {
            let outcome = self.leave_field();
            self.set_state(InteractionState::DraggingDisc);
            return outcome.merge(self.apply_disc(p));
        }

        self.leave_field()
    }

    fn field_key(&mut self, channel: Channel, key: Key) -> EventOutcome {
        match key {
            Key::Char(c) => match self.fields[channel.index()].push_digit(c) {
                Ok(()) => EventOutcome::REDRAW,
                Err(e) => {
                    trace!(%channel, error = %e, "Keystroke rejected");
                    EventOutcome::NONE
                }
            },
            Key::Backspace => {
                self.fields[channel.index()].backspace();
                EventOutcome::REDRAW
            }
            Key::Enter => {
                let outcome = self.commit(channel);
                self.set_state(InteractionState::Idle);
                outcome.merge(EventOutcome::REDRAW)
            }
            Key::Tab => {
                let outcome = self.commit(channel);
                let next = channel
                    .next()
                    .map_or(InteractionState::Idle, InteractionState::EditingField);
                self.set_state(next);
                outcome.merge(EventOutcome::REDRAW)
            }
            Key::Escape => {
                self.fields[channel.index()].revert();
                self.set_state(InteractionState::Idle);
                EventOutcome::REDRAW
            }
            Key::Left | Key::Right | Key::Up | Key::Down => EventOutcome::NONE,
        }
    }

    fn idle_key(&mut self, key: Key) -> EventOutcome {
        let steps = match key {
            Key::Up | Key::Left => 1,
            Key::Down | Key::Right => -1,
            Key::Tab => {
                self.set_state(InteractionState::EditingField(Channel::Red));
                return EventOutcome::REDRAW;
            }
            _ => return EventOutcome::NONE,
        };

        let hovering = match (self.layout.track(), self.hover) {
            (Some(track), Some(p)) => track.hit(p),
            _ => false,
        };
        match self.track_value() {
            Some(current) if hovering => self.set_track_value(ValueTrack::nudge(current, steps)),
            _ => EventOutcome::NONE,
        }
    }

    /// Commit whichever field is being edited, if any, and go idle
    fn leave_field(&mut self) -> EventOutcome {
        match self.state {
            InteractionState::EditingField(channel) => {
                let outcome = self.commit(channel);
                self.set_state(InteractionState::Idle);
                outcome.merge(EventOutcome::REDRAW)
            }
            _ => EventOutcome::NONE,
        }
    }

    fn commit(&mut self, channel: Channel) -> EventOutcome {
        self.fields[channel.index()].commit();
        let [r, g, b] = self.fields.each_ref().map(NumericField::committed);
        let color = Color::rgba(r, g, b, self.selection.alpha());

        if color == self.selection.color() {
            return EventOutcome::NONE;
        }

        debug!(%channel, %color, "Field committed");
        self.selection.set_from_rgb(color);
        self.sync_fields();
        EventOutcome {
            redraw: true,
            color_changed: true,
        }
    }

    fn apply_disc(&mut self, p: Point) -> EventOutcome {
        let disc = self.layout.disc();
        let polar = pixel_to_polar_clamped(p.x, p.y, disc.center(), disc.radius());
        let before = self.selection.color();
        self.selection.set_from_polar(polar);
        self.after_pick(before)
    }

    fn apply_track(&mut self, p: Point) -> EventOutcome {
        match self.layout.track() {
            Some(track) => {
                let value = track.value_at(p);
                self.set_track_value(value)
            }
            None => EventOutcome::NONE,
        }
    }

    fn set_track_value(&mut self, value: f64) -> EventOutcome {
        let Some(mode) = self.layout.track().map(ValueTrack::mode) else {
            return EventOutcome::NONE;
        };

        let before = self.selection.color();
        match mode {
            TrackMode::Value => self.selection.set_value(value),
            TrackMode::Alpha => self.selection.set_alpha(value_to_alpha(value)),
        }
        self.after_pick(before)
    }

    /// Picks always move a cursor or marker, so they always redraw
    fn after_pick(&mut self, before: Color) -> EventOutcome {
        let color_changed = self.selection.color() != before;
        if color_changed {
            self.sync_fields();
        }
        EventOutcome {
            redraw: true,
            color_changed,
        }
    }

    /// Re-derive the text of every field that is not being edited
    fn sync_fields(&mut self) {
        let color = self.selection.color();
        let editing = match self.state {
            InteractionState::EditingField(c) => Some(c),
            _ => None,
        };
        for field in self.fields.iter_mut() {
            if Some(field.channel()) != editing {
                field.sync(color.channel(field.channel()));
            }
        }
    }

    fn set_state(&mut self, next: InteractionState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "Interaction state change");
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutSpec;

    fn desktop(initial: Color) -> InputReconciler {
        InputReconciler::new(LayoutSpec::desktop().build().unwrap(), initial)
    }

    fn type_keys(r: &mut InputReconciler, keys: &str) {
        for c in keys.chars() {
            r.handle_event(InputEvent::key(Key::Char(c)));
        }
    }

    #[test]
    fn test_field_focus_and_enter() {
        let mut r = desktop(Color::new(10, 20, 30));
        r.handle_event(InputEvent::click(660, 95));
        assert_eq!(r.state(), InteractionState::EditingField(Channel::Red));

        type_keys(&mut r, "7");
        assert_eq!(r.field(Channel::Red).text(), "107");
        // Not committed yet
        assert_eq!(r.selection().color().r, 10);

        let outcome = r.handle_event(InputEvent::key(Key::Enter));
        assert!(outcome.color_changed);
        assert_eq!(r.state(), InteractionState::Idle);
        assert_eq!(r.selection().color(), Color::new(107, 20, 30));
    }

    #[test]
    fn test_click_elsewhere_commits_pending_text() {
        let mut r = desktop(Color::new(1, 2, 3));
        r.handle_event(InputEvent::click(660, 195));
        r.handle_event(InputEvent::key(Key::Backspace));
        assert_eq!(r.field(Channel::Green).text(), "");

        // Empty space: commits 0 and goes idle
        r.handle_event(InputEvent::click(790, 10));
        assert_eq!(r.state(), InteractionState::Idle);
        assert_eq!(r.selection().color(), Color::new(1, 0, 3));
        assert_eq!(r.field(Channel::Green).text(), "0");
    }

    #[test]
    fn test_switching_fields_commits_previous() {
        let mut r = desktop(Color::BLACK);
        r.handle_event(InputEvent::click(660, 95));
        type_keys(&mut r, "9");
        r.handle_event(InputEvent::click(660, 295));
        assert_eq!(r.state(), InteractionState::EditingField(Channel::Blue));
        assert_eq!(r.selection().color(), Color::new(9, 0, 0));
    }

    #[test]
    fn test_escape_reverts() {
        let mut r = desktop(Color::new(50, 60, 70));
        r.handle_event(InputEvent::click(660, 95));
        r.handle_event(InputEvent::key(Key::Backspace));
        type_keys(&mut r, "1");
        assert_eq!(r.field(Channel::Red).text(), "51");

        r.handle_event(InputEvent::key(Key::Escape));
        assert_eq!(r.state(), InteractionState::Idle);
        assert_eq!(r.field(Channel::Red).text(), "50");
        assert_eq!(r.selection().color(), Color::new(50, 60, 70));
    }

    #[test]
    fn test_tab_from_blue_goes_idle() {
        let mut r = desktop(Color::BLACK);
        r.handle_event(InputEvent::click(660, 295));
        type_keys(&mut r, "12");
        r.handle_event(InputEvent::key(Key::Tab));
        assert_eq!(r.state(), InteractionState::Idle);
        assert_eq!(r.focus(), ControlFocus::None);
        assert_eq!(r.selection().color(), Color::new(0, 0, 12));
    }

    #[test]
    fn test_disc_drag_updates_fields() {
        let mut r = desktop(Color::WHITE);
        // Right rim of the disc: hue 0, full saturation
        r.handle_event(InputEvent::click(530, 300));
        assert_eq!(r.state(), InteractionState::DraggingDisc);
        assert_eq!(r.selection().color(), Color::RED);
        assert_eq!(r.field(Channel::Green).text(), "0");

        // Dragging past the rim clamps to saturation 1; y grows downward
        r.handle_event(InputEvent::motion(280, 700));
        assert_eq!(r.selection().color(), Color::new(128, 255, 0));

        r.handle_event(InputEvent::release(280, 700));
        assert_eq!(r.state(), InteractionState::Idle);
        r.handle_event(InputEvent::motion(280, 300));
        assert_eq!(r.selection().color(), Color::new(128, 255, 0));
    }

    #[test]
    fn test_secondary_button_does_nothing() {
        let mut r = desktop(Color::WHITE);
        let outcome = r.handle_event(InputEvent::PointerDown {
            position: Point::new(530, 300),
            button: PointerButton::Secondary,
        });
        assert_eq!(outcome, EventOutcome::default());
        assert_eq!(r.state(), InteractionState::Idle);
        assert_eq!(r.selection().color(), Color::WHITE);
    }

    #[test]
    fn test_alpha_track_keeps_rgb() {
        let mut r = desktop(Color::new(10, 20, 30));
        r.handle_event(InputEvent::click(700, 400));
        assert_eq!(r.state(), InteractionState::DraggingTrack);
        assert_eq!(r.selection().color(), Color::rgba(10, 20, 30, 128));
        assert_eq!(r.field(Channel::Red).text(), "10");
    }

    #[test]
    fn test_arrow_nudge_needs_hover() {
        let mut r = desktop(Color::new(10, 20, 30));
        let outcome = r.handle_event(InputEvent::key(Key::Right));
        assert!(!outcome.redraw);

        r.handle_event(InputEvent::motion(700, 400));
        r.handle_event(InputEvent::key(Key::Right));
        assert_eq!(r.selection().alpha(), 254);
        r.handle_event(InputEvent::key(Key::Left));
        r.handle_event(InputEvent::key(Key::Left));
        assert_eq!(r.selection().alpha(), 255);
    }

    #[test]
    fn test_rejected_keystroke_needs_no_redraw() {
        let mut r = desktop(Color::new(25, 0, 0));
        r.handle_event(InputEvent::click(660, 95));
        let outcome = r.handle_event(InputEvent::key(Key::Char('9')));
        assert!(!outcome.redraw);
        assert_eq!(r.field(Channel::Red).text(), "25");
    }
}
