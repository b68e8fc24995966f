//! Two-marker band selection.
//!
//! The selection is a plain value. Every pointer interaction is expressed as a
//! [`SelectionEvent`] and [`Selection::apply`] maps `(state, event)` to the next
//! state without touching anything else, so rendering can react to changes
//! afterwards instead of being interleaved with them.
//!
//! Markers are created by clicks and only ever adjusted by drags. Every
//! coordinate is clamped on the way in, so the selection can't be driven into
//! an invalid state and none of its operations fail.

use std::fmt;

use tracing::debug;

use crate::consts::MIN_MARKER_GAP;

/// Which of the two markers an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Start,
    End,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    StartSet,
    BothSet,
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No markers"),
            Self::StartSet => write!(f, "Start marker set"),
            Self::BothSet => write!(f, "Both markers set"),
        }
    }
}

/// Input to the selection state machine. Coordinates are image-space rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectionEvent {
    Click(f64),
    BeginDrag(Marker),
    DragTo(f64),
    EndDrag,
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    image_height: f64,
    start_y: Option<f64>,
    end_y: Option<f64>,
    dragging: Option<Marker>,
}

impl Selection {
    pub fn new(image_height: u32) -> Self {
        Self {
            image_height: image_height as f64,
            start_y: None,
            end_y: None,
            dragging: None,
        }
    }

    pub fn state(&self) -> SelectionState {
        match (self.start_y, self.end_y) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::StartSet,
            (Some(_), Some(_)) => SelectionState::BothSet,
        }
    }

    pub fn start_y(&self) -> Option<f64> {
        self.start_y
    }

    pub fn end_y(&self) -> Option<f64> {
        self.end_y
    }

    pub fn dragging(&self) -> Option<Marker> {
        self.dragging
    }

    pub fn image_height(&self) -> f64 {
        self.image_height
    }

    /// The ordered band bounds, once both markers exist.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.start_y.zip(self.end_y)
    }

    /// Pure transition: the selection that results from `event`.
    pub fn apply(self, event: SelectionEvent) -> Self {
        let next = match event {
            SelectionEvent::Click(y) if y.is_finite() => self.clicked(y),
            SelectionEvent::DragTo(y) if y.is_finite() => self.dragged(y),
            SelectionEvent::Click(_) | SelectionEvent::DragTo(_) => self,
            SelectionEvent::BeginDrag(marker) => self.drag_begun(marker),
            SelectionEvent::EndDrag => Self {
                dragging: None,
                ..self
            },
            SelectionEvent::Reset => Self {
                start_y: None,
                end_y: None,
                dragging: None,
                ..self
            },
        };
        debug!(?event, start_y = ?next.start_y, end_y = ?next.end_y, "Selection transition");
        next
    }

    /// Apply `event` in place, reporting whether anything visible changed.
    pub fn handle(&mut self, event: SelectionEvent) -> bool {
        let before = *self;
        *self = before.apply(event);
        *self != before
    }

    pub fn on_primary_click(&mut self, image_y: f64) -> bool {
        self.handle(SelectionEvent::Click(image_y))
    }

    pub fn begin_drag_start(&mut self) -> bool {
        self.handle(SelectionEvent::BeginDrag(Marker::Start))
    }

    pub fn begin_drag_end(&mut self) -> bool {
        self.handle(SelectionEvent::BeginDrag(Marker::End))
    }

    /// Move the start marker. Has no effect unless a start drag is active.
    pub fn drag_start_to(&mut self, image_y: f64) -> bool {
        if self.dragging != Some(Marker::Start) {
            return false;
        }
        self.handle(SelectionEvent::DragTo(image_y))
    }

    /// Move the end marker. Has no effect unless an end drag is active.
    pub fn drag_end_to(&mut self, image_y: f64) -> bool {
        if self.dragging != Some(Marker::End) {
            return false;
        }
        self.handle(SelectionEvent::DragTo(image_y))
    }

    pub fn end_drag(&mut self) -> bool {
        self.handle(SelectionEvent::EndDrag)
    }

    pub fn reset(&mut self) {
        self.handle(SelectionEvent::Reset);
    }

    /// Pointer press at `image_y`.
    ///
    /// Once both markers exist a press can only grab one of them (the nearest
    /// within `tolerance`); before that every press is a marker-creating click.
    pub fn press(&mut self, image_y: f64, tolerance: f64) -> bool {
        match self.state() {
            SelectionState::BothSet => match self.marker_at(image_y, tolerance) {
                Some(marker) => self.handle(SelectionEvent::BeginDrag(marker)),
                None => false,
            },
            _ => self.on_primary_click(image_y),
        }
    }

    /// The marker closest to `image_y`, if it lies within `tolerance`.
    pub fn marker_at(&self, image_y: f64, tolerance: f64) -> Option<Marker> {
        let distance = |m: Option<f64>| m.map(|v| (v - image_y).abs()).filter(|d| *d <= tolerance);
        match (distance(self.start_y), distance(self.end_y)) {
            (Some(s), Some(e)) if e < s => Some(Marker::End),
            (Some(_), _) => Some(Marker::Start),
            (None, Some(_)) => Some(Marker::End),
            (None, None) => None,
        }
    }

    fn clamp(&self, y: f64) -> f64 {
        y.clamp(0.0, self.image_height)
    }

    fn clicked(self, y: f64) -> Self {
        let y = self.clamp(y);
        match (self.start_y, self.end_y) {
            (None, _) => Self {
                start_y: Some(y),
                ..self
            },
            (Some(start), None) => {
                let (start, end) = self.separated(start.min(y), start.max(y));
                Self {
                    start_y: Some(start),
                    end_y: Some(end),
                    ..self
                }
            }
            (Some(_), Some(_)) => self,
        }
    }

    /// Push two ordered rows apart to the minimum gap, moving the end marker
    /// down unless that would leave the image. Near the bottom edge the band
    /// is anchored to the last row instead.
    fn separated(&self, start: f64, end: f64) -> (f64, f64) {
        if end - start >= MIN_MARKER_GAP {
            (start, end)
        } else if start + MIN_MARKER_GAP <= self.image_height {
            (start, start + MIN_MARKER_GAP)
        } else {
            (
                (self.image_height - MIN_MARKER_GAP).max(0.0),
                self.image_height,
            )
        }
    }

    fn drag_begun(self, marker: Marker) -> Self {
        let exists = match marker {
            Marker::Start => self.start_y.is_some(),
            Marker::End => self.end_y.is_some(),
        };
        if !exists {
            return self;
        }
        Self {
            dragging: Some(marker),
            ..self
        }
    }

    fn dragged(self, y: f64) -> Self {
        let y = self.clamp(y);
        match self.dragging {
            Some(Marker::Start) => {
                let start = match self.end_y {
                    Some(end) if y > end - MIN_MARKER_GAP => self.clamp(end - MIN_MARKER_GAP),
                    _ => y,
                };
                Self {
                    start_y: Some(start),
                    ..self
                }
            }
            Some(Marker::End) => {
                let end = match self.start_y {
                    Some(start) if y < start + MIN_MARKER_GAP => self.clamp(start + MIN_MARKER_GAP),
                    _ => y,
                };
                Self {
                    end_y: Some(end),
                    ..self
                }
            }
            None => self,
        }
    }
}
