use crate::shared::gesture::pointer::{PointerPhase, PointerSource};

/// Horizontal travel a drag must exceed before it turns the page.
pub const DRAG_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { anchor: f64 },
}

/// What a drag that crossed the threshold did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Advanced,
    Retreated,
    /// Crossed the threshold against a boundary; the index stayed put.
    Clamped,
}

/// Image pager driven by drags and explicit steps.
///
/// The image list is fixed for the lifetime of the carousel and never empty,
/// so there is always exactly one current image. A drag turns at most one
/// page: once it crosses [`DRAG_THRESHOLD`] the carousel goes back to idle and
/// ignores further movement until a new drag starts.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureCarousel {
    images: Vec<String>,
    index: usize,
    state: DragState,
}

impl GestureCarousel {
    /// `None` for an empty image list. `start_index` is clamped into range.
    pub fn new(images: Vec<String>, start_index: usize) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let index = start_index.min(images.len() - 1);
        Some(Self {
            images,
            index,
            state: DragState::Idle,
        })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn start_drag(&mut self, x: f64) {
        self.state = DragState::Dragging { anchor: x };
    }

    pub fn move_drag(&mut self, x: f64) -> Option<Swipe> {
        let DragState::Dragging { anchor } = self.state else {
            return None;
        };
        let delta = anchor - x;
        if !delta.is_finite() || delta.abs() <= DRAG_THRESHOLD {
            return None;
        }

        self.state = DragState::Idle;
        let moved = if delta > 0.0 {
            self.step_next().then_some(Swipe::Advanced)
        } else {
            self.step_prev().then_some(Swipe::Retreated)
        };
        Some(moved.unwrap_or(Swipe::Clamped))
    }

    pub fn end_drag(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn step_prev(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn step_next(&mut self) -> bool {
        if self.index + 1 >= self.images.len() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Feeds one event from any input source through the drag transitions.
    /// Start and move events without a coordinate are ignored.
    pub fn handle<TSource: PointerSource>(
        &mut self,
        phase: PointerPhase,
        event: &TSource,
    ) -> Option<Swipe> {
        match phase {
            PointerPhase::Start => {
                if let Some(x) = event.coordinate() {
                    self.start_drag(x);
                }
                None
            }
            PointerPhase::Move => event.coordinate().and_then(|x| self.move_drag(x)),
            PointerPhase::End | PointerPhase::Leave => {
                self.end_drag();
                None
            }
        }
    }
}
