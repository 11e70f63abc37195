use super::ViewState;
use crate::astro_math::Radians;
use crate::projection::Projection;

pub const ZOOM_IN_FACTOR: f64 = 1.1;
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// The anchor is the sky position grabbed on pointer down. It stays fixed for the
    /// whole gesture.
    Dragging {
        anchor_ra: Radians,
        anchor_de: Radians,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Away from the user, zooms in
    Up,
    /// Towards the user, zooms out
    Down,
}

impl ScrollDirection {
    pub fn from_delta(delta_y: f64) -> Self {
        if delta_y > 0. {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        }
    }

    pub fn zoom_factor(self) -> f64 {
        match self {
            ScrollDirection::Up => ZOOM_IN_FACTOR,
            ScrollDirection::Down => ZOOM_OUT_FACTOR,
        }
    }
}

/// Turns pointer and scroll gestures into new view states.
///
/// Pointer positions are projection plane coordinates (origin at the canvas center,
/// y up). The controller never owns the view; it returns the next one.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Sky position under the pointer, offset by the current center
    fn grab(position: (f64, f64), view: &ViewState, projection: &dyn Projection) -> (Radians, Radians) {
        let (ra, de) = projection.to_ra_de(
            position.0,
            position.1,
            view.center_ra(),
            view.center_de(),
            view.zoom(),
        );
        (view.center_ra() + ra, view.center_de() + de)
    }

    pub fn pointer_down(&mut self, position: (f64, f64), view: &ViewState, projection: &dyn Projection) {
        let (anchor_ra, anchor_de) = Self::grab(position, view, projection);
        tracing::debug!("Drag anchored at ra={:.4} de={:.4}", anchor_ra, anchor_de);
        self.state = DragState::Dragging {
            anchor_ra,
            anchor_de,
        };
    }

    /// Returns the moved view while dragging, `None` when idle
    pub fn pointer_move(
        &mut self,
        position: (f64, f64),
        view: &ViewState,
        projection: &dyn Projection,
    ) -> Option<ViewState> {
        let DragState::Dragging {
            anchor_ra,
            anchor_de,
        } = self.state
        else {
            return None;
        };

        let (ra, de) = Self::grab(position, view, projection);
        Some(view.with_center(
            view.center_ra() + (anchor_ra - ra),
            view.center_de() + (anchor_de - de),
        ))
    }

    pub fn pointer_up(&mut self) {
        if self.state != DragState::Idle {
            tracing::debug!("Drag released");
        }
        self.state = DragState::Idle;
    }

    pub fn scroll(&self, direction: ScrollDirection, view: &ViewState) -> ViewState {
        view.with_zoom(view.zoom() * direction.zoom_factor())
    }
}
