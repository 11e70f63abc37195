use super::{InteractionController, ScrollDirection, ViewState};
use crate::catalog::Catalog;
use crate::projection::Projection;
use crate::render::{Canvas, FrameStats, RenderError, SkyRenderer, Viewport};
use crate::util::Observable;

/// An interactive star map drawn onto a canvas.
///
/// The view state has a single writer, the interaction controller driven through the
/// `pointer_*`/`scrolled` methods. Each change of the view and each resize redraws the
/// canvas. Pointer positions are canvas pixels.
pub struct StarMap<C: Canvas> {
    catalog: Catalog,
    projection: Box<dyn Projection>,
    renderer: SkyRenderer,
    view: Observable<ViewState>,
    controller: InteractionController,
    canvas: C,
    frames: usize,
    last_frame: FrameStats,
}

impl<C: Canvas> StarMap<C> {
    /// Creates the map and draws the first frame
    pub fn new(
        catalog: Catalog,
        projection: Box<dyn Projection>,
        renderer: SkyRenderer,
        view: ViewState,
        canvas: C,
    ) -> Self {
        let mut star_map = Self {
            catalog,
            projection,
            renderer,
            view: Observable::new(view),
            controller: InteractionController::new(),
            canvas,
            frames: 0,
            last_frame: FrameStats::default(),
        };
        star_map.redraw();
        star_map
    }

    pub fn view(&self) -> &ViewState {
        self.view.get()
    }

    /// Registers a listener for view changes, called before the redraw
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewState) + 'static,
    {
        self.view.subscribe(listener);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Number of frames drawn so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    pub fn redraw(&mut self) -> FrameStats {
        self.last_frame = self.renderer.draw(
            &mut self.canvas,
            &self.catalog,
            self.projection.as_ref(),
            self.view.get(),
        );
        self.frames += 1;
        self.last_frame
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), RenderError> {
        self.canvas.resize(width, height)?;
        self.redraw();
        Ok(())
    }

    fn to_plane(&self, position: (f64, f64)) -> (f64, f64) {
        Viewport::of(&self.canvas).to_plane(position)
    }

    fn apply(&mut self, view: ViewState) {
        if self.view.set(view) {
            self.redraw();
        }
    }

    pub fn pointer_pressed(&mut self, x: f64, y: f64) {
        let position = self.to_plane((x, y));
        self.controller
            .pointer_down(position, self.view.get(), self.projection.as_ref());
    }

    pub fn pointer_dragged(&mut self, x: f64, y: f64) {
        let position = self.to_plane((x, y));
        if let Some(view) =
            self.controller
                .pointer_move(position, self.view.get(), self.projection.as_ref())
        {
            self.apply(view);
        }
    }

    pub fn pointer_released(&mut self) {
        self.controller.pointer_up();
    }

    /// `delta_y > 0` scrolls up and zooms in
    pub fn scrolled(&mut self, delta_y: f64) {
        let view = self
            .controller
            .scroll(ScrollDirection::from_delta(delta_y), self.view.get());
        self.apply(view);
    }
}
