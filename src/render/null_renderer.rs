use crate::error::ReportResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless report builds.
///
/// It still validates frame content so invalid geometry is caught without
/// producing markup.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    type Output = ();

    fn render(&mut self, frame: &RenderFrame) -> ReportResult<()> {
        frame.validate()?;
        self.last_path_count = frame.paths().count();
        self.last_rect_count = frame.rects().count();
        self.last_circle_count = frame.circles().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }
}
