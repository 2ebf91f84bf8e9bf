//! Screen: the terminal render sink.
//!
//! Bundles the view, a reusable framebuffer and the renderer so the runner
//! can hand it a snapshot per tick.

use anyhow::Result;
use crossterm::terminal;

use crate::core::{GameSnapshot, RenderSink};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct Screen {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    viewport: Viewport,
}

impl Screen {
    pub fn new(view: GameView) -> Self {
        let (w, h) = terminal::size().unwrap_or((80, 30));
        Self {
            view,
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(w, h),
            viewport: Viewport::new(w, h),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Track a terminal resize; the next frame is a full redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.renderer.invalidate();
    }
}

impl RenderSink for Screen {
    type Error = anyhow::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.view.render_into(snapshot, self.viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}
