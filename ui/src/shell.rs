use std::{
    collections::VecDeque,
    ops::{Deref, DerefMut},
    path::PathBuf,
};

use anyhow::{anyhow, Context};
use navni::Rgba;

use crate::{
    prelude::*, InputAction, ListHandler, ListState, UiItem, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

/// Display and input device the shell runs on.
pub trait Backend {
    /// Show a finished frame.
    fn present(&mut self, frame: &Buffer) -> anyhow::Result<()>;

    /// Wait for the next input command.
    ///
    /// Returns `None` if no command arrived within the backend's polling
    /// interval.
    fn poll(&mut self) -> anyhow::Result<Option<InputAction>>;
}

/// Owner of the screen canvas, the loaded art and the input focus.
pub struct Shell<B> {
    backend: B,
    canvas: Buffer,
    art: Option<Buffer>,
    list: Option<ListState>,
    /// Directory for art files that aren't built in.
    asset_dir: PathBuf,
}

impl<B: Backend> Shell<B> {
    pub fn new(backend: B) -> Self {
        Shell {
            backend,
            canvas: Buffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            art: None,
            list: None,
            asset_dir: PathBuf::from("."),
        }
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn canvas(&self) -> &Buffer {
        &self.canvas
    }

    /// Enter a scene that releases its background art and list focus when
    /// it goes out of scope.
    pub fn scene(&mut self, art: &str) -> anyhow::Result<Scene<'_, B>> {
        self.load_background_art(art)?;
        Ok(Scene(self))
    }

    /// Load a background image, either from the builtin art or from the
    /// asset directory.
    pub fn load_background_art(&mut self, name: &str) -> anyhow::Result<()> {
        let art = if let Some(data) = gfx::builtin_art(name) {
            gfx::Buffer::<Rgba>::from_bytes(data)
                .with_context(|| format!("invalid builtin art {name}"))?
        } else {
            let path = self.asset_dir.join(name);
            let data = std::fs::read(&path).with_context(|| {
                format!("failed to read art {}", path.display())
            })?;
            gfx::Buffer::<Rgba>::from_bytes(&data)
                .with_context(|| format!("invalid art {}", path.display()))?
        };

        log::debug!(
            "loaded background art {name} ({}x{})",
            art.width(),
            art.height()
        );
        self.art = Some(art.to_cells());
        Ok(())
    }

    pub fn unload_background_art(&mut self) {
        if self.art.take().is_some() {
            log::debug!("unloaded background art");
        }
    }

    pub fn has_background_art(&self) -> bool {
        self.art.is_some()
    }

    /// Give input focus to a list of `len` items.
    pub fn init_list(&mut self, len: usize, wraps: bool, default_focus: usize) {
        log::debug!("list init, {len} items, focus {default_focus}");
        self.list = Some(ListState::new(len, wraps, default_focus));
    }

    pub fn release_list(&mut self) {
        self.list = None;
    }

    pub fn list(&self) -> Option<&ListState> {
        self.list.as_ref()
    }

    pub fn clear_screen(&mut self) {
        self.canvas.clear();
    }

    /// Draw widgets on the canvas in sequence order.
    pub fn render_items(&mut self, items: &[UiItem]) {
        let mut f = Frame {
            canvas: &mut self.canvas,
            art: self.art.as_ref(),
            list: self.list.as_ref(),
        };

        for item in items {
            item.render(&mut f);
        }
    }

    /// Run one event pump cycle.
    ///
    /// Presents the current canvas, polls for one input command and
    /// dispatches it to the focused list in `items`. Input is ignored if no
    /// list has focus.
    pub fn poll_and_render(
        &mut self,
        items: &[UiItem],
        handler: &mut dyn ListHandler,
    ) -> anyhow::Result<()> {
        self.backend.present(&self.canvas)?;

        let Some(action) = self.backend.poll()? else {
            return Ok(());
        };

        if let (Some(list), Some(ui_list)) =
            (self.list.as_mut(), items.iter().find_map(UiItem::as_list))
        {
            list.handle(action, &ui_list.items, handler);
        }

        Ok(())
    }
}

/// Scoped use of the shell by one screen.
///
/// Background art and list focus are released on drop, whichever way the
/// screen exits.
#[must_use]
pub struct Scene<'a, B: Backend>(&'a mut Shell<B>);

impl<B: Backend> Deref for Scene<'_, B> {
    type Target = Shell<B>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<B: Backend> DerefMut for Scene<'_, B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl<B: Backend> Drop for Scene<'_, B> {
    fn drop(&mut self) {
        self.0.release_list();
        self.0.unload_background_art();
    }
}

/// Backend that reads input from a script and records presented frames as
/// text.
#[derive(Default)]
pub struct Headless {
    script: VecDeque<InputAction>,
    frames: Vec<String>,
}

impl Headless {
    pub fn new(script: impl IntoIterator<Item = InputAction>) -> Self {
        Headless {
            script: script.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    /// Queue more input at the end of the script.
    pub fn push(&mut self, action: InputAction) {
        self.script.push_back(action);
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Backend for Headless {
    fn present(&mut self, frame: &Buffer) -> anyhow::Result<()> {
        self.frames.push(frame.to_text());
        Ok(())
    }

    fn poll(&mut self) -> anyhow::Result<Option<InputAction>> {
        self.script
            .pop_front()
            .map(Some)
            .ok_or_else(|| anyhow!("input script ran out"))
    }
}
