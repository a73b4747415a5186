// Scroll state for the logs panel
//
// Follows the tail while new log lines arrive. Scrolling up pins the view;
// reaching the bottom again resumes following.

#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Index of the first visible line
    offset: usize,
    total: usize,
    viewport: usize,
    pub auto_follow: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Sync with the current content length and visible height (every frame)
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = if self.auto_follow {
            self.max_offset()
        } else {
            self.offset.min(self.max_offset())
        };
    }

    pub fn scroll_up(&mut self) {
        self.move_up(1);
    }

    pub fn scroll_down(&mut self) {
        self.move_down(1);
    }

    pub fn page_up(&mut self) {
        self.move_up(self.viewport.max(1));
    }

    pub fn page_down(&mut self) {
        self.move_down(self.viewport.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = self.max_offset() == 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    fn move_up(&mut self, lines: usize) {
        if self.offset > 0 {
            self.offset = self.offset.saturating_sub(lines);
            self.auto_follow = false;
        }
    }

    fn move_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
        if self.offset == self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// (start, end) indices of the visible lines
    pub fn visible_range(&self) -> (usize, usize) {
        (self.offset, (self.offset + self.viewport).min(self.total))
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
