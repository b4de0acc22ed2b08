use kubepick_core::matches;

/// Cursor, filter and scroll window over a fixed list of labels.
///
/// All public positions are indices into the original `labels`; the filtered
/// view is internal.
#[derive(Debug, Clone)]
pub struct PickerState {
    labels: Vec<String>,
    filter: String,
    search: bool,
    filtered: Vec<usize>,
    cursor: Option<usize>,
    offset: usize,
    page_size: usize,
}

impl PickerState {
    pub fn new(labels: Vec<String>, initial: Option<usize>, search: bool, page_size: usize) -> Self {
        let filtered = (0..labels.len()).collect();
        let cursor = initial.filter(|&i| i < labels.len());
        let mut state =
            Self { labels, filter: String::new(), search, filtered, cursor, offset: 0, page_size: page_size.max(1) };
        state.scroll_to_cursor();
        state
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn search_enabled(&self) -> bool {
        self.search
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn match_count(&self) -> usize {
        self.filtered.len()
    }

    /// Index into the original labels under the cursor.
    pub fn selected(&self) -> Option<usize> {
        self.cursor.and_then(|c| self.filtered.get(c).copied())
    }

    /// Rows currently in the scroll window as `(label index, label, is_cursor)`.
    pub fn visible(&self) -> Vec<(usize, &str, bool)> {
        self.filtered
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.page_size)
            .map(|(pos, &i)| (i, self.labels[i].as_str(), self.cursor == Some(pos)))
            .collect()
    }

    pub fn has_more_above(&self) -> bool {
        self.offset > 0
    }

    pub fn has_more_below(&self) -> bool {
        self.offset + self.page_size < self.filtered.len()
    }

    pub fn next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) => (i + 1) % self.filtered.len(),
            None => 0,
        });
        self.scroll_to_cursor();
    }

    pub fn previous(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(0) | None => self.filtered.len() - 1,
            Some(i) => i - 1,
        });
        self.scroll_to_cursor();
    }

    pub fn push_char(&mut self, c: char) {
        if !self.search {
            return;
        }
        self.filter.push(c);
        self.refilter();
    }

    pub fn backspace(&mut self) {
        if self.filter.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_filter(&mut self) {
        if !self.filter.is_empty() {
            self.filter.clear();
            self.refilter();
        }
    }

    /// Recomputes matches, keeping the cursor on the same label when it is
    /// still listed and falling back to the first match otherwise.
    fn refilter(&mut self) {
        let previous = self.selected();
        self.filtered = (0..self.labels.len()).filter(|&i| matches(&self.labels[i], &self.filter)).collect();
        self.cursor = match previous.and_then(|p| self.filtered.iter().position(|&i| i == p)) {
            Some(pos) => Some(pos),
            None if self.filtered.is_empty() => None,
            None => Some(0),
        };
        self.offset = 0;
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        let Some(cursor) = self.cursor else { return };
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + self.page_size {
            self.offset = cursor + 1 - self.page_size;
        }
    }
}

#[cfg(test)]
mod tests;
