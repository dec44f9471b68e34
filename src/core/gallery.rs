// Lightbox gallery over a project's ordered image list.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    selected: Option<usize>,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn open(&mut self, index: usize) {
        if index < self.len {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Advance to the next image, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1) % self.len);
        }
    }

    /// Step back to the previous image, wrapping from the first to the last.
    pub fn prev(&mut self) {
        if let Some(i) = self.selected {
            self.selected = Some((i + self.len - 1) % self.len);
        }
    }
}
