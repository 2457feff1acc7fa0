use egui::Color32;

/// Maximum number of colors the shortcut history keeps.
pub const COLOR_HISTORY_CAPACITY: usize = 5;

/// An ordered list of recently used colors for the shortcut row, most
/// recently first-seen last.
///
/// Re-selecting a color that is already present is a complete no-op — the
/// entry keeps its position rather than moving to the back. The history
/// therefore holds the most recently *first-seen* distinct colors. When the
/// list is full, a new distinct color evicts the oldest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorHistory {
    colors: Vec<Color32>,
}

impl ColorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a color selection, applying the dedup and capacity rules.
    pub fn push(&mut self, color: Color32) {
        if self.colors.contains(&color) {
            return;
        }
        if self.colors.len() == COLOR_HISTORY_CAPACITY {
            self.colors.remove(0);
        }
        self.colors.push(color);
    }

    /// The stored colors, oldest first.
    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}
