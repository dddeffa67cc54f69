use crate::fullscreen::Snapshot;
use crate::theme;
use glam::Vec2;

/// One content card on the canvas.
#[derive(Clone, Debug)]
pub struct Section {
    pub name: String,
    pub color: &'static str,
    pub minimized: bool,
    pub fullscreen: bool,
    pub position: Vec2,
    pub scale: f32,
    pub snapshot: Option<Snapshot>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: theme::color_for(name),
            minimized: false,
            fullscreen: false,
            position: Vec2::ZERO,
            scale: 1.0,
            snapshot: None,
        }
    }
}

/// Outcome of an `add` call. A duplicate name never creates a second entry;
/// the caller brings the existing section into view instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Added {
    Created,
    Refocused,
}

/// Ordered list of active sections. Order is identity: nav dots mirror it
/// 1:1 and the main content render order follows it.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str) -> Added {
        if self.index_of(name).is_some() {
            return Added::Refocused;
        }
        self.sections.push(Section::new(name));
        Added::Created
    }

    /// Removes the named section. Unknown names are a no-op.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(i) => {
                self.sections.remove(i);
                true
            }
            None => false,
        }
    }

    /// Moves the named section to `new_index` (clamped to the list end),
    /// shifting the entries in between.
    pub fn reorder(&mut self, name: &str, new_index: usize) -> bool {
        let Some(from) = self.index_of(name) else {
            return false;
        };
        let to = new_index.min(self.sections.len() - 1);
        if from == to {
            return true;
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        true
    }

    pub fn set_minimized(&mut self, name: &str, minimized: bool) {
        if let Some(s) = self.get_mut(name) {
            s.minimized = minimized;
        }
    }

    /// Sets the fullscreen flag. Fullscreen is exclusive: raising it on one
    /// section first clears it on any other, whose name is returned so the
    /// caller can restore that section's visuals.
    pub fn set_fullscreen(&mut self, name: &str, fullscreen: bool) -> Option<String> {
        if self.index_of(name).is_none() {
            return None;
        }
        let mut displaced = None;
        if fullscreen {
            for s in &mut self.sections {
                if s.fullscreen && s.name != name {
                    s.fullscreen = false;
                    displaced = Some(s.name.clone());
                }
            }
        }
        if let Some(s) = self.get_mut(name) {
            s.fullscreen = fullscreen;
        }
        displaced
    }

    pub fn fullscreen_name(&self) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.fullscreen)
            .map(|s| s.name.as_str())
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
