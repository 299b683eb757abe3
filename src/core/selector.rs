//! View selection state: which dashboard panel is active, plus the raw
//! contents of the header search box.

/// The three mutually exclusive dashboard panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Queue,
    Beds,
    Inventory,
}

impl View {
    /// Tab order
    pub const ALL: [View; 3] = [View::Queue, View::Beds, View::Inventory];

    pub fn title(&self) -> &'static str {
        match self {
            View::Queue => "OPD Queue",
            View::Beds => "Bed Management",
            View::Inventory => "Inventory",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            View::Queue => '1',
            View::Beds => '2',
            View::Inventory => '3',
        }
    }

    pub fn from_shortcut(ch: char) -> Option<View> {
        View::ALL.into_iter().find(|view| view.shortcut() == ch)
    }

    pub fn index(&self) -> usize {
        match self {
            View::Queue => 0,
            View::Beds => 1,
            View::Inventory => 2,
        }
    }

    pub fn next(&self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(&self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Session-scoped selector state.
///
/// The two fields are independent: selecting a view never touches the
/// search text and editing the search text never changes the view. The
/// search text is held only; nothing downstream reads it to filter rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSelector {
    active: View,
    search_text: String,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> View {
        self.active
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn select_view(&mut self, view: View) {
        self.active = view;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn next_view(&mut self) {
        self.select_view(self.active.next());
    }

    pub fn prev_view(&mut self) {
        self.select_view(self.active.prev());
    }
}
