use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Stats,
    Services,
    About,
    Contact,
}

impl Section {
    /// Entries shown in the navigation bar, in order.
    pub const MENU: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::About,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Stats => "Stats",
            Section::Services => "Services",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    /// Element id of the section: the label, lower-cased.
    pub fn anchor(self) -> String {
        self.label().to_ascii_lowercase()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        [
            Section::Home,
            Section::Stats,
            Section::Services,
            Section::About,
            Section::Contact,
        ]
        .into_iter()
        .find(|s| s.label().eq_ignore_ascii_case(label))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Menu state after navigating somewhere. The menu stays as it was if
    /// the target could not be scrolled to.
    pub fn after_navigation(self, scrolled: bool) -> Self {
        if scrolled {
            self.closed()
        } else {
            self
        }
    }
}

/// Smooth-scroll the viewport to `section`. Returns false if its element is missing.
pub fn scroll_to_section(section: Section) -> bool {
    let anchor = section.anchor();
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&anchor));

    match element {
        Some(element) => {
            debug!("Scrolling to #{anchor}");
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => {
            warn!("No element with id #{anchor}");
            false
        }
    }
}
