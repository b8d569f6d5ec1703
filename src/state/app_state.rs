//! Shell state: navigation focus, dialog visibility and dialog focus

use super::forms::DemoField;

/// A link shown in the navigation bar or footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Links in the top navigation bar
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "Features",
        href: "https://www.lorememory.com/features",
    },
    NavLink {
        name: "Use Cases",
        href: "https://www.lorememory.com/use-cases",
    },
    NavLink {
        name: "Integrations",
        href: "https://www.lorememory.com/integrations",
    },
];

/// Footer link groups
pub const FOOTER_SECTIONS: &[(&str, &[NavLink])] = &[
    ("Product", NAV_LINKS),
    (
        "Company",
        &[
            NavLink {
                name: "About",
                href: "https://www.lorememory.com/about",
            },
            NavLink {
                name: "Contact",
                href: "https://www.lorememory.com/contact",
            },
        ],
    ),
    (
        "Legal",
        &[
            NavLink {
                name: "Terms",
                href: "https://www.lorememory.com/terms",
            },
            NavLink {
                name: "Privacy",
                href: "https://www.lorememory.com/privacy",
            },
        ],
    ),
];

pub const WAITLIST_HREF: &str = "https://www.lorememory.com/#waitlist";

/// Focusable entries of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Link(usize),
    BookDemo,
    JoinWaitlist,
}

impl NavTarget {
    pub fn count() -> usize {
        NAV_LINKS.len() + 2
    }

    pub fn from_index(index: usize) -> Self {
        match index {
            i if i < NAV_LINKS.len() => Self::Link(i),
            i if i == NAV_LINKS.len() => Self::BookDemo,
            _ => Self::JoinWaitlist,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Link(i) => NAV_LINKS.get(*i).map(|l| l.name).unwrap_or(""),
            Self::BookDemo => "Book Demo",
            Self::JoinWaitlist => "Join Waitlist",
        }
    }
}

/// Focus inside the demo request dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogFocus {
    Field(DemoField),
    Cancel,
    Submit,
}

impl Default for DialogFocus {
    fn default() -> Self {
        Self::Field(DemoField::Name)
    }
}

impl DialogFocus {
    const ORDER: [DialogFocus; 7] = [
        DialogFocus::Field(DemoField::Name),
        DialogFocus::Field(DemoField::Email),
        DialogFocus::Field(DemoField::Company),
        DialogFocus::Field(DemoField::Timezone),
        DialogFocus::Field(DemoField::Message),
        DialogFocus::Cancel,
        DialogFocus::Submit,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next focus target (wraps around)
    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous focus target (wraps around)
    pub fn prev(&self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::ORDER[Self::ORDER.len() - 1]
        } else {
            Self::ORDER[pos - 1]
        }
    }

    pub fn field(&self) -> Option<DemoField> {
        match self {
            Self::Field(f) => Some(*f),
            _ => None,
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Index into the nav bar's focusable entries
    pub nav_index: usize,
    /// Collapsed menu expanded (narrow terminals)
    pub menu_open: bool,
    /// Whether the demo dialog is shown. Owned here; the workflow only asks to close it.
    pub demo_dialog_open: bool,
    pub dialog_focus: DialogFocus,
    /// One-line message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn selected_nav(&self) -> NavTarget {
        NavTarget::from_index(self.nav_index)
    }

    /// Move nav focus right (wraps around)
    pub fn next_nav(&mut self) {
        self.nav_index = (self.nav_index + 1) % NavTarget::count();
    }

    /// Move nav focus left (wraps around)
    pub fn prev_nav(&mut self) {
        if self.nav_index == 0 {
            self.nav_index = NavTarget::count() - 1;
        } else {
            self.nav_index -= 1;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn open_demo_dialog(&mut self) {
        self.demo_dialog_open = true;
        self.menu_open = false;
        self.dialog_focus = DialogFocus::default();
    }

    pub fn close_demo_dialog(&mut self) {
        self.demo_dialog_open = false;
        self.dialog_focus = DialogFocus::default();
    }
}
