use std::rc::Rc;

use yew::Reducible;

use crate::config;

pub fn is_scrolled(vertical_offset: f64) -> bool {
    vertical_offset > config::SCROLLED_THRESHOLD
}

/// Visual variant of the fixed header; depends on `scrolled` alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVariant {
    Spacious,
    Compact,
}

impl HeaderVariant {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            HeaderVariant::Compact
        } else {
            HeaderVariant::Spacious
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderVariant::Spacious => "site-header spacious",
            HeaderVariant::Compact => "site-header compact",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    /// A navigation link was activated; the menu only ever closes here.
    LinkActivated,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::LinkActivated => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}
