//! Static content consumed by the presentation adapters.

pub mod boot;
pub mod snippets;

pub const SITE_OWNER: &str = "Dhruv Jindal";

/// Page sections in scroll order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Blog,
        Section::Contact,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }

    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Home => "Software engineer building fast, friendly web apps.",
            Self::About => "React, Django and MySQL, shipped end to end.",
            Self::Skills => "Frontend, backend, databases and a little AI glue.",
            Self::Projects => "Restaurant app, EduPortal AI, a C++ ray tracer, hotel booking.",
            Self::Experience => "Backend optimization internship and open source work.",
            Self::Blog => "Notes on building, shipping and learning.",
            Self::Contact => "Say hello. The form lives on the web version.",
        }
    }

    /// The about section hosts the live code panel.
    pub const fn shows_code_panel(self) -> bool {
        matches!(self, Self::About)
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }
}
