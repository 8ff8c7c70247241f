//! Code snippets cycled by the live code panel.

pub const SNIPPET_PANEL_TITLE: &str = "live-code-demo.js";

const DEVELOPER: &[&str] = &[
    "const developer = {",
    "  name: 'Dhruv Jindal',",
    "  role: 'Software Engineer',",
    "  skills: ['React', 'Django', 'MySQL'],",
    "  passion: 'Building amazing apps'",
    "};",
];

const OPTIMIZE: &[&str] = &[
    "function optimizePerformance() {",
    "  // Reduced backend response time by 30%",
    "  return 'WoRisGo internship success!';",
    "}",
];

const CONTRIBUTOR: &[&str] = &[
    "class OpenSourceContributor {",
    "  constructor() {",
    "    this.rank = 'Top 1%';",
    "    this.participants = '200+';",
    "    this.event = 'PWOC';",
    "  }",
    "}",
];

const PROJECTS: &[&str] = &[
    "const projects = [",
    "  'Portfolio (MERN)',",
    "  'Restaurant App (Django + React)',",
    "  'Hotel Booking (Laravel)',",
    "  'Blog Platform (PHP + MySQL)'",
    "];",
];

pub const CODE_SNIPPETS: [&[&str]; 4] = [DEVELOPER, OPTIMIZE, CONTRIBUTOR, PROJECTS];
