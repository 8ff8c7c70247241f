//! Boot transcript typed into the terminal overlay.

pub const BOOT_TERMINAL_TITLE: &str = "dhruv@portfolio:~";

pub const BOOT_TRANSCRIPT: &[&str] = &[
    "Initializing developer profile...",
    "Loading system modules...",
    "",
    "[OK] Identity: Dhruv Jindal",
    "[OK] Role: Software Development Engineer",
    "",
    "Running diagnostics...",
    "[OK] React Engine ............... active",
    "[OK] Django REST Server ......... active",
    "[OK] Database Cluster ........... synced (MySQL/PostgreSQL)",
    "[OK] AI Module .................. operational",
    "",
    "Scanning major projects...",
    "|-- restaurant-app/        (Django + React + AI Q&A <200ms)",
    "|-- eduportal-ai/          (Django REST + JWT + Auto-Curriculum Builder)",
    "|-- raytracer-cpp/         (1M+ rays rendered in 0.079s)",
    "\\-- hotel-booking-laravel/ (Role-based + MySQL + Dashboard)",
    "",
    "Compiling achievements...",
    "[+] PWOC: Top 1% Open Source Contributor",
    "[+] Backend Optimization @ Gokaddal",
    "[+] AI Integration workflows (LLaMA API, automation)",
    "",
    "Running career-build sequence...",
    "> Improving performance...",
    "> Shipping clean code...",
    "> Learning new technologies...",
    "> Contributing to open source...",
    "System status: STABLE",
    "",
    "dhruv@portfolio:~$ echo \"Ready to build something extraordinary.\"",
    "Ready to build something extraordinary.",
    "",
    "dhruv@portfolio:~$ _",
];

/// The whole transcript is a single script.
pub const BOOT_SCRIPTS: [&[&str]; 1] = [BOOT_TRANSCRIPT];
