//! Static portfolio content
//!
//! Everything here is defined at build time and never mutated: the UI layer
//! redraws from these collections every frame, so a "re-render" is always a
//! wholesale replacement. Slice order is display order.

use crate::types::{Project, Script};

/// Projects shown on the Projects tab, in display order
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Advanced Admin System",
        description: "A feature-rich admin panel with Discord webhook logging, \
                      role management, and in-game moderation tools.",
        tags: &["Backend", "UI", "HTTP Service"],
        icon: "🛡",
    },
    Project {
        title: "Procedural Map Generator",
        description: "Dynamically generates unique terrain and dungeons using \
                      Perlin noise and custom algorithms.",
        tags: &["Algorithm", "Terrain", "Procedural"],
        icon: "⛰",
    },
    Project {
        title: "Real-Time Data Sync",
        description: "A module for synchronizing player data across servers \
                      with conflict resolution and caching.",
        tags: &["DataStore", "Module", "Optimization"],
        icon: "🗄",
    },
    Project {
        title: "Custom TweenService Library",
        description: "An expanded TweenService library allowing per-axis \
                      easing and custom bezier curves.",
        tags: &["UI", "Animation", "Library"],
        icon: "∿",
    },
];

/// Downloadable scripts shown on the Scripts tab, in display order
pub const SCRIPTS: &[Script] = &[
    Script {
        name: "Clean Module Template",
        description: "A well-structured module template with sections for \
                      services, variables, and methods.",
        download_url: "https://sairyware.dev/scripts/module-template.lua",
    },
    Script {
        name: "Simple Page Switcher",
        description: "A lightweight script for smooth page transitions in \
                      GUIs, similar to UIPageLayout.",
        download_url: "https://sairyware.dev/scripts/page-switcher.lua",
    },
    Script {
        name: "HTTP Request Wrapper",
        description: "A utility for handling HTTP requests to external APIs \
                      with error handling and retry logic.",
        download_url: "https://sairyware.dev/scripts/http-wrapper.lua",
    },
];

/// Featured Lua snippet shown on the Snippet tab (copyable)
pub const SNIPPET: &str = r#"-- Clean module template
local MyModule = {}
MyModule.__index = MyModule

function MyModule.new(config)
    local self = setmetatable({}, MyModule)
    self.config = config or {}
    return self
end

function MyModule:start()
    print("[MyModule] started")
end

return MyModule"#;

/// Intro text shown on the Home tab
pub const INTRO: &[&str] = &[
    "Hi, I'm Sairy - a scripter building game systems, tooling, and UI.",
    "",
    "Browse my work with the tabs above:",
    "  Projects  - systems I've designed and shipped",
    "  Scripts   - utilities free to download and reuse",
    "  Snippet   - a taste of how I structure my code",
];
