//! Static display records for the projects showcase and the tech stack.

use crate::constants::{REVEAL_OFFSET_PX, REVEAL_THRESHOLD, SKILL_ENTER_SCALE, SKILL_STAGGER_SEC};

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
    pub github: &'static str,
}

/// What to draw inside a card's core panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Url(&'a str),
    Placeholder,
}

impl Project {
    /// `~/workspace/<title>` with the title lower-cased and whitespace
    /// replaced by underscores.
    pub fn workspace_path(&self) -> String {
        let slug: String = self
            .title
            .chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        format!("~/workspace/{slug}")
    }

    pub fn image_source(&self) -> ImageSource<'_> {
        match self.image.trim() {
            "" => ImageSource::Placeholder,
            url => ImageSource::Url(url),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    /// Named glyph from the icon set, tinted with the skill colour.
    Glyph(&'static str),
    /// Path to a logo image.
    Image(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

/// A problem found in a display record. Never fatal; the renderer
/// substitutes a placeholder and carries on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordIssue {
    MissingImage { project: &'static str },
    MissingLink { project: &'static str, field: &'static str },
    MissingSkillIcon { skill: &'static str },
}

impl std::fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordIssue::MissingImage { project } => {
                write!(f, "project '{project}' has no image; using placeholder")
            }
            RecordIssue::MissingLink { project, field } => {
                write!(f, "project '{project}' has an empty '{field}' link")
            }
            RecordIssue::MissingSkillIcon { skill } => {
                write!(f, "skill '{skill}' has an empty icon reference")
            }
        }
    }
}

/// Lists the malformed fields across the given records.
pub fn audit(projects: &[Project], categories: &[SkillCategory]) -> Vec<RecordIssue> {
    let mut issues = Vec::new();
    for p in projects {
        if p.image.trim().is_empty() {
            issues.push(RecordIssue::MissingImage { project: p.title });
        }
        for (field, value) in [("link", p.link), ("github", p.github)] {
            if value.trim().is_empty() {
                issues.push(RecordIssue::MissingLink {
                    project: p.title,
                    field,
                });
            }
        }
    }
    for skill in categories.iter().flat_map(|c| c.skills.iter()) {
        let reference = match skill.icon {
            SkillIcon::Glyph(name) | SkillIcon::Image(name) => name,
        };
        if reference.trim().is_empty() {
            issues.push(RecordIssue::MissingSkillIcon { skill: skill.name });
        }
    }
    issues
}

/// Which tech-stack category is on screen.
#[derive(Clone, Copy, Debug)]
pub struct TabState {
    categories: &'static [SkillCategory],
    active: usize,
}

impl TabState {
    /// Starts on the first category.
    pub fn new(categories: &'static [SkillCategory]) -> Self {
        Self {
            categories,
            active: 0,
        }
    }

    pub fn categories(&self) -> &'static [SkillCategory] {
        self.categories
    }

    pub fn active(&self) -> Option<&'static SkillCategory> {
        self.categories.get(self.active)
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Switches to the category titled `title`. Returns whether the active
    /// tab changed; unknown titles are ignored.
    pub fn select(&mut self, title: &str) -> bool {
        match self.categories.iter().position(|c| c.title == title) {
            Some(i) if i != self.active => {
                self.active = i;
                true
            }
            _ => false,
        }
    }
}

/// Entry animation of the `index`-th skill tile after a tab switch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileEntrance {
    pub delay_sec: f32,
    pub from_opacity: f32,
    pub from_scale: f32,
}

pub fn tile_entrance(index: usize) -> TileEntrance {
    TileEntrance {
        delay_sec: index as f32 * SKILL_STAGGER_SEC,
        from_opacity: 0.0,
        from_scale: SKILL_ENTER_SCALE,
    }
}

/// Pose of a section heading that fades and rises into place while in view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    pub opacity: f32,
    pub offset_y_px: f32,
}

impl RevealState {
    pub const HIDDEN: RevealState = RevealState {
        opacity: 0.0,
        offset_y_px: REVEAL_OFFSET_PX,
    };
    pub const SHOWN: RevealState = RevealState {
        opacity: 1.0,
        offset_y_px: 0.0,
    };
}

/// Reveal pose for a heading whose visible share of area is `ratio`.
///
/// Not one-shot: scrolling the heading back out hides it again.
pub fn reveal_state(ratio: f32) -> RevealState {
    // Observers report the crossing ratio with some rounding.
    if ratio.is_finite() && ratio + 1e-3 >= REVEAL_THRESHOLD {
        RevealState::SHOWN
    } else {
        RevealState::HIDDEN
    }
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Syqlorix",
        description: "A hyper-minimalist Python micro-framework for building web applications. It offers a pure Python DSL for authoring web interfaces, complete with a live-reloading server, a powerful static site generator, and advanced features like middleware, blueprints, and a built-in test client.",
        tags: &["Python"],
        image: "https://raw.githubusercontent.com/Syqlorix/Syqlorix/main/syqlorix-logo.svg",
        link: "https://pypi.org/project/syqlorix",
        github: "https://github.com/Syqlorix/Syqlorix",
    },
    Project {
        id: 2,
        title: "syqlorix.github.io",
        description: "official documentation and comprehensive examples for the Syqlorix Python package.",
        tags: &["JavaScript"],
        image: "https://raw.githubusercontent.com/Syqlorix/Syqlorix/main/syqlorix-logo.svg",
        link: "https://syqlorix.github.io",
        github: "https://github.com/Syqlorix/syqlorix.github.io",
    },
    Project {
        id: 3,
        title: "Elyth",
        description: "Elyth: Create Discord bots in Python with dead-simple, string-based commands!",
        tags: &["Python"],
        image: "https://avatars.githubusercontent.com/u/213914540?s=200&v=4",
        link: "https://github.com/ElythHQ/Elyth",
        github: "https://github.com/ElythHQ/Elyth",
    },
    Project {
        id: 4,
        title: "dotfiles",
        description: "My personal dotfiles for my Linux setup.",
        tags: &["Shell"],
        image: "",
        link: "https://github.com/Golgrax/dotfiles",
        github: "https://github.com/Golgrax/dotfiles",
    },
];

const fn img(name: &'static str, path: &'static str, color: &'static str) -> Skill {
    Skill {
        name,
        icon: SkillIcon::Image(path),
        color,
    }
}

const fn glyph(name: &'static str, glyph: &'static str, color: &'static str) -> Skill {
    Skill {
        name,
        icon: SkillIcon::Glyph(glyph),
        color,
    }
}

pub static LANGUAGES: [Skill; 9] = [
    img("Lua", "/logos/lua.svg", "#2C2D72"),
    img("Python", "/logos/python.svg", "#3776AB"),
    img("C", "/logos/c.png", "#A8B9CC"),
    img("Java", "/logos/java.svg", "#007396"),
    img("JavaScript", "/logos/javascript.png", "#F7DF1E"),
    img("HTML5", "/logos/html5.svg", "#E34F26"),
    img("CSS3", "/logos/css3.svg", "#1572B6"),
    glyph("SQL", "database", "#4479A1"),
    glyph("Bash/Shell", "terminal", "#4EAA25"),
];

pub static FRAMEWORKS: [Skill; 17] = [
    img("Node.js", "/logos/nodejs.svg", "#339933"),
    img("React", "/logos/react.svg", "#61DAFB"),
    img("jQuery", "/logos/jquery.svg", "#0769AD"),
    glyph("Syqlorix", "star", "#FFD700"),
    glyph("Elyth", "bot", "#7289DA"),
    img("Flask", "/logos/flask.svg", "#ffffff"),
    glyph("dominate", "code-2", "#83a543"),
    img("NumPy", "/logos/numpy.svg", "#4D77CF"),
    glyph("turtle", "turtle", "#00A86B"),
    img("pygame", "/logos/pygame.svg", "#6a9727"),
    glyph("scipy", "calculator", "#8CAAE6"),
    glyph("tkinter", "app-window", "#F0B917"),
    img("TensorFlow", "/logos/tensorflow.svg", "#FF6F00"),
    img("PyTorch", "/logos/pytorch.svg", "#EE4C2C"),
    glyph("Keras", "brain-circuit", "#D00000"),
    img("Scikit-learn", "/logos/scikit-learn.svg", "#F7931E"),
    glyph("YOLO", "eye", "#00FFFF"),
];

pub static TOOLS: [Skill; 30] = [
    glyph("Git & GitHub", "github", "#181717"),
    img("Docker", "/logos/docker.svg", "#2496ED"),
    glyph("Roblox Studio", "toy-brick", "#DA2D1F"),
    img("VS Code", "/logos/vscode.svg", "#007ACC"),
    img("Vim", "/logos/vim.svg", "#019733"),
    glyph("Glitch", "fish", "#3333FF"),
    img("Leetcode", "/logos/leetcode.png", "#FFA116"),
    img("Blender", "/logos/blender.svg", "#E87D0D"),
    glyph("Ghidra", "key", "#000000"),
    glyph("Android Studio", "smartphone", "#3DDC84"),
    glyph("AIDE", "smartphone", "#FF6D00"),
    glyph("CodeBoard", "keyboard", "#8A2BE2"),
    glyph("Spck Editor", "code", "#1E90FF"),
    glyph("ADB", "terminal", "#3DDC84"),
    glyph("GNU/Linux", "hard-drive", "#FCC624"),
    glyph("Figma", "figma", "#F24E1E"),
    glyph("KWrite", "file-text", "#277399"),
    glyph("Kate", "file-text", "#277399"),
    glyph("GHex", "file-text", "#8B0000"),
    img("Wonderland Editor", "/logos/wonderland-editor.svg", "#8A2BE2"),
    glyph("GIMP", "brush", "#5C5547"),
    glyph("Krita", "brush", "#202E3A"),
    glyph("KolourPaint", "paintbrush", "#F612A0"),
    glyph("LibreOffice", "file", "#18A303"),
    glyph("Gedit", "file-text", "#F9D441"),
    glyph("Builder", "hammer", "#2E3436"),
    glyph("Kdenlive", "film", "#83A543"),
    glyph("KDevelop", "code", "#007396"),
    glyph("Kaggle", "bar-chart", "#20BEFF"),
    img("Hugging Face", "/logos/huggingface.svg", "#FFD000"),
];

pub static SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Languages",
        skills: &LANGUAGES,
    },
    SkillCategory {
        title: "Frameworks & Libraries",
        skills: &FRAMEWORKS,
    },
    SkillCategory {
        title: "Tools & Platforms",
        skills: &TOOLS,
    },
];
