// Host-side tests for static display records and tab selection.

use folio_core::*;

#[test]
fn workspace_path_lowercases_and_replaces_whitespace() {
    let p = Project {
        id: 9,
        title: "My Cool\tProject",
        description: "",
        tags: &[],
        image: "",
        link: "",
        github: "",
    };
    assert_eq!(p.workspace_path(), "~/workspace/my_cool_project");
    assert_eq!(PROJECTS[1].workspace_path(), "~/workspace/syqlorix.github.io");
}

#[test]
fn empty_image_falls_back_to_placeholder() {
    let dotfiles = PROJECTS.iter().find(|p| p.title == "dotfiles").unwrap();
    assert_eq!(dotfiles.image_source(), ImageSource::Placeholder);
    assert!(matches!(PROJECTS[0].image_source(), ImageSource::Url(u) if u.ends_with(".svg")));
}

#[test]
fn audit_reports_only_the_missing_image() {
    let issues = audit(&PROJECTS, &SKILL_CATEGORIES);
    assert_eq!(
        issues,
        vec![RecordIssue::MissingImage {
            project: "dotfiles"
        }]
    );
    assert!(issues[0].to_string().contains("placeholder"));
}

#[test]
fn audit_flags_empty_links_and_icons() {
    static BROKEN_SKILLS: [Skill; 1] = [Skill {
        name: "Mystery",
        icon: SkillIcon::Glyph(" "),
        color: "#000",
    }];
    let categories = [SkillCategory {
        title: "Broken",
        skills: &BROKEN_SKILLS,
    }];
    let project = Project {
        id: 1,
        title: "x",
        description: "",
        tags: &[],
        image: "a.png",
        link: "",
        github: "https://example.invalid/x",
    };
    let issues = audit(&[project], &categories);
    assert_eq!(issues.len(), 2);
    assert!(issues.contains(&RecordIssue::MissingLink {
        project: "x",
        field: "link"
    }));
    assert!(issues.contains(&RecordIssue::MissingSkillIcon { skill: "Mystery" }));
}

#[test]
fn project_ids_are_unique() {
    let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), PROJECTS.len());
}

#[test]
fn tabs_start_on_languages() {
    let tabs = TabState::new(&SKILL_CATEGORIES);
    assert_eq!(tabs.active().unwrap().title, "Languages");
    assert_eq!(tabs.active_index(), 0);
    assert_eq!(tabs.categories().len(), 3);
}

#[test]
fn selecting_tabs_switches_category() {
    let mut tabs = TabState::new(&SKILL_CATEGORIES);
    assert!(tabs.select("Tools & Platforms"));
    assert_eq!(tabs.active().unwrap().skills.len(), 30);
    // Same tab again is not a change.
    assert!(!tabs.select("Tools & Platforms"));
    assert!(!tabs.select("Nope"));
    assert_eq!(tabs.active().unwrap().title, "Tools & Platforms");
    assert!(tabs.select("Frameworks & Libraries"));
    assert_eq!(tabs.active_index(), 1);
}

#[test]
fn tile_entrances_are_staggered() {
    let first = tile_entrance(0);
    assert_eq!(first.delay_sec, 0.0);
    assert_eq!(first.from_opacity, 0.0);
    assert_eq!(first.from_scale, SKILL_ENTER_SCALE);
    let fourth = tile_entrance(3);
    assert!((fourth.delay_sec - 3.0 * SKILL_STAGGER_SEC).abs() < 1e-6);
}

#[test]
fn skill_names_are_unique_within_a_category() {
    for category in SKILL_CATEGORIES.iter() {
        let mut names: Vec<&str> = category.skills.iter().map(|s| s.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before, "duplicate in {}", category.title);
    }
}

#[test]
fn heading_reveals_once_enough_is_in_view() {
    assert_eq!(reveal_state(0.0), RevealState::HIDDEN);
    assert_eq!(reveal_state(REVEAL_THRESHOLD - 0.01), RevealState::HIDDEN);
    assert_eq!(reveal_state(REVEAL_THRESHOLD), RevealState::SHOWN);
    assert_eq!(reveal_state(REVEAL_THRESHOLD - 1e-4), RevealState::SHOWN);
    assert_eq!(reveal_state(1.0), RevealState::SHOWN);
    assert_eq!(RevealState::HIDDEN.opacity, 0.0);
    assert_eq!(RevealState::HIDDEN.offset_y_px, 20.0);
}

#[test]
fn heading_hides_again_when_scrolled_out() {
    let shown = reveal_state(0.8);
    let hidden = reveal_state(0.1);
    assert_eq!(shown, RevealState::SHOWN);
    assert_eq!(hidden, RevealState::HIDDEN);
    assert_eq!(reveal_state(f32::NAN), RevealState::HIDDEN);
}
