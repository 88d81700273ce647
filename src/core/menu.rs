//! Launch menu model
//!
//! The menu is an ordered, immutable tree of labeled entries built once
//! from the configuration and interpreted by a generic renderer. Leaves
//! carry the action to run; internal nodes carry a nested entry list.

use crate::config::MenuConfig;

/// What a leaf entry does when selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Spawn a detached process.
    Command { program: String, args: Vec<String> },
    /// Open a project directory in the configured editor; optionally open a
    /// companion URL alongside (empty string = none).
    EditProject {
        editor: String,
        path: String,
        url: String,
    },
    /// Open a URL with the system browser.
    OpenUrl { url: String },
    /// Open a filesystem location with the system file manager.
    OpenPlace { path: String },
    /// Terminate the application.
    Quit,
}

/// One node of the menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action { label: String, action: MenuAction },
    Submenu { label: String, entries: Vec<MenuEntry> },
}

impl MenuEntry {
    fn action(label: impl Into<String>, action: MenuAction) -> Self {
        Self::Action {
            label: label.into(),
            action,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Action { label, .. } => label,
            Self::Submenu { label, .. } => label,
        }
    }
}

/// Split a command line on whitespace into program and arguments.
/// Returns `None` for an empty string.
pub fn split_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Build the orb menu from the configuration: a flat remote-desktop entry,
/// three submenus (projects, websites, documents), and a flat quit entry.
/// Sections with no configured entries are omitted.
pub fn build_menu(config: &MenuConfig) -> Vec<MenuEntry> {
    let mut menu = Vec::new();

    if let Some((program, args)) = split_command(&config.remote_desktop) {
        menu.push(MenuEntry::action(
            "Remote desktop",
            MenuAction::Command { program, args },
        ));
    }

    let projects: Vec<MenuEntry> = config
        .projects
        .iter()
        .map(|p| {
            MenuEntry::action(
                &p.label,
                MenuAction::EditProject {
                    editor: config.editor.clone(),
                    path: p.path.clone(),
                    url: p.url.clone(),
                },
            )
        })
        .collect();
    if !projects.is_empty() {
        menu.push(MenuEntry::Submenu {
            label: "Projects".to_string(),
            entries: projects,
        });
    }

    let sites: Vec<MenuEntry> = config
        .sites
        .iter()
        .map(|s| MenuEntry::action(&s.label, MenuAction::OpenUrl { url: s.url.clone() }))
        .collect();
    if !sites.is_empty() {
        menu.push(MenuEntry::Submenu {
            label: "Websites".to_string(),
            entries: sites,
        });
    }

    let places: Vec<MenuEntry> = config
        .places
        .iter()
        .filter_map(|place| {
            // A place is either a plain path or a command line (for shell
            // folders like the recycle bin that have no path).
            if !place.command.is_empty() {
                let (program, args) = split_command(&place.command)?;
                Some(MenuEntry::action(
                    &place.label,
                    MenuAction::Command { program, args },
                ))
            } else if !place.path.is_empty() {
                Some(MenuEntry::action(
                    &place.label,
                    MenuAction::OpenPlace {
                        path: place.path.clone(),
                    },
                ))
            } else {
                None
            }
        })
        .collect();
    if !places.is_empty() {
        menu.push(MenuEntry::Submenu {
            label: "Documents".to_string(),
            entries: places,
        });
    }

    menu.push(MenuEntry::action("Quit", MenuAction::Quit));
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlaceEntry, ProjectEntry, SiteEntry};

    fn sample_config() -> MenuConfig {
        MenuConfig {
            editor: "code".to_string(),
            remote_desktop: "mstsc".to_string(),
            projects: vec![
                ProjectEntry {
                    label: "Workbench".to_string(),
                    path: "/home/me/workbench".to_string(),
                    url: String::new(),
                },
                ProjectEntry {
                    label: "Practice".to_string(),
                    path: "/home/me/practice".to_string(),
                    url: "https://example.com/problems".to_string(),
                },
            ],
            sites: vec![SiteEntry {
                label: "News".to_string(),
                url: "https://example.com".to_string(),
            }],
            places: vec![
                PlaceEntry {
                    label: "Downloads".to_string(),
                    path: "/home/me/Downloads".to_string(),
                    command: String::new(),
                },
                PlaceEntry {
                    label: "Recycle bin".to_string(),
                    path: String::new(),
                    command: "explorer shell:RecycleBinFolder".to_string(),
                },
            ],
        }
    }

    #[test]
    fn menu_preserves_section_order() {
        let menu = build_menu(&sample_config());
        let labels: Vec<&str> = menu.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            ["Remote desktop", "Projects", "Websites", "Documents", "Quit"]
        );
    }

    #[test]
    fn project_entries_bind_the_configured_editor() {
        let menu = build_menu(&sample_config());
        let MenuEntry::Submenu { entries, .. } = &menu[1] else {
            panic!("expected projects submenu");
        };
        assert_eq!(
            entries[0],
            MenuEntry::Action {
                label: "Workbench".to_string(),
                action: MenuAction::EditProject {
                    editor: "code".to_string(),
                    path: "/home/me/workbench".to_string(),
                    url: String::new(),
                },
            }
        );
    }

    #[test]
    fn place_with_command_becomes_a_command_action() {
        let menu = build_menu(&sample_config());
        let MenuEntry::Submenu { entries, .. } = &menu[3] else {
            panic!("expected documents submenu");
        };
        assert_eq!(
            entries[1],
            MenuEntry::Action {
                label: "Recycle bin".to_string(),
                action: MenuAction::Command {
                    program: "explorer".to_string(),
                    args: vec!["shell:RecycleBinFolder".to_string()],
                },
            }
        );
    }

    #[test]
    fn empty_sections_are_omitted() {
        let config = MenuConfig {
            projects: Vec::new(),
            sites: Vec::new(),
            places: Vec::new(),
            ..sample_config()
        };
        let menu = build_menu(&config);
        let labels: Vec<&str> = menu.iter().map(|e| e.label()).collect();
        assert_eq!(labels, ["Remote desktop", "Quit"]);
    }

    #[test]
    fn split_command_separates_program_and_args() {
        assert_eq!(split_command("mstsc"), Some(("mstsc".to_string(), vec![])));
        assert_eq!(
            split_command("explorer shell:Downloads"),
            Some((
                "explorer".to_string(),
                vec!["shell:Downloads".to_string()]
            ))
        );
        assert_eq!(split_command("   "), None);
    }
}
