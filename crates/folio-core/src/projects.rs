//! Projects gallery state: list truncation and the detail modal.

use crate::content::{Project, ProjectId};

/// Cards shown before "Show More" is pressed.
pub const PREVIEW_COUNT: usize = 3;

/// Where a click inside the open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog body. Must not close the modal.
    Content,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectsView {
    pub show_more: bool,
    /// Project whose modal is open. A single slot, so at most one modal.
    pub selected: Option<ProjectId>,
}

impl ProjectsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects to render as cards.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> &'a [Project] {
        if self.show_more {
            projects
        } else {
            &projects[..projects.len().min(PREVIEW_COUNT)]
        }
    }

    /// Whether the show-more toggle is offered at all.
    pub fn has_more(total: usize) -> bool {
        total > PREVIEW_COUNT
    }

    pub fn toggle_show_more(&mut self) -> bool {
        self.show_more = !self.show_more;
        self.show_more
    }

    pub fn open(&mut self, id: ProjectId) {
        tracing::debug!(project = id, "Opening project details");
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Routes a click inside the modal layer.
    pub fn modal_click(&mut self, target: ModalTarget) {
        if target == ModalTarget::Backdrop {
            self.close();
        }
    }

    /// Resolves the open project against the seed data.
    pub fn selected_project<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        let id = self.selected?;
        projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: ProjectId) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: "short".to_string(),
            full_description: format!("Long description of {id}"),
            tags: vec!["Rust".to_string()],
            image: String::new(),
            demo_link: None,
            github_link: None,
        }
    }

    fn projects(n: u32) -> Vec<Project> {
        (1..=n).map(project).collect()
    }

    #[test]
    fn test_truncation() {
        let mut view = ProjectsView::new();
        for total in 0..6 {
            let list = projects(total);
            assert_eq!(view.visible(&list).len(), (total as usize).min(PREVIEW_COUNT));
        }

        view.toggle_show_more();
        let list = projects(6);
        assert_eq!(view.visible(&list).len(), 6);
        assert!(!view.toggle_show_more());
        assert_eq!(view.visible(&list).len(), 3);
    }

    #[test]
    fn test_has_more() {
        assert!(!ProjectsView::has_more(3));
        assert!(ProjectsView::has_more(4));
    }

    #[test]
    fn test_modal_click_containment() {
        let list = projects(6);
        let mut view = ProjectsView::new();

        view.open(5);
        assert_eq!(view.selected_project(&list), Some(&list[4]));

        view.modal_click(ModalTarget::Content);
        assert_eq!(view.selected, Some(5));

        view.modal_click(ModalTarget::Backdrop);
        assert_eq!(view.selected, None);
    }

    #[test]
    fn test_open_replaces_selection() {
        let mut view = ProjectsView::new();
        view.open(1);
        view.open(2);
        assert_eq!(view.selected, Some(2));
        view.close();
        assert!(view.selected_project(&projects(3)).is_none());
    }
}
