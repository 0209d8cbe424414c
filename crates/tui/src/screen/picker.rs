//! Project picker screen.
//!
//! The picker lists the projects of the configured organization and lets
//! the user choose one with the arrow keys. Enter hands the chosen project
//! over to the board screen.

use projboard_protocol::{FetchError, FetchResult, Message, ProjectSummary};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::{debug, warn};

use crate::{
    command::Command,
    layout::Viewport,
    widgets::{KeyHint, render_error, render_loading, render_project_list},
};

/// Keybinding hints shown under the picker.
pub const PICKER_HINTS: &[KeyHint] = &[("↑↓", "Move"), ("Enter", "Open"), ("Ctrl+C", "Quit")];

/// Lifecycle of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerState {
    /// The project list has been requested.
    Loading,
    /// Projects arrived; `cursor` indexes the highlighted one.
    Loaded {
        /// Projects in server order.
        projects: Vec<ProjectSummary>,
        /// Highlighted row, always within `0..projects.len()` when the
        /// list is non-empty, `0` otherwise.
        cursor: usize,
    },
    /// The fetch failed. Terminal for this screen.
    Error(FetchError),
}

/// The project picker.
#[derive(Debug, Clone)]
pub struct PickerScreen {
    organization: String,
    state: PickerState,
    viewport: Viewport,
}

impl PickerScreen {
    /// Creates a picker for `organization`, waiting for its projects.
    #[must_use]
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            state: PickerState::Loading,
            viewport: Viewport::default(),
        }
    }

    /// Returns the fetch to schedule when the picker is shown.
    #[must_use]
    pub fn init(&self) -> Command {
        Command::LoadProjects {
            organization: self.organization.clone(),
        }
    }

    /// Organization whose projects are listed.
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// Last computed viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The listed projects; empty unless loaded.
    #[must_use]
    pub fn projects(&self) -> &[ProjectSummary] {
        match &self.state {
            PickerState::Loaded { projects, .. } => projects,
            PickerState::Loading | PickerState::Error(_) => &[],
        }
    }

    /// The highlighted row, if the list is loaded.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            PickerState::Loaded { cursor, .. } => Some(cursor),
            PickerState::Loading | PickerState::Error(_) => None,
        }
    }

    /// The project under the cursor, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ProjectSummary> {
        match &self.state {
            PickerState::Loaded { projects, cursor } => projects.get(*cursor),
            PickerState::Loading | PickerState::Error(_) => None,
        }
    }

    /// What the board needs to take over: the selected project and the
    /// current viewport.
    #[must_use]
    pub fn handoff(&self) -> Option<(ProjectSummary, Viewport)> {
        self.selected().map(|project| (project.clone(), self.viewport))
    }

    /// Applies a message.
    ///
    /// Selection is not handled here; see [`PickerScreen::handoff`].
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Resize { width, height } => {
                self.viewport = Viewport::from_terminal(width, height);
            }
            Message::ProjectsLoaded(result) => self.finish_loading(result),
            Message::NavigateUp => self.move_cursor(|cursor, _| cursor.saturating_sub(1)),
            Message::NavigateDown => {
                self.move_cursor(|cursor, len| (cursor + 1).min(len.saturating_sub(1)));
            }
            _ => {}
        }
    }

    fn finish_loading(&mut self, result: FetchResult<Vec<ProjectSummary>>) {
        match result {
            Ok(projects) if self.state == PickerState::Loading => {
                debug!(
                    count = projects.len(),
                    organization = %self.organization,
                    "projects loaded"
                );
                self.state = PickerState::Loaded {
                    projects,
                    cursor: 0,
                };
            }
            Ok(_) => debug!("ignoring project list, picker is not loading"),
            Err(error) => {
                warn!(%error, organization = %self.organization, "project list unavailable");
                self.state = PickerState::Error(error);
            }
        }
    }

    fn move_cursor(&mut self, step: impl FnOnce(usize, usize) -> usize) {
        if let PickerState::Loaded { projects, cursor } = &mut self.state {
            *cursor = step(*cursor, projects.len());
        }
    }

    /// Renders the current state into `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            PickerState::Loading => render_loading(area, buf),
            PickerState::Loaded { projects, cursor } => {
                render_project_list(projects, *cursor, area, buf);
            }
            PickerState::Error(error) => render_error(error, area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use proptest::prelude::*;

    fn projects(n: usize) -> Vec<ProjectSummary> {
        (0..n)
            .map(|i| ProjectSummary::new(format!("PVT_{i}"), format!("Project {i}")))
            .collect()
    }

    fn loaded(n: usize) -> PickerScreen {
        let mut picker = PickerScreen::new("zeltenlabs");
        picker.update(Message::ProjectsLoaded(Ok(projects(n))));
        picker
    }

    #[test]
    fn starts_loading_and_requests_projects() {
        let picker = PickerScreen::new("zeltenlabs");
        assert_eq!(picker.state(), &PickerState::Loading);
        assert_eq!(
            picker.init(),
            Command::LoadProjects {
                organization: "zeltenlabs".to_string()
            }
        );
    }

    #[test]
    fn success_loads_projects_in_order() {
        let picker = loaded(3);
        let titles: Vec<_> = picker.projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Project 0", "Project 1", "Project 2"]);
        assert_eq!(picker.cursor(), Some(0));
    }

    #[test]
    fn failure_shows_error_with_no_projects() {
        let mut picker = PickerScreen::new("zeltenlabs");
        picker.update(Message::ProjectsLoaded(Err(FetchError::new("connection refused"))));

        assert_eq!(
            picker.state(),
            &PickerState::Error(FetchError::new("connection refused"))
        );
        assert!(picker.projects().is_empty());
        assert!(picker.handoff().is_none());
    }

    #[test]
    fn cursor_clamps_at_bottom() {
        let mut picker = loaded(3);
        for _ in 0..5 {
            picker.update(Message::NavigateDown);
        }
        assert_eq!(picker.cursor(), Some(2));
    }

    #[test]
    fn cursor_clamps_at_top() {
        let mut picker = loaded(3);
        picker.update(Message::NavigateDown);
        picker.update(Message::NavigateUp);
        picker.update(Message::NavigateUp);
        assert_eq!(picker.cursor(), Some(0));
    }

    #[test]
    fn cursor_stays_zero_on_empty_list() {
        let mut picker = loaded(0);
        picker.update(Message::NavigateDown);
        assert_eq!(picker.cursor(), Some(0));
        assert!(picker.selected().is_none());
    }

    #[test]
    fn navigation_while_loading_is_ignored() {
        let mut picker = PickerScreen::new("zeltenlabs");
        picker.update(Message::NavigateDown);
        assert_eq!(picker.state(), &PickerState::Loading);
    }

    #[test]
    fn late_project_list_is_ignored() {
        let mut picker = loaded(2);
        picker.update(Message::ProjectsLoaded(Ok(projects(5))));
        assert_eq!(picker.projects().len(), 2);
    }

    #[test]
    fn later_failure_replaces_loaded_list() {
        let mut picker = loaded(2);
        picker.update(Message::NavigateDown);
        picker.update(Message::ProjectsLoaded(Err(FetchError::new("late"))));

        assert_eq!(picker.state(), &PickerState::Error(FetchError::new("late")));
        assert!(picker.projects().is_empty());
        assert!(picker.handoff().is_none());

        let content = render_to_string(40, 3, |area, buf| picker.render(area, buf));
        assert!(content.starts_with("Error: late"));
    }

    #[test]
    fn handoff_carries_selection_and_viewport() {
        let mut picker = loaded(3);
        picker.update(Message::Resize {
            width: 100,
            height: 40,
        });
        picker.update(Message::NavigateDown);

        let (project, viewport) = picker.handoff().unwrap();
        assert_eq!(project, ProjectSummary::new("PVT_1", "Project 1"));
        assert_eq!(viewport, Viewport::from_terminal(100, 40));
    }

    #[test]
    fn resize_keeps_data() {
        let mut picker = loaded(3);
        picker.update(Message::NavigateDown);
        picker.update(Message::Resize {
            width: 50,
            height: 20,
        });

        assert_eq!(picker.viewport(), Viewport::from_terminal(50, 20));
        assert_eq!(picker.cursor(), Some(1));
        assert_eq!(picker.projects().len(), 3);
    }

    #[test]
    fn render_each_state() {
        let picker = PickerScreen::new("zeltenlabs");
        let content = render_to_string(30, 3, |area, buf| picker.render(area, buf));
        assert!(content.starts_with("Loading..."));

        let picker = loaded(2);
        let content = render_to_string(30, 3, |area, buf| picker.render(area, buf));
        assert!(content.starts_with("> Project 0\n  Project 1\n"));

        let mut picker = PickerScreen::new("zeltenlabs");
        picker.update(Message::ProjectsLoaded(Err(FetchError::new("boom"))));
        let content = render_to_string(30, 3, |area, buf| picker.render(area, buf));
        assert!(content.starts_with("Error: boom"));
    }

    proptest! {
        #[test]
        fn cursor_always_in_bounds(
            len in 1usize..10,
            moves in proptest::collection::vec(any::<bool>(), 0..30),
        ) {
            let mut picker = loaded(len);
            for down in moves {
                picker.update(if down { Message::NavigateDown } else { Message::NavigateUp });
            }
            let cursor = picker.cursor().unwrap();
            prop_assert!(cursor < len);
        }
    }
}
