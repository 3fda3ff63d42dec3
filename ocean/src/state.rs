//! Application state and its reducer.
//!
//! All mutation goes through [`AppState::apply`]. Handlers never poke fields
//! directly; they compute an event and hand it to the store, which keeps the
//! open project and its collection entry in step.

use std::collections::BTreeMap;

use shared_types::{Feedback, Project, Section};

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Wizard,
    Editor,
}

/// What actually gets rendered, derived from session + view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Dashboard,
    Wizard,
    Editor,
    Loading,
}

/// Identity of an in-flight operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperationKey {
    Auth,
    LoadProjects,
    CreateProject,
    GenerateSection { project_id: String, index: usize },
    RefineSection { project_id: String, index: usize },
    Export { project_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Pending,
    Succeeded,
    Failed(String),
}

/// Per-section lifecycle as seen by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPhase {
    Empty,
    Generating,
    Generated,
    Refining,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    SignedIn(Session),
    /// Logout or server-side invalidation; wipes everything
    SignedOut,
    ProjectsLoaded(Vec<Project>),
    ProjectCreated(Project),
    ProjectOpened(String),
    /// Server copy of one project replaces the local copies
    ProjectSynced(Project),
    ViewChanged(View),
    SectionSelected(usize),
    SectionGenerated {
        project_id: String,
        index: usize,
        content: String,
    },
    SectionRefined {
        project_id: String,
        index: usize,
        content: String,
    },
    CommentAdded {
        project_id: String,
        index: usize,
        text: String,
    },
    FeedbackToggled {
        project_id: String,
        index: usize,
        kind: Feedback,
    },
    OperationStarted(OperationKey),
    OperationFinished {
        key: OperationKey,
        error: Option<String>,
    },
}

impl StateEvent {
    /// Events carrying account data; meaningless without a session
    fn needs_session(&self) -> bool {
        matches!(
            self,
            StateEvent::ProjectsLoaded(_)
                | StateEvent::ProjectCreated(_)
                | StateEvent::ProjectSynced(_)
                | StateEvent::SectionGenerated { .. }
                | StateEvent::SectionRefined { .. }
                | StateEvent::CommentAdded { .. }
                | StateEvent::FeedbackToggled { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub session: Session,
    pub projects: Vec<Project>,
    /// Checked-out copy of a collection entry
    pub current: Option<Project>,
    pub view: View,
    pub active_section: usize,
    pub operations: BTreeMap<OperationKey, OperationStatus>,
}

impl AppState {
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, event: StateEvent) {
        if event.needs_session() && !self.session.is_authenticated() {
            return;
        }
        match event {
            StateEvent::SignedIn(session) => {
                self.session = session;
                self.view = View::Dashboard;
            }
            StateEvent::SignedOut => {
                *self = AppState::default();
            }
            StateEvent::ProjectsLoaded(projects) => {
                self.projects = projects;
            }
            StateEvent::ProjectCreated(project) => {
                self.projects.retain(|p| p.id != project.id);
                self.projects.insert(0, project.clone());
                self.current = Some(project);
                self.active_section = 0;
                self.view = View::Editor;
            }
            StateEvent::ProjectOpened(project_id) => {
                if let Some(project) = self.projects.iter().find(|p| p.id == project_id) {
                    self.current = Some(project.clone());
                    self.active_section = 0;
                    self.view = View::Editor;
                }
            }
            StateEvent::ProjectSynced(project) => {
                if let Some(current) = self.current.as_mut().filter(|p| p.id == project.id) {
                    *current = project.clone();
                    if self.active_section >= current.sections.len() {
                        self.active_section = 0;
                    }
                }
                match self.projects.iter_mut().find(|p| p.id == project.id) {
                    Some(entry) => *entry = project,
                    None => self.projects.insert(0, project),
                }
            }
            StateEvent::ViewChanged(view) => {
                self.view = view;
            }
            StateEvent::SectionSelected(index) => {
                let in_range = self
                    .current
                    .as_ref()
                    .is_some_and(|p| index < p.sections.len());
                if in_range {
                    self.active_section = index;
                }
            }
            StateEvent::SectionGenerated {
                project_id,
                index,
                content,
            } => {
                self.update_section(&project_id, index, |section| {
                    section.content = content.clone();
                    section.generated = true;
                });
            }
            StateEvent::SectionRefined {
                project_id,
                index,
                content,
            } => {
                self.update_section(&project_id, index, |section| {
                    section.content = content.clone();
                });
            }
            StateEvent::CommentAdded {
                project_id,
                index,
                text,
            } => {
                self.update_section(&project_id, index, |section| {
                    section.comments.push(text.clone());
                });
            }
            StateEvent::FeedbackToggled {
                project_id,
                index,
                kind,
            } => {
                self.update_section(&project_id, index, |section| {
                    section.feedback = Feedback::toggle(section.feedback, kind);
                });
            }
            StateEvent::OperationStarted(key) => {
                self.operations.insert(key, OperationStatus::Pending);
            }
            StateEvent::OperationFinished { key, error } => {
                let status = match error {
                    Some(message) => OperationStatus::Failed(message),
                    None => OperationStatus::Succeeded,
                };
                self.operations.insert(key, status);
            }
        }
    }

    /// Applies `f` to the section in the open project and in the collection.
    fn update_section(&mut self, project_id: &str, index: usize, f: impl Fn(&mut Section)) {
        if let Some(current) = self.current.as_mut().filter(|p| p.id == project_id) {
            if let Some(section) = current.section_mut(index) {
                f(section);
            }
        }
        if let Some(entry) = self.projects.iter_mut().find(|p| p.id == project_id) {
            if let Some(section) = entry.section_mut(index) {
                f(section);
            }
        }
    }

    pub fn screen(&self) -> Screen {
        if !self.session.is_authenticated() {
            return Screen::Auth;
        }
        match self.view {
            View::Dashboard => Screen::Dashboard,
            View::Wizard => Screen::Wizard,
            View::Editor if self.current.is_some() => Screen::Editor,
            View::Editor => Screen::Loading,
        }
    }

    /// Latest known copy of a project, preferring the open one.
    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.current
            .as_ref()
            .filter(|p| p.id == project_id)
            .or_else(|| self.projects.iter().find(|p| p.id == project_id))
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.current.as_ref()?.section(self.active_section)
    }

    /// Any operation in flight. Drives the global button disabling.
    pub fn is_loading(&self) -> bool {
        self.operations
            .values()
            .any(|status| *status == OperationStatus::Pending)
    }

    pub fn is_pending(&self, key: &OperationKey) -> bool {
        self.operations.get(key) == Some(&OperationStatus::Pending)
    }

    pub fn section_phase(&self, project_id: &str, index: usize) -> Option<SectionPhase> {
        let section = self.project(project_id)?.section(index)?;
        let key_generate = OperationKey::GenerateSection {
            project_id: project_id.to_string(),
            index,
        };
        let key_refine = OperationKey::RefineSection {
            project_id: project_id.to_string(),
            index,
        };
        let phase = if self.is_pending(&key_refine) {
            SectionPhase::Refining
        } else if self.is_pending(&key_generate) {
            SectionPhase::Generating
        } else if section.has_generated_content() {
            SectionPhase::Generated
        } else {
            SectionPhase::Empty
        };
        Some(phase)
    }
}
