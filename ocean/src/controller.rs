//! User intents -> backend calls -> state events.
//!
//! The controller reads the store, awaits the gateway and dispatches the
//! outcome, so a slow reply is applied whenever it lands (replace-by-index,
//! no revision check). The one exception is a session reset: every reset bumps
//! the session epoch, and replies started under an older epoch are dropped.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use shared_types::{Credentials, DocType, Feedback};

use crate::api::{self, AuthMode};
use crate::error::{ClientError, ClientResult};
use crate::export::ExportArtifact;
use crate::gateway::{Gateway, SessionHandle, Transport};
use crate::session::{Session, SessionStorage, StoredSession};
use crate::state::{OperationKey, StateEvent, View};
use crate::store::StateStore;

pub struct Controller<T, S, P> {
    gateway: Rc<Gateway<T>>,
    store: S,
    storage: P,
    /// Bumped on every reset; shared by all clones
    session_epoch: Rc<Cell<u64>>,
}

impl<T, S: Clone, P: Clone> Clone for Controller<T, S, P> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            store: self.store.clone(),
            storage: self.storage.clone(),
            session_epoch: Rc::clone(&self.session_epoch),
        }
    }
}

impl<T, S, P> SessionHandle for Controller<T, S, P>
where
    T: Transport,
    S: StateStore,
    P: SessionStorage,
{
    fn token(&self) -> Option<String> {
        self.store
            .read(|state| state.session.token().map(str::to_string))
    }

    fn invalidate(&self) {
        tracing::info!("Session invalidated by server");
        self.reset();
    }
}

impl<T, S, P> Controller<T, S, P>
where
    T: Transport,
    S: StateStore,
    P: SessionStorage,
{
    pub fn new(gateway: Gateway<T>, store: S, storage: P) -> Self {
        Self {
            gateway: Rc::new(gateway),
            store,
            storage,
            session_epoch: Rc::new(Cell::new(0)),
        }
    }

    // ── Session lifecycle ────────────────────────────────────────────────────

    /// Adopt a persisted session, if any. Returns whether one was found.
    pub fn restore(&self) -> bool {
        match self.storage.load() {
            Some(stored) if !stored.token.is_empty() => {
                tracing::info!(email = %stored.email, "Restored session");
                self.store.dispatch(StateEvent::SignedIn(Session::from(stored)));
                true
            }
            _ => false,
        }
    }

    /// Restore, then fetch the project list when a session exists.
    pub async fn start(&self) {
        if self.restore() {
            self.load_projects().await;
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<()> {
        self.authenticate(AuthMode::Login, email, password).await
    }

    pub async fn register(&self, email: &str, password: &str) -> ClientResult<()> {
        self.authenticate(AuthMode::Register, email, password).await
    }

    pub async fn authenticate(&self, mode: AuthMode, email: &str, password: &str) -> ClientResult<()> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Email and password required".to_string(),
            ));
        }

        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let reply = self
            .tracked(
                OperationKey::Auth,
                api::authenticate(&self.gateway, mode, &credentials),
            )
            .await?;

        let session = Session::authenticated(reply.token.clone(), reply.email.clone());
        if !session.is_authenticated() {
            return Err(ClientError::Auth("Auth failed".to_string()));
        }
        self.storage.save(&StoredSession {
            token: reply.token,
            email: reply.email,
        });
        tracing::info!(email = %session.email(), ?mode, "Signed in");
        self.store.dispatch(StateEvent::SignedIn(session));

        self.load_projects().await;
        Ok(())
    }

    /// Unconditional reset: storage, session, projects, editor.
    pub fn logout(&self) {
        tracing::info!("Signed out");
        self.reset();
    }

    fn reset(&self) {
        self.session_epoch.set(self.session_epoch.get() + 1);
        self.storage.clear();
        self.store.dispatch(StateEvent::SignedOut);
    }

    // ── Project collection ───────────────────────────────────────────────────

    /// Replace the collection with the server's list. Failures keep the old one.
    pub async fn load_projects(&self) {
        if !self.is_authenticated() {
            return;
        }
        let epoch = self.session_epoch.get();
        let result = self
            .tracked(
                OperationKey::LoadProjects,
                api::list_projects(&self.gateway, self),
            )
            .await;
        match result {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "Loaded projects");
                self.dispatch_in(epoch, StateEvent::ProjectsLoaded(projects));
            }
            Err(e) => tracing::warn!(error = %e, "Load failed"),
        }
    }

    /// Create, outline, open, then generate the first section.
    /// Returns the new project's id.
    pub async fn create_project(&self, topic: &str, doc_type: DocType) -> ClientResult<String> {
        if topic.trim().is_empty() {
            return Err(ClientError::Validation("Please enter a topic".to_string()));
        }

        let epoch = self.session_epoch.get();
        let project = self
            .tracked(OperationKey::CreateProject, async {
                let mut project =
                    api::create_project(&self.gateway, self, topic, doc_type).await?;
                project.sections = api::generate_outline(&self.gateway, self, &project.id).await?;
                Ok::<_, ClientError>(project)
            })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Create failed");
                e
            })?;

        let project_id = project.id.clone();
        tracing::info!(
            project_id = %project_id,
            sections = project.sections.len(),
            "Project created"
        );
        if !self.dispatch_in(epoch, StateEvent::ProjectCreated(project)) {
            return Ok(project_id);
        }

        // Failure here is already logged and does not undo the creation.
        let _ = self.generate_section(&project_id, 0).await;
        Ok(project_id)
    }

    pub fn open_project(&self, project_id: &str) {
        self.store
            .dispatch(StateEvent::ProjectOpened(project_id.to_string()));
    }

    /// Re-read one project from the server into the collection and the open copy.
    pub async fn refresh_project(&self, project_id: &str) {
        let epoch = self.session_epoch.get();
        match api::fetch_project(&self.gateway, self, project_id).await {
            Ok(project) => {
                self.dispatch_in(epoch, StateEvent::ProjectSynced(project));
            }
            Err(e) => tracing::warn!(project_id, error = %e, "Refresh failed"),
        }
    }

    pub fn show(&self, view: View) {
        self.store.dispatch(StateEvent::ViewChanged(view));
    }

    // ── Editor ───────────────────────────────────────────────────────────────

    /// Make `index` the active section of the open project and make sure it
    /// has content.
    pub async fn select_section(&self, index: usize) -> ClientResult<()> {
        self.store.dispatch(StateEvent::SectionSelected(index));
        let Some(project_id) = self.open_project_id() else {
            return Ok(());
        };
        self.generate_section(&project_id, index).await
    }

    /// No request is made when the section already holds generated content,
    /// when the same section is already generating, or when it does not exist.
    pub async fn generate_section(&self, project_id: &str, index: usize) -> ClientResult<()> {
        let key = OperationKey::GenerateSection {
            project_id: project_id.to_string(),
            index,
        };
        let needed = self.store.read(|state| {
            match state.project(project_id).and_then(|p| p.section(index)) {
                Some(section) => !section.has_generated_content() && !state.is_pending(&key),
                None => false,
            }
        });
        if !needed {
            return Ok(());
        }

        let epoch = self.session_epoch.get();
        let content = self
            .tracked(
                key,
                api::generate_section(&self.gateway, self, project_id, index),
            )
            .await
            .map_err(|e| {
                tracing::error!(project_id, index, error = %e, "Section generation failed");
                e
            })?;

        self.dispatch_in(
            epoch,
            StateEvent::SectionGenerated {
                project_id: project_id.to_string(),
                index,
                content,
            },
        );
        Ok(())
    }

    /// Rewrite a section with a free-text instruction. `generated` is untouched.
    pub async fn refine_section(
        &self,
        project_id: &str,
        index: usize,
        instruction: &str,
    ) -> ClientResult<()> {
        if instruction.is_empty() || self.open_project_id().is_none() {
            return Ok(());
        }

        let key = OperationKey::RefineSection {
            project_id: project_id.to_string(),
            index,
        };
        let epoch = self.session_epoch.get();
        let content = self
            .tracked(
                key,
                api::refine_section(&self.gateway, self, project_id, index, instruction),
            )
            .await
            .map_err(|e| {
                tracing::error!(project_id, index, error = %e, "Refine failed");
                e
            })?;

        self.dispatch_in(
            epoch,
            StateEvent::SectionRefined {
                project_id: project_id.to_string(),
                index,
                content,
            },
        );
        Ok(())
    }

    /// Save the full section list. Failures are logged only and local state
    /// is kept as is.
    pub async fn persist(&self, project_id: &str) {
        let Some(sections) = self
            .store
            .read(|state| state.project(project_id).map(|p| p.sections.clone()))
        else {
            return;
        };
        if let Err(e) = api::save_sections(&self.gateway, self, project_id, &sections).await {
            tracing::warn!(project_id, error = %e, "Auto-save failed");
        }
    }

    pub async fn add_comment(&self, project_id: &str, index: usize, text: &str) {
        if text.is_empty() || !self.section_exists(project_id, index) {
            return;
        }
        self.store.dispatch(StateEvent::CommentAdded {
            project_id: project_id.to_string(),
            index,
            text: text.to_string(),
        });
        self.persist(project_id).await;
    }

    pub async fn toggle_feedback(&self, project_id: &str, index: usize, kind: Feedback) {
        if !self.section_exists(project_id, index) {
            return;
        }
        self.store.dispatch(StateEvent::FeedbackToggled {
            project_id: project_id.to_string(),
            index,
            kind,
        });
        self.persist(project_id).await;
    }

    pub async fn export_project(&self, project_id: &str) -> ClientResult<ExportArtifact> {
        let project = self
            .store
            .read(|state| state.project(project_id).cloned())
            .ok_or_else(|| ClientError::UnknownProject(project_id.to_string()))?;

        let payload = self
            .tracked(
                OperationKey::Export {
                    project_id: project_id.to_string(),
                },
                api::export_project(&self.gateway, self, project_id),
            )
            .await
            .map_err(|e| {
                tracing::error!(project_id, error = %e, "Export failed");
                e
            })?;

        let artifact = ExportArtifact::for_project(&project, payload.content_type, payload.bytes);
        tracing::info!(
            filename = %artifact.filename,
            bytes = artifact.bytes.len(),
            "Export ready"
        );
        Ok(artifact)
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn is_authenticated(&self) -> bool {
        self.store.read(|state| state.session.is_authenticated())
    }

    fn open_project_id(&self) -> Option<String> {
        self.store
            .read(|state| state.current.as_ref().map(|p| p.id.clone()))
    }

    fn section_exists(&self, project_id: &str, index: usize) -> bool {
        self.store.read(|state| {
            state
                .project(project_id)
                .is_some_and(|p| p.section(index).is_some())
        })
    }

    /// Dispatches `event` only if no reset happened since `epoch` was read.
    fn dispatch_in(&self, epoch: u64, event: StateEvent) -> bool {
        if self.session_epoch.get() != epoch {
            tracing::debug!(?event, "Dropping reply from a previous session");
            return false;
        }
        self.store.dispatch(event);
        true
    }

    /// Marks `key` pending for the duration of `fut`. If the session was reset
    /// meanwhile (logout, 401) the state has been wiped and nothing is recorded.
    async fn tracked<R, F>(&self, key: OperationKey, fut: F) -> ClientResult<R>
    where
        F: Future<Output = ClientResult<R>>,
    {
        let epoch = self.session_epoch.get();
        self.store
            .dispatch(StateEvent::OperationStarted(key.clone()));
        let result = fut.await;
        self.dispatch_in(
            epoch,
            StateEvent::OperationFinished {
                key,
                error: result.as_ref().err().map(|e| e.to_string()),
            },
        );
        result
    }
}
