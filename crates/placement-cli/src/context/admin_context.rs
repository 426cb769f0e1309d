use anyhow::Context;
use placement_auth::{
    CredentialVerifier, DemoCredentials, RestSessionService, SessionGate, SessionService,
};
use placement_config::PlacementConfig;
use placement_core::entities::{Job, NewJob, SessionUser};
use placement_store::updates::JobUpdate;
use placement_store::{RecordStore, RestBackend, StoreError, TableBackend};

/// Admin-side state shared by every command handler.
///
/// Holds the logged-in admin and the cached job list. Local state only moves
/// after the backend call it mirrors has succeeded.
pub struct AdminContext<
    B: TableBackend = RestBackend,
    S: SessionService = RestSessionService,
    V: CredentialVerifier = DemoCredentials,
> {
    pub store: RecordStore<B>,
    pub gate: SessionGate<S, V>,
    pub config: PlacementConfig,
    session_user: Option<SessionUser>,
    jobs: Vec<Job>,
    loading: bool,
}

impl AdminContext {
    /// Build the production store and gate from config, then [`Self::init`].
    pub async fn connect(config: PlacementConfig) -> anyhow::Result<Self> {
        let backend = config.require_backend()?;
        let store = RecordStore::from_config(backend).context("failed to build record store")?;
        let gate = SessionGate::from_config(backend).context("failed to build session gate")?;
        Ok(Self::init(store, gate, config).await)
    }
}

impl<B: TableBackend, S: SessionService, V: CredentialVerifier> AdminContext<B, S, V> {
    /// Resolve the current session and load all jobs concurrently.
    ///
    /// Either fetch failing leaves its default in place (no user, no jobs).
    pub async fn init(
        store: RecordStore<B>,
        gate: SessionGate<S, V>,
        config: PlacementConfig,
    ) -> Self {
        store.set_access_token(gate.access_token());

        let mut ctx = Self {
            store,
            gate,
            config,
            session_user: None,
            jobs: Vec::new(),
            loading: true,
        };

        let (session_user, jobs) =
            tokio::join!(ctx.gate.get_current_user(), ctx.store.list_jobs());
        if session_user.is_none() {
            ctx.store.set_access_token(None);
        }
        tracing::debug!(
            authenticated = session_user.is_some(),
            jobs = jobs.len(),
            "admin context ready"
        );
        ctx.session_user = session_user;
        ctx.jobs = jobs;
        ctx.loading = false;
        ctx
    }

    #[must_use]
    pub const fn session_user(&self) -> Option<&SessionUser> {
        self.session_user.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session_user.is_some()
    }

    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    #[cfg_attr(not(test), allow(dead_code))]
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` and records the admin on success.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        let Some(user) = self.gate.login(username, password).await else {
            return false;
        };
        self.store.set_access_token(self.gate.access_token());
        self.session_user = Some(user);
        true
    }

    pub async fn logout(&mut self) {
        self.gate.logout().await;
        self.store.set_access_token(None);
        self.session_user = None;
    }

    /// Create a job and put it at the front of the cached list.
    ///
    /// # Errors
    ///
    /// Returns the store error; the cached list is untouched.
    pub async fn add_job(&mut self, job: &NewJob) -> Result<Job, StoreError> {
        let created = self.store.create_job(job).await?;
        self.jobs.insert(0, created.clone());
        Ok(created)
    }

    /// Patch a job and replace the cached copy in place.
    ///
    /// # Errors
    ///
    /// Returns the store error; the cached list is untouched.
    pub async fn update_job(&mut self, id: &str, update: &JobUpdate) -> Result<Job, StoreError> {
        let updated = self.store.update_job(id, update).await?;
        if let Some(slot) = self.jobs.iter_mut().find(|job| job.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Returns the store's verdict; the cached copy is dropped only on `true`.
    pub async fn delete_job(&mut self, id: &str) -> bool {
        let deleted = self.store.delete_job(id).await;
        if deleted {
            self.jobs.retain(|job| job.id != id);
        }
        deleted
    }

    /// Look a job up in the cached list without touching the backend.
    #[must_use]
    pub fn get_job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Replace the cached list with a fresh fetch.
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn refresh_jobs(&mut self) {
        self.loading = true;
        self.jobs = self.store.list_jobs().await;
        self.loading = false;
    }

    /// End the context's lifecycle.
    pub fn shutdown(self) {
        tracing::debug!(jobs = self.jobs.len(), "admin context shut down");
    }
}

#[cfg(test)]
mod tests {
    use placement_auth::{MemorySessionService, TokenStore};
    use placement_core::enums::{AdminRole, DegreeLevel};
    use placement_store::MemoryBackend;
    use placement_store::updates::JobUpdateBuilder;
    use pretty_assertions::assert_eq;

    use super::*;

    type TestContext = AdminContext<MemoryBackend, MemorySessionService, DemoCredentials>;

    fn gate() -> SessionGate<MemorySessionService> {
        SessionGate::new(
            MemorySessionService::new(),
            DemoCredentials,
            TokenStore::disabled(),
        )
    }

    fn new_job(title: &str) -> NewJob {
        NewJob {
            title: title.into(),
            company: "Acme".into(),
            location: "Pune".into(),
            degree_level: DegreeLevel::Bachelor,
            requirements: vec!["Rust".into()],
            description: "Build things".into(),
            salary_range: "6-8 LPA".into(),
            application_url: String::new(),
        }
    }

    async fn context() -> TestContext {
        AdminContext::init(
            RecordStore::new(MemoryBackend::new()),
            gate(),
            PlacementConfig::default(),
        )
        .await
    }

    #[tokio::test]
    async fn init_loads_jobs_newest_first() {
        let store = RecordStore::new(MemoryBackend::new());
        store.create_job(&new_job("First")).await.unwrap();
        store.create_job(&new_job("Second")).await.unwrap();

        let ctx = AdminContext::init(store, gate(), PlacementConfig::default()).await;
        assert!(!ctx.is_loading());
        assert!(!ctx.is_authenticated());
        let titles: Vec<&str> = ctx.jobs().iter().map(|job| job.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn init_with_unavailable_store_starts_empty() {
        let backend = MemoryBackend::new();
        backend.set_unavailable(true);
        let ctx =
            AdminContext::init(RecordStore::new(backend), gate(), PlacementConfig::default())
                .await;
        assert!(ctx.jobs().is_empty());
        assert!(!ctx.is_loading());
    }

    #[tokio::test]
    async fn add_job_prepends() {
        let mut ctx = context().await;
        ctx.add_job(&new_job("Old")).await.unwrap();
        let created = ctx.add_job(&new_job("New")).await.unwrap();

        assert_eq!(ctx.jobs().len(), 2);
        assert_eq!(ctx.jobs()[0], created);
        assert_eq!(ctx.get_job(&created.id), Some(&created));
    }

    #[tokio::test]
    async fn failed_add_leaves_jobs_unchanged() {
        let mut ctx = context().await;
        ctx.add_job(&new_job("Kept")).await.unwrap();
        let before = ctx.jobs().to_vec();

        ctx.store.backend().set_unavailable(true);
        assert!(ctx.add_job(&new_job("Lost")).await.is_err());
        assert_eq!(ctx.jobs(), before.as_slice());
    }

    #[tokio::test]
    async fn update_job_replaces_in_place() {
        let mut ctx = context().await;
        let first = ctx.add_job(&new_job("A")).await.unwrap();
        ctx.add_job(&new_job("B")).await.unwrap();

        let update = JobUpdateBuilder::new().title("A, revised").build();
        let updated = ctx.update_job(&first.id, &update).await.unwrap();

        assert_eq!(updated.title, "A, revised");
        assert_eq!(updated.company, first.company);
        assert_eq!(ctx.jobs()[1], updated);
        assert_eq!(ctx.jobs()[0].title, "B");
    }

    #[tokio::test]
    async fn failed_update_leaves_jobs_unchanged() {
        let mut ctx = context().await;
        let job = ctx.add_job(&new_job("A")).await.unwrap();
        let update = JobUpdateBuilder::new().title("nope").build();

        assert!(ctx.update_job("jobs-999", &update).await.is_err());
        ctx.store.backend().set_unavailable(true);
        assert!(ctx.update_job(&job.id, &update).await.is_err());
        assert_eq!(ctx.jobs(), &[job]);
    }

    #[tokio::test]
    async fn delete_job_removes_only_on_success() {
        let mut ctx = context().await;
        let keep = ctx.add_job(&new_job("Keep")).await.unwrap();
        let drop = ctx.add_job(&new_job("Drop")).await.unwrap();

        assert!(ctx.delete_job(&drop.id).await);
        assert_eq!(ctx.jobs(), &[keep.clone()]);

        ctx.store.backend().set_unavailable(true);
        assert!(!ctx.delete_job(&keep.id).await);
        assert_eq!(ctx.jobs(), &[keep]);
    }

    #[tokio::test]
    async fn refresh_picks_up_remote_changes() {
        let mut ctx = context().await;
        ctx.store.create_job(&new_job("Remote")).await.unwrap();
        assert!(ctx.jobs().is_empty());

        ctx.refresh_jobs().await;
        assert_eq!(ctx.jobs().len(), 1);
    }

    #[tokio::test]
    async fn login_with_demo_credentials_yields_admin() {
        let mut ctx = context().await;
        assert!(ctx.login("admin", "admin123").await);

        let user = ctx.session_user().expect("logged in");
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, AdminRole::Admin);
        assert!(ctx.store.backend().access_token().is_some());
    }

    #[tokio::test]
    async fn wrong_credentials_are_rejected() {
        let mut ctx = context().await;
        assert!(!ctx.login("admin", "wrong").await);
        assert!(!ctx.login("root", "admin123").await);
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.gate.sessions().sign_up_count(), 0);
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let mut ctx = context().await;
        assert!(ctx.login("admin", "admin123").await);

        ctx.logout().await;
        assert!(!ctx.is_authenticated());
        assert!(ctx.store.backend().access_token().is_none());
        assert!(ctx.gate.access_token().is_none());
    }

    #[tokio::test]
    async fn stored_session_is_restored_on_init() {
        let mut first = context().await;
        assert!(first.login("admin", "admin123").await);
        let AdminContext {
            store, gate, config, ..
        } = first;

        let ctx = AdminContext::init(store, gate, config).await;
        assert_eq!(
            ctx.session_user().map(|user| user.role),
            Some(AdminRole::Admin)
        );
    }

    #[tokio::test]
    async fn dead_stored_token_is_not_sent_to_the_store() {
        let tokens = TokenStore::disabled();
        tokens.store("not-a-live-session").unwrap();
        let gate = SessionGate::new(MemorySessionService::new(), DemoCredentials, tokens);

        let ctx = AdminContext::init(
            RecordStore::new(MemoryBackend::new()),
            gate,
            PlacementConfig::default(),
        )
        .await;
        assert!(!ctx.is_authenticated());
        assert!(ctx.store.backend().access_token().is_none());
    }
}
