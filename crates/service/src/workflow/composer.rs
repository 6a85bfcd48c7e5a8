use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use super::errors::WorkflowError;
use crate::appointment::{AppointmentRepository, CreateAppointmentRequest, LineItem, LineItemRequest};
use crate::catalog::{ServiceCatalogRepository, ServiceModel, ServiceService};
use crate::notification::Notification;
use crate::status::{StatusModel, StatusRepository, StatusService};
use crate::vehicle::VehicleDetails;

pub const SELECT_SERVICE_MESSAGE: &str = "Select a Service";
pub const SELECT_AT_LEAST_ONE_MESSAGE: &str = "Select at least one service...";

/// Observable state of the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    Idle,
    Loading,
    /// Reference data loaded, nothing picked or chosen.
    Ready,
    /// A candidate service is picked but not added yet.
    Composing,
    HasSelections,
    Submitting,
    Saved(i32),
    ValidationError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Loading,
    Editing,
    Submitting,
    Saved(i32),
    Invalid,
}

/// A chosen line: position in `catalog` plus what the operator entered.
#[derive(Debug, Clone)]
struct Chosen {
    catalog_idx: usize,
    price: Decimal,
    notes: Option<String>,
}

/// Builds one appointment request from the service catalog.
///
/// The selectable pool and the chosen list are both views over `catalog`:
/// an entry is in the pool exactly when no `Chosen` points at it.
///
/// # Examples
/// ```
/// use service::workflow::{AppointmentComposer, ComposerState};
/// use service::catalog::{ServiceModel, ServiceService};
/// use service::catalog::repository::mock::MockServiceCatalogRepository;
/// use service::status::StatusService;
/// use service::status::repository::mock::MockStatusRepository;
/// use service::vehicle::VehicleDetails;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let services = ServiceService::new(Arc::new(MockServiceCatalogRepository::with(vec![
///     ServiceModel { service_id: 1, service_name: "Oil Change".into(), price: Decimal::new(2999, 2), description: None },
/// ])));
/// let statuses = StatusService::new(Arc::new(MockStatusRepository::seeded()));
/// let vehicle = VehicleDetails {
///     vehicle_id: 3, client_id: 1, year: 2012, make: "Honda".into(), model: "Civic".into(),
///     first_name: "Jane".into(), last_name: "Doe".into(),
/// };
///
/// let mut composer = AppointmentComposer::new();
/// tokio_test::block_on(composer.open(vehicle, &services, &statuses)).unwrap();
/// composer.pick(1).unwrap();
/// composer.add().unwrap();
/// assert_eq!(composer.state(), ComposerState::HasSelections);
/// assert_eq!(composer.total(), Decimal::new(2999, 2));
/// ```
#[derive(Debug)]
pub struct AppointmentComposer {
    phase: Phase,
    vehicle: Option<VehicleDetails>,
    catalog: Vec<ServiceModel>,
    statuses: Vec<StatusModel>,
    chosen: Vec<Chosen>,
    // picker fields; 0 means nothing picked
    candidate: i32,
    price: Decimal,
    item_notes: String,
    notes: String,
    status_id: i32,
    errors: Vec<Notification>,
}

impl Default for AppointmentComposer {
    fn default() -> Self { Self::new() }
}

impl AppointmentComposer {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            vehicle: None,
            catalog: Vec::new(),
            statuses: Vec::new(),
            chosen: Vec::new(),
            candidate: 0,
            price: Decimal::ZERO,
            item_notes: String::new(),
            notes: String::new(),
            status_id: models::status::DEFAULT_STATUS_ID,
            errors: Vec::new(),
        }
    }

    pub fn state(&self) -> ComposerState {
        match self.phase {
            Phase::Idle => ComposerState::Idle,
            Phase::Loading => ComposerState::Loading,
            Phase::Submitting => ComposerState::Submitting,
            Phase::Saved(id) => ComposerState::Saved(id),
            Phase::Invalid => ComposerState::ValidationError,
            Phase::Editing if self.candidate != 0 => ComposerState::Composing,
            Phase::Editing if !self.chosen.is_empty() => ComposerState::HasSelections,
            Phase::Editing => ComposerState::Ready,
        }
    }

    /// Start composing for `vehicle`. Catalog and statuses load concurrently;
    /// if either fails nothing is kept and the composer stays idle.
    #[instrument(skip_all, fields(vehicle_id = vehicle.vehicle_id))]
    pub async fn open<R, S>(
        &mut self,
        vehicle: VehicleDetails,
        services: &ServiceService<R>,
        statuses: &StatusService<S>,
    ) -> Result<(), WorkflowError>
    where
        R: ServiceCatalogRepository,
        S: StatusRepository,
    {
        *self = Self::new();
        self.phase = Phase::Loading;
        let (mut catalog, statuses) = match tokio::try_join!(services.get_all(), statuses.get_all()) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(error = %e, "composer_load_failed");
                self.phase = Phase::Idle;
                return Err(e.into());
            }
        };
        catalog.sort_by(|a, b| a.service_name.cmp(&b.service_name).then(a.service_id.cmp(&b.service_id)));
        self.status_id = statuses
            .iter()
            .find(|s| s.status_id == models::status::DEFAULT_STATUS_ID)
            .or_else(|| statuses.first())
            .map(|s| s.status_id)
            .unwrap_or(models::status::DEFAULT_STATUS_ID);
        debug!(services = catalog.len(), statuses = statuses.len(), "composer_ready");
        self.catalog = catalog;
        self.statuses = statuses;
        self.vehicle = Some(vehicle);
        self.phase = Phase::Editing;
        Ok(())
    }

    pub fn vehicle(&self) -> Option<&VehicleDetails> { self.vehicle.as_ref() }

    pub fn statuses(&self) -> &[StatusModel] { &self.statuses }

    pub fn errors(&self) -> &[Notification] { &self.errors }

    pub fn candidate(&self) -> i32 { self.candidate }

    pub fn price(&self) -> Decimal { self.price }

    pub fn status_id(&self) -> i32 { self.status_id }

    pub fn notes(&self) -> &str { &self.notes }

    fn editable(&mut self) -> Result<(), WorkflowError> {
        match self.phase {
            Phase::Editing => Ok(()),
            // any edit leaves the error state
            Phase::Invalid => {
                self.phase = Phase::Editing;
                Ok(())
            }
            _ => Err(WorkflowError::NotReady(self.state())),
        }
    }

    fn is_chosen(&self, idx: usize) -> bool { self.chosen.iter().any(|c| c.catalog_idx == idx) }

    fn pool_index(&self, service_id: i32) -> Option<usize> {
        self.catalog
            .iter()
            .position(|s| s.service_id == service_id)
            .filter(|idx| !self.is_chosen(*idx))
    }

    /// Services still selectable, sorted by name.
    pub fn pool(&self) -> Vec<&ServiceModel> {
        self.catalog
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.is_chosen(*idx))
            .map(|(_, s)| s)
            .collect()
    }

    /// Chosen services in the order they were added.
    pub fn chosen(&self) -> Vec<LineItem> {
        self.chosen
            .iter()
            .map(|c| {
                let svc = &self.catalog[c.catalog_idx];
                LineItem {
                    service_id: svc.service_id,
                    service_name: svc.service_name.clone(),
                    price: c.price,
                    notes: c.notes.clone(),
                }
            })
            .collect()
    }

    /// Running sum of the chosen prices.
    pub fn total(&self) -> Decimal { self.chosen.iter().map(|c| c.price).sum() }

    /// Select a candidate; its catalog price fills the price field.
    pub fn pick(&mut self, service_id: i32) -> Result<(), WorkflowError> {
        self.editable()?;
        self.candidate = service_id;
        self.price = self
            .pool_index(service_id)
            .map(|idx| self.catalog[idx].price)
            .unwrap_or(Decimal::ZERO);
        Ok(())
    }

    /// Override the auto-populated price of the candidate.
    pub fn set_price(&mut self, price: Decimal) -> Result<(), WorkflowError> {
        self.editable()?;
        self.price = price;
        Ok(())
    }

    pub fn set_item_notes(&mut self, notes: impl Into<String>) -> Result<(), WorkflowError> {
        self.editable()?;
        self.item_notes = notes.into();
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), WorkflowError> {
        self.editable()?;
        self.notes = notes.into();
        Ok(())
    }

    pub fn set_status(&mut self, status_id: i32) -> Result<(), WorkflowError> {
        self.editable()?;
        if !self.statuses.iter().any(|s| s.status_id == status_id) {
            return Err(self.reject(Notification::new("status", "Select a Status")));
        }
        self.status_id = status_id;
        Ok(())
    }

    fn reject(&mut self, n: Notification) -> WorkflowError {
        self.errors.retain(|e| e.key != n.key);
        self.errors.push(n.clone());
        WorkflowError::Validation(n)
    }

    fn clear_error(&mut self, key: &str) { self.errors.retain(|e| e.key != key); }

    /// Move the candidate from the pool into the chosen list.
    pub fn add(&mut self) -> Result<(), WorkflowError> {
        self.editable()?;
        let Some(idx) = (self.candidate != 0).then(|| self.pool_index(self.candidate)).flatten() else {
            return Err(self.reject(Notification::new("service", SELECT_SERVICE_MESSAGE)));
        };
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(self.reject(Notification::new("price", "Price must not be negative")));
        }
        let notes = std::mem::take(&mut self.item_notes);
        let notes = (!notes.trim().is_empty()).then(|| notes.trim().to_string());
        self.chosen.push(Chosen { catalog_idx: idx, price: self.price, notes });
        self.candidate = 0;
        self.price = Decimal::ZERO;
        self.clear_error("service");
        self.clear_error("price");
        self.clear_error("services");
        Ok(())
    }

    /// Return a chosen service to the pool. `false` if it was not chosen.
    pub fn remove(&mut self, service_id: i32) -> Result<bool, WorkflowError> {
        self.editable()?;
        let before = self.chosen.len();
        let catalog = &self.catalog;
        self.chosen.retain(|c| catalog[c.catalog_idx].service_id != service_id);
        Ok(self.chosen.len() != before)
    }

    /// Request that `submit` would send.
    pub fn request(&self) -> Option<CreateAppointmentRequest> {
        let vehicle = self.vehicle.as_ref()?;
        Some(CreateAppointmentRequest {
            vehicle_id: vehicle.vehicle_id,
            status_id: self.status_id,
            notes: self.notes.trim().to_string(),
            services: self
                .chosen
                .iter()
                .map(|c| LineItemRequest {
                    service_id: self.catalog[c.catalog_idx].service_id,
                    price: c.price,
                    notes: c.notes.clone(),
                })
                .collect(),
        })
    }

    /// Persist the appointment. An empty chosen list never reaches the store.
    #[instrument(skip_all, fields(items = self.chosen.len()))]
    pub async fn submit<A: AppointmentRepository + ?Sized>(&mut self, repo: &A) -> Result<i32, WorkflowError> {
        self.editable()?;
        let before = self.phase;
        if self.chosen.is_empty() {
            self.phase = Phase::Invalid;
            return Err(self.reject(Notification::new("services", SELECT_AT_LEAST_ONE_MESSAGE)));
        }
        let Some(req) = self.request() else {
            return Err(WorkflowError::NotReady(self.state()));
        };
        self.phase = Phase::Submitting;
        match repo.create(req).await {
            Ok(id) => {
                info!(appointment_id = id, "appointment_submitted");
                self.errors.clear();
                self.phase = Phase::Saved(id);
                Ok(id)
            }
            Err(e) => {
                warn!(error = %e, "appointment_submit_failed");
                self.phase = before;
                Err(e.into())
            }
        }
    }

    /// Drop everything and go back to idle.
    pub fn cancel(&mut self) { *self = Self::new(); }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::appointment::repository::mock::MockAppointmentRepository;
    use crate::catalog::repository::mock::MockServiceCatalogRepository;
    use crate::status::repository::mock::MockStatusRepository;

    fn svc(id: i32, name: &str, price: Decimal) -> ServiceModel {
        ServiceModel { service_id: id, service_name: name.into(), price, description: None }
    }

    fn civic() -> VehicleDetails {
        VehicleDetails {
            vehicle_id: 7,
            client_id: 1,
            year: 2012,
            make: "Honda".into(),
            model: "Civic".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
        }
    }

    async fn opened(catalog: Vec<ServiceModel>) -> AppointmentComposer {
        let services = ServiceService::new(Arc::new(MockServiceCatalogRepository::with(catalog)));
        let statuses = StatusService::new(Arc::new(MockStatusRepository::seeded()));
        let mut c = AppointmentComposer::new();
        c.open(civic(), &services, &statuses).await.unwrap();
        c
    }

    fn shop() -> Vec<ServiceModel> {
        vec![
            svc(2, "Smog Check", Decimal::new(495, 1)),
            svc(1, "Oil Change", Decimal::new(2999, 2)),
            svc(3, "Brake Inspection", Decimal::new(1500, 2)),
        ]
    }

    fn pool_names(c: &AppointmentComposer) -> Vec<&str> {
        c.pool().into_iter().map(|s| s.service_name.as_str()).collect()
    }

    #[tokio::test]
    async fn add_moves_service_and_submit_sends_snapshot() {
        let mut c = opened(vec![svc(1, "Oil Change", Decimal::new(2999, 2)), svc(2, "Smog Check", Decimal::new(495, 1))]).await;
        assert_eq!(c.state(), ComposerState::Ready);
        assert_eq!(c.status_id(), 1);

        c.pick(1).unwrap();
        assert_eq!(c.state(), ComposerState::Composing);
        assert_eq!(c.price(), Decimal::new(2999, 2));
        assert!(c.chosen().is_empty());

        c.add().unwrap();
        assert_eq!(c.state(), ComposerState::HasSelections);
        assert_eq!(c.candidate(), 0);
        let chosen = c.chosen();
        assert_eq!(chosen.len(), 1);
        assert_eq!((chosen[0].service_id, chosen[0].price), (1, Decimal::new(2999, 2)));
        assert_eq!(pool_names(&c), ["Smog Check"]);
        assert_eq!(c.total(), Decimal::new(2999, 2));

        let repo = MockAppointmentRepository::default();
        let id = c.submit(&repo).await.unwrap();
        assert_eq!(c.state(), ComposerState::Saved(id));
        let sent = repo.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(serde_json::to_value(&sent[0]).unwrap(), serde_json::json!({
            "vehicleId": 7, "statusId": 1, "notes": "",
            "services": [{ "serviceId": 1, "price": 29.99 }]
        }));
    }

    #[tokio::test]
    async fn add_without_candidate_is_field_error() {
        let mut c = opened(shop()).await;
        let err = c.add().unwrap_err();
        assert!(matches!(err, WorkflowError::Validation(ref n) if n.key == "service" && n.message == SELECT_SERVICE_MESSAGE));
        assert_eq!(c.errors().len(), 1);
        assert_eq!(c.state(), ComposerState::Ready);
        assert_eq!(c.pool().len(), 3);

        // unknown id auto-populates zero and still cannot be added
        c.pick(99).unwrap();
        assert_eq!(c.price(), Decimal::ZERO);
        assert!(c.add().is_err());
        assert!(c.chosen().is_empty());

        c.pick(1).unwrap();
        c.add().unwrap();
        assert!(c.errors().is_empty());
    }

    #[tokio::test]
    async fn remove_returns_service_to_sorted_pool() {
        let mut c = opened(shop()).await;
        assert_eq!(pool_names(&c), ["Brake Inspection", "Oil Change", "Smog Check"]);
        for id in [3, 2] {
            c.pick(id).unwrap();
            c.add().unwrap();
        }
        assert_eq!(pool_names(&c), ["Oil Change"]);
        assert_eq!(c.total(), Decimal::new(6450, 2));

        assert!(c.remove(3).unwrap());
        assert_eq!(pool_names(&c), ["Brake Inspection", "Oil Change"]);
        assert!(!c.remove(3).unwrap());
        assert_eq!(c.total(), Decimal::new(495, 1));
    }

    #[tokio::test]
    async fn chosen_service_cannot_be_added_twice() {
        let mut c = opened(shop()).await;
        c.pick(1).unwrap();
        c.add().unwrap();
        c.pick(1).unwrap();
        assert!(c.add().is_err());
        assert_eq!(c.chosen().len(), 1);
    }

    #[tokio::test]
    async fn operator_price_and_notes_are_snapshotted() {
        let mut c = opened(shop()).await;
        c.pick(1).unwrap();
        c.set_price(Decimal::new(2500, 2)).unwrap();
        c.set_item_notes("  synthetic  ").unwrap();
        c.add().unwrap();
        c.set_notes("customer waiting").unwrap();
        c.set_status(2).unwrap();
        let req = c.request().unwrap();
        assert_eq!(req.services[0].price, Decimal::new(2500, 2));
        assert_eq!(req.services[0].notes.as_deref(), Some("synthetic"));
        assert_eq!(req.status_id, 2);
        assert_eq!(req.notes, "customer waiting");

        c.pick(2).unwrap();
        c.set_price(Decimal::new(-1, 0)).unwrap();
        assert!(matches!(c.add(), Err(WorkflowError::Validation(n)) if n.key == "price"));
        assert!(c.set_status(42).is_err());
    }

    #[tokio::test]
    async fn empty_submit_never_reaches_store() {
        let mut c = opened(shop()).await;
        let repo = MockAppointmentRepository::default();
        let err = c.submit(&repo).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Validation(ref n) if n.key == "services"));
        assert_eq!(c.state(), ComposerState::ValidationError);
        assert!(repo.requests().is_empty());

        // editing recovers from the error state
        c.pick(1).unwrap();
        assert_eq!(c.state(), ComposerState::Composing);
    }

    #[tokio::test]
    async fn store_failure_restores_previous_state() {
        let mut c = opened(shop()).await;
        c.pick(1).unwrap();
        c.add().unwrap();
        let err = c.submit(&MockAppointmentRepository::failing()).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Service(_)));
        assert_eq!(c.state(), ComposerState::HasSelections);
        assert_eq!(c.chosen().len(), 1);
    }

    #[tokio::test]
    async fn failed_load_leaves_composer_idle() {
        let services = ServiceService::new(Arc::new(MockServiceCatalogRepository::with(shop())));
        let statuses = StatusService::new(Arc::new(MockStatusRepository::failing()));
        let mut c = AppointmentComposer::new();
        assert!(c.open(civic(), &services, &statuses).await.is_err());
        assert_eq!(c.state(), ComposerState::Idle);
        assert!(c.pool().is_empty());
        assert!(matches!(c.pick(1), Err(WorkflowError::NotReady(ComposerState::Idle))));

        let services = ServiceService::new(Arc::new(MockServiceCatalogRepository::failing()));
        let statuses = StatusService::new(Arc::new(MockStatusRepository::seeded()));
        assert!(c.open(civic(), &services, &statuses).await.is_err());
        assert_eq!(c.state(), ComposerState::Idle);
    }

    #[tokio::test]
    async fn default_status_falls_back_to_first() {
        let services = ServiceService::new(Arc::new(MockServiceCatalogRepository::with(shop())));
        let statuses = StatusService::new(Arc::new(MockStatusRepository::with(vec![
            StatusModel { status_id: 5, status_name: "Waiting".into() },
        ])));
        let mut c = AppointmentComposer::new();
        c.open(civic(), &services, &statuses).await.unwrap();
        assert_eq!(c.status_id(), 5);
        assert_eq!(c.vehicle().unwrap().description(), "2012 Honda Civic");
    }

    #[tokio::test]
    async fn saved_composer_rejects_edits_until_cancelled() {
        let mut c = opened(shop()).await;
        c.pick(1).unwrap();
        c.add().unwrap();
        c.submit(&MockAppointmentRepository::default()).await.unwrap();
        assert!(c.pick(2).is_err());
        c.cancel();
        assert_eq!(c.state(), ComposerState::Idle);
        assert!(c.vehicle().is_none());
    }
}
