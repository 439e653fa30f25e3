use graftline_core::models::dashboard::DashboardStats;
use graftline_core::models::ivr::IvrRequestRecord;
use graftline_core::models::lead::ContactLead;
use tracing::{info, warn};

use crate::error::ClientError;

/// Thin synchronous client for the portal backend. One request per call, JSON
/// in and out; callers wrap results in [`crate::state::FetchState`].
pub struct PortalClient {
    base_url: String,
    agent: ureq::Agent,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    /// Fetch a facility's IVR records. The caller gets them as deserialized;
    /// ordering and status classification are the projection layer's job.
    pub fn fetch_ivr_history(
        &self,
        facility_npi: &str,
    ) -> Result<Vec<IvrRequestRecord>, ClientError> {
        let url = format!("{}/api/ivr-requests", self.base_url);
        let mut response = self
            .agent
            .get(&url)
            .query("facilityNpi", facility_npi)
            .call()
            .inspect_err(|e| warn!(facility_npi, error = %e, "ivr history fetch failed"))?;

        let records: Vec<IvrRequestRecord> = response.body_mut().read_json()?;
        info!(facility_npi, count = records.len(), "fetched ivr history");
        Ok(records)
    }

    pub fn fetch_dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        let url = format!("{}/api/dashboard/stats", self.base_url);
        let mut response = self
            .agent
            .get(&url)
            .call()
            .inspect_err(|e| warn!(error = %e, "dashboard stats fetch failed"))?;

        let stats: DashboardStats = response.body_mut().read_json()?;
        info!(total = stats.total_requests, "fetched dashboard stats");
        Ok(stats)
    }

    /// Submit a contact lead. Validation runs first and blocks the request
    /// entirely on failure — nothing is partially submitted.
    pub fn submit_lead(&self, lead: &ContactLead) -> Result<(), ClientError> {
        let errors = lead.validate();
        if !errors.is_empty() {
            return Err(ClientError::Validation(errors));
        }

        let url = format!("{}/api/leads", self.base_url);
        self.agent
            .post(&url)
            .send_json(lead)
            .inspect_err(|e| warn!(error = %e, "lead submission failed"))?;

        info!(facility = %lead.facility, "lead submitted");
        Ok(())
    }

    /// Submit a new IVR request. The backend assigns `id` and `dateCreated`
    /// and echoes the persisted record back.
    pub fn submit_ivr_request(
        &self,
        record: &IvrRequestRecord,
    ) -> Result<IvrRequestRecord, ClientError> {
        let url = format!("{}/api/ivr-requests", self.base_url);
        let mut response = self
            .agent
            .post(&url)
            .send_json(record)
            .inspect_err(|e| warn!(error = %e, "ivr submission failed"))?;

        let created: IvrRequestRecord = response.body_mut().read_json()?;
        info!(id = ?created.id, "ivr request submitted");
        Ok(created)
    }
}
