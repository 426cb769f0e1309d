//! Company repository.

use placement_core::entities::{Company, NewCompany};
use placement_core::stats::CompanyStats;

use crate::backend::{Query, TableBackend};
use crate::error::StoreError;
use crate::rows::CompanyInsert;
use crate::service::RecordStore;
use crate::updates::CompanyUpdate;

fn partners_query() -> Query {
    Query::new()
        .eq("is_partner", true)
        .order_desc("placement_count")
}

impl<B: TableBackend> RecordStore<B> {
    /// Partner companies by descending placement count. Empty on failure.
    pub async fn list_partner_companies(&self) -> Vec<Company> {
        self.list(&partners_query()).await
    }

    pub async fn try_list_partner_companies(&self) -> Result<Vec<Company>, StoreError> {
        self.try_list(&partners_query()).await
    }

    /// Every company, newest first. Empty on failure.
    pub async fn list_companies(&self) -> Vec<Company> {
        self.list(&Query::newest_first()).await
    }

    pub async fn try_list_companies(&self) -> Result<Vec<Company>, StoreError> {
        self.try_list(&Query::newest_first()).await
    }

    pub async fn get_company(&self, id: &str) -> Option<Company> {
        self.get(id).await
    }

    pub async fn try_get_company(&self, id: &str) -> Result<Option<Company>, StoreError> {
        self.try_get(id).await
    }

    /// # Errors
    ///
    /// Propagates any backend or decode error.
    pub async fn create_company(&self, company: &NewCompany) -> Result<Company, StoreError> {
        self.insert(&CompanyInsert::from(company)).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or any backend error.
    pub async fn update_company(
        &self,
        id: &str,
        update: &CompanyUpdate,
    ) -> Result<Company, StoreError> {
        self.patch(id, update).await
    }

    pub async fn delete_company(&self, id: &str) -> bool {
        self.remove::<Company>(id).await
    }

    pub async fn try_delete_company(&self, id: &str) -> Result<(), StoreError> {
        self.try_remove::<Company>(id).await
    }

    /// Totals over every company. Zeros on failure.
    pub async fn company_stats(&self) -> CompanyStats {
        CompanyStats::from_companies(&self.list_companies().await)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::repos::fixtures::{new_company, store};
    use crate::updates::CompanyUpdateBuilder;

    #[tokio::test]
    async fn partners_sorted_by_placements() {
        let store = store();
        for (name, count, partner) in [
            ("tcs", 150, true),
            ("acme", 900, false),
            ("wipro", 300, true),
        ] {
            store
                .create_company(&new_company(name, count, partner))
                .await
                .unwrap();
        }
        let names: Vec<_> = store
            .list_partner_companies()
            .await
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["wipro", "tcs"]);
        assert_eq!(store.list_companies().await.len(), 3);
    }

    #[tokio::test]
    async fn stats_sum_placements_and_partners() {
        let store = store();
        store.create_company(&new_company("tcs", 150, true)).await.unwrap();
        store.create_company(&new_company("acme", 50, false)).await.unwrap();
        assert_eq!(
            store.company_stats().await,
            CompanyStats {
                total_companies: 2,
                total_placements: 200,
                active_partners: 1,
            }
        );
    }

    #[tokio::test]
    async fn stats_are_zero_on_failure() {
        let store = store();
        store.backend().set_unavailable(true);
        assert_eq!(store.company_stats().await, CompanyStats::default());
    }

    #[tokio::test]
    async fn update_can_set_and_clear_website() {
        let store = store();
        let company = store.create_company(&new_company("tcs", 1, true)).await.unwrap();
        let with_site = store
            .update_company(
                &company.id,
                &CompanyUpdateBuilder::new()
                    .website_url(Some("https://tcs.com".into()))
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(with_site.website_url.as_deref(), Some("https://tcs.com"));

        let cleared = store
            .update_company(&company.id, &CompanyUpdateBuilder::new().website_url(None).build())
            .await
            .unwrap();
        assert_eq!(cleared.website_url, None);
        assert_eq!(cleared.placement_count, 1);
    }

    #[tokio::test]
    async fn delete_then_get_is_none() {
        let store = store();
        let company = store.create_company(&new_company("tcs", 1, true)).await.unwrap();
        assert!(store.delete_company(&company.id).await);
        assert!(store.try_get_company(&company.id).await.unwrap().is_none());
    }
}
