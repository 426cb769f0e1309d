//! Testimonial repository.

use placement_core::entities::{NewTestimonial, Testimonial};

use crate::backend::{Query, TableBackend};
use crate::error::StoreError;
use crate::rows::TestimonialInsert;
use crate::service::RecordStore;
use crate::updates::TestimonialUpdate;

fn featured_query() -> Query {
    Query::newest_first().eq("is_featured", true)
}

impl<B: TableBackend> RecordStore<B> {
    /// Featured testimonials, newest first. Empty on failure.
    pub async fn list_featured_testimonials(&self) -> Vec<Testimonial> {
        self.list(&featured_query()).await
    }

    pub async fn try_list_featured_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        self.try_list(&featured_query()).await
    }

    pub async fn list_testimonials(&self) -> Vec<Testimonial> {
        self.list(&Query::newest_first()).await
    }

    pub async fn try_list_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        self.try_list(&Query::newest_first()).await
    }

    pub async fn get_testimonial(&self, id: &str) -> Option<Testimonial> {
        self.get(id).await
    }

    pub async fn try_get_testimonial(&self, id: &str) -> Result<Option<Testimonial>, StoreError> {
        self.try_get(id).await
    }

    /// # Errors
    ///
    /// Propagates any backend or decode error.
    pub async fn create_testimonial(
        &self,
        testimonial: &NewTestimonial,
    ) -> Result<Testimonial, StoreError> {
        self.insert(&TestimonialInsert::from(testimonial)).await
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or any backend error.
    pub async fn update_testimonial(
        &self,
        id: &str,
        update: &TestimonialUpdate,
    ) -> Result<Testimonial, StoreError> {
        self.patch(id, update).await
    }

    pub async fn delete_testimonial(&self, id: &str) -> bool {
        self.remove::<Testimonial>(id).await
    }

    pub async fn try_delete_testimonial(&self, id: &str) -> Result<(), StoreError> {
        self.try_remove::<Testimonial>(id).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::repos::fixtures::{new_testimonial, store};
    use crate::updates::TestimonialUpdateBuilder;

    #[tokio::test]
    async fn featured_filters_and_orders() {
        let store = store();
        store.create_testimonial(&new_testimonial("asha", true)).await.unwrap();
        store.create_testimonial(&new_testimonial("ravi", false)).await.unwrap();
        store.create_testimonial(&new_testimonial("meera", true)).await.unwrap();

        let names: Vec<_> = store
            .list_featured_testimonials()
            .await
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["meera", "asha"]);
        assert_eq!(store.list_testimonials().await.len(), 3);
    }

    #[tokio::test]
    async fn unfeature_removes_from_featured_list() {
        let store = store();
        let t = store.create_testimonial(&new_testimonial("asha", true)).await.unwrap();
        let updated = store
            .update_testimonial(&t.id, &TestimonialUpdateBuilder::new().is_featured(false).build())
            .await
            .unwrap();
        assert!(!updated.is_featured);
        assert_eq!(updated.message, t.message);
        assert!(store.list_featured_testimonials().await.is_empty());
    }

    #[tokio::test]
    async fn delete_fails_soft() {
        let store = store();
        store.backend().set_unavailable(true);
        assert!(!store.delete_testimonial("t-1").await);
        assert!(store.try_delete_testimonial("t-1").await.is_err());
    }
}
