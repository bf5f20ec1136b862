use diesel::prelude::*;

use crate::domain::service::{
    NewService as DomainNewService, Service as DomainService, UpdateService as DomainUpdateService,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::services)]
/// Diesel model for [`crate::domain::service::Service`].
pub struct Service {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub capacity: i32,
    pub price: f64,
    pub active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::services)]
/// Insertable form of [`Service`].
pub struct NewService<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub capacity: i32,
    pub price: f64,
    pub active: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::services)]
/// Data used when updating a [`Service`] record.
pub struct UpdateService<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub capacity: Option<i32>,
    pub price: Option<f64>,
    pub active: Option<bool>,
}

impl From<Service> for DomainService {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            description: service.description,
            capacity: service.capacity,
            price: service.price,
            active: service.active,
        }
    }
}

impl<'a> From<&'a DomainNewService> for NewService<'a> {
    fn from(service: &'a DomainNewService) -> Self {
        Self {
            name: &service.name,
            description: &service.description,
            capacity: service.capacity,
            price: service.price,
            active: service.active,
        }
    }
}

impl<'a> From<&'a DomainUpdateService> for UpdateService<'a> {
    fn from(updates: &'a DomainUpdateService) -> Self {
        Self {
            name: updates.name.as_deref(),
            description: updates.description.as_deref(),
            capacity: updates.capacity,
            price: updates.price,
            active: updates.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_update_skips_untouched_fields() {
        let domain = DomainUpdateService {
            price: Some(75.0),
            ..DomainUpdateService::default()
        };
        let update: UpdateService = (&domain).into();
        assert_eq!(update.price, Some(75.0));
        assert!(update.name.is_none());
        assert!(update.active.is_none());
    }
}
