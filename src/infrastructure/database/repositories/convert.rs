//! Entity ↔ domain conversions shared by the repositories

use crate::domain::{Creator, GpsPing, Lead, Photo, User, UserRole};
use crate::infrastructure::database::entities::{gps_ping, lead, photo, user};

pub(super) fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Agent => UserRole::Agent,
        user::UserRole::Admin => UserRole::Admin,
    }
}

pub(super) fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Agent => user::UserRole::Agent,
        UserRole::Admin => user::UserRole::Admin,
    }
}

pub(super) fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        full_name: model.full_name,
        role: entity_role_to_domain(model.role),
        created_at: model.created_at,
    }
}

/// Only id, full_name and role leave the users table through a join.
pub(super) fn creator_of(model: Option<user::Model>) -> Option<Creator> {
    model.map(|u| Creator {
        id: u.id,
        full_name: u.full_name,
        role: entity_role_to_domain(u.role),
    })
}

pub(super) fn photo_to_domain((p, creator): (photo::Model, Option<user::Model>)) -> Photo {
    Photo {
        id: p.id,
        user_id: p.user_id,
        image_url: p.image_url,
        latitude: p.latitude,
        longitude: p.longitude,
        description: p.description,
        created_at: p.created_at,
        creator: creator_of(creator),
    }
}

pub(super) fn lead_to_domain((l, creator): (lead::Model, Option<user::Model>)) -> Lead {
    Lead {
        id: l.id,
        user_id: l.user_id,
        contact_name: l.contact_name,
        contact_phone: l.contact_phone,
        contact_email: l.contact_email,
        business_name: l.business_name,
        latitude: l.latitude,
        longitude: l.longitude,
        notes: l.notes,
        created_at: l.created_at,
        creator: creator_of(creator),
    }
}

pub(super) fn ping_to_domain((g, creator): (gps_ping::Model, Option<user::Model>)) -> GpsPing {
    GpsPing {
        id: g.id,
        user_id: g.user_id,
        latitude: g.latitude,
        longitude: g.longitude,
        activity_type: g.activity_type,
        timestamp: g.timestamp,
        creator: creator_of(creator),
    }
}
