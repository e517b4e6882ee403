//! The resolved caller of a marketplace operation.
//!
//! An [`Actor`] is produced once per request from a verified credential and
//! passed explicitly into every domain operation. Role-specific profile ids
//! are resolved at the same time so that operations never have to look them
//! up again.

use crate::enums::common::UserRole;
use brandfluence_error::{domain::DomainError, DomainResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ActorKind {
    Brand { brand_id: Option<i32> },
    Influencer { influencer_id: Option<i32> },
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub user_id: i32,
    #[serde(flatten)]
    pub kind: ActorKind,
}

impl Actor {
    pub fn brand(user_id: i32, brand_id: Option<i32>) -> Self {
        Self {
            user_id,
            kind: ActorKind::Brand { brand_id },
        }
    }

    pub fn influencer(user_id: i32, influencer_id: Option<i32>) -> Self {
        Self {
            user_id,
            kind: ActorKind::Influencer { influencer_id },
        }
    }

    pub fn admin(user_id: i32) -> Self {
        Self {
            user_id,
            kind: ActorKind::Admin,
        }
    }

    pub fn role(&self) -> UserRole {
        match self.kind {
            ActorKind::Brand { .. } => UserRole::Brand,
            ActorKind::Influencer { .. } => UserRole::Influencer,
            ActorKind::Admin => UserRole::Admin,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self.kind, ActorKind::Admin)
    }

    /// The brand profile id, if the actor is a brand that has one
    #[inline]
    pub fn brand_id(&self) -> Option<i32> {
        match self.kind {
            ActorKind::Brand { brand_id } => brand_id,
            _ => None,
        }
    }

    /// The influencer profile id, if the actor is an influencer that has one
    #[inline]
    pub fn influencer_id(&self) -> Option<i32> {
        match self.kind {
            ActorKind::Influencer { influencer_id } => influencer_id,
            _ => None,
        }
    }

    pub fn require_role(&self, role: UserRole) -> DomainResult<()> {
        if self.role() == role {
            Ok(())
        } else {
            Err(DomainError::forbidden(format!("{role} role required")))
        }
    }

    pub fn require_admin(&self) -> DomainResult<()> {
        self.require_role(UserRole::Admin)
    }

    /// Brand profile id of a brand actor.
    ///
    /// Wrong role is `Forbidden`, a brand without a profile is `NotFound`.
    pub fn require_brand_profile(&self) -> DomainResult<i32> {
        match self.kind {
            ActorKind::Brand {
                brand_id: Some(id),
            } => Ok(id),
            ActorKind::Brand { brand_id: None } => Err(DomainError::not_found("brand profile")),
            _ => Err(DomainError::forbidden("brand role required")),
        }
    }

    /// Influencer profile id of an influencer actor.
    pub fn require_influencer_profile(&self) -> DomainResult<i32> {
        match self.kind {
            ActorKind::Influencer {
                influencer_id: Some(id),
            } => Ok(id),
            ActorKind::Influencer {
                influencer_id: None,
            } => Err(DomainError::not_found("influencer profile")),
            _ => Err(DomainError::forbidden("influencer role required")),
        }
    }
}
