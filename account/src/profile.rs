//! Per-user profile record and its plan designation.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};

pub const PROFILE_TABLE: &str = "user_profiles";
pub const PLAN_COLUMN: &str = "user_type";

/// Row from the profile table, restricted to the columns the portal reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub user_type: String,
}

impl Profile {
    #[must_use]
    pub fn plan(&self) -> PlanType {
        PlanType::parse(&self.user_type)
    }
}

/// Subscription plan stored in `user_type`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlanType {
    #[default]
    Free,
    Active,
    /// Any value the portal does not recognise, kept verbatim for display.
    Other(String),
}

impl PlanType {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "FREE" => Self::Free,
            "ACTIVE" => Self::Active,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Free => "FREE",
            Self::Active => "ACTIVE",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// What the settings page knows about the current user's plan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded(PlanType),
    /// The profile read failed; the plan is genuinely not known.
    Unknown,
}

impl ProfileState {
    /// Fold a profile read into a state. A missing row means the default plan.
    pub fn from_lookup<E>(result: Result<Option<Profile>, E>) -> Self {
        match result {
            Ok(Some(profile)) => Self::Loaded(profile.plan()),
            Ok(None) => Self::Loaded(PlanType::Free),
            Err(_) => Self::Unknown,
        }
    }

    #[must_use]
    pub fn badge_label(&self) -> &str {
        match self {
            Self::Loading => "…",
            Self::Loaded(plan) => plan.label(),
            Self::Unknown => "UNKNOWN",
        }
    }

    /// CSS modifier for the plan badge.
    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Loaded(plan) if plan.is_premium() => "premium",
            Self::Loaded(_) => "free",
            Self::Loading | Self::Unknown => "unknown",
        }
    }
}
