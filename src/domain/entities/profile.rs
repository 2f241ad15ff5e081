//! # User Profile
//!
//! Account holder details, security toggles and achievements.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Security and notification preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySettings {
    /// Two-factor authentication enabled.
    pub two_factor_auth: bool,
    /// Biometric unlock enabled.
    pub biometric_auth: bool,
    /// Email notifications enabled.
    pub email_notifications: bool,
    /// SMS notifications enabled.
    pub sms_notifications: bool,
    /// Trading alerts enabled.
    pub trading_alerts: bool,
    /// Market update digests enabled.
    pub market_updates: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_auth: true,
            biometric_auth: true,
            email_notifications: true,
            sms_notifications: false,
            trading_alerts: true,
            market_updates: true,
        }
    }
}

/// Progress state of one achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementState {
    /// Earned on the given date.
    Earned {
        /// When the achievement was earned.
        on: Timestamp,
    },
    /// In progress towards the goal, as a percentage.
    InProgress {
        /// Completion percentage in `[0, 100]`.
        percent: Decimal,
    },
}

/// A gamification badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Badge title.
    pub title: String,
    /// What the badge rewards.
    pub description: String,
    /// Earned or in-progress state.
    pub state: AchievementState,
}

impl Achievement {
    /// Returns true if the badge has been earned.
    #[must_use]
    pub fn is_earned(&self) -> bool {
        matches!(self.state, AchievementState::Earned { .. })
    }
}

/// Editable fields of the personal-info tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New full name, if changing.
    pub full_name: Option<String>,
    /// New email, if changing.
    pub email: Option<String>,
    /// New phone number, if changing.
    pub phone: Option<String>,
    /// New street address, if changing.
    pub address: Option<String>,
    /// New country, if changing.
    pub country: Option<String>,
}

/// The account holder's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Country of residence.
    pub country: String,
    /// Security and notification toggles.
    pub security: SecuritySettings,
    /// Earned and in-progress badges.
    pub achievements: Vec<Achievement>,
}

impl UserProfile {
    /// Creates a profile with default settings and no achievements.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` if name or email is empty.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        let full_name = full_name.into();
        let email = email.into();
        if full_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "full name must not be empty".to_string(),
            ));
        }
        if email.trim().is_empty() || !email.contains('@') {
            return Err(DomainError::ValidationError(
                "email must contain '@'".to_string(),
            ));
        }
        Ok(Self {
            full_name,
            email,
            phone: phone.into(),
            address: address.into(),
            country: country.into(),
            security: SecuritySettings::default(),
            achievements: Vec::new(),
        })
    }

    /// Applies an edit from the profile form.
    ///
    /// Only the provided fields change; blank values are rejected for name
    /// and email.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationError` for blank name or malformed
    /// email.
    pub fn apply(&mut self, update: ProfileUpdate) -> DomainResult<()> {
        if let Some(name) = update.full_name {
            if name.trim().is_empty() {
                return Err(DomainError::ValidationError(
                    "full name must not be empty".to_string(),
                ));
            }
            self.full_name = name;
        }
        if let Some(email) = update.email {
            if !email.contains('@') {
                return Err(DomainError::ValidationError(
                    "email must contain '@'".to_string(),
                ));
            }
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        Ok(())
    }

    /// Returns how many achievements have been earned.
    #[must_use]
    pub fn earned_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.is_earned()).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new(
            "Alex Johnson",
            "alex.johnson@email.com",
            "+60 12-345 6789",
            "123 Blockchain Street, Kuala Lumpur",
            "Malaysia",
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_name_and_bad_email() {
        assert!(UserProfile::new("", "a@b.com", "", "", "").is_err());
        assert!(UserProfile::new("Alex", "not-an-email", "", "", "").is_err());
    }

    #[test]
    fn partial_update_leaves_other_fields() {
        let mut p = profile();
        p.apply(ProfileUpdate {
            phone: Some("+60 19-999 0000".to_string()),
            ..ProfileUpdate::default()
        })
        .unwrap();
        assert_eq!(p.phone, "+60 19-999 0000");
        assert_eq!(p.full_name, "Alex Johnson");
    }

    #[test]
    fn update_rejects_blank_name() {
        let mut p = profile();
        let result = p.apply(ProfileUpdate {
            full_name: Some("   ".to_string()),
            ..ProfileUpdate::default()
        });
        assert!(result.is_err());
        assert_eq!(p.full_name, "Alex Johnson");
    }

    #[test]
    fn earned_count_ignores_in_progress() {
        let mut p = profile();
        p.achievements = vec![
            Achievement {
                title: "First Trade".to_string(),
                description: "Completed your first trade".to_string(),
                state: AchievementState::Earned {
                    on: Timestamp::now(),
                },
            },
            Achievement {
                title: "Whale Status".to_string(),
                description: "Portfolio value reached RM 50,000".to_string(),
                state: AchievementState::InProgress {
                    percent: Decimal::new(497, 1),
                },
            },
        ];
        assert_eq!(p.earned_count(), 1);
    }
}
