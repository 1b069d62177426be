// vitrina/src/store/session.rs

use crate::store::state_cell::StateCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user's profile, as far as this core cares.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
  pub id: Uuid,
  pub email: String,
  pub display_name: Option<String>,
}

/// Authentication slice of the client store.
///
/// This is the derived `isAuthenticated` read the synchronizer gates on.
/// Sign-in/sign-out flows live elsewhere in the client; they only flip this
/// state through `sign_in` / `sign_out`.
#[derive(Clone, Default)]
pub struct Session {
  user: StateCell<Option<UserProfile>>,
}

impl Session {
  pub fn anonymous() -> Self {
    Self::default()
  }

  pub fn signed_in(user: UserProfile) -> Self {
    Self {
      user: StateCell::new(Some(user)),
    }
  }

  pub fn sign_in(&self, user: UserProfile) {
    self.user.replace(Some(user));
  }

  pub fn sign_out(&self) {
    self.user.replace(None);
  }

  pub fn is_authenticated(&self) -> bool {
    self.user.read().is_some()
  }

  pub fn current_user(&self) -> Option<UserProfile> {
    self.user.read().clone()
  }
}
