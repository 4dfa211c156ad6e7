//! Admin gate. Deliberately not a real security boundary: the menu board
//! runs on a device behind the counter, and the gate only keeps customers
//! out of the editor. Fixed credentials, no lockout, no hashing.

const ADMIN_USERNAME: &str = "esi";
const ADMIN_PASSWORD: &str = "123123123";

/// Whether the supplied credentials unlock the admin view.
#[must_use]
pub fn verify_admin(username: &str, password: &str) -> bool {
    username == ADMIN_USERNAME && password == ADMIN_PASSWORD
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
