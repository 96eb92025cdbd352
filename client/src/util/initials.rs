//! Avatar fallback initials.

#[cfg(test)]
#[path = "initials_test.rs"]
mod initials_test;

use crate::net::types::User;

/// Initials shown when no avatar image is available.
///
/// With a name: first letter of each space-separated word, uppercased and cut
/// to two characters. Otherwise the uppercased first letter of the email.
#[must_use]
pub fn user_initials(user: &User) -> String {
    if let Some(name) = user.name() {
        let initials: String = name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_uppercase()
            .chars()
            .take(2)
            .collect();
        if !initials.is_empty() {
            return initials;
        }
    }
    user.email
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}
