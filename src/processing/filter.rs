//! User filtering.

use crate::types::User;

/// Returns the users whose age is strictly greater than `min_age`.
///
/// Relative input order is preserved; an empty input yields an empty output.
pub fn users_older_than(users: &[User], min_age: i64) -> Vec<User> {
    users.iter().filter(|u| u.age > min_age).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::users_older_than;
    use crate::types::User;

    fn sample_users() -> Vec<User> {
        vec![
            User::new(1, "Ivan", 18),
            User::new(2, "Anna", 25),
            User::new(3, "Bo", 30),
            User::new(4, "Lena", 21),
        ]
    }

    #[test]
    fn keeps_only_strictly_older_users_in_order() {
        let users = sample_users();
        let out = users_older_than(&users, 21);

        assert_eq!(out, vec![User::new(2, "Anna", 25), User::new(3, "Bo", 30)]);
        // Original unchanged
        assert_eq!(users.len(), 4);
    }

    #[test]
    fn threshold_is_exclusive() {
        let users = sample_users();
        let out = users_older_than(&users, 20);
        assert!(out.iter().any(|u| u.id == 4));
        assert!(users_older_than(&users, 30).is_empty());
    }

    #[test]
    fn result_is_ordered_subset_for_every_threshold() {
        let users = sample_users();
        for t in 0..=35 {
            let out = users_older_than(&users, t);
            assert!(out.iter().all(|u| u.age > t));
            let mut it = users.iter();
            assert!(out.iter().all(|u| it.any(|x| x == u)));
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(users_older_than(&[], 0).is_empty());
    }
}
