//! Error handling integration tests
//!
//! Verifies that each failure class reaches the caller as its own error kind,
//! and that store errors pass through unchanged.

#[cfg(test)]
mod tests {
    use crate::assert_err;
    use crate::common::{AccountFactory, Directory};
    use yap_access::{AccessError, AccountId, AccountManager, StoreError};

    // ==================== Error Classes ====================

    /// Denial and veto stay distinguishable
    #[tokio::test]
    async fn test_forbidden_and_veto_are_distinct() {
        let k1 = AccountFactory::keeper();
        let e1 = AccountFactory::editor();
        let dir = Directory::seed(vec![k1.clone(), e1.clone()]);

        let denied = assert_err!(dir.manager.delete_account(&dir.context(&e1), k1.id).await);
        let vetoed = assert_err!(dir.manager.delete_account(&dir.context(&k1), k1.id).await);

        assert!(matches!(denied, AccessError::Forbidden(_)));
        assert!(!denied.is_veto());
        assert_eq!(denied.status_code(), 403);
        assert_eq!(denied.error_code(), "FORBIDDEN");

        assert!(vetoed.is_veto());
        assert_eq!(vetoed.status_code(), 304);
        assert_eq!(vetoed.error_code(), "NOT_MODIFIED");
    }

    /// Unknown roles are never normalized
    #[tokio::test]
    async fn test_unknown_role_is_bad_input() {
        let k1 = AccountFactory::keeper();
        let e1 = AccountFactory::editor();
        let dir = Directory::seed(vec![k1.clone(), e1.clone()]);

        for requested in ["Editor", "editor ", "admin", "owner"] {
            let err = assert_err!(
                dir.manager
                    .assign_role(&dir.context(&k1), e1.id, requested)
                    .await
            );
            assert!(matches!(err, AccessError::UnknownRole(ref r) if r == requested));
            assert_eq!(err.status_code(), 400);
        }
    }

    /// Missing accounts surface as store errors
    #[tokio::test]
    async fn test_missing_account_passes_through() {
        let k1 = AccountFactory::keeper();
        let dir = Directory::seed(vec![k1.clone()]);
        let ghost = AccountId::new();

        let err = assert_err!(dir.manager.delete_account(&dir.context(&k1), ghost).await);
        assert!(matches!(
            err,
            AccessError::Store(StoreError::NotFound(id)) if id == ghost
        ));

        let response = err.to_response();
        assert_eq!(response.error.code, "NOT_FOUND");
        assert_eq!(response.error.message, "Account not found");
    }

    /// Path-style ids are validated before use
    #[test]
    fn test_bad_account_id_is_bad_request() {
        let err = assert_err!(AccountManager::parse_account_id("42"));
        assert!(matches!(err, AccessError::BadRequest(_)));
        assert_eq!(err.status_code(), 400);
    }

    /// Error responses serialize to the standard envelope
    #[test]
    fn test_error_response_envelope() {
        let err = AccessError::forbidden("role 'reader' may not perform 'accounts.delete'");
        let json = serde_json::to_value(err.to_response()).unwrap();

        assert_eq!(json["error"]["code"], "FORBIDDEN");
        assert!(
            json["error"]["message"]
                .as_str()
                .unwrap()
                .contains("accounts.delete")
        );
        assert!(json["error"]["timestamp"].is_i64());
    }
}
