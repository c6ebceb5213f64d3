//! Document lifecycle tests against a running server.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use dynadoc::Options;

    use crate::{cleanup_table, create_document_table, document_client, test_table_name};

    // -----------------------------------------------------------------------
    // Create / get
    // -----------------------------------------------------------------------

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_document_with_generated_id() {
        let client = document_client(&test_table_name("create"));
        create_document_table(&client).await.unwrap();

        let created = client
            .create(json!({"name": "foo", "number": "5", "sort": "A"}), &Options::new())
            .await
            .unwrap();

        assert_eq!(created["name"], "foo");
        let id = created["id"].as_str().unwrap();
        assert!(!id.is_empty());

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_get_created_document() {
        let client = document_client(&test_table_name("get"));
        create_document_table(&client).await.unwrap();

        let created = client
            .create(json!({"name": "foo", "number": "5"}), &Options::new())
            .await
            .unwrap();

        let found = client
            .get(json!({"name": "foo", "id": created["id"]}))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found["name"], "foo");
        assert_eq!(found["number"], "5");
        assert_eq!(found["id"], created["id"]);

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_none_for_missing_document() {
        let client = document_client(&test_table_name("miss"));
        create_document_table(&client).await.unwrap();

        let found = client
            .get(json!({"name": "ghost", "id": "no-such-id"}))
            .await
            .unwrap();

        assert!(found.is_none());

        // Cleanup.
        cleanup_table(&client).await;
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_merge_update_body_into_document() {
        let client = document_client(&test_table_name("update"));
        create_document_table(&client).await.unwrap();

        let created = client
            .create(json!({"name": "foo", "number": "5", "sort": "A"}), &Options::new())
            .await
            .unwrap();
        let key = json!({"name": "foo", "id": created["id"]});

        let updated = client
            .update(
                key.clone(),
                json!({"name": "foo", "id": created["id"], "size": 5, "sort": "B"}),
            )
            .await
            .unwrap();

        assert_eq!(updated["name"], "foo");
        assert_eq!(updated["size"], 5);
        assert_eq!(updated["sort"], "B");
        // Attributes absent from the body keep their stored values.
        assert_eq!(updated["number"], "5");

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_upsert_key_only_document_for_empty_body() {
        let client = document_client(&test_table_name("upsert"));
        create_document_table(&client).await.unwrap();

        let key = json!({"name": "bare", "id": "1"});
        let updated = client.update(key.clone(), key.clone()).await.unwrap();

        assert_eq!(updated, key);
        assert!(client.get(key).await.unwrap().is_some());

        // Cleanup.
        cleanup_table(&client).await;
    }

    // -----------------------------------------------------------------------
    // Conditional create
    // -----------------------------------------------------------------------

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_overwrite_guarded_by_condition() {
        let client = document_client(&test_table_name("guard"));
        create_document_table(&client).await.unwrap();

        let created = client
            .create(json!({"name": "foo"}), &Options::new())
            .await
            .unwrap();

        let options = Options::new()
            .conditional("attribute_not_exists(#name) AND attribute_not_exists(id)")
            .attribute("#name", "name");
        let error = client
            .create(json!({"name": "foo", "id": created["id"]}), &options)
            .await
            .unwrap_err();

        assert!(error.is_conditional_check_failed(), "unexpected error: {error}");
        assert!(error.to_string().contains("ConditionalCheckFailedException"));

        // Cleanup.
        cleanup_table(&client).await;
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_delete_document() {
        let client = document_client(&test_table_name("delete"));
        create_document_table(&client).await.unwrap();

        let created = client
            .create(json!({"name": "foo"}), &Options::new())
            .await
            .unwrap();
        let key = json!({"name": "foo", "id": created["id"]});

        client.delete(key.clone()).await.unwrap();

        assert!(client.get(key).await.unwrap().is_none());

        // Cleanup.
        cleanup_table(&client).await;
    }
}
