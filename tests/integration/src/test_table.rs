//! Table lifecycle tests against a running server.

#[cfg(test)]
mod tests {
    use dynadoc::{KeySchemaElement, KeyType, Options, Predicates, StoreErrorCode};

    use crate::{
        cleanup_table, create_document_table, document_client, document_table_definition,
        test_table_name,
    };

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_table_with_schema_and_index() {
        let client = document_client(&test_table_name("crtbl"));

        let description = client
            .create_table(document_table_definition())
            .await
            .unwrap();

        assert_eq!(description.table_name.as_deref(), Some(client.table()));
        assert_eq!(
            description.key_schema,
            vec![
                KeySchemaElement::new("name", KeyType::Hash),
                KeySchemaElement::new("id", KeyType::Range),
            ]
        );

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_delete_table() {
        let client = document_client(&test_table_name("deltbl"));
        create_document_table(&client).await.unwrap();

        let description = client.delete_table().await.unwrap();
        assert_eq!(description.table_name.as_deref(), Some(client.table()));

        // Queries against the deleted table must fail.
        let error = client
            .query(&Predicates::equalities([("name", "foo")]), &Options::new())
            .await
            .unwrap_err();
        let store_error = error.as_store_error().expect("store reported the failure");
        assert_eq!(store_error.code, StoreErrorCode::ResourceNotFoundException);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_duplicate_table_creation() {
        let client = document_client(&test_table_name("duptbl"));
        create_document_table(&client).await.unwrap();

        let error = client
            .create_table(document_table_definition())
            .await
            .unwrap_err();
        let store_error = error.as_store_error().expect("store reported the failure");
        assert_eq!(store_error.code, StoreErrorCode::ResourceInUseException);

        // Cleanup.
        cleanup_table(&client).await;
    }
}
