//! Scan and query tests against a running server.

#[cfg(test)]
mod tests {
    use dynadoc::{Options, Predicates};

    use crate::{
        cleanup_table, create_document_table, document_client, seed_documents, test_table_name,
    };

    // -----------------------------------------------------------------------
    // Scan
    // -----------------------------------------------------------------------

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_scan_all_documents() {
        let client = document_client(&test_table_name("scan"));
        create_document_table(&client).await.unwrap();
        seed_documents(&client).await.unwrap();

        let page = client.scan(&Options::new()).await.unwrap();

        assert_eq!(page.count, 3);
        assert!(page.items.iter().all(|item| item["name"].is_string()));

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_scan_with_filter() {
        let client = document_client(&test_table_name("scanfil"));
        create_document_table(&client).await.unwrap();
        let foo_id = seed_documents(&client).await.unwrap();

        let page = client
            .scan(&Options::new().filter(Predicates::equalities([("id", foo_id)])))
            .await
            .unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.items[0]["name"], "foo");

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_paginate_scan_with_limit_and_cursor() {
        let client = document_client(&test_table_name("scanpag"));
        create_document_table(&client).await.unwrap();
        seed_documents(&client).await.unwrap();

        let first = client.scan(&Options::new().limit(2)).await.unwrap();
        assert_eq!(first.count, 2);
        let cursor = first.last.expect("partial page carries a cursor");

        let second = client.scan(&Options::new().limit(2).last(cursor)).await.unwrap();
        assert_eq!(second.count, 1);
        assert!(second.last.is_none());

        // Cleanup.
        cleanup_table(&client).await;
    }

    // -----------------------------------------------------------------------
    // Query
    // -----------------------------------------------------------------------

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_query_by_primary_key() {
        let client = document_client(&test_table_name("query"));
        create_document_table(&client).await.unwrap();
        seed_documents(&client).await.unwrap();

        let page = client
            .query(&Predicates::equalities([("name", "foo")]), &Options::new())
            .await
            .unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.items[0]["name"], "foo");
        assert_eq!(page.items[0]["number"], "5");

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_empty_page_for_unmatched_key() {
        let client = document_client(&test_table_name("nomatch"));
        create_document_table(&client).await.unwrap();
        seed_documents(&client).await.unwrap();

        let page = client
            .query(&Predicates::equalities([("name", "ghost")]), &Options::new())
            .await
            .unwrap();

        assert_eq!(page.count, 0);
        assert!(page.items.is_empty());

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_query_with_filter() {
        let client = document_client(&test_table_name("queryfil"));
        create_document_table(&client).await.unwrap();
        seed_documents(&client).await.unwrap();

        let page = client
            .query(
                &Predicates::equalities([("name", "foo")]),
                &Options::new().filter(Predicates::equalities([("number", "5")])),
            )
            .await
            .unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.items[0]["name"], "foo");

        // Cleanup.
        cleanup_table(&client).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_query_secondary_index() {
        let client = document_client(&test_table_name("queryidx"));
        create_document_table(&client).await.unwrap();
        seed_documents(&client).await.unwrap();

        let page = client
            .query(
                &Predicates::equalities([("number", "5")]),
                &Options::new().index("SecIndex"),
            )
            .await
            .unwrap();

        // Keys-only projection still carries the table keys.
        assert_eq!(page.count, 1);
        assert_eq!(page.items[0]["name"], "foo");
        assert_eq!(page.items[0]["number"], "5");

        // Cleanup.
        cleanup_table(&client).await;
    }
}
